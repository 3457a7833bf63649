use std::{fmt, ops::Index};

use super::{
    components::{Checker, Direction, Place},
    config::BoardConfig,
    error::{Error, GameResult},
    listener::ChangeListener,
};

/// Number of connected checkers needed to win.
pub const FOUR: usize = 4;

/// A Connect Four board of `width` slots, each `height` places deep.
///
/// Place `(0, 0)` is the top left corner; slot indices grow to the right and row indices
/// grow to the bottom. Each place holds either nothing or the identity of the player whose
/// checker sits there. Players are only ever compared with `==`.
///
/// Indices passed to the unchecked queries must be on the board; anything else is a bug in
/// the caller and panics. [`Board::place`] and [`Board::get`] are the checked counterparts.
pub struct Board<P = Checker> {
    config: BoardConfig,
    /// `cells[x][y]`; `None` marks an empty place.
    cells: Vec<Vec<Option<P>>>,
    winning_row: Vec<Place>,
    listeners: Vec<Box<dyn ChangeListener<P>>>,
}

impl<P: PartialEq> Board<P> {
    /// Create a new, empty board.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` if a dimension is zero or too large.
    pub fn new(config: BoardConfig) -> GameResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: BoardConfig) -> Self {
        let cells = (0..config.width)
            .map(|_| (0..config.height).map(|_| None).collect())
            .collect();
        Self {
            config,
            cells,
            winning_row: Vec::with_capacity(FOUR),
            listeners: Vec::new(),
        }
    }

    /// Dimensions this board was built with.
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Number of slots (columns).
    pub fn width(&self) -> usize {
        self.config.width
    }

    /// Number of places (rows) in each slot.
    pub fn height(&self) -> usize {
        self.config.height
    }

    /// Register `listener` as the only observer, replacing any registered before.
    pub fn set_change_listener(&mut self, listener: impl ChangeListener<P> + 'static) {
        self.listeners.clear();
        self.add_change_listener(listener);
    }

    /// Register another observer. Observers are notified in registration order.
    pub fn add_change_listener(&mut self, listener: impl ChangeListener<P> + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Remove every registered observer.
    pub fn clear_change_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Remove all checkers and forget the winning row.
    pub fn clear(&mut self) {
        log::trace!("clearing board");
        self.winning_row.clear();
        for slot in self.cells.iter_mut() {
            slot.iter_mut().for_each(|cell| *cell = None);
        }
    }

    /// Return true if a checker can still be dropped in `slot`.
    pub fn is_slot_open(&self, slot: usize) -> bool {
        self.cells[slot][0].is_none()
    }

    /// Return true if no more checkers fit in `slot`.
    pub fn is_slot_full(&self, slot: usize) -> bool {
        !self.is_slot_open(slot)
    }

    /// Are all places occupied?
    pub fn is_full(&self) -> bool {
        (0..self.width()).all(|slot| self.is_slot_full(slot))
    }

    /// Indices of the slots that still take a checker, left to right.
    pub fn open_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.width()).filter(|&slot| self.is_slot_open(slot))
    }

    /// Number of checkers on the board.
    pub fn checker_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Slide a checker of `player` into `slot` and return the row it settled in.
    ///
    /// The checker lands in the lowest empty place. If the slot is full nothing changes and
    /// `None` is returned. Registered listeners are notified before this returns.
    pub fn drop_in_slot(&mut self, slot: usize, player: P) -> Option<usize> {
        let Some(row) = self.cells[slot].iter().rposition(Option::is_none) else {
            log::debug!("slot {slot} is full");
            return None;
        };
        log::trace!("dropping checker in slot {slot}, row {row}");
        let cell = &mut self.cells[slot][row];
        *cell = Some(player);
        if let Some(player) = cell.as_ref() {
            for listener in self.listeners.iter_mut() {
                listener.checker_dropped(slot, row, player);
            }
        }
        Some(row)
    }

    /// Place a checker in the given slot, checking the move first. The slot is zero indexed.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` if the slot is outside the board dimensions.
    ///
    /// Returns `Error::ColumnFull` if there is no empty place left in the slot.
    pub fn place(&mut self, slot: usize, player: P) -> GameResult<usize> {
        if slot >= self.width() {
            return Err(Error::InvalidColumn {
                column: slot,
                width: self.width(),
            });
        }
        self.drop_in_slot(slot, player).ok_or(Error::ColumnFull(slot))
    }

    /// Is the place `(x, y)` empty?
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.cells[x][y].is_none()
    }

    /// Is the place `(x, y)` occupied?
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells[x][y].is_some()
    }

    /// Is the given place occupied?
    pub fn is_occupied_at(&self, place: Place) -> bool {
        self.is_occupied(place.x, place.y)
    }

    /// Is the place `(x, y)` occupied by `player`?
    pub fn is_occupied_by(&self, x: usize, y: usize, player: &P) -> bool {
        self.cells[x][y].as_ref() == Some(player)
    }

    /// The player occupying `(x, y)`, if any.
    pub fn player_at(&self, x: usize, y: usize) -> Option<&P> {
        self.cells[x][y].as_ref()
    }

    /// Get the player at position `(x, y)`, checking the indices first.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPlace` if the place is not on the board.
    pub fn get(&self, x: usize, y: usize) -> GameResult<Option<&P>> {
        if !self.contains(Place::new(x, y)) {
            return Err(Error::InvalidPlace { column: x, row: y });
        }
        Ok(self.player_at(x, y))
    }

    /// Return true if `player` has four connected checkers anywhere on the board.
    ///
    /// Every place is tried as an anchor in storage order (`cells[x][y]`: slot by slot, and
    /// top to bottom within a slot), with the directions of [`Direction::ALL`] in order. This
    /// is not row-by-row order; changing it changes which run is reported when several exist. The first run found is recorded and can
    /// be read back with [`Board::winning_row`]. If there is none, the recorded row is left
    /// as it was.
    pub fn is_won_by(&mut self, player: &P) -> bool {
        for x in 0..self.width() {
            for y in 0..self.height() {
                for direction in Direction::ALL {
                    if let Some(row) = self.run_through(Place::new(x, y), direction, player) {
                        log::debug!("four connected {direction:?} through ({x}, {y})");
                        self.winning_row = row;
                        return true;
                    }
                }
            }
        }
        false
    }

    /// The places of the last winning row found, in the order they were discovered.
    /// Empty until [`Board::is_won_by`] finds one.
    pub fn winning_row(&self) -> &[Place] {
        &self.winning_row
    }

    /// Return true if a winning row has been found since the last clear.
    pub fn has_winning_row(&self) -> bool {
        !self.winning_row.is_empty()
    }

    /// Four checkers of `player` in `direction` collected around `anchor`.
    ///
    /// Walks backward from the anchor first, then forward from the place past it, stopping
    /// once four are collected. The forward walk runs even when the anchor itself is not
    /// owned by `player`, so an empty anchor followed by four checkers still yields a run.
    /// On runs longer than four the window reported depends on the anchor.
    fn run_through(&self, anchor: Place, direction: Direction, player: &P) -> Option<Vec<Place>> {
        let (dx, dy) = direction.delta();
        let mut row = Vec::with_capacity(FOUR);
        self.walk(Some(anchor), (-dx, -dy), player, &mut row);
        self.walk(self.step(anchor, (dx, dy)), (dx, dy), player, &mut row);
        (row.len() >= FOUR).then_some(row)
    }

    fn walk(&self, from: Option<Place>, delta: (isize, isize), player: &P, row: &mut Vec<Place>) {
        let mut current = from;
        while let Some(place) = current {
            if row.len() >= FOUR || !self.is_occupied_by(place.x, place.y, player) {
                break;
            }
            row.push(place);
            current = self.step(place, delta);
        }
    }

    fn step(&self, place: Place, (dx, dy): (isize, isize)) -> Option<Place> {
        place.offset(dx, dy).filter(|next| self.contains(*next))
    }

    fn contains(&self, place: Place) -> bool {
        place.x < self.width() && place.y < self.height()
    }
}

impl<P: PartialEq> Default for Board<P> {
    /// A standard 7x6 board.
    fn default() -> Self {
        Self::with_valid_config(BoardConfig::default())
    }
}

impl<P> Index<Place> for Board<P> {
    type Output = Option<P>;

    fn index(&self, place: Place) -> &Self::Output {
        &self.cells[place.x][place.y]
    }
}

impl<P: fmt::Debug> fmt::Debug for Board<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("config", &self.config)
            .field("cells", &self.cells)
            .field("winning_row", &self.winning_row)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl fmt::Display for Board<Checker> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        for x in 1..=self.width() {
            if x < 10 {
                write!(f, "-{x}-")?;
            } else {
                write!(f, "{x}-")?;
            }
        }
        writeln!(f, "#")?;
        for y in 0..self.height() {
            write!(f, "|")?;
            for x in 0..self.width() {
                match self.player_at(x, y) {
                    Some(checker) => write!(f, " {} ", checker.symbol())?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "#")?;
        for _ in 1..=self.width() {
            write!(f, "---")?;
        }
        writeln!(f, "#")
    }
}
