/// Observer of a [`Board`](super::Board), notified whenever a checker lands.
///
/// Called synchronously from inside the drop, while the board is still borrowed, so a
/// listener can never drop into the board it is watching.
pub trait ChangeListener<P> {
    /// A checker of `player` was placed at `(column, row)`.
    fn checker_dropped(&mut self, column: usize, row: usize, player: &P);
}

impl<P, F> ChangeListener<P> for F
where
    F: FnMut(usize, usize, &P),
{
    fn checker_dropped(&mut self, column: usize, row: usize, player: &P) {
        self(column, row, player)
    }
}
