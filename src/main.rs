use connect4::{Board, Checker, Error, GameResult};

/// Parse a 1-indexed column as printed above the board.
fn parse_column(arg: &str) -> GameResult<usize> {
    arg.trim()
        .parse::<usize>()
        .ok()
        .and_then(|col| col.checked_sub(1))
        .ok_or_else(|| Error::InvalidInput(arg.to_string()))
}

/// Describe a refused move using the 1-indexed columns the user typed.
fn refusal(err: &Error) -> String {
    match err {
        Error::ColumnFull(col) => format!("Column {} is already full!", col + 1),
        Error::InvalidColumn { column, width } => {
            format!("Column {} does not exist! Must be between 1 and {width}", column + 1)
        }
        e => e.to_string(),
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut board = Board::<Checker>::default();
    board.set_change_listener(|col: usize, row: usize, player: &Checker| {
        log::info!("{player} dropped in column {} (row {row})", col + 1);
    });

    let mut active = Checker::Player1;
    let mut winner = None;
    for arg in std::env::args().skip(1) {
        if board.is_full() {
            break;
        }
        let col = match parse_column(&arg) {
            Ok(col) => col,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match board.place(col, active) {
            Ok(_) => {
                if board.is_won_by(&active) {
                    winner = Some(active);
                    break;
                }
                active = active.opponent();
            }
            Err(e) => println!("{}", refusal(&e)),
        }
    }

    print!("{board}");
    match winner {
        Some(player) => {
            let row = board
                .winning_row()
                .iter()
                .map(|place| place.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{player} wins at {row}");
        }
        None if board.is_full() => println!("draw"),
        None => println!("in progress, {active}'s turn"),
    }
}
