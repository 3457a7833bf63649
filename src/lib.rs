#![warn(missing_docs)]
//! Connect 4 board engine.
//!
//! A [`Board`] holds the checkers of two players, drops them into slots under simulated
//! gravity and finds four connected checkers. Whose turn it is, and how the board is shown,
//! is left to the caller.
mod game;

pub use game::{
    Board, BoardConfig, ChangeListener, Checker, Direction, Error, GameResult, Place, FOUR,
};
