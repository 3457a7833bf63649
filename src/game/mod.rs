pub(crate) mod board;
pub(crate) mod components;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod listener;

pub use board::{Board, FOUR};
pub use components::{Checker, Direction, Place};
pub use config::BoardConfig;
pub use error::{Error, GameResult};
pub use listener::ChangeListener;
