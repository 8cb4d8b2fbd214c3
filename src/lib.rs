#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod coord;
mod fleet;
#[cfg(feature = "std")]
mod logging;
pub mod render;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coordinate;
pub use fleet::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use ship::*;
