//! Board simulation for a single-player Minesweeper: generation, adjacency, cascading reveal and
//! win/loss evaluation. Drawing and storage are left to the host through [`Renderer`] and
//! [`GameStore`].

#![no_std]

extern crate alloc;

pub use cell::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use host::*;
pub use minefield::*;
pub use session::*;
pub use store::*;
pub use types::*;

mod cell;
mod config;
mod error;
mod generator;
mod host;
mod minefield;
mod reveal;
mod session;
mod store;
mod types;
mod victory;
