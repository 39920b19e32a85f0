//! Terminal front end for the monster battle.
//!
//! Game rules live in the `battle` crate; this crate maps keys to battle
//! actions and draws the engine's snapshot with ratatui.

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;
pub mod terminal;

pub use battle;
