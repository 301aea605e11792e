//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `draw.rs` — spin and message.
//! - `roster.rs` — names/history/wheel/config.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod draw;
pub mod roster;

pub use draw::handle_draw_commands;
pub use roster::handle_roster_commands;
