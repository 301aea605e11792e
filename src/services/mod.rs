//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `animator.rs` — frame loop driving one spin, with cancellation.
//! - `wheel.rs` — sector layout and the terminal renderer.
//! - `roster.rs` — names parsing and deduplication.
//! - `message.rs` — congratulatory message generators with fallback.
//! - `config.rs` — `config.toml` loading and env overrides.
//! - `storage.rs` — state/history persistence, names file, audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod animator;
pub mod config;
pub mod message;
pub mod output;
pub mod roster;
pub mod storage;
pub mod wheel;
