//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — state, history records, report/output structs.
//! - `constants.rs` — palette, sample roster, service defaults.
//!
//! Domain types are data-only: no filesystem/network side effects.
//! Changes in these structs affect `--json` output and
//! `docs/contracts/*`; keep them in sync.

pub mod constants;
pub mod models;
