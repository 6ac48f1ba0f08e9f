//! Intern Roster Core Library
//!
//! Business logic shared by roster front ends:
//! - Roster synchronization against the remote API (Roster Service)
//! - Coffee Roulette random selection (Roulette Service)
//!
//! This library is UI-independent; front ends own the view state and call
//! into the services here for everything that touches the remote roster.

pub mod error;
pub mod services;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use intern_roster_client::{ApiError, FieldErrors, Intern, InternApi, InternDraft};
pub use services::{RandomSource, RosterService, RouletteService, ThreadRngSource};
