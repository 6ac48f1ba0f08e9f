//! # intern-roster-client
//!
//! HTTP client library for the intern roster REST API.
//!
//! The remote API manages a flat collection of intern records and exposes
//! four endpoints relative to a configurable base URL:
//!
//! | Endpoint | Method | Purpose |
//! |----------|--------|---------|
//! | `{base}interns` | GET | Full roster as a JSON array |
//! | `{base}newIntern` | POST | Create a record |
//! | `{base}{id}` | PUT | Update the record with that id |
//! | `{base}eraseIntern/{id}` | DELETE | Remove the record with that id |
//!
//! Validation happens server side. A rejected create or update answers with
//! a flat JSON object mapping field names to messages, which this crate maps
//! into [`FieldErrors`] (unknown keys are dropped).
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use intern_roster_client::{ApiError, InternApi, InternDraft};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = InternApi::new("https://interns.example.com/");
//!
//!     let roster = api.list_interns().await?;
//!     println!("{} interns on the roster", roster.len());
//!
//!     let draft = InternDraft {
//!         id: None,
//!         name: "Robin Mallory".to_string(),
//!         email: "robin@example.com".to_string(),
//!         department: "Engineering".to_string(),
//!     };
//!
//!     match api.create_intern(&draft).await {
//!         Ok(created) => println!("created intern {:?}", created.id),
//!         Err(ApiError::Rejected { errors }) => {
//!             // per-field validation messages, ready for inline display
//!             println!("rejected: {errors:?}");
//!         }
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http;
mod types;

pub use client::InternApi;
pub use error::{ApiError, Result};
pub use types::{FieldErrors, Intern, InternDraft};
