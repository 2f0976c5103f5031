//! Weekly pick ledger.
//!
//! A user holds at most one pick per (season, week). That invariant is a
//! UNIQUE constraint in the database, so it survives double-clicks, client
//! retries, and concurrent submissions landing on different server
//! processes. Picks are append-only: resubmission is rejected, never
//! overwritten.
//!
//! ## Components
//!
//! - [`Pick`] — A recorded selection for a scoring period
//! - [`PickRepository`] — Atomic ledger operations on the database
//! - [`Schedule`] — Collaborator resolving the current (season, week)
mod dto;
mod error;
mod pick;
mod repository;
mod schedule;
pub mod handlers;
pub mod service;

pub use dto::*;
pub use error::*;
pub use pick::*;
pub use repository::*;
pub use schedule::*;
