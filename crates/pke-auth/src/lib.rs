//! Accounts, credentials, password recovery, and session tokens.
//!
//! JWT-based authentication with Argon2 password hashing. Sessions are
//! stateless: a token is valid until its embedded expiry, and logout is a
//! client-side discard. Account uniqueness and reset-token atomicity are
//! enforced by the database, never by read-then-write in process.
//!
//! ## Identity Types
//!
//! - [`Account`] — Registered user with credentials
//! - [`Claims`] — JWT payload asserting an identity
//!
//! ## Security
//!
//! - [`Crypto`] — JWT signing and verification
//! - [`password`] — Argon2 hashing and verification
//! - [`reset`] — Single-use recovery token generation
mod account;
mod claims;
mod crypto;
mod dto;
mod error;
mod mailer;
mod middleware;
mod repository;
pub mod handlers;
pub mod password;
pub mod reset;
pub mod service;

pub use account::*;
pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use error::*;
pub use mailer::*;
pub use middleware::*;
pub use repository::*;
