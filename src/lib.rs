//! pickem — weekly sports-pick backend.
//!
//! Users authenticate, view the week's events, and hold at most one pick
//! per scoring period. The domain crates under `crates/` carry the actual
//! logic; this facade re-exports what the binaries need.

pub use pke_core::*;
pub use pke_server as server;
