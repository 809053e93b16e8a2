//! Session table mapping ids to independent games.
//!
//! ## Concurrency
//!
//! Each game sits behind its own `RwLock`: mutating calls take it
//! exclusively, status and hand queries share it. The table itself is only
//! locked long enough to look up or insert a session, so work on one game
//! never blocks another.

mod session;

pub use session::{GameRegistry, RegistryConfig, RegistryError, SessionId};
