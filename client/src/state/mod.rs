//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`modal`, `training`, `chat`, ...) so components
//! depend on small focused models. Each is a plain struct with pure
//! transitions; cross-cutting consequences are returned as
//! [`effect::Effect`] values instead of reaching into other state.

pub mod actions;
pub mod chat;
pub mod effect;
pub mod landing;
pub mod listings;
pub mod modal;
pub mod nav;
pub mod notifications;
pub mod player;
pub mod reward;
pub mod training;
