//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, DOM
//! lookups, style injection, navigation) from page and component logic so
//! the `state` layer stays pure.

pub mod clock;
pub mod effects;
pub mod notify;
pub mod styles;
