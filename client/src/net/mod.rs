//! Networking modules for the backend JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the request/response
//! schema shared with the state machines.

pub mod api;
pub mod types;
