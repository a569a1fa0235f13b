//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing and dashboard chrome while reading/writing
//! shared state from Leptos context providers. Transitions go through the
//! `state` structs; their effects are applied with `util::effects`.

pub mod chat_panel;
pub mod internship_grid;
pub mod login_modal;
pub mod modal_frame;
pub mod notification_stack;
pub mod profile_modal;
pub mod reward_overlay;
pub mod scenario_grid;
pub mod sidebar_nav;
pub mod training_modal;
pub mod xp_bar;
