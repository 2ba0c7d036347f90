//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page sections and dialogs. Identity-aware
//! components take an `AuthContext` prop; data sections take the `ApiClient`
//! they fetch from.

pub mod application_modal;
pub mod blog;
pub mod career_paths;
pub mod footer;
pub mod header;
pub mod hero;
pub mod job_guidance;
