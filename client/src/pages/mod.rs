//! Page modules for the two top-level views.
//!
//! ARCHITECTURE
//! ============
//! Each page owns view-scoped orchestration and delegates rendering details
//! to `components`.

pub mod home;
pub mod profile;
