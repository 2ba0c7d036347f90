//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page section (`careers`, `jobs`, `blog`, `profile`) plus
//! the cross-cutting `auth` and `session` models. Section models are plain
//! structs held in `RwSignal`s by their components; async loaders live beside
//! them so the fetch and fallback rules are testable without a browser.

pub mod auth;
pub mod blog;
pub mod careers;
pub mod jobs;
pub mod profile;
pub mod session;
