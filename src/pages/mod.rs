//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped signals and talks to the backend through
//! `net::api`; rendering details live in `components`. The shell above them
//! holds no state.

pub mod candidates;
pub mod jobs;
pub mod matches;
pub mod upload;
