//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns every payload schema, so pages never deserialize into
//! structs; `display` gives them tolerant field accessors instead.

pub mod display;
