//! Networking modules for the job portal REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds one thin wrapper per backend endpoint, `body` holds the
//! shared response normalizer they all funnel through.

pub mod api;
pub mod body;
