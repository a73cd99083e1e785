//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `nav` is the persistent chrome above the routed content region; the card
//! components keep list presentation consistent across pages.

pub mod candidate_card;
pub mod job_card;
pub mod match_report;
pub mod nav;
