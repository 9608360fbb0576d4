//! ctq-core
//!
//! Shared vocabulary of the CTQ-SF screening system: question identifiers,
//! Likert responses, answer sets, quiz content and submission wire types.
//! No scoring logic lives here.

pub mod error;
pub mod models;
