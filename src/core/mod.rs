//! core
//!
//! Domain types and the license derivation rules.
//!
//! # Modules
//!
//! - [`types`] - Strong types for the questionnaire answers
//! - [`license`] - Pure mapping from answers to a license
//!
//! # Design Principles
//!
//! - Answers are enums, so an unrecognized option cannot be represented
//! - Derivation has no I/O and no hidden state

pub mod license;
pub mod types;
