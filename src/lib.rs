//! cc-advisor - Pick a Creative Commons license from two questions
//!
//! The questionnaire asks whether adaptations and commercial use are allowed,
//! maps the answers to one of six CC BY 4.0 variants, and can render a
//! ready-to-paste attribution line.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line layer (flags, interrupt handling, exit behavior)
//! - [`engine`] - Orchestrates Ask → Derive → Present for one session
//! - [`core`] - Answer types and the pure license derivation
//! - [`ui`] - Prompts and output formatting
//!
//! # Invariants
//!
//! 1. Every license code starts with `CC BY`
//! 2. Token order is BY → NC → {SA|ND}
//! 3. Menu prompts only return keys they offered
//! 4. Interruption is a clean exit, never an error

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
