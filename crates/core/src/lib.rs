//! # Intake Core
//!
//! Field validation and data-collection state machine for the medical intake form.
//!
//! This crate contains:
//! - Pure field validators and the predicates that gate conditional fields
//! - The intake record model, its draft form, and the JSON wire model
//! - Section collectors and the session that drives them through a [`Terminal`]
//! - Summary/report rendering and single-file JSON persistence
//!
//! **No process concerns**: argument parsing, signal handling, and logging setup belong in the
//! `intake` binary.

pub mod conditions;
pub mod config;
pub mod constants;
pub mod error;
pub mod persistence;
pub mod prompt;
pub mod record;
pub mod sample;
pub mod sections;
pub mod session;
pub mod summary;
pub mod validation;
pub mod wire;

pub use config::IntakeConfig;
pub use error::{IntakeError, IntakeResult};
pub use intake_types::{EmailAddress, NonEmptyText, PhoneNumber, TextError};
pub use prompt::{IoTerminal, Terminal};
pub use record::{IntakeForm, IntakeRecord, Section};
pub use session::{run_session, SessionOutcome};
pub use validation::ValidationError;
