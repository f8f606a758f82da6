//! Core types shared by every stage: errors and configuration.
//!
//! Scoring and aggregation never fail as a whole; only reading inputs,
//! parsing documents and writing the canonical source can abort a run.

pub mod config;
pub mod document;
pub mod error;

pub use config::{AuditConfig, DEFAULT_TOLERANCE};
pub use document::DocumentFormat;
pub use error::{BalanceError, InvalidCardError, InvalidCardReason, PatchFailure, Result};
