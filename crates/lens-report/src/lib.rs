//! # lens-report
//!
//! Turns a session activity log into an analysis-ready report.
//!
//! The pipeline:
//! 1. Validate the raw document (`lens-schema`), unless the caller hands in
//!    already-typed sessions
//! 2. Group progress records by problem and merge their submissions and chats
//!    (`grouping`)
//! 3. Build the global, time-ordered event timeline (`timeline`)
//! 4. Compute label-prediction accuracy for the designated problem (`accuracy`)
//! 5. Order problems by the catalog and attach summary counters (`assemble`)
//!
//! Everything is synchronous and pure: one call turns one in-memory document
//! into one fresh `Report`. Only the first session of a document is reported.

pub mod accuracy;
pub mod assemble;
pub mod grouping;
mod test_support;
pub mod timeline;

use lens_core::entities::{Session, SessionData};
use lens_core::report::Report;
use lens_core::{CoreError, ReportOptions};
use lens_schema::{SchemaRegistry, SessionValidator};
use serde_json::Value;

/// Where the pipeline input comes from.
///
/// `Raw` is a parsed but unchecked document (the default dataset, or a file
/// the loader just read). `Typed` is a document some other component already
/// validated; it skips re-validation.
#[derive(Debug, Clone)]
pub enum Dataset {
    Raw(Value),
    Typed(SessionData),
}

/// Build the report for the first session of `sessions`.
///
/// # Errors
///
/// Returns `CoreError::EmptySession` when `sessions` is empty.
pub fn build_report(sessions: &[Session], options: &ReportOptions) -> Result<Report, CoreError> {
    let session = sessions.first().ok_or(CoreError::EmptySession)?;
    Ok(assemble::assemble(session, options))
}

/// A compiled validator plus the options every run uses.
pub struct ReportPipeline {
    validator: SessionValidator,
    options: ReportOptions,
}

impl ReportPipeline {
    /// # Errors
    ///
    /// Returns `CoreError::Internal` if the session schema fails to compile.
    pub fn new(options: ReportOptions) -> Result<Self, CoreError> {
        let validator = SessionValidator::new(&SchemaRegistry::new())?;
        Ok(Self { validator, options })
    }

    #[must_use]
    pub const fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Validate a raw document into typed sessions.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending path.
    pub fn validate(&self, raw: &Value) -> Result<SessionData, CoreError> {
        Ok(self.validator.validate(raw)?)
    }

    /// Run the whole pipeline over `dataset`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a malformed raw document and
    /// `CoreError::EmptySession` for an empty session array. No partial report
    /// is ever produced.
    pub fn run(&self, dataset: &Dataset) -> Result<Report, CoreError> {
        match dataset {
            Dataset::Raw(raw) => {
                let sessions = self.validate(raw)?;
                build_report(&sessions, &self.options)
            }
            Dataset::Typed(sessions) => build_report(sessions, &self.options),
        }
    }
}
