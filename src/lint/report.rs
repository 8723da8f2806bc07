//! Lint report types for structured issue reporting.
//!
//! This module provides structured lint results that can be displayed to
//! users, serialized to JSON, or processed programmatically.

use std::fmt;

use serde::Serialize;

/// The result of linting a probe group.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LintReport {
    /// All issues found, in the order they were detected.
    pub issues: Vec<LintIssue>,
}

impl LintReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: LintIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of errors in the report.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Returns the number of warnings in the report.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if any issue carries `code`.
    pub fn has(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Lint passed: no issues found");
        }

        writeln!(
            f,
            "Lint completed with {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single lint finding.
#[derive(Clone, Debug, Serialize)]
pub struct LintIssue {
    pub severity: Severity,
    pub code: IssueCode,
    pub message: String,
    pub context: IssueContext,
}

impl LintIssue {
    /// Creates a new error.
    pub fn error(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            context,
        }
    }

    /// Creates a new warning.
    pub fn warning(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            context,
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in {}: {}",
            severity, self.code, self.context, self.message
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suspicious but usable data.
    Warning,
    /// Data that no downstream consumer can use as-is.
    Error,
}

/// A stable code identifying the type of lint issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IssueCode {
    // Contact geometry
    /// A contact's shape parameters lack the field its shape needs.
    ShapeParamMismatch,
    /// A shape parameter is zero, negative or not finite.
    NonPositiveShapeParam,
    /// A contact position or contour point is NaN or infinite.
    NonFinitePosition,
    /// The planar contour has fewer than three points.
    DegenerateContour,

    // Labels
    /// The same contact id is used twice within one probe.
    DuplicateContactId,
    /// The probe has no name.
    EmptyProbeName,
    /// `contact_annotations` does not have one entry per contact.
    ContactAnnotationCount,

    // Wiring
    /// Every contact of a probe is disabled.
    AllChannelsDisabled,
}

/// Where a lint issue was found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum IssueContext {
    Probe { probe: usize },
    Contact { probe: usize, contact: usize },
}

impl fmt::Display for IssueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueContext::Probe { probe } => write!(f, "probe {}", probe),
            IssueContext::Contact { probe, contact } => {
                write!(f, "probe {} contact {}", probe, contact)
            }
        }
    }
}
