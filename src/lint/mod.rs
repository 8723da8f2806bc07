//! Non-fatal quality checks on validated probe groups.
//!
//! Validation rejects documents that are structurally inconsistent. Lint
//! looks at what validation lets through and flags data that is probably
//! wrong:
//! - Geometry (shape parameters matching the shape, finite coordinates)
//! - Labels (duplicate contact ids, unnamed probes, annotation counts)
//! - Wiring (probes with no recorded contact)

mod report;

pub use report::{IssueCode, IssueContext, LintIssue, LintReport, Severity};

use std::collections::HashMap;

use crate::model::{Probe, ProbeGroup};

/// Options for lint behavior.
#[derive(Clone, Debug, Default)]
pub struct LintOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,
}

/// Lints every probe of a group and returns all issues found.
pub fn lint_probe_group(group: &ProbeGroup, opts: &LintOptions) -> LintReport {
    let mut report = LintReport::new();

    for (index, probe) in group.probes().iter().enumerate() {
        lint_labels(index, probe, &mut report);
        lint_geometry(index, probe, &mut report);
        lint_wiring(index, probe, &mut report);
    }

    if opts.strict {
        for issue in &mut report.issues {
            issue.severity = Severity::Error;
        }
    }

    report
}

fn lint_labels(index: usize, probe: &Probe, report: &mut LintReport) {
    if probe.annotations().name.is_empty() {
        report.add(LintIssue::warning(
            IssueCode::EmptyProbeName,
            "Probe has an empty name",
            IssueContext::Probe { probe: index },
        ));
    }

    if let Some(annotations) = probe.contact_annotations() {
        if annotations.len() != probe.number_of_contacts() {
            report.add(LintIssue::warning(
                IssueCode::ContactAnnotationCount,
                format!(
                    "{} contact annotation(s) for {} contact(s)",
                    annotations.len(),
                    probe.number_of_contacts()
                ),
                IssueContext::Probe { probe: index },
            ));
        }
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (contact, id) in probe.contact_ids().iter().enumerate() {
        if let Some(first) = seen.get(id.as_str()) {
            report.add(LintIssue::warning(
                IssueCode::DuplicateContactId,
                format!("Duplicate contact id '{}' (first seen at contact {})", id, first),
                IssueContext::Contact {
                    probe: index,
                    contact,
                },
            ));
        } else {
            seen.insert(id.as_str(), contact);
        }
    }
}

fn lint_geometry(index: usize, probe: &Probe, report: &mut LintReport) {
    let shapes = probe.contact_shapes().iter();
    let params = probe.contact_shape_params().iter();
    let positions = probe.contact_positions().iter();

    for (contact, ((shape, params), position)) in shapes.zip(params).zip(positions).enumerate() {
        let context = IssueContext::Contact {
            probe: index,
            contact,
        };

        if !position.is_finite() {
            report.add(LintIssue::error(
                IssueCode::NonFinitePosition,
                format!("Non-finite position ({}, {})", position.x, position.y),
                context.clone(),
            ));
        }

        if !params.fits(*shape) {
            report.add(LintIssue::warning(
                IssueCode::ShapeParamMismatch,
                format!("Shape '{}' is missing its size parameter(s)", shape),
                context.clone(),
            ));
        }

        for (name, value) in params.present() {
            if !(value.is_finite() && value > 0.0) {
                report.add(LintIssue::error(
                    IssueCode::NonPositiveShapeParam,
                    format!("Shape parameter '{}' must be positive, got {}", name, value),
                    context.clone(),
                ));
            }
        }
    }

    if let Some(contour) = probe.probe_planar_contour() {
        if contour.len() < 3 {
            report.add(LintIssue::warning(
                IssueCode::DegenerateContour,
                format!("Planar contour has only {} point(s)", contour.len()),
                IssueContext::Probe { probe: index },
            ));
        }
        if let Some(point) = contour.iter().find(|p| !p.is_finite()) {
            report.add(LintIssue::error(
                IssueCode::NonFinitePosition,
                format!("Non-finite contour point ({}, {})", point.x, point.y),
                IssueContext::Probe { probe: index },
            ));
        }
    }
}

fn lint_wiring(index: usize, probe: &Probe, report: &mut LintReport) {
    if probe.number_of_contacts() > 0 && probe.enabled_channel_count() == 0 {
        report.add(LintIssue::warning(
            IssueCode::AllChannelsDisabled,
            "Every contact has device channel -1",
            IssueContext::Probe { probe: index },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        default_contact_shapes, default_square_params, ContactAnnotations, ContactShape,
        ContactShapeParam, NumDimensions, Position, ProbeAnnotations, RawProbe, SiUnits,
    };

    fn raw_probe() -> RawProbe {
        RawProbe::new(
            NumDimensions::Two,
            SiUnits::Um,
            ProbeAnnotations::new("square-2", "acme"),
            vec![Position::new(0.0, 0.0), Position::new(0.0, 20.0)],
            default_contact_shapes(2, ContactShape::Square),
            default_square_params(2, 12.0),
        )
        .with_contour(vec![
            Position::new(-10.0, -10.0),
            Position::new(10.0, -10.0),
            Position::new(0.0, 40.0),
        ])
    }

    fn lint(raw: RawProbe) -> LintReport {
        let group = ProbeGroup::new("probeinterface", "0.2.21", vec![raw]).unwrap();
        lint_probe_group(&group, &LintOptions::default())
    }

    #[test]
    fn test_clean_probe() {
        let report = lint(raw_probe());
        assert!(report.is_clean(), "Expected no issues, got: {:?}", report.issues);
    }

    #[test]
    fn test_shape_param_mismatch() {
        let mut raw = raw_probe();
        raw.contact_shapes[1] = ContactShape::Circle;

        let report = lint(raw);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(
            report.issues[0].context,
            IssueContext::Contact {
                probe: 0,
                contact: 1
            }
        );
        assert!(report.has(IssueCode::ShapeParamMismatch));
    }

    #[test]
    fn test_non_positive_shape_param() {
        let mut raw = raw_probe();
        raw.contact_shape_params[0] = ContactShapeParam::square(0.0);
        raw.contact_shape_params[1] = ContactShapeParam::square(f64::NAN);

        let report = lint(raw);
        assert_eq!(report.error_count(), 2);
        assert!(report.has(IssueCode::NonPositiveShapeParam));
    }

    #[test]
    fn test_non_finite_position() {
        let mut raw = raw_probe();
        raw.contact_positions[0] = Position::new(f64::INFINITY, 0.0);

        let report = lint(raw);
        assert!(!report.is_ok());
        assert!(report.has(IssueCode::NonFinitePosition));
    }

    #[test]
    fn test_duplicate_contact_id() {
        let raw = raw_probe()
            .with_contact_ids(["0", "0"])
            .with_device_channel_indices(vec![0, 1]);

        let report = lint(raw);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has(IssueCode::DuplicateContactId));
    }

    #[test]
    fn test_label_warnings() {
        let mut raw = raw_probe().with_contact_annotations(ContactAnnotations::from_iter(["ref"]));
        raw.annotations.name.clear();

        let report = lint(raw);
        assert!(report.has(IssueCode::EmptyProbeName));
        assert!(report.has(IssueCode::ContactAnnotationCount));
        assert!(report.is_ok());
    }

    #[test]
    fn test_degenerate_contour() {
        let raw = raw_probe().with_contour(vec![Position::new(0.0, 0.0)]);
        let report = lint(raw);
        assert!(report.has(IssueCode::DegenerateContour));
    }

    #[test]
    fn test_all_channels_disabled() {
        let raw = raw_probe().with_device_channel_indices(vec![-1, -1]);
        let report = lint(raw);
        assert!(report.has(IssueCode::AllChannelsDisabled));
    }

    #[test]
    fn test_strict_promotes_warnings() {
        let raw = raw_probe().with_device_channel_indices(vec![-1, -1]);
        let group = ProbeGroup::new("probeinterface", "0.2.21", vec![raw]).unwrap();

        let report = lint_probe_group(&group, &LintOptions { strict: true });
        assert_eq!(report.warning_count(), 0);
        assert_eq!(report.error_count(), 1);
    }
}
