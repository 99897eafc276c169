//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Every command returns its rendered output; printing is left to `main`.

use crate::error::AppError;
use crate::report::{
    CheckReport, CompareReport, KindSummary, KindsReport, ListReport, ResolveReport,
};
use closed_enum_core::{
    Catalog, EnumerationError,
    erased::{compare, equals},
    folding::eq_ignore_case,
    primitives::MAX_LOOKUP_NAME_LENGTH,
};
use serde::Serialize;
use std::fmt::Display;

// =============================================================================
// HELPERS
// =============================================================================

/// Reject empty or oversized command-line input before it reaches the core.
fn validate_input(what: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", what)));
    }
    if value.len() > MAX_LOOKUP_NAME_LENGTH {
        return Err(AppError::InvalidInput(format!(
            "{} length {} exceeds maximum allowed {}",
            what,
            value.len(),
            MAX_LOOKUP_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Render a report as pretty JSON or as its text form.
fn render<T: Serialize + Display>(report: &T, json_mode: bool) -> Result<String, AppError> {
    if json_mode {
        let mut out = serde_json::to_string_pretty(report)
            .map_err(|e| AppError::Io(format!("Cannot render JSON: {}", e)))?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(report.to_string())
    }
}

// =============================================================================
// KINDS COMMAND
// =============================================================================

/// List registered kinds with their value counts.
pub fn cmd_kinds(catalog: &Catalog, json_mode: bool) -> Result<String, AppError> {
    let kinds = catalog
        .kinds()
        .into_iter()
        .map(|kind| -> Result<KindSummary, EnumerationError> {
            Ok(KindSummary {
                kind: kind.to_string(),
                value_count: catalog.names(kind)?.len(),
            })
        })
        .collect::<Result<Vec<_>, EnumerationError>>()?;

    render(&KindsReport { kinds }, json_mode)
}

// =============================================================================
// LIST / DESCRIBE COMMANDS
// =============================================================================

fn list_report(catalog: &Catalog, kind: &str) -> Result<ListReport, AppError> {
    validate_input("kind", kind)?;
    let names = catalog.names(kind)?;
    let canonical = catalog
        .kinds()
        .into_iter()
        .find(|label| eq_ignore_case(label, kind))
        .map(str::to_string)
        .unwrap_or_else(|| kind.to_string());

    Ok(ListReport {
        kind: canonical,
        names: names.into_iter().map(str::to_string).collect(),
    })
}

/// List the names of a kind, one per line.
pub fn cmd_list(catalog: &Catalog, json_mode: bool, kind: &str) -> Result<String, AppError> {
    let report = list_report(catalog, kind)?;
    tracing::debug!(kind = %report.kind, count = report.names.len(), "listed kind");
    render(&report, json_mode)
}

/// Show the names of a kind joined on one line.
pub fn cmd_describe(catalog: &Catalog, json_mode: bool, kind: &str) -> Result<String, AppError> {
    let report = list_report(catalog, kind)?;
    let description = catalog.describe(kind)?;

    if json_mode {
        let output = serde_json::json!({
            "kind": report.kind,
            "description": description,
        });
        let mut out = serde_json::to_string_pretty(&output)
            .map_err(|e| AppError::Io(format!("Cannot render JSON: {}", e)))?;
        out.push('\n');
        return Ok(out);
    }

    Ok(format!("{}: {}\n", report.kind, description))
}

// =============================================================================
// RESOLVE COMMAND
// =============================================================================

/// Resolve a name within a kind, ignoring case.
pub fn cmd_resolve(
    catalog: &Catalog,
    json_mode: bool,
    kind: &str,
    name: &str,
) -> Result<String, AppError> {
    validate_input("kind", kind)?;
    validate_input("name", name)?;

    let value = catalog.resolve(kind, name)?;
    tracing::info!(kind = %value.kind, input = name, name = %value.name, "resolved");

    render(
        &ResolveReport {
            input: name.to_string(),
            value,
        },
        json_mode,
    )
}

// =============================================================================
// COMPARE COMMAND
// =============================================================================

/// Compare two values, each given as `(kind, name)`.
///
/// Values of different kinds are reported as unequal and unordered rather
/// than failing the command.
pub fn cmd_compare(
    catalog: &Catalog,
    json_mode: bool,
    left: (&str, &str),
    right: (&str, &str),
) -> Result<String, AppError> {
    for (kind, name) in [left, right] {
        validate_input("kind", kind)?;
        validate_input("name", name)?;
    }

    let left_value = catalog.lookup(left.0, left.1)?;
    let right_value = catalog.lookup(right.0, right.1)?;

    let equal = equals(left_value.as_ref(), Some(right_value.as_ref()));
    let (ordering, reason) = match compare(left_value.as_ref(), right_value.as_ref()) {
        Ok(ordering) => (Some(CompareReport::ordering_sign(ordering)), None),
        Err(err @ EnumerationError::IncomparableOperand { .. }) => (None, Some(err.to_string())),
        Err(err) => return Err(err.into()),
    };

    let report = CompareReport {
        left: format!("{:?}", left_value),
        right: format!("{:?}", right_value),
        equal,
        ordering,
        reason,
    };
    render(&report, json_mode)
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Validate every registered kind.
pub fn cmd_check(catalog: &Catalog, json_mode: bool) -> Result<String, AppError> {
    catalog.validate_all()?;
    tracing::info!(kinds = catalog.len(), "all kinds valid");

    render(
        &CheckReport {
            kind_count: catalog.len(),
            value_count: catalog.value_count(),
        },
        json_mode,
    )
}

// =============================================================================
// TESTS
// =============================================================================
