//! # Command Reports
//!
//! Plain data produced by each command, rendered as text or JSON.

use closed_enum_core::ResolvedValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// KINDS REPORT
// =============================================================================

/// One registered kind and its size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindSummary {
    pub kind: String,
    pub value_count: usize,
}

/// Output of `kinds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindsReport {
    pub kinds: Vec<KindSummary>,
}

impl fmt::Display for KindsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered Kinds")?;
        writeln!(f, "================")?;
        for summary in &self.kinds {
            writeln!(f, "{:<12} {} values", summary.kind, summary.value_count)?;
        }
        Ok(())
    }
}

// =============================================================================
// LIST REPORT
// =============================================================================

/// Output of `list` and `describe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListReport {
    pub kind: String,
    pub names: Vec<String>,
}

impl fmt::Display for ListReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.names {
            writeln!(f, "{}", name)?;
        }
        Ok(())
    }
}

// =============================================================================
// RESOLVE REPORT
// =============================================================================

/// Output of `resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveReport {
    pub input: String,
    #[serde(flatten)]
    pub value: ResolvedValue,
}

impl fmt::Display for ResolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input:     {}", self.input)?;
        writeln!(f, "Kind:      {}", self.value.kind)?;
        writeln!(f, "Name:      {}", self.value.name)?;
        writeln!(f, "Position:  {}", self.value.position)?;
        writeln!(f, "Name Hash: {:016x}", self.value.name_hash)
    }
}

// =============================================================================
// COMPARE REPORT
// =============================================================================

/// Output of `compare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareReport {
    pub left: String,
    pub right: String,
    pub equal: bool,
    /// `-1`, `0` or `1`; absent when the kinds differ.
    pub ordering: Option<i8>,
    /// Why no ordering exists, when it does not.
    pub reason: Option<String>,
}

impl CompareReport {
    /// Encode an ordering the way comparison results are usually written.
    #[must_use]
    pub fn ordering_sign(ordering: Ordering) -> i8 {
        match ordering {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl fmt::Display for CompareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Left:     {}", self.left)?;
        writeln!(f, "Right:    {}", self.right)?;
        writeln!(f, "Equal:    {}", self.equal)?;
        match (self.ordering, &self.reason) {
            (Some(sign), _) => writeln!(f, "Ordering: {}", sign),
            (None, Some(reason)) => writeln!(f, "Ordering: none ({})", reason),
            (None, None) => writeln!(f, "Ordering: none"),
        }
    }
}

// =============================================================================
// CHECK REPORT
// =============================================================================

/// Output of `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub kind_count: usize,
    pub value_count: usize,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} kinds valid, {} values, no colliding names",
            self.kind_count, self.value_count
        )
    }
}
