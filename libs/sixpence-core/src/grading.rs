//! Mapping from percentage correct to a numeric grade.

use crate::error::{ConfigError, GradeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One half-open percentage interval `[low, high)` and its grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeBand {
    pub low: u32,
    pub high: u32,
    pub grade: f64,
}

impl GradeBand {
    pub const fn new(low: u32, high: u32, grade: f64) -> Self {
        Self { low, high, grade }
    }

    pub fn contains(&self, percentage: u32) -> bool {
        self.low <= percentage && percentage < self.high
    }
}

/// Ordered grade bands, tested in order; the first band containing the
/// percentage wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeScale(Vec<GradeBand>);

impl Default for GradeScale {
    /// Polish school scale. 100% falls in the last band.
    fn default() -> Self {
        Self(vec![
            GradeBand::new(0, 50, 2.0),
            GradeBand::new(50, 60, 3.0),
            GradeBand::new(60, 70, 3.5),
            GradeBand::new(70, 80, 4.0),
            GradeBand::new(80, 90, 4.5),
            GradeBand::new(90, 101, 5.0),
        ])
    }
}

impl GradeScale {
    pub fn new(bands: Vec<GradeBand>) -> Self {
        Self(bands)
    }

    pub fn bands(&self) -> &[GradeBand] {
        &self.0
    }

    /// Grade for a percentage, or an error if no band contains it.
    pub fn lookup(&self, percentage: u32) -> Result<f64, GradeError> {
        self.0
            .iter()
            .find(|band| band.contains(percentage))
            .map(|band| band.grade)
            .ok_or_else(|| GradeError::OutOfScale {
                percentage,
                scale: self.to_string(),
            })
    }

    /// Percentages in `0..=100` that no band covers.
    pub fn gaps(&self) -> Vec<u32> {
        (0..=100)
            .filter(|p| !self.0.iter().any(|band| band.contains(*p)))
            .collect()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if let Some(band) = self.0.iter().find(|band| band.low >= band.high) {
            return Err(ConfigError::Invalid(format!(
                "grade band [{}, {}) is empty",
                band.low, band.high
            )));
        }

        let gaps = self.gaps();
        if !gaps.is_empty() {
            tracing::warn!(
                "Grade scale does not cover {} percentage value(s), first uncovered: {}",
                gaps.len(),
                gaps[0]
            );
        }

        Ok(())
    }
}

impl fmt::Display for GradeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bands = self
            .0
            .iter()
            .map(|band| format!("[{}, {}) -> {}", band.low, band.high, band.grade))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{}}}", bands)
    }
}
