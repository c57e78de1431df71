//! Assumption checking for the t-test workflow: residuals, QQ pairing,
//! and the Shapiro-Wilk normality test.

pub mod qq;
pub mod residuals;
pub mod shapiro;

pub use qq::{normal_qq, QqPoint};
pub use residuals::{compute_residuals, GroupMean, ResidualSet};
pub use shapiro::{shapiro_wilk, ShapiroWilkResult, SHAPIRO_MAX_N, SHAPIRO_MIN_N};

use crate::errors::{StatsError, StatsResult};

/// Shapiro-Wilk outcome for a residual set.
///
/// Out-of-range sample sizes are reported as inapplicable, which is a
/// different statement than either a high or a low p-value.
#[derive(Debug, Clone)]
pub enum ShapiroOutcome {
    Applicable(ShapiroWilkResult),
    Inapplicable { n: usize },
}

/// Everything a caller needs to judge residual normality.
///
/// Carries both the plot data and the formal test; deciding whether the
/// assumption holds stays with the caller.
#[derive(Debug, Clone)]
pub struct NormalityAssessment {
    /// (theoretical, sample) quantile pairs for the QQ plot
    pub qq: Vec<QqPoint>,
    /// Formal test outcome
    pub shapiro: ShapiroOutcome,
}

/// Evaluate residual normality both visually (QQ pairs) and formally
/// (Shapiro-Wilk).
pub fn assess_normality(residuals: &[f64]) -> StatsResult<NormalityAssessment> {
    let qq = normal_qq(residuals)?;

    let shapiro = match shapiro_wilk(residuals) {
        Ok(result) => ShapiroOutcome::Applicable(result),
        Err(StatsError::InsufficientDataMsg(_)) | Err(StatsError::SampleTooLarge { .. }) => {
            ShapiroOutcome::Inapplicable {
                n: residuals.iter().filter(|x| !x.is_nan()).count(),
            }
        }
        Err(e) => return Err(e),
    };

    Ok(NormalityAssessment { qq, shapiro })
}
