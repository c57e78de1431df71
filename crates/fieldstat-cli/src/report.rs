//! Textual and JSON rendering of test results and assumption checks.
//!
//! Layout is presentation only; every number comes straight from the
//! core result structs.

use std::fmt::Write;

use serde_json::{json, Value};

use fieldstat_core::diagnostics::{NormalityAssessment, ShapiroOutcome};
use fieldstat_core::tests::TestResult;

fn fmt_bound(x: f64) -> String {
    if x == f64::NEG_INFINITY {
        "-inf".into()
    } else if x == f64::INFINITY {
        "inf".into()
    } else {
        format!("{x:.6}")
    }
}

/// Plain-text test report
pub fn render_test(result: &TestResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.method);
    let _ = writeln!(out, "  alternative: {}", result.alternative.as_str());
    let _ = writeln!(out, "  t = {:.6}, df = {:.4}, p = {:.6}", result.statistic, result.df, result.p_value);
    match result.mean_b {
        Some(mean_b) => {
            let _ = writeln!(
                out,
                "  means: {:.6} vs {:.6} (n = {} + {})",
                result.mean_a, mean_b, result.n1, result.n2
            );
        }
        None => {
            let _ = writeln!(out, "  mean: {:.6} (n = {})", result.mean_a, result.n);
        }
    }
    let _ = writeln!(
        out,
        "  {:.0}% CI: [{}, {}]",
        result.confidence_level * 100.0,
        fmt_bound(result.ci_lower),
        fmt_bound(result.ci_upper)
    );
    out
}

/// Plain-text assumption report: Shapiro-Wilk verdict data plus the QQ
/// pairs. Interpretation is deliberately left to the reader.
pub fn render_assessment(assessment: &NormalityAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Residual normality check");
    match &assessment.shapiro {
        ShapiroOutcome::Applicable(r) => {
            let _ = writeln!(
                out,
                "  Shapiro-Wilk: W = {:.6}, p = {:.6} (n = {})",
                r.statistic, r.p_value, r.n
            );
        }
        ShapiroOutcome::Inapplicable { n } => {
            let _ = writeln!(
                out,
                "  Shapiro-Wilk: inapplicable for n = {n} (valid for 3 <= n <= 5000)"
            );
        }
    }
    let _ = writeln!(out, "  QQ pairs (theoretical, sample):");
    for point in &assessment.qq {
        let _ = writeln!(out, "    {:9.5}  {:9.5}", point.theoretical, point.sample);
    }
    out
}

/// JSON form of the full run, for scripted consumers
pub fn to_json(result: &TestResult, assessment: &NormalityAssessment) -> Value {
    let shapiro = match &assessment.shapiro {
        ShapiroOutcome::Applicable(r) => json!({
            "status": "applicable",
            "statistic": r.statistic,
            "p_value": r.p_value,
            "n": r.n,
        }),
        ShapiroOutcome::Inapplicable { n } => json!({
            "status": "inapplicable",
            "n": n,
        }),
    };

    json!({
        "method": result.method,
        "alternative": result.alternative.as_str(),
        "statistic": result.statistic,
        "df": result.df,
        "p_value": result.p_value,
        "mean_a": result.mean_a,
        "mean_b": result.mean_b,
        "ci": [result.ci_lower, result.ci_upper],
        "confidence_level": result.confidence_level,
        "n": result.n,
        "shapiro_wilk": shapiro,
        "qq": assessment.qq.iter()
            .map(|p| json!([p.theoretical, p.sample]))
            .collect::<Vec<_>>(),
    })
}
