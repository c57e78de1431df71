//! fieldstat - CSV-driven t-test workflow
//!
//! # Commands
//!
//! - `test` - run a one-sample, two-sample, or paired t-test, then check
//!   residual normality
//! - `check` - residuals and normality assessment only
//! - `plot` - write the mean/SE summary figure or the QQ diagnostic as SVG

mod dataset;
mod figure;
mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fieldstat_core::diagnostics::{assess_normality, compute_residuals, normal_qq};
use fieldstat_core::summary::group_summaries;
use fieldstat_core::tests::parametric::{t_test, TTestKind, TTestOptions};
use fieldstat_core::tests::Alternative;
use fieldstat_core::Sample;

/// fieldstat - assumption-checked t-tests over CSV datasets
#[derive(Parser)]
#[command(name = "fieldstat")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a t-test and check residual normality
    ///
    /// Examples:
    ///   fieldstat test sparrows.csv --value-column mass --null-mean 25
    ///   fieldstat test diets.csv --value-column mass --group-column diet
    ///   fieldstat test birds.csv --value-column mass --group-column time \
    ///       --paired --id-column bird
    Test {
        /// Input CSV file
        #[arg(value_name = "CSV")]
        csv: PathBuf,

        /// Numeric measurement column
        #[arg(long)]
        value_column: String,

        /// Categorical column with exactly two groups
        #[arg(long)]
        group_column: Option<String>,

        /// Pair the two groups element-for-element by id
        #[arg(long, requires = "id_column", requires = "group_column")]
        paired: bool,

        /// Identifier column used for pairing
        #[arg(long)]
        id_column: Option<String>,

        /// Apply the Welch unequal-variance correction instead of the
        /// pooled (equal-variance) test
        #[arg(long)]
        welch: bool,

        /// Hypothesized mean (one-sample) or mean difference
        #[arg(long, default_value = "0.0")]
        null_mean: f64,

        /// Alternative hypothesis: two-sided, less, or greater
        #[arg(long, default_value = "two-sided")]
        alternative: String,

        /// Confidence level for the interval
        #[arg(long, default_value = "0.95")]
        confidence: f64,

        /// Emit the full result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute residuals and assess their normality
    Check {
        /// Input CSV file
        #[arg(value_name = "CSV")]
        csv: PathBuf,

        /// Numeric measurement column
        #[arg(long)]
        value_column: String,

        /// Categorical grouping column (grand-mean residuals if omitted)
        #[arg(long)]
        group_column: Option<String>,
    },
    /// Render an SVG figure
    ///
    /// Examples:
    ///   fieldstat plot diets.csv --value-column mass --group-column diet \
    ///       --points -o diets.svg
    ///   fieldstat plot diets.csv --value-column mass --group-column diet --qq
    Plot {
        /// Input CSV file
        #[arg(value_name = "CSV")]
        csv: PathBuf,

        /// Numeric measurement column
        #[arg(long)]
        value_column: String,

        /// Categorical grouping column
        #[arg(long)]
        group_column: Option<String>,

        /// Draw the residual QQ diagnostic instead of the mean/SE chart
        #[arg(long)]
        qq: bool,

        /// Overlay raw observations on the mean/SE chart
        #[arg(long)]
        points: bool,

        /// Output path
        #[arg(short, long, default_value = "figure.svg")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    match Cli::parse().command {
        Commands::Test {
            csv,
            value_column,
            group_column,
            paired,
            id_column,
            welch,
            null_mean,
            alternative,
            confidence,
            json,
        } => {
            let sample = dataset::load_sample(
                &csv,
                &value_column,
                group_column.as_deref(),
                id_column.as_deref(),
            )?;
            info!(rows = sample.len(), "dataset loaded");

            let options = TTestOptions {
                kind: if paired {
                    TTestKind::Paired
                } else if welch {
                    TTestKind::Welch
                } else {
                    TTestKind::Student
                },
                alternative: alternative.parse::<Alternative>()?,
                confidence_level: Some(confidence),
                mu: null_mean,
            };

            let (result, residuals) = if paired {
                let (column_a, column_b) = dataset::paired_columns(&sample)?;
                let result = t_test(&column_a, Some(&column_b), &options)?;
                let diffs: Vec<f64> = column_a
                    .iter()
                    .zip(&column_b)
                    .map(|(a, b)| b - a)
                    .collect();
                (result, compute_residuals(&diffs, None)?)
            } else if group_column.is_some() {
                let ((_, group_a), (_, group_b)) = sample.split_two_groups()?;
                let result = t_test(&group_a, Some(&group_b), &options)?;
                let residuals =
                    compute_residuals(&sample.values, sample.groups.as_deref())?;
                (result, residuals)
            } else {
                let result = t_test(&sample.values, None, &options)?;
                (result, compute_residuals(&sample.values, None)?)
            };
            info!(method = %result.method, "test complete");

            let assessment = assess_normality(&residuals.residuals)?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report::to_json(&result, &assessment))?
                );
            } else {
                print!("{}", report::render_test(&result));
                print!("{}", report::render_assessment(&assessment));
            }
        }
        Commands::Check {
            csv,
            value_column,
            group_column,
        } => {
            let sample =
                dataset::load_sample(&csv, &value_column, group_column.as_deref(), None)?;
            let residuals = compute_residuals(&sample.values, sample.groups.as_deref())?;
            let assessment = assess_normality(&residuals.residuals)?;
            print!("{}", report::render_assessment(&assessment));
        }
        Commands::Plot {
            csv,
            value_column,
            group_column,
            qq,
            points,
            output,
        } => {
            let sample =
                dataset::load_sample(&csv, &value_column, group_column.as_deref(), None)?;

            let svg = if qq {
                let residuals =
                    compute_residuals(&sample.values, sample.groups.as_deref())?;
                figure::qq_svg(&normal_qq(&residuals.residuals)?)
            } else {
                let summaries =
                    group_summaries(&sample.values, sample.groups.as_deref())?;
                let raw = points.then(|| raw_overlay(&sample));
                figure::mean_se_svg(&summaries, raw)
            };

            fs::write(&output, svg)
                .with_context(|| format!("cannot write {}", output.display()))?;
            info!(path = %output.display(), "figure written");
        }
    }

    Ok(())
}

fn raw_overlay(sample: &Sample) -> (&[f64], Option<&[String]>) {
    (sample.values.as_slice(), sample.groups.as_deref())
}
