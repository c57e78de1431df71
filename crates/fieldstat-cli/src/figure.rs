//! Hand-rolled SVG figures: group mean +/- SE chart and QQ diagnostic.
//!
//! Only the plotted numbers are contractual; layout constants are
//! presentation choices.

use std::fmt::Write;

use fieldstat_core::diagnostics::QqPoint;
use fieldstat_core::summary::GroupSummary;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 360.0;
const MARGIN: f64 = 48.0;

fn svg_escape(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

fn header(out: &mut String) {
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\">"
    );
    let _ = write!(
        out,
        "<rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"white\"/>"
    );
}

/// Linear map from data space to pixel space, y inverted
struct Scale {
    lo: f64,
    span: f64,
}

impl Scale {
    fn new(lo: f64, hi: f64) -> Self {
        // zero-extent data still gets a visible band
        let pad = if hi > lo { (hi - lo) * 0.08 } else { 1.0 };
        Self {
            lo: lo - pad,
            span: (hi - lo) + 2.0 * pad,
        }
    }

    fn y(&self, v: f64) -> f64 {
        HEIGHT - MARGIN - (v - self.lo) / self.span * (HEIGHT - 2.0 * MARGIN)
    }

    fn x(&self, v: f64) -> f64 {
        MARGIN + (v - self.lo) / self.span * (WIDTH - 2.0 * MARGIN)
    }
}

/// Mean +/- standard-error chart, one error bar per group, optionally
/// overlaid with the raw observations.
///
/// `raw` must be parallel to the group labels used to build `summaries`;
/// pass `None` to plot summaries alone.
pub fn mean_se_svg(summaries: &[GroupSummary], raw: Option<(&[f64], Option<&[String]>)>) -> String {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for s in summaries {
        lo = lo.min(s.mean - 2.0 * s.std_error);
        hi = hi.max(s.mean + 2.0 * s.std_error);
    }
    if let Some((values, _)) = raw {
        for v in values {
            lo = lo.min(*v);
            hi = hi.max(*v);
        }
    }
    let scale = Scale::new(lo, hi);

    let k = summaries.len() as f64;
    let slot = (WIDTH - 2.0 * MARGIN) / k;
    let group_x = |i: usize| MARGIN + (i as f64 + 0.5) * slot;

    let mut out = String::new();
    header(&mut out);

    // y axis with extreme ticks
    let _ = write!(
        out,
        "<line x1=\"{m}\" y1=\"{t}\" x2=\"{m}\" y2=\"{b}\" stroke=\"black\"/>",
        m = MARGIN,
        t = MARGIN,
        b = HEIGHT - MARGIN
    );
    for v in [scale.lo, scale.lo + scale.span] {
        let _ = write!(
            out,
            "<text x=\"{x}\" y=\"{y}\" font-size=\"10\" text-anchor=\"end\">{v:.2}</text>",
            x = MARGIN - 6.0,
            y = scale.y(v) + 3.0
        );
    }

    // raw observations behind the error bars, deterministically jittered
    if let Some((values, labels)) = raw {
        for (j, value) in values.iter().enumerate() {
            let group = match labels {
                Some(ls) => summaries
                    .iter()
                    .position(|s| s.label == ls[j])
                    .unwrap_or(0),
                None => 0,
            };
            let jitter = ((j % 7) as f64 - 3.0) * 3.0;
            let _ = write!(
                out,
                "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"2.5\" fill=\"steelblue\" fill-opacity=\"0.5\"/>",
                x = group_x(group) + jitter,
                y = scale.y(*value)
            );
        }
    }

    for (i, s) in summaries.iter().enumerate() {
        let x = group_x(i);
        let (top, bottom) = (scale.y(s.mean + s.std_error), scale.y(s.mean - s.std_error));
        let _ = write!(
            out,
            "<line x1=\"{x}\" y1=\"{top:.2}\" x2=\"{x}\" y2=\"{bottom:.2}\" stroke=\"black\" stroke-width=\"1.5\"/>"
        );
        for cap in [top, bottom] {
            let _ = write!(
                out,
                "<line x1=\"{x1:.2}\" y1=\"{cap:.2}\" x2=\"{x2:.2}\" y2=\"{cap:.2}\" stroke=\"black\" stroke-width=\"1.5\"/>",
                x1 = x - 6.0,
                x2 = x + 6.0
            );
        }
        let _ = write!(
            out,
            "<circle cx=\"{x}\" cy=\"{y:.2}\" r=\"4\" fill=\"black\"/>",
            y = scale.y(s.mean)
        );
        let _ = write!(
            out,
            "<text x=\"{x}\" y=\"{y}\" font-size=\"12\" text-anchor=\"middle\">",
            y = HEIGHT - MARGIN + 16.0
        );
        svg_escape(&mut out, if s.label.is_empty() { "sample" } else { &s.label });
        out.push_str("</text>");
    }

    out.push_str("</svg>");
    out
}

/// QQ scatter with the y = x reference line.
pub fn qq_svg(points: &[QqPoint]) -> String {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in points {
        lo = lo.min(p.theoretical).min(p.sample);
        hi = hi.max(p.theoretical).max(p.sample);
    }
    let scale = Scale::new(lo, hi);

    let mut out = String::new();
    header(&mut out);

    let _ = write!(
        out,
        "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"grey\" stroke-dasharray=\"4 3\"/>",
        x1 = scale.x(scale.lo),
        y1 = scale.y(scale.lo),
        x2 = scale.x(scale.lo + scale.span),
        y2 = scale.y(scale.lo + scale.span)
    );

    for p in points {
        let _ = write!(
            out,
            "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"3\" fill=\"steelblue\"/>",
            x = scale.x(p.theoretical),
            y = scale.y(p.sample)
        );
    }

    let _ = write!(
        out,
        "<text x=\"{x}\" y=\"{y}\" font-size=\"11\" text-anchor=\"middle\">theoretical quantiles</text>",
        x = WIDTH / 2.0,
        y = HEIGHT - 12.0
    );
    out.push_str("</svg>");
    out
}
