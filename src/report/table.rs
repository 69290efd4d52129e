//! Plain-text renderings of a training run for terminal output.

use std::fmt::Write;

use crate::network::Weights;
use crate::train::{EpochStats, ReportRow, SessionConfig, Summary};

const HEADERS: [&str; 6] = ["Epoch", "o1", "o2", "y1 dev %", "y2 dev %", "Total error"];

/// Renders report rows as a fixed-width table with a header and separator.
pub fn render_table(rows: &[ReportRow]) -> String {
    let cells: Vec<[String; 6]> = rows.iter()
        .map(|r| [
            r.epoch.to_string(),
            format!("{:.4}", r.o1),
            format!("{:.4}", r.o2),
            format!("{:.2}", r.y1_deviation_pct),
            format!("{:.2}", r.y2_deviation_pct),
            format!("{:.6}", r.total_error),
        ])
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().copied(), &widths);
    let separator: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_line(&mut out, separator.iter().map(String::as_str), &widths);
    for row in &cells {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells.zip(widths.iter())
        .map(|(cell, &w)| format!("{cell:>w$}"))
        .collect();
    out.push_str(&line.join(" | "));
    out.push('\n');
}

/// Two-line headline: final outputs, then final error with its reduction.
pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Final outputs: o1 = {:.4}, o2 = {:.4}\nTotal error: {:.6} (reduced by {:.2}%)\n",
        summary.o1, summary.o2, summary.final_error, summary.error_reduction_pct,
    )
}

/// Step-by-step account of a single epoch: forward pass, errors, output
/// deltas and the output weights before and after the update.
///
/// `stats` must come from `train_epoch` run with `config` on weights
/// `before`, which it turned into `after`.
pub fn render_walkthrough(
    config: &SessionConfig,
    before: &Weights,
    stats: &EpochStats,
    after: &Weights,
) -> String {
    let (x1, x2) = (config.x1, config.x2);
    let pass = &stats.pass;
    let grads = &stats.gradients;

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Epoch {} forward pass", stats.epoch);
    let _ = writeln!(out, "  z1 = x1*w1 + x2*w3 = {x1}*{} + {x2}*{} = {:.6}", before.w1, before.w3, pass.z1);
    let _ = writeln!(out, "  z2 = x1*w2 + x2*w4 = {x1}*{} + {x2}*{} = {:.6}", before.w2, before.w4, pass.z2);
    let _ = writeln!(out, "  h1 = sigmoid(z1) = {:.6}", pass.h1);
    let _ = writeln!(out, "  h2 = sigmoid(z2) = {:.6}", pass.h2);
    let _ = writeln!(out, "  z3 = h1*w5 + h2*w6 = {:.6}", pass.z3);
    let _ = writeln!(out, "  z4 = h1*w7 + h2*w8 = {:.6}", pass.z4);
    let _ = writeln!(out, "  o1 = sigmoid(z3) = {:.6}", pass.o1);
    let _ = writeln!(out, "  o2 = sigmoid(z4) = {:.6}", pass.o2);
    let _ = writeln!(out, "Error");
    let _ = writeln!(out, "  E1 = 0.5*(y1 - o1)^2 = {:.6}", stats.e1);
    let _ = writeln!(out, "  E2 = 0.5*(y2 - o2)^2 = {:.6}", stats.e2);
    let _ = writeln!(out, "  E_total = {:.6}", stats.total_error);
    let _ = writeln!(out, "Output deltas");
    let _ = writeln!(out, "  d_o1 = -(y1 - o1) * o1 * (1 - o1) = {:.6}", grads.d_o1);
    let _ = writeln!(out, "  d_o2 = -(y2 - o2) * o2 * (1 - o2) = {:.6}", grads.d_o2);
    let _ = writeln!(out, "Weight update, lr = {} (w1..w4 unchanged)", config.learning_rate);
    for (name, old, new) in [
        ("w5", before.w5, after.w5),
        ("w6", before.w6, after.w6),
        ("w7", before.w7, after.w7),
        ("w8", before.w8, after.w8),
    ] {
        let _ = writeln!(out, "  {name}: {old:.6} -> {new:.6}");
    }
    out
}
