// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine - Report Digest

//! Flattened, human- and LLM-readable digests of engine output.
//!
//! A [`ReportSummary`] is what the presentation layer hands to a narrative
//! generator: a context label plus one line per fact.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::adapter::{round_ratio, to_money};
use crate::types::{MixReport, PoasInputs, PoasMetrics, RoasInputs, RoasMetrics, Series};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Free-text label naming the analysis ("Marketing Mix analysis").
    pub context: String,
    pub lines: Vec<String>,
}

impl ReportSummary {
    pub fn new(context: impl Into<String>) -> Self {
        Self { context: context.into(), lines: Vec::new() }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The data block without the context label.
    pub fn data(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.context)?;
        for line in &self.lines {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

pub fn summarize_mix(report: &MixReport) -> ReportSummary {
    let mut summary = ReportSummary::new("Marketing Mix analysis");
    for row in &report.rows {
        summary.push(format!(
            "{}: Budget {}, ROAS {:.2}",
            row.name,
            to_money(row.budget),
            round_ratio(row.result.roas)
        ));
    }
    if !report.is_empty() {
        summary.push(format!(
            "Total: Budget {}, Revenue {}, ROAS {:.2}",
            to_money(report.totals.budget),
            to_money(report.totals.revenue),
            round_ratio(report.totals.roas)
        ));
    }
    summary
}

pub fn summarize_roas(inputs: &RoasInputs, metrics: &RoasMetrics) -> ReportSummary {
    let mut summary = ReportSummary::new("ROAS & POAS analysis");
    summary.push(format!(
        "Gross margin: {}%, Ad spend: {}, ROAS target: {}, Total revenue: {}, Monthly profit: {}",
        inputs.gross_margin,
        to_money(inputs.ad_spend),
        inputs.roas_target,
        to_money(metrics.total_revenue),
        to_money(metrics.monthly_profit)
    ));
    summary.push(format!("Break-even ROAS: {:.2}", round_ratio(metrics.break_even_roas)));
    summary
}

pub fn summarize_poas(inputs: &PoasInputs, metrics: &PoasMetrics) -> ReportSummary {
    let mut summary = ReportSummary::new("POAS analysis");
    summary.push(format!(
        "Ad spend: {}, Product cost: {}, Variable cost: {}, Sales: {}, Sale price: {}, Total profit: {}, POAS: {:.2}",
        to_money(inputs.ad_spend),
        to_money(inputs.product_cost),
        to_money(inputs.variable_cost),
        inputs.sales_count,
        to_money(inputs.sale_price),
        to_money(metrics.total_profit),
        round_ratio(metrics.poas)
    ));
    summary
}

pub fn summarize_series(series: &Series) -> ReportSummary {
    let mut summary = ReportSummary::new(series.name.clone());
    for point in &series.points {
        summary.push(format!(
            "{} {}: {} {:.2}",
            series.x_label,
            point.input,
            series.y_label,
            round_ratio(point.value)
        ));
    }
    match series.break_even_input() {
        Some(x) => summary.push(format!("Reaches {} at {} {}", series.reference_line, series.x_label, x)),
        None => summary.push(format!("Never reaches {} in the swept range", series.reference_line)),
    }
    summary
}
