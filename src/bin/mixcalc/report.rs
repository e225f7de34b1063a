// mixcalc report types and table rendering
// JSON output mirrors what is printed, for independent analysis

use serde::Serialize;

use roas_engine::adapter::{round_ratio, to_money};
use roas_engine::digest::ReportSummary;
use roas_engine::{MixReport, PoasInputs, PoasMetrics, RoasInputs, RoasMetrics, Series};

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RunOutput {
    Mix { report: MixReport },
    Roas { inputs: RoasInputs, metrics: RoasMetrics, curve: Series },
    Poas { inputs: PoasInputs, metrics: PoasMetrics, curve: Series },
    BreakEven { curve: Series },
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub timestamp: String,
    pub version: &'static str,
    #[serde(flatten)]
    pub output: RunOutput,
    pub summary: ReportSummary,
}

impl RunOutput {
    pub fn series(&self) -> Option<&Series> {
        match self {
            Self::Mix { .. } => None,
            Self::Roas { curve, .. } | Self::Poas { curve, .. } | Self::BreakEven { curve } => Some(curve),
        }
    }
}

// ─── Table Rendering ────────────────────────────────────────────────────────

pub fn print_mix(report: &MixReport) {
    println!("\n  {:<16} {:>16} {:>10} {:>12} {:>18} {:>7} {:>7}",
        "Channel", "Budget", "Clicks", "Conversions", "Revenue", "ROAS", "Share");
    println!("  {}", "-".repeat(92));
    for row in &report.rows {
        println!("  {:<16} {:>16} {:>10.1} {:>12.2} {:>18} {:>7.2} {:>6.1}%",
            row.name,
            to_money(row.budget).to_string(),
            row.result.clicks,
            row.result.conversions,
            to_money(row.result.revenue).to_string(),
            round_ratio(row.result.roas),
            row.budget_share,
        );
    }
    println!("  {}", "-".repeat(92));
    println!("  {:<16} {:>16} {:>10.1} {:>12.2} {:>18} {:>7.2}\n",
        "Total",
        to_money(report.totals.budget).to_string(),
        report.totals.clicks,
        report.totals.conversions,
        to_money(report.totals.revenue).to_string(),
        round_ratio(report.totals.roas),
    );
}

pub fn print_roas(metrics: &RoasMetrics) {
    println!("\n  Break-even ROAS:   {:.2}", round_ratio(metrics.break_even_roas));
    println!("  Total revenue:     {}", to_money(metrics.total_revenue));
    println!("  Monthly profit:    {}\n", to_money(metrics.monthly_profit));
}

pub fn print_poas(metrics: &PoasMetrics) {
    println!("\n  Total revenue:     {}", to_money(metrics.total_revenue));
    println!("  Total costs:       {}", to_money(metrics.total_costs));
    println!("  Total profit:      {}", to_money(metrics.total_profit));
    println!("  POAS:              {:.2}\n", round_ratio(metrics.poas));
}

pub fn print_series(series: &Series) {
    println!("  {} (break-even at {})", series.name, series.reference_line);
    println!("  {:>10} {:>16}", series.x_label, series.y_label);
    for point in &series.points {
        let marker = if point.value >= series.reference_line { "+" } else { "-" };
        println!("  {:>10} {:>16.2} {}", point.input, point.value, marker);
    }
    println!();
}
