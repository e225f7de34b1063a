// Command-line surface for the mixcalc runner

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mixcalc", version, about = "Marketing mix, ROAS and POAS calculator")]
pub struct Cli {
    /// TOML scenario file with [[channels]], [roas] and [poas] sections
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the full result as pretty JSON
    #[arg(long, global = true, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Write the sweep series as JSONL, one point per line
    #[arg(long, global = true, value_name = "FILE")]
    pub series: Option<PathBuf>,

    /// Print the text digest handed to narrative generators
    #[arg(long, global = true)]
    pub digest: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Per-channel clicks, conversions, revenue and ROAS
    Mix,
    /// Break-even ROAS and profit at a ROAS target
    Roas(RoasArgs),
    /// Profit on ad spend from unit costs and sales
    Poas(PoasArgs),
    /// Break-even ROAS across gross margins 5-95%
    BreakEven,
}

#[derive(Debug, Args, Default)]
pub struct RoasArgs {
    /// Gross margin in percent
    #[arg(long)]
    pub margin: Option<f64>,
    #[arg(long)]
    pub ad_spend: Option<f64>,
    #[arg(long)]
    pub target: Option<f64>,
}

#[derive(Debug, Args, Default)]
pub struct PoasArgs {
    #[arg(long)]
    pub ad_spend: Option<f64>,
    #[arg(long)]
    pub product_cost: Option<f64>,
    #[arg(long)]
    pub variable_cost: Option<f64>,
    #[arg(long)]
    pub sales: Option<u32>,
    #[arg(long)]
    pub price: Option<f64>,
}

impl RoasArgs {
    /// Flags override values from the scenario file.
    pub fn apply(&self, mut base: roas_engine::RoasInputs) -> roas_engine::RoasInputs {
        if let Some(v) = self.margin { base.gross_margin = v; }
        if let Some(v) = self.ad_spend { base.ad_spend = v; }
        if let Some(v) = self.target { base.roas_target = v; }
        base
    }
}

impl PoasArgs {
    pub fn apply(&self, mut base: roas_engine::PoasInputs) -> roas_engine::PoasInputs {
        if let Some(v) = self.ad_spend { base.ad_spend = v; }
        if let Some(v) = self.product_cost { base.product_cost = v; }
        if let Some(v) = self.variable_cost { base.variable_cost = v; }
        if let Some(v) = self.sales { base.sales_count = v; }
        if let Some(v) = self.price { base.sale_price = v; }
        base
    }
}
