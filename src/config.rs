// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine - Scenario Configuration

//! Input source for the engine: a TOML scenario file.
//!
//! ```toml
//! [[channels]]
//! name = "Google Ads"
//! kind = "cpc"
//! budget = 5000
//! cpc = 5.0
//! conversion_rate = 2.0
//! average_order_value = 500
//!
//! [roas]
//! gross_margin = 35
//! ad_spend = 10000
//! roas_target = 2.0
//! ```
//!
//! The engine never validates ranges; [`ScenarioFile::validated`] is where
//! percentages are clamped into 0-100 and amounts to non-negative.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::types::{ChannelInput, ChannelTraffic, PoasInputs, RoasInputs};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read scenario file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// Scenario file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScenarioFile {
    #[serde(default)]
    pub channels: Vec<ChannelInput>,
    #[serde(default)]
    pub roas: Option<RoasInputs>,
    #[serde(default)]
    pub poas: Option<PoasInputs>,
}

impl ScenarioFile {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_toml_str(&contents)?;
        debug!(
            path = %path.display(),
            channels = file.channels.len(),
            roas = file.roas.is_some(),
            poas = file.poas.is_some(),
            "loaded scenario file"
        );
        Ok(file)
    }

    /// The five default channels with their starting form values.
    pub fn default_mix() -> Vec<ChannelInput> {
        vec![
            ChannelInput::cpc("Google Ads", 5000.0, 5.0, 2.0, 500.0),
            ChannelInput::cpc("Facebook Ads", 5000.0, 5.0, 2.0, 500.0),
            ChannelInput::seo("SEO", 5000.0, 10_000.0, 5.0, 2.0, 500.0),
            ChannelInput::email("E-mail", 5000.0, 5000.0, 20.0, 5.0, 2.0, 500.0),
            ChannelInput::cpc("Display", 5000.0, 5.0, 2.0, 500.0),
        ]
    }

    /// Copy with every field clamped into its valid range.
    pub fn validated(&self) -> Self {
        Self {
            channels: self.channels.iter().map(validate_channel).collect(),
            roas: self.roas.as_ref().map(validate_roas),
            poas: self.poas.as_ref().map(validate_poas),
        }
    }
}

// ---------------------------------------------------------------------------
// Range validation
// ---------------------------------------------------------------------------

fn clamp_field(scope: &str, field: &'static str, value: f64, min: f64, max: f64) -> f64 {
    let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
    if clamped != value || value.is_nan() {
        warn!(scope, field, value, clamped, "input out of range, clamped");
    }
    clamped
}

fn percent(scope: &str, field: &'static str, value: f64) -> f64 {
    clamp_field(scope, field, value, 0.0, 100.0)
}

/// Largest sales count accepted from a form; the POAS sweep holds one point per sale.
pub const MAX_SALES_SWEEP: u32 = 100_000;

fn sales(scope: &str, field: &'static str, value: u32) -> u32 {
    let clamped = value.clamp(1, MAX_SALES_SWEEP);
    if clamped != value {
        warn!(scope, field, value, clamped, "input out of range, clamped");
    }
    clamped
}

fn amount(scope: &str, field: &'static str, value: f64) -> f64 {
    clamp_field(scope, field, value, 0.0, f64::INFINITY)
}

pub fn validate_channel(channel: &ChannelInput) -> ChannelInput {
    let scope = channel.name.as_str();
    let traffic = match channel.traffic {
        ChannelTraffic::Cpc { cpc } => ChannelTraffic::Cpc { cpc: amount(scope, "cpc", cpc) },
        ChannelTraffic::Seo { search_volume, organic_ctr } => ChannelTraffic::Seo {
            search_volume: amount(scope, "search_volume", search_volume),
            organic_ctr: percent(scope, "organic_ctr", organic_ctr),
        },
        ChannelTraffic::Email { recipients, open_rate, click_through_rate } => ChannelTraffic::Email {
            recipients: amount(scope, "recipients", recipients),
            open_rate: percent(scope, "open_rate", open_rate),
            click_through_rate: percent(scope, "click_through_rate", click_through_rate),
        },
    };

    ChannelInput {
        name: channel.name.clone(),
        traffic,
        budget: amount(scope, "budget", channel.budget),
        conversion_rate: percent(scope, "conversion_rate", channel.conversion_rate),
        average_order_value: amount(scope, "average_order_value", channel.average_order_value),
    }
}

pub fn validate_roas(inputs: &RoasInputs) -> RoasInputs {
    RoasInputs {
        gross_margin: percent("roas", "gross_margin", inputs.gross_margin),
        ad_spend: amount("roas", "ad_spend", inputs.ad_spend),
        roas_target: amount("roas", "roas_target", inputs.roas_target),
    }
}

pub fn validate_poas(inputs: &PoasInputs) -> PoasInputs {
    PoasInputs {
        ad_spend: amount("poas", "ad_spend", inputs.ad_spend),
        product_cost: amount("poas", "product_cost", inputs.product_cost),
        variable_cost: amount("poas", "variable_cost", inputs.variable_cost),
        sales_count: sales("poas", "sales_count", inputs.sales_count),
        sale_price: amount("poas", "sale_price", inputs.sale_price),
    }
}
