// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine - Type Definitions

use serde::{Deserialize, Serialize};

// ─── Channel Traffic Model ──────────────────────────────────────────────────

/// How a channel turns its inputs into clicks. Each variant carries only the
/// fields its traffic formula reads; a field left out of the input is 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChannelTraffic {
    /// Paid clicks bought at a fixed cost per click.
    Cpc {
        #[serde(default)]
        cpc: f64,
    },
    /// Organic search: monthly search volume times organic CTR (percent).
    Seo {
        #[serde(default)]
        search_volume: f64,
        #[serde(default)]
        organic_ctr: f64,
    },
    /// Mailing: recipients times open rate times click-through rate (percent).
    Email {
        #[serde(default)]
        recipients: f64,
        #[serde(default)]
        open_rate: f64,
        #[serde(default)]
        click_through_rate: f64,
    },
}

impl ChannelTraffic {
    pub fn kind(&self) -> ChannelKind {
        match self {
            Self::Cpc { .. } => ChannelKind::Cpc,
            Self::Seo { .. } => ChannelKind::Seo,
            Self::Email { .. } => ChannelKind::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Cpc = 0,
    Seo = 1,
    Email = 2,
}

impl ChannelKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpc => "CPC",
            Self::Seo => "SEO",
            Self::Email => "E-mail",
        }
    }
}

// ─── ChannelInput ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelInput {
    pub name: String,
    #[serde(flatten)]
    pub traffic: ChannelTraffic,
    /// Spend on the channel. May be zero for SEO and e-mail.
    #[serde(default)]
    pub budget: f64,
    /// Percent of clicks that convert (0-100).
    #[serde(default)]
    pub conversion_rate: f64,
    /// Revenue per conversion.
    #[serde(default)]
    pub average_order_value: f64,
}

impl ChannelInput {
    pub fn cpc(name: impl Into<String>, budget: f64, cpc: f64, conversion_rate: f64, aov: f64) -> Self {
        Self {
            name: name.into(),
            traffic: ChannelTraffic::Cpc { cpc },
            budget,
            conversion_rate,
            average_order_value: aov,
        }
    }

    pub fn seo(
        name: impl Into<String>,
        budget: f64,
        search_volume: f64,
        organic_ctr: f64,
        conversion_rate: f64,
        aov: f64,
    ) -> Self {
        Self {
            name: name.into(),
            traffic: ChannelTraffic::Seo { search_volume, organic_ctr },
            budget,
            conversion_rate,
            average_order_value: aov,
        }
    }

    pub fn email(
        name: impl Into<String>,
        budget: f64,
        recipients: f64,
        open_rate: f64,
        click_through_rate: f64,
        conversion_rate: f64,
        aov: f64,
    ) -> Self {
        Self {
            name: name.into(),
            traffic: ChannelTraffic::Email { recipients, open_rate, click_through_rate },
            budget,
            conversion_rate,
            average_order_value: aov,
        }
    }

    pub fn kind(&self) -> ChannelKind {
        self.traffic.kind()
    }
}

// ─── ChannelResult ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ChannelResult {
    pub clicks: f64,
    pub conversions: f64,
    pub revenue: f64,
    pub roas: f64,
}

// ─── Multi-Channel Report ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelRow {
    pub name: String,
    pub kind: ChannelKind,
    pub budget: f64,
    pub result: ChannelResult,
    /// Share of the total budget, in percent.
    pub budget_share: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixTotals {
    pub budget: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub revenue: f64,
    pub roas: f64,
}

/// Channel rows in input order plus the blended totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MixReport {
    pub rows: Vec<ChannelRow>,
    pub totals: MixTotals,
}

impl MixReport {
    pub fn get(&self, name: &str) -> Option<&ChannelResult> {
        self.rows.iter().find(|r| r.name == name).map(|r| &r.result)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ─── Business Model Inputs ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoasInputs {
    /// Gross margin in percent.
    pub gross_margin: f64,
    pub ad_spend: f64,
    pub roas_target: f64,
}

impl Default for RoasInputs {
    fn default() -> Self {
        Self { gross_margin: 35.0, ad_spend: 10_000.0, roas_target: 2.0 }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoasMetrics {
    pub break_even_roas: f64,
    pub total_revenue: f64,
    pub monthly_profit: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PoasInputs {
    pub ad_spend: f64,
    pub product_cost: f64,
    pub variable_cost: f64,
    pub sales_count: u32,
    pub sale_price: f64,
}

impl Default for PoasInputs {
    fn default() -> Self {
        Self {
            ad_spend: 10_000.0,
            product_cost: 100.0,
            variable_cost: 50.0,
            sales_count: 100,
            sale_price: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PoasMetrics {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_profit: f64,
    pub poas: f64,
}

// ─── Sweep Series ────────────────────────────────────────────────────────────

/// One swept value and the metric derived at that value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScenarioPoint {
    pub input: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub name: String,
    pub x_label: String,
    pub y_label: String,
    /// Level at which the plotted metric breaks even (profit 0, POAS 1).
    pub reference_line: f64,
    pub points: Vec<ScenarioPoint>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn inputs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.input)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// First swept input whose value reaches the reference line.
    pub fn break_even_input(&self) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.value >= self.reference_line)
            .map(|p| p.input)
    }
}
