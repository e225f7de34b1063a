// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine - Presentation Session State

//! Page navigation and form state for a frontend. Nothing in the engine
//! reads this; it only calls into the engine when a view is requested.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::aggregator::compute_mix;
use crate::break_even::{poas_metrics, roas_metrics};
use crate::config::{validate_channel, validate_poas, validate_roas, ScenarioFile};
use crate::digest::{summarize_mix, summarize_poas, summarize_roas, ReportSummary};
use crate::sweep::{poas_curve, profit_curve};
use crate::types::{ChannelInput, MixReport, PoasInputs, PoasMetrics, RoasInputs, RoasMetrics, Series};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home = 0,
    Roas = 1,
    Mix = 2,
}

/// Which calculator the ROAS page shows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoasMode {
    #[default]
    Roas = 0,
    Poas = 1,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NavEvent {
    OpenRoas,
    OpenMix,
    Back,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavState {
    pub page: Page,
    pub roas_mode: RoasMode,
}

impl NavState {
    /// Apply a navigation event. Opening a calculator is only possible from
    /// the home page; `Back` always returns home.
    pub fn apply(self, event: NavEvent) -> Self {
        let page = match (self.page, event) {
            (Page::Home, NavEvent::OpenRoas) => Page::Roas,
            (Page::Home, NavEvent::OpenMix) => Page::Mix,
            (_, NavEvent::Back) => Page::Home,
            (page, _) => page,
        };
        Self { page, ..self }
    }

    pub fn with_roas_mode(self, roas_mode: RoasMode) -> Self {
        Self { roas_mode, ..self }
    }
}

// ─── Views ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RoasView {
    pub inputs: RoasInputs,
    pub metrics: RoasMetrics,
    pub curve: Series,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoasView {
    pub inputs: PoasInputs,
    pub metrics: PoasMetrics,
    pub curve: Series,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct MixView {
    pub report: MixReport,
    pub summary: ReportSummary,
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Form state behind the calculator pages. Inputs are clamped on the way
/// in, so every view is computed from valid ranges.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Session {
    nav: NavState,
    channels: Vec<ChannelInput>,
    roas: RoasInputs,
    poas: PoasInputs,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            nav: NavState::default(),
            channels: ScenarioFile::default_mix(),
            roas: RoasInputs::default(),
            poas: PoasInputs::default(),
        }
    }
}

impl Session {
    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn navigate(&mut self, event: NavEvent) -> NavState {
        self.nav = self.nav.apply(event);
        self.nav
    }

    pub fn set_roas_mode(&mut self, mode: RoasMode) {
        self.nav = self.nav.with_roas_mode(mode);
    }

    pub fn channels(&self) -> &[ChannelInput] {
        &self.channels
    }

    pub fn set_channels(&mut self, channels: Vec<ChannelInput>) {
        self.channels = channels.iter().map(validate_channel).collect();
    }

    /// Deselect a channel by name; returns whether it was active.
    pub fn remove_channel(&mut self, name: &str) -> bool {
        let before = self.channels.len();
        self.channels.retain(|c| c.name != name);
        self.channels.len() != before
    }

    pub fn set_roas_inputs(&mut self, inputs: RoasInputs) {
        self.roas = validate_roas(&inputs);
    }

    pub fn set_poas_inputs(&mut self, inputs: PoasInputs) {
        self.poas = validate_poas(&inputs);
    }

    pub fn mix_view(&self) -> MixView {
        let report = compute_mix(&self.channels);
        let summary = summarize_mix(&report);
        MixView { report, summary }
    }

    pub fn roas_view(&self) -> RoasView {
        let metrics = roas_metrics(&self.roas);
        RoasView {
            inputs: self.roas,
            metrics,
            curve: profit_curve(&self.roas),
            summary: summarize_roas(&self.roas, &metrics),
        }
    }

    pub fn poas_view(&self) -> PoasView {
        let metrics = poas_metrics(&self.poas);
        PoasView {
            inputs: self.poas,
            metrics,
            curve: poas_curve(&self.poas),
            summary: summarize_poas(&self.poas, &metrics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        assert_eq!(NavState::default().page, Page::Home);
    }

    #[test]
    fn opens_calculators_from_home() {
        assert_eq!(NavState::default().apply(NavEvent::OpenRoas).page, Page::Roas);
        assert_eq!(NavState::default().apply(NavEvent::OpenMix).page, Page::Mix);
    }

    #[test]
    fn cannot_jump_between_calculators() {
        let on_roas = NavState::default().apply(NavEvent::OpenRoas);
        assert_eq!(on_roas.apply(NavEvent::OpenMix).page, Page::Roas);
    }

    #[test]
    fn back_returns_home_and_keeps_mode() {
        let state = NavState::default()
            .apply(NavEvent::OpenRoas)
            .with_roas_mode(RoasMode::Poas)
            .apply(NavEvent::Back);
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.roas_mode, RoasMode::Poas);
    }

    #[test]
    fn session_starts_with_default_forms() {
        let session = Session::default();
        assert_eq!(session.channels().len(), 5);
        assert_eq!(session.roas_view().metrics.total_revenue, 20_000.0);
        assert_eq!(session.poas_view().metrics.poas, -0.5);
    }

    #[test]
    fn session_clamps_form_input() {
        let mut session = Session::default();
        session.set_roas_inputs(RoasInputs { gross_margin: 250.0, ad_spend: 10_000.0, roas_target: 2.0 });
        assert_eq!(session.roas_view().inputs.gross_margin, 100.0);

        session.set_poas_inputs(PoasInputs { sales_count: u32::MAX, ..PoasInputs::default() });
        let view = session.poas_view();
        assert_eq!(view.inputs.sales_count, crate::config::MAX_SALES_SWEEP);
        assert_eq!(view.curve.len(), crate::config::MAX_SALES_SWEEP as usize);
    }

    #[test]
    fn removing_a_channel_drops_its_row() {
        let mut session = Session::default();
        assert!(session.remove_channel("SEO"));
        assert!(!session.remove_channel("SEO"));
        let view = session.mix_view();
        assert_eq!(view.report.rows.len(), 4);
        assert!(view.report.get("SEO").is_none());
        assert_eq!(view.summary.lines.len(), 5);
    }
}
