// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine

pub mod types;
pub mod calculator;
pub mod aggregator;
pub mod break_even;
pub mod sweep;

// Presentation-facing layers (depend on the engine, never the reverse)
pub mod adapter;
pub mod money;
pub mod config;
pub mod digest;
pub mod narrative;
pub mod session;

pub use types::*;
pub use calculator::compute;
pub use aggregator::{budget_shares, compute_mix};
pub use break_even::{break_even_roas, poas_metrics, roas_metrics};
pub use sweep::{break_even_curve, poas_curve, profit_curve, sweep};
pub use session::Session;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

// ─── WASM Interface: stateless engine calls ─────────────────────────────────

#[wasm_bindgen]
pub fn compute_channel(input: JsValue) -> Result<JsValue, JsValue> {
    let input: ChannelInput = from_js(input)?;
    Ok(to_js(&compute(&input)))
}

#[wasm_bindgen(js_name = computeMix)]
pub fn compute_mix_js(channels: JsValue) -> Result<JsValue, JsValue> {
    let channels: Vec<ChannelInput> = from_js(channels)?;
    Ok(to_js(&compute_mix(&channels)))
}

#[wasm_bindgen(js_name = roasMetrics)]
pub fn roas_metrics_js(inputs: JsValue) -> Result<JsValue, JsValue> {
    let inputs: RoasInputs = from_js(inputs)?;
    Ok(to_js(&roas_metrics(&inputs)))
}

#[wasm_bindgen(js_name = poasMetrics)]
pub fn poas_metrics_js(inputs: JsValue) -> Result<JsValue, JsValue> {
    let inputs: PoasInputs = from_js(inputs)?;
    Ok(to_js(&poas_metrics(&inputs)))
}

#[wasm_bindgen(js_name = profitCurve)]
pub fn profit_curve_js(inputs: JsValue) -> Result<JsValue, JsValue> {
    let inputs: RoasInputs = from_js(inputs)?;
    Ok(to_js(&profit_curve(&inputs)))
}

#[wasm_bindgen(js_name = poasCurve)]
pub fn poas_curve_js(inputs: JsValue) -> Result<JsValue, JsValue> {
    let inputs = config::validate_poas(&from_js(inputs)?);
    Ok(to_js(&poas_curve(&inputs)))
}

#[wasm_bindgen(js_name = breakEvenCurve)]
pub fn break_even_curve_js() -> JsValue {
    to_js(&break_even_curve())
}

/// Chat messages for the narrative service, built from a `ReportSummary`.
#[wasm_bindgen(js_name = narrativeRequest)]
pub fn narrative_request_js(summary: JsValue) -> Result<JsValue, JsValue> {
    let summary: digest::ReportSummary = from_js(summary)?;
    Ok(to_js(&narrative::NarrativeRequest::from_summary(&summary)))
}

// ─── WASM Interface: session ────────────────────────────────────────────────

#[wasm_bindgen]
impl Session {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        Session::default()
    }

    pub fn get_nav(&self) -> JsValue {
        to_js(&self.nav())
    }

    /// `event` is one of "open_roas", "open_mix", "back".
    pub fn dispatch(&mut self, event: JsValue) -> Result<JsValue, JsValue> {
        let event: session::NavEvent = from_js(event)?;
        let nav = self.navigate(event);
        log(&format!("nav -> {:?}", nav.page));
        Ok(to_js(&nav))
    }

    pub fn select_poas(&mut self, poas: bool) {
        let mode = if poas { session::RoasMode::Poas } else { session::RoasMode::Roas };
        self.set_roas_mode(mode);
    }

    pub fn get_channels(&self) -> JsValue {
        to_js(&self.channels())
    }

    pub fn update_channels(&mut self, channels: JsValue) -> Result<(), JsValue> {
        let channels: Vec<ChannelInput> = from_js(channels)?;
        self.set_channels(channels);
        Ok(())
    }

    pub fn deselect_channel(&mut self, name: &str) -> bool {
        self.remove_channel(name)
    }

    pub fn update_roas(&mut self, inputs: JsValue) -> Result<(), JsValue> {
        let inputs: RoasInputs = from_js(inputs)?;
        self.set_roas_inputs(inputs);
        Ok(())
    }

    pub fn update_poas(&mut self, inputs: JsValue) -> Result<(), JsValue> {
        let inputs: PoasInputs = from_js(inputs)?;
        self.set_poas_inputs(inputs);
        Ok(())
    }

    pub fn mix(&self) -> JsValue {
        to_js(&self.mix_view())
    }

    pub fn roas(&self) -> JsValue {
        to_js(&self.roas_view())
    }

    pub fn poas(&self) -> JsValue {
        to_js(&self.poas_view())
    }

    /// Reset all forms and navigation
    pub fn reset(&mut self) {
        *self = Session::default();
    }
}
