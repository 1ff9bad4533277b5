//! WASM-compatible wrapper for slide deck planning.
//!
//! This crate exposes parsing, template listing and deck planning to
//! JavaScript for use in Cloudflare Workers.

use serde::{Deserialize, Serialize};
use slidegen_core::{DeckBuilder, DeckPlan, SlideRecord, TemplateOverrides, TemplateRegistry};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Summary of one catalog template.
#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateInfo {
    pub name: String,
    pub font_family: String,
    pub title_font_size: u32,
    pub content_font_size: u32,
}

/// Parse slide markup into slide records.
///
/// # Arguments
/// * `text` - The slide description text
///
/// # Returns
/// A JavaScript array of slide records. Never throws on malformed markup.
#[wasm_bindgen]
pub fn parse_slides(text: &str) -> Result<JsValue, JsValue> {
    let slides: Vec<SlideRecord> = slidegen_core::parse(text);

    serde_wasm_bindgen::to_value(&slides)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// List the built-in templates in catalog order.
#[wasm_bindgen]
pub fn list_templates() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&list_templates_impl())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn list_templates_impl() -> Vec<TemplateInfo> {
    TemplateRegistry::builtin()
        .iter()
        .map(|t| TemplateInfo {
            name: t.name.clone(),
            font_family: t.font_family.clone(),
            title_font_size: t.title_font_size,
            content_font_size: t.content_font_size,
        })
        .collect()
}

/// Parse slide markup and resolve it against a built-in template.
///
/// # Arguments
/// * `text` - The slide description text
/// * `template_name` - Name of a built-in template
/// * `overrides` - Optional customization object (`font_family`,
///   `title_font_size`, `theme_color`, ...), or `undefined`
///
/// # Returns
/// A JavaScript object with the deck plan, or throws on error.
#[wasm_bindgen]
pub fn plan_deck(text: &str, template_name: &str, overrides: JsValue) -> Result<JsValue, JsValue> {
    let overrides: TemplateOverrides = if overrides.is_undefined() || overrides.is_null() {
        TemplateOverrides::default()
    } else {
        serde_wasm_bindgen::from_value(overrides)
            .map_err(|e| JsValue::from_str(&format!("Invalid overrides: {}", e)))?
    };

    let plan = plan_deck_impl(text, template_name, overrides).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&plan)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn plan_deck_impl(
    text: &str,
    template_name: &str,
    overrides: TemplateOverrides,
) -> Result<DeckPlan, String> {
    let registry = TemplateRegistry::builtin();
    DeckBuilder::new(&registry)
        .with_overrides(overrides)
        .plan(text, template_name)
        .map_err(|e| e.to_string())
}
