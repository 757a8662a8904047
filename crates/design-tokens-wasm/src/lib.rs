//! WASM bindings for the design token generator.
//!
//! Exposes `generate()` to JavaScript stylesheet pipelines via wasm-bindgen.
//! Token collections come in as a plain object of `key → { items: [...] }`;
//! the result is `{ root, utilities, css }`, which the caller inserts into its
//! own stylesheet tree (root first, utilities last).

use design_tokens_codegen::{GeneratedStylesheet, GroupConfig};
use design_tokens_store::{CollectionDocument, MemorySource, TokenStore};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Generate custom properties and utility classes from design tokens.
///
/// `config` may be `undefined`, in which case the default group tables apply.
/// Returns `{ root: string, utilities: string[], css: string }`.
/// Throws a JS error if any collection is missing, collides, or is invalid.
#[wasm_bindgen]
pub fn generate(tokens: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let documents: HashMap<String, CollectionDocument> = serde_wasm_bindgen::from_value(tokens)
        .map_err(|e| JsError::new(&format!("Invalid token collections: {e}")))?;

    let config: GroupConfig = if config.is_undefined() || config.is_null() {
        GroupConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid group config: {e}")))?
    };

    let output = native_generate(documents, &config).map_err(|e| JsError::new(&e))?;

    let utilities = js_sys::Array::new();
    for rule in &output.utilities {
        utilities.push(&rule.to_css().into());
    }

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"root".into(), &output.root.to_css().into())
        .map_err(|_| JsError::new("Failed to set root property"))?;
    js_sys::Reflect::set(&js_obj, &"utilities".into(), &utilities.into())
        .map_err(|_| JsError::new("Failed to set utilities property"))?;
    js_sys::Reflect::set(&js_obj, &"css".into(), &output.to_css().into())
        .map_err(|_| JsError::new("Failed to set css property"))?;

    Ok(js_obj.into())
}

/// Get the generator version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// The pipeline behind [`generate`], without any JS types.
fn native_generate(
    documents: HashMap<String, CollectionDocument>,
    config: &GroupConfig,
) -> Result<GeneratedStylesheet, String> {
    let source: MemorySource = documents.into_iter().collect();
    let store = TokenStore::load(&source, config.collection_keys()).map_err(|e| e.to_string())?;
    design_tokens_codegen::generate(&store, config).map_err(|e| e.to_string())
}
