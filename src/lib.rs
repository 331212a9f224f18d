//! Kernel configuration generator.
//!
//! Holds the kernel configuration chosen in the form ([`ConfigModel`]),
//! checks every edit against the field bounds and cross-field rules, and
//! renders the `kconfig.h` header declaring the thread stacks
//! ([`render`]). The browser front-end in `main.rs` drives this crate; the
//! functions at the bottom expose the same core to plain JavaScript.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod field;
pub mod generate;
pub mod model;
pub mod render;
pub mod utils;

pub use error::{GenerateError, PreconditionError, ValidationError};
pub use field::{find_field, Bounds, FieldId, FieldKind, Section};
pub use generate::{generate, OutputDestination, ResultReporter};
pub use model::{
    is_mailbox_ack_available, is_pipe_type_available, ConfigModel, PipeType, ResizePolicy,
    SchedulerMode, ThreadEntry,
};
pub use render::{extern_block, render};

fn deserialize_config(config: JsValue) -> Result<ConfigModel, JsValue> {
    serde_wasm_bindgen::from_value(config).map_err(|e| {
        JsValue::from_str(&format!("Failed to deserialize configuration: {}", e))
    })
}

/// Render the header for a configuration object coming from JavaScript.
///
/// # Arguments
/// * `config` - Serialized [`ConfigModel`]; missing fields take their defaults,
///   unknown fields are rejected
///
/// # Returns
/// The header text, or the violation messages joined into one error string
#[wasm_bindgen]
pub fn render_config_header(config: JsValue) -> Result<String, JsValue> {
    let model = deserialize_config(config)?;
    render(&model).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// List the violations of a configuration object coming from JavaScript.
///
/// Returns an array of messages; an empty array means the configuration is valid.
#[wasm_bindgen]
pub fn validate_config(config: JsValue) -> Result<JsValue, JsValue> {
    let model = deserialize_config(config)?;
    let messages: Vec<String> = model.validate().iter().map(ToString::to_string).collect();
    serde_wasm_bindgen::to_value(&messages).map_err(JsValue::from)
}
