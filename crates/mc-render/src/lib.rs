/// Rendering adapters for decoded model numbers.
///
/// Pure string-producing adapters over [`mc_core::DecodedModel`]: labeled
/// plain text, the original result-container HTML, and a JSON record. No
/// adapter touches stdout or the filesystem; that is the app's concern.

pub mod html;
pub mod json;
pub mod text;

use mc_core::{DecodedModel, DisplayConfig, OutputFormat};

/// Render a decoded model with the adapter selected by the config.
///
/// # Errors
/// Only the JSON adapter can fail, on serialization.
///
/// # Example
/// ```
/// use mc_core::{DisplayConfig, decode};
/// let m = decode("AJ052TXJ3KG").unwrap();
/// let out = mc_render::render(&m, &DisplayConfig::default()).unwrap();
/// assert!(out.contains("Capacity: 052 kW"));
/// ```
pub fn render(model: &DecodedModel, config: &DisplayConfig) -> Result<String, serde_json::Error> {
    log::trace!("rendering {} as {:?}", model.model, config.format);
    match config.format {
        OutputFormat::Text => Ok(text::render(model, config)),
        OutputFormat::Html => Ok(html::render(model, config)),
        OutputFormat::Json => json::render(model),
    }
}
