use mc_core::DecodedModel;

/// Render a decoded model as a pretty-printed JSON record.
///
/// The category serializes with its display label ("NASA", "Non-NASA",
/// "Other").
///
/// # Errors
/// Propagates `serde_json` serialization failures.
///
/// # Example
/// ```
/// use mc_core::decode;
/// let m = decode("AB123XSNA12").unwrap();
/// let out = mc_render::json::render(&m).unwrap();
/// assert!(out.contains("\"category\": \"NASA\""));
/// ```
pub fn render(model: &DecodedModel) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(model)
}
