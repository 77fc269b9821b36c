use std::fmt::Write;

use mc_core::{DecodedModel, DisplayConfig};

/// Render a decoded model as the original result-container markup.
///
/// Mirrors the model-checker page output: one `<p>` per field inside a
/// `div.result-container`, with the product type and its category wrapped
/// in a `highlight` span when `config.highlight_category` is set. Field
/// values are HTML-escaped.
///
/// # Example
/// ```
/// use mc_core::{DisplayConfig, decode};
/// let m = decode("AB123XSNA12").unwrap();
/// let out = mc_render::html::render(&m, &DisplayConfig::default());
/// assert!(out.contains(r#"<div class="result-container">"#));
/// assert!(out.contains(r#"<span class="highlight">S (NASA)</span>"#));
/// ```
#[must_use]
pub fn render(model: &DecodedModel, config: &DisplayConfig) -> String {
    let mut out = String::from("<div class=\"result-container\">\n");
    if config.show_model {
        push_field(&mut out, "Model", &escape(&model.model));
    }
    push_field(&mut out, "Classification", &escape(&model.classification));
    push_field(
        &mut out,
        "Capacity",
        &format!("{} {}", escape(&model.capacity), escape(&config.capacity_unit)),
    );

    let type_value = format!(
        "{} ({})",
        escape_char(model.product_type),
        model.category
    );
    let type_value = if config.highlight_category {
        format!("<span class=\"highlight\">{type_value}</span>")
    } else {
        type_value
    };
    push_field(&mut out, "Product Type", &type_value);

    push_field(
        &mut out,
        "Product Notation",
        &escape_char(model.product_notation),
    );
    push_field(&mut out, "Feature", &escape_char(model.feature));
    push_field(
        &mut out,
        "Rating Voltage",
        &escape_char(model.rating_voltage),
    );
    push_field(&mut out, "Mode", &escape_char(model.mode));
    out.push_str("</div>\n");
    out
}

fn push_field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  <p><strong>{label}:</strong> {value}</p>");
}

/// Escape the characters HTML treats specially in text and attribute
/// positions.
#[must_use]
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_char(c: char) -> String {
    escape(&c.to_string())
}
