use std::fmt::Write;

use mc_core::{DecodedModel, DisplayConfig};

/// Render a decoded model as labeled plain-text lines.
///
/// One `Label: value` line per field, in layout order. The model echo line
/// is gated by `config.show_model`.
///
/// # Example
/// ```
/// use mc_core::{DisplayConfig, decode};
/// let m = decode("AB123XSNA12").unwrap();
/// let out = mc_render::text::render(&m, &DisplayConfig::default());
/// assert!(out.starts_with("Model: AB123XSNA12\n"));
/// assert!(out.contains("Product Type: S (NASA)"));
/// ```
#[must_use]
pub fn render(model: &DecodedModel, config: &DisplayConfig) -> String {
    let mut out = String::new();
    if config.show_model {
        let _ = writeln!(out, "Model: {}", model.model);
    }
    let _ = writeln!(out, "Classification: {}", model.classification);
    let _ = writeln!(
        out,
        "Capacity: {} {}",
        model.capacity, config.capacity_unit
    );
    let _ = writeln!(
        out,
        "Product Type: {} ({})",
        model.product_type, model.category
    );
    let _ = writeln!(out, "Product Notation: {}", model.product_notation);
    let _ = writeln!(out, "Feature: {}", model.feature);
    let _ = writeln!(out, "Rating Voltage: {}", model.rating_voltage);
    let _ = writeln!(out, "Mode: {}", model.mode);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::decode;

    #[test]
    fn all_labels_present() {
        let m = decode("AB123XSNA12").unwrap();
        let out = render(&m, &DisplayConfig::default());
        for label in [
            "Model:",
            "Classification:",
            "Capacity:",
            "Product Type:",
            "Product Notation:",
            "Feature:",
            "Rating Voltage:",
            "Mode:",
        ] {
            assert!(out.contains(label), "missing {label} in:\n{out}");
        }
    }

    #[test]
    fn capacity_carries_configured_unit() {
        let m = decode("AJ052TXJ3KG").unwrap();
        let mut config = DisplayConfig::default();
        assert!(render(&m, &config).contains("Capacity: 052 kW"));
        config.capacity_unit = "BTU".to_string();
        assert!(render(&m, &config).contains("Capacity: 052 BTU"));
    }

    #[test]
    fn model_line_can_be_hidden() {
        let m = decode("AJ052TXJ3KG").unwrap();
        let config = DisplayConfig {
            show_model: false,
            ..DisplayConfig::default()
        };
        let out = render(&m, &config);
        assert!(!out.contains("Model:"));
        assert!(out.starts_with("Classification: AJ\n"));
    }

    #[test]
    fn category_rendered_next_to_product_type() {
        let m = decode("1234567890A").unwrap();
        let out = render(&m, &DisplayConfig::default());
        assert!(out.contains("Product Type: 7 (Other)"));
    }
}
