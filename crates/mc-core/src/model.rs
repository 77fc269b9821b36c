use std::fmt;

use serde::Serialize;

use crate::error::DecodeError;

/// Minimum character count of the fixed 11-character layout.
pub const MIN_LEN: usize = 11;

/// Classification span — chars [0,2).
const CLASSIFICATION: std::ops::Range<usize> = 0..2;
/// Capacity span — chars [2,5), expressed in kW.
const CAPACITY: std::ops::Range<usize> = 2..5;
/// Product type — char at index 6.
const PRODUCT_TYPE: usize = 6;
/// Product notation — char at index 7.
const PRODUCT_NOTATION: usize = 7;
/// Feature — char at index 8.
const FEATURE: usize = 8;
/// Rating voltage — char at index 9.
const RATING_VOLTAGE: usize = 9;
/// Mode — char at index 10.
const MODE: usize = 10;

/// Product types that identify a NASA-protocol unit.
const NASA_TYPES: [char; 3] = ['S', 'N', 'X'];
/// Product types that identify a non-NASA-protocol unit.
const NON_NASA_TYPES: [char; 3] = ['A', 'B', 'C'];

/// Coarse protocol category derived from the product-type character.
///
/// Total over the whole character domain: every char lands in exactly one
/// variant.
///
/// # Example
/// ```
/// use mc_core::model::Category;
/// assert_eq!(Category::from_product_type('S'), Category::Nasa);
/// assert_eq!(Category::from_product_type('B'), Category::NonNasa);
/// assert_eq!(Category::from_product_type('7'), Category::Other);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Product type S, N, or X.
    #[serde(rename = "NASA")]
    Nasa,
    /// Product type A, B, or C.
    #[serde(rename = "Non-NASA")]
    NonNasa,
    /// Any other product-type character.
    Other,
}

impl Category {
    /// Map a product-type character to its category. Exact match on the
    /// already-normalized (uppercased) character.
    #[must_use]
    pub fn from_product_type(product_type: char) -> Self {
        if NASA_TYPES.contains(&product_type) {
            Self::Nasa
        } else if NON_NASA_TYPES.contains(&product_type) {
            Self::NonNasa
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Nasa => "NASA",
            Self::NonNasa => "Non-NASA",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Fields extracted from a model number at fixed character offsets.
///
/// Only constructible through [`decode`]; inputs shorter than [`MIN_LEN`]
/// chars never produce one. Indices 5 and anything past 10 are unused gaps
/// in the layout.
///
/// # Example
/// ```
/// use mc_core::model::{Category, decode};
/// let m = decode("AB123XSNA12").unwrap();
/// assert_eq!(m.classification, "AB");
/// assert_eq!(m.capacity, "123");
/// assert_eq!(m.product_type, 'S');
/// assert_eq!(m.category, Category::Nasa);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedModel {
    /// Full normalized (uppercased) input, echoed back by the renderers.
    pub model: String,
    /// Chars [0,2). Meaning not defined by the layout itself.
    pub classification: String,
    /// Chars [2,5), in kW.
    pub capacity: String,
    /// Char at index 6; drives [`Category`] derivation.
    pub product_type: char,
    /// Char at index 7.
    pub product_notation: char,
    /// Char at index 8.
    pub feature: char,
    /// Char at index 9.
    pub rating_voltage: char,
    /// Char at index 10.
    pub mode: char,
    /// Derived from `product_type`, see [`Category::from_product_type`].
    pub category: Category,
}

/// Decode a model-number string into its labeled fields.
///
/// Uppercases the input, rejects anything shorter than [`MIN_LEN`] chars,
/// then extracts the fixed offsets. Pure and deterministic; rendering is the
/// caller's concern.
///
/// # Errors
/// Returns [`DecodeError::TooShort`] when the normalized input has fewer
/// than [`MIN_LEN`] characters. Extraction itself cannot fail once the
/// length gate passes.
///
/// # Example
/// ```
/// use mc_core::model::decode;
/// let m = decode("aj052txj3kg").unwrap();
/// assert_eq!(m.classification, "AJ");
/// assert_eq!(m.capacity, "052");
/// assert_eq!(m.product_type, 'X');
/// assert!(decode("short").is_err());
/// ```
pub fn decode(input: &str) -> Result<DecodedModel, DecodeError> {
    let model = input.to_uppercase();
    let chars: Vec<char> = model.chars().collect();

    if chars.len() < MIN_LEN {
        log::debug!("rejected model number: {} chars < {MIN_LEN}", chars.len());
        return Err(DecodeError::TooShort {
            len: chars.len(),
            min: MIN_LEN,
        });
    }

    let product_type = chars[PRODUCT_TYPE];
    Ok(DecodedModel {
        classification: chars[CLASSIFICATION].iter().collect(),
        capacity: chars[CAPACITY].iter().collect(),
        product_type,
        product_notation: chars[PRODUCT_NOTATION],
        feature: chars[FEATURE],
        rating_voltage: chars[RATING_VOLTAGE],
        mode: chars[MODE],
        category: Category::from_product_type(product_type),
        model,
    })
}
