//! # Price Helpers
//!
//! Prices are decimal amounts held as `f64`. They are stored with two
//! decimal places and always displayed with two.
//!
//! ```rust
//! use stockroom_core::price::{parse_price_value, round_to_cents};
//!
//! assert_eq!(round_to_cents(19.999), 20.0);
//! assert_eq!(parse_price_value(" 12.50 ").unwrap(), 12.5);
//! assert!(parse_price_value("twelve").is_err());
//! ```

use crate::error::{CoreError, CoreResult};

/// Rounds a price to whole cents (two decimal places).
///
/// Values too large to scale by 100 already have no fractional part and
/// are returned unchanged.
pub fn round_to_cents(price: f64) -> f64 {
    let cents = price * 100.0;
    if !cents.is_finite() {
        return price;
    }
    cents.round() / 100.0
}

/// Coerces a textual price (e.g. a DECIMAL column read as text) to a number.
///
/// ## Returns
/// * `Ok(f64)` - the parsed value
/// * `Err(CoreError::InvalidPrice)` - the text is not a finite number
pub fn parse_price_value(raw: &str) -> CoreResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| CoreError::InvalidPrice(raw.to_string()))
}
