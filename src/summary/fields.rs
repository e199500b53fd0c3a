//! Machine-readable compact form: one field per quantity.

use super::assemble::QuantityValue;
use super::quantity::Quantity;

/// Printed for an absent quantity. No branch can be named `.`.
const ABSENT: &str = ".";

/// Space-separated values in the order requested.
pub fn format_fields(quantities: &[Quantity], values: impl Fn(Quantity) -> QuantityValue) -> String {
    quantities
        .iter()
        .map(|&quantity| match values(quantity) {
            QuantityValue::Count(Some(n)) => n.to_string(),
            QuantityValue::Text(Some(text)) => text,
            QuantityValue::Count(None) | QuantityValue::Text(None) => ABSENT.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
