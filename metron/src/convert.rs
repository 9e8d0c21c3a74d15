//! The conversion engine

use crate::registry::REGISTRY;
use crate::ConvertError;

/// Convert `value` from the unit `from_id` to the unit `to_id`.
///
/// Validation happens before any arithmetic: the value must be finite, both
/// ids must resolve, and both units must share a category. Identical ids
/// return the input unchanged so a redundant base round-trip cannot
/// introduce floating-point drift. No rounding occurs here; display
/// precision is [`format_result`](crate::format_result)'s job.
pub fn convert(value: f64, from_id: &str, to_id: &str) -> Result<f64, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::InvalidValue);
    }

    let from = REGISTRY
        .lookup(from_id)
        .ok_or_else(|| ConvertError::UnknownUnit(from_id.to_string()))?;
    let to = REGISTRY
        .lookup(to_id)
        .ok_or_else(|| ConvertError::UnknownUnit(to_id.to_string()))?;

    if from.category != to.category {
        return Err(ConvertError::IncompatibleCategories {
            from: from.category,
            to: to.category,
        });
    }

    if from.id == to.id {
        return Ok(value);
    }

    Ok(to.rule.from_base(from.rule.to_base(value)))
}
