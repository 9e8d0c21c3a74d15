//! Unit representation with conversion rules

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::Category;

/// How a unit maps to and from its category's base unit.
///
/// Every rule shape is enumerated here so the whole registry can be
/// validated and round-trip tested; no unit carries executable code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Rule {
    /// `base = value * factor`
    Linear { factor: f64 },
    /// `base = (value + offset) * scale`
    ///
    /// Needed for temperature, whose zero points differ from the base
    /// unit's. The offset is relative to this unit's own zero point.
    Affine { scale: f64, offset: f64 },
}

impl Rule {
    /// Convert a value in this unit to the category base unit.
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Rule::Linear { factor } => value * factor,
            Rule::Affine { scale, offset } => (value + offset) * scale,
        }
    }

    /// Convert a value in the category base unit to this unit.
    pub fn from_base(self, base: f64) -> f64 {
        match self {
            Rule::Linear { factor } => base / factor,
            Rule::Affine { scale, offset } => base / scale - offset,
        }
    }

    /// Whether this is the conventional base-unit rule
    /// (`Linear { factor: 1 }` or `Affine { scale: 1, offset: 0 }`).
    pub fn is_base(self) -> bool {
        match self {
            Rule::Linear { factor } => factor == 1.0,
            Rule::Affine { scale, offset } => scale == 1.0 && offset == 0.0,
        }
    }
}

/// Informational classification of a unit. No behavioral effect; UIs may
/// use it to separate everyday units from the curiosities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Standard,
    Niche,
}

/// A measurement unit in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Unique identifier, unique across the entire registry.
    pub id: &'static str,
    /// Display name (e.g. "Kilometer").
    pub name: &'static str,
    /// Abbreviated symbol (e.g. "km").
    pub symbol: &'static str,
    /// Owning category.
    pub category: Category,
    /// Conversion rule relative to the category base unit.
    pub rule: Rule,
    /// Standard or niche.
    pub kind: UnitKind,
    /// Optional flavor text, carried for niche units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl Unit {
    /// A standard unit with a linear rule.
    pub(crate) const fn linear(
        id: &'static str,
        name: &'static str,
        symbol: &'static str,
        category: Category,
        factor: f64,
    ) -> Self {
        Unit {
            id,
            name,
            symbol,
            category,
            rule: Rule::Linear { factor },
            kind: UnitKind::Standard,
            description: None,
        }
    }

    /// A niche unit with a linear rule.
    pub(crate) const fn niche(
        id: &'static str,
        name: &'static str,
        symbol: &'static str,
        category: Category,
        factor: f64,
    ) -> Self {
        Unit {
            id,
            name,
            symbol,
            category,
            rule: Rule::Linear { factor },
            kind: UnitKind::Niche,
            description: None,
        }
    }

    /// A standard unit with scale and offset (temperature).
    pub(crate) const fn affine(
        id: &'static str,
        name: &'static str,
        symbol: &'static str,
        category: Category,
        scale: f64,
        offset: f64,
    ) -> Self {
        Unit {
            id,
            name,
            symbol,
            category,
            rule: Rule::Affine { scale, offset },
            kind: UnitKind::Standard,
            description: None,
        }
    }

    /// Attach flavor text.
    pub(crate) const fn describe(mut self, text: &'static str) -> Self {
        self.description = Some(text);
        self
    }

    /// Whether this unit is its category's conventional base unit.
    pub fn is_base(&self) -> bool {
        self.rule.is_base()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors surfaced by the conversion engine.
///
/// All three are detected before any arithmetic executes and represent
/// caller input errors; none are transient or retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The input value is not a finite real number.
    #[error("invalid value: input must be a finite number")]
    InvalidValue,
    /// A unit id did not resolve in the registry.
    #[error("unknown unit id: {0}")]
    UnknownUnit(String),
    /// The resolved units belong to different categories.
    #[error("cannot convert {from} to {to}: incompatible categories")]
    IncompatibleCategories { from: Category, to: Category },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kilometer() -> Unit {
        Unit::linear("kilometer", "Kilometer", "km", Category::Length, 1000.0)
    }

    fn fahrenheit() -> Unit {
        Unit::affine("fahrenheit", "Fahrenheit", "\u{b0}F", Category::Temperature, 5.0 / 9.0, -32.0)
    }

    #[test]
    fn test_linear_to_base() {
        assert_eq!(kilometer().rule.to_base(5.0), 5000.0);
    }

    #[test]
    fn test_linear_from_base() {
        assert_eq!(kilometer().rule.from_base(5000.0), 5.0);
    }

    #[test]
    fn test_affine_to_base() {
        // 212 F is 100 C
        let base = fahrenheit().rule.to_base(212.0);
        assert!((base - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_affine_from_base() {
        // 100 C is 212 F
        let value = fahrenheit().rule.from_base(100.0);
        assert!((value - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_affine_round_trip() {
        let rule = fahrenheit().rule;
        let back = rule.from_base(rule.to_base(-40.0));
        assert!((back - -40.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_base() {
        assert!(Rule::Linear { factor: 1.0 }.is_base());
        assert!(Rule::Affine { scale: 1.0, offset: 0.0 }.is_base());
        assert!(!kilometer().is_base());
        assert!(!fahrenheit().is_base());
    }

    #[test]
    fn test_display_is_symbol() {
        assert_eq!(kilometer().to_string(), "km");
    }

    #[test]
    fn test_error_messages_carry_context() {
        let unknown = ConvertError::UnknownUnit("cubit".to_string());
        assert_eq!(unknown.to_string(), "unknown unit id: cubit");

        let incompatible = ConvertError::IncompatibleCategories {
            from: Category::Length,
            to: Category::Volume,
        };
        assert_eq!(
            incompatible.to_string(),
            "cannot convert length to volume: incompatible categories"
        );
    }

    #[test]
    fn test_unit_serialization_shape() {
        let json = serde_json::to_value(kilometer()).unwrap();
        assert_eq!(json["id"], "kilometer");
        assert_eq!(json["name"], "Kilometer");
        assert_eq!(json["symbol"], "km");
        assert_eq!(json["category"], "length");
        assert_eq!(json["kind"], "standard");
        assert_eq!(json["rule"]["type"], "linear");
        assert_eq!(json["rule"]["factor"], 1000.0);
        // description is omitted when absent
        assert!(json.get("description").is_none());
    }
}
