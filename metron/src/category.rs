//! Category catalog - the fixed partitions of mutually convertible units

use std::fmt;

use serde::Serialize;

/// A partition of units that are mutually convertible.
///
/// Conversions across categories are always rejected. Every category has a
/// conventional base unit (meter, kilogram, celsius, ...) that the conversion
/// rules of its units refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Volume,
    Area,
    Speed,
    Time,
    Energy,
    Pressure,
    Power,
    Data,
    Angle,
    Typography,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 13] = [
        Category::Length,
        Category::Mass,
        Category::Temperature,
        Category::Volume,
        Category::Area,
        Category::Speed,
        Category::Time,
        Category::Energy,
        Category::Pressure,
        Category::Power,
        Category::Data,
        Category::Angle,
        Category::Typography,
    ];

    /// Stable string id, as used by navigation routes and serialized output.
    pub fn id(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Area => "area",
            Category::Speed => "speed",
            Category::Time => "time",
            Category::Energy => "energy",
            Category::Pressure => "pressure",
            Category::Power => "power",
            Category::Data => "data",
            Category::Angle => "angle",
            Category::Typography => "typography",
        }
    }

    /// Human-readable display name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Mass => "Mass",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Area => "Area",
            Category::Speed => "Speed",
            Category::Time => "Time",
            Category::Energy => "Energy",
            Category::Pressure => "Pressure",
            Category::Power => "Power",
            Category::Data => "Data",
            Category::Angle => "Angle",
            Category::Typography => "Typography",
        }
    }

    /// Resolve a category from its string id.
    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Categories in display order, for discovery and navigation only.
pub fn list_categories() -> &'static [Category] {
    &Category::ALL
}
