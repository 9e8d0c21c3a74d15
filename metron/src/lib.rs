//! Metron - Unit Conversion Engine
//!
//! A static registry of measurement units grouped into mutually convertible
//! categories, a conversion operation that normalizes through each
//! category's base unit, and a display formatter. The registry is published
//! once at startup and read-only thereafter; `convert` and `format_result`
//! are pure functions of their inputs.
//!
//! Categories:
//! - Length (meter, mile, smoot, ...)
//! - Mass (kilogram, pound, slug, ...)
//! - Temperature (celsius, fahrenheit, kelvin, rankine)
//! - Volume (liter, gallon, hogshead, ...)
//! - Area (square meter, acre, ...)
//! - Speed (m/s, mph, furlongs per fortnight, ...)
//! - Time (second, fortnight, microcentury, ...)
//! - Energy (joule, calorie, electronvolt, ...)
//! - Pressure (pascal, psi, torr, ...)
//! - Power (watt, horsepower, ...)
//! - Data (byte, megabyte, nibble, ...)
//! - Angle (degree, radian, ...)
//! - Typography (point, pica, ...)

mod category;
mod convert;
mod format;
mod registry;
mod unit;

pub use category::{list_categories, Category};
pub use convert::convert;
pub use format::{format_result, DEFAULT_DECIMALS};
pub use registry::{list_units, lookup, UnitRegistry, REGISTRY, UNITS};
pub use unit::{ConvertError, Rule, Unit, UnitKind};
