//! The unit registry - one canonical table of every supported unit
//!
//! The table is ordered: within a category, the base unit comes first and
//! the first two entries act as the default From/To pair in a UI. Standard
//! units precede niche ones. The id index is built once at first use and
//! never mutated, so lookups are safe from any thread without locking.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::LazyLock;

use crate::Category::*;
use crate::{Category, Unit};

/// Every supported unit, in display order.
pub static UNITS: &[Unit] = &[
    // --- Length (base: meter) ---
    Unit::linear("meter", "Meter", "m", Length, 1.0),
    Unit::linear("kilometer", "Kilometer", "km", Length, 1000.0),
    Unit::linear("centimeter", "Centimeter", "cm", Length, 0.01),
    Unit::linear("millimeter", "Millimeter", "mm", Length, 0.001),
    Unit::linear("mile", "Mile", "mi", Length, 1609.344),
    Unit::linear("foot", "Foot", "ft", Length, 0.3048),
    Unit::linear("inch", "Inch", "in", Length, 0.0254),
    Unit::linear("nautical_mile", "Nautical Mile", "nmi", Length, 1852.0),
    Unit::linear("lightyear", "Light-year", "ly", Length, 9.4607e15),
    Unit::linear("astronomical_unit", "Astronomical Unit", "au", Length, 1.496e11),
    Unit::niche("parsec", "Parsec", "pc", Length, 3.0857e16),
    Unit::niche("smoot", "Smoot", "sm", Length, 1.7018)
        .describe("Based on Oliver R. Smoot's height during his fraternity pledge."),
    Unit::niche("beard_second", "Beard-second", "beard-sec", Length, 5e-9)
        .describe("The length a beard grows in one second (~5nm)."),
    Unit::niche("potrzebie", "Potrzebie", "potrzebie", Length, 0.0022633485)
        .describe("From MAD Magazine, thickness of issue 26."),
    Unit::niche("sheppey", "Sheppey", "sheppey", Length, 1408.18)
        .describe("Closest distance at which sheep remain picturesque."),
    Unit::niche("altuve", "Altuve", "altuve", Length, 1.6764),
    Unit::niche("hubble", "Hubble Length", "hubble", Length, 1.44e26),

    // --- Mass (base: kilogram) ---
    Unit::linear("kilogram", "Kilogram", "kg", Mass, 1.0),
    Unit::linear("gram", "Gram", "g", Mass, 0.001),
    Unit::linear("milligram", "Milligram", "mg", Mass, 1e-6),
    Unit::linear("pound", "Pound", "lb", Mass, 0.45359237),
    Unit::linear("ounce", "Ounce", "oz", Mass, 0.0283495),
    Unit::linear("stone", "Stone", "st", Mass, 6.35029),
    Unit::linear("tonne", "Tonne", "t", Mass, 1000.0),
    Unit::linear("carat", "Carat", "ct", Mass, 0.0002),
    Unit::niche("slug", "Slug", "slug", Mass, 14.5939),
    Unit::niche("grain", "Grain", "gr", Mass, 0.00006479891),
    Unit::niche("dalton", "Dalton", "Da", Mass, 1.6605e-27),
    Unit::niche("solar_mass", "Solar Mass", "Msun", Mass, 1.989e30),

    // --- Temperature (base: Celsius) ---
    Unit::affine("celsius", "Celsius", "\u{b0}C", Temperature, 1.0, 0.0),
    Unit::affine("fahrenheit", "Fahrenheit", "\u{b0}F", Temperature, 5.0 / 9.0, -32.0),
    Unit::affine("kelvin", "Kelvin", "K", Temperature, 1.0, -273.15),
    Unit::affine("rankine", "Rankine", "\u{b0}R", Temperature, 5.0 / 9.0, -491.67),

    // --- Volume (base: liter) ---
    Unit::linear("liter", "Liter", "L", Volume, 1.0),
    Unit::linear("milliliter", "Milliliter", "mL", Volume, 0.001),
    Unit::linear("gallon", "Gallon (US)", "gal", Volume, 3.78541),
    Unit::linear("quart", "Quart", "qt", Volume, 0.946353),
    Unit::linear("pint", "Pint", "pt", Volume, 0.473176),
    Unit::linear("cup", "Cup", "cup", Volume, 0.236588),
    Unit::linear("fluid_ounce", "Fluid Ounce", "fl oz", Volume, 0.0295735),
    Unit::linear("cubic_meter", "Cubic Meter", "m3", Volume, 1000.0),
    Unit::niche("olympic_pool", "Olympic Swimming Pool", "pool", Volume, 2500000.0),
    Unit::niche("firkin", "Firkin", "firkin", Volume, 40.9148),
    Unit::niche("hogshead", "Hogshead", "hogshead", Volume, 238.481),
    Unit::niche("butt", "Butt", "butt", Volume, 476.962),
    Unit::niche("pinch", "Pinch", "pinch", Volume, 0.00031),
    Unit::niche("dash", "Dash", "dash", Volume, 0.00062),
    Unit::niche("smidgen", "Smidgen", "smidgen", Volume, 0.00015),
    Unit::niche("jigger", "Jigger", "jigger", Volume, 0.04436),
    Unit::niche("gill", "Gill", "gill", Volume, 0.118294),

    // --- Area (base: square meter) ---
    Unit::linear("square_meter", "Square Meter", "m2", Area, 1.0),
    Unit::linear("square_foot", "Square Foot", "ft2", Area, 0.092903),
    Unit::linear("acre", "Acre", "acre", Area, 4046.86),
    Unit::linear("hectare", "Hectare", "ha", Area, 10000.0),
    Unit::linear("square_mile", "Square Mile", "mi2", Area, 2.59e6),

    // --- Speed (base: meter per second) ---
    Unit::linear("mps", "Meters per Second", "m/s", Speed, 1.0),
    Unit::linear("kmh", "Kilometers per Hour", "km/h", Speed, 1.0 / 3.6),
    Unit::linear("mph", "Miles per Hour", "mph", Speed, 0.44704),
    Unit::linear("knot", "Knot", "kn", Speed, 0.514444),
    Unit::linear("speed_of_light", "Speed of Light", "c", Speed, 299792458.0),
    Unit::niche("furlong_per_fortnight", "Furlongs per Fortnight", "fur/ftn", Speed, 0.0001663095),

    // --- Time (base: second) ---
    Unit::linear("second", "Second", "s", Time, 1.0),
    Unit::linear("minute", "Minute", "min", Time, 60.0),
    Unit::linear("hour", "Hour", "hr", Time, 3600.0),
    Unit::linear("day", "Day", "d", Time, 86400.0),
    Unit::linear("week", "Week", "wk", Time, 604800.0),
    Unit::linear("year", "Year", "yr", Time, 31536000.0),
    Unit::niche("fortnight", "Fortnight", "ftn", Time, 1209600.0),
    Unit::niche("microcentury", "Microcentury", "\u{b5}c", Time, 3155.76)
        .describe("About 52.596 minutes; attributed to an Enrico Fermi lecture limit."),
    Unit::niche("jiffy", "Jiffy", "jiffy", Time, 0.0166667),
    Unit::niche("svedberg", "Svedberg", "S", Time, 1e-13),

    // --- Energy (base: joule) ---
    Unit::linear("joule", "Joule", "J", Energy, 1.0),
    Unit::linear("kilojoule", "Kilojoule", "kJ", Energy, 1000.0),
    Unit::linear("calorie", "Calorie", "cal", Energy, 4.184),
    Unit::linear("kilocalorie", "Kilocalorie", "kcal", Energy, 4184.0),
    Unit::linear("kilowatt_hour", "Kilowatt-hour", "kWh", Energy, 3.6e6),
    Unit::linear("btu", "BTU", "BTU", Energy, 1055.06),
    Unit::linear("electronvolt", "Electronvolt", "eV", Energy, 1.6022e-19),

    // --- Pressure (base: pascal) ---
    Unit::linear("pascal", "Pascal", "Pa", Pressure, 1.0),
    Unit::linear("bar", "Bar", "bar", Pressure, 100000.0),
    Unit::linear("psi", "PSI", "psi", Pressure, 6894.76),
    Unit::linear("atmosphere", "Atmosphere", "atm", Pressure, 101325.0),
    Unit::linear("torr", "Torr", "Torr", Pressure, 133.322),

    // --- Power (base: watt) ---
    Unit::linear("watt", "Watt", "W", Power, 1.0),
    Unit::linear("kilowatt", "Kilowatt", "kW", Power, 1000.0),
    Unit::linear("horsepower", "Horsepower", "hp", Power, 745.7),

    // --- Data (base: byte, decimal SI multiples) ---
    Unit::linear("byte", "Byte", "B", Data, 1.0),
    Unit::linear("kilobyte", "Kilobyte", "kB", Data, 1000.0),
    Unit::linear("megabyte", "Megabyte", "MB", Data, 1e6),
    Unit::linear("gigabyte", "Gigabyte", "GB", Data, 1e9),
    Unit::linear("terabyte", "Terabyte", "TB", Data, 1e12),
    Unit::linear("bit", "Bit", "bit", Data, 0.125),
    Unit::niche("nibble", "Nibble", "nibble", Data, 0.5),

    // --- Angle (base: degree) ---
    Unit::linear("degree", "Degree", "deg", Angle, 1.0),
    Unit::linear("radian", "Radian", "rad", Angle, 180.0 / PI),
    Unit::linear("gradian", "Gradian", "grad", Angle, 0.9),
    Unit::linear("turn", "Turn", "turn", Angle, 360.0),
    Unit::linear("arcminute", "Arcminute", "arcmin", Angle, 1.0 / 60.0),

    // --- Typography (base: PostScript point, 1/72 inch) ---
    Unit::linear("point", "Point", "pt", Typography, 1.0),
    Unit::linear("pica", "Pica", "pica", Typography, 12.0),
    Unit::linear("typographic_inch", "Inch (typographic)", "in", Typography, 72.0),
    Unit::linear("typographic_millimeter", "Millimeter (typographic)", "mm", Typography, 2.83465),
];

/// Global unit registry, published once and read-only thereafter.
pub static REGISTRY: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Id-indexed view over [`UNITS`].
pub struct UnitRegistry {
    index: HashMap<&'static str, &'static Unit>,
}

impl UnitRegistry {
    fn new() -> Self {
        let mut index = HashMap::with_capacity(UNITS.len());
        for unit in UNITS {
            let previous = index.insert(unit.id, unit);
            debug_assert!(previous.is_none(), "duplicate unit id: {}", unit.id);
        }
        UnitRegistry { index }
    }

    /// Look up a unit by its id.
    pub fn lookup(&self, id: &str) -> Option<&'static Unit> {
        self.index.get(id).copied()
    }

    /// All units in a category, in declaration order. The first two entries
    /// are the conventional default From/To pair.
    pub fn list_units(&self, category: Category) -> Vec<&'static Unit> {
        UNITS.iter().filter(|u| u.category == category).collect()
    }

    /// All units for a category id; empty for an unknown id rather than
    /// failing, since navigation routes pass arbitrary strings through.
    pub fn by_category_id(&self, id: &str) -> Vec<&'static Unit> {
        match Category::from_id(id) {
            Some(category) => self.list_units(category),
            None => Vec::new(),
        }
    }
}

/// Look up a unit by its id.
pub fn lookup(id: &str) -> Option<&'static Unit> {
    REGISTRY.lookup(id)
}

/// All units in a category, in declaration order.
pub fn list_units(category: Category) -> Vec<&'static Unit> {
    REGISTRY.list_units(category)
}
