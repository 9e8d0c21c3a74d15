//! Conversion verification harness
//!
//! Drives the engine through a fixed scenario table and prints a
//! PASS/FAIL/ERROR line per case. A numeric result is accepted when it is
//! within an absolute tolerance of 0.001 or a relative tolerance of 0.1%.
//! Error-handling cases expect a specific error kind and pass when it
//! surfaces. There is no exit-code contract; the output is the report.

use metron::{convert, format_result, ConvertError, DEFAULT_DECIMALS};
use tracing::debug;

const ABS_TOLERANCE: f64 = 1e-3;
const REL_TOLERANCE: f64 = 1e-3; // 0.1%

struct Scenario {
    name: &'static str,
    value: f64,
    from: &'static str,
    to: &'static str,
    expected: f64,
}

const SCENARIOS: &[Scenario] = &[
    // Standard conversions
    Scenario { name: "Meters to Kilometers", value: 1000.0, from: "meter", to: "kilometer", expected: 1.0 },
    Scenario { name: "Feet to Inches", value: 1.0, from: "foot", to: "inch", expected: 12.0 },
    Scenario { name: "Temperature: C to F", value: 100.0, from: "celsius", to: "fahrenheit", expected: 212.0 },
    Scenario { name: "Temperature: F to C", value: 100.0, from: "fahrenheit", to: "celsius", expected: 37.7778 },
    // Niche units
    Scenario { name: "Smoot to Meters", value: 1.0, from: "smoot", to: "meter", expected: 1.7018 },
    Scenario { name: "Fortnight to Seconds", value: 1.0, from: "fortnight", to: "second", expected: 1209600.0 },
    Scenario { name: "Furlongs per Fortnight to m/s", value: 1.0, from: "furlong_per_fortnight", to: "mps", expected: 0.0001663095 },
    Scenario { name: "Microcentury to Minutes", value: 1.0, from: "microcentury", to: "minute", expected: 52.596 },
    Scenario { name: "Beard-second to Meters", value: 1.0, from: "beard_second", to: "meter", expected: 5e-9 },
    Scenario { name: "Olympic Pool to Liters", value: 1.0, from: "olympic_pool", to: "liter", expected: 2500000.0 },
    Scenario { name: "Parsec to Light-years", value: 1.0, from: "parsec", to: "lightyear", expected: 3.26156 },
];

struct FailureCase {
    name: &'static str,
    value: f64,
    from: &'static str,
    to: &'static str,
    expect: &'static str,
    matches: fn(&ConvertError) -> bool,
}

fn is_incompatible(e: &ConvertError) -> bool {
    matches!(e, ConvertError::IncompatibleCategories { .. })
}

fn is_unknown(e: &ConvertError) -> bool {
    matches!(e, ConvertError::UnknownUnit(_))
}

fn is_invalid_value(e: &ConvertError) -> bool {
    matches!(e, ConvertError::InvalidValue)
}

const FAILURE_CASES: &[FailureCase] = &[
    FailureCase {
        name: "Incompatible units",
        value: 1.0,
        from: "meter",
        to: "liter",
        expect: "IncompatibleCategories",
        matches: is_incompatible,
    },
    FailureCase {
        name: "Invalid source unit",
        value: 1.0,
        from: "invalid_unit",
        to: "meter",
        expect: "UnknownUnit",
        matches: is_unknown,
    },
    FailureCase {
        name: "Non-finite input",
        value: f64::NAN,
        from: "meter",
        to: "kilometer",
        expect: "InvalidValue",
        matches: is_invalid_value,
    },
];

fn within_tolerance(actual: f64, expected: f64) -> bool {
    let diff = (actual - expected).abs();
    if diff <= ABS_TOLERANCE {
        return true;
    }
    expected != 0.0 && diff / expected.abs() <= REL_TOLERANCE
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    println!("=== Unit Conversion Verification ===\n");

    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut errored = 0usize;

    for case in SCENARIOS {
        match convert(case.value, case.from, case.to) {
            Ok(result) => {
                let accepted = within_tolerance(result, case.expected);
                debug!(
                    case = case.name,
                    result,
                    expected = case.expected,
                    accepted,
                    "scenario evaluated"
                );

                if accepted {
                    passed += 1;
                    println!("[PASS] {}", case.name);
                } else {
                    failed += 1;
                    println!("[FAIL] {}", case.name);
                }
                println!("  Input: {} {} -> {}", case.value, case.from, case.to);
                println!("  Expected: ~{}", case.expected);
                println!("  Actual:   {} ({})", result, format_result(result, DEFAULT_DECIMALS));
                if !accepted {
                    println!("  Diff: {:e}", (result - case.expected).abs());
                }
                println!("-----------------------------------");
            }
            Err(e) => {
                errored += 1;
                println!("[ERROR] {}", case.name);
                println!("  {}", e);
                println!("-----------------------------------");
            }
        }
    }

    println!("Testing error handling:");
    for case in FAILURE_CASES {
        match convert(case.value, case.from, case.to) {
            Err(ref e) if (case.matches)(e) => {
                passed += 1;
                println!("[PASS] {}: {}", case.name, e);
            }
            Err(e) => {
                failed += 1;
                println!("[FAIL] {}: expected {}, got: {}", case.name, case.expect, e);
            }
            Ok(result) => {
                failed += 1;
                println!("[FAIL] {}: expected {}, got result {}", case.name, case.expect, result);
            }
        }
    }

    println!("\n{} passed, {} failed, {} errored", passed, failed, errored);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_tolerance() {
        assert!(within_tolerance(1.0005, 1.0));
        assert!(!within_tolerance(1.01, 1.0));
    }

    #[test]
    fn test_relative_tolerance_for_large_results() {
        // 0.05% off on a large value: absolute check fails, relative passes
        assert!(within_tolerance(1210204.8, 1209600.0));
        assert!(!within_tolerance(1215000.0, 1209600.0));
    }

    #[test]
    fn test_zero_expectation_uses_absolute_only() {
        assert!(within_tolerance(0.0005, 0.0));
        assert!(!within_tolerance(0.5, 0.0));
    }

    #[test]
    fn test_every_scenario_passes() {
        for case in SCENARIOS {
            let result = convert(case.value, case.from, case.to)
                .unwrap_or_else(|e| panic!("{} errored: {}", case.name, e));
            assert!(
                within_tolerance(result, case.expected),
                "{}: expected ~{}, got {}",
                case.name,
                case.expected,
                result
            );
        }
    }

    #[test]
    fn test_every_failure_case_matches() {
        for case in FAILURE_CASES {
            let err = convert(case.value, case.from, case.to)
                .expect_err(case.name);
            assert!((case.matches)(&err), "{}: wrong kind: {}", case.name, err);
        }
    }
}
