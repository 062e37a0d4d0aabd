//! Demonstration caller for the exported functions.
use cfunc_ffi::{cfunc_double, cfunc_float};

pub const SAMPLE_A: f64 = 2.0;
pub const SAMPLE_B: f64 = 5.0;
pub const SAMPLE_X: f64 = std::f64::consts::PI;

/// Evaluate the sample inputs once per precision and return one report line
/// for each, single precision first.
pub fn report() -> Vec<String> {
    log::debug!("sample inputs x={SAMPLE_X} a={SAMPLE_A} b={SAMPLE_B}");
    vec![report_float(), report_double()]
}

fn report_float() -> String {
    let (x, a, b) = (SAMPLE_X as f32, SAMPLE_A as f32, SAMPLE_B as f32);
    let y = cfunc_float(x, a, b);
    log::debug!("cfunc_float({x}, {a}, {b}) = {y}");
    format_line(b, x, a, y, "f32")
}

fn report_double() -> String {
    let (x, a, b) = (SAMPLE_X, SAMPLE_A, SAMPLE_B);
    let y = cfunc_double(x, a, b);
    log::debug!("cfunc_double({x}, {a}, {b}) = {y}");
    format_line(b, x, a, y, "f64")
}

fn format_line<T: std::fmt::Display>(b: T, x: T, a: T, y: T, precision: &str) -> String {
    format!("y = {b:.2}*cos({x:.6}*{a:.2}) = {y:.6} ({precision})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(-1.5_f64, 0.25, 3.0, -1.097_f64, "f64"),
            "y = -1.50*cos(0.250000*3.00) = -1.097000 (f64)"
        );
    }

    #[test]
    fn test_report_order() {
        let lines = report();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("(f32)"));
        assert!(lines[1].ends_with("(f64)"));
    }
}
