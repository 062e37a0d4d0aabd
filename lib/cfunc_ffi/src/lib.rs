//! `b * cos(a * x)` exported with the C calling convention.
//!
//! Build this crate as a `cdylib` and resolve `cfunc_float` / `cfunc_double`
//! by name from the resulting shared library.

/// Single precision. `x * a` and the cosine are both evaluated as `f32`.
#[no_mangle]
pub extern "C" fn cfunc_float(x: f32, a: f32, b: f32) -> f32 {
    b * (x * a).cos()
}

/// Double precision.
#[no_mangle]
pub extern "C" fn cfunc_double(x: f64, a: f64, b: f64) -> f64 {
    b * (x * a).cos()
}
