use super::MathError;
use crate::{Calculator, Function, HandlerError};
use yardcalc_macros::yardcalc_fn;

pub fn register(calculator: &mut Calculator) {
    for (name, function) in all() {
        calculator.register(name, function);
    }
}

/// The six binary operators under their source symbols.
pub fn all() -> Vec<(&'static str, Function)> {
    vec![
        ("+", add()),
        ("-", subtract()),
        ("*", multiply()),
        ("/", divide()),
        ("%", remainder()),
        ("^", power()),
    ]
}

#[yardcalc_fn]
pub fn add(a: f64, b: f64) -> Result<f64, HandlerError> {
    Ok(a + b)
}

#[yardcalc_fn]
pub fn subtract(a: f64, b: f64) -> Result<f64, HandlerError> {
    Ok(a - b)
}

#[yardcalc_fn]
pub fn multiply(a: f64, b: f64) -> Result<f64, HandlerError> {
    Ok(a * b)
}

#[yardcalc_fn]
pub fn divide(a: f64, b: f64) -> Result<f64, HandlerError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero.into());
    }
    Ok(a / b)
}

/// Remainder with the sign of the dividend, like `f64::rem`.
#[yardcalc_fn]
pub fn remainder(a: f64, b: f64) -> Result<f64, HandlerError> {
    if b == 0.0 {
        return Err(MathError::ModuloByZero.into());
    }
    Ok(a % b)
}

#[yardcalc_fn]
pub fn power(base: f64, exponent: f64) -> Result<f64, HandlerError> {
    Ok(base.powf(exponent))
}
