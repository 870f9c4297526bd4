use super::MathError;
use crate::{Calculator, Function, HandlerError};
use std::f64::consts;
use yardcalc_macros::yardcalc_fn;

pub fn register(calculator: &mut Calculator) {
    for (name, function) in all() {
        calculator.register(name, function);
    }
}

pub fn all() -> Vec<(&'static str, Function)> {
    vec![
        ("abs", abs()),
        ("sqrt", sqrt()),
        ("exp", exp()),
        ("ln", ln()),
        ("log10", log10()),
        ("sin", sin()),
        ("cos", cos()),
        ("tan", tan()),
        ("floor", floor()),
        ("ceil", ceil()),
        ("round", round()),
        ("min", min()),
        ("max", max()),
        ("pow", pow()),
        ("hypot", hypot()),
        ("atan2", atan2()),
        ("pi", pi()),
        ("e", e()),
    ]
}

fn positive(function: &'static str, value: f64) -> Result<f64, HandlerError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(MathError::Domain { function, value }.into())
    }
}

#[yardcalc_fn]
pub fn abs(value: f64) -> Result<f64, HandlerError> {
    Ok(value.abs())
}

#[yardcalc_fn]
pub fn sqrt(value: f64) -> Result<f64, HandlerError> {
    if value < 0.0 {
        return Err(MathError::Domain {
            function: "sqrt",
            value,
        }
        .into());
    }
    Ok(value.sqrt())
}

#[yardcalc_fn]
pub fn exp(value: f64) -> Result<f64, HandlerError> {
    Ok(value.exp())
}

#[yardcalc_fn]
pub fn ln(value: f64) -> Result<f64, HandlerError> {
    Ok(positive("ln", value)?.ln())
}

#[yardcalc_fn]
pub fn log10(value: f64) -> Result<f64, HandlerError> {
    Ok(positive("log10", value)?.log10())
}

/// Radians.
#[yardcalc_fn]
pub fn sin(angle: f64) -> Result<f64, HandlerError> {
    Ok(angle.sin())
}

#[yardcalc_fn]
pub fn cos(angle: f64) -> Result<f64, HandlerError> {
    Ok(angle.cos())
}

#[yardcalc_fn]
pub fn tan(angle: f64) -> Result<f64, HandlerError> {
    Ok(angle.tan())
}

#[yardcalc_fn]
pub fn floor(value: f64) -> Result<f64, HandlerError> {
    Ok(value.floor())
}

#[yardcalc_fn]
pub fn ceil(value: f64) -> Result<f64, HandlerError> {
    Ok(value.ceil())
}

/// Half-way cases round away from zero.
#[yardcalc_fn]
pub fn round(value: f64) -> Result<f64, HandlerError> {
    Ok(value.round())
}

#[yardcalc_fn]
pub fn min(a: f64, b: f64) -> Result<f64, HandlerError> {
    Ok(a.min(b))
}

#[yardcalc_fn]
pub fn max(a: f64, b: f64) -> Result<f64, HandlerError> {
    Ok(a.max(b))
}

#[yardcalc_fn]
pub fn pow(base: f64, exponent: f64) -> Result<f64, HandlerError> {
    Ok(base.powf(exponent))
}

#[yardcalc_fn]
pub fn hypot(x: f64, y: f64) -> Result<f64, HandlerError> {
    Ok(x.hypot(y))
}

#[yardcalc_fn]
pub fn atan2(y: f64, x: f64) -> Result<f64, HandlerError> {
    Ok(y.atan2(x))
}

#[yardcalc_fn]
pub fn pi() -> Result<f64, HandlerError> {
    Ok(consts::PI)
}

#[yardcalc_fn]
pub fn e() -> Result<f64, HandlerError> {
    Ok(consts::E)
}
