//! Ready-made function tables.
//!
//! The pipeline resolves even `+` through the function table, so a caller
//! wanting plain arithmetic registers [`operators`]; [`math`] adds the usual
//! elementary functions.

pub mod math;
pub mod operators;

use crate::{Calculator, Function};
use std::collections::HashMap;
use thiserror::Error;

/// Failures raised by the built-in handlers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("modulo by zero")]
    ModuloByZero,

    #[error("{function} is undefined for {value}")]
    Domain { function: &'static str, value: f64 },
}

pub fn register_functions(calculator: &mut Calculator) {
    operators::register(calculator);
    math::register(calculator);
}

/// Operators and math functions keyed by name.
pub fn standard() -> HashMap<String, Function> {
    operators::all()
        .into_iter()
        .chain(math::all())
        .map(|(name, function)| (name.to_string(), function))
        .collect()
}
