//! Arithmetic expressions evaluated in three stages: the text is split into
//! tokens, the tokens are reordered into a postfix program with the
//! shunting-yard algorithm, and the program runs on a number stack.
//!
//! Operators are looked up in the function table under their symbols, so a
//! table without `+` cannot add. [`functions::standard`] supplies the usual
//! operators and math functions.
//!
//! ```
//! use yardcalc_rs::Calculator;
//!
//! let mut calculator = Calculator::with_builtins();
//! calculator.bind_variable("x", 3.0);
//! assert_eq!(calculator.evaluate("2 * (x + 4)").unwrap(), 14.0);
//! ```

pub mod error;
pub mod evaluator;
pub mod functions;
pub mod tokenizer;
pub mod translator;

mod calculator;

pub use calculator::{Calculator, Limits};
pub use error::{Error, ErrorKind, HandlerError, Result};
pub use evaluator::{evaluate, Function, Functions, Variables};
pub use tokenizer::{tokenize, Token, TokenKind};
pub use translator::{translate, Command, CommandKind, FunctionNames};
pub use yardcalc_macros::yardcalc_fn;

/// Tokenizes, translates and evaluates `text` in one call.
pub fn evaluate_expression<V, F>(text: &str, variables: &V, functions: &F) -> Result<f64>
where
    V: Variables + ?Sized,
    F: Functions + FunctionNames + ?Sized,
{
    let tokens = tokenize(text)?;
    let commands = translate(&tokens, functions)?;
    Ok(evaluate(&commands, variables, functions)?)
}
