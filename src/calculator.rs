use crate::error::{HandlerError, LimitError, Result};
use crate::evaluator::{evaluate, Function, Variables};
use crate::functions;
use crate::tokenizer::tokenize;
use crate::translator::translate;
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;

/// Upper bounds applied before any work is done on an expression.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum expression length in characters.
    pub max_length: Option<usize>,
    pub max_tokens: Option<usize>,
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    fn check_length(&self, text: &str) -> std::result::Result<(), LimitError> {
        let Some(limit) = self.max_length else {
            return Ok(());
        };
        let length = text.chars().count();
        if length > limit {
            return Err(LimitError::ExpressionTooLong { length, limit });
        }
        Ok(())
    }

    fn check_tokens(&self, count: usize) -> std::result::Result<(), LimitError> {
        let Some(limit) = self.max_tokens else {
            return Ok(());
        };
        if count > limit {
            return Err(LimitError::TooManyTokens { count, limit });
        }
        Ok(())
    }
}

/// Variable bindings, a function registry and limits, evaluated together.
///
/// Every call runs the whole pipeline; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    variables: HashMap<String, f64>,
    functions: HashMap<String, Function>,
    limits: Limits,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// A calculator with the operators and math functions registered.
    pub fn with_builtins() -> Self {
        let mut calculator = Self::new();
        functions::register_functions(&mut calculator);
        calculator
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    /// Registers a function that can be called during evaluation
    pub fn register_function<F>(&mut self, name: &str, arity: usize, handler: F)
    where
        F: Fn(&[f64]) -> std::result::Result<f64, HandlerError> + Send + Sync + 'static,
    {
        self.register(name, Function::new(arity, handler));
    }

    pub fn register(&mut self, name: &str, function: Function) {
        self.functions.insert(name.to_string(), function);
    }

    /// Bind a variable to the evaluation context
    pub fn bind_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    pub fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    pub fn functions(&self) -> &HashMap<String, Function> {
        &self.functions
    }

    pub fn evaluate(&self, text: &str) -> Result<f64> {
        self.run(text, &self.variables)
    }

    /// Evaluates with `extra` bindings shadowing the bound variables.
    pub fn evaluate_with<V>(&self, text: &str, extra: &V) -> Result<f64>
    where
        V: Variables + ?Sized,
    {
        let variables = Shadowed {
            front: extra,
            back: &self.variables,
        };
        self.run(text, &variables)
    }

    /// Evaluates `text` once per context, in parallel. Results keep the
    /// order of `contexts`.
    pub fn evaluate_batch<V>(&self, text: &str, contexts: &[V]) -> Vec<Result<f64>>
    where
        V: Variables + Sync,
    {
        debug!("evaluating {:?} against {} contexts", text, contexts.len());
        contexts
            .par_iter()
            .map(|context| self.evaluate_with(text, context))
            .collect()
    }

    fn run<V>(&self, text: &str, variables: &V) -> Result<f64>
    where
        V: Variables + ?Sized,
    {
        self.limits.check_length(text)?;
        let tokens = tokenize(text)?;
        self.limits.check_tokens(tokens.len())?;

        let commands = translate(&tokens, &self.functions)?;
        let result = evaluate(&commands, variables, &self.functions)?;

        debug!("{:?} = {}", text, result);
        Ok(result)
    }
}

struct Shadowed<'a, A: ?Sized, B: ?Sized> {
    front: &'a A,
    back: &'a B,
}

impl<A, B> Variables for Shadowed<'_, A, B>
where
    A: Variables + ?Sized,
    B: Variables + ?Sized,
{
    fn variable(&self, name: &str) -> Option<f64> {
        self.front
            .variable(name)
            .or_else(|| self.back.variable(name))
    }
}
