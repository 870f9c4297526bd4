use crate::error::{EvalError, HandlerError};
use crate::translator::{Command, CommandKind};
use log::{debug, trace};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

pub type Handler = Arc<dyn Fn(&[f64]) -> Result<f64, HandlerError> + Send + Sync>;

/// A callable with a fixed number of arguments.
#[derive(Clone)]
pub struct Function {
    arity: usize,
    handler: Handler,
}

impl Function {
    pub fn new<F>(arity: usize, handler: F) -> Self
    where
        F: Fn(&[f64]) -> Result<f64, HandlerError> + Send + Sync + 'static,
    {
        Self {
            arity,
            handler: Arc::new(handler),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Calls the handler; `arguments` are in source order.
    pub fn call(&self, arguments: &[f64]) -> Result<f64, HandlerError> {
        (self.handler)(arguments)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Variable lookup used while evaluating.
pub trait Variables {
    fn variable(&self, name: &str) -> Option<f64>;
}

impl<S: BuildHasher> Variables for HashMap<String, f64, S> {
    fn variable(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl Variables for BTreeMap<String, f64> {
    fn variable(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

/// Function lookup used while evaluating.
pub trait Functions {
    fn function(&self, name: &str) -> Option<&Function>;
}

impl<S: BuildHasher> Functions for HashMap<String, Function, S> {
    fn function(&self, name: &str) -> Option<&Function> {
        self.get(name)
    }
}

impl Functions for BTreeMap<String, Function> {
    fn function(&self, name: &str) -> Option<&Function> {
        self.get(name)
    }
}

/// Runs a postfix program on a number stack and returns the single value left.
pub fn evaluate<V, F>(commands: &[Command], variables: &V, functions: &F) -> Result<f64, EvalError>
where
    V: Variables + ?Sized,
    F: Functions + ?Sized,
{
    let mut stack: Vec<f64> = Vec::new();

    for command in commands {
        trace!("execute `{}` with stack {:?}", command, stack);

        match command.kind {
            CommandKind::PushNumber => {
                let number = command.operand.parse::<f64>().map_err(|source| {
                    EvalError::InvalidNumber {
                        literal: command.operand.clone(),
                        position: command.position,
                        source,
                    }
                })?;
                stack.push(number);
            }
            CommandKind::PushVariable => {
                let number = variables.variable(&command.operand).ok_or_else(|| {
                    EvalError::UnknownVariable {
                        name: command.operand.clone(),
                        position: command.position,
                    }
                })?;
                stack.push(number);
            }
            CommandKind::CallFunction => {
                let function = functions.function(&command.operand).ok_or_else(|| {
                    EvalError::UnknownFunction {
                        name: command.operand.clone(),
                        position: command.position,
                    }
                })?;

                let mut arguments = Vec::with_capacity(function.arity());
                for argument in 0..function.arity() {
                    let number = stack.pop().ok_or_else(|| EvalError::EmptyStackForArgument {
                        name: command.operand.clone(),
                        argument,
                        position: command.position,
                    })?;
                    arguments.push(number);
                }
                arguments.reverse();

                let result = function
                    .call(&arguments)
                    .map_err(|source| EvalError::Handler {
                        name: command.operand.clone(),
                        position: command.position,
                        source,
                    })?;
                stack.push(result);
            }
        }
    }

    let result = stack.pop().ok_or(EvalError::EmptyStack)?;
    if !stack.is_empty() {
        return Err(EvalError::SurplusValues {
            count: stack.len() + 1,
        });
    }

    debug!("evaluated {} commands to {}", commands.len(), result);
    Ok(result)
}
