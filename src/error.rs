//! Error types for each stage of the pipeline.
//!
//! Every stage returns its own error enum. [`Error`] wraps them with the stage
//! label and keeps the stage error reachable through `source()`.

use std::num::ParseFloatError;
use thiserror::Error;

/// Failure returned by a caller-supplied function handler.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Coarse classification of a failure, for diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed text: unknown character or misplaced decimal point.
    Lex,
    /// Unbalanced parentheses or a comma outside a call.
    Syntax,
    /// Unknown variable or function, or an unparsable literal.
    Semantic,
    /// Not enough operands for a call, or operands left over.
    Arity,
    /// A caller-supplied function failed.
    Handler,
    /// The expression was rejected by the configured limits.
    Limit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unknown character {character:?} at position {position}")]
    UnknownCharacter { character: char, position: usize },

    #[error("duplicate decimal point in the number at position {position}")]
    DuplicateDecimalPoint { position: usize },

    #[error("the number has only a decimal point at position {position}")]
    BareDecimalPoint { position: usize },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::UnknownCharacter { position, .. }
            | LexError::DuplicateDecimalPoint { position }
            | LexError::BareDecimalPoint { position } => *position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("no left parenthesis found at position {position}")]
    MissingLeftParenthesis { position: usize },

    #[error("unexpected left parenthesis at position {position}")]
    UnexpectedLeftParenthesis { position: usize },
}

impl SyntaxError {
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::MissingLeftParenthesis { position }
            | SyntaxError::UnexpectedLeftParenthesis { position } => *position,
        }
    }
}

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unable to parse the number {literal:?} at position {position}: {source}")]
    InvalidNumber {
        literal: String,
        position: usize,
        #[source]
        source: ParseFloatError,
    },

    #[error("unknown variable {name:?} at position {position}")]
    UnknownVariable { name: String, position: usize },

    #[error("unknown function {name:?} at position {position}")]
    UnknownFunction { name: String, position: usize },

    #[error("number stack is empty for argument #{argument} of {name:?} at position {position}")]
    EmptyStackForArgument {
        name: String,
        argument: usize,
        position: usize,
    },

    #[error("unable to call the function {name:?} at position {position}: {source}")]
    Handler {
        name: String,
        position: usize,
        #[source]
        source: HandlerError,
    },

    #[error("number stack is empty")]
    EmptyStack,

    #[error("{count} values left on the number stack")]
    SurplusValues { count: usize },
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::InvalidNumber { .. }
            | EvalError::UnknownVariable { .. }
            | EvalError::UnknownFunction { .. } => ErrorKind::Semantic,
            EvalError::EmptyStackForArgument { .. }
            | EvalError::EmptyStack
            | EvalError::SurplusValues { .. } => ErrorKind::Arity,
            EvalError::Handler { .. } => ErrorKind::Handler,
        }
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::InvalidNumber { position, .. }
            | EvalError::UnknownVariable { position, .. }
            | EvalError::UnknownFunction { position, .. }
            | EvalError::EmptyStackForArgument { position, .. }
            | EvalError::Handler { position, .. } => Some(*position),
            EvalError::EmptyStack | EvalError::SurplusValues { .. } => None,
        }
    }

    /// The offending literal, variable or function name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            EvalError::InvalidNumber { literal: name, .. }
            | EvalError::UnknownVariable { name, .. }
            | EvalError::UnknownFunction { name, .. }
            | EvalError::EmptyStackForArgument { name, .. }
            | EvalError::Handler { name, .. } => Some(name),
            EvalError::EmptyStack | EvalError::SurplusValues { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LimitError {
    #[error("expression is {length} characters long, the limit is {limit}")]
    ExpressionTooLong { length: usize, limit: usize },

    #[error("expression has {count} tokens, the limit is {limit}")]
    TooManyTokens { count: usize, limit: usize },
}

/// Error returned by the full pipeline, labelled with the failing stage.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to tokenize: {0}")]
    Tokenize(#[from] LexError),

    #[error("unable to translate: {0}")]
    Translate(#[from] SyntaxError),

    #[error("unable to evaluate: {0}")]
    Evaluate(#[from] EvalError),

    #[error("limit exceeded: {0}")]
    Limit(#[from] LimitError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Tokenize(_) => ErrorKind::Lex,
            Error::Translate(_) => ErrorKind::Syntax,
            Error::Evaluate(err) => err.kind(),
            Error::Limit(_) => ErrorKind::Limit,
        }
    }

    /// Character offset of the offending token, when the failure has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Tokenize(err) => Some(err.position()),
            Error::Translate(err) => Some(err.position()),
            Error::Evaluate(err) => err.position(),
            Error::Limit(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Error::Evaluate(err) => err.name(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
