use crate::error::SyntaxError;
use crate::tokenizer::{Token, TokenKind};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::hash::BuildHasher;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CommandKind {
    PushNumber,
    PushVariable,
    CallFunction,
}

/// One step of the postfix program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// Number literal, variable name, or function/operator name.
    pub operand: String,
    pub position: usize,
}

impl Command {
    pub fn push_number(literal: impl Into<String>, position: usize) -> Self {
        Self {
            kind: CommandKind::PushNumber,
            operand: literal.into(),
            position,
        }
    }

    pub fn push_variable(name: impl Into<String>, position: usize) -> Self {
        Self {
            kind: CommandKind::PushVariable,
            operand: name.into(),
            position,
        }
    }

    pub fn call_function(name: impl Into<String>, position: usize) -> Self {
        Self {
            kind: CommandKind::CallFunction,
            operand: name.into(),
            position,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CommandKind::PushNumber => write!(f, "push {}", self.operand),
            CommandKind::PushVariable => write!(f, "load {}", self.operand),
            CommandKind::CallFunction => write!(f, "call {}", self.operand),
        }
    }
}

/// Tells the translator which identifiers name functions.
pub trait FunctionNames {
    fn is_function(&self, name: &str) -> bool;
}

impl<S: BuildHasher> FunctionNames for HashSet<String, S> {
    fn is_function(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<V, S: BuildHasher> FunctionNames for HashMap<String, V, S> {
    fn is_function(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl FunctionNames for BTreeSet<String> {
    fn is_function(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<V> FunctionNames for BTreeMap<String, V> {
    fn is_function(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl FunctionNames for [&str] {
    fn is_function(&self, name: &str) -> bool {
        self.iter().any(|candidate| *candidate == name)
    }
}

impl<const N: usize> FunctionNames for [&str; N] {
    fn is_function(&self, name: &str) -> bool {
        self.as_slice().is_function(name)
    }
}

/// Converts infix tokens into a postfix command sequence.
///
/// Operators of equal precedence are left-associative, including `^`.
/// Identifiers found in `functions` are emitted as calls once their
/// argument list closes, or right away when no `(` follows them; all other
/// identifiers are variables.
pub fn translate<F>(tokens: &[Token], functions: &F) -> Result<Vec<Command>, SyntaxError>
where
    F: FunctionNames + ?Sized,
{
    let mut translator = Translator::default();
    let mut remaining = tokens.iter().peekable();
    while let Some(token) = remaining.next() {
        let opens_call = remaining
            .peek()
            .is_some_and(|next| next.kind == TokenKind::LeftParen);
        translator.process(token, opens_call, functions)?;
    }
    let commands = translator.finish()?;

    debug!(
        "translated {} tokens into {} commands",
        tokens.len(),
        commands.len()
    );
    Ok(commands)
}

#[derive(Default)]
struct Translator<'a> {
    commands: Vec<Command>,
    stack: Vec<&'a Token>,
}

impl<'a> Translator<'a> {
    /// `opens_call` tells whether the next token is a left parenthesis.
    fn process<F>(
        &mut self,
        token: &'a Token,
        opens_call: bool,
        functions: &F,
    ) -> Result<(), SyntaxError>
    where
        F: FunctionNames + ?Sized,
    {
        match token.kind {
            TokenKind::Number => {
                self.emit(Command::push_number(token.text(), token.position));
            }
            TokenKind::Identifier => {
                if !functions.is_function(token.text()) {
                    self.emit(Command::push_variable(token.text(), token.position));
                } else if opens_call {
                    self.stack.push(token);
                } else {
                    self.emit_call(token);
                }
            }
            TokenKind::LeftParen => self.stack.push(token),
            TokenKind::RightParen => {
                self.flush_operators(None);
                match self.stack.pop() {
                    Some(top) if top.kind == TokenKind::LeftParen => {}
                    _ => {
                        return Err(SyntaxError::MissingLeftParenthesis {
                            position: token.position,
                        })
                    }
                }

                if let Some(function) = self.stack.last().copied() {
                    if function.kind == TokenKind::Identifier {
                        self.stack.pop();
                        self.emit_call(function);
                    }
                }
            }
            TokenKind::Comma => {
                self.flush_operators(None);
                if self.stack.last().map(|top| top.kind) != Some(TokenKind::LeftParen) {
                    return Err(SyntaxError::MissingLeftParenthesis {
                        position: token.position,
                    });
                }
            }
            _ => {
                self.flush_operators(token.kind.precedence());
                self.stack.push(token);
            }
        }

        Ok(())
    }

    /// Pops operators binding at least as tight as `precedence` (all
    /// operators when `None`) and stops at the first non-operator.
    fn flush_operators(&mut self, precedence: Option<u8>) {
        while let Some(top) = self.stack.last().copied() {
            let Some(top_precedence) = top.kind.precedence() else {
                break;
            };
            if precedence.is_some_and(|current| top_precedence < current) {
                break;
            }

            self.stack.pop();
            self.emit_call(top);
        }
    }

    fn finish(mut self) -> Result<Vec<Command>, SyntaxError> {
        while let Some(token) = self.stack.pop() {
            if token.kind == TokenKind::LeftParen {
                return Err(SyntaxError::UnexpectedLeftParenthesis {
                    position: token.position,
                });
            }
            self.emit_call(token);
        }

        Ok(self.commands)
    }

    fn emit_call(&mut self, token: &Token) {
        self.emit(Command::call_function(token.text(), token.position));
    }

    fn emit(&mut self, command: Command) {
        trace!("emit `{}` at {}", command, command.position);
        self.commands.push(command);
    }
}
