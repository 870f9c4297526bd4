use crate::error::LexError;
use log::{debug, trace};
use std::fmt;

mod state;

use state::StateContext;

pub(crate) const DECIMAL_POINT: char = '.';

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Exponent,
    Number,
    Identifier,
    LeftParen,
    RightParen,
    Comma,
}

impl TokenKind {
    pub fn is_operator(&self) -> bool {
        self.precedence().is_some()
    }

    /// Binding tier of an operator; `None` for everything else.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            TokenKind::Plus | TokenKind::Minus => Some(1),
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Some(2),
            TokenKind::Exponent => Some(3),
            _ => None,
        }
    }

    /// Canonical source text of a punctuation kind.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::Percent => Some("%"),
            TokenKind::Exponent => Some("^"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::Comma => Some(","),
            TokenKind::Number | TokenKind::Identifier => None,
        }
    }
}

impl TryFrom<char> for TokenKind {
    type Error = char;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        match character {
            '+' => Ok(TokenKind::Plus),
            '-' => Ok(TokenKind::Minus),
            '*' => Ok(TokenKind::Asterisk),
            '/' => Ok(TokenKind::Slash),
            '%' => Ok(TokenKind::Percent),
            '^' => Ok(TokenKind::Exponent),
            '(' => Ok(TokenKind::LeftParen),
            ')' => Ok(TokenKind::RightParen),
            ',' => Ok(TokenKind::Comma),
            _ => Err(character),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => f.pad(symbol),
            None => f.pad(&format!("{:?}", self)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text, only for numbers and identifiers.
    pub value: Option<String>,
    /// Character offset of the first character.
    pub position: usize,
}

impl Token {
    pub fn punctuation(kind: TokenKind, position: usize) -> Self {
        Self {
            kind,
            value: None,
            position,
        }
    }

    pub fn number(value: impl Into<String>, position: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            value: Some(value.into()),
            position,
        }
    }

    pub fn identifier(value: impl Into<String>, position: usize) -> Self {
        Self {
            kind: TokenKind::Identifier,
            value: Some(value.into()),
            position,
        }
    }

    /// Source text of the token: its value, or the punctuation symbol.
    pub fn text(&self) -> &str {
        match &self.value {
            Some(value) => value.as_str(),
            None => self.kind.symbol().unwrap_or_default(),
        }
    }
}

/// Splits `text` into tokens. Positions are character (not byte) offsets.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut context = StateContext::new();
    let mut end = 0;

    for (index, character) in text.chars().enumerate() {
        end = index + 1;

        if character.is_whitespace() {
            context.flush(index, &mut tokens)?;
        } else if character.is_ascii_digit() || character == DECIMAL_POINT {
            if character == DECIMAL_POINT {
                context.flush_identifier(index, &mut tokens);
            }
            context.add_to_number(index, character)?;
        } else if character.is_alphabetic() || character == '_' {
            context.flush_number(index, &mut tokens)?;
            context.add_to_identifier(character);
        } else if let Ok(kind) = TokenKind::try_from(character) {
            context.flush(index, &mut tokens)?;
            trace!("token {} at {}", kind, index);
            tokens.push(Token::punctuation(kind, index));
        } else {
            return Err(LexError::UnknownCharacter {
                character,
                position: index,
            });
        }
    }

    context.flush(end, &mut tokens)?;

    debug!("tokenized {:?} into {} tokens", text, tokens.len());
    Ok(tokens)
}
