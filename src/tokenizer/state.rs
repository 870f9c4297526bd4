use super::{Token, DECIMAL_POINT};
use crate::error::LexError;
use log::trace;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum State {
    Default,
    InNumber,
    InIdentifier,
}

/// Accumulates the characters of the number or identifier being read.
#[derive(Debug)]
pub(super) struct StateContext {
    state: State,
    has_decimal_point: bool,
    buffer: String,
    // in characters, positions are character offsets
    buffer_len: usize,
}

impl StateContext {
    pub(super) fn new() -> Self {
        Self {
            state: State::Default,
            has_decimal_point: false,
            buffer: String::new(),
            buffer_len: 0,
        }
    }

    /// Appends a digit or decimal point. A digit read inside an identifier
    /// stays part of the identifier.
    pub(super) fn add_to_number(&mut self, index: usize, character: char) -> Result<(), LexError> {
        if self.state == State::Default {
            self.state = State::InNumber;
        }

        if character == DECIMAL_POINT && self.state == State::InNumber {
            if self.has_decimal_point {
                return Err(LexError::DuplicateDecimalPoint {
                    position: self.start(index),
                });
            }
            self.has_decimal_point = true;
        }

        self.push(character);
        Ok(())
    }

    pub(super) fn add_to_identifier(&mut self, character: char) {
        if self.state == State::Default {
            self.state = State::InIdentifier;
        }
        self.push(character);
    }

    /// Emits whichever token is pending, if any.
    pub(super) fn flush(&mut self, index: usize, tokens: &mut Vec<Token>) -> Result<(), LexError> {
        self.flush_number(index, tokens)?;
        self.flush_identifier(index, tokens);
        Ok(())
    }

    pub(super) fn flush_number(
        &mut self,
        index: usize,
        tokens: &mut Vec<Token>,
    ) -> Result<(), LexError> {
        if self.state != State::InNumber {
            return Ok(());
        }

        let position = self.start(index);
        if self.buffer.len() == 1 && self.buffer.starts_with(DECIMAL_POINT) {
            return Err(LexError::BareDecimalPoint { position });
        }

        let value = self.take();
        trace!("number {:?} at {}", value, position);
        tokens.push(Token::number(value, position));
        Ok(())
    }

    pub(super) fn flush_identifier(&mut self, index: usize, tokens: &mut Vec<Token>) {
        if self.state != State::InIdentifier {
            return;
        }

        let position = self.start(index);
        let value = self.take();
        trace!("identifier {:?} at {}", value, position);
        tokens.push(Token::identifier(value, position));
    }

    fn push(&mut self, character: char) {
        self.buffer.push(character);
        self.buffer_len += 1;
    }

    fn start(&self, index: usize) -> usize {
        index - self.buffer_len
    }

    fn take(&mut self) -> String {
        self.state = State::Default;
        self.has_decimal_point = false;
        self.buffer_len = 0;
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::TokenKind;

    #[test]
    fn test_flush_without_pending_token() {
        let mut context = StateContext::new();
        let mut tokens = Vec::new();
        context.flush(3, &mut tokens).unwrap();
        assert!(tokens.is_empty());
        assert_eq!(context.state, State::Default);
    }

    #[test]
    fn test_number_resets_after_flush() {
        let mut context = StateContext::new();
        let mut tokens = Vec::new();

        for (index, character) in "1.5".chars().enumerate() {
            context.add_to_number(index, character).unwrap();
        }
        context.flush(3, &mut tokens).unwrap();

        // a new number may carry its own decimal point
        for (index, character) in ".5".chars().enumerate() {
            context.add_to_number(index + 4, character).unwrap();
        }
        context.flush(6, &mut tokens).unwrap();

        assert_eq!(tokens, vec![Token::number("1.5", 0), Token::number(".5", 4)]);
    }

    #[test]
    fn test_digit_extends_identifier() {
        let mut context = StateContext::new();
        let mut tokens = Vec::new();

        context.add_to_identifier('x');
        context.add_to_number(1, '2').unwrap();
        context.flush(2, &mut tokens).unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text(), "x2");
    }

    #[test]
    fn test_bare_point_is_rejected() {
        let mut context = StateContext::new();
        let mut tokens = Vec::new();

        context.add_to_number(7, '.').unwrap();
        assert_eq!(
            context.flush_number(8, &mut tokens),
            Err(LexError::BareDecimalPoint { position: 7 })
        );
        assert!(tokens.is_empty());
    }
}
