use logos::Logos;
use tracing::{debug, trace};

use crate::{
    Options, UnknownCharPolicy,
    error::{Error, ParseError},
};

/// Represents a lexical token of an arithmetic expression.
///
/// This is the tokenizer's output and the converter's input. Every token is
/// paired with the byte offset where it starts in the source text.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A run of decimal digits, already parsed.
    Number(f64),
    /// One of `+ - * / ^`.
    Operator(char),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// Raw lexemes recognized by the scanner.
///
/// Whitespace is kept as a lexeme of its own because it ends a number. The
/// tokenizer folds these into [`Token`]s.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    /// A run of ASCII digits such as `42`.
    #[regex(r"[0-9]+")]
    Digits,
    /// `+`, `-`, `*`, `/` or `^`.
    #[regex(r"[-+*/^]", |lex| lex.slice().chars().next())]
    Operator(char),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any Unicode whitespace, the same set `str::trim` strips.
    #[regex(r"\p{White_Space}+")]
    Whitespace,
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// Digits accumulate into a pending number, which is flushed when an
/// operator, a parenthesis, whitespace or the end of input is reached.
/// Characters the scanner does not recognize are handled according to
/// `options.unknown_chars`: rejected, or skipped without ending the pending
/// number.
///
/// # Errors
/// - [`ParseError::UnexpectedCharacter`] for an unrecognized character under
///   [`UnknownCharPolicy::Reject`].
/// - [`ParseError::InvalidNumber`] if a digit run cannot be read as an `f64`.
///
/// # Example
/// ```
/// use shunt::{
///     Options,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("12*(3+4)", &Options::default()).unwrap();
/// assert_eq!(tokens[0], (Token::Number(12.0), 0));
/// assert_eq!(tokens[1], (Token::Operator('*'), 2));
/// assert_eq!(tokens[2], (Token::LeftParen, 3));
/// assert_eq!(tokens.len(), 7);
/// ```
pub fn tokenize(source: &str, options: &Options) -> Result<Vec<(Token, usize)>, Error> {
    let mut tokens = Vec::new();
    let mut pending = PendingNumber::default();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        match lexeme {
            Ok(Lexeme::Digits) => pending.push(lexer.slice(), position),
            Ok(Lexeme::Whitespace) => pending.flush(&mut tokens)?,
            Ok(Lexeme::Operator(symbol)) => {
                pending.flush(&mut tokens)?;
                tokens.push((Token::Operator(symbol), position));
            },
            Ok(Lexeme::LParen) => {
                pending.flush(&mut tokens)?;
                tokens.push((Token::LeftParen, position));
            },
            Ok(Lexeme::RParen) => {
                pending.flush(&mut tokens)?;
                tokens.push((Token::RightParen, position));
            },
            Err(()) => match options.unknown_chars {
                UnknownCharPolicy::Reject => {
                    return Err(ParseError::UnexpectedCharacter { character: lexer.slice()
                                                                                 .to_string(),
                                                                 position }.into());
                },
                UnknownCharPolicy::Skip => {
                    trace!("skipping unrecognized {:?} at {position}", lexer.slice());
                },
            },
        }
    }
    pending.flush(&mut tokens)?;

    debug!("tokens: {tokens:?}");
    Ok(tokens)
}

/// Digits read so far for the number currently being scanned.
#[derive(Default)]
struct PendingNumber {
    digits:   String,
    position: usize,
}

impl PendingNumber {
    fn push(&mut self, digits: &str, position: usize) {
        if self.digits.is_empty() {
            self.position = position;
        }
        self.digits.push_str(digits);
    }

    /// Emits the pending number, if any, and resets the accumulator.
    ///
    /// Overly long digit runs round to the nearest `f64` or become infinity;
    /// they are never dropped.
    fn flush(&mut self, tokens: &mut Vec<(Token, usize)>) -> Result<(), ParseError> {
        if self.digits.is_empty() {
            return Ok(());
        }
        let value = self.digits
                        .parse::<f64>()
                        .map_err(|_| ParseError::InvalidNumber { literal:  self.digits.clone(),
                                                                 position: self.position, })?;
        tokens.push((Token::Number(value), self.position));
        self.digits.clear();
        Ok(())
    }
}
