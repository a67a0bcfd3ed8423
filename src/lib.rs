//! # shunt
//!
//! shunt evaluates arithmetic expressions written in infix notation, such as
//! `(2 + 3) * 4 ^ 2`, and returns a floating-point result.
//!
//! Evaluation runs in three stages: the lexer turns text into tokens, the
//! converter reorders them into postfix form with the shunting-yard algorithm,
//! and the evaluator reduces the postfix sequence on a value stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{converter::to_postfix, evaluator::eval_postfix, lexer::tokenize};

/// Provides unified error types for lexing, conversion and evaluation.
///
/// Every failure carries the byte offset of the token it concerns and maps to
/// an [`ErrorKind`] for callers that only care about the category.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, converter, evaluator).
/// - Implements `Display` with human readable messages.
pub mod error;
/// The evaluation pipeline.
///
/// Exposes each stage on its own so that callers can inspect tokens or
/// postfix sequences, in addition to the [`evaluate`] entry point.
pub mod interpreter;

pub use error::{Error, ErrorKind, ParseError, RuntimeError};

/// What the lexer does with characters that are not digits, operators,
/// parentheses or whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownCharPolicy {
    /// Fail with [`ParseError::UnexpectedCharacter`].
    #[default]
    Reject,
    /// Drop the character. It does not end a number, so `1x2` reads as `12`.
    Skip,
}

/// Evaluation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Handling of unrecognized characters.
    pub unknown_chars: UnknownCharPolicy,
}

/// Evaluates an infix expression with the default [`Options`].
///
/// Returns `Ok(None)` when the expression is empty or only whitespace, and
/// `Ok(Some(value))` otherwise.
///
/// # Errors
/// Returns the first error raised by the lexer, the converter or the
/// evaluator.
///
/// # Examples
/// ```
/// use shunt::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2+3*4").unwrap(), Some(14.0));
/// assert_eq!(evaluate("2^3^2").unwrap(), Some(512.0));
/// assert_eq!(evaluate("").unwrap(), None);
///
/// let err = evaluate("(1+2").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MismatchedParenthesis);
/// ```
pub fn evaluate(source: &str) -> Result<Option<f64>, Error> {
    evaluate_with(source, &Options::default())
}

/// Evaluates an infix expression with explicit [`Options`].
///
/// # Errors
/// Returns the first error raised by the lexer, the converter or the
/// evaluator.
///
/// # Examples
/// ```
/// use shunt::{Options, UnknownCharPolicy, evaluate_with};
///
/// let lenient = Options { unknown_chars: UnknownCharPolicy::Skip };
/// assert_eq!(evaluate_with("1x+2", &lenient).unwrap(), Some(3.0));
/// assert!(evaluate_with("1x+2", &Options::default()).is_err());
/// ```
pub fn evaluate_with(source: &str, options: &Options) -> Result<Option<f64>, Error> {
    if source.trim().is_empty() {
        debug!("empty expression");
        return Ok(None);
    }

    let tokens = tokenize(source, options)?;
    let postfix = to_postfix(&tokens)?;
    if postfix.is_empty() {
        // Only parentheses (or skipped characters) were given.
        let position = tokens.first().map_or(0, |&(_, position)| position);
        return Err(RuntimeError::MissingOperand { position }.into());
    }
    eval_postfix(&postfix).map(Some)
}
