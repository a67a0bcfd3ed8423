/// Parsing errors.
///
/// Defines the errors that can occur while tokenizing an expression or while
/// reordering it into postfix form: characters the lexer does not recognize
/// and parentheses that do not pair up.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while reducing a postfix sequence to a number:
/// operators without enough operands, operands without an operator, division
/// by zero and operator symbols that are not in the operator table.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The kind of failure, without any location information.
///
/// Every [`Error`] maps to exactly one kind through [`Error::kind`]. Callers
/// that only need to branch on the category of a failure match on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operator had fewer than two values available to it.
    MissingOperand,
    /// More than one value remained once every operator was applied.
    MissingOperator,
    /// A `)` had no matching `(`, or a `(` was never closed.
    MismatchedParenthesis,
    /// The divisor of `/` was zero.
    DivisionByZero,
    /// An operator symbol outside the operator table was encountered.
    UnknownOperator,
    /// The tokenizer found a character it does not recognize.
    UnexpectedCharacter,
    /// A digit run could not be read as a number.
    InvalidNumber,
}

/// Any failure produced while evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression could not be tokenized or converted to postfix form.
    Parse(ParseError),
    /// The postfix sequence could not be reduced to a single number.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use shunt::{ErrorKind, evaluate};
    ///
    /// let err = evaluate("5/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::UnexpectedCharacter { .. }) => ErrorKind::UnexpectedCharacter,
            Self::Parse(ParseError::MismatchedParenthesis { .. }) => {
                ErrorKind::MismatchedParenthesis
            },
            Self::Parse(ParseError::InvalidNumber { .. }) => ErrorKind::InvalidNumber,
            Self::Runtime(RuntimeError::MissingOperand { .. }) => ErrorKind::MissingOperand,
            Self::Runtime(RuntimeError::MissingOperator { .. }) => ErrorKind::MissingOperator,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::UnknownOperator { .. }) => ErrorKind::UnknownOperator,
        }
    }

    /// Returns the byte offset in the source that the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
