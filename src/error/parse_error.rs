#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or conversion to
/// postfix form.
pub enum ParseError {
    /// Found a character that is not a digit, an operator, a parenthesis or
    /// whitespace.
    UnexpectedCharacter {
        /// The offending character(s), as they appear in the source.
        character: String,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A digit run that does not read as an `f64`.
    InvalidNumber {
        /// The digits as they were accumulated.
        literal:  String,
        /// Byte offset of the first digit.
        position: usize,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    MismatchedParenthesis {
        /// Byte offset of the unmatched parenthesis.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source that this error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::MismatchedParenthesis { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Error at position {position}: Unexpected character '{character}'."),

            Self::InvalidNumber { literal, position } => {
                write!(f, "Error at position {position}: Invalid number '{literal}'.")
            },

            Self::MismatchedParenthesis { position } => {
                write!(f, "Error at position {position}: Mismatched parenthesis.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
