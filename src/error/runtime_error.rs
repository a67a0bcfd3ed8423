#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An operator was applied with fewer than two values on the stack.
    MissingOperand {
        /// Byte offset of the operator that lacked operands.
        position: usize,
    },
    /// Evaluation finished with more than one value left on the stack.
    MissingOperator {
        /// Byte offset of the first operand that no operator consumed.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// An operator symbol with no entry in the operator table.
    UnknownOperator {
        /// The symbol that was looked up.
        symbol:   char,
        /// Byte offset of the operator.
        position: usize,
    },
}

impl RuntimeError {
    /// Byte offset in the source that this error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::MissingOperand { position }
            | Self::MissingOperator { position }
            | Self::DivisionByZero { position }
            | Self::UnknownOperator { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { position } => {
                write!(f, "Error at position {position}: Missing or bad operand.")
            },
            Self::MissingOperator { position } => write!(f,
                                                         "Error at position {position}: Missing operator or parenthesis."),
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::UnknownOperator { symbol, position } => {
                write!(f, "Error at position {position}: Operator '{symbol}' not found.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
