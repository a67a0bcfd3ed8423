use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// How a chain of operators with equal precedence groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `8 - 4 - 2` groups as `(8 - 4) - 2`.
    Left,
    /// `2 ^ 3 ^ 2` groups as `2 ^ (3 ^ 2)`.
    Right,
}

/// Signature shared by every entry of the operator table.
///
/// Receives the left operand, the right operand and the byte offset of the
/// operator (for error reporting).
pub type ApplyFn = fn(f64, f64, usize) -> EvalResult<f64>;

/// Syntactic and semantic data for one binary operator.
///
/// The converter only reads `precedence` and `associativity`; the evaluator
/// only calls `apply`.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    /// The character that denotes the operator in source text.
    pub symbol:        char,
    /// Binding strength. Higher binds tighter.
    pub precedence:    u8,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
    /// Computes `left <op> right`.
    pub apply:         ApplyFn,
}

/// The complete operator table.
///
/// Adding an operator means adding a row here and its symbol to the lexer.
pub static OPERATORS: [Operator; 5] =
    [Operator { symbol:        '+',
                precedence:    2,
                associativity: Associativity::Left,
                apply:         |l, r, _| Ok(l + r), },
     Operator { symbol:        '-',
                precedence:    2,
                associativity: Associativity::Left,
                apply:         |l, r, _| Ok(l - r), },
     Operator { symbol:        '*',
                precedence:    3,
                associativity: Associativity::Left,
                apply:         |l, r, _| Ok(l * r), },
     Operator { symbol:        '/',
                precedence:    3,
                associativity: Associativity::Left,
                apply:         divide, },
     Operator { symbol:        '^',
                precedence:    4,
                associativity: Associativity::Right,
                apply:         |l, r, _| Ok(l.powf(r)), }];

impl Operator {
    /// Looks up the table entry for `symbol`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::operator::{Associativity, Operator};
    ///
    /// let pow = Operator::lookup('^').unwrap();
    /// assert_eq!(pow.precedence, 4);
    /// assert_eq!(pow.associativity, Associativity::Right);
    /// assert!(Operator::lookup('%').is_none());
    /// ```
    #[must_use]
    pub fn lookup(symbol: char) -> Option<&'static Self> {
        OPERATORS.iter().find(|op| op.symbol == symbol)
    }

    /// Like [`Operator::lookup`], but reports a missing entry as
    /// [`RuntimeError::UnknownOperator`].
    pub fn resolve(symbol: char, position: usize) -> EvalResult<&'static Self> {
        Self::lookup(symbol).ok_or(RuntimeError::UnknownOperator { symbol, position })
    }

    /// Returns `true` if an operator already on the converter's stack must be
    /// emitted before `incoming` is pushed.
    ///
    /// Higher precedence always pops. Equal precedence pops only when the
    /// incoming operator is left-associative.
    #[must_use]
    pub fn pops_before(&self, incoming: &Self) -> bool {
        self.precedence > incoming.precedence
        || (self.precedence == incoming.precedence
            && incoming.associativity == Associativity::Left)
    }
}

fn divide(left: f64, right: f64, position: usize) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero { position });
    }
    Ok(left / right)
}
