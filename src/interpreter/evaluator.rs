use tracing::{debug, trace};

use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{lexer::Token, operator::Operator},
};

/// Result type used by the evaluator.
///
/// Evaluation steps return either a value of type `T` or a `RuntimeError`
/// describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a postfix token sequence to a single number.
///
/// Numbers are pushed onto a value stack. An operator pops its right operand,
/// then its left operand, and pushes the result of applying it. Exactly one
/// value must be left once the sequence is consumed.
///
/// # Errors
/// - [`RuntimeError::MissingOperand`] if an operator finds fewer than two
///   values, or if the sequence leaves no value at all.
/// - [`RuntimeError::MissingOperator`] if more than one value is left.
/// - [`RuntimeError::DivisionByZero`] if the divisor of `/` is zero.
/// - [`RuntimeError::UnknownOperator`] if an operator symbol is not in the
///   operator table.
/// - [`ParseError::MismatchedParenthesis`] if the sequence still contains a
///   parenthesis, which [`to_postfix`](super::converter::to_postfix) never
///   produces.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::eval_postfix, lexer::Token};
///
/// // 7 2 -   is   7 - 2
/// let postfix = vec![(Token::Number(7.0), 0),
///                    (Token::Number(2.0), 2),
///                    (Token::Operator('-'), 1)];
///
/// assert_eq!(eval_postfix(&postfix).unwrap(), 5.0);
/// ```
pub fn eval_postfix(postfix: &[(Token, usize)]) -> Result<f64, Error> {
    // Each value remembers where its leftmost operand started.
    let mut stack: Vec<(f64, usize)> = Vec::new();

    for (token, position) in postfix {
        let position = *position;
        match token {
            Token::Number(value) => stack.push((*value, position)),

            Token::Operator(symbol) => {
                let op = Operator::resolve(*symbol, position)?;
                let (right, left) = match (stack.pop(), stack.pop()) {
                    (Some(right), Some(left)) => (right, left),
                    _ => return Err(RuntimeError::MissingOperand { position }.into()),
                };
                let value = (op.apply)(left.0, right.0, position)?;
                trace!("{} {symbol} {} = {value}", left.0, right.0);
                stack.push((value, left.1));
            },

            Token::LeftParen | Token::RightParen => {
                return Err(ParseError::MismatchedParenthesis { position }.into());
            },
        }
    }

    match stack.as_slice() {
        [(value, _)] => {
            debug!("result: {value}");
            Ok(*value)
        },
        [] => Err(RuntimeError::MissingOperand { position: 0 }.into()),
        [_, (_, position), ..] => Err(RuntimeError::MissingOperator { position: *position }.into()),
    }
}
