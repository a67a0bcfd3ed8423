use tracing::{debug, trace};

use crate::{
    error::{Error, ParseError},
    interpreter::{lexer::Token, operator::Operator},
};

/// Entry on the converter's operator stack.
enum Pending {
    Operator(&'static Operator, usize),
    LeftParen(usize),
}

/// Reorders an infix token sequence into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm. Numbers go straight to the output,
/// operators wait on a stack until an operator that binds less tightly (or a
/// closing parenthesis, or the end of input) releases them. Whether an equal
/// precedence operator releases the one below it depends on associativity,
/// see [`Operator::pops_before`].
///
/// The returned sequence never contains parenthesis tokens. Positions are
/// carried over unchanged.
///
/// # Errors
/// - [`ParseError::MismatchedParenthesis`] if a `)` has no matching `(` or a
///   `(` is never closed.
/// - [`RuntimeError::UnknownOperator`](crate::error::RuntimeError) if an
///   operator token is not in the operator table.
///
/// # Example
/// ```
/// use shunt::interpreter::{converter::to_postfix, lexer::Token};
///
/// // 1 + 2 * 3
/// let infix = vec![(Token::Number(1.0), 0),
///                  (Token::Operator('+'), 1),
///                  (Token::Number(2.0), 2),
///                  (Token::Operator('*'), 3),
///                  (Token::Number(3.0), 4)];
///
/// let postfix: Vec<Token> = to_postfix(&infix).unwrap()
///                                             .into_iter()
///                                             .map(|(t, _)| t)
///                                             .collect();
/// assert_eq!(postfix,
///            vec![Token::Number(1.0),
///                 Token::Number(2.0),
///                 Token::Number(3.0),
///                 Token::Operator('*'),
///                 Token::Operator('+')]);
/// ```
pub fn to_postfix(tokens: &[(Token, usize)]) -> Result<Vec<(Token, usize)>, Error> {
    let mut stack: Vec<Pending> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for (token, position) in tokens {
        let position = *position;
        match token {
            Token::Number(_) => output.push((token.clone(), position)),

            Token::LeftParen => stack.push(Pending::LeftParen(position)),

            Token::RightParen => loop {
                match stack.pop() {
                    Some(Pending::Operator(op, at)) => emit(&mut output, op, at),
                    Some(Pending::LeftParen(_)) => break,
                    None => return Err(ParseError::MismatchedParenthesis { position }.into()),
                }
            },

            Token::Operator(symbol) => {
                let incoming = Operator::resolve(*symbol, position)?;
                while let Some(Pending::Operator(top, at)) = stack.last()
                      && top.pops_before(incoming)
                {
                    let (top, at) = (*top, *at);
                    stack.pop();
                    emit(&mut output, top, at);
                }
                trace!("push '{}'", incoming.symbol);
                stack.push(Pending::Operator(incoming, position));
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op, at) => emit(&mut output, op, at),
            Pending::LeftParen(position) => {
                return Err(ParseError::MismatchedParenthesis { position }.into());
            },
        }
    }

    debug!("postfix: {output:?}");
    Ok(output)
}

fn emit(output: &mut Vec<(Token, usize)>, op: &Operator, position: usize) {
    trace!("pop '{}'", op.symbol);
    output.push((Token::Operator(op.symbol), position));
}
