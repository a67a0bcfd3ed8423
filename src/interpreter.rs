/// The converter module reorders infix tokens into postfix order.
///
/// It implements the shunting-yard algorithm on top of the operator table,
/// resolving precedence, associativity and parentheses so that the evaluator
/// never has to.
///
/// # Responsibilities
/// - Emits operators in the order they must be applied.
/// - Detects unbalanced parentheses.
pub mod converter;
/// The evaluator module reduces a postfix sequence to a number.
///
/// # Responsibilities
/// - Applies operators to the values on a stack.
/// - Reports missing operands, surplus operands and division by zero.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source text and produces numbers, operators and
/// parentheses, each tagged with its byte offset. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Accumulates digit runs into number tokens.
/// - Applies the configured policy to unrecognized characters.
pub mod lexer;
/// The operator table.
///
/// Holds precedence, associativity and the arithmetic for every supported
/// binary operator in one static table that both the converter and the
/// evaluator read.
pub mod operator;
