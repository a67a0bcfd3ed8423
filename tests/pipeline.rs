use shunt::{
    ErrorKind, Options,
    interpreter::{
        converter::to_postfix,
        evaluator::eval_postfix,
        lexer::{Token, tokenize},
        operator::{Associativity, OPERATORS, Operator},
    },
};

fn postfix_of(src: &str) -> Vec<Token> {
    let tokens = tokenize(src, &Options::default()).unwrap();
    to_postfix(&tokens).unwrap().into_iter().map(|(t, _)| t).collect()
}

fn num(v: f64) -> Token {
    Token::Number(v)
}

fn op(symbol: char) -> Token {
    Token::Operator(symbol)
}

#[test]
fn operator_table_matches_arithmetic_conventions() {
    let expected = [('+', 2, Associativity::Left),
                    ('-', 2, Associativity::Left),
                    ('*', 3, Associativity::Left),
                    ('/', 3, Associativity::Left),
                    ('^', 4, Associativity::Right)];

    assert_eq!(OPERATORS.len(), expected.len());
    for (symbol, precedence, associativity) in expected {
        let entry = Operator::lookup(symbol).unwrap();
        assert_eq!(entry.precedence, precedence, "{symbol}");
        assert_eq!(entry.associativity, associativity, "{symbol}");
    }
}

#[test]
fn tokenizer_splits_numbers_on_every_boundary() {
    let tokens = tokenize("(12+3) 45", &Options::default()).unwrap();
    assert_eq!(tokens,
               vec![(Token::LeftParen, 0),
                    (num(12.0), 1),
                    (op('+'), 3),
                    (num(3.0), 4),
                    (Token::RightParen, 5),
                    (num(45.0), 7)]);
}

#[test]
fn tokenizer_of_blank_input_is_empty() {
    assert!(tokenize(" \t ", &Options::default()).unwrap().is_empty());
}

#[test]
fn left_associative_operators_pop_at_equal_precedence() {
    assert_eq!(postfix_of("8-4-2"),
               vec![num(8.0), num(4.0), op('-'), num(2.0), op('-')]);
    assert_eq!(postfix_of("8/4*2"),
               vec![num(8.0), num(4.0), op('/'), num(2.0), op('*')]);
}

#[test]
fn power_is_right_associative() {
    assert_eq!(postfix_of("2^3^2"),
               vec![num(2.0), num(3.0), num(2.0), op('^'), op('^')]);
}

#[test]
fn parentheses_never_reach_the_output() {
    let postfix = postfix_of("((1+2)*(3-(4)))");
    assert!(postfix.iter()
                   .all(|t| !matches!(t, Token::LeftParen | Token::RightParen)));
    assert_eq!(postfix,
               vec![num(1.0), num(2.0), op('+'), num(3.0), num(4.0), op('-'), op('*')]);
}

#[test]
fn converter_rejects_unknown_operators() {
    let infix = vec![(num(1.0), 0), (op('%'), 1), (num(2.0), 2)];
    let err = to_postfix(&infix).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownOperator);
    assert_eq!(err.position(), 1);
}

#[test]
fn evaluator_rejects_unknown_operators() {
    let postfix = vec![(num(1.0), 0), (num(2.0), 2), (op('%'), 1)];
    assert_eq!(eval_postfix(&postfix).unwrap_err().kind(),
               ErrorKind::UnknownOperator);
}

#[test]
fn evaluator_pops_right_operand_first() {
    let postfix = vec![(num(2.0), 0), (num(10.0), 2), (op('/'), 1)];
    assert_eq!(eval_postfix(&postfix).unwrap(), 0.2);

    let postfix = vec![(num(2.0), 0), (num(3.0), 2), (op('^'), 1)];
    assert_eq!(eval_postfix(&postfix).unwrap(), 8.0);
}

#[test]
fn evaluator_checks_the_divisor_only() {
    let zero_dividend = vec![(num(0.0), 0), (num(4.0), 2), (op('/'), 1)];
    assert_eq!(eval_postfix(&zero_dividend).unwrap(), 0.0);

    let zero_divisor = vec![(num(4.0), 0), (num(0.0), 2), (op('/'), 1)];
    assert_eq!(eval_postfix(&zero_divisor).unwrap_err().kind(),
               ErrorKind::DivisionByZero);
}

#[test]
fn evaluator_needs_exactly_one_value() {
    assert_eq!(eval_postfix(&[]).unwrap_err().kind(), ErrorKind::MissingOperand);

    let surplus = vec![(num(1.0), 0), (num(2.0), 2)];
    assert_eq!(eval_postfix(&surplus).unwrap_err().kind(),
               ErrorKind::MissingOperator);
}

#[test]
fn evaluator_rejects_stray_parentheses() {
    let postfix = vec![(num(1.0), 0), (Token::LeftParen, 1)];
    assert_eq!(eval_postfix(&postfix).unwrap_err().kind(),
               ErrorKind::MismatchedParenthesis);
}

#[test]
fn tokenizer_treats_unicode_whitespace_as_a_boundary() {
    let tokens = tokenize("7\u{a0}8\u{0b}9", &Options::default()).unwrap();
    assert_eq!(tokens, vec![(num(7.0), 0), (num(8.0), 3), (num(9.0), 5)]);
}
