use ember::{
    ast::{BinaryOperator, Expr, Program, Statement},
    error::LexError,
    interpreter::{
        environment::Environment,
        evaluator::core::{evaluate, evaluate_expr},
        lexer::{Token, TokenKind, tokenize},
        parser::core::{TokenCursor, parse_program},
        value::RuntimeValue,
    },
    produce_ast,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

fn num(value: f64) -> Expr {
    Expr::NumericLiteral { value, line: 1 }
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::binary(left, op, right, 1)
}

fn single_expression(source: &str) -> Expr {
    let program = produce_ast(source).unwrap();
    assert_eq!(program.body.len(), 1, "expected one statement in {source:?}");
    match program.body.into_iter().next() {
        Some(Statement::Expression { expr, .. }) => expr,
        other => panic!("expected an expression statement, got {other:?}"),
    }
}

#[test]
fn digit_runs_are_single_number_tokens() {
    for source in ["0", "7", "42", "000123", "98765432109876543210"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens,
                   vec![Token::new(TokenKind::Number, source, 1), Token::end_of_input(1)]);
    }
}

#[test]
fn whitespace_only_yields_end_of_input() {
    for source in ["", " ", "\t\t", "\n\n", " \t\n  \n"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 1, "{source:?}");
        assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
    }
}

#[test]
fn single_character_tokens() {
    let tokens = tokenize("( ) = + - * / %").unwrap();
    let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();

    assert_eq!(pairs,
               [(TokenKind::OpenParen, "("),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Equals, "="),
                (TokenKind::BinaryOperator, "+"),
                (TokenKind::BinaryOperator, "-"),
                (TokenKind::BinaryOperator, "*"),
                (TokenKind::BinaryOperator, "/"),
                (TokenKind::BinaryOperator, "%"),
                (TokenKind::EndOfInput, "")]);
}

#[test]
fn keywords_only_match_whole_letter_runs() {
    assert_eq!(kinds("let null"),
               [TokenKind::LetKeyword, TokenKind::NullKeyword, TokenKind::EndOfInput]);
    assert_eq!(kinds("letter nullable Let"),
               [TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfInput]);
}

#[test]
fn letters_and_digits_split_at_the_boundary() {
    let tokens = tokenize("let3").unwrap();
    assert_eq!(tokens,
               vec![Token::new(TokenKind::LetKeyword, "let", 1),
                    Token::new(TokenKind::Number, "3", 1),
                    Token::end_of_input(1)]);

    let tokens = tokenize("abc12de").unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, ["abc", "12", "de", ""]);
    assert_eq!(kinds("abc12de"),
               [TokenKind::Identifier,
                TokenKind::Number,
                TokenKind::Identifier,
                TokenKind::EndOfInput]);
}

#[test]
fn unicode_letters_form_identifiers() {
    let tokens = tokenize("café Ωmega straße").unwrap();
    let pairs: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();

    assert_eq!(pairs,
               [(TokenKind::Identifier, "café"),
                (TokenKind::Identifier, "Ωmega"),
                (TokenKind::Identifier, "straße"),
                (TokenKind::EndOfInput, "")]);
}

#[test]
fn whitespace_other_than_space_tab_newline_is_rejected() {
    for (source, bad) in [("1\r\n2", '\r'), ("1\u{0c}2", '\u{0c}'), ("a\u{a0}b", '\u{a0}')] {
        assert_eq!(tokenize(source),
                   Err(LexError::UnrecognizedCharacter { character: bad,
                                                         line:      1, }),
                   "{source:?}");
    }
}

#[test]
fn tokens_record_their_line() {
    let lines: Vec<_> = tokenize("a\n\nb +\nc").unwrap().iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 3, 3, 4, 4]);
}

#[test]
fn newlines_only_advance_the_line() {
    let tokens = tokenize("x\n\n  \n").unwrap();
    assert_eq!(tokens,
               vec![Token::new(TokenKind::Identifier, "x", 1), Token::end_of_input(4)]);
}

#[test]
fn retokenizing_token_text_is_stable() {
    for source in ["let total = (a + 12) * b % 3", "null", "x-y/2", "((1))"] {
        let tokens = tokenize(source).unwrap();
        let joined = tokens.iter()
                           .filter(|t| t.kind != TokenKind::EndOfInput)
                           .map(|t| t.text.as_str())
                           .collect::<Vec<_>>()
                           .join(" ");
        let again = tokenize(&joined).unwrap();
        let shape = |ts: &[Token]| ts.iter().map(|t| (t.kind, t.text.clone())).collect::<Vec<_>>();

        assert_eq!(shape(&tokens), shape(&again), "{source:?}");
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(single_expression("1+2*3"),
               bin(num(1.0), BinaryOperator::Add, bin(num(2.0), BinaryOperator::Mul, num(3.0))));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(single_expression("(1+2)*3"),
               bin(bin(num(1.0), BinaryOperator::Add, num(2.0)), BinaryOperator::Mul, num(3.0)));
}

#[test]
fn binary_tiers_are_left_associative() {
    assert_eq!(single_expression("1-2-3"),
               bin(bin(num(1.0), BinaryOperator::Sub, num(2.0)), BinaryOperator::Sub, num(3.0)));
    assert_eq!(single_expression("8/4%3"),
               bin(bin(num(8.0), BinaryOperator::Div, num(4.0)), BinaryOperator::Mod, num(3.0)));
}

#[test]
fn parentheses_leave_no_node() {
    assert_eq!(single_expression("((x))"),
               Expr::Identifier { name: "x".to_string(),
                                  line: 1, });
}

#[test]
fn binary_nodes_carry_the_operator_line() {
    let expr = single_expression("1\n+\n2");
    assert_eq!(expr.line(), 2);
    assert_eq!(num(1.0).line(), 1);
}

#[test]
fn primaries_parse_to_their_nodes() {
    assert_eq!(single_expression("null"), Expr::NullLiteral { line: 1 });
    assert_eq!(single_expression("007"), num(7.0));
}

#[test]
fn declarations_parse_to_their_own_statement() {
    let program = produce_ast("let x = 1 + 2").unwrap();
    assert_eq!(program,
               Program { body: vec![Statement::VariableDeclaration { name:  "x".to_string(),
                                                                     value: bin(num(1.0),
                                                                                BinaryOperator::Add,
                                                                                num(2.0)),
                                                                     line:  1, }], });
}

#[test]
fn statements_are_kept_in_source_order() {
    let program = produce_ast("1\nlet y = 2\ny").unwrap();
    let lines: Vec<_> = program.body
                               .iter()
                               .map(|s| match s {
                                   Statement::Expression { line, .. }
                                   | Statement::VariableDeclaration { line, .. } => *line,
                               })
                               .collect();
    assert_eq!(lines, [1, 2, 3]);
}

#[test]
fn cursor_never_moves_past_end_of_input() {
    let tokens = tokenize("1").unwrap();
    let mut cursor = TokenCursor::new(&tokens);

    assert_eq!(cursor.advance().kind, TokenKind::Number);
    assert_eq!(cursor.advance().kind, TokenKind::EndOfInput);
    assert_eq!(cursor.advance().kind, TokenKind::EndOfInput);
    assert_eq!(cursor.position(), 1);
    assert!(cursor.at_end());
}

#[test]
fn parser_tolerates_buffer_without_end_token() {
    let tokens = vec![Token::new(TokenKind::Number, "4", 1)];
    let program = parse_program(&tokens).unwrap();
    assert_eq!(program.body.len(), 1);

    assert_eq!(parse_program(&[]).unwrap(), Program::default());
}

#[test]
fn literals_evaluate_directly() {
    let env = Environment::new();
    assert_eq!(evaluate_expr(&num(5.0), &env), Ok(RuntimeValue::Number(5.0)));
    assert_eq!(evaluate_expr(&Expr::NullLiteral { line: 1 }, &env), Ok(RuntimeValue::Null));
}

#[test]
fn declarations_bind_in_innermost_scope() {
    let mut env = Environment::new();
    let declare = |name: &str, value: f64| Statement::VariableDeclaration { name:  name.to_string(),
                                                                            value: num(value),
                                                                            line:  1, };

    evaluate(&declare("x", 1.0), &mut env).unwrap();
    env.push_scope();
    assert_eq!(env.depth(), 2);

    // shadowing an outer binding is allowed
    evaluate(&declare("x", 2.0), &mut env).unwrap();
    assert_eq!(env.lookup("x"), Some(RuntimeValue::Number(2.0)));
    assert!(evaluate(&declare("x", 3.0), &mut env).is_err());

    assert!(env.pop_scope());
    assert_eq!(env.lookup("x"), Some(RuntimeValue::Number(1.0)));
    assert!(!env.pop_scope());
    assert_eq!(env.depth(), 1);
}

#[test]
fn environment_counts_visible_names() {
    let mut env = Environment::new();
    assert!(env.is_empty());

    env.declare("a", RuntimeValue::Null);
    env.push_scope();
    env.declare("a", RuntimeValue::Number(1.0));
    env.declare("b", RuntimeValue::Number(2.0));

    assert_eq!(env.len(), 2);
    assert!(env.contains_local("b"));
    assert!(!env.is_empty());
}
