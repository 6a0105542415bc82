use monkey::{
    ast::{Expression, InfixOperator, PrefixOperator, Program, Statement, modify},
    parse,
};

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "parser errors for {source:?}: {errors:?}");
    program
}

fn only_expression(program: &Program) -> &Expression {
    assert_eq!(program.statements.len(), 1, "program has not 1 statement");
    match &program.statements[0] {
        Statement::Expression { expr } => expr,
        other => panic!("statement is not an expression statement: {other:?}"),
    }
}

#[test]
fn operator_precedence_reserializes_fully_parenthesized() {
    let tests = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in tests {
        let program = parse_ok(source);
        assert_eq!(program.to_string(), expected, "wrong precedence for {source:?}");
    }
}

#[test]
fn let_statements_bind_name_and_value() {
    let tests = [("let x = 5;", "x", Expression::IntegerLiteral(5)),
                 ("let y = true;", "y", Expression::Boolean(true)),
                 ("let foobar = y;", "foobar", Expression::Identifier("y".to_string()))];

    for (source, expected_name, expected_value) in tests {
        let program = parse_ok(source);
        assert_eq!(program.statements.len(), 1);

        match &program.statements[0] {
            Statement::Let { name, value } => {
                assert_eq!(name, expected_name);
                assert_eq!(value, &expected_value);
            },
            other => panic!("statement is not a let statement: {other:?}"),
        }
    }
}

#[test]
fn return_statements_with_and_without_semicolon() {
    let tests = [("return 5;", Expression::IntegerLiteral(5)),
                 ("return 10", Expression::IntegerLiteral(10)),
                 ("return 993322;", Expression::IntegerLiteral(993_322))];

    for (source, expected_value) in tests {
        let program = parse_ok(source);
        assert_eq!(program.statements.len(), 1);

        match &program.statements[0] {
            Statement::Return { value } => assert_eq!(value, &expected_value),
            other => panic!("statement is not a return statement: {other:?}"),
        }
    }
}

#[test]
fn literal_expression_statements() {
    assert_eq!(only_expression(&parse_ok("foobar;")),
               &Expression::Identifier("foobar".to_string()));
    assert_eq!(only_expression(&parse_ok("5;")), &Expression::IntegerLiteral(5));
    assert_eq!(only_expression(&parse_ok(r#""hello world""#)),
               &Expression::StringLiteral("hello world".to_string()));
    assert_eq!(only_expression(&parse_ok("true;")), &Expression::Boolean(true));
    assert_eq!(only_expression(&parse_ok("false;")), &Expression::Boolean(false));
}

#[test]
fn prefix_expressions() {
    let tests = [("!5", PrefixOperator::Bang, Expression::IntegerLiteral(5)),
                 ("-15", PrefixOperator::Minus, Expression::IntegerLiteral(15)),
                 ("!true;", PrefixOperator::Bang, Expression::Boolean(true)),
                 ("!false;", PrefixOperator::Bang, Expression::Boolean(false))];

    for (source, expected_operator, expected_right) in tests {
        let program = parse_ok(source);

        match only_expression(&program) {
            Expression::Prefix { operator, right } => {
                assert_eq!(*operator, expected_operator);
                assert_eq!(right.as_ref(), &expected_right);
            },
            other => panic!("expression is not a prefix expression: {other:?}"),
        }
    }
}

#[test]
fn infix_expressions() {
    let tests = [("5 + 5;", InfixOperator::Plus),
                 ("5 - 5;", InfixOperator::Minus),
                 ("5 * 5;", InfixOperator::Asterisk),
                 ("5 / 5;", InfixOperator::Slash),
                 ("5 > 5;", InfixOperator::Gt),
                 ("5 < 5;", InfixOperator::Lt),
                 ("5 == 5;", InfixOperator::Eq),
                 ("5 != 5;", InfixOperator::NotEq)];

    for (source, expected_operator) in tests {
        let program = parse_ok(source);

        match only_expression(&program) {
            Expression::Infix { left,
                                operator,
                                right, } => {
                assert_eq!(left.as_ref(), &Expression::IntegerLiteral(5));
                assert_eq!(*operator, expected_operator);
                assert_eq!(right.as_ref(), &Expression::IntegerLiteral(5));
            },
            other => panic!("expression is not an infix expression: {other:?}"),
        }
    }
}

#[test]
fn if_expression_without_else() {
    let program = parse_ok("if (x < y) { x }");

    match only_expression(&program) {
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            assert_eq!(condition.to_string(), "(x < y)");
            assert_eq!(consequence.to_string(), "x");
            assert!(alternative.is_none());
        },
        other => panic!("expression is not an if expression: {other:?}"),
    }
}

#[test]
fn if_expression_with_else() {
    let program = parse_ok("if (x < y) { x } else { y }");

    match only_expression(&program) {
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            assert_eq!(condition.to_string(), "(x < y)");
            assert_eq!(consequence.to_string(), "x");
            assert_eq!(alternative.as_ref().map(ToString::to_string),
                       Some("y".to_string()));
        },
        other => panic!("expression is not an if expression: {other:?}"),
    }
}

#[test]
fn function_literals_and_parameters() {
    let program = parse_ok("fn(x, y) { x + y; }");

    match only_expression(&program) {
        Expression::FunctionLiteral { parameters, body } => {
            assert_eq!(parameters, &["x", "y"]);
            assert_eq!(body.to_string(), "(x + y)");
        },
        other => panic!("expression is not a function literal: {other:?}"),
    }

    let tests: [(&str, &[&str]); 3] = [("fn() {};", &[]),
                                       ("fn(x) {};", &["x"]),
                                       ("fn(x, y, z) {};", &["x", "y", "z"])];

    for (source, expected) in tests {
        let program = parse_ok(source);
        match only_expression(&program) {
            Expression::FunctionLiteral { parameters, .. } => assert_eq!(parameters, expected),
            other => panic!("expression is not a function literal: {other:?}"),
        }
    }
}

#[test]
fn call_expression_with_mixed_arguments() {
    let program = parse_ok("add(1, 2 * 3, 4 + 5);");

    match only_expression(&program) {
        Expression::Call { function, arguments } => {
            assert_eq!(function.to_string(), "add");
            assert_eq!(arguments.len(), 3);
            assert_eq!(arguments[0], Expression::IntegerLiteral(1));
            assert_eq!(arguments[1].to_string(), "(2 * 3)");
            assert_eq!(arguments[2].to_string(), "(4 + 5)");
        },
        other => panic!("expression is not a call expression: {other:?}"),
    }
}

#[test]
fn array_literals_and_index_expressions() {
    let program = parse_ok("[1, 2 * 2, 3 + 3]");

    match only_expression(&program) {
        Expression::ArrayLiteral { elements } => {
            assert_eq!(elements.len(), 3);
            assert_eq!(elements[0], Expression::IntegerLiteral(1));
            assert_eq!(elements[1].to_string(), "(2 * 2)");
            assert_eq!(elements[2].to_string(), "(3 + 3)");
        },
        other => panic!("expression is not an array literal: {other:?}"),
    }

    let program = parse_ok("myArray[1 + 1]");

    match only_expression(&program) {
        Expression::Index { left, index } => {
            assert_eq!(left.to_string(), "myArray");
            assert_eq!(index.to_string(), "(1 + 1)");
        },
        other => panic!("expression is not an index expression: {other:?}"),
    }
}

#[test]
fn hash_literals_preserve_pair_order() {
    let program = parse_ok(r#"{"one": 1, "two": 2, "three": 3}"#);

    match only_expression(&program) {
        Expression::HashLiteral { pairs } => {
            let rendered: Vec<(String, String)> =
                pairs.iter()
                     .map(|(key, value)| (key.to_string(), value.to_string()))
                     .collect();
            assert_eq!(rendered,
                       [("one".to_string(), "1".to_string()),
                        ("two".to_string(), "2".to_string()),
                        ("three".to_string(), "3".to_string())]);
        },
        other => panic!("expression is not a hash literal: {other:?}"),
    }

    let program = parse_ok("{}");
    match only_expression(&program) {
        Expression::HashLiteral { pairs } => assert!(pairs.is_empty()),
        other => panic!("expression is not a hash literal: {other:?}"),
    }

    let program = parse_ok("{true: 1, 2: false}");
    match only_expression(&program) {
        Expression::HashLiteral { pairs } => {
            assert_eq!(pairs[0].0, Expression::Boolean(true));
            assert_eq!(pairs[1].1, Expression::Boolean(false));
        },
        other => panic!("expression is not a hash literal: {other:?}"),
    }
}

#[test]
fn statements_reserialize_with_historic_spacing() {
    let program = parse_ok("let x = 5; return x;");

    assert_eq!(program.statements[0].to_string(), "let x = 5;");
    // Return statements keep their historic " ; " suffix.
    assert_eq!(program.statements[1].to_string(), "return x ; ");
    assert_eq!(program.to_string(), "let x = 5;return x ; ");
}

#[test]
fn missing_tokens_are_recorded_not_fatal() {
    let (_, errors) = parse("let x 5;");
    assert_eq!(errors, ["expected next token to be ASSIGN, got INT"]);

    let (_, errors) = parse("let = 5;");
    assert_eq!(errors[0], "expected next token to be IDENTIFIER, got ASSIGN");

    let (_, errors) = parse("!;");
    assert_eq!(errors, ["no prefix parse function for SEMICOLON"]);
}

#[test]
fn parsing_continues_after_an_error() {
    let (program, errors) = parse("let x 5; let y = 7;");

    assert_eq!(errors.len(), 1);
    // The broken statement is dropped; the `5` is picked back up as an
    // expression statement and the second binding parses normally.
    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.statements[0].to_string(), "5");
    assert_eq!(program.statements[1].to_string(), "let y = 7;");
}

#[test]
fn out_of_range_integer_literals_are_errors() {
    let (program, errors) = parse("92233720368547758080");

    assert_eq!(errors,
               [r#"could not parse "92233720368547758080" as integer"#]);
    assert!(program.statements.is_empty());
}

#[test]
fn modify_rewrites_every_child_slot() {
    let one = || Expression::IntegerLiteral(1);
    let two = || Expression::IntegerLiteral(2);

    let one_into_two = |expression: Expression| match expression {
        Expression::IntegerLiteral(1) => Expression::IntegerLiteral(2),
        other => other,
    };

    let tests = [(one(), two()),
                 (Expression::Infix { left:     Box::new(one()),
                                      operator: InfixOperator::Plus,
                                      right:    Box::new(two()), },
                  Expression::Infix { left:     Box::new(two()),
                                      operator: InfixOperator::Plus,
                                      right:    Box::new(two()), }),
                 (Expression::Prefix { operator: PrefixOperator::Minus,
                                       right:    Box::new(one()), },
                  Expression::Prefix { operator: PrefixOperator::Minus,
                                       right:    Box::new(two()), }),
                 (Expression::Index { left:  Box::new(one()),
                                      index: Box::new(one()), },
                  Expression::Index { left:  Box::new(two()),
                                      index: Box::new(two()), }),
                 (Expression::ArrayLiteral { elements: vec![one(), one()] },
                  Expression::ArrayLiteral { elements: vec![two(), two()] }),
                 (Expression::HashLiteral { pairs: vec![(one(), one())] },
                  Expression::HashLiteral { pairs: vec![(two(), two())] })];

    for (input, expected) in tests {
        let modified = modify::modify_expression(input, &one_into_two);
        assert_eq!(modified, expected);
    }
}

#[test]
fn modify_reaches_into_statements_and_branches() {
    let (program, errors) = parse("let a = 1; return 1; if (1) { 1 } else { 1 }; fn(x) { 1 }");
    assert!(errors.is_empty());

    let one_into_two = |expression: Expression| match expression {
        Expression::IntegerLiteral(1) => Expression::IntegerLiteral(2),
        other => other,
    };

    let modified = modify::modify_program(program, &one_into_two);
    assert_eq!(modified.to_string(),
               "let a = 2;return 2 ; if2 2else 2fn(x) 2");
}
