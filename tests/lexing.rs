use monkey::interpreter::lexer::{Lexer, TokenKind};

fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let mut lexer = Lexer::new(source);

    for (index, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "token {index} of {source:?}: wrong kind");
        assert_eq!(token.literal, *literal, "token {index} of {source:?}: wrong literal");
    }

    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn scans_a_representative_program() {
    let source = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
[1, 2];
{"foo": "bar"}
"#;

    assert_tokens(source,
                  &[(TokenKind::Let, "let"),
                    (TokenKind::Identifier, "five"),
                    (TokenKind::Assign, "="),
                    (TokenKind::Int, "5"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Let, "let"),
                    (TokenKind::Identifier, "ten"),
                    (TokenKind::Assign, "="),
                    (TokenKind::Int, "10"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Let, "let"),
                    (TokenKind::Identifier, "add"),
                    (TokenKind::Assign, "="),
                    (TokenKind::Function, "fn"),
                    (TokenKind::LParen, "("),
                    (TokenKind::Identifier, "x"),
                    (TokenKind::Comma, ","),
                    (TokenKind::Identifier, "y"),
                    (TokenKind::RParen, ")"),
                    (TokenKind::LBrace, "{"),
                    (TokenKind::Identifier, "x"),
                    (TokenKind::Plus, "+"),
                    (TokenKind::Identifier, "y"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::RBrace, "}"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Let, "let"),
                    (TokenKind::Identifier, "result"),
                    (TokenKind::Assign, "="),
                    (TokenKind::Identifier, "add"),
                    (TokenKind::LParen, "("),
                    (TokenKind::Identifier, "five"),
                    (TokenKind::Comma, ","),
                    (TokenKind::Identifier, "ten"),
                    (TokenKind::RParen, ")"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Bang, "!"),
                    (TokenKind::Minus, "-"),
                    (TokenKind::Slash, "/"),
                    (TokenKind::Asterisk, "*"),
                    (TokenKind::Int, "5"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Int, "5"),
                    (TokenKind::Lt, "<"),
                    (TokenKind::Int, "10"),
                    (TokenKind::Gt, ">"),
                    (TokenKind::Int, "5"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::If, "if"),
                    (TokenKind::LParen, "("),
                    (TokenKind::Int, "5"),
                    (TokenKind::Lt, "<"),
                    (TokenKind::Int, "10"),
                    (TokenKind::RParen, ")"),
                    (TokenKind::LBrace, "{"),
                    (TokenKind::Return, "return"),
                    (TokenKind::True, "true"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::RBrace, "}"),
                    (TokenKind::Else, "else"),
                    (TokenKind::LBrace, "{"),
                    (TokenKind::Return, "return"),
                    (TokenKind::False, "false"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::RBrace, "}"),
                    (TokenKind::Int, "10"),
                    (TokenKind::Eq, "=="),
                    (TokenKind::Int, "10"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Int, "10"),
                    (TokenKind::NotEq, "!="),
                    (TokenKind::Int, "9"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::Str, "foobar"),
                    (TokenKind::Str, "foo bar"),
                    (TokenKind::LBracket, "["),
                    (TokenKind::Int, "1"),
                    (TokenKind::Comma, ","),
                    (TokenKind::Int, "2"),
                    (TokenKind::RBracket, "]"),
                    (TokenKind::Semicolon, ";"),
                    (TokenKind::LBrace, "{"),
                    (TokenKind::Str, "foo"),
                    (TokenKind::Colon, ":"),
                    (TokenKind::Str, "bar"),
                    (TokenKind::RBrace, "}")]);
}

#[test]
fn distinguishes_keywords_from_identifiers() {
    assert_tokens("fn let true false if else return letter iffy fnord",
                  &[(TokenKind::Function, "fn"),
                    (TokenKind::Let, "let"),
                    (TokenKind::True, "true"),
                    (TokenKind::False, "false"),
                    (TokenKind::If, "if"),
                    (TokenKind::Else, "else"),
                    (TokenKind::Return, "return"),
                    (TokenKind::Identifier, "letter"),
                    (TokenKind::Identifier, "iffy"),
                    (TokenKind::Identifier, "fnord")]);
}

#[test]
fn one_byte_lookahead_resolves_two_char_operators() {
    assert_tokens("= == != ! =",
                  &[(TokenKind::Assign, "="),
                    (TokenKind::Eq, "=="),
                    (TokenKind::NotEq, "!="),
                    (TokenKind::Bang, "!"),
                    (TokenKind::Assign, "=")]);
}

#[test]
fn unknown_bytes_become_illegal_tokens() {
    assert_tokens("1 @ 2 #",
                  &[(TokenKind::Int, "1"),
                    (TokenKind::Illegal, "@"),
                    (TokenKind::Int, "2"),
                    (TokenKind::Illegal, "#")]);
}

#[test]
fn strings_run_to_the_closing_quote_or_eof() {
    // No escape sequences: the backslash is two plain characters.
    assert_tokens(r#""with \ backslash""#,
                  &[(TokenKind::Str, r"with \ backslash")]);

    // An unterminated string swallows the rest of the input.
    assert_tokens(r#""never closed"#, &[(TokenKind::Str, "never closed")]);

    assert_tokens(r#""""#, &[(TokenKind::Str, "")]);
}

#[test]
fn eof_repeats_forever() {
    let mut lexer = Lexer::new("");

    for _ in 0..4 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.literal, "");
    }
}
