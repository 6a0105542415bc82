use logos::Logos;

/// Raw scanner output produced by the generated lexer.
///
/// `RawToken` only covers input the scanner can match directly; the public
/// [`TokenKind`] adds `Eof` and `Illegal`, which are produced by [`Lexer`]
/// when the underlying scanner is exhausted or rejects a byte.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding or function names such as `x` or `square`.
    /// Keywords win over this rule for equal-length matches.
    #[regex(r"[A-Za-z_][A-Za-z_0-9]*")]
    Identifier,
    /// Integer literal tokens, such as `42`. The matched text is preserved
    /// as-is; conversion to a number happens in the parser.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens. The scanner consumes everything up to the
    /// closing `"` or the end of input; no escape sequences are interpreted.
    #[regex(r#""[^"]*"?"#)]
    Str,
    /// Any byte no other rule matches, one at a time.
    #[regex(r".", priority = 0)]
    Unknown,
}

/// The kind of a lexical token.
///
/// This is the closed set of token categories the parser dispatches on.
/// The `Display` rendering of each kind is the name used in parser error
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A byte the scanner does not recognize.
    Illegal,
    /// End of input. Returned repeatedly once the source is exhausted.
    Eof,
    /// An identifier such as `x` or `square`.
    Identifier,
    /// An integer literal such as `42`.
    Int,
    /// A string literal such as `"hello"`.
    Str,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Identifier => "IDENTIFIER",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Bang => "BANG",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Eq => "EQ",
            Self::NotEq => "NOT_EQ",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: a [`TokenKind`] plus the matched source text.
///
/// For `Str` tokens the literal is the string contents without the
/// surrounding quotes. `Eof` tokens carry an empty literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The category of the token.
    pub kind:    TokenKind,
    /// The text the token was scanned from.
    pub literal: String,
}

impl Token {
    /// Creates the token returned at (and beyond) the end of input.
    #[must_use]
    pub const fn eof() -> Self {
        Self { kind:    TokenKind::Eof,
               literal: String::new(), }
    }
}

/// Converts a raw scanner match into a public [`Token`].
///
/// String literals are stripped of their delimiting quotes here; every other
/// token keeps the matched slice as its literal.
fn convert(raw: RawToken, slice: &str) -> Token {
    let kind = match raw {
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Function => TokenKind::Function,
        RawToken::Let => TokenKind::Let,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::Identifier => TokenKind::Identifier,
        RawToken::Int => TokenKind::Int,
        RawToken::Str => {
            let contents = slice.strip_prefix('"').unwrap_or(slice);
            let contents = contents.strip_suffix('"').unwrap_or(contents);
            return Token { kind:    TokenKind::Str,
                           literal: contents.to_string(), };
        },
        RawToken::Unknown => TokenKind::Illegal,
    };

    Token { kind,
            literal: slice.to_string() }
}

/// Produces [`Token`]s from a source string on demand.
///
/// The lexer skips whitespace between tokens, turns unrecognized bytes into
/// `Illegal` tokens instead of stopping, and keeps returning `Eof` once the
/// input is exhausted.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "five");
/// ```
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, RawToken>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner: RawToken::lexer(source) }
    }

    /// Scans and returns the next token.
    ///
    /// # Returns
    /// The next [`Token`] in the input. Unrecognized bytes come back one at
    /// a time as `Illegal` tokens; once the input is exhausted, every call
    /// returns `Eof`.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(raw)) => convert(raw, self.inner.slice()),
            Some(Err(())) => Token { kind:    TokenKind::Illegal,
                                     literal: self.inner.slice().to_string(), },
            None => Token::eof(),
        }
    }
}
