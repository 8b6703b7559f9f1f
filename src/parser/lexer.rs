//! Scanner (tokenizer) for the shared token set
//!
//! Converts a [`CharStream`] into [`Token`]s by maximal munch: identifiers,
//! keywords, integer literals and the two-character operators are all
//! recognised by reading one character past their end and pushing the
//! terminator back. Scanning never fails; a byte outside the alphabet comes
//! back as [`Token::Unknown`] and is left for the parser to reject.

use super::stream::{CharStream, SourceLocation};
use std::fmt;

/// All token variants produced by the scanner.
///
/// Every variant carries a [`SourceLocation`] so that errors can report an
/// accurate line and column without a separate token→location table.
/// Lexemes are copied into the token at construction time, so a token stays
/// valid however far the scanner has moved on.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    IntLiteral(String, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords
    Type(SourceLocation),
    Main(SourceLocation),
    If(SourceLocation),
    Else(SourceLocation),
    While(SourceLocation),

    // Punctuation
    LParen(SourceLocation),
    RParen(SourceLocation),
    LBrace(SourceLocation),
    RBrace(SourceLocation),
    Semicolon(SourceLocation),

    // Operators
    Assign(SourceLocation),
    Equal(SourceLocation),
    Ge(SourceLocation),
    Le(SourceLocation),
    Gt(SourceLocation),
    Lt(SourceLocation),
    Plus(SourceLocation),
    Minus(SourceLocation),

    // A byte outside the alphabet
    Unknown(char, SourceLocation),

    // End of input
    End(SourceLocation),
}

impl Token {
    /// Returns the source location where this token begins.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::IntLiteral(_, loc) => *loc,
            Token::Ident(_, loc) => *loc,
            Token::Unknown(_, loc) => *loc,
            Token::Type(loc)
            | Token::Main(loc)
            | Token::If(loc)
            | Token::Else(loc)
            | Token::While(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::LBrace(loc)
            | Token::RBrace(loc)
            | Token::Semicolon(loc)
            | Token::Assign(loc)
            | Token::Equal(loc)
            | Token::Ge(loc)
            | Token::Le(loc)
            | Token::Gt(loc)
            | Token::Lt(loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::End(loc) => *loc,
        }
    }

    /// Payload-free classification tag for this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::IntLiteral(..) => TokenKind::IntLiteral,
            Token::Ident(..) => TokenKind::Ident,
            Token::Type(_) => TokenKind::Type,
            Token::Main(_) => TokenKind::Main,
            Token::If(_) => TokenKind::If,
            Token::Else(_) => TokenKind::Else,
            Token::While(_) => TokenKind::While,
            Token::LParen(_) => TokenKind::LParen,
            Token::RParen(_) => TokenKind::RParen,
            Token::LBrace(_) => TokenKind::LBrace,
            Token::RBrace(_) => TokenKind::RBrace,
            Token::Semicolon(_) => TokenKind::Semicolon,
            Token::Assign(_) => TokenKind::Assign,
            Token::Equal(_) => TokenKind::Equal,
            Token::Ge(_) => TokenKind::Ge,
            Token::Le(_) => TokenKind::Le,
            Token::Gt(_) => TokenKind::Gt,
            Token::Lt(_) => TokenKind::Lt,
            Token::Plus(_) => TokenKind::Plus,
            Token::Minus(_) => TokenKind::Minus,
            Token::Unknown(..) => TokenKind::Unknown,
            Token::End(_) => TokenKind::End,
        }
    }

    /// The surface text this token was scanned from. Empty for [`Token::End`].
    pub fn lexeme(&self) -> String {
        match self {
            Token::IntLiteral(text, _) => text.clone(),
            Token::Ident(name, _) => name.clone(),
            Token::Type(_) => "int".to_string(),
            Token::Main(_) => "main".to_string(),
            Token::If(_) => "if".to_string(),
            Token::Else(_) => "else".to_string(),
            Token::While(_) => "while".to_string(),
            Token::LParen(_) => "(".to_string(),
            Token::RParen(_) => ")".to_string(),
            Token::LBrace(_) => "{".to_string(),
            Token::RBrace(_) => "}".to_string(),
            Token::Semicolon(_) => ";".to_string(),
            Token::Assign(_) => "=".to_string(),
            Token::Equal(_) => "==".to_string(),
            Token::Ge(_) => ">=".to_string(),
            Token::Le(_) => "<=".to_string(),
            Token::Gt(_) => ">".to_string(),
            Token::Lt(_) => "<".to_string(),
            Token::Plus(_) => "+".to_string(),
            Token::Minus(_) => "-".to_string(),
            Token::Unknown(c, _) => c.to_string(),
            Token::End(_) => String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(text, _) => write!(f, "integer literal {}", text),
            Token::Ident(name, _) => write!(f, "identifier '{}'", name),
            Token::Type(_) => write!(f, "'int'"),
            Token::Main(_) => write!(f, "'main'"),
            Token::If(_) => write!(f, "'if'"),
            Token::Else(_) => write!(f, "'else'"),
            Token::While(_) => write!(f, "'while'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::LBrace(_) => write!(f, "'{{'"),
            Token::RBrace(_) => write!(f, "'}}'"),
            Token::Semicolon(_) => write!(f, "';'"),
            Token::Assign(_) => write!(f, "'='"),
            Token::Equal(_) => write!(f, "'=='"),
            Token::Ge(_) => write!(f, "'>='"),
            Token::Le(_) => write!(f, "'<='"),
            Token::Gt(_) => write!(f, "'>'"),
            Token::Lt(_) => write!(f, "'<'"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Unknown(c, _) => write!(f, "unknown character '{}'", c),
            Token::End(_) => write!(f, "end of input"),
        }
    }
}

/// Token classification tags.
///
/// The display names drive the classifier report (`lexeme: KIND`) and the
/// `expected` sets in parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Type,
    Main,
    If,
    Else,
    While,
    Ident,
    IntLiteral,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Assign,
    Equal,
    Ge,
    Le,
    Gt,
    Lt,
    Plus,
    Minus,
    Unknown,
    End,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Type => "TYPE",
            TokenKind::Main => "MAIN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::IntLiteral => "INTEGER_LITERAL",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Equal => "EQUAL",
            TokenKind::Ge => "GE",
            TokenKind::Le => "LE",
            TokenKind::Gt => "GT",
            TokenKind::Lt => "LT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::End => "END",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pull-based scanner over a [`CharStream`].
#[derive(Debug)]
pub struct Lexer {
    stream: CharStream,
}

impl Lexer {
    pub fn new(stream: CharStream) -> Self {
        Lexer { stream }
    }

    /// Scans and returns the next token. Returns [`Token::End`] at (and
    /// after) the end of the input.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let loc = self.stream.location();
        let c = match self.stream.next_char() {
            Some(c) => c,
            None => return Token::End(loc),
        };

        if c.is_ascii_alphabetic() {
            return self.identifier_or_keyword(c, loc);
        }
        if c.is_ascii_digit() {
            return self.integer_literal(c, loc);
        }

        match c {
            '(' => Token::LParen(loc),
            ')' => Token::RParen(loc),
            '{' => Token::LBrace(loc),
            '}' => Token::RBrace(loc),
            ';' => Token::Semicolon(loc),
            '+' => Token::Plus(loc),
            '-' => Token::Minus(loc),
            '=' => match self.stream.next_char() {
                Some('=') => Token::Equal(loc),
                Some(_) => {
                    self.stream.push_back();
                    Token::Assign(loc)
                }
                None => Token::Assign(loc),
            },
            '>' => match self.stream.next_char() {
                Some('=') => Token::Ge(loc),
                Some(_) => {
                    self.stream.push_back();
                    Token::Gt(loc)
                }
                None => Token::Gt(loc),
            },
            '<' => match self.stream.next_char() {
                Some('=') => Token::Le(loc),
                Some(_) => {
                    self.stream.push_back();
                    Token::Lt(loc)
                }
                None => Token::Lt(loc),
            },
            other => Token::Unknown(other, loc),
        }
    }

    /// Scans the whole input eagerly. The final element is always
    /// [`Token::End`].
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = matches!(token, Token::End(_));
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.stream.next_char() {
            match c {
                ' ' | '\t' | '\r' | '\n' => continue,
                _ => {
                    self.stream.push_back();
                    return;
                }
            }
        }
    }

    fn identifier_or_keyword(&mut self, first: char, loc: SourceLocation) -> Token {
        let mut lexeme = String::from(first);
        while let Some(c) = self.stream.next_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                lexeme.push(c);
            } else {
                self.stream.push_back();
                break;
            }
        }
        match lexeme.as_str() {
            "int" => Token::Type(loc),
            "main" => Token::Main(loc),
            "if" => Token::If(loc),
            "else" => Token::Else(loc),
            "while" => Token::While(loc),
            _ => Token::Ident(lexeme, loc),
        }
    }

    fn integer_literal(&mut self, first: char, loc: SourceLocation) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.stream.next_char() {
            if c.is_ascii_digit() {
                text.push(c);
            } else {
                self.stream.push_back();
                break;
            }
        }
        Token::IntLiteral(text, loc)
    }
}

/// Renders the classifier report: one `lexeme: KIND` line per token in input
/// order, with the end-of-input token omitted.
pub fn classification_lines(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !matches!(t, Token::End(_)))
        .map(|t| format!("{}: {}", t.lexeme(), t.kind()))
        .collect()
}
