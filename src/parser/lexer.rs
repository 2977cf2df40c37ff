//! Tolerant token scanner for C-like snippets
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! extractors. Unlike a compiler lexer it never fails: characters it does not
//! understand become [`TokenKind::Punct`], unterminated literals degrade to a
//! lone quote, and an unterminated block comment swallows the rest of the
//! input. `#include` and other preprocessor directives are skipped.
//!
//! Every token keeps its byte span so extractors can slice the original text
//! (initializer expressions are reported verbatim, never re-printed from
//! tokens).

use super::ast::SourceLocation;

/// Token variants produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifiers and keywords alike; the extractors do not care which
    Ident(String),
    Number(String),
    /// String literal contents with escapes left undecoded
    StringLiteral(String),
    CharLiteral(String),

    Star,       // *
    Assign,     // =
    LParen,     // (
    RParen,     // )
    Semicolon,  // ;
    Comma,      // ,

    /// Any other operator or punctuation, multi-character ones included
    Punct(String),
}

/// A token with its byte span and line/column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub location: SourceLocation,
}

impl Token {
    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    pub fn is(&self, kind: &TokenKind) -> bool {
        &self.kind == kind
    }
}

/// Two-character operators that must not be split into `=`/`*` tokens
const COMPOUND_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "&&", "||", "++",
    "--", "->", "<<", ">>",
];

/// Scanner over a source snippet
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                break;
            }

            if self.peek() == Some('#') {
                self.skip_line();
                continue;
            }

            tokens.push(self.next_token());
        }

        tokens
    }

    fn next_token(&mut self) -> Token {
        let start = self.offset;
        let location = self.current_location();

        let kind = match self.peek() {
            Some('"') => self.quoted('"').map(TokenKind::StringLiteral),
            Some('\'') => self.quoted('\'').map(TokenKind::CharLiteral),
            _ => None,
        };

        let kind = match kind {
            Some(kind) => kind,
            None => self.unquoted(),
        };

        Token {
            kind,
            start,
            end: self.offset,
            location,
        }
    }

    /// Everything except string and char literals
    fn unquoted(&mut self) -> TokenKind {
        // tokenize() only calls in here with input remaining
        let Some(ch) = self.advance() else {
            return TokenKind::Punct(String::new());
        };

        match ch {
            'a'..='z' | 'A'..='Z' | '_' => {
                let mut ident = String::from(ch);
                self.take_while_into(&mut ident, |c| c.is_ascii_alphanumeric() || c == '_');
                TokenKind::Ident(ident)
            }
            '0'..='9' => {
                // Suffixes, hex digits and decimal points ride along
                let mut number = String::from(ch);
                self.take_while_into(&mut number, |c| c.is_ascii_alphanumeric() || c == '.');
                TokenKind::Number(number)
            }
            _ => {
                if let Some(next) = self.peek() {
                    let pair: String = [ch, next].iter().collect();
                    if COMPOUND_OPERATORS.contains(&pair.as_str()) {
                        self.advance();
                        return TokenKind::Punct(pair);
                    }
                }

                match ch {
                    '*' => TokenKind::Star,
                    '=' => TokenKind::Assign,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    ';' => TokenKind::Semicolon,
                    ',' => TokenKind::Comma,
                    other => TokenKind::Punct(other.to_string()),
                }
            }
        }
    }

    /// Scan a quoted literal on a single line. Returns `None` and consumes
    /// nothing when the closing quote is missing.
    fn quoted(&mut self, quote: char) -> Option<String> {
        let mut end = self.position + 1;
        while end < self.input.len() {
            match self.input[end] {
                '\\' => end += 2,
                '\n' => return None,
                c if c == quote => break,
                _ => end += 1,
            }
        }
        if end >= self.input.len() {
            return None;
        }

        self.advance(); // opening quote
        let mut contents = String::new();
        while self.position < end {
            if let Some(c) = self.advance() {
                contents.push(c);
            }
        }
        self.advance(); // closing quote
        Some(contents)
    }

    fn take_while_into(&mut self, buf: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            buf.push(c);
            self.advance();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => self.skip_line(),
                Some('/') if self.peek_ahead(1) == Some('*') => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(ch) = self.advance() {
            if ch == '\n' {
                break;
            }
        }
    }

    /// Unterminated comments run to the end of input
    fn skip_block_comment(&mut self) {
        self.advance(); // '/'
        self.advance(); // '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        self.offset += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Convenience wrapper used by the extractors
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
