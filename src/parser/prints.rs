//! `printf` extraction
//!
//! Only the format string of each call is kept; arguments are skipped over
//! (balanced parentheses) but never parsed. Substitution of variable values
//! happens later in [`crate::terminal`].

use super::ast::PrintStatement;
use super::lexer::{tokenize, Token, TokenKind};

/// Name of the formatted-print function recognised in snippets
pub const PRINT_FUNCTION: &str = "printf";

/// Extract the format text of every `printf` call, in order of appearance.
pub fn extract_prints(source: &str) -> Vec<PrintStatement> {
    let tokens = tokenize(source);
    let mut prints = Vec::new();
    let mut pos = 0;

    while pos < tokens.len() {
        match match_print(&tokens, pos) {
            Some((print, next)) => {
                prints.push(print);
                pos = next;
            }
            None => pos += 1,
        }
    }

    tracing::debug!(count = prints.len(), "extracted print statements");
    prints
}

fn match_print(tokens: &[Token], start: usize) -> Option<(PrintStatement, usize)> {
    let callee = tokens.get(start)?;
    if callee.ident()? != PRINT_FUNCTION || !tokens.get(start + 1)?.is(&TokenKind::LParen) {
        return None;
    }

    let TokenKind::StringLiteral(raw) = &tokens.get(start + 2)?.kind else {
        return None;
    };
    if raw.is_empty() {
        return None;
    }

    let next = match tokens.get(start + 3)?.kind {
        TokenKind::RParen => start + 4,
        TokenKind::Comma => closing_paren(tokens, start + 4)? + 1,
        _ => return None,
    };

    let print = PrintStatement {
        format_text: decode_escapes(raw),
        location: callee.location,
    };
    Some((print, next))
}

/// Index of the `)` closing an argument list whose `(` is already consumed
fn closing_paren(tokens: &[Token], from: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, token) in tokens.get(from..)?.iter().enumerate() {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen if depth == 0 => return Some(from + offset),
            TokenKind::RParen => depth -= 1,
            // A statement boundary before the `)` means the call is malformed
            TokenKind::Semicolon => return None,
            _ => {}
        }
    }
    None
}

/// Decode the `\n` and `\t` escapes; every other escape is left as written.
pub fn decode_escapes(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                chars.next();
                decoded.push('\n');
            }
            Some('t') => {
                chars.next();
                decoded.push('\t');
            }
            Some(&other) => {
                chars.next();
                decoded.push('\\');
                decoded.push(other);
            }
            None => decoded.push('\\'),
        }
    }

    decoded
}
