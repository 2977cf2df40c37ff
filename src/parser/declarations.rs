//! Declaration extraction
//!
//! Scans for `<type> <*?><name> = <expr>;` statements in source order.
//! Anything that does not fit the shape is skipped without complaint, so a
//! half-edited snippet still yields whatever declarations are intact.

use super::ast::Declaration;
use super::lexer::{tokenize, Token, TokenKind};

/// Extract every initialized declaration, in order of appearance.
///
/// Matches never overlap: once a declaration is taken, scanning resumes
/// after its terminating `;`. Names are not deduplicated.
pub fn extract_declarations(source: &str) -> Vec<Declaration> {
    let tokens = tokenize(source);
    let mut declarations = Vec::new();
    let mut pos = 0;

    while pos < tokens.len() {
        match match_declaration(source, &tokens, pos) {
            Some((declaration, next)) => {
                declarations.push(declaration);
                pos = next;
            }
            None => pos += 1,
        }
    }

    tracing::debug!(count = declarations.len(), "extracted declarations");
    declarations
}

/// Try to match a declaration starting at `start`. On success returns the
/// declaration and the index just past its `;`.
fn match_declaration(source: &str, tokens: &[Token], start: usize) -> Option<(Declaration, usize)> {
    let type_token = tokens.get(start)?;
    let declared_type = type_token.ident()?;

    let mut pos = start + 1;
    let is_pointer = tokens.get(pos)?.is(&TokenKind::Star);
    if is_pointer {
        pos += 1;
    }

    let name = tokens.get(pos)?.ident()?;
    if !tokens.get(pos + 1)?.is(&TokenKind::Assign) {
        return None;
    }

    let expr_start = pos + 2;
    let terminator = tokens[expr_start..]
        .iter()
        .position(|t| t.is(&TokenKind::Semicolon))?
        + expr_start;

    // `int x = ;` has nothing to show
    if terminator == expr_start {
        return None;
    }

    let initializer_text = source[tokens[expr_start].start..tokens[terminator - 1].end]
        .trim()
        .to_string();

    let declaration = Declaration {
        declared_type: declared_type.to_string(),
        is_pointer,
        name: name.to_string(),
        initializer_text,
        location: type_token.location,
    };

    Some((declaration, terminator + 1))
}
