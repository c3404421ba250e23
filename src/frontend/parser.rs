//! Declaration parsing
//!
//! Turns one logical declaration string of the shape
//! `<return-type> <name>(<param0>, <param1>, ...);` into a [`Declaration`].

use crate::errors::WrapgenError;
use crate::names;

/// One function argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Raw declared type, possibly including `struct`/`enum` qualifiers.
    pub ty: String,
    /// Declared name, or a synthesized one when the declaration supplied
    /// only a type. Never empty after parsing.
    pub name: String,
}

/// One parsed function signature. Immutable once built; owned by at most one
/// handle model after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// May be empty for void-like declarations.
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<Parameter>,
}

/// Parse a single logical declaration.
///
/// The first `(` and the first `)` delimit the parameter list; parentheses
/// are assumed non-nested, so function-pointer parameters misparse. This is a
/// deliberate simplification: the wrapped API declares only plain handle and
/// value parameters.
pub fn parse_declaration(text: &str) -> Result<Declaration, WrapgenError> {
    let open = text
        .find('(')
        .ok_or_else(|| WrapgenError::malformed(text))?;
    let close = text
        .find(')')
        .filter(|&close| close > open)
        .ok_or_else(|| WrapgenError::malformed(text))?;

    let parameters = parse_parameters(&text[open + 1..close])
        .ok_or_else(|| WrapgenError::malformed(text))?;

    let header: Vec<&str> = text[..open].split_whitespace().collect();
    let (&name, return_words) = header
        .split_last()
        .ok_or_else(|| WrapgenError::malformed(text))?;

    Ok(Declaration {
        return_type: return_words.join(" "),
        name: name.to_string(),
        parameters,
    })
}

/// Parse the comma-separated parameter list. A blank list is zero parameters;
/// `None` signals a piece that cannot yield a non-empty name.
fn parse_parameters(raw: &str) -> Option<Vec<Parameter>> {
    if raw.trim().is_empty() {
        return Some(Vec::new());
    }

    let mut parameters = Vec::new();
    for piece in raw.split(',') {
        let piece = piece.trim();
        let last = trailing_word(piece);
        if last.is_empty() {
            return None;
        }

        let head = piece[..piece.len() - last.len()].trim();
        if head.is_empty() {
            // Type-only piece: synthesize a name from the type token.
            parameters.push(Parameter {
                ty: last.to_string(),
                name: names::synthesized_param_name(last),
            });
        } else {
            parameters.push(Parameter {
                ty: head.to_string(),
                name: last.to_string(),
            });
        }
    }
    Some(parameters)
}

/// The trailing run of word characters, i.e. the last identifier token.
fn trailing_word(piece: &str) -> &str {
    let start = piece
        .rfind(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .map(|i| i + 1)
        .unwrap_or(0);
    &piece[start..]
}
