//! Name and type normalization
//!
//! Pure string transforms shared by the parser and the emitter: identifier
//! case conversion, handle-type substitution, and parameter-name
//! disambiguation. Nothing here mutates the registry.

use std::sync::LazyLock;

use regex::Regex;

use crate::backend::registry::HandleRegistry;

/// Prefix marker carried by every opaque handle type in the wrapped API.
pub const HANDLE_PREFIX: &str = "CX";

/// Suffix appended when a parameter name would collide with a wrapper type
/// name, or when the name had to be synthesized from a bare type token.
pub const DISAMBIGUATION_SUFFIX: &str = "_var";

// A capital starting a lowercase run, preceded by any character.
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("static pattern"));

// A lowercase letter or digit immediately followed by a capital.
static LOWER_TO_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static pattern"));

/// Convert a mixed/Pascal-case identifier to lowercase-with-underscores.
///
/// Runs exactly two substitution passes so that acronym runs split the same
/// way every time: `TUResourceUsage` becomes `tu_resource_usage`,
/// `excludeDeclarationsFromPCH` becomes `exclude_declarations_from_pch`.
/// The transform is idempotent on already-snake-cased input.
pub fn to_snake_case(name: &str) -> String {
    let pass1 = WORD_BOUNDARY.replace_all(name, "${1}_${2}");
    let pass2 = LOWER_TO_UPPER.replace_all(&pass1, "${1}_${2}");
    pass2.to_lowercase()
}

/// Map a raw declared type to its emitted representation.
///
/// Registered handle types are substituted with their wrapper representation
/// (shared-ownership form when the handle has a destructor). Anything else
/// keeps its spelling, minus a leading `struct ` or `enum ` qualifier.
pub fn map_type(registry: &HandleRegistry, raw: &str) -> String {
    match registry.get(raw) {
        Some(model) => model.wrapper_type(),
        None => strip_qualifier(raw).to_string(),
    }
}

/// Map a raw parameter name to its emitted spelling.
///
/// Snake-cases the name, then suffixes it when the result would shadow a
/// wrapper type name.
pub fn map_name(registry: &HandleRegistry, raw: &str) -> String {
    let name = to_snake_case(raw);
    if registry.is_wrapper_name(&name) {
        format!("{name}{DISAMBIGUATION_SUFFIX}")
    } else {
        name
    }
}

/// Synthesize a parameter name from a bare type token.
///
/// Used when a declaration supplies only a type, as in forward-declared
/// opaque-pointer parameters: `CXString` yields `string_var`.
pub fn synthesized_param_name(ty: &str) -> String {
    let stem = to_snake_case(&ty.replace(HANDLE_PREFIX, ""));
    format!("{stem}{DISAMBIGUATION_SUFFIX}")
}

fn strip_qualifier(raw: &str) -> &str {
    raw.strip_prefix("struct ")
        .or_else(|| raw.strip_prefix("enum "))
        .unwrap_or(raw)
}
