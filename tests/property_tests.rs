//! Property-based tests for wrapgen
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use wrapgen::names::{map_name, to_snake_case};
use wrapgen::{parse_declaration, Classification, HandleRegistry};

// =============================================================================
// Normalization Properties
// =============================================================================

proptest! {
    /// Property: snake-casing is idempotent - normalizing an already
    /// normalized identifier is a no-op.
    #[test]
    fn snake_case_is_idempotent(name in "[A-Za-z][A-Za-z0-9_]{0,24}") {
        let once = to_snake_case(&name);
        prop_assert_eq!(to_snake_case(&once), once);
    }

    /// Property: snake-cased output never contains capitals.
    #[test]
    fn snake_case_output_is_lowercase(name in "[A-Za-z][A-Za-z0-9_]{0,24}") {
        let out = to_snake_case(&name);
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase()));
    }
}

// =============================================================================
// Forwarding Fidelity Properties
// =============================================================================

/// Extract the argument list of the forwarded call in an emitted block.
fn forwarded_args(code: &str, flat_name: &str) -> Vec<String> {
    let marker = format!("{flat_name}(");
    let call_line = code
        .lines()
        .find(|l| l.contains(&marker))
        .expect("forwarded call not emitted");
    let start = call_line.find(&marker).expect("no call") + marker.len();
    let close = call_line[start..].find(')').expect("no close paren") + start;
    let inner = &call_line[start..close];
    if inner.is_empty() {
        Vec::new()
    } else {
        inner.split(", ").map(str::to_string).collect()
    }
}

proptest! {
    /// Property: an emitted method forwards exactly as many arguments as the
    /// original declaration had parameters, receiver first, order preserved.
    #[test]
    fn method_forwarding_preserves_arity_and_order(
        names in prop::collection::vec("[a-z][a-z0-9]{0,8}", 0..5),
    ) {
        let mut text = String::from("void clang_visitChildren(CXCursor parent");
        for name in &names {
            text.push_str(", int ");
            text.push_str(name);
        }
        text.push(')');

        let mut registry = HandleRegistry::new(&["CXCursor"]);
        let outcome = registry.classify(parse_declaration(&text).unwrap());
        prop_assert_eq!(outcome, Classification::Method);

        let model = registry.get("CXCursor").unwrap();
        let code = wrapgen::emit_model(&registry, model);

        let args = forwarded_args(&code, "clang_visitChildren");
        prop_assert_eq!(args.len(), names.len() + 1);
        prop_assert_eq!(args[0].as_str(), "self");
        for (arg, name) in args[1..].iter().zip(&names) {
            prop_assert_eq!(arg, &map_name(&registry, name));
        }
    }

    /// Property: an emitted constructor forwards every parameter
    /// positionally.
    #[test]
    fn constructor_forwarding_preserves_arity(
        names in prop::collection::vec("[a-z][a-z0-9]{0,8}", 0..5),
    ) {
        let params: Vec<String> = names.iter().map(|n| format!("int {n}")).collect();
        let text = format!("CXIndex clang_createIndex({})", params.join(", "));

        let mut registry = HandleRegistry::new(&["CXIndex"]);
        let outcome = registry.classify(parse_declaration(&text).unwrap());
        prop_assert_eq!(outcome, Classification::Constructor);

        let model = registry.get("CXIndex").unwrap();
        let code = wrapgen::emit_model(&registry, model);

        let args = forwarded_args(&code, "clang_createIndex");
        prop_assert_eq!(args.len(), names.len());
    }
}
