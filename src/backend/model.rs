//! Per-handle wrapper model
//!
//! A [`HandleModel`] accumulates the declarations classified against one
//! opaque handle type. Presence of a disposal function is the single
//! governing invariant of the design: a destructor makes the emitted wrapper
//! non-copyable and shared-owned, its absence makes it a plain copyable
//! aggregate.

use crate::frontend::parser::Declaration;
use crate::names;

/// The wrapper-generation unit, one per known opaque handle type.
#[derive(Debug, Clone)]
pub struct HandleModel {
    handle_type: String,
    wrapper_name: String,
    constructors: Vec<Declaration>,
    destructor: Option<Declaration>,
    methods: Vec<Declaration>,
}

impl HandleModel {
    /// Create a model with the wrapper name derived from the handle type:
    /// strip the handle prefix marker, then snake-case (`CXIndex` → `index`).
    pub fn new(handle_type: &str) -> Self {
        let wrapper_name = names::to_snake_case(&handle_type.replace(names::HANDLE_PREFIX, ""));
        Self::with_wrapper_name(handle_type, &wrapper_name)
    }

    /// Create a model with an explicit wrapper name, overriding derivation.
    pub fn with_wrapper_name(handle_type: &str, wrapper_name: &str) -> Self {
        Self {
            handle_type: handle_type.to_string(),
            wrapper_name: wrapper_name.to_string(),
            constructors: Vec::new(),
            destructor: None,
            methods: Vec::new(),
        }
    }

    pub fn handle_type(&self) -> &str {
        &self.handle_type
    }

    pub fn wrapper_name(&self) -> &str {
        &self.wrapper_name
    }

    /// The type used when this handle appears in a signature: the shared
    /// ownership form when a destructor exists, the bare wrapper otherwise.
    pub fn wrapper_type(&self) -> String {
        if self.has_destructor() {
            format!("std::shared_ptr<{}>", self.wrapper_name)
        } else {
            self.wrapper_name.clone()
        }
    }

    pub fn add_constructor(&mut self, decl: Declaration) {
        self.constructors.push(decl);
    }

    pub fn add_method(&mut self, decl: Declaration) {
        self.methods.push(decl);
    }

    /// Install the disposal function, returning the previously installed one
    /// when a duplicate shows up (last write wins).
    pub fn set_destructor(&mut self, decl: Declaration) -> Option<Declaration> {
        self.destructor.replace(decl)
    }

    pub fn has_destructor(&self) -> bool {
        self.destructor.is_some()
    }

    pub fn constructors(&self) -> &[Declaration] {
        &self.constructors
    }

    pub fn destructor(&self) -> Option<&Declaration> {
        self.destructor.as_ref()
    }

    pub fn methods(&self) -> &[Declaration] {
        &self.methods
    }

    /// Models with neither constructors nor methods emit nothing; they are
    /// pure pass-through types even when a destructor was registered.
    pub fn is_unused(&self) -> bool {
        self.constructors.is_empty() && self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(name: &str) -> Declaration {
        Declaration {
            return_type: "void".to_string(),
            name: name.to_string(),
            parameters: Vec::new(),
        }
    }

    #[test]
    fn test_wrapper_name_derivation() {
        assert_eq!(HandleModel::new("CXIndex").wrapper_name(), "index");
        assert_eq!(
            HandleModel::new("CXTranslationUnit").wrapper_name(),
            "translation_unit"
        );
        assert_eq!(
            HandleModel::new("CXTUResourceUsage").wrapper_name(),
            "tu_resource_usage"
        );
    }

    #[test]
    fn test_wrapper_name_override() {
        let model = HandleModel::with_wrapper_name("CXIndex", "idx");
        assert_eq!(model.wrapper_name(), "idx");
    }

    #[test]
    fn test_ownership_mode_follows_destructor() {
        let mut model = HandleModel::new("CXString");
        assert_eq!(model.wrapper_type(), "string");

        assert!(model.set_destructor(decl("clang_disposeString")).is_none());
        assert_eq!(model.wrapper_type(), "std::shared_ptr<string>");
    }

    #[test]
    fn test_duplicate_destructor_returns_previous() {
        let mut model = HandleModel::new("CXString");
        model.set_destructor(decl("clang_disposeString"));
        let previous = model.set_destructor(decl("clang_disposeStringSet"));
        assert_eq!(previous.unwrap().name, "clang_disposeString");
        assert_eq!(model.destructor().unwrap().name, "clang_disposeStringSet");
    }

    #[test]
    fn test_destructor_only_model_is_unused() {
        let mut model = HandleModel::new("CXString");
        model.set_destructor(decl("clang_disposeString"));
        assert!(model.is_unused());

        model.add_method(decl("clang_getCString"));
        assert!(!model.is_unused());
    }
}
