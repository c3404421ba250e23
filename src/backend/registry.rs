//! Handle registry and declaration classifier
//!
//! The registry holds the fixed catalog of known opaque handle types, in
//! catalog order, and files each parsed declaration as a constructor,
//! destructor, or method of the owning handle. The catalog is an explicit
//! configuration value so classification can be tested against alternate
//! catalogs; [`default_catalog`] is the libclang list.
//!
//! Classification precedence: a declaration whose first parameter is a
//! registered handle is always filed against that handle (as destructor or
//! method), even when its return type matches a different handle. Only
//! otherwise does a matching return type make it a constructor. Declarations
//! matching neither are discarded.

use std::collections::HashMap;

use crate::backend::model::HandleModel;
use crate::frontend::parser::Declaration;

/// The opaque handle types of the wrapped API, in emission order.
const DEFAULT_CATALOG: [&str; 29] = [
    "CXIndex",
    "CXTranslationUnit",
    "CXFile",
    "CXIndexAction",
    "CXSourceLocation",
    "CXDiagnostic",
    "CXDiagnosticSet",
    "CXString",
    "CXTUResourceUsage",
    "CXCursor",
    "CXSourceRange",
    "CXCodeCompleteResults",
    "CXUnsavedFile",
    "CXResult",
    "CXComment",
    "CXType",
    "CXCompletionString",
    "CXIdxIncludedFileInfo",
    "CXIdxEntityInfo",
    "CXIdxEntityRefKind",
    "CXIdxLoc",
    "CXIdxClientFile",
    "CXRemapping",
    "CXCompilationDatabase",
    "CXCompileCommands",
    "CXCompileCommand",
    "CXDiagnosticSeverity",
    "CXToken",
    "CXModule",
];

/// The fixed libclang handle catalog.
pub fn default_catalog() -> &'static [&'static str] {
    &DEFAULT_CATALOG
}

/// How a declaration was filed by [`HandleRegistry::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Constructor,
    Destructor,
    Method,
    /// Neither takes nor returns a known handle; outside wrapper scope.
    Discarded,
}

/// Ordered catalog of handle models plus a by-type lookup index.
///
/// Structurally immutable after construction: classification only grows the
/// per-model declaration lists. Iteration order is catalog order, which
/// makes emission deterministic.
#[derive(Debug, Clone)]
pub struct HandleRegistry {
    models: Vec<HandleModel>,
    by_type: HashMap<String, usize>,
}

impl HandleRegistry {
    /// Build a registry from an explicit catalog of handle type names.
    pub fn new(catalog: &[&str]) -> Self {
        let models: Vec<HandleModel> = catalog.iter().map(|ty| HandleModel::new(ty)).collect();
        let by_type = models
            .iter()
            .enumerate()
            .map(|(i, m)| (m.handle_type().to_string(), i))
            .collect();
        Self { models, by_type }
    }

    /// Build a registry over the fixed libclang catalog.
    pub fn with_default_catalog() -> Self {
        Self::new(&DEFAULT_CATALOG)
    }

    /// Look up a model by raw handle type name.
    pub fn get(&self, handle_type: &str) -> Option<&HandleModel> {
        self.by_type.get(handle_type).map(|&i| &self.models[i])
    }

    /// Whether a normalized identifier collides with any wrapper name.
    pub fn is_wrapper_name(&self, name: &str) -> bool {
        self.models.iter().any(|m| m.wrapper_name() == name)
    }

    /// All models, in catalog order.
    pub fn models(&self) -> &[HandleModel] {
        &self.models
    }

    /// File a declaration against the owning handle, if any.
    pub fn classify(&mut self, decl: Declaration) -> Classification {
        let by_param = decl
            .parameters
            .first()
            .and_then(|p| self.by_type.get(&p.ty).copied());

        if let Some(idx) = by_param {
            if let Some(ret_idx) = self.by_type.get(&decl.return_type).copied() {
                if ret_idx != idx {
                    // Method-wins precedence over the constructor reading.
                    tracing::debug!(
                        function = %decl.name,
                        receiver = %self.models[idx].handle_type(),
                        returns = %self.models[ret_idx].handle_type(),
                        "declaration matches two handles; filing as a method"
                    );
                }
            }

            if decl.parameters.len() == 1 && is_disposal(&decl.name) {
                let handle = self.models[idx].handle_type().to_string();
                let name = decl.name.clone();
                if let Some(previous) = self.models[idx].set_destructor(decl) {
                    tracing::warn!(
                        handle = %handle,
                        replaced = %previous.name,
                        kept = %name,
                        "multiple disposal functions for one handle; keeping the last"
                    );
                }
                return Classification::Destructor;
            }

            self.models[idx].add_method(decl);
            return Classification::Method;
        }

        if let Some(&idx) = self.by_type.get(&decl.return_type) {
            self.models[idx].add_constructor(decl);
            return Classification::Constructor;
        }

        Classification::Discarded
    }
}

/// The disposal heuristic: a name containing "dispose", case-insensitive.
///
/// String-pattern classification is fragile by nature; keeping it behind one
/// named predicate makes the heuristic swappable and testable in isolation.
pub fn is_disposal(name: &str) -> bool {
    name.to_lowercase().contains("dispose")
}
