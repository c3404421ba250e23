#![forbid(unsafe_code)]
//! wrapgen — ownership-wrapping struct generation for flat C APIs
//!
//! Given a list of `extern "C"` declarations (the libclang C API shape),
//! wrapgen infers from naming and signature shape which functions are
//! constructors, destructors, or methods of an opaque handle type, and emits
//! one C++ wrapper struct per handle.
//!
//! The pipeline is staged and runs strictly in order:
//!
//! 1. `frontend::reader` - stitch multi-line declaration fragments
//! 2. `frontend::parser` - parse each fragment into a [`Declaration`]
//! 3. `backend::registry` - classify declarations against the handle catalog
//! 4. `backend::emitter` - render each populated [`HandleModel`] as text
//!
//! ## Panic Policy
//!
//! Production code uses `Result` with `?`; `.unwrap()` and `.expect()` are
//! acceptable in tests only. The `cli` module enforces
//! `#![deny(clippy::unwrap_used)]`.

pub mod backend;
pub mod cli;
pub mod errors;
pub mod frontend;
pub mod names;

pub use backend::emitter::{emit_all, emit_model, CppEmitter};
pub use backend::model::HandleModel;
pub use backend::registry::{default_catalog, Classification, HandleRegistry};
pub use errors::WrapgenError;
pub use frontend::parser::{parse_declaration, Declaration, Parameter};
pub use frontend::reader::collect_declarations;
