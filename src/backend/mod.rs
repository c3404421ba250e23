//! Model and emission side of the pipeline
//!
//! - `registry`: the fixed handle catalog and the declaration classifier
//! - `model`: per-handle accumulation of constructors, destructor, methods
//! - `emitter`: renders each populated model as a C++ struct definition
//!
//! The registry is built once, populated by classification, and only then
//! read by the emitter; ownership representation of a handle (shared vs.
//! plain) is not final until classification has finished.

pub mod emitter;
pub mod model;
pub mod registry;
