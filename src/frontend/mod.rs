//! Input side of the pipeline
//!
//! - `reader`: stitches raw header lines into complete declaration fragments
//! - `parser`: parses one fragment into a structured [`parser::Declaration`]

pub mod parser;
pub mod reader;
