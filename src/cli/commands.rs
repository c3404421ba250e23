//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! The pipeline is staged explicitly: read → parse-all → classify-all →
//! emit-all. Malformed declarations are skipped with a warning naming the
//! offending text; one bad fragment never aborts the run.

use std::fs;
use std::path::Path;

use crate::backend::emitter;
use crate::backend::registry::HandleRegistry;
use crate::frontend::parser::{parse_declaration, Declaration};
use crate::frontend::reader;

use super::{CliError, CliResult, ExitCode};

/// Run the full pipeline over a header file, writing generated structs to
/// stdout or to `output`.
pub fn generate_file(file_path: &str, output: Option<&Path>) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;

    let declarations = parse_fragments(&source);
    let mut registry = HandleRegistry::with_default_catalog();
    for decl in declarations {
        registry.classify(decl);
    }

    let code = emitter::emit_all(&registry);
    match output {
        Some(path) => fs::write(path, code)
            .map_err(|e| CliError::failure(format!("Error writing {}: {}", path.display(), e)))?,
        None => print!("{}", code),
    }

    Ok(ExitCode::SUCCESS)
}

/// Debug command: dump the parsed declarations, one per line.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    for decl in parse_fragments(&source) {
        println!("{:?}", decl);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse every collected fragment, skipping malformed ones with a warning.
fn parse_fragments(source: &str) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    for fragment in reader::collect_declarations(source) {
        match parse_declaration(&fragment) {
            Ok(decl) => declarations.push(decl),
            Err(err) => tracing::warn!(%err, "skipping declaration"),
        }
    }
    declarations
}

fn read_source(file_path: &str) -> CliResult<String> {
    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading {}: {}", file_path, e)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragments_skips_malformed() {
        let source = "\
CINDEX_LINKAGE CXIndex clang_createIndex(int a, int b);\n\
CINDEX_LINKAGE void clang_broken;\n\
CINDEX_LINKAGE void clang_disposeIndex(CXIndex index);\n";
        let declarations = parse_fragments(source);
        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].name, "clang_createIndex");
        assert_eq!(declarations[1].name, "clang_disposeIndex");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = generate_file("/nonexistent/Index.h", None).unwrap_err();
        assert!(err.message.contains("/nonexistent/Index.h"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
