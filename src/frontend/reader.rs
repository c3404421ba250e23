//! Declaration fragment stitching
//!
//! A fragment begins at a line carrying the linkage marker and ends at the
//! first line ending in `;`, possibly spanning several physical lines. Lines
//! outside an active fragment that do not start one are ignored.

/// Linkage marker that opens a declaration fragment.
pub const LINKAGE_MARKER: &str = "CINDEX_LINKAGE";

/// Collect complete declaration fragments from header text.
///
/// Physical lines of one fragment are rejoined with single spaces and the
/// leading linkage marker is stripped, so every returned string has the shape
/// `<return-type> <name>(<params>);`.
pub fn collect_declarations(source: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current = String::new();

    for line in source.lines() {
        let line = line.trim();
        if line.starts_with(LINKAGE_MARKER) || !current.is_empty() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line);
        }
        if line.ends_with(';') {
            if let Some(rest) = current.strip_prefix(LINKAGE_MARKER) {
                fragments.push(rest.trim().to_string());
            }
            current.clear();
        }
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_fragment() {
        let source = "CINDEX_LINKAGE CXIndex clang_createIndex(int a, int b);";
        assert_eq!(
            collect_declarations(source),
            vec!["CXIndex clang_createIndex(int a, int b);"]
        );
    }

    #[test]
    fn test_multi_line_fragment_is_stitched() {
        let source = "CINDEX_LINKAGE CXTranslationUnit clang_parseTranslationUnit(CXIndex CIdx,\n        const char *source_filename);";
        assert_eq!(
            collect_declarations(source),
            vec!["CXTranslationUnit clang_parseTranslationUnit(CXIndex CIdx, const char *source_filename);"]
        );
    }

    #[test]
    fn test_unmarked_lines_are_ignored() {
        let source = "\
// a comment line\n\
typedef void *CXIndex;\n\
CINDEX_LINKAGE void clang_disposeIndex(CXIndex index);\n\
static int helper(void);\n";
        assert_eq!(
            collect_declarations(source),
            vec!["void clang_disposeIndex(CXIndex index);"]
        );
    }

    #[test]
    fn test_multiple_fragments() {
        let source = "\
CINDEX_LINKAGE CXIndex clang_createIndex(int a, int b);\n\
\n\
CINDEX_LINKAGE void clang_disposeIndex(CXIndex index);\n";
        let fragments = collect_declarations(source);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0], "CXIndex clang_createIndex(int a, int b);");
        assert_eq!(fragments[1], "void clang_disposeIndex(CXIndex index);");
    }

    #[test]
    fn test_empty_input() {
        assert!(collect_declarations("").is_empty());
    }
}
