//! Textual patching of the route file.
//!
//! The route file is never parsed. Two regions are located by substring
//! search: the import block and the body of `func Register(...)`. Offsets
//! are recomputed after every insertion. The registration line goes in
//! first; the import is only added once that succeeded.
//!
//! Brace and paren matching skips string, rune and raw string literals as
//! well as line and block comments, so `"{"` in a log message does not
//! confuse the scan.

use serde::Serialize;

const IMPORT_BLOCK: &str = "import (";
const REGISTER_FN: &str = "func Register(";

/// What gets wired into the route file for one controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerRegistration {
    import_path: String,
    package: String,
}

impl ControllerRegistration {
    pub fn new(import_path: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            import_path: import_path.into(),
            package: package.into(),
        }
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// `"<import path>"`, as it appears in an import block.
    pub fn quoted_import(&self) -> String {
        format!("\"{}\"", self.import_path)
    }

    /// `<pkg>.NewController()`; its presence means the controller is wired.
    pub fn constructor_call(&self) -> String {
        format!("{}.NewController()", self.package)
    }

    /// The statement appended to the `Register` body, newline included.
    pub fn registration_line(&self) -> String {
        format!("\t{}.Controller({})\n", self.package, self.constructor_call())
    }
}

/// Result of [`patch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchResult {
    /// The constructor call is already present; nothing was touched.
    AlreadyRegistered,
    /// The registration line was inserted. The import may still be missing.
    Patched(RoutePatch),
    /// The `Register` body could not be located. The import is withheld
    /// too, since an unused import breaks the build.
    Unpatched(RegisterFault),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePatch {
    pub source: String,
    pub import: ImportEdit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportEdit {
    AlreadyPresent,
    InsertedIntoBlock,
    ConvertedSingleImport,
    /// Neither an `import (` block nor a single-line import was found.
    MarkerMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterFault {
    /// No `func Register(` with a body was found.
    FunctionMissing,
    /// The body opens but its closing brace was never found.
    UnbalancedBody,
}

/// Wire `registration` into the route file text `source`.
pub fn patch(source: &str, registration: &ControllerRegistration) -> PatchResult {
    if is_registered(source, registration) {
        return PatchResult::AlreadyRegistered;
    }

    let mut text = source.to_string();
    if let Err(fault) = insert_registration(&mut text, registration) {
        return PatchResult::Unpatched(fault);
    }
    let import = insert_import(&mut text, registration);

    PatchResult::Patched(RoutePatch {
        source: text,
        import,
    })
}

/// Whether `<pkg>.NewController()` occurs with `<pkg>` as a whole
/// identifier, so `superuser.NewController()` does not count for `user`.
fn is_registered(source: &str, registration: &ControllerRegistration) -> bool {
    let call = registration.constructor_call();
    source.match_indices(&call).any(|(at, _)| {
        source[..at]
            .bytes()
            .next_back()
            .is_none_or(|b| !(b.is_ascii_alphanumeric() || b == b'_'))
    })
}

fn insert_import(text: &mut String, registration: &ControllerRegistration) -> ImportEdit {
    let quoted = registration.quoted_import();
    if text.contains(&quoted) {
        return ImportEdit::AlreadyPresent;
    }

    if let Some(start) = text.find(IMPORT_BLOCK) {
        let Some(close) = matching_close(text, start + IMPORT_BLOCK.len() - 1, b'(', b')') else {
            return ImportEdit::MarkerMissing;
        };
        let line_start = line_start(text, close);
        if text[line_start..close].trim().is_empty() {
            text.insert_str(line_start, &format!("\t{quoted}\n"));
        } else {
            text.insert_str(close, &format!("\n\t{quoted}\n"));
        }
        return ImportEdit::InsertedIntoBlock;
    }

    if let Some((from, to, spec)) = single_import(text) {
        let block = format!("import (\n\t{spec}\n\t{quoted}\n)");
        text.replace_range(from..to, &block);
        return ImportEdit::ConvertedSingleImport;
    }

    ImportEdit::MarkerMissing
}

/// Locate a line of the form `import "path"` (optionally aliased).
///
/// Returns the byte range of the statement, newline excluded, and the
/// import spec after the keyword.
fn single_import(text: &str) -> Option<(usize, usize, String)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        let indent = content.len() - content.trim_start().len();
        if let Some(rest) = content.trim_start().strip_prefix("import") {
            let spec = rest.trim();
            if rest.starts_with(char::is_whitespace) && spec.ends_with('"') {
                let from = offset + indent;
                return Some((from, offset + content.len(), spec.to_string()));
            }
        }
        offset += line.len();
    }
    None
}

fn insert_registration(
    text: &mut String,
    registration: &ControllerRegistration,
) -> Result<(), RegisterFault> {
    let func_at = text.find(REGISTER_FN).ok_or(RegisterFault::FunctionMissing)?;
    let params_open = func_at + REGISTER_FN.len() - 1;
    let params_close =
        matching_close(text, params_open, b'(', b')').ok_or(RegisterFault::FunctionMissing)?;
    let open = text[params_close..]
        .find('{')
        .map(|rel| params_close + rel)
        .ok_or(RegisterFault::FunctionMissing)?;
    let close = matching_close(text, open, b'{', b'}').ok_or(RegisterFault::UnbalancedBody)?;

    let line = registration.registration_line();
    let line_start = line_start(text, close);
    if text[line_start..close].trim().is_empty() {
        text.insert_str(line_start, &line);
    } else {
        text.insert_str(close, &format!("\n{line}"));
    }
    Ok(())
}

fn line_start(text: &str, at: usize) -> usize {
    text[..at].rfind('\n').map_or(0, |nl| nl + 1)
}

/// Index of the delimiter closing the one at `open`.
///
/// Delimiters inside literals and comments do not count.
fn matching_close(text: &str, open: usize, opener: u8, closer: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = open;

    while i < bytes.len() {
        let b = bytes[i];
        if b == opener {
            depth += 1;
        } else if b == closer {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(i);
            }
        } else {
            match b {
                b'"' | b'\'' => i = skip_quoted(bytes, i)?,
                b'`' => i = skip_raw(bytes, i)?,
                b'/' if bytes.get(i + 1) == Some(&b'/') => i = skip_line_comment(bytes, i),
                b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_block_comment(bytes, i)?,
                _ => {}
            }
        }
        i += 1;
    }
    None
}

/// Index of the quote ending the interpreted literal opened at `start`.
fn skip_quoted(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'\n' => return None,
            b if b == quote => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

fn skip_raw(bytes: &[u8], start: usize) -> Option<usize> {
    bytes[start + 1..]
        .iter()
        .position(|&b| b == b'`')
        .map(|rel| start + 1 + rel)
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |rel| start + rel)
}

fn skip_block_comment(bytes: &[u8], start: usize) -> Option<usize> {
    bytes[start + 2..]
        .windows(2)
        .position(|w| w == b"*/")
        .map(|rel| start + 2 + rel + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> ControllerRegistration {
        ControllerRegistration::new("example.com/app/http/controller/user", "user")
    }

    fn patched(source: &str) -> RoutePatch {
        match patch(source, &user()) {
            PatchResult::Patched(p) => p,
            other => panic!("expected Patched, got {other:?}"),
        }
    }

    #[test]
    fn registration_strings() {
        let reg = user();
        assert_eq!(reg.constructor_call(), "user.NewController()");
        assert_eq!(
            reg.registration_line(),
            "\tuser.Controller(user.NewController())\n"
        );
    }

    #[test]
    fn minimal_file_gets_both_edits() {
        let p = patched("package route\n\nimport (\n)\n\nfunc Register() {\n}\n");
        assert_eq!(p.import, ImportEdit::InsertedIntoBlock);
        assert_eq!(
            p.source,
            "package route\n\nimport (\n\t\"example.com/app/http/controller/user\"\n)\n\n\
             func Register() {\n\tuser.Controller(user.NewController())\n}\n"
        );
    }

    #[test]
    fn second_patch_is_a_no_op() {
        let once = patched("package route\n\nimport (\n)\n\nfunc Register() {\n}\n");
        assert_eq!(patch(&once.source, &user()), PatchResult::AlreadyRegistered);
    }

    #[test]
    fn appends_after_existing_imports_and_registrations() {
        let source = "\
package route

import (
\t\"example.com/app/http/controller/post\"
)

func Register(r *Router) {
\tpost.Controller(post.NewController())
}
";
        let p = patched(source);
        assert_eq!(
            p.source,
            "\
package route

import (
\t\"example.com/app/http/controller/post\"
\t\"example.com/app/http/controller/user\"
)

func Register(r *Router) {
\tpost.Controller(post.NewController())
\tuser.Controller(user.NewController())
}
"
        );
    }

    #[test]
    fn nested_block_uses_outer_closing_brace() {
        let source = "import (\n)\n\nfunc Register() {\n\tif debug {\n\t\tlog()\n\t}\n}\n";
        let p = patched(source);
        assert!(p.source.ends_with("\t}\n\tuser.Controller(user.NewController())\n}\n"));
    }

    #[test]
    fn braces_in_literals_and_comments_are_ignored() {
        let source = "\
import (
)

func Register() {
\tlog(\"}\")
\tlog('}')
\tlog(`{ }}`)
\t// }
\t/* } { */
}
";
        let p = patched(source);
        assert!(p.source.ends_with("/* } { */\n\tuser.Controller(user.NewController())\n}\n"));
    }

    #[test]
    fn parameter_list_with_function_type() {
        let source = "import (\n)\nfunc Register(wrap func(h Handler) Handler) {\n}\n";
        let p = patched(source);
        assert!(p.source.contains("Handler) {\n\tuser.Controller"));
    }

    #[test]
    fn single_line_body() {
        let p = patched("import (\n)\nfunc Register() {}\n");
        assert!(p.source.ends_with("func Register() {\n\tuser.Controller(user.NewController())\n}\n"));
    }

    #[test]
    fn single_import_becomes_block() {
        let p = patched("package route\n\nimport \"fmt\"\n\nfunc Register() {\n}\n");
        assert_eq!(p.import, ImportEdit::ConvertedSingleImport);
        assert!(p.source.contains(
            "import (\n\t\"fmt\"\n\t\"example.com/app/http/controller/user\"\n)\n\nfunc"
        ));
    }

    #[test]
    fn inline_import_block() {
        let p = patched("import (\"fmt\")\nfunc Register() {\n}\n");
        assert!(p.source.starts_with(
            "import (\"fmt\"\n\t\"example.com/app/http/controller/user\"\n)"
        ));
    }

    #[test]
    fn import_already_present_only_adds_registration() {
        let source = "import (\n\t\"example.com/app/http/controller/user\"\n)\nfunc Register() {\n}\n";
        let p = patched(source);
        assert_eq!(p.import, ImportEdit::AlreadyPresent);
        assert_eq!(p.source.matches("controller/user\"").count(), 1);
    }

    #[test]
    fn missing_register_function_leaves_source_alone() {
        let source = "package route\n\nimport (\n)\n";
        assert_eq!(
            patch(source, &user()),
            PatchResult::Unpatched(RegisterFault::FunctionMissing)
        );
    }

    #[test]
    fn unterminated_body_withholds_the_import() {
        let result = patch("import (\n)\nfunc Register() {\n\tif x {\n}\n", &user());
        assert_eq!(result, PatchResult::Unpatched(RegisterFault::UnbalancedBody));
    }

    #[test]
    fn missing_import_marker_still_registers() {
        let p = patched("package route\n\nfunc Register() {\n}\n");
        assert_eq!(p.import, ImportEdit::MarkerMissing);
        assert!(p.source.contains("\tuser.Controller(user.NewController())\n}"));
    }

    #[test]
    fn register_prefix_of_other_function_is_not_matched() {
        assert_eq!(
            patch("import (\n)\nfunc RegisterAll() {\n}\n", &user()),
            PatchResult::Unpatched(RegisterFault::FunctionMissing)
        );

        let p = patched("import (\n)\nfunc RegisterAll() {\n}\nfunc Register() {\n}\n");
        assert!(p.source.ends_with("func Register() {\n\tuser.Controller(user.NewController())\n}\n"));
    }

    #[test]
    fn paren_in_import_comment_does_not_close_the_block() {
        let p = patched("import (\n\t\"fmt\" // see (docs)\n)\n\nfunc Register() {\n}\n");
        assert_eq!(
            p.source,
            "import (\n\t\"fmt\" // see (docs)\n\t\"example.com/app/http/controller/user\"\n)\n\n\
             func Register() {\n\tuser.Controller(user.NewController())\n}\n"
        );
    }

    #[test]
    fn longer_package_name_does_not_count_as_registered() {
        let source = "\
import (
\t\"example.com/app/http/controller/superuser\"
)

func Register() {
\tsuperuser.Controller(superuser.NewController())
}
";
        let p = patched(source);
        assert!(p.source.contains("\tuser.Controller(user.NewController())\n}"));
        assert!(p.source.contains("\t\"example.com/app/http/controller/user\"\n)"));
    }

    #[test]
    fn call_nested_in_other_expression_counts_as_registered() {
        let source = "func Register() {\n\tr.Add(user.NewController())\n}\n";
        assert_eq!(patch(source, &user()), PatchResult::AlreadyRegistered);
    }
}
