use once_cell::sync::Lazy;
use regex::Regex;

use crate::ir::Metadata;

/// Length of the framing prefix in front of the comment text of a doc
/// comment payload.
pub const DOC_COMMENT_PREFIX_LEN: usize = 2;

/// Comment decoration: `/**`, `/*`, `//`, `*/` and leading `*` continuations.
static COMMENT_DECORATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(/[*]{1,2} ?|// ?| ?[*] | ?[*]?/)").expect("comment pattern is valid")
});

/// Remove comment syntax from one raw doc comment.
pub fn strip_comment_markers(raw: &str) -> String {
    COMMENT_DECORATION.replace_all(raw, "").into_owned()
}

/// Collect the doc comments in `metadata` tagged with `type_url`.
///
/// Each matching payload loses its framing prefix and comment decoration and
/// ends up on its own line. Never fails: no matching entries, short payloads
/// and invalid UTF-8 all degrade to less (or no) text.
pub fn extract_comment(metadata: &Metadata, type_url: &str) -> String {
    let mut comment = String::new();
    for entry in metadata.of_type(type_url) {
        let Some(text) = entry.value.get(DOC_COMMENT_PREFIX_LEN..) else {
            continue;
        };
        comment.push_str(&strip_comment_markers(&String::from_utf8_lossy(text)));
        comment.push('\n');
    }
    comment.trim().to_string()
}
