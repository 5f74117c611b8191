//! Line grammars
//!
//! Full-line-anchored patterns for the two line forms an htpasswd file may
//! contain besides blanks: comments and bcrypt credential entries.

use regex::Regex;
use std::sync::LazyLock;

/// Credential lines: a username (leading alphabetic, then alphanumerics,
/// underscore, or hyphen), a single `:`, and a bcrypt hash under the 2a,
/// 2b, or 2y specification.
static CREDENTIAL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*:\$2[aby]\$[0-9]{2}\$[A-Za-z0-9./]{53}$")
        .expect("credential line pattern must compile")
});

/// Comment lines begin with `#`.
static COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#.*$").expect("comment line pattern must compile"));

/// Returns true if the (already trimmed) line is a valid credential entry.
pub fn is_credential_line(line: &str) -> bool {
    CREDENTIAL_LINE.is_match(line)
}

/// Returns true if the (already trimmed) line is a comment.
pub fn is_comment_line(line: &str) -> bool {
    COMMENT_LINE.is_match(line)
}
