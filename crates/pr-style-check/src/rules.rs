//! Style rules applied to added diff lines.
//!
//! Everything here is a pure text predicate so it can be tested without an
//! API client.

/// Only files whose name ends with this suffix are checked.
pub const CHECKED_EXTENSION: &str = ".java";

/// Two consecutive added blank lines in a patch.
pub const EXTRA_BLANK_LINES: &str = "\n+\n+";

const LINE_COMMENT: &str = "//";
const BLOCK_COMMENT_CONTINUATION: &str = "*";

/// A style rule that can be violated by a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// An added comment line does not end with `.`
    MissingFullStop,
    /// The patch adds two blank lines in a row
    ExtraBlankLines,
}

impl Rule {
    /// Review comment body posted for a violation of this rule
    pub fn message(&self) -> &'static str {
        match self {
            Rule::MissingFullStop => "Comments should end with a full stop.",
            Rule::ExtraBlankLines => "Please remove extra new lines.",
        }
    }
}

/// Whether the file is subject to the style checks.
pub fn is_checked_file(filename: &str) -> bool {
    filename.ends_with(CHECKED_EXTENSION)
}

/// Trimmed content of an added (`+`) line, or `None` for any other line.
pub fn added_content(line: &str) -> Option<&str> {
    line.strip_prefix('+').map(str::trim)
}

/// Whether trimmed line content is a `//` comment or a `*` block continuation.
pub fn is_comment_line(content: &str) -> bool {
    content.starts_with(LINE_COMMENT) || content.starts_with(BLOCK_COMMENT_CONTINUATION)
}

pub fn ends_with_full_stop(content: &str) -> bool {
    content.ends_with('.')
}

/// Whether a raw patch line adds a comment that does not end with a full stop.
pub fn lacks_full_stop(line: &str) -> bool {
    added_content(line).is_some_and(|content| {
        is_comment_line(content) && !ends_with_full_stop(content)
    })
}

/// Byte offset of the first pair of added blank lines, if any.
pub fn extra_blank_lines_offset(patch: &str) -> Option<usize> {
    patch.find(EXTRA_BLANK_LINES)
}
