//! Diff positions within a GitHub file patch.
//!
//! GitHub anchors review comments by "position": the number of lines below
//! the first `@@` hunk header of the file's patch. Later hunk headers count
//! as lines too, so the position is simply the distance from that first
//! header. A patch without any header is treated as if the header sat just
//! above its first line.

const HUNK_HEADER: &str = "@@";

/// One line of a file patch together with its diff position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchLine<'a> {
    /// GitHub diff position of the line
    pub position: u64,
    /// Raw line text including its `+`/`-`/` ` prefix
    pub text: &'a str,
}

/// Split a patch on `\n` and attach the diff position to every line.
pub fn lines(patch: &str) -> impl Iterator<Item = PatchLine<'_>> {
    let header = first_hunk_header(patch);
    patch
        .split('\n')
        .enumerate()
        .map(move |(index, text)| PatchLine {
            position: position_of(index, header),
            text,
        })
}

/// Diff position of the line that contains `offset` (a byte offset into `patch`).
pub fn position_at_offset(patch: &str, offset: usize) -> u64 {
    let end = offset.min(patch.len());
    let index = patch.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count();
    position_of(index, first_hunk_header(patch))
}

fn first_hunk_header(patch: &str) -> Option<usize> {
    patch
        .split('\n')
        .position(|line| line.starts_with(HUNK_HEADER))
}

// Lines above the first header cannot be anchored on GitHub; they fall back to
// the first diff line.
fn position_of(index: usize, header: Option<usize>) -> u64 {
    let position = match header {
        Some(header) => index.saturating_sub(header),
        None => index + 1,
    };
    position.max(1) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TWO_HUNKS: &str = "@@ -1,3 +1,4 @@ public class Foo {\n public class Foo {\n+    // new field\n     int a;\n@@ -20,2 +21,3 @@ void bar() {\n     bar();\n+    baz();";

    #[test]
    fn test_positions_count_from_first_header() {
        let positions: Vec<(u64, &str)> = lines(TWO_HUNKS)
            .skip(1)
            .map(|line| (line.position, line.text))
            .collect();

        assert_eq!(
            positions,
            vec![
                (1, " public class Foo {"),
                (2, "+    // new field"),
                (3, "     int a;"),
                (4, "@@ -20,2 +21,3 @@ void bar() {"),
                (5, "     bar();"),
                (6, "+    baz();"),
            ]
        );
    }

    #[test]
    fn test_positions_without_header_start_at_one() {
        let positions: Vec<u64> = lines("+// missing period\n+\n+\n+int x = 1;")
            .map(|line| line.position)
            .collect();

        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_lines_keep_text() {
        let line = lines("+a\n-b").nth(1).unwrap();

        assert_eq!(
            line,
            PatchLine {
                position: 2,
                text: "-b",
            }
        );
    }

    #[test]
    fn test_position_at_offset() {
        let patch = "@@ -1 +1,3 @@\n+a\n+\n+";
        let offset = patch.find("\n+\n+").unwrap();

        // The newline ends line 1; the lone `+` after it is line 2.
        assert_eq!(position_at_offset(patch, offset), 1);
        assert_eq!(position_at_offset(patch, offset + 1), 2);
        assert_eq!(position_at_offset(patch, patch.len() + 10), 3);
    }

    #[test]
    fn test_header_line_clamps_to_first_position() {
        assert_eq!(position_at_offset("@@ -1 +1 @@\n+a", 0), 1);
    }
}
