use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Strips tag-like substrings and stray angle brackets, trims, and caps the
/// result at `max_length` characters.
///
/// This is a denylist scrub, not an HTML parser; the stored text is plain
/// text and is additionally escaped before being embedded anywhere
/// markup-aware. Idempotent: sanitizing sanitized text is a no-op.
pub fn sanitize(input: &str, max_length: usize) -> String {
    let stripped = TAG_RE.replace_all(input, "");
    let no_brackets: String = stripped
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect();

    let truncated: String = no_brackets.trim().chars().take(max_length).collect();
    // Truncation can expose trailing whitespace; drop it so the result is
    // stable under repeated sanitization.
    truncated.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_inner_text() {
        let out = sanitize("<script>alert(1)</script>hello", 2000);
        assert_eq!(out, "alert(1)hello");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
    }

    #[test]
    fn bracket_pair_is_stripped_as_a_tag() {
        // "< b >" matches the tag pattern even though it is not real markup
        assert_eq!(sanitize("a < b > c", 100), "a  c");
        assert_eq!(sanitize("<<>>", 100), "");
    }

    #[test]
    fn removes_unmatched_angle_brackets() {
        assert_eq!(sanitize("a < b", 100), "a  b");
        assert_eq!(sanitize("a > b", 100), "a  b");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(sanitize("   Jane Doe \t", 100), "Jane Doe");
    }

    #[test]
    fn truncates_to_max_length() {
        assert_eq!(sanitize("abcdef", 3), "abc");
        // multi-byte characters count as one
        assert_eq!(sanitize("école", 2), "éc");
    }

    #[test]
    fn pure_markup_becomes_empty() {
        assert_eq!(sanitize("<b><i></i></b>", 100), "");
    }

    #[test]
    fn idempotent() {
        let cases = [
            "<script>alert(1)</script>hello",
            "  plain text  ",
            "a < b",
            "",
            "x y z",
            // truncation lands on whitespace: "a b" cut at 2 is "a "
            "a b",
        ];
        for case in cases {
            for max in [2usize, 5, 100] {
                let once = sanitize(case, max);
                assert_eq!(sanitize(&once, max), once, "input {:?} max {}", case, max);
            }
        }
    }
}
