use std::sync::LazyLock;

use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("markup rule pattern is valid"),
            replacement,
        }
    }
}

/// Markdown-to-wiki rules, applied once each in this order.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(r"\*\*(.*?)\*\*", "*${1}*"),
        Rule::new(r"`([^`]+)`", "{{${1}}}"),
        Rule::new(r"(?m)^# (.+)$", "h1. ${1}"),
        Rule::new(r"(?m)^## (.+)$", "h2. ${1}"),
        Rule::new(r"(?m)^### (.+)$", "h3. ${1}"),
        Rule::new(r"(?m)^- (.+)$", "* ${1}"),
        Rule::new(r"\[([^\]]+)\]\(([^)]+)\)", "[${1}|${2}]"),
    ]
});

/// Converts markdown-style markup into wiki markup.
///
/// Each rule runs over the output of the previous one, but no rule is
/// re-applied, so a heading converted to `h1.` is never scanned again.
pub fn convert(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    RULES.iter().fold(text.to_string(), |acc, rule| {
        rule.pattern
            .replace_all(&acc, rule.replacement)
            .into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_bold_and_inline_code() {
        assert_eq!(
            convert("use **care** with `cargo fmt`"),
            "use *care* with {{cargo fmt}}"
        );
    }

    #[test]
    fn converts_headings_at_each_level() {
        let input = "# Title\n## Section\n### Detail\nnot # a heading";
        assert_eq!(
            convert(input),
            "h1. Title\nh2. Section\nh3. Detail\nnot # a heading"
        );
    }

    #[test]
    fn converts_bullets_only_at_line_start() {
        assert_eq!(convert("- one\n- two\na - b"), "* one\n* two\na - b");
    }

    #[test]
    fn converts_links() {
        assert_eq!(
            convert("see [docs](https://example.com/a_b)"),
            "see [docs|https://example.com/a_b]"
        );
    }

    #[test]
    fn empty_input_passes_through() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn plain_text_is_unchanged() {
        let input = "Nothing to see here.\nJust two lines.";
        assert_eq!(convert(input), input);
    }

    #[test]
    fn headings_and_bullets_are_idempotent() {
        let once = convert("# Title\n## Sub\n### Deep\n- item\n- other");
        assert_eq!(convert(&once), once);
    }

    #[test]
    fn triple_backtick_fence_becomes_curly_fence() {
        let converted = convert("```gherkin\nGiven X\n```");
        assert_eq!(converted, "``{{gherkin\nGiven X\n}}``");
    }
}
