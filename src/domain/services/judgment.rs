//! Judgment text block formatting.
//!
//! Monitor responses carry each judgment as one unstructured text block. The
//! display convention (not a backend contract): first line is the title,
//! lines two and three joined with a space are the metadata line (court
//! number / bench / date), everything after is the body.

/// A monitor text block split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgmentSnippet {
    pub title: String,
    pub meta: String,
    pub body: String,
}

impl JudgmentSnippet {
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        let title = match lines.first() {
            Some(first) if !first.is_empty() => (*first).to_string(),
            _ => "Judgment".to_string(),
        };
        let meta = lines
            .get(1..lines.len().min(3))
            .unwrap_or(&[])
            .join(" ");
        let body = if lines.len() > 3 {
            lines[3..].join("\n")
        } else {
            String::new()
        };
        JudgmentSnippet { title, meta, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_block_splits_three_ways() {
        let text = "State of Kerala v. Union of India\nCourt No. 4\n12-03-2024\nCivil appeal\nallowed in part.";
        let snippet = JudgmentSnippet::parse(text);
        assert_eq!(snippet.title, "State of Kerala v. Union of India");
        assert_eq!(snippet.meta, "Court No. 4 12-03-2024");
        assert_eq!(snippet.body, "Civil appeal\nallowed in part.");
    }

    #[test]
    fn test_empty_text_falls_back_to_generic_title() {
        let snippet = JudgmentSnippet::parse("");
        assert_eq!(snippet.title, "Judgment");
        assert_eq!(snippet.meta, "");
        assert_eq!(snippet.body, "");
    }

    #[test]
    fn test_single_line_has_no_meta_or_body() {
        let snippet = JudgmentSnippet::parse("Suo motu proceedings");
        assert_eq!(snippet.title, "Suo motu proceedings");
        assert_eq!(snippet.meta, "");
        assert_eq!(snippet.body, "");
    }

    #[test]
    fn test_two_lines_meta_is_second_line_only() {
        let snippet = JudgmentSnippet::parse("Title\nBench of three");
        assert_eq!(snippet.meta, "Bench of three");
        assert_eq!(snippet.body, "");
    }

    #[test]
    fn test_exactly_three_lines_has_empty_body() {
        let snippet = JudgmentSnippet::parse("Title\nCourt 2\n01-01-2024");
        assert_eq!(snippet.meta, "Court 2 01-01-2024");
        assert_eq!(snippet.body, "");
    }

    #[test]
    fn test_blank_interior_lines_survive_verbatim() {
        let snippet = JudgmentSnippet::parse("Title\n\n\nbody line 1\n\nbody line 2");
        assert_eq!(snippet.meta, " ");
        assert_eq!(snippet.body, "body line 1\n\nbody line 2");
    }
}
