use once_cell::sync::Lazy;
use regex::Regex;

static ISNOTNULL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)ISNOTNULL").expect("valid pattern"));
static SPAN_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bSPAN\(").expect("valid pattern"));

/// Rewrites a generated PPL string so the query engine accepts it. Each
/// fixup targets a known grammar incompatibility; they are applied in a
/// fixed order.
pub fn normalize_generated_ppl(raw: &str) -> String {
    let without_breaks = raw.replace(['\r', '\n'], "");
    let trimmed = without_breaks.trim();
    let lowercased = ISNOTNULL.replace_all(trimmed, "isnotnull");
    let without_backticks = lowercased.replace('`', "");
    SPAN_CALL.replace_all(&without_backticks, "span(").into_owned()
}

const QUESTION_OPEN: &str = "<question>";
const QUESTION_CLOSE: &str = "</question>";

/// Collects the text between each `<question>...</question>` pair, in order
/// of appearance. Content may span multiple lines; an unterminated opening
/// tag ends the scan.
pub fn extract_suggested_questions(text: &str) -> Vec<String> {
    let mut questions = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(QUESTION_OPEN) {
        let body = &rest[open + QUESTION_OPEN.len()..];
        let Some(close) = body.find(QUESTION_CLOSE) else {
            break;
        };
        questions.push(body[..close].to_string());
        rest = &body[close + QUESTION_CLOSE.len()..];
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_applies_every_known_fixup() {
        let raw = "source \r\n with SPAN(x) and `ticks` and ISNOTNULL(y)";
        assert_eq!(
            normalize_generated_ppl(raw),
            "source  with span(x) and ticks and isnotnull(y)"
        );
    }

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(normalize_generated_ppl("  source=logs \n"), "source=logs");
    }

    #[test]
    fn normalize_lowercases_isnotnull_in_any_case() {
        assert_eq!(
            normalize_generated_ppl("where IsNotNull(a) and isnotnull(b)"),
            "where isnotnull(a) and isnotnull(b)"
        );
    }

    #[test]
    fn normalize_only_rewrites_span_as_a_full_token() {
        assert_eq!(
            normalize_generated_ppl("stats by SPAN(t, 1h), MYSPAN(t)"),
            "stats by span(t, 1h), MYSPAN(t)"
        );
    }

    #[test]
    fn normalize_leaves_clean_queries_alone() {
        let clean = "source=logs | where status = 500 | stats count() by host";
        assert_eq!(normalize_generated_ppl(clean), clean);
    }

    #[test]
    fn questions_are_extracted_in_order() {
        let text = "<question>A?</question> junk <question>B?</question>";
        assert_eq!(extract_suggested_questions(text), vec!["A?", "B?"]);
    }

    #[test]
    fn questions_may_span_multiple_lines() {
        let text = "<question>What\nhappened\nyesterday?</question>";
        assert_eq!(
            extract_suggested_questions(text),
            vec!["What\nhappened\nyesterday?"]
        );
    }

    #[test]
    fn unterminated_question_ends_the_scan() {
        let text = "<question>A?</question><question>B?";
        assert_eq!(extract_suggested_questions(text), vec!["A?"]);
    }

    #[test]
    fn no_questions_yields_an_empty_list() {
        assert!(extract_suggested_questions("").is_empty());
        assert!(extract_suggested_questions("no tags here").is_empty());
    }
}
