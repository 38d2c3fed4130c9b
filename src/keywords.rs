// Keyword list parsing

/// Split comma separated keyword input into trimmed, non-empty phrases.
///
/// Order and duplicates are preserved here. Duplicates collapse later, when
/// counts are keyed by their folded form.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Matching form of a keyword: trimmed and lowercased.
/// Returns `None` when nothing is left after trimming.
pub fn fold_keyword(keyword: &str) -> Option<String> {
    let folded = keyword.trim().to_lowercase();
    (!folded.is_empty()).then_some(folded)
}

pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            parse_keywords(" doanh thu , lợi nhuận,tăng trưởng "),
            vec!["doanh thu", "lợi nhuận", "tăng trưởng"]
        );
    }

    #[test]
    fn drops_empty_entries() {
        assert_eq!(parse_keywords("a,,b"), vec!["a", "b"]);
        assert_eq!(parse_keywords("a, ,b,"), vec!["a", "b"]);
        assert!(parse_keywords(" , , ").is_empty());
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(
            parse_keywords("loi nhuan, thu, loi nhuan"),
            vec!["loi nhuan", "thu", "loi nhuan"]
        );
    }

    #[test]
    fn folds_case_and_whitespace() {
        assert_eq!(fold_keyword("  LỢI Nhuận "), Some("lợi nhuận".to_string()));
        assert_eq!(fold_keyword("   "), None);
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(","));
    }
}
