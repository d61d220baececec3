//! Keyword suggestions with fuzzy matching.

use strsim::jaro_winkler;

use crate::catalog::CommandCatalog;

/// Minimum similarity score for a suggestion (0.0-1.0).
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// The catalog keyword closest to a mistyped one, if any is close enough.
pub fn suggest_keyword<'a>(catalog: &'a CommandCatalog, input: &str) -> Option<&'a str> {
    if input.is_empty() {
        return None;
    }
    let input_lower = input.to_lowercase();

    let mut best: Option<(&str, f64)> = None;
    for command in catalog.iter() {
        let score = jaro_winkler(&input_lower, &command.keyword);
        if score >= SUGGESTION_THRESHOLD && best.is_none_or(|(_, b)| score > b) {
            best = Some((&command.keyword, score));
        }
    }

    best.map(|(keyword, _)| keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typo_suggests_keyword() {
        let catalog = CommandCatalog::standard();
        assert_eq!(suggest_keyword(&catalog, "halp"), Some("help"));
        assert_eq!(suggest_keyword(&catalog, "tlak"), Some("talk"));
    }

    #[test]
    fn wrong_case_suggests_keyword() {
        let catalog = CommandCatalog::standard();
        assert_eq!(suggest_keyword(&catalog, "INFO"), Some("info"));
    }

    #[test]
    fn unrelated_word_has_no_suggestion() {
        let catalog = CommandCatalog::standard();
        assert_eq!(suggest_keyword(&catalog, "dance"), None);
        assert_eq!(suggest_keyword(&catalog, ""), None);
    }
}
