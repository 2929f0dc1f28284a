use crate::tagger::Tagger;

/// Category names a buyer can filter on. Matching is exact and lowercase,
/// which is what transcripts deliver.
pub const CATEGORY_KEYWORDS: &[&str] = &["clothing", "groceries", "electronics"];

/// First token made only of digits. `"order 10 rice"` yields 10; `"rs.500"`
/// does not count because of the prefix. Figures too large for a count are
/// treated as absent.
pub fn first_count(text: &str) -> Option<u32> {
    text.split_whitespace()
        .find(|token| token.chars().all(|ch| ch.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
}

/// First token carrying at least one digit, with every non-digit stripped
/// before parsing. `"rs.500"` yields 500 and `"12.50"` yields 1250; there is
/// no decimal handling anywhere in the catalog.
pub fn first_price(text: &str) -> Option<u32> {
    let token = text
        .split_whitespace()
        .find(|token| token.chars().any(|ch| ch.is_ascii_digit()))?;
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Tokens that literally equal a recognized category keyword, in text order.
pub fn category_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|token| CATEGORY_KEYWORDS.contains(token))
        .map(|token| token.to_string())
        .collect()
}

/// Words the tagger marks noun or proper noun, lowercased, in text order,
/// duplicates kept. These are the item words every lookup runs on.
pub fn noun_words(tagger: &dyn Tagger, text: &str) -> Vec<String> {
    tagger
        .tag(text)
        .into_iter()
        .filter(|word| word.part.is_noun_like())
        .map(|word| word.text.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::tagger::LexiconTagger;

    use super::*;

    #[test]
    fn first_count_takes_only_pure_digit_tokens() {
        struct Case {
            text: &'static str,
            expected: Option<u32>,
        }

        let cases = vec![
            Case { text: "order 10 rice bags", expected: Some(10) },
            Case { text: "add 5 cotton saree for 500", expected: Some(5) },
            Case { text: "rs.500 then 3", expected: Some(3) },
            Case { text: "no digits here", expected: None },
            Case { text: "", expected: None },
            // Larger than any u32, so it counts as absent.
            Case { text: "order 99999999999 rice", expected: None },
        ];

        for (index, case) in cases.iter().enumerate() {
            assert_eq!(
                first_count(case.text),
                case.expected,
                "case {index}: `{}`",
                case.text
            );
        }
    }

    #[test]
    fn first_price_strips_non_digits_from_the_token() {
        struct Case {
            text: &'static str,
            expected: Option<u32>,
        }

        let cases = vec![
            Case { text: "for 500 and category clothing", expected: Some(500) },
            Case { text: "for rs.500", expected: Some(500) },
            Case { text: "for 12.50", expected: Some(1250) },
            Case { text: "for $1,200 total", expected: Some(1200) },
            Case { text: "for free", expected: None },
            Case { text: "", expected: None },
        ];

        for (index, case) in cases.iter().enumerate() {
            assert_eq!(
                first_price(case.text),
                case.expected,
                "case {index}: `{}`",
                case.text
            );
        }
    }

    #[test]
    fn category_words_match_exact_lowercase_tokens() {
        assert_eq!(
            category_words("search clothing and groceries"),
            vec!["clothing".to_string(), "groceries".to_string()]
        );
        // "Clothing" and "clothes" are not recognized keywords.
        assert!(category_words("search Clothing clothes").is_empty());
    }

    #[test]
    fn noun_words_keep_text_order_and_duplicates() {
        let tagger = LexiconTagger::new();

        assert_eq!(
            noun_words(&tagger, "remove the saree and the saree cover"),
            vec!["saree".to_string(), "saree".to_string(), "cover".to_string()]
        );
        assert!(noun_words(&tagger, "remove it now").is_empty());
    }
}
