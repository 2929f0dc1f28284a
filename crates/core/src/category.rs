/// Keyword table consulted when the speaker names no category. The scan is
/// over the lowercased title, first hit wins, so rule order is part of the
/// contract.
#[derive(Clone, Debug)]
pub struct CategorySuggester {
    rules: Vec<CategoryRule>,
}

#[derive(Clone, Debug)]
pub struct CategoryRule {
    pub keyword: String,
    pub category: String,
}

impl CategoryRule {
    pub fn new(keyword: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            category: category.into(),
        }
    }
}

/// Category recorded when no rule fires.
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

impl Default for CategorySuggester {
    fn default() -> Self {
        Self::new(vec![
            CategoryRule::new("saree", "Clothing"),
            CategoryRule::new("rice", "Groceries"),
            CategoryRule::new("phone", "Electronics"),
            CategoryRule::new("cotton", "Clothing"),
            CategoryRule::new("mobile", "Electronics"),
            CategoryRule::new("iron", "Electronics"),
        ])
    }
}

impl CategorySuggester {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn suggest(&self, title: &str) -> String {
        let title = title.to_lowercase();
        self.rules
            .iter()
            .find(|rule| title.contains(rule.keyword.as_str()))
            .map(|rule| rule.category.clone())
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string())
    }
}
