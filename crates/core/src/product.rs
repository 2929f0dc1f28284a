use serde::{Deserialize, Serialize};

/// One catalog entry. `ordered` flips to true only when an order drains the
/// stock to zero; assigning fresh stock clears it again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub price: u32,
    pub category: String,
    pub ordered: bool,
    pub quantity: u32,
}

impl Product {
    pub fn new(
        title: impl Into<String>,
        price: u32,
        category: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            title: title.into(),
            price,
            category: category.into(),
            ordered: false,
            quantity,
        }
    }

    /// Reference policy for spoken commands: a product is meant whenever any
    /// of the words appears somewhere in the lowercased title. An empty word
    /// list references nothing.
    pub fn is_referenced_by(&self, words: &[String]) -> bool {
        let title = self.title.to_lowercase();
        words.iter().any(|word| title.contains(word.as_str()))
    }

    /// Visible to buyers: never sold out and at least one unit left.
    pub fn in_stock(&self) -> bool {
        !self.ordered && self.quantity > 0
    }
}
