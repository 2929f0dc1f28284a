use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Ordered product collection. Every lookup scans front to back and stops at
/// the first product the words reference, so insertion order is part of the
/// observable behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The two-item catalog used when no snapshot exists yet.
    pub fn starter() -> Self {
        Self::new(vec![
            Product::new("Cotton Saree", 500, "Clothing", 5),
            Product::new("Rice Bag", 300, "Groceries", 10),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// New products always append; duplicate titles are allowed and only the
    /// earlier one is ever reachable by reference.
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn first_referenced(&self, words: &[String]) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.is_referenced_by(words))
    }

    pub fn first_referenced_mut(&mut self, words: &[String]) -> Option<&mut Product> {
        self.products
            .iter_mut()
            .find(|product| product.is_referenced_by(words))
    }

    /// First product that the words reference, is not sold out and still has
    /// at least `quantity` units on hand.
    pub fn first_fulfillable_mut(
        &mut self,
        words: &[String],
        quantity: u32,
    ) -> Option<&mut Product> {
        self.products.iter_mut().find(|product| {
            product.is_referenced_by(words) && !product.ordered && product.quantity >= quantity
        })
    }

    pub fn remove_first_referenced(&mut self, words: &[String]) -> Option<Product> {
        let index = self
            .products
            .iter()
            .position(|product| product.is_referenced_by(words))?;
        Some(self.products.remove(index))
    }
}
