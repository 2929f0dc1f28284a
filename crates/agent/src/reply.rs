/// One row of a search result listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchHit {
    pub title: String,
    pub price: u32,
    pub quantity: u32,
}

/// Format guidance spoken when a command routed but could not be carried
/// out, or did not route at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UsageHint {
    AddFormat,
    RemoveHint,
    AssignFormat,
    ChangePriceFormat,
    SellerHelp,
    BuyerHelp,
}

/// Outcome of one dispatched command. Every variant renders to exactly one
/// sentence the assistant speaks back; user mistakes are replies here, not
/// errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Added { title: String, price: u32, category: String, quantity: u32 },
    Removed { title: String },
    QuantityAssigned { quantity: u32, title: String },
    PriceChanged { title: String, price: u32 },
    Matches(Vec<MatchHit>),
    NoMatches,
    OrderPlaced { quantity: u32, title: String, unit_price: u32, total: u64, out_of_stock: bool },
    /// A seller referenced an item no catalog scan could find.
    NotFound,
    /// One sentence for three causes: unknown item, already sold out, or not
    /// enough stock. Buyers cannot tell which one happened.
    OrderUnavailable,
    NoPriceDetected,
    InvalidQuantity,
    InvalidPrice,
    Usage(UsageHint),
}

impl Reply {
    /// True when dispatch must persist the catalog before handing the reply
    /// back.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Added { .. }
                | Self::Removed { .. }
                | Self::QuantityAssigned { .. }
                | Self::PriceChanged { .. }
                | Self::OrderPlaced { .. }
        )
    }

    /// The exact sentence spoken back to the user.
    pub fn render(&self) -> String {
        match self {
            Self::Added { title, price, category, quantity } => format!(
                "Added {title} at {price} per item in {category} with quantity {quantity}."
            ),
            Self::Removed { title } => format!("Removed {title} from the catalog."),
            Self::QuantityAssigned { quantity, title } => {
                format!("Assigned quantity {quantity} to {title}.")
            }
            Self::PriceChanged { title, price } => {
                format!("Changed price of {title} to {price} per item.")
            }
            Self::Matches(hits) => {
                let listing = hits
                    .iter()
                    .map(|hit| {
                        format!("{} at {} per item ({} available)", hit.title, hit.price, hit.quantity)
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Found items: {listing}")
            }
            Self::NoMatches => "No matching items found.".to_string(),
            Self::OrderPlaced { quantity, title, unit_price, total, out_of_stock } => {
                let status = if *out_of_stock { " (out of stock)" } else { "" };
                format!(
                    "Ordered {quantity} {title}(s) at {unit_price} per item. \
                     Total price: {total}{status}."
                )
            }
            Self::NotFound => "Item not found.".to_string(),
            Self::OrderUnavailable => {
                "Item not found, out of stock, or insufficient quantity.".to_string()
            }
            Self::NoPriceDetected => {
                "Invalid or no price detected. Please include a numeric price.".to_string()
            }
            Self::InvalidQuantity => "Invalid quantity. Please say a positive number.".to_string(),
            Self::InvalidPrice => "Invalid price. Please say a positive number.".to_string(),
            Self::Usage(hint) => hint.render().to_string(),
        }
    }
}

impl UsageHint {
    pub fn render(self) -> &'static str {
        match self {
            Self::AddFormat => {
                "Please use format 'add [quantity] [item] for [price] and category [category]'."
            }
            Self::RemoveHint => "Please say 'remove [item]' to remove an item.",
            Self::AssignFormat => "Please use format 'assign quantity [number] to [item]'.",
            Self::ChangePriceFormat => {
                "Please use format 'change price of [item] to [price]'."
            }
            Self::SellerHelp => {
                "Please say 'add [quantity] [item] for [price] and category [category]', \
                 'remove [item]', 'assign quantity [number] to [item]', or \
                 'change price of [item] to [price]'."
            }
            Self::BuyerHelp => {
                "Please say 'search [item/category] at [price]' or \
                 'place order [quantity] [item]'."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutating_replies_are_exactly_the_catalog_writes() {
        let mutating = vec![
            Reply::Added {
                title: "x".to_string(),
                price: 1,
                category: "y".to_string(),
                quantity: 1,
            },
            Reply::Removed { title: "x".to_string() },
            Reply::QuantityAssigned { quantity: 1, title: "x".to_string() },
            Reply::PriceChanged { title: "x".to_string(), price: 1 },
            Reply::OrderPlaced {
                quantity: 1,
                title: "x".to_string(),
                unit_price: 1,
                total: 1,
                out_of_stock: false,
            },
        ];
        for reply in &mutating {
            assert!(reply.mutates(), "{reply:?} must persist");
        }

        let read_only = vec![
            Reply::Matches(vec![]),
            Reply::NoMatches,
            Reply::NotFound,
            Reply::OrderUnavailable,
            Reply::NoPriceDetected,
            Reply::InvalidQuantity,
            Reply::InvalidPrice,
            Reply::Usage(UsageHint::SellerHelp),
        ];
        for reply in &read_only {
            assert!(!reply.mutates(), "{reply:?} must not persist");
        }
    }

    #[test]
    fn rendered_sentences_match_the_spoken_contract() {
        let added = Reply::Added {
            title: "cotton saree".to_string(),
            price: 500,
            category: "clothing".to_string(),
            quantity: 5,
        };
        assert_eq!(
            added.render(),
            "Added cotton saree at 500 per item in clothing with quantity 5."
        );

        let removed = Reply::Removed { title: "Cotton Saree".to_string() };
        assert_eq!(removed.render(), "Removed Cotton Saree from the catalog.");

        let assigned = Reply::QuantityAssigned { quantity: 10, title: "Rice Bag".to_string() };
        assert_eq!(assigned.render(), "Assigned quantity 10 to Rice Bag.");

        let changed = Reply::PriceChanged { title: "Rice Bag".to_string(), price: 350 };
        assert_eq!(changed.render(), "Changed price of Rice Bag to 350 per item.");
    }

    #[test]
    fn search_listing_joins_hits_with_commas() {
        let matches = Reply::Matches(vec![
            MatchHit { title: "Cotton Saree".to_string(), price: 500, quantity: 5 },
            MatchHit { title: "Rice Bag".to_string(), price: 300, quantity: 10 },
        ]);

        assert_eq!(
            matches.render(),
            "Found items: Cotton Saree at 500 per item (5 available), \
             Rice Bag at 300 per item (10 available)"
        );
    }

    #[test]
    fn order_confirmation_carries_the_out_of_stock_marker() {
        let in_stock = Reply::OrderPlaced {
            quantity: 2,
            title: "Rice Bag".to_string(),
            unit_price: 300,
            total: 600,
            out_of_stock: false,
        };
        assert_eq!(
            in_stock.render(),
            "Ordered 2 Rice Bag(s) at 300 per item. Total price: 600."
        );

        let drained = Reply::OrderPlaced {
            quantity: 5,
            title: "Cotton Saree".to_string(),
            unit_price: 500,
            total: 2500,
            out_of_stock: true,
        };
        assert_eq!(
            drained.render(),
            "Ordered 5 Cotton Saree(s) at 500 per item. Total price: 2500 (out of stock)."
        );
    }

    #[test]
    fn usage_guidance_is_role_and_intent_specific() {
        assert_eq!(
            Reply::Usage(UsageHint::AddFormat).render(),
            "Please use format 'add [quantity] [item] for [price] and category [category]'."
        );
        assert_eq!(
            Reply::Usage(UsageHint::RemoveHint).render(),
            "Please say 'remove [item]' to remove an item."
        );
        assert_eq!(
            Reply::Usage(UsageHint::AssignFormat).render(),
            "Please use format 'assign quantity [number] to [item]'."
        );
        assert_eq!(
            Reply::Usage(UsageHint::ChangePriceFormat).render(),
            "Please use format 'change price of [item] to [price]'."
        );
        assert_eq!(
            Reply::Usage(UsageHint::SellerHelp).render(),
            "Please say 'add [quantity] [item] for [price] and category [category]', \
             'remove [item]', 'assign quantity [number] to [item]', or \
             'change price of [item] to [price]'."
        );
        assert_eq!(
            Reply::Usage(UsageHint::BuyerHelp).render(),
            "Please say 'search [item/category] at [price]' or 'place order [quantity] [item]'."
        );
    }
}
