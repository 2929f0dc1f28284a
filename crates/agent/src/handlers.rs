use shelfy_core::{Catalog, CategorySuggester, Product};

use crate::extract::{category_words, first_count, first_price, noun_words};
use crate::reply::{MatchHit, Reply, UsageHint};
use crate::tagger::Tagger;

/// `add [quantity] [item] for [price] and category [category]`
///
/// The command splits at the first "for": item words on the left, price and
/// optional category on the right. The title is the left side minus "add"
/// tokens and digit tokens, so the tagger is not involved.
pub fn add(command: &str, catalog: &mut Catalog, suggester: &CategorySuggester) -> Reply {
    let Some((item_clause, price_clause)) = command.split_once("for") else {
        return Reply::Usage(UsageHint::AddFormat);
    };

    let quantity = first_count(item_clause).unwrap_or(1);
    let title = item_clause
        .split_whitespace()
        .filter(|word| *word != "add" && !word.chars().all(|ch| ch.is_ascii_digit()))
        .collect::<Vec<_>>()
        .join(" ");

    let Some(price) = first_price(price_clause).filter(|price| *price > 0) else {
        return Reply::NoPriceDetected;
    };

    let category = stated_category(price_clause).unwrap_or_else(|| suggester.suggest(&title));

    catalog.push(Product::new(title.clone(), price, category.clone(), quantity));
    Reply::Added { title, price, category, quantity }
}

/// Everything after "and category", whitespace-normalized, in the casing the
/// speaker used. Absent or empty means the suggester decides.
fn stated_category(price_clause: &str) -> Option<String> {
    let marker = "and category";
    let position = price_clause.to_ascii_lowercase().find(marker)?;
    let tail = &price_clause[position + marker.len()..];
    let category = tail.split_whitespace().collect::<Vec<_>>().join(" ");
    (!category.is_empty()).then_some(category)
}

/// `remove [item]`
pub fn remove(command: &str, catalog: &mut Catalog, tagger: &dyn Tagger) -> Reply {
    let words = noun_words(tagger, command);
    if words.is_empty() {
        return Reply::Usage(UsageHint::RemoveHint);
    }

    match catalog.remove_first_referenced(&words) {
        Some(product) => Reply::Removed { title: product.title },
        None => Reply::NotFound,
    }
}

/// `assign no.of items [number] to [item]`
///
/// Splits at the first "to": count on the left, item words on the right. The
/// new quantity replaces the old one outright.
pub fn assign_quantity(command: &str, catalog: &mut Catalog, tagger: &dyn Tagger) -> Reply {
    let Some((quantity_clause, item_clause)) = command.split_once("to") else {
        return Reply::Usage(UsageHint::AssignFormat);
    };

    let Some(quantity) = first_count(quantity_clause).filter(|quantity| *quantity > 0) else {
        return Reply::InvalidQuantity;
    };

    let words = noun_words(tagger, item_clause);
    match catalog.first_referenced_mut(&words) {
        Some(product) => {
            product.quantity = quantity;
            // Stock is positive again, so the sold-out flag lifts.
            product.ordered = false;
            Reply::QuantityAssigned { quantity, title: product.title.clone() }
        }
        None => Reply::NotFound,
    }
}

/// `change price of [item] to [price]`
///
/// Splits at the first "to": item words on the left, the new price on the
/// right. The price must be a bare digit token, and the routing phrase is
/// dropped before tagging so "price" never counts as an item word.
pub fn change_price(command: &str, catalog: &mut Catalog, tagger: &dyn Tagger) -> Reply {
    let Some((item_clause, price_clause)) = command.split_once("to") else {
        return Reply::Usage(UsageHint::ChangePriceFormat);
    };

    let Some(price) = first_count(price_clause).filter(|price| *price > 0) else {
        return Reply::InvalidPrice;
    };

    let item_clause = item_clause.replace("change price of", "");
    let words = noun_words(tagger, &item_clause);
    match catalog.first_referenced_mut(&words) {
        Some(product) => {
            product.price = price;
            Reply::PriceChanged { title: product.title.clone(), price }
        }
        None => Reply::NotFound,
    }
}

/// `search [item/category] at [price]`
///
/// Each filter only engages when the command supplies it; a bare "search"
/// lists everything in stock. Sold-out products never appear.
pub fn search(command: &str, catalog: &Catalog, tagger: &dyn Tagger) -> Reply {
    let words = noun_words(tagger, command);
    let price = first_price(command);
    let categories = category_words(command);

    let hits: Vec<MatchHit> = catalog
        .products()
        .iter()
        .filter(|product| {
            let title_match = words.is_empty() || product.is_referenced_by(&words);
            let price_match = price.map_or(true, |price| product.price == price);
            let category_match = categories.is_empty()
                || categories.contains(&product.category.to_lowercase());
            title_match && price_match && category_match && product.in_stock()
        })
        .map(|product| MatchHit {
            title: product.title.clone(),
            price: product.price,
            quantity: product.quantity,
        })
        .collect();

    if hits.is_empty() {
        Reply::NoMatches
    } else {
        Reply::Matches(hits)
    }
}

/// `place order [quantity] [item]`
///
/// The first referenced product with enough stock takes the whole order.
/// Draining it to zero marks it sold out for every later command.
pub fn place_order(command: &str, catalog: &mut Catalog, tagger: &dyn Tagger) -> Reply {
    let words = noun_words(tagger, command);
    let quantity = first_count(command).unwrap_or(1);

    let Some(product) = catalog.first_fulfillable_mut(&words, quantity) else {
        return Reply::OrderUnavailable;
    };

    product.quantity -= quantity;
    let out_of_stock = product.quantity == 0;
    if out_of_stock {
        product.ordered = true;
    }

    Reply::OrderPlaced {
        quantity,
        title: product.title.clone(),
        unit_price: product.price,
        total: u64::from(quantity) * u64::from(product.price),
        out_of_stock,
    }
}
