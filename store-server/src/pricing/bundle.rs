//! Offer bundle pricing
//!
//! An offer bundles several catalog products at a percentage discount.
//! Adding one to a cart materializes it into a single synthetic cart line
//! whose id is derived from the offer id (`offer-<id>`), so it can never
//! collide with a real product id, and which then travels through the
//! normal cart path like any other line.
//!
//! Product ids that no longer resolve in the catalog are silently excluded
//! from the bundle sum; a stale offer is a degraded price, not an error.

use shared::cart::CartLine;

use super::calculator::percentage_of;
use crate::db::models::{Offer, Product};

/// Bundle price in whole EGP
///
/// Sum of the resolvable product prices minus the percentage discount.
/// A flat `price` on the offer, when present, takes precedence over the
/// computed value.
pub fn bundle_price(offer: &Offer, products: &[Product]) -> i64 {
    if let Some(flat) = offer.price {
        return flat;
    }
    let total_original: i64 = products.iter().map(|p| p.price).sum();
    total_original - percentage_of(total_original, offer.discount_percentage)
}

/// Materialize an offer into a synthetic cart line
///
/// `products` are the already-resolved bundle members (missing ids simply
/// not among them). The line description records what the bundle includes
/// so the order snapshot stays readable after the offer is edited.
pub fn materialize_offer(offer: &Offer, products: &[Product]) -> CartLine {
    let raw_id = offer.id.as_ref().map(ToString::to_string).unwrap_or_default();
    let key = raw_id.strip_prefix("offers:").unwrap_or(&raw_id);

    let included: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    let description = if included.is_empty() {
        offer.description.clone()
    } else {
        format!("{}\nIncludes: {}", offer.description, included.join(", "))
    };

    CartLine {
        product_id: format!("offer-{key}"),
        name: offer.title.clone(),
        name_ar: offer.title_ar.clone(),
        price: bundle_price(offer, products),
        image: offer.image_url.clone().unwrap_or_default(),
        description,
        quantity: 1,
        selected_flavor: None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use surrealdb::RecordId;

    use super::*;

    fn product(name: &str, price: i64) -> Product {
        Product {
            id: None,
            name: name.into(),
            name_ar: name.into(),
            price,
            category: "protein".into(),
            image: String::new(),
            description: String::new(),
            description_ar: String::new(),
            flavors: vec![],
            in_stock: true,
            is_offer: false,
            original_price: None,
            discount_percentage: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn offer(discount_percentage: u32, price: Option<i64>) -> Offer {
        Offer {
            id: Some(RecordId::from_table_key("offers", "summer")),
            title: "Summer Stack".into(),
            title_ar: "باقة الصيف".into(),
            description: "Two best sellers".into(),
            description_ar: String::new(),
            discount_percentage,
            product_ids: vec!["products:a".into(), "products:b".into()],
            price,
            image_url: None,
            is_active: true,
            valid_until: Utc::now() + Duration::days(7),
            created_at: None,
        }
    }

    #[test]
    fn bundle_price_applies_percentage() {
        // 100 + 200 at 10% off: 300 - 30 = 270
        let products = vec![product("A", 100), product("B", 200)];
        assert_eq!(bundle_price(&offer(10, None), &products), 270);
    }

    #[test]
    fn flat_price_overrides_computed() {
        let products = vec![product("A", 100), product("B", 200)];
        assert_eq!(bundle_price(&offer(10, Some(249)), &products), 249);
    }

    #[test]
    fn empty_bundle_prices_at_zero() {
        assert_eq!(bundle_price(&offer(10, None), &[]), 0);
    }

    #[test]
    fn materialized_line_cannot_collide_with_catalog_ids() {
        let products = vec![product("Whey", 100), product("Creatine", 200)];
        let line = materialize_offer(&offer(10, None), &products);
        assert_eq!(line.product_id, "offer-summer");
        assert_eq!(line.price, 270);
        assert_eq!(line.quantity, 1);
        assert!(line.selected_flavor.is_none());
        assert!(line.description.contains("Includes: Whey, Creatine"));
    }
}
