//! Session cart ledger
//!
//! In-memory ordered collection of line items for a single storefront
//! session. One writer per session; all operations are synchronous.
//!
//! Line identity is the pair (product id, selected flavor): the same product
//! in two flavors yields two lines, while adding the same product + flavor
//! again merges into the existing line.

use serde::{Deserialize, Serialize};

/// A cart line: product snapshot + quantity + optional flavor.
///
/// The snapshot fields are copied from the catalog at add time so that order
/// records keep the name and price the customer actually saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub name_ar: String,
    /// Unit price in whole EGP
    pub price: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_flavor: Option<String>,
}

impl CartLine {
    /// Line total in whole EGP
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }

    fn matches(&self, product_id: &str, flavor: Option<&str>) -> bool {
        self.product_id == product_id && self.selected_flavor.as_deref() == flavor
    }
}

/// The cart ledger for one session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a line, merging with an existing (product, flavor) line by
    /// summing quantities. Insertion order of first-seen lines is preserved.
    pub fn add(&mut self, item: CartLine) {
        match self
            .lines
            .iter_mut()
            .find(|l| l.matches(&item.product_id, item.selected_flavor.as_deref()))
        {
            Some(existing) => existing.quantity += item.quantity,
            None => self.lines.push(item),
        }
    }

    /// Remove every line for the given product id.
    ///
    /// Flavor-insensitive: all flavor variants of the product are removed at
    /// once. Per-flavor removal would need (product, flavor) as the key.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Set the quantity on every line for the given product id.
    ///
    /// A quantity of zero or below removes the product entirely; a line is
    /// never kept at quantity 0.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        let quantity = quantity as u32;
        for line in self.lines.iter_mut().filter(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total unit count across all lines
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Subtotal in whole EGP: sum of price × quantity. No delivery fee or
    /// discount applied here.
    pub fn total_price(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: &str, price: i64, flavor: Option<&str>) -> CartLine {
        CartLine {
            product_id: product_id.into(),
            name: "Elite Whey Protein".into(),
            name_ar: "بروتين إليت واي".into(),
            price,
            image: String::new(),
            description: String::new(),
            quantity: 1,
            selected_flavor: flavor.map(Into::into),
        }
    }

    #[test]
    fn add_merges_same_product_and_flavor() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add(line("p1", 850, Some("Chocolate")));
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.total_price(), 2550);
    }

    #[test]
    fn add_keeps_flavor_variants_distinct() {
        let mut cart = Cart::new();
        cart.add(line("p1", 850, Some("Chocolate")));
        cart.add(line("p1", 850, Some("Vanilla")));
        cart.add(line("p1", 850, None));
        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn remove_is_flavor_insensitive() {
        let mut cart = Cart::new();
        cart.add(line("p1", 850, Some("Chocolate")));
        cart.add(line("p1", 850, Some("Vanilla")));
        cart.add(line("p2", 450, None));
        cart.remove("p1");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product_id, "p2");
    }

    #[test]
    fn update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(line("p1", 850, None));
        cart.update_quantity("p1", 0);
        assert!(cart.is_empty());

        cart.add(line("p1", 850, None));
        cart.update_quantity("p1", -2);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add(line("p1", 850, None));
        cart.update_quantity("p1", 4);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), 3400);
    }

    #[test]
    fn totals_reflect_mutations() {
        let mut cart = Cart::new();
        cart.add(line("p1", 100, None));
        cart.add(line("p2", 200, None));
        assert_eq!(cart.total_price(), 300);
        assert_eq!(cart.total_price(), 300); // repeated reads are stable
        cart.remove("p2");
        assert_eq!(cart.total_price(), 100);
        cart.clear();
        assert_eq!(cart.total_price(), 0);
        assert_eq!(cart.total_items(), 0);
    }
}
