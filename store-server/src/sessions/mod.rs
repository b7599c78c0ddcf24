//! In-memory storefront sessions
//!
//! Each browser session owns one [`Session`] - a cart ledger plus a
//! checkout state machine - keyed by the client-chosen session id.
//! Sessions are created on first touch and live only in memory; there is
//! no durability requirement, worst case the visitor starts a fresh cart.
//!
//! The map is sharded (`DashMap`) and every mutation runs inside a single
//! entry lock, which matches the single-writer-per-session model: one
//! visitor, synchronous operations, no cross-session shared state.

use std::sync::Arc;

use dashmap::DashMap;

use shared::cart::Cart;

use crate::checkout::CheckoutSession;

/// One storefront visitor: cart + checkout
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub cart: Cart,
    pub checkout: CheckoutSession,
}

/// Shared session store - cheap to clone into handlers
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the session for `id`, creating it on first touch.
    ///
    /// The closure runs under the entry lock, so it must stay synchronous -
    /// never hold it across an `.await`.
    pub fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut entry = self.sessions.entry(id.to_string()).or_default();
        f(entry.value_mut())
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::cart::CartLine;

    fn line(product_id: &str) -> CartLine {
        CartLine {
            product_id: product_id.into(),
            name: "Elite Whey Protein".into(),
            name_ar: "بروتين إليت واي".into(),
            price: 850,
            image: String::new(),
            description: String::new(),
            quantity: 1,
            selected_flavor: None,
        }
    }

    #[test]
    fn sessions_are_created_on_first_touch() {
        let store = SessionStore::new();
        assert!(store.is_empty());

        let total = store.with_session("visitor-1", |s| {
            s.cart.add(line("p1"));
            s.cart.total_price()
        });
        assert_eq!(total, 850);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sessions_do_not_share_state() {
        let store = SessionStore::new();
        store.with_session("a", |s| s.cart.add(line("p1")));
        store.with_session("b", |s| s.cart.add(line("p2")));

        assert_eq!(store.with_session("a", |s| s.cart.total_items()), 1);
        assert_eq!(
            store.with_session("a", |s| s.cart.lines()[0].product_id.clone()),
            "p1"
        );
        assert_eq!(store.len(), 2);
    }
}
