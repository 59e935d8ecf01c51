//! Order price cache (C4): order reference → limit price.
//!
//! Populated by add-order messages, consulted by price-less executions.
//! Never evicted during a run — §9 notes this can grow unbounded over a full
//! trading day, and accepts that cost rather than adding an unmeasured LRU.

use ahash::AHashMap;

#[derive(Debug, Default)]
pub struct OrderPriceCache {
    by_ref: AHashMap<u64, f64>,
}

impl OrderPriceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, order_ref: u64, price: f64) {
        self.by_ref.insert(order_ref, price);
    }

    /// Price for a prior add-order, or `0.0` if the reference was never seen
    /// — the documented soft-fail behavior for `E` executions (§4.2).
    pub fn price_or_zero(&self, order_ref: u64) -> f64 {
        self.by_ref.get(&order_ref).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.by_ref.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ref.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_reference_returns_its_price() {
        let mut cache = OrderPriceCache::new();
        cache.insert(42, 100.5);
        assert_eq!(cache.price_or_zero(42), 100.5);
    }

    #[test]
    fn unknown_reference_soft_fails_to_zero() {
        let cache = OrderPriceCache::new();
        assert_eq!(cache.price_or_zero(999), 0.0);
    }

    #[test]
    fn reinsertion_overwrites() {
        let mut cache = OrderPriceCache::new();
        cache.insert(1, 10.0);
        cache.insert(1, 20.0);
        assert_eq!(cache.price_or_zero(1), 20.0);
    }
}
