use std::collections::HashMap;

use parking_lot::RwLock;

use crate::query::ast::CompiledQuery;

/// Host-provided posting cost lookups, shared read-only across concurrent
/// query executions.
///
/// Posting cost is a property of the index (the term's `cost()` as reported by
/// its posting enumerator), not of any one execution, so many queries can
/// consult the same `IndexStats` concurrently while the host refreshes it
/// between index generations. Reads are far more frequent than writes, which
/// is exactly the access pattern `parking_lot::RwLock` is suited for.
pub struct IndexStats {
    post_cost: RwLock<HashMap<String, u64>>,
}

impl IndexStats {
    pub fn new() -> Self {
        IndexStats { post_cost: RwLock::new(HashMap::new()) }
    }

    pub fn set_post_cost(&self, token: &str, cost: u64) {
        self.post_cost.write().insert(token.to_string(), cost);
    }

    /// Looks up the last-known posting cost for a token, defaulting to 0
    /// (cheapest) for a token the host hasn't reported a cost for yet.
    pub fn post_cost(&self, token: &str) -> u64 {
        self.post_cost.read().get(token).copied().unwrap_or(0)
    }

    /// Looks up a cost vector in `CompiledQuery.elements` order, ready to
    /// hand to `OrderedQuery::build`.
    pub fn costs_for(&self, compiled: &CompiledQuery) -> Vec<u64> {
        compiled.elements.iter().map(|element| self.post_cost(&element.token)).collect()
    }
}

impl Default for IndexStats {
    fn default() -> Self {
        Self::new()
    }
}
