//! Sort-index computation feeding the intersection and constraint-matching
//! ordering.
//!
//! Elements are ordered by ascending `(min_comp_post_cost, -connect_qty)`:
//! cheapest connected component first, and within a component the
//! most-connected element first (it prunes the hardest).

use std::collections::HashMap;

use crate::core::error::{Error, Result};
use crate::query::ast::CompiledQuery;

/// Returns `(order, sort_of)` where `order[sortIndex] = originalIndex` and
/// `sort_of[originalIndex] = sortIndex`. `post_cost` is indexed by original
/// element index (one entry per `CompiledQuery::elements`).
pub fn sort_order(compiled: &CompiledQuery, post_cost: &[u64]) -> Result<(Vec<usize>, Vec<usize>)> {
    let n = compiled.elements.len();
    if post_cost.len() != n {
        return Err(Error::internal(format!(
            "post_cost has {} entries, expected {}",
            post_cost.len(),
            n
        )));
    }

    let mut min_comp_cost: HashMap<usize, u64> = HashMap::new();
    for (i, element) in compiled.elements.iter().enumerate() {
        min_comp_cost
            .entry(element.component_id)
            .and_modify(|cost| *cost = (*cost).min(post_cost[i]))
            .or_insert(post_cost[i]);
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        let cost_a = min_comp_cost[&compiled.elements[a].component_id];
        let cost_b = min_comp_cost[&compiled.elements[b].component_id];
        cost_a
            .cmp(&cost_b)
            .then_with(|| compiled.elements[b].connect_qty.cmp(&compiled.elements[a].connect_qty))
    });

    let mut sort_of = vec![0usize; n];
    for (sort_index, &original_index) in order.iter().enumerate() {
        sort_of[original_index] = sort_index;
    }

    Ok((order, sort_of))
}
