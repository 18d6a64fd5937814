pub mod constraint_index;
pub mod intersection;
pub mod matcher;
pub mod ordering;
pub mod reporter;

use std::sync::Arc;

use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::DocId;
use crate::posting::enumerator::PostingEnumerator;
use crate::posting::state::{ConstraintCheck, PostingState};
use crate::query::ast::CompiledQuery;
use intersection::IntersectionDriver;
use reporter::MatchSink;

/// A `CompiledQuery` ordered by posting cost and connectivity, carrying the
/// precomputed per-node constraint index. Immutable once built and safely
/// shared by reference across concurrent executions of the same compiled
/// query against the same index generation.
pub struct OrderedQuery {
    pub compiled: Arc<CompiledQuery>,
    /// `order[sort_index] = original_index`.
    pub order: Vec<usize>,
    /// `sort_of[original_index] = sort_index`.
    pub sort_of: Vec<usize>,
    /// Indexed by sort index.
    pub constraint_index: Vec<Vec<ConstraintCheck>>,
}

impl OrderedQuery {
    /// Builds the ordering and constraint index from a compiled query and
    /// the current posting cost of each of its elements (original-index
    /// order, one entry per `compiled.elements`).
    pub fn build(compiled: Arc<CompiledQuery>, post_cost: &[u64]) -> Result<Self> {
        let (order, sort_of) = ordering::sort_order(&compiled, post_cost)?;
        let index = constraint_index::build(&compiled, &sort_of);
        Ok(OrderedQuery { compiled, order, sort_of, constraint_index: index })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Builds the per-execution `PostingState`s in ascending sort-index order
/// from the host's posting enumerators (supplied in original `CompiledQuery`
/// element order) and runs the full intersection + constraint-satisfaction
/// sweep, starting at `floor` (use `DocId(0)` for a full scan).
pub fn execute<E: PostingEnumerator>(
    ordered: &OrderedQuery,
    enumerators: Vec<E>,
    floor: DocId,
    config: &EngineConfig,
    sink: &mut dyn MatchSink,
) -> Result<()> {
    if enumerators.len() != ordered.len() {
        return Err(crate::core::error::Error::internal(format!(
            "got {} posting enumerators, query has {} elements",
            enumerators.len(),
            ordered.len()
        )));
    }

    let mut enumerators: Vec<Option<E>> = enumerators.into_iter().map(Some).collect();
    let mut states = Vec::with_capacity(ordered.len());

    for (sort_index, &original_index) in ordered.order.iter().enumerate() {
        let element = &ordered.compiled.elements[original_index];
        let enumerator = enumerators[original_index]
            .take()
            .ok_or_else(|| crate::core::error::Error::internal("enumerator already consumed"))?;
        states.push(PostingState::new(
            enumerator,
            config.initial_buffer_capacity,
            element.connect_qty,
            element.component_id,
            sort_index,
            element.element_type,
            element.label.clone(),
            Arc::new(ordered.constraint_index[sort_index].clone()),
        ));
    }

    let mut driver = IntersectionDriver::new(states);
    driver.run(floor, config, sink)
}
