//! Galloping AND-intersection across posting states.
//!
//! Repeatedly advances every lagging state to the current maximum doc id
//! until all states agree, then hands the common document to the
//! constraint-satisfaction recursion.

use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::DocId;
use crate::engine::matcher;
use crate::engine::reporter::MatchSink;
use crate::posting::enumerator::PostingEnumerator;
use crate::posting::state::PostingState;

/// Owns the per-node `PostingState`s for one query execution, already in
/// ascending sort-index order.
pub struct IntersectionDriver<E: PostingEnumerator> {
    states: Vec<PostingState<E>>,
}

impl<E: PostingEnumerator> IntersectionDriver<E> {
    pub fn new(states: Vec<PostingState<E>>) -> Self {
        IntersectionDriver { states }
    }

    /// Runs the full intersection + constraint-satisfaction sweep starting
    /// from doc id `floor` (use `DocId(0)` for a full scan; a higher floor
    /// supports host-side pagination).
    pub fn run(&mut self, floor: DocId, config: &EngineConfig, sink: &mut dyn MatchSink) -> Result<()> {
        if self.states.is_empty() {
            return Ok(());
        }

        for state in self.states.iter_mut() {
            if state.advance(floor)?.is_exhausted() {
                return Ok(());
            }
        }

        loop {
            let target = self.states.iter().map(|s| s.doc_id()).max().unwrap();

            for state in self.states.iter_mut() {
                if state.doc_id() < target && state.advance(target)?.is_exhausted() {
                    return Ok(());
                }
            }

            let doc_id = self.states[0].doc_id();
            if self.states.iter().any(|s| s.doc_id() != doc_id) {
                continue;
            }

            for state in self.states.iter_mut() {
                state.read_doc_elements(config.max_payload_len)?;
            }

            if !matcher::run(&mut self.states, 0, config, doc_id, sink)? {
                return Ok(());
            }

            for state in self.states.iter_mut() {
                if state.next_doc()?.is_exhausted() {
                    return Ok(());
                }
            }
        }
    }
}
