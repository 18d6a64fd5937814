//! The constraint-satisfaction recursion — the core of this crate.

use std::sync::Arc;

use crate::core::config::EngineConfig;
use crate::core::error::{Error, Result};
use crate::core::types::{DocId, ElementSpan};
use crate::engine::reporter::MatchSink;
use crate::posting::enumerator::PostingEnumerator;
use crate::posting::state::{ConstraintCheck, ConstraintRole, PostingState};
use crate::query::ast::ConstraintKind;

fn satisfies(kind: ConstraintKind, constraining: ElementSpan, dependent: ElementSpan) -> bool {
    match kind {
        ConstraintKind::Parent => dependent.parent_id == constraining.id,
        ConstraintKind::Contains => {
            constraining.start_offset <= dependent.start_offset && dependent.end_offset <= constraining.end_offset
        }
    }
}

/// Drives `match(i)` over `states[0..]`, ordered by ascending sort index,
/// for the document currently loaded into every state's element buffer.
/// Returns `false` as soon as `sink.on_match` asks to stop.
pub fn run<E: PostingEnumerator>(
    states: &mut [PostingState<E>],
    i: usize,
    config: &EngineConfig,
    doc_id: DocId,
    sink: &mut dyn MatchSink,
) -> Result<bool> {
    let k = states.len();
    if i == k {
        let mut tuple = Vec::with_capacity(k);
        for state in states.iter() {
            let elem = state
                .get_curr_element()
                .ok_or_else(|| Error::internal("match emission with no current element bound"))?;
            tuple.push(elem);
        }
        return Ok(sink.on_match(doc_id, &tuple));
    }

    let checks: Arc<Vec<ConstraintCheck>> = Arc::clone(&states[i].constraint_index);
    let qty = states[i].qty();

    // CONTAINS pruning: the buffer is sorted by start_offset, so once a
    // dependent's start_offset exceeds its constraining element's
    // end_offset, no later candidate in this buffer can satisfy it either.
    let mut upper_bound = qty;
    {
        let (fixed, rest) = states.split_at_mut(i);
        let current = &rest[0];
        for check in checks.iter() {
            if check.kind == ConstraintKind::Contains && check.role == ConstraintRole::Dependent {
                let constraining = fixed[check.other]
                    .get_curr_element()
                    .ok_or_else(|| Error::internal("constraining node has no current element"))?;
                let bound = current.find_elem_larger_offset(config.default_lin_search_iter, constraining.end_offset, 0);
                upper_bound = upper_bound.min(bound);
            }
        }
    }

    for j in 0..upper_bound {
        let passed: Result<bool> = (|| {
            let (fixed, rest) = states.split_at_mut(i);
            let current = &mut rest[0];
            current.set_curr_elem_index(j);
            let elem = current
                .get_curr_element()
                .ok_or_else(|| Error::internal("set_curr_elem_index did not yield a current element"))?;

            for check in checks.iter() {
                let other = fixed[check.other]
                    .get_curr_element()
                    .ok_or_else(|| Error::internal("other constraint endpoint has no current element"))?;
                let (constraining, dependent) = match check.role {
                    ConstraintRole::Head => (elem, other),
                    ConstraintRole::Dependent => (other, elem),
                };
                if !satisfies(check.kind, constraining, dependent) {
                    return Ok(false);
                }
            }
            Ok(true)
        })();

        if passed? {
            if !run(states, i + 1, config, doc_id, sink)? {
                return Ok(false);
            }
        }
    }

    Ok(true)
}
