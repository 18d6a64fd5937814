//! Per-node constraint index precomputation.
//!
//! For each constraint edge `(head, dependent, kind)`, attach it to
//! whichever endpoint has the larger sort index — that node is the one
//! still unbound when the other is already fixed, so the check belongs on
//! its turn in the recursion.

use crate::posting::state::{ConstraintCheck, ConstraintRole};
use crate::query::ast::CompiledQuery;

/// Returns, indexed by sort index, the list of checks that node must run
/// when it tentatively binds a candidate occurrence.
pub fn build(compiled: &CompiledQuery, sort_of: &[usize]) -> Vec<Vec<ConstraintCheck>> {
    let n = compiled.elements.len();
    let mut index: Vec<Vec<ConstraintCheck>> = vec![Vec::new(); n];

    for edge in &compiled.edges {
        let head_sort = sort_of[edge.head];
        let dependent_sort = sort_of[edge.dependent];

        if head_sort >= dependent_sort {
            index[head_sort].push(ConstraintCheck {
                other: dependent_sort,
                kind: edge.kind,
                role: ConstraintRole::Head,
            });
        } else {
            index[dependent_sort].push(ConstraintCheck {
                other: head_sort,
                kind: edge.kind,
                role: ConstraintRole::Dependent,
            });
        }
    }

    index
}
