//! Per-element execution state, strictly thread-local to one query
//! execution.

use std::sync::Arc;

use crate::core::error::Result;
use crate::core::types::{DocId, ElementSpan, ElementType};
use crate::payload::codec;
use crate::posting::enumerator::PostingEnumerator;
use crate::query::ast::ConstraintKind;
use crate::span::buffer::ElementSpanBuffer;

/// Whether the owning node is the head or the dependent side of a
/// precomputed constraint edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintRole {
    Head,
    Dependent,
}

/// One precomputed edge a node must verify during `match`. Attached
/// to whichever of the edge's two endpoints has the larger `sort_index`, so
/// by the time recursion reaches this node the other endpoint's current
/// element is already fixed.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintCheck {
    /// Index of the other endpoint among the query's `PostingState`s.
    pub other: usize,
    pub kind: ConstraintKind,
    pub role: ConstraintRole,
}

/// Mutable, per-query-node state: the posting cursor, the decoded-occurrence
/// buffer for the document currently loaded, and everything the constraint
/// recursion needs to resolve this node without consulting shared state.
///
/// Never shared across threads or across concurrent executions — each call
/// into the engine builds a fresh set of these from the (shared, immutable)
/// `OrderedQuery` plus per-execution posting enumerators.
pub struct PostingState<E: PostingEnumerator> {
    enumerator: E,
    buffer: ElementSpanBuffer,
    cursor: usize,
    pub connect_qty: usize,
    pub component_id: usize,
    pub sort_index: usize,
    pub element_type: ElementType,
    pub label: Option<String>,
    pub constraint_index: Arc<Vec<ConstraintCheck>>,
}

impl<E: PostingEnumerator> PostingState<E> {
    pub fn new(
        enumerator: E,
        initial_buffer_capacity: usize,
        connect_qty: usize,
        component_id: usize,
        sort_index: usize,
        element_type: ElementType,
        label: Option<String>,
        constraint_index: Arc<Vec<ConstraintCheck>>,
    ) -> Self {
        PostingState {
            enumerator,
            buffer: ElementSpanBuffer::with_capacity(initial_buffer_capacity),
            cursor: 0,
            connect_qty,
            component_id,
            sort_index,
            element_type,
            label,
            constraint_index,
        }
    }

    pub fn doc_id(&self) -> DocId {
        self.enumerator.doc_id()
    }

    pub fn advance(&mut self, target: DocId) -> Result<DocId> {
        self.enumerator.advance(target)
    }

    pub fn next_doc(&mut self) -> Result<DocId> {
        self.enumerator.next_doc()
    }

    pub fn cost(&self) -> u64 {
        self.enumerator.cost()
    }

    /// Drains the current document's positions into the span buffer,
    /// decoding each payload (component A) into an `ElementSpan`. Resets
    /// the cursor to the start of the buffer.
    pub fn read_doc_elements(&mut self, max_payload_len: usize) -> Result<()> {
        self.buffer.reset();
        self.cursor = 0;
        let freq = self.enumerator.freq();
        for _ in 0..freq {
            let position = match self.enumerator.next_position()? {
                Some(p) => p,
                None => break,
            };
            let decoded = codec::decode(self.enumerator.payload(), max_payload_len)?;
            let _ = position;
            self.buffer.push(ElementSpan::new(
                decoded.annot_id,
                decoded.parent_id,
                decoded.start_offset,
                decoded.end_offset,
            ));
        }
        Ok(())
    }

    pub fn find_elem_larger_offset(&self, lin_search_iter: usize, offset_to_exceed: u32, min_index: usize) -> usize {
        self.buffer.find_elem_larger_offset(lin_search_iter, offset_to_exceed, min_index)
    }

    pub fn qty(&self) -> usize {
        self.buffer.qty()
    }

    pub fn set_curr_elem_index(&mut self, index: usize) {
        self.cursor = index;
    }

    pub fn curr_elem_index(&self) -> usize {
        self.cursor
    }

    pub fn get_curr_element(&self) -> Option<ElementSpan> {
        if self.cursor < self.buffer.qty() {
            Some(self.buffer.get(self.cursor))
        } else {
            None
        }
    }

    pub fn get_element(&self, index: usize) -> ElementSpan {
        self.buffer.get(index)
    }
}
