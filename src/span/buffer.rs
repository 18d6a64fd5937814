//! Per-document, per-element occurrence buffer with exponential search.

use crate::core::types::ElementSpan;

/// A growable, reusable array of [`ElementSpan`], sorted by non-decreasing
/// `start_offset`, holding the occurrences of one query element within the
/// document currently loaded by its owning `PostingState`.
///
/// Capacity doubling happens implicitly through `Vec::push`'s amortized
/// growth; `reset` rewinds the logical length without releasing the
/// allocation, so the same buffer is reused document after document within
/// one query execution.
#[derive(Debug, Default)]
pub struct ElementSpanBuffer {
    data: Vec<ElementSpan>,
    qty: usize,
}

impl ElementSpanBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        ElementSpanBuffer { data: Vec::with_capacity(capacity), qty: 0 }
    }

    /// Rewinds the buffer to empty without shrinking its allocation.
    pub fn reset(&mut self) {
        self.qty = 0;
    }

    /// Appends a span. Caller must preserve the sorted-by-`start_offset`
    /// invariant (posting streams are guaranteed sorted at index time).
    pub fn push(&mut self, span: ElementSpan) {
        if self.qty < self.data.len() {
            self.data[self.qty] = span;
        } else {
            self.data.push(span);
        }
        self.qty += 1;
    }

    pub fn qty(&self) -> usize {
        self.qty
    }

    pub fn is_empty(&self) -> bool {
        self.qty == 0
    }

    pub fn get(&self, index: usize) -> ElementSpan {
        self.data[index]
    }

    pub fn as_slice(&self) -> &[ElementSpan] {
        &self.data[..self.qty]
    }

    /// Checks the non-decreasing `start_offset` invariant across
    /// `[0, qty)`. Intended for debug assertions / tests, not the hot path.
    pub fn is_sorted(&self) -> bool {
        self.as_slice().windows(2).all(|w| w[0].start_offset <= w[1].start_offset)
    }

    /// Returns the smallest index `i >= max(0, min_index)` with
    /// `buffer[i].start_offset > offset_to_exceed`, or `qty` if none exists.
    ///
    /// Protocol: up to `lin_search_iter` linear steps from `min_index`; if
    /// not found, an exponentially widening probe (stride doubling from 1,
    /// clamped to the end of the array); then a binary search over the
    /// probed range. The binary search's upper-bound comparison already
    /// routes ties (`start_offset == offset_to_exceed`) to the right half,
    /// which is exactly "scan forward to the first strictly greater entry".
    pub fn find_elem_larger_offset(
        &self,
        lin_search_iter: usize,
        offset_to_exceed: u32,
        min_index: usize,
    ) -> usize {
        let qty = self.qty;
        let mut indx1 = min_index;
        if indx1 >= qty {
            return qty;
        }

        // Linear phase.
        let lin_end = (indx1 + lin_search_iter).min(qty);
        for i in indx1..lin_end {
            if self.data[i].start_offset > offset_to_exceed {
                return i;
            }
        }
        indx1 = lin_end;
        if indx1 >= qty {
            return qty;
        }

        // Exponential doubling phase.
        let max_stride = qty - indx1;
        let mut d = 1usize.min(max_stride);
        loop {
            let probe = indx1 + d;
            if probe >= qty || self.data[probe].start_offset > offset_to_exceed {
                break;
            }
            if d >= max_stride {
                break;
            }
            d = (d * 2).min(max_stride);
        }
        let indx2 = (indx1 + d).min(qty);

        // Binary search for the leftmost strictly-greater entry in [indx1, indx2).
        let mut lo = indx1;
        let mut hi = indx2;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.data[mid].start_offset > offset_to_exceed {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }
}
