//! The host-supplied posting iterator contract.
//!
//! This crate never reads an index directly — it drives whatever posting
//! representation the host's inverted index exposes through this trait.
//! Implementations are expected to be cheap to advance and are used from a
//! single thread for the lifetime of one query execution.

use crate::core::error::Result;
use crate::core::types::DocId;

/// One term's posting list, positioned at a single current document.
///
/// Call sequence within a document: `doc_id()` to read the current pointer,
/// then `freq()` followed by exactly that many `next_position()` calls to
/// drain positions (each paired with a `payload()` read), before advancing
/// to the next document with `advance` or `next_doc`.
pub trait PostingEnumerator {
    /// The document the enumerator is currently positioned at, or
    /// `DocId::NO_MORE_DOCS` before the first advance / after exhaustion.
    fn doc_id(&self) -> DocId;

    /// Advances to the first document with id `>= target`, returning it
    /// (or `NO_MORE_DOCS` if the posting list is exhausted).
    fn advance(&mut self, target: DocId) -> Result<DocId>;

    /// Advances to the next document in the posting list.
    fn next_doc(&mut self) -> Result<DocId>;

    /// Number of occurrences (positions) of this term within the current document.
    fn freq(&self) -> u32;

    /// Returns the next position within the current document, or `None`
    /// once `freq()` positions have been consumed.
    fn next_position(&mut self) -> Result<Option<u32>>;

    /// The raw payload attached to the position last returned by
    /// `next_position` (decoded by the payload codec).
    fn payload(&self) -> &[u8];

    /// An estimate of this posting list's total length, used by the
    /// intersection driver and constraint ordering to process cheaper
    /// postings first.
    fn cost(&self) -> u64;
}
