use serde::{Deserialize, Serialize};

/// Document identifier as produced by the host's posting enumerator.
///
/// `NO_MORE_DOCS` is the exhausted-iterator sentinel, following the same
/// convention as the Lucene-derived posting designs this crate's posting
/// enumerator contract is modeled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u32);

impl DocId {
    pub const NO_MORE_DOCS: DocId = DocId(u32::MAX);

    pub fn is_exhausted(self) -> bool {
        self == Self::NO_MORE_DOCS
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

/// One occurrence of a query element within one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpan {
    /// The occurrence's own annotation id, 0 for plain tokens.
    pub id: u64,
    /// The parent annotation id, 0 if none.
    pub parent_id: u64,
    pub start_offset: u32,
    pub end_offset: u32,
}

impl ElementSpan {
    pub fn new(id: u64, parent_id: u64, start_offset: u32, end_offset: u32) -> Self {
        ElementSpan { id, parent_id, start_offset, end_offset }
    }
}

/// Whether a query element is a plain text token or an annotation term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementType {
    Token,
    Annotation,
}
