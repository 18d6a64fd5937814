//! Match reporting.
//!
//! The engine itself never decides what to do with a match — it hands each
//! successful tuple to a host-provided sink. Two sinks are provided here:
//! one that dedupes at doc granularity into a `RoaringBitmap`, and one that
//! streams tuples to another thread over a channel.

use roaring::RoaringBitmap;

use crate::core::types::{DocId, ElementSpan};

/// Receives one successful match at a time. Returning `false` asks the
/// driver to stop enumerating further matches (e.g. a result-count cap).
pub trait MatchSink {
    fn on_match(&mut self, doc_id: DocId, tuple: &[ElementSpan]) -> bool;
}

/// Collects distinct matching doc ids, ignoring which occurrence tuple
/// produced each match. The host is responsible for this dedup if it wants
/// per-doc membership rather than per-tuple enumeration; this is the
/// default implementation of that responsibility.
#[derive(Debug, Default)]
pub struct DocIdCollector {
    matched: RoaringBitmap,
}

impl DocIdCollector {
    pub fn new() -> Self {
        DocIdCollector { matched: RoaringBitmap::new() }
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.matched.contains(doc_id.0)
    }

    pub fn len(&self) -> u64 {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn into_bitmap(self) -> RoaringBitmap {
        self.matched
    }
}

impl MatchSink for DocIdCollector {
    fn on_match(&mut self, doc_id: DocId, _tuple: &[ElementSpan]) -> bool {
        self.matched.insert(doc_id.0);
        true
    }
}

/// Streams full match tuples to another thread, e.g. a result-paging
/// worker, without buffering them all in memory first.
pub struct ChannelSink {
    sender: crossbeam::channel::Sender<(DocId, Vec<ElementSpan>)>,
}

impl ChannelSink {
    pub fn new(sender: crossbeam::channel::Sender<(DocId, Vec<ElementSpan>)>) -> Self {
        ChannelSink { sender }
    }
}

impl MatchSink for ChannelSink {
    fn on_match(&mut self, doc_id: DocId, tuple: &[ElementSpan]) -> bool {
        self.sender.send((doc_id, tuple.to_vec())).is_ok()
    }
}
