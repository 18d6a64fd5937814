use std::sync::Arc;

use annomatch::core::config::EngineConfig;
use annomatch::core::error::Result;
use annomatch::core::types::{DocId, ElementType};
use annomatch::engine::intersection::IntersectionDriver;
use annomatch::engine::reporter::DocIdCollector;
use annomatch::payload::codec;
use annomatch::posting::enumerator::PostingEnumerator;
use annomatch::posting::state::{ConstraintCheck, PostingState};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

struct SparsePostingList {
    doc: DocId,
    docs: Vec<DocId>,
    idx: usize,
    payload: Vec<u8>,
    consumed: bool,
}

impl SparsePostingList {
    fn new(docs: Vec<u32>) -> Self {
        let payload = codec::encode("w", 0, 1, 0, 0, 1024).unwrap();
        SparsePostingList { doc: DocId::NO_MORE_DOCS, docs: docs.into_iter().map(DocId).collect(), idx: 0, payload, consumed: false }
    }
}

impl PostingEnumerator for SparsePostingList {
    fn doc_id(&self) -> DocId {
        self.doc
    }

    fn advance(&mut self, target: DocId) -> Result<DocId> {
        while self.idx < self.docs.len() && self.docs[self.idx] < target {
            self.idx += 1;
        }
        self.doc = self.docs.get(self.idx).copied().unwrap_or(DocId::NO_MORE_DOCS);
        self.idx += 1;
        self.consumed = false;
        Ok(self.doc)
    }

    fn next_doc(&mut self) -> Result<DocId> {
        self.doc = self.docs.get(self.idx).copied().unwrap_or(DocId::NO_MORE_DOCS);
        self.idx += 1;
        self.consumed = false;
        Ok(self.doc)
    }

    fn freq(&self) -> u32 {
        1
    }

    fn next_position(&mut self) -> Result<Option<u32>> {
        if self.consumed {
            Ok(None)
        } else {
            self.consumed = true;
            Ok(Some(0))
        }
    }

    fn payload(&self) -> &[u8] {
        &self.payload
    }

    fn cost(&self) -> u64 {
        self.docs.len() as u64
    }
}

fn sparse_docs(n: usize, density: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut docs = Vec::with_capacity(n);
    let mut doc = 0u32;
    for _ in 0..n {
        doc += rng.gen_range(1..density);
        docs.push(doc);
    }
    docs
}

fn bench_two_posting_intersection(c: &mut Criterion) {
    c.bench_function("intersection/two 5k-doc postings", |b| {
        b.iter(|| {
            let states = vec![
                PostingState::new(
                    SparsePostingList::new(sparse_docs(5_000, 5, 1)),
                    16,
                    0,
                    0,
                    0,
                    ElementType::Token,
                    None,
                    Arc::new(Vec::<ConstraintCheck>::new()),
                ),
                PostingState::new(
                    SparsePostingList::new(sparse_docs(5_000, 5, 2)),
                    16,
                    0,
                    0,
                    1,
                    ElementType::Token,
                    None,
                    Arc::new(Vec::<ConstraintCheck>::new()),
                ),
            ];
            let mut driver = IntersectionDriver::new(states);
            let mut sink = DocIdCollector::new();
            driver.run(DocId(0), &EngineConfig::default(), &mut sink).unwrap();
        })
    });
}

criterion_group!(benches, bench_two_posting_intersection);
criterion_main!(benches);
