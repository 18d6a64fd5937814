use annomatch::core::types::ElementSpan;
use annomatch::span::buffer::ElementSpanBuffer;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn buffer_with_occurrences(n: usize, seed: u64) -> ElementSpanBuffer {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut buf = ElementSpanBuffer::with_capacity(n);
    let mut offset = 0u32;
    for _ in 0..n {
        offset += rng.gen_range(0..4);
        buf.push(ElementSpan::new(0, 0, offset, offset + 1));
    }
    buf
}

fn bench_find_elem_larger_offset(c: &mut Criterion) {
    let buf = buffer_with_occurrences(10_000, 7);
    c.bench_function("find_elem_larger_offset/10k occurrences", |b| {
        b.iter(|| {
            let target = black_box(buf.qty() as u32 / 2);
            buf.find_elem_larger_offset(4, target, 0)
        })
    });
}

criterion_group!(benches, bench_find_elem_larger_offset);
criterion_main!(benches);
