use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    shell::bench_dispatch,
    shell::bench_parse,
    shell::bench_help_fallback,
    shell::bench_mixed_batch
);
criterion_main!(benches);
