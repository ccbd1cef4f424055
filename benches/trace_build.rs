use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lis_trace::{build, StepCursor};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_sequence(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-10_000..10_000)).collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_build_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_trace_random");
    for &len in &[50usize, 100, 200, 400] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_sequence(&mut rng, len)
                },
                |seq| {
                    let before = rss_kib();
                    let trace = build(&seq);
                    let after = rss_kib();
                    criterion::black_box(trace.len());
                    eprintln!(
                        "RSS KiB delta (random {len}, {} steps): {}",
                        trace.len(),
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

// Sorted input maximises the number of recorded steps: n(n-1)/2 + 2.
fn bench_build_ascending(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_trace_ascending");
    group.sample_size(10);
    for &len in &[50usize, 100, 200] {
        let seq: Vec<i64> = (0..len as i64).collect();
        group.bench_function(format!("len_{len}"), |b| {
            b.iter(|| criterion::black_box(build(&seq)).len())
        });
    }
    group.finish();
}

fn bench_cursor_walk(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let trace = build(&random_sequence(&mut rng, 200));
    c.bench_function("cursor_walk_200", |b| {
        b.iter_batched(
            || StepCursor::new(trace.clone()),
            |mut cursor| {
                while cursor.advance() {}
                while cursor.retreat() {}
                criterion::black_box(cursor.position())
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_build_random,
    bench_build_ascending,
    bench_cursor_walk
);
criterion_main!(benches);
