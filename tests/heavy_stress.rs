#![cfg(feature = "heavy")]
use lis_trace::{build, utils::is_strictly_increasing};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// O(n log n) length via tails of increasing runs; used only as a reference.
fn patience_len(seq: &[i64]) -> usize {
    let mut tails: Vec<i64> = Vec::new();
    for &x in seq {
        let idx = tails.partition_point(|&t| t < x);
        if idx == tails.len() {
            tails.push(x);
        } else {
            tails[idx] = x;
        }
    }
    tails.len()
}

#[test]
fn heavy_random_matches_patience_reference() {
    let mut rng = StdRng::seed_from_u64(123);
    for len in [64usize, 128, 256, 400] {
        let seq: Vec<i64> = (0..len).map(|_| rng.gen_range(-1_000..1_000)).collect();
        let trace = build(&seq);
        assert_eq!(trace.lis().len(), patience_len(&seq), "len={len}");
        assert!(is_strictly_increasing(trace.lis()));
    }
}

#[test]
fn heavy_ascending_worst_case_step_count() {
    let n = 300usize;
    let seq: Vec<i64> = (0..n as i64).collect();
    let trace = build(&seq);
    assert_eq!(trace.len(), n * (n - 1) / 2 + 2);
    assert_eq!(trace.lis(), seq.as_slice());
}
