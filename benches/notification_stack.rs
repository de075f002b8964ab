// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification stack.
//!
//! Measures the performance of:
//! - Pushing into a full stack (eviction + restacking)
//! - Draining a full stack through its timers

use criterion::{criterion_group, criterion_main, Criterion};
use herald::config::Config;
use herald::surface::Tree;
use herald::timer::TimerQueue;
use herald::Herald;
use std::hint::black_box;
use std::time::Duration;

fn full_center() -> Herald<Tree, TimerQueue> {
    let mut herald = Herald::new(Config::default(), Tree::new(), TimerQueue::new());
    for i in 0..Config::default().max_notifications() {
        herald.notify(&format!("notification {i}"));
    }
    herald
}

/// Benchmark pushing into a stack that is already at its ceiling.
fn bench_push_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_stack");

    group.bench_function("push_with_eviction", |b| {
        let mut herald = full_center();
        b.iter(|| {
            herald.notify(black_box("evicting the oldest notification"));
        });
    });

    group.finish();
}

/// Benchmark the full lifecycle of a full stack.
fn bench_expire_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_stack");

    group.bench_function("expire_all", |b| {
        b.iter(|| {
            let mut herald = full_center();
            herald.advance(Duration::from_secs(5));
            black_box(&herald);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_with_eviction, bench_expire_all);
criterion_main!(benches);
