// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast store dispatch.
//!
//! Measures the performance of:
//! - Enqueuing toasts past the limit (eviction path)
//! - Dismissing and ticking with subscribed listeners

use criterion::{criterion_group, criterion_main, Criterion};
use pet_manager::ui::notifications::{ManualClock, StoreConfig, ToastOptions, ToastStore};
use std::hint::black_box;
use std::rc::Rc;
use std::time::Duration;

/// Benchmark enqueueing with eviction at several limits.
fn bench_toast_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_store");

    for limit in [1, 5, 20] {
        group.bench_function(format!("toast_limit_{limit}"), |b| {
            let store = ToastStore::new(StoreConfig::new(limit, Duration::from_secs(5)));
            b.iter(|| {
                let handle = store.toast(ToastOptions::titled("Saved"));
                black_box(handle.id());
            });
        });
    }

    group.finish();
}

/// Benchmark the full dismiss and removal cycle with listeners attached.
fn bench_dismiss_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_store");

    group.bench_function("dismiss_tick_with_listeners", |b| {
        let clock = Rc::new(ManualClock::new());
        let store = ToastStore::with_clock(
            StoreConfig::new(5, Duration::from_millis(10)),
            clock.clone(),
        );
        let _subscriptions: Vec<_> = (0..8)
            .map(|_| store.subscribe(|toasts| {
                black_box(toasts.len());
            }))
            .collect();

        b.iter(|| {
            for _ in 0..5 {
                store.toast(ToastOptions::titled("Queued"));
            }
            store.dismiss_all();
            clock.advance(Duration::from_millis(10));
            black_box(store.tick());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_toast_eviction, bench_dismiss_cycle);
criterion_main!(benches);
