// model = "claude-opus-4-5"
// created = 2026-02-05
// modified = 2026-02-05
// driver = "Isaac Clayton"

//! Criterion micro-benchmarks for the hot view paths: translated
//! reads, binary search, and the two sort strategies.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pane::list::FixedList;
use pane::search;
use pane::store::as_cells;
use pane::window::Window;

const LEN: usize = 64 * 1024;

fn bench_translated_reads(c: &mut Criterion) {
    let mut buf: Vec<i64> = (0..LEN as i64).collect();
    let store = as_cells(&mut buf);
    let window = Window::with_bounds(store, LEN / 4, 3 * LEN / 4).unwrap();

    c.bench_function("window_sum_reads", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for thumb in 0..window.len() {
                sum = sum.wrapping_add(window.get(black_box(thumb)).unwrap());
            }
            sum
        })
    });
}

fn bench_binary_search(c: &mut Criterion) {
    let mut buf: Vec<i64> = (0..LEN as i64).map(|v| v * 2).collect();
    let store = as_cells(&mut buf);
    let window = Window::new(store);

    c.bench_function("binary_search_hit", |b| {
        b.iter(|| search::binary_search(&window, black_box(LEN as i64)))
    });
    c.bench_function("binary_search_miss", |b| {
        b.iter(|| search::binary_search(&window, black_box(LEN as i64 + 1)))
    });
}

fn bench_sorts(c: &mut Criterion) {
    c.bench_function("heapsort_in_place", |b| {
        b.iter_with_setup(
            || (0..LEN as i64).rev().collect::<Vec<i64>>(),
            |mut buf| {
                let list = FixedList::from_store(as_cells(&mut buf));
                list.sort();
            },
        )
    });

    c.bench_function("comparator_sort_staged", |b| {
        b.iter_with_setup(
            || (0..LEN as i64).rev().collect::<Vec<i64>>(),
            |mut buf| {
                let list = FixedList::from_store(as_cells(&mut buf));
                list.sort_by(|a, b| a.cmp(b));
            },
        )
    });
}

criterion_group!(benches, bench_translated_reads, bench_binary_search, bench_sorts);
criterion_main!(benches);
