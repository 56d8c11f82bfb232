// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast notification lifecycle.
//!
//! Measures the performance of:
//! - A full present / enter / auto-dismiss / remove cycle
//! - Rapid replacement of the displayed toast
//! - The site-level gallery click path (translation + toast + press timer)

use criterion::{criterion_group, criterion_main, Criterion};
use iced_showcase::application::port::timer::ManualScheduler;
use iced_showcase::config::Config;
use iced_showcase::i18n::I18n;
use iced_showcase::site::{Site, SiteTimer};
use iced_showcase::ui::notifications::{Kind, Manager, TimerEvent};
use std::hint::black_box;
use std::time::Duration;

/// Benchmark one complete toast lifetime under the virtual clock.
fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_cycle");

    group.bench_function("present_to_removal", |b| {
        b.iter(|| {
            let mut scheduler = ManualScheduler::<TimerEvent>::new();
            let mut manager = Manager::new();
            manager.present(&mut scheduler, "Saved", Kind::Success);
            let deadline = Duration::from_millis(5300);
            while let Some(event) = scheduler.pop_due(deadline) {
                manager.handle_timer(&mut scheduler, event);
            }
            black_box(manager.visible_count());
        });
    });

    group.bench_function("replace_100", |b| {
        b.iter(|| {
            let mut scheduler = ManualScheduler::<TimerEvent>::new();
            let mut manager = Manager::new();
            for i in 0..100 {
                manager.present(&mut scheduler, format!("message {i}"), Kind::Info);
            }
            black_box(scheduler.pending_count());
        });
    });

    group.finish();
}

/// Benchmark the gallery click path including message formatting.
fn bench_gallery_click(c: &mut Criterion) {
    let config = Config::default();
    let i18n = I18n::new(Some("en-US".into()), &config);

    c.bench_function("gallery_click", |b| {
        b.iter(|| {
            let mut scheduler = ManualScheduler::<SiteTimer>::new();
            let mut site = Site::new(&config, "gallery.html");
            black_box(site.click_gallery(&mut scheduler, &i18n, 0));
        });
    });
}

criterion_group!(benches, bench_full_cycle, bench_gallery_click);
criterion_main!(benches);
