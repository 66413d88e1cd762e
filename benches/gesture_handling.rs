// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gesture handling.
//!
//! Measures the performance of:
//! - A single pinch gesture on the bare controller
//! - A full session routed through the viewer (diagnostics and snapshots included)

use criterion::{criterion_group, criterion_main, Criterion};
use pinch_lens::domain::{Offset, PageId};
use pinch_lens::ui::state::ZoomPanController;
use pinch_lens::ui::{Message, Viewer};
use std::hint::black_box;

/// Benchmark one pinch gesture of 60 changed events on the controller alone.
fn bench_pinch_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_handling");

    group.bench_function("controller_pinch", |b| {
        b.iter(|| {
            let mut controller = ZoomPanController::default();
            for step in 0..60u8 {
                controller.on_pinch_changed(1.0 + f32::from(step) * 0.1);
            }
            black_box(controller.on_pinch_ended());
        });
    });

    group.finish();
}

/// Benchmark a mixed session routed through the viewer.
fn bench_viewer_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_handling");
    let back_cover = PageId::new(2).expect("non-zero page id");

    let mut session = vec![Message::DoubleTap];
    session.extend(
        (0..30u8).map(|i| Message::DragChanged(Offset::new(f32::from(i), -f32::from(i)))),
    );
    session.push(Message::DragEnded);
    session.extend([
        Message::ZoomOut,
        Message::ToggleDrawer,
        Message::SelectPage(back_cover),
        Message::ZoomIn,
        Message::ZoomReset,
    ]);

    group.bench_function("viewer_session", |b| {
        b.iter(|| {
            let mut viewer = Viewer::default();
            for msg in &session {
                black_box(viewer.handle(msg.clone()));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pinch_gesture, bench_viewer_session);
criterion_main!(benches);
