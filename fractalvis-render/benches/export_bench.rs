use criterion::{criterion_group, criterion_main, Criterion};

use fractalvis_core::{PanDirection, ViewportController};
use fractalvis_render::CapturedFrame;

fn bench_flip_1080p(c: &mut Criterion) {
    let (w, h) = (1920u32, 1080u32);
    let pixels = vec![127u8; (w * h * 3) as usize];

    c.bench_function("flip_rgb_1920x1080", |b| {
        b.iter(|| {
            CapturedFrame::new(w, h, pixels.clone())
                .and_then(CapturedFrame::into_image)
        });
    });
}

fn bench_controller_frame(c: &mut Criterion) {
    let mut controller = ViewportController::new();
    controller.set_resolution(1920, 1080);
    controller.set_julia_enabled(true);
    controller.orbit_mut().enabled = true;
    let mut t = 0.0;

    c.bench_function("controller_frame_julia_orbit", |b| {
        b.iter(|| {
            t += 1.0 / 60.0;
            controller.pan(PanDirection::Left);
            controller.zoom_in();
            controller.update_julia_seed(Some((960.0, 540.0)), t);
            controller.take_updates()
        });
    });
}

criterion_group!(benches, bench_flip_1080p, bench_controller_frame);
criterion_main!(benches);
