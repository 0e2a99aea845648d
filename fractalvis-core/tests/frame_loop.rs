use std::collections::HashMap;

use fractalvis_core::{
    FractalVariant, PanDirection, Uniform, UniformSink, UniformValue, ViewportController,
};

/// Stand-in for a GL program: remembers the last value of each uniform.
#[derive(Default)]
struct FakeProgram {
    values: HashMap<Uniform, UniformValue>,
    writes: usize,
}

impl UniformSink for FakeProgram {
    fn set_uniform(&mut self, uniform: Uniform, value: UniformValue) {
        self.values.insert(uniform, value);
        self.writes += 1;
    }
}

/// One frame of the application loop against a set of per-variant programs.
fn frame(controller: &mut ViewportController, programs: &mut HashMap<FractalVariant, FakeProgram>) {
    let updates = controller.take_updates();
    programs
        .entry(controller.variant())
        .or_default()
        .apply(&updates);
}

fn assert_in_sync(controller: &ViewportController, program: &FakeProgram) {
    for uniform in Uniform::ALL {
        assert_eq!(
            program.values.get(&uniform),
            Some(&controller.uniform_value(uniform)),
            "{} out of sync",
            uniform.name()
        );
    }
}

#[test]
fn every_program_sees_full_state_after_switch() {
    let mut controller = ViewportController::new();
    let mut programs = HashMap::new();
    controller.set_resolution(1280, 720);
    frame(&mut controller, &mut programs);

    // Some navigation on the Mandelbrot program.
    for _ in 0..30 {
        controller.pan(PanDirection::Right);
        controller.zoom_in();
        frame(&mut controller, &mut programs);
    }
    controller.set_iterations(800).unwrap();
    controller.apply_preset(3).unwrap();
    controller.set_julia_enabled(true);
    controller.update_julia_seed(Some((200.0, 150.0)), 0.5);
    frame(&mut controller, &mut programs);

    for variant in FractalVariant::ALL {
        controller.select_variant(variant);
        frame(&mut controller, &mut programs);
        assert_in_sync(&controller, &programs[&variant]);
    }
}

#[test]
fn idle_frames_write_nothing() {
    let mut controller = ViewportController::new();
    let mut programs = HashMap::new();
    controller.set_resolution(640, 480);
    frame(&mut controller, &mut programs);
    let writes = programs[&FractalVariant::Mandelbrot].writes;

    for _ in 0..10 {
        controller.update_julia_seed(Some((10.0, 10.0)), 1.0);
        frame(&mut controller, &mut programs);
    }
    assert_eq!(programs[&FractalVariant::Mandelbrot].writes, writes);
}

#[test]
fn orbiting_seed_updates_every_frame() {
    let mut controller = ViewportController::new();
    let mut programs = HashMap::new();
    controller.set_resolution(640, 480);
    controller.set_julia_enabled(true);
    controller.orbit_mut().enabled = true;
    controller.orbit_mut().set_radius(0.25);
    frame(&mut controller, &mut programs);

    controller.set_julia_paused(true);
    let mut seen = Vec::new();
    for step in 0..5 {
        controller.update_julia_seed(None, step as f64 * 0.1);
        frame(&mut controller, &mut programs);
        seen.push(programs[&FractalVariant::Mandelbrot].values[&Uniform::MousePos]);
    }
    for pair in seen.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}
