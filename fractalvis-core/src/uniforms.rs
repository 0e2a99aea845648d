//! The host side of the shader uniform contract.
//!
//! Every shader program exposes the same set of uniforms. The controller
//! tracks which of them changed since the last upload and hands out
//! [`UniformUpdate`] batches; the renderer feeds those to whichever program
//! is bound through a [`UniformSink`].

use crate::palette::{Rgb, PALETTE_SLOTS};

/// One entry of the uniform contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uniform {
    Resolution,
    Location,
    MousePos,
    JuliaMode,
    Zoom,
    Iterations,
    Color1,
    Color2,
    Color3,
    Color4,
}

impl Uniform {
    pub const COUNT: usize = 10;

    pub const ALL: [Uniform; Self::COUNT] = [
        Self::Resolution,
        Self::Location,
        Self::MousePos,
        Self::JuliaMode,
        Self::Zoom,
        Self::Iterations,
        Self::Color1,
        Self::Color2,
        Self::Color3,
        Self::Color4,
    ];

    /// Name of the uniform variable in GLSL.
    pub fn name(self) -> &'static str {
        match self {
            Self::Resolution => "resolution",
            Self::Location => "location",
            Self::MousePos => "mousePos",
            Self::JuliaMode => "juliaMode",
            Self::Zoom => "zoom",
            Self::Iterations => "iterations",
            Self::Color1 => "color_1",
            Self::Color2 => "color_2",
            Self::Color3 => "color_3",
            Self::Color4 => "color_4",
        }
    }

    /// Position in [`Self::ALL`]; also the slot in per-program location tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The `color_N` uniform for palette slot `slot` (0-based).
    pub fn color(slot: usize) -> Self {
        debug_assert!(slot < PALETTE_SLOTS);
        match slot {
            0 => Self::Color1,
            1 => Self::Color2,
            2 => Self::Color3,
            _ => Self::Color4,
        }
    }
}

/// A typed value ready for `glUniform*`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    IVec2([i32; 2]),
    Vec2([f32; 2]),
    /// GLSL `bool`, uploaded as an `int`.
    Bool(bool),
    Float(f32),
    Int(i32),
    Vec3(Rgb),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformUpdate {
    pub uniform: Uniform,
    pub value: UniformValue,
}

/// Something uniforms can be written to, normally a bound GL program.
pub trait UniformSink {
    fn set_uniform(&mut self, uniform: Uniform, value: UniformValue);

    fn apply(&mut self, updates: &[UniformUpdate]) {
        for update in updates {
            self.set_uniform(update.uniform, update.value);
        }
    }
}

/// Bit set of uniforms whose value changed since the last drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirtyUniforms(u16);

impl DirtyUniforms {
    pub fn all() -> Self {
        Self((1 << Uniform::COUNT) - 1)
    }

    #[inline]
    pub fn mark(&mut self, uniform: Uniform) {
        self.0 |= 1 << uniform.index();
    }

    pub fn mark_all(&mut self) {
        *self = Self::all();
    }

    #[inline]
    pub fn contains(&self, uniform: Uniform) -> bool {
        self.0 & (1 << uniform.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Take every marked uniform, in contract order, and clear the set.
    pub fn drain(&mut self) -> impl Iterator<Item = Uniform> {
        let taken = std::mem::take(self);
        Uniform::ALL.into_iter().filter(move |u| taken.contains(*u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_contract() {
        let names: Vec<_> = Uniform::ALL.iter().map(|u| u.name()).collect();
        assert_eq!(
            names,
            [
                "resolution",
                "location",
                "mousePos",
                "juliaMode",
                "zoom",
                "iterations",
                "color_1",
                "color_2",
                "color_3",
                "color_4",
            ]
        );
    }

    #[test]
    fn color_slots() {
        assert_eq!(Uniform::color(0), Uniform::Color1);
        assert_eq!(Uniform::color(3), Uniform::Color4);
    }

    #[test]
    fn dirty_drain_in_contract_order() {
        let mut dirty = DirtyUniforms::default();
        assert!(dirty.is_empty());
        dirty.mark(Uniform::Color2);
        dirty.mark(Uniform::Zoom);
        dirty.mark(Uniform::Zoom);
        assert!(dirty.contains(Uniform::Zoom));
        let drained: Vec<_> = dirty.drain().collect();
        assert_eq!(drained, [Uniform::Zoom, Uniform::Color2]);
        assert!(dirty.is_empty());
    }

    #[test]
    fn mark_all_covers_contract() {
        let mut dirty = DirtyUniforms::default();
        dirty.mark_all();
        assert_eq!(dirty.drain().count(), Uniform::COUNT);
    }

    #[derive(Default)]
    struct Recorder(Vec<(Uniform, UniformValue)>);

    impl UniformSink for Recorder {
        fn set_uniform(&mut self, uniform: Uniform, value: UniformValue) {
            self.0.push((uniform, value));
        }
    }

    #[test]
    fn sink_apply_forwards_in_order() {
        let mut sink = Recorder::default();
        sink.apply(&[
            UniformUpdate {
                uniform: Uniform::Iterations,
                value: UniformValue::Int(42),
            },
            UniformUpdate {
                uniform: Uniform::JuliaMode,
                value: UniformValue::Bool(true),
            },
        ]);
        assert_eq!(
            sink.0,
            [
                (Uniform::Iterations, UniformValue::Int(42)),
                (Uniform::JuliaMode, UniformValue::Bool(true)),
            ]
        );
    }
}
