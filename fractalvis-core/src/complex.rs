use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point on the complex plane as two `f64` components.
///
/// Navigation state is kept in `f64` and only narrowed to `f32` when it is
/// handed to the shader.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Narrow to the `vec2` layout the shaders expect.
    #[inline]
    pub fn to_f32(self) -> [f32; 2] {
        [self.re as f32, self.im as f32]
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub() {
        let a = Complex::new(1.5, -2.0);
        let b = Complex::new(0.5, 4.0);
        assert_eq!(a + b, Complex::new(2.0, 2.0));
        assert_eq!(a - b, Complex::new(1.0, -6.0));
    }

    #[test]
    fn narrows_to_f32_pair() {
        let c = Complex::new(-0.75, 0.1);
        assert_eq!(c.to_f32(), [-0.75f32, 0.1f32]);
    }
}
