/*

    Responsible for creating a struct that represents
    ranges from a to b and functionality to check if
    x is in range [a,b].

    Used per axis by boxes and cylinders, and as the
    running accumulator while merging bounding boxes.

    See also associated constant of Interval class:
    - EMPTY: (inf, -inf)

    @author: Bartu
    @date: Sept 2025

*/

use crate::numeric::{Float};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: FloatConst::INF,
        max: FloatConst::NEG_INF,
    };

    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// Degenerate [x, x]
    pub fn point(x: Float) -> Self {
        Self::new(x, x)
    }

    /// [center - size/2, center + size/2]
    pub fn centered(center: Float, size: Float) -> Self {
        Self::new(center - size / 2., center + size / 2.)
    }

    pub fn size(&self) -> Float {
        self.max - self.min
    }

    pub fn center(&self) -> Float {
        // Halve first, min + max alone can overflow
        self.min / 2. + self.max / 2.
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn expand(&mut self, x: Float) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }

    /// Grow self so that it also covers other
    pub fn merge(&mut self, other: &Interval) {
        self.expand(other.min);
        self.expand(other.max);
    }

}


pub trait FloatConst: Copy {
    const INF: Self;
    const NEG_INF: Self;
}

impl FloatConst for f64 {
    const INF: Self = f64::INFINITY;
    const NEG_INF: Self = f64::NEG_INFINITY;
}
