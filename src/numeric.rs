/*

    Declare numeric types used throughout this repo.

    WARNING: If you like to use f32 instead of f64
    during computations, you need to change both of these:
    pub type Float = f32;
    pub type Vector3 = Vec3;

    Component-wise comparisons needed by axis aligned
    containment live in ComponentWise below, DVec3 only
    gives us cmple/cmpge masks.

    @date: 2 Oct, 2025
    @author: Bartu
*/

use bevy_math::DVec3;
pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update Vector3
pub type Vector3 = DVec3;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < 1e-8
}

pub fn approx_eq(a: Float, b: Float) -> bool {
    approx_zero(a - b)
}

/// Component-wise relations on points. Only meant for
/// axis aligned tests, this is NOT an ordering.
pub trait ComponentWise {
    /// Every component of self is <= the corresponding component of other
    fn le_all(&self, other: &Self) -> bool;
    /// Every component of self is >= the corresponding component of other
    fn ge_all(&self, other: &Self) -> bool;
    fn squared_length(&self) -> Float;
}

impl ComponentWise for Vector3 {
    fn le_all(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    fn ge_all(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z
    }

    #[inline]
    fn squared_length(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}
