/*

    Declare bodies: Sphere, Cylinder (+ AxisAlignedBox from bbox.rs)
    and the Shape sum type closing over them and CompoundShape.

    Every body is immutable once built. Constructors validate
    extents so a body you can hold is always well formed.

    @date: Oct, 2025
    @author: bartu
*/

use std::fmt::Debug;

use crate::error::{check_extent, check_position, check_span};
use crate::interval::Interval;
use crate::prelude::*;


// =======================================================================================================
// Solid Trait
// =======================================================================================================
pub trait Solid : Debug + Send + Sync + BBoxable {
    /// Anchor point of the body (center for leaves, first part's anchor for compounds)
    fn position(&self) -> Vector3;

    fn contains_point(&self, point: Vector3) -> bool;
}


// =======================================================================================================
// Sphere (impl Solid + BBoxable)
// =======================================================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    position: Vector3,
    radius: Float,
}

impl Sphere {
    pub fn new(position: Vector3, radius: Float) -> GeometryResult<Self> {
        let position = check_position(position)?;
        let radius = check_extent("radius", radius)?;
        check_span("radius", position, Vector3::splat(radius * 2.))?;
        Ok(Self { position, radius })
    }

    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl Solid for Sphere {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn contains_point(&self, point: Vector3) -> bool {
        let vector = point - self.position;
        vector.squared_length() <= self.radius * self.radius
    }
}

impl BBoxable for Sphere {
    fn get_bbox(&self) -> AxisAlignedBox {
        let length = self.radius * 2.;
        AxisAlignedBox::from_center_size(self.position, Vector3::splat(length))
    }
}


// =======================================================================================================
// AxisAlignedBox (impl Solid, BBoxable lives in bbox.rs)
// =======================================================================================================
impl Solid for AxisAlignedBox {
    fn position(&self) -> Vector3 {
        AxisAlignedBox::position(self)
    }

    fn contains_point(&self, point: Vector3) -> bool {
        AxisAlignedBox::contains_point(self, point)
    }
}


// =======================================================================================================
// Cylinder (impl Solid + BBoxable)
// =======================================================================================================

// Axis is fixed to Z, position is the center of the cylinder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    position: Vector3,
    height: Float,
    radius: Float,
}

impl Cylinder {
    pub fn new(position: Vector3, height: Float, radius: Float) -> GeometryResult<Self> {
        let position = check_position(position)?;
        let height = check_extent("height", height)?;
        let radius = check_extent("radius", radius)?;
        check_span("radius", position, Vector3::new(radius * 2., radius * 2., 0.))?;
        check_span("height", position, Vector3::new(0., 0., height))?;
        Ok(Self { position, height, radius })
    }

    pub fn height(&self) -> Float {
        self.height
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    fn z_range(&self) -> Interval {
        Interval::centered(self.position.z, self.height)
    }
}

impl Solid for Cylinder {
    fn position(&self) -> Vector3 {
        self.position
    }

    fn contains_point(&self, point: Vector3) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        let radial2 = dx * dx + dy * dy;
        radial2 <= self.radius * self.radius && self.z_range().contains(point.z)
    }
}

impl BBoxable for Cylinder {
    fn get_bbox(&self) -> AxisAlignedBox {
        let length = self.radius * 2.;
        AxisAlignedBox::from_center_size(self.position, Vector3::new(length, length, self.height))
    }
}


// =======================================================================================================
// Shape: closed set of bodies
// =======================================================================================================
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Box(AxisAlignedBox),
    Cylinder(Cylinder),
    Compound(CompoundShape),
}

impl Shape {
    pub fn as_compound(&self) -> Option<&CompoundShape> {
        match self {
            Shape::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, Shape::Compound(_))
    }

    /// Number of compound levels, a leaf has depth 0
    pub fn depth(&self) -> usize {
        match self {
            Shape::Compound(c) => 1 + c.parts().iter().map(Shape::depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Shape::Compound(c) => c.parts().iter().map(Shape::leaf_count).sum(),
            _ => 1,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "Sphere",
            Shape::Box(_) => "Box",
            Shape::Cylinder(_) => "Cylinder",
            Shape::Compound(_) => "Compound",
        }
    }
}

impl Solid for Shape {
    fn position(&self) -> Vector3 {
        match self {
            Shape::Sphere(s) => s.position(),
            Shape::Box(b) => Solid::position(b),
            Shape::Cylinder(c) => c.position(),
            Shape::Compound(c) => c.position(),
        }
    }

    fn contains_point(&self, point: Vector3) -> bool {
        match self {
            Shape::Sphere(s) => s.contains_point(point),
            Shape::Box(b) => Solid::contains_point(b, point),
            Shape::Cylinder(c) => c.contains_point(point),
            Shape::Compound(c) => c.contains_point(point),
        }
    }
}

impl BBoxable for Shape {
    fn get_bbox(&self) -> AxisAlignedBox {
        match self {
            Shape::Sphere(s) => s.get_bbox(),
            Shape::Box(b) => b.get_bbox(),
            Shape::Cylinder(c) => c.get_bbox(),
            Shape::Compound(c) => c.get_bbox(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self { Shape::Sphere(s) }
}

impl From<AxisAlignedBox> for Shape {
    fn from(b: AxisAlignedBox) -> Self { Shape::Box(b) }
}

impl From<Cylinder> for Shape {
    fn from(c: Cylinder) -> Self { Shape::Cylinder(c) }
}

impl From<CompoundShape> for Shape {
    fn from(c: CompoundShape) -> Self { Shape::Compound(c) }
}
