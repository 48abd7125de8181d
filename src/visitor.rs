/*

    Double dispatch over the closed set of bodies.

    A ShapeVisitor has one handler per body kind and each
    body forwards itself to the matching handler through
    accept( ). New operations are new visitors, the bodies
    never need to change for them. Same shape as serde's
    de::Visitor that json_parser.rs implements.

    @date: Nov, 2025
    @author: bartu
*/

use crate::prelude::*;


pub trait ShapeVisitor {
    type Value;

    fn visit_sphere(&self, sphere: &Sphere) -> Self::Value;
    fn visit_box(&self, bbox: &AxisAlignedBox) -> Self::Value;
    fn visit_cylinder(&self, cylinder: &Cylinder) -> Self::Value;
    fn visit_compound(&self, compound: &CompoundShape) -> Self::Value;
}

impl Shape {
    pub fn accept<V: ShapeVisitor>(&self, visitor: &V) -> V::Value {
        match self {
            Shape::Sphere(s) => s.accept(visitor),
            Shape::Box(b) => b.accept(visitor),
            Shape::Cylinder(c) => c.accept(visitor),
            Shape::Compound(c) => c.accept(visitor),
        }
    }
}

impl Sphere {
    pub fn accept<V: ShapeVisitor>(&self, visitor: &V) -> V::Value {
        visitor.visit_sphere(self)
    }
}

impl AxisAlignedBox {
    pub fn accept<V: ShapeVisitor>(&self, visitor: &V) -> V::Value {
        visitor.visit_box(self)
    }
}

impl Cylinder {
    pub fn accept<V: ShapeVisitor>(&self, visitor: &V) -> V::Value {
        visitor.visit_cylinder(self)
    }
}

impl CompoundShape {
    pub fn accept<V: ShapeVisitor>(&self, visitor: &V) -> V::Value {
        visitor.visit_compound(self)
    }
}


// =======================================================================================================
// Stock visitors
// =======================================================================================================

/// Every body becomes its bounding box, compounds collapse into one box
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBoxVisitor;

impl ShapeVisitor for BoundingBoxVisitor {
    type Value = Shape;

    fn visit_sphere(&self, sphere: &Sphere) -> Shape {
        sphere.get_bbox().into()
    }

    fn visit_box(&self, bbox: &AxisAlignedBox) -> Shape {
        bbox.get_bbox().into()
    }

    fn visit_cylinder(&self, cylinder: &Cylinder) -> Shape {
        cylinder.get_bbox().into()
    }

    fn visit_compound(&self, compound: &CompoundShape) -> Shape {
        compound.get_bbox().into()
    }
}

/// Every leaf becomes its bounding box, compounds keep their nesting
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxifyVisitor;

impl ShapeVisitor for BoxifyVisitor {
    type Value = Shape;

    fn visit_sphere(&self, sphere: &Sphere) -> Shape {
        sphere.get_bbox().into()
    }

    fn visit_box(&self, bbox: &AxisAlignedBox) -> Shape {
        bbox.get_bbox().into()
    }

    fn visit_cylinder(&self, cylinder: &Cylinder) -> Shape {
        cylinder.get_bbox().into()
    }

    fn visit_compound(&self, compound: &CompoundShape) -> Shape {
        compound.boxified().into()
    }
}
