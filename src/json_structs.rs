/*

    Declare data structs needed to parse JSON.

    - SingleOrVec
    - BodyJSON: raw body description, converted into a
      validated Shape with TryFrom
    - QueryPoint

    @date: 13 Oct, 2025
    @author: Bartu
*/

use serde::Deserialize;

use crate::json_parser::{deser_float, deser_vec3};
use crate::prelude::*;


// To handle JSON file having a single <object>
// or an array of <object>s
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SingleOrVec<T> {
    Empty,
    Single(T),
    Multiple(Vec<T>),
}

impl<T: Clone> SingleOrVec<T>  {
    pub fn all(&self) -> Vec<T> {
        match &self {
            SingleOrVec::Empty => vec![],
            SingleOrVec::Single(t) => vec![t.clone()],
            SingleOrVec::Multiple(vec) => vec.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match &self {
            SingleOrVec::Empty => 0,
            SingleOrVec::Single(_) => 1,
            SingleOrVec::Multiple(vec) => vec.len(),
        }
    }
}

impl<T> Default for SingleOrVec<T> {
    fn default() -> Self {
        SingleOrVec::Empty
    }
}


#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct QueryPoint(#[serde(deserialize_with = "deser_vec3")] pub Vector3);


#[derive(Debug, Deserialize, Clone)]
pub struct SphereJSON {
    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    pub position: Vector3,
    #[serde(rename = "Radius", deserialize_with = "deser_float")]
    pub radius: Float,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BoxJSON {
    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    pub position: Vector3,
    #[serde(rename = "Size", deserialize_with = "deser_vec3")]
    pub size: Vector3,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CylinderJSON {
    #[serde(rename = "Position", deserialize_with = "deser_vec3")]
    pub position: Vector3,
    #[serde(rename = "Height", deserialize_with = "deser_float")]
    pub height: Float,
    #[serde(rename = "Radius", deserialize_with = "deser_float")]
    pub radius: Float,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CompoundJSON {
    #[serde(rename = "Parts", default)]
    pub parts: SingleOrVec<BodyJSON>,
}

// e.g. { "Sphere": { "Position": "0 0 0", "Radius": "1" } }
#[derive(Debug, Deserialize, Clone)]
pub enum BodyJSON {
    Sphere(SphereJSON),
    Box(BoxJSON),
    Cylinder(CylinderJSON),
    Compound(Box<CompoundJSON>), // Parts hold BodyJSON again, needs indirection
}

impl TryFrom<&BodyJSON> for Shape {
    type Error = GeometryError;

    fn try_from(body: &BodyJSON) -> GeometryResult<Shape> {
        let shape = match body {
            BodyJSON::Sphere(s) => Sphere::new(s.position, s.radius)?.into(),
            BodyJSON::Box(b) => AxisAlignedBox::new(b.position, b.size.x, b.size.y, b.size.z)?.into(),
            BodyJSON::Cylinder(c) => Cylinder::new(c.position, c.height, c.radius)?.into(),
            BodyJSON::Compound(c) => {
                let parts = c.parts.all().iter()
                    .map(Shape::try_from)
                    .collect::<GeometryResult<Vec<Shape>>>()?;
                CompoundShape::new(parts)?.into()
            }
        };
        Ok(shape)
    }
}
