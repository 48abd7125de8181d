/*

    Declare Scene: the bodies to inspect and the points
    to test against them, as read from a JSON description.

    Evaluating a scene builds every body (validating it),
    computes bounding boxes, optional boxified trees,
    containment of each query point and a volume estimate.

    @date: 2 Oct, 2025
    @author: Bartu
*/

use crate::json_parser::{deser_bool, deser_usize};
use crate::json_structs::{BodyJSON, QueryPoint, SingleOrVec};
use crate::sampler::estimate_volume;
use crate::prelude::*;


#[derive(Debug, Deserialize)]
pub struct RootScene {
    #[serde(rename = "Scene")]
    pub scene: Scene,
}

#[derive(Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Scene {
    #[serde(rename = "Samples", deserialize_with = "deser_usize")]
    #[default = 10000]
    pub samples: usize,

    #[serde(rename = "Boxify", deserialize_with = "deser_bool")]
    #[default = true]
    pub boxify: bool,

    #[serde(rename = "Bodies")]
    pub bodies: SingleOrVec<BodyJSON>,

    #[serde(rename = "Queries")]
    pub queries: SingleOrVec<QueryPoint>,
}

/// What we know about one body of the scene after evaluation
#[derive(Debug, Clone)]
pub struct BodyReport {
    pub shape: Shape,
    pub bbox: AxisAlignedBox,
    pub boxified: Option<Shape>,
    /// One entry per query point, same order as Scene::queries
    pub hits: Vec<bool>,
    pub volume_estimate: Float,
}

impl Scene {

    pub fn shapes(&self) -> GeometryResult<Vec<Shape>> {
        self.bodies.all().iter().map(Shape::try_from).collect()
    }

    pub fn query_points(&self) -> Vec<Vector3> {
        self.queries.all().into_iter().map(|q| q.0).collect()
    }

    pub fn evaluate(&self) -> GeometryResult<Vec<BodyReport>> {
        let shapes = self.shapes()?;
        let points = self.query_points();
        info!(">> There are {} bodies and {} query points in the scene.", shapes.len(), points.len());

        let reports = shapes.into_iter().map(|shape| {
            let bbox = shape.accept(&BoundingBoxVisitor).get_bbox();
            debug_assert_eq!(bbox, shape.get_bbox());

            let boxified = if self.boxify { Some(shape.accept(&BoxifyVisitor)) } else { None };
            let hits = points.iter().map(|p| shape.contains_point(*p)).collect();
            let volume_estimate = estimate_volume(&shape, self.samples);

            BodyReport { shape, bbox, boxified, hits, volume_estimate }
        }).collect();

        Ok(reports)
    }
}
