/*

    CompoundShape: an ordered, non-empty list of parts,
    parts may be compounds themselves.

    Contains a point if any part does, bounding box is
    the merge of every part's bounding box.

    @date: Oct, 2025
    @author: bartu
*/

use crate::error::GeometryError;
use crate::interval::Interval;
use crate::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CompoundShape {
    parts: Vec<Shape>,
}

impl CompoundShape {
    pub fn new(parts: Vec<Shape>) -> GeometryResult<Self> {
        if parts.is_empty() {
            debug!("Refusing to build a compound without parts");
            return Err(GeometryError::EmptyCompound);
        }
        let compound = Self { parts };

        // Every part is finite on its own, their union may still overflow
        let [xint, yint, zint] = compound.merged_intervals();
        AxisAlignedBox::new_from(&xint, &yint, &zint)?;

        Ok(compound)
    }

    pub fn parts(&self) -> &[Shape] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Replace every non-box leaf with its bounding box, keeping
    /// nested compounds as compounds. Boxes are carried over as is.
    pub fn boxified(&self) -> CompoundShape {
        let parts = self.parts.iter().map(|part| match part {
            Shape::Box(b) => Shape::Box(*b),
            Shape::Compound(c) => Shape::Compound(c.boxified()),
            leaf => Shape::Box(leaf.get_bbox()),
        }).collect();

        // Same number of parts as self, so never empty
        Self { parts }
    }
}

impl Solid for CompoundShape {
    /// Anchor of the first part
    fn position(&self) -> Vector3 {
        self.parts[0].position()
    }

    fn contains_point(&self, point: Vector3) -> bool {
        self.parts.iter().any(|part| part.contains_point(point))
    }
}

impl CompoundShape {
    fn merged_intervals(&self) -> [Interval; 3] {
        // Accumulator starts at the anchor rather than at the first part's box.
        // With non-negative extents the anchor is inside the first leaf's box,
        // so this is the exact union of the parts.
        let anchor = self.position();
        let (mut xint, mut yint, mut zint) = (Interval::point(anchor.x), Interval::point(anchor.y), Interval::point(anchor.z));

        for part in self.parts.iter() {
            let [px, py, pz] = part.get_bbox().intervals();
            xint.merge(&px);
            yint.merge(&py);
            zint.merge(&pz);
        }

        [xint, yint, zint]
    }
}

impl BBoxable for CompoundShape {
    fn get_bbox(&self) -> AxisAlignedBox {
        // Checked once in new( ), parts never change afterwards
        let [xint, yint, zint] = self.merged_intervals();
        AxisAlignedBox::from_intervals(&xint, &yint, &zint)
    }
}
