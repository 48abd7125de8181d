/*

    Axis Aligned Box. Used both as a body of its own
    and as the bounding box of every other body.

    Stored as center + full sizes along x, y, z, the
    box spans center -/+ size/2 on each axis.

    @author: bartu
    @date: 9 Nov, 2025
*/

use crate::prelude::*;
use crate::error::{check_extent, check_position, check_span, GeometryError, GeometryResult};
use crate::interval::Interval;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBox {
    position: Vector3,
    size: Vector3,
}

impl AxisAlignedBox {
    pub fn new(position: Vector3, size_x: Float, size_y: Float, size_z: Float) -> GeometryResult<Self> {
        let position = check_position(position)?;
        let size = Vector3::new(
            check_extent("size_x", size_x)?,
            check_extent("size_y", size_y)?,
            check_extent("size_z", size_z)?,
        );
        check_span("size", position, size)?;
        Ok(Self { position, size })
    }

    /// Caller guarantees sizes are non-negative (derived from already valid bodies)
    pub(crate) fn from_center_size(position: Vector3, size: Vector3) -> Self {
        debug_assert!(size.ge_all(&Vector3::ZERO), "Negative box size {:?}", size);
        Self { position, size }
    }

    /// Box spanning the given [x, y, z] intervals
    pub fn new_from(xint: &Interval, yint: &Interval, zint: &Interval) -> GeometryResult<Self> {
        for (what, int) in [("interval.x", xint), ("interval.y", yint), ("interval.z", zint)] {
            if !int.validate() {
                debug!("Rejected {} = {:?}, found max < min", what, int);
                return Err(GeometryError::InvalidArgument { what, value: int.size() });
            }
        }
        let position = check_position(Vector3::new(xint.center(), yint.center(), zint.center()))?;
        let size = Vector3::new(
            check_extent("size_x", xint.size())?,
            check_extent("size_y", yint.size())?,
            check_extent("size_z", zint.size())?,
        );
        check_span("size", position, size)?;
        Ok(Self { position, size })
    }

    /// Caller guarantees the intervals are valid and finite (merged from already valid bodies)
    pub(crate) fn from_intervals(xint: &Interval, yint: &Interval, zint: &Interval) -> Self {
        debug_assert!(xint.validate() && yint.validate() && zint.validate(), "Invalid interval, found max < min");
        Self::from_center_size(
            Vector3::new(xint.center(), yint.center(), zint.center()),
            Vector3::new(xint.size(), yint.size(), zint.size()),
        )
    }

    pub fn position(&self) -> Vector3 { self.position }
    pub fn size(&self) -> Vector3 { self.size }
    pub fn size_x(&self) -> Float { self.size.x }
    pub fn size_y(&self) -> Float { self.size.y }
    pub fn size_z(&self) -> Float { self.size.z }

    /// Half sizes
    pub fn extents(&self) -> Vector3 {
        self.size / 2.
    }

    pub fn min_corner(&self) -> Vector3 {
        self.position - self.extents()
    }

    pub fn max_corner(&self) -> Vector3 {
        self.position + self.extents()
    }

    /// [x, y, z] slabs of the box
    pub fn intervals(&self) -> [Interval; 3] {
        [
            Interval::centered(self.position.x, self.size.x),
            Interval::centered(self.position.y, self.size.y),
            Interval::centered(self.position.z, self.size.z),
        ]
    }

    pub fn volume(&self) -> Float {
        self.size.x * self.size.y * self.size.z
    }

    pub fn contains_point(&self, point: Vector3) -> bool {
        // Inclusive on every face
        point.ge_all(&self.min_corner()) && point.le_all(&self.max_corner())
    }
}

pub trait BBoxable {
    fn get_bbox(&self) -> AxisAlignedBox;
}

impl BBoxable for AxisAlignedBox {
    /// A box is its own bounding box
    fn get_bbox(&self) -> AxisAlignedBox {
        *self
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    fn unit_cube() -> AxisAlignedBox {
        AxisAlignedBox::new(Vector3::ZERO, 2., 2., 2.).unwrap()
    }

    #[test]
    fn test_bbox_of_box_is_identical() {
        let cube = unit_cube();
        let bbox = cube.get_bbox();
        assert_eq!(bbox, cube);
        assert_eq!(bbox.position(), Vector3::ZERO);
        assert_eq!(bbox.size(), Vector3::new(2., 2., 2.));

        let odd = AxisAlignedBox::new(Vector3::new(1., -2., 3.5), 0.5, 7., 0.).unwrap();
        assert_eq!(odd.get_bbox(), odd);
    }

    #[test]
    fn test_contains_point_inclusive() {
        let cube = unit_cube();
        assert!(cube.contains_point(Vector3::ZERO));
        assert!(cube.contains_point(Vector3::new(1., 1., 1.)));
        assert!(cube.contains_point(Vector3::new(-1., 0., 1.)));
        assert!(!cube.contains_point(Vector3::new(1.01, 0., 0.)));
        assert!(!cube.contains_point(Vector3::new(0., 0., -1.5)));
    }

    #[test]
    fn test_corners_and_intervals() {
        let b = AxisAlignedBox::new(Vector3::new(1., 1., 1.), 2., 4., 6.).unwrap();
        assert_eq!(b.min_corner(), Vector3::new(0., -1., -2.));
        assert_eq!(b.max_corner(), Vector3::new(2., 3., 4.));
        assert!(approx_eq(b.volume(), 48.));

        let [x, y, z] = b.intervals();
        assert_eq!(AxisAlignedBox::new_from(&x, &y, &z), Ok(b));
        assert_eq!(AxisAlignedBox::from_intervals(&x, &y, &z), b);
    }

    #[test]
    fn test_new_from_rejects_bad_intervals() {
        let unit = Interval::new(-1., 1.);

        let infinite = Interval::new(0., Float::INFINITY);
        assert!(matches!(
            AxisAlignedBox::new_from(&infinite, &unit, &unit),
            Err(GeometryError::InvalidArgument { .. })
        ));

        // Both ends finite, but max - min overflows
        let huge = Interval::new(-Float::MAX, Float::MAX);
        assert!(AxisAlignedBox::new_from(&unit, &huge, &unit).is_err());

        let inverted = Interval::new(1., -1.);
        assert_eq!(
            AxisAlignedBox::new_from(&unit, &unit, &inverted),
            Err(GeometryError::InvalidArgument { what: "interval.z", value: -2. })
        );
        assert!(AxisAlignedBox::new_from(&Interval::EMPTY, &unit, &unit).is_err());
    }

    #[test]
    fn test_rejects_overflowing_box() {
        assert!(AxisAlignedBox::new(Vector3::new(Float::MAX, 0., 0.), Float::MAX, 1., 1.).is_err());
        assert!(AxisAlignedBox::new(Vector3::new(Float::MAX, 0., 0.), 0., 1., 1.).is_ok());
    }

    #[test]
    fn test_rejects_negative_size() {
        let err = AxisAlignedBox::new(Vector3::ZERO, 1., -1., 1.).unwrap_err();
        assert_eq!(err, GeometryError::InvalidArgument { what: "size_y", value: -1. });
        assert!(AxisAlignedBox::new(Vector3::new(Float::NAN, 0., 0.), 1., 1., 1.).is_err());
    }
}
