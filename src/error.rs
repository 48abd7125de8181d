/*

    Errors raised while constructing bodies.

    Every other operation on a valid body is total,
    so construction is the only place anything can fail.

    @date: Oct, 2025
    @author: bartu
*/

use crate::numeric::{Float, Vector3};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Invalid argument: {what} is out of range, got {value}")]
    InvalidArgument { what: &'static str, value: Float },

    #[error("Invalid argument: compound shape needs at least one part")]
    EmptyCompound,
}

pub type GeometryResult<T> = Result<T, GeometryError>;

fn invalid<T>(what: &'static str, value: Float) -> GeometryResult<T> {
    tracing::debug!("Rejected {} = {}", what, value);
    Err(GeometryError::InvalidArgument { what, value })
}

/// Reject negative, NaN and infinite extents (radius, sizes, height)
pub(crate) fn check_extent(what: &'static str, value: Float) -> GeometryResult<Float> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        invalid(what, value)
    }
}

pub(crate) fn check_finite(what: &'static str, value: Float) -> GeometryResult<Float> {
    if value.is_finite() {
        Ok(value)
    } else {
        invalid(what, value)
    }
}

pub(crate) fn check_position(position: Vector3) -> GeometryResult<Vector3> {
    check_finite("position.x", position.x)?;
    check_finite("position.y", position.y)?;
    check_finite("position.z", position.z)?;
    Ok(position)
}

/// Box spanned by center -/+ size/2 must stay finite on every axis,
/// otherwise bounding boxes built from it overflow
pub(crate) fn check_span(what: &'static str, center: Vector3, size: Vector3) -> GeometryResult<()> {
    for (c, s) in center.to_array().into_iter().zip(size.to_array()) {
        let half = s / 2.;
        if !(s.is_finite() && (c - half).is_finite() && (c + half).is_finite()) {
            return invalid(what, s);
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_extent() {
        assert_eq!(check_extent("radius", 0.), Ok(0.));
        assert_eq!(check_extent("radius", 2.5), Ok(2.5));
        assert!(matches!(check_extent("radius", -1.), Err(GeometryError::InvalidArgument { what: "radius", .. })));
        assert!(check_extent("radius", Float::NAN).is_err());
        assert!(check_extent("radius", Float::INFINITY).is_err());
    }

    #[test]
    fn test_check_position() {
        assert!(check_position(Vector3::new(1., -2., 3.)).is_ok());
        assert!(matches!(
            check_position(Vector3::new(0., Float::NEG_INFINITY, 0.)),
            Err(GeometryError::InvalidArgument { what: "position.y", .. })
        ));
    }

    #[test]
    fn test_check_span() {
        assert!(check_span("size", Vector3::ZERO, Vector3::splat(2.)).is_ok());
        assert!(check_span("size", Vector3::splat(Float::MAX / 2.), Vector3::splat(Float::MAX / 2.)).is_ok());

        // Finite size, but the far face overflows
        assert!(check_span("size", Vector3::new(Float::MAX, 0., 0.), Vector3::new(Float::MAX, 1., 1.)).is_err());
        // Size itself overflowed (e.g. 2 * radius)
        assert!(check_span("radius", Vector3::ZERO, Vector3::splat(2. * 1e308)).is_err());
    }

    #[test]
    fn test_messages() {
        let e = GeometryError::InvalidArgument { what: "height", value: -2. };
        assert_eq!(e.to_string(), "Invalid argument: height is out of range, got -2");
        assert!(GeometryError::EmptyCompound.to_string().contains("at least one part"));
    }
}
