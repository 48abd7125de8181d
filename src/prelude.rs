/*

This is intended to quickly import commonly used modules across
the crate.

@date: 8 Nov, 2025
@author: bartu
*/

// Almost every module uses tracing, so I'm adding it here
pub use tracing::{info, error, warn, debug};
pub use smart_default::SmartDefault;
pub use serde::{Deserialize};

pub use crate::numeric::{*};
pub use crate::bbox::{AxisAlignedBox, BBoxable};
pub use crate::shapes::{Shape, Solid, Sphere, Cylinder};
pub use crate::compound::{CompoundShape};
pub use crate::visitor::{ShapeVisitor, BoundingBoxVisitor, BoxifyVisitor};
pub use crate::error::{GeometryError, GeometryResult};
