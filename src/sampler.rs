
use rayon::prelude::*;

use crate::prelude::*;

//////////////////////////////////////////////////////////////////////////
/// SAMPLING UTILS
//////////////////////////////////////////////////////////////////////////

/// Uniform in [0, 1)
pub fn random_float() -> Float {
    rand::random::<Float>()
}

/// Uniform point inside the box
pub fn random_point_in(bbox: &AxisAlignedBox) -> Vector3 {
    let u = Vector3::new(random_float(), random_float(), random_float());
    bbox.min_corner() + bbox.size() * u
}

/// Monte Carlo volume: bbox volume times the fraction of
/// uniform samples in the bbox that land inside the body.
/// Bodies are immutable so samples are tested in parallel.
pub fn estimate_volume<S: Solid>(shape: &S, samples: usize) -> Float {
    let bbox = shape.get_bbox();
    let bbox_volume = bbox.volume();
    if samples == 0 || approx_zero(bbox_volume) {
        return 0.;
    }

    // --- Rayon Multithreading ---
    let hits = (0..samples)
        .into_par_iter()
        .filter(|_| shape.contains_point(random_point_in(&bbox)))
        .count();
    // -----------------------------

    bbox_volume * (hits as Float / samples as Float)
}
