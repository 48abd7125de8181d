use body_tracer::json_parser::parse_scene;
use body_tracer::prelude::*;

fn v(x: Float, y: Float, z: Float) -> Vector3 {
    Vector3::new(x, y, z)
}

#[test]
fn test_concrete_scenarios() {
    let sphere = Sphere::new(Vector3::ZERO, 2.).unwrap();
    assert!(sphere.contains_point(v(1., 1., 1.)));
    assert!(!sphere.contains_point(v(2., 2., 2.)));

    let cube = AxisAlignedBox::new(Vector3::ZERO, 2., 2., 2.).unwrap();
    let bbox = cube.get_bbox();
    assert_eq!(bbox.position(), Vector3::ZERO);
    assert_eq!(bbox.size(), v(2., 2., 2.));

    let cylinder = Cylinder::new(Vector3::ZERO, 4., 1.).unwrap();
    assert_eq!(cylinder.get_bbox(), AxisAlignedBox::new(Vector3::ZERO, 2., 2., 4.).unwrap());

    let pair = CompoundShape::new(vec![
        Sphere::new(Vector3::ZERO, 1.).unwrap().into(),
        Sphere::new(v(4., 0., 0.), 1.).unwrap().into(),
    ]).unwrap();
    let bbox = pair.get_bbox();
    assert!(bbox.min_corner().le_all(&v(-1., -1., -1.)));
    assert!(bbox.max_corner().ge_all(&v(5., 1., 1.)));
    assert_eq!(bbox.size(), v(6., 2., 2.));
}

#[test]
fn test_empty_compound() {
    assert!(matches!(CompoundShape::new(Vec::new()), Err(GeometryError::EmptyCompound)));
}

#[test]
fn test_shapes_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Shape>();

    let tree: Shape = CompoundShape::new(vec![
        Sphere::new(Vector3::ZERO, 1.).unwrap().into(),
        Cylinder::new(v(3., 0., 0.), 2., 1.).unwrap().into(),
    ]).unwrap().into();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|i| {
            let tree = &tree;
            s.spawn(move || tree.contains_point(v(i as Float, 0., 0.)))
        }).collect();
        let hits: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(hits, vec![true, true, true, true]);
    });
}

#[test]
fn test_sample_scene() {
    let root = parse_scene(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/bodies.json")).unwrap();
    let reports = root.scene.evaluate().unwrap();
    assert_eq!(reports.len(), 4);

    let hits: Vec<Vec<bool>> = reports.iter().map(|r| r.hits.clone()).collect();
    assert_eq!(hits[0], vec![true, false, false, false]);
    assert_eq!(hits[1], vec![true, false, false, false]);
    assert_eq!(hits[2], vec![false, false, false, false]);
    assert_eq!(hits[3], vec![false, false, true, true]);

    let compound = &reports[3];
    assert_eq!(compound.bbox.min_corner(), v(-1., -1., -3.5));
    assert_eq!(compound.bbox.max_corner(), v(5., 1., 4.));

    let boxified = compound.boxified.as_ref().unwrap();
    assert_eq!(boxified.depth(), compound.shape.depth());
    assert_eq!(boxified.leaf_count(), 4);
    assert_eq!(boxified.get_bbox(), compound.bbox);
}
