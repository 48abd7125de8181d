/*

    Inspect solid bodies described in a JSON scene:
    bounding boxes, boxified trees, point containment
    and volume estimates.

    @date: Oct, 2025
    @author: Bartu

*/

use std::{self, env, time::Instant};
use tracing::{info, warn, error, debug};
use tracing_subscriber;

use body_tracer::json_parser::parse_scene;
use body_tracer::prelude::{Solid};

fn main()  -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: &String = if args.len() == 1 {
        warn!("No arguments were provided, setting default scene path...");
        &String::from("./inputs/bodies.json")
    } else if args.len() == 2 {
        &args[1]
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading scene from {}...", json_path);
    let root = parse_scene(json_path).map_err(|e| {
        error!("Failed to load scene: {}", e);
        e
    })?;
    debug!("Scene is loaded successfully.\n {:#?}", root);

    let start = Instant::now();
    let reports = root.scene.evaluate().map_err(|e| {
        error!("Invalid body in scene: {}", e);
        Box::<dyn std::error::Error>::from(e)
    })?;
    let queries = root.scene.query_points();

    for (i, report) in reports.iter().enumerate() {
        let shape = &report.shape;
        info!("Body #{} is a {} (depth {}, {} leaves) anchored at {:?}", i, shape.kind(), shape.depth(), shape.leaf_count(), shape.position());
        info!("  bounding box: center {:?}, size {:?}", report.bbox.position(), report.bbox.size());
        info!("  volume estimate: {:.4} (bbox volume {:.4})", report.volume_estimate, report.bbox.volume());

        if let Some(boxified) = &report.boxified {
            debug!("  boxified: {:#?}", boxified);
        }

        for (p, hit) in queries.iter().zip(report.hits.iter()) {
            info!("  contains {:?}: {}", p, hit);
        }
    }

    info!("Evaluating {} bodies took: {:?}", reports.len(), start.elapsed());
    info!("Finished execution.");
    Ok(())
}
