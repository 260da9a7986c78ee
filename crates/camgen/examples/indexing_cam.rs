//! Rise-dwell-return-dwell cam, printed as CSV outlines.

use camgen::{CamDesign, GeneratorSettings, MotionLaw, MotionSegment};

fn main() -> camgen::Result<()> {
    let segments = vec![
        MotionSegment::rise(MotionLaw::Cycloidal, 0.0, 100.0, 8.0)?,
        MotionSegment::new(MotionLaw::TopDwell, 100.0, 160.0, 0.0, 8.0, false)?,
        MotionSegment::fall(MotionLaw::Poly4567, 160.0, 260.0, 8.0)?,
        MotionSegment::dwell(260.0, 360.0, 0.0)?,
    ];
    let settings = GeneratorSettings {
        base_circle_radius: 25.0,
        follower_radius: 6.0,
        eccentricity: 4.0,
        resolution_degrees: 0.5,
        blank_radius: 45.0,
    };

    let design = CamDesign::new("indexing", settings, segments);
    let cam = design.synthesize()?;

    let stats = cam.stats();
    eprintln!(
        "{}: radius {:.3}..{:.3}, stroke {:.3}",
        design.name, stats.min_radius, stats.max_radius, stats.stroke
    );

    println!("kind,x,y");
    for p in cam.cam_boundary(0.0) {
        println!("cam,{:.4},{:.4}", p.x, p.y);
    }
    for p in cam.follower_boundary(0.0)? {
        println!("follower,{:.4},{:.4}", p.x, p.y);
    }
    Ok(())
}
