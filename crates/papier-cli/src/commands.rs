//! CLI command implementations.

use papier_collide::{FramePipeline, FrameStepResult};
use papier_contour::ContourTree;
use papier_io::{validate_frame, FrameInput, FrameOutput};
use papier_telemetry::{EventBus, EventKind, FrameEvent, TracingSink};

/// Resolve a recorded frame and print (or write) the corrected centers.
pub fn resolve(
    path: &str,
    settle: Option<u32>,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let frame = FrameInput::from_json(&content)?;
    validate_frame(&frame)?;

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new(tracing::Level::INFO)));

    let tree = match ContourTree::build(frame.contours) {
        Ok(tree) => {
            bus.emit(FrameEvent::new(
                0,
                EventKind::TreeBuilt {
                    contours: tree.len() as u32,
                    holes: tree.hole_count() as u32,
                    max_depth: tree.max_depth(),
                },
            ));
            tree
        }
        Err(e) => {
            bus.emit(FrameEvent::new(
                0,
                EventKind::BuildRejected {
                    reason: e.to_string(),
                },
            ));
            bus.flush();
            return Err(Box::new(e));
        }
    };

    let pipeline = match settle {
        Some(passes) => FramePipeline::with_settle(passes),
        None => FramePipeline::new(),
    };
    let FrameStepResult { corrected, stats } = pipeline.step(&tree, &frame.disks);

    bus.emit(FrameEvent::new(
        0,
        EventKind::ContoursResolved {
            disks: frame.disks.len() as u32,
            moved: stats.contour_corrections,
        },
    ));
    bus.emit(FrameEvent::new(
        0,
        EventKind::DisksResolved {
            moved: stats.disk_corrections,
            max_displacement: stats.max_displacement,
        },
    ));
    bus.flush();

    let out = FrameOutput { corrected, stats };
    let json = out.to_json()?;
    if let Some(path) = output_path {
        std::fs::write(path, &json)?;
        println!("Results written to: {path}");
    } else {
        println!("{json}");
    }

    Ok(())
}

/// Print the contour hierarchy of a recorded frame.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Papier Frame Inspector");
    println!("──────────────────────");
    println!();

    let content = std::fs::read_to_string(path)?;
    let frame = FrameInput::from_json(&content)?;
    let disk_count = frame.disks.len();
    let tree = ContourTree::build(frame.contours)?;

    println!("Contours:   {}", tree.len());
    println!("Holes:      {}", tree.hole_count());
    println!("Max depth:  {}", tree.max_depth());
    println!("Disks:      {disk_count}");
    println!();

    for (id, c) in tree.iter_with_ids() {
        let indent = "  ".repeat(c.tree_depth as usize);
        let kind = if c.is_hole { "hole " } else { "solid" };
        println!(
            "{indent}[{}] {kind}  {} pts  area {:.1}  center ({:.1}, {:.1})",
            id.0,
            c.polyline.len(),
            c.area,
            c.center.x,
            c.center.y,
        );
    }

    Ok(())
}

/// Validate a recorded frame without resolving it.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Papier Validator");
    println!("────────────────");
    println!();

    let content = std::fs::read_to_string(path)?;
    let frame = FrameInput::from_json(&content)?;
    match validate_frame(&frame) {
        Ok(()) => {
            println!(
                "✅ Frame is valid ({} contours, {} disks).",
                frame.contours.len(),
                frame.disks.len()
            );
        }
        Err(e) => println!("❌ Frame validation failed: {e}"),
    }

    Ok(())
}
