/// Example building a Penrose-like and an Ammann–Beenker tiling
///
/// Shows the builder, per-family tile counts, and the planar geometry of a
/// few tiles as an exporter would read them.
use quasi_tiler::{TilingBuilder, TilingConfig, TilingHandle, ViewExtent};
use quasi_tiler::tiling::NullReporter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Five-fold star, D = 5 ===\n");
    let penrose = TilingBuilder::new()
        .with_dimension(5)
        .with_symmetry(5)
        .with_extent(8.0, 8.0)
        .build()?;

    let summary = penrose.summary();
    println!("   vertices: {}", summary.vertex_count);
    println!("   tiles:    {} in {} families", summary.tile_count, summary.family_count);
    for family in &summary.families {
        println!(
            "   ({}, {})  {:>6.1}°  {} tiles",
            family.axes[0], family.axes[1], family.angle_degrees, family.tiles
        );
    }

    println!("\n   First tiles of family (0, 1):");
    let projector = penrose.projector();
    for anchor in penrose.tile_list(0, 1)?.iter().take(3) {
        let corners = projector.corners_of(anchor, 0, 1)?;
        let centroid = projector.centroid_of(anchor, 0, 1)?;
        println!(
            "   anchor {:>4} {:?}  centroid ({:.3}, {:.3})  c0 ({:.3}, {:.3})",
            anchor,
            penrose.vertex(anchor)?,
            centroid.x,
            centroid.y,
            corners[0].x,
            corners[0].y
        );
    }

    println!("\n=== Eight-fold star, D = 4, through a shared handle ===\n");
    let handle = TilingHandle::new();
    let tiling = handle.initialize(TilingConfig::ammann_beenker(ViewExtent::square(8.0)), &mut NullReporter)?;
    println!("   state:    {:?}", handle.state());
    println!("   vertices: {}", tiling.vertex_count());
    println!("   tiles:    {}", tiling.families().tile_count());

    handle.invalidate();
    println!("   after invalidate: {:?}", handle.state());

    Ok(())
}
