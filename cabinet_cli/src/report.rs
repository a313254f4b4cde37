//! Plain-text rendering of calculation results.

use cabinet_core::calculations::{ClipTopHingePositions, ShakerDoorComponents, TandemboxDrillPoints};
use cabinet_core::types::{total_area, DrillPoint, HardwareLocation, MaterialCut};
use cabinet_core::{CalculationOutput, CalculationRequest};

const RULE: &str = "═══════════════════════════════════════";

pub fn print_output(request: &CalculationRequest, output: &CalculationOutput) {
    println!("{}", RULE);
    println!("  {}", request.name().replace('_', " ").to_uppercase());
    println!("{}", RULE);
    println!();

    match output {
        CalculationOutput::Door(door) => {
            println!("  Door:  {:.1} x {:.1}", door.width, door.height);
        }
        CalculationOutput::DoubleDoors { left, right } => {
            println!("  Left:  {:.2} x {:.2}", left.width, left.height);
            println!("  Right: {:.2} x {:.2}", right.width, right.height);
        }
        CalculationOutput::Cuts { cuts } => print_cuts(cuts),
        CalculationOutput::Location(location) => print_location(location),
        CalculationOutput::Locations { locations } => {
            for location in locations {
                print_location(location);
            }
        }
        CalculationOutput::ClipTop(positions) => print_clip_top(positions),
        CalculationOutput::Tandembox(points) => print_tandembox(points),
        CalculationOutput::ShakerComponents(components) => print_components(components),
    }
    println!();
}

fn print_cuts(cuts: &[MaterialCut]) {
    println!("  {:<16} {:>10} {:>10} {:>5}", "Part", "Width", "Height", "Qty");
    for cut in cuts {
        println!(
            "  {:<16} {:>10.1} {:>10.1} {:>5}",
            cut.part_name, cut.width, cut.height, cut.quantity
        );
    }
    println!();
    println!("  Total face area: {:.0}", total_area(cuts));
}

fn print_location(location: &HardwareLocation) {
    let label = location.pattern.as_deref().unwrap_or("point");
    println!("  {:<8} x = {:>8.1}  y = {:>8.1}", label, location.x, location.y);
}

fn print_clip_top(positions: &ClipTopHingePositions) {
    println!("  Hinges: {}", positions.hinge_count());
    for (i, y) in positions.all_positions().iter().enumerate() {
        println!("  #{}  {:>8.1} from top", i + 1, y);
    }
}

fn print_tandembox(points: &TandemboxDrillPoints) {
    if points.is_empty() {
        println!("  No drilling pattern for this model.");
        return;
    }
    print_group("Front bracket", &points.front_bracket);
    print_group("Side drill", &points.side_drill);
    print_group("Bottom drill", &points.bottom_drill);
}

fn print_group(name: &str, points: &[DrillPoint]) {
    println!("  {}:", name);
    for point in points {
        println!("    x = {:>8.1}  y = {:>8.1}", point.x, point.y);
    }
}

fn print_components(components: &ShakerDoorComponents) {
    println!("  Top rail:     {:.1}", components.top_rail);
    println!("  Bottom rail:  {:.1}", components.bottom_rail);
    println!("  Stiles:       {:.1}", components.stiles);
    println!("  Panel:        {:.1} x {:.1}", components.panel_width, components.panel_height);
}
