//! Command-line argument definitions.

use std::path::PathBuf;

use cabinet_core::calculations::HingeType;
use cabinet_core::FitType;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cabinet_cli", version, about = "Cabinet door, drawer and hardware calculator")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Print results as JSON instead of a text summary
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Shop settings JSON file (overlay, gap, fit, hardware offsets)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Overlay per side, overrides the settings file
    #[arg(long, global = true, env = "CABINET_OVERLAY")]
    pub overlay: Option<f64>,

    /// Inset reveal per side, overrides the settings file
    #[arg(long, global = true, env = "CABINET_GAP")]
    pub gap: Option<f64>,

    /// Fit style: inset or overlay
    #[arg(long, global = true, env = "CABINET_FIT")]
    pub fit: Option<FitType>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Door size and cut list for an opening
    Door(DoorArgs),

    /// Split an opening into a pair of overlay doors
    DoubleDoors(DoubleDoorArgs),

    /// Drawer front cut list
    DrawerFront(DrawerFrontArgs),

    /// Handle position on a door
    Handle(HandleArgs),

    /// Evenly spaced hinge positions on a door
    Hinges(HingeArgs),

    /// Blum Clip Top hinge plate positions
    ClipTop(ClipTopArgs),

    /// Blum Tandembox drilling points
    Tandembox(TandemboxArgs),

    /// Shaker rail/stile/panel breakdown
    Shaker(ShakerArgs),

    /// Evaluate JSON calculation requests (a single object or an array)
    Eval(EvalArgs),
}

#[derive(Debug, Args)]
pub struct DoorArgs {
    /// Opening width
    pub width: f64,

    /// Opening height
    pub height: f64,

    /// Always apply the overlay formula, ignoring the fit style
    #[arg(long)]
    pub single: bool,

    /// Label for the cut-list entry
    #[arg(long, default_value = "Door")]
    pub part_name: String,

    #[arg(long, default_value_t = 1)]
    pub quantity: u32,
}

#[derive(Debug, Args)]
pub struct DoubleDoorArgs {
    pub width: f64,
    pub height: f64,

    /// Gap between the two doors
    #[arg(long, default_value_t = 3.0)]
    pub gap_between: f64,
}

#[derive(Debug, Args)]
pub struct DrawerFrontArgs {
    /// Opening width
    pub width: f64,

    /// Drawer face height before fit adjustment
    pub front_height: f64,

    /// Internal drawer box height
    #[arg(long, default_value_t = 0.0)]
    pub box_height: f64,

    #[arg(long, default_value = "Drawer Front")]
    pub part_name: String,

    #[arg(long, default_value_t = 1)]
    pub quantity: u32,
}

#[derive(Debug, Args)]
pub struct HandleArgs {
    pub door_width: f64,
    pub door_height: f64,

    /// Distance in from the right edge (defaults to shop settings)
    #[arg(long)]
    pub offset_x: Option<f64>,

    /// Distance in from the bottom edge (defaults to shop settings)
    #[arg(long)]
    pub offset_y: Option<f64>,
}

#[derive(Debug, Args)]
pub struct HingeArgs {
    pub door_width: f64,
    pub door_height: f64,

    #[arg(long, default_value_t = 2)]
    pub count: u32,

    /// Distance from top/bottom edge to the outer hinges (defaults to shop settings)
    #[arg(long)]
    pub edge_offset: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ClipTopArgs {
    pub door_height: f64,

    #[arg(long, default_value = "straight")]
    pub hinge_type: HingeType,

    #[arg(long)]
    pub top_gap: Option<f64>,

    #[arg(long)]
    pub bottom_gap: Option<f64>,
}

#[derive(Debug, Args)]
pub struct TandemboxArgs {
    pub box_width: f64,
    pub box_depth: f64,

    /// Slide length (defaults to the box depth)
    #[arg(long)]
    pub slide_length: Option<f64>,

    /// Model code: M, B or D
    #[arg(long, default_value = "M")]
    pub model: String,
}

#[derive(Debug, Args)]
pub struct ShakerArgs {
    pub door_width: f64,
    pub door_height: f64,

    #[arg(long, default_value_t = 70.0)]
    pub rail_width: f64,

    #[arg(long, default_value_t = 70.0)]
    pub stile_width: f64,

    /// Panel expansion allowance (defaults to shop settings)
    #[arg(long)]
    pub panel_gap: Option<f64>,

    /// Print nominal component lengths instead of the cut list
    #[arg(long)]
    pub components: bool,
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    /// Request file, or "-" for stdin
    #[arg(default_value = "-")]
    pub input: String,
}
