//! # Cabinet Calculations
//!
//! This module contains every calculator. Each one is a pure function of its
//! arguments: no state, no I/O, no failure modes.
//!
//! - [`door_drawer`] - Door and drawer-front dimensions and cut lists
//! - [`hardware`] - Handle, hinge and drawer-system drilling coordinates
//! - [`shaker`] - Shaker rail/stile/panel breakdown
//!
//! ## JSON Requests
//!
//! For callers that speak JSON, [`CalculationRequest`] wraps the arguments of
//! any calculator in one tagged enum and [`evaluate`] dispatches it.
//!
//! ```rust
//! use cabinet_core::calculations::{evaluate_json, CalculationOutput};
//!
//! let output = evaluate_json(r#"{
//!     "calculation": "single_door",
//!     "opening": { "width": 400.0, "height": 700.0 },
//!     "options": { "overlay": 18.0, "gap": 2.0, "type": "overlay" }
//! }"#).unwrap();
//!
//! match output {
//!     CalculationOutput::Door(door) => assert_eq!(door.width, 436.0),
//!     other => panic!("unexpected output: {:?}", other),
//! }
//! ```

pub mod door_drawer;
pub mod hardware;
pub mod shaker;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::types::{DoorDimensions, DoorOptions, DrawerOptions, HardwareLocation, MaterialCut, OpeningDimensions};

// Re-export commonly used types
pub use hardware::{ClipTopHingePositions, HingeType, TandemboxDrillPoints, TandemboxModel};
pub use shaker::ShakerDoorComponents;

fn default_door_part_name() -> String {
    door_drawer::DEFAULT_DOOR_PART_NAME.to_string()
}

fn default_drawer_front_part_name() -> String {
    door_drawer::DEFAULT_DRAWER_FRONT_PART_NAME.to_string()
}

fn default_quantity() -> u32 {
    1
}

fn default_panel_gap() -> f64 {
    shaker::DEFAULT_PANEL_GAP
}

/// One calculation and its arguments.
///
/// ## JSON Example
///
/// ```json
/// {
///   "calculation": "hinge_placements",
///   "door": { "width": 436.0, "height": 736.0 },
///   "count": 2,
///   "edge_offset": 100.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculation", rename_all = "snake_case")]
pub enum CalculationRequest {
    DoorDimensions {
        opening: OpeningDimensions,
        options: DoorOptions,
    },
    DoorMaterialCuts {
        door: DoorDimensions,
        #[serde(default = "default_door_part_name")]
        part_name: String,
        #[serde(default = "default_quantity")]
        quantity: u32,
    },
    DrawerFrontMaterialCuts {
        opening: OpeningDimensions,
        options: DrawerOptions,
        #[serde(default = "default_drawer_front_part_name")]
        part_name: String,
        #[serde(default = "default_quantity")]
        quantity: u32,
    },
    SingleDoor {
        opening: OpeningDimensions,
        options: DoorOptions,
    },
    DoubleDoors {
        opening: OpeningDimensions,
        options: DoorOptions,
        gap_between: f64,
    },
    HandlePlacement {
        door: DoorDimensions,
        offset_x: f64,
        offset_y: f64,
    },
    HingePlacements {
        door: DoorDimensions,
        count: u32,
        edge_offset: f64,
    },
    BlumClipTopHingePlate {
        door_height: f64,
        #[serde(default)]
        hinge_type: HingeType,
        #[serde(default)]
        top_gap: Option<f64>,
        #[serde(default)]
        bottom_gap: Option<f64>,
    },
    BlumTandemboxDrillPoints {
        drawer_box_width: f64,
        drawer_box_depth: f64,
        slide_length: f64,
        /// Model code; anything other than "M", "B" or "D" yields no drill points
        model: String,
    },
    ShakerDoorParts {
        door: DoorDimensions,
        rail_width: f64,
        stile_width: f64,
        #[serde(default = "default_panel_gap")]
        panel_gap: f64,
    },
    ShakerDoorComponents {
        door: DoorDimensions,
        stile_width: f64,
        rail_width: f64,
    },
}

impl CalculationRequest {
    /// Stable snake_case name, matching the JSON `calculation` tag.
    pub fn name(&self) -> &'static str {
        match self {
            CalculationRequest::DoorDimensions { .. } => "door_dimensions",
            CalculationRequest::DoorMaterialCuts { .. } => "door_material_cuts",
            CalculationRequest::DrawerFrontMaterialCuts { .. } => "drawer_front_material_cuts",
            CalculationRequest::SingleDoor { .. } => "single_door",
            CalculationRequest::DoubleDoors { .. } => "double_doors",
            CalculationRequest::HandlePlacement { .. } => "handle_placement",
            CalculationRequest::HingePlacements { .. } => "hinge_placements",
            CalculationRequest::BlumClipTopHingePlate { .. } => "blum_clip_top_hinge_plate",
            CalculationRequest::BlumTandemboxDrillPoints { .. } => "blum_tandembox_drill_points",
            CalculationRequest::ShakerDoorParts { .. } => "shaker_door_parts",
            CalculationRequest::ShakerDoorComponents { .. } => "shaker_door_components",
        }
    }
}

/// Result of evaluating a [`CalculationRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationOutput {
    Door(DoorDimensions),
    DoubleDoors {
        left: DoorDimensions,
        right: DoorDimensions,
    },
    Cuts {
        cuts: Vec<MaterialCut>,
    },
    Location(HardwareLocation),
    Locations {
        locations: Vec<HardwareLocation>,
    },
    ClipTop(ClipTopHingePositions),
    Tandembox(TandemboxDrillPoints),
    ShakerComponents(ShakerDoorComponents),
}

/// Run one calculation.
pub fn evaluate(request: &CalculationRequest) -> CalculationOutput {
    tracing::debug!(calculation = request.name(), "evaluating");

    match request {
        CalculationRequest::DoorDimensions { opening, options } => {
            CalculationOutput::Door(door_drawer::calculate_door_dimensions(opening, options))
        }
        CalculationRequest::DoorMaterialCuts {
            door,
            part_name,
            quantity,
        } => CalculationOutput::Cuts {
            cuts: door_drawer::get_door_material_cuts(door, part_name, *quantity),
        },
        CalculationRequest::DrawerFrontMaterialCuts {
            opening,
            options,
            part_name,
            quantity,
        } => CalculationOutput::Cuts {
            cuts: door_drawer::get_drawer_front_material_cuts(opening, options, part_name, *quantity),
        },
        CalculationRequest::SingleDoor { opening, options } => {
            CalculationOutput::Door(door_drawer::calculate_single_door(opening, options))
        }
        CalculationRequest::DoubleDoors {
            opening,
            options,
            gap_between,
        } => {
            let (left, right) = door_drawer::calculate_double_doors(opening, options, *gap_between);
            CalculationOutput::DoubleDoors { left, right }
        }
        CalculationRequest::HandlePlacement {
            door,
            offset_x,
            offset_y,
        } => CalculationOutput::Location(hardware::calculate_handle_placement(door, *offset_x, *offset_y)),
        CalculationRequest::HingePlacements {
            door,
            count,
            edge_offset,
        } => CalculationOutput::Locations {
            locations: hardware::calculate_hinge_placements(door, *count, *edge_offset),
        },
        CalculationRequest::BlumClipTopHingePlate {
            door_height,
            hinge_type,
            top_gap,
            bottom_gap,
        } => CalculationOutput::ClipTop(hardware::calculate_blum_clip_top_hinge_plate(
            *door_height,
            *hinge_type,
            *top_gap,
            *bottom_gap,
        )),
        CalculationRequest::BlumTandemboxDrillPoints {
            drawer_box_width,
            drawer_box_depth,
            slide_length,
            model,
        } => CalculationOutput::Tandembox(hardware::calculate_blum_tandembox_drill_points(
            *drawer_box_width,
            *drawer_box_depth,
            *slide_length,
            model,
        )),
        CalculationRequest::ShakerDoorParts {
            door,
            rail_width,
            stile_width,
            panel_gap,
        } => CalculationOutput::Cuts {
            cuts: shaker::calculate_shaker_door_parts(door, *rail_width, *stile_width, *panel_gap),
        },
        CalculationRequest::ShakerDoorComponents {
            door,
            stile_width,
            rail_width,
        } => CalculationOutput::ShakerComponents(shaker::calculate_shaker_door_components(
            door,
            *stile_width,
            *rail_width,
        )),
    }
}

/// Evaluate many requests independently, preserving order.
pub fn evaluate_batch(requests: &[CalculationRequest]) -> Vec<CalculationOutput> {
    requests.iter().map(evaluate).collect()
}

/// Decode a JSON request and evaluate it.
pub fn evaluate_json(json: &str) -> CalcResult<CalculationOutput> {
    let request: CalculationRequest = serde_json::from_str(json)?;
    Ok(evaluate(&request))
}
