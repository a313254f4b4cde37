//! # Shaker Door Components
//!
//! Decomposes a door's outer dimensions into a five-piece shaker frame:
//! two full-height stiles, two rails spanning between the stiles, and a
//! captured center panel.
//!
//! Two views are provided and they are not equivalent:
//!
//! - [`calculate_shaker_door_parts`] returns a production cut list and adds
//!   `panel_gap` to both panel dimensions as an expansion allowance.
//! - [`calculate_shaker_door_components`] returns nominal joinery lengths
//!   with no panel allowance.

use serde::{Deserialize, Serialize};

use crate::types::{DoorDimensions, MaterialCut};

/// Default panel expansion allowance
pub const DEFAULT_PANEL_GAP: f64 = 2.0;

/// Shaker cut list: Stile (x2), Rail (x2), Panel (x1), in that order.
pub fn calculate_shaker_door_parts(
    door: &DoorDimensions,
    rail_width: f64,
    stile_width: f64,
    panel_gap: f64,
) -> Vec<MaterialCut> {
    let rail_length = door.width - 2.0 * stile_width;
    let panel_width = door.width - 2.0 * stile_width + panel_gap;
    let panel_height = door.height - 2.0 * rail_width + panel_gap;

    vec![
        MaterialCut::new("Stile", stile_width, door.height, 2),
        MaterialCut::new("Rail", rail_length, rail_width, 2),
        MaterialCut::new("Panel", panel_width, panel_height, 1),
    ]
}

/// [`calculate_shaker_door_parts`] with [`DEFAULT_PANEL_GAP`].
pub fn shaker_door_parts_default(door: &DoorDimensions, rail_width: f64, stile_width: f64) -> Vec<MaterialCut> {
    calculate_shaker_door_parts(door, rail_width, stile_width, DEFAULT_PANEL_GAP)
}

/// Nominal shaker component lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShakerDoorComponents {
    pub top_rail: f64,
    pub bottom_rail: f64,

    /// Length of each stile (full door height)
    pub stiles: f64,

    pub panel_width: f64,
    pub panel_height: f64,
}

/// Nominal rail, stile and panel lengths (no panel allowance).
///
/// Note the argument order: stile width before rail width.
pub fn calculate_shaker_door_components(
    door: &DoorDimensions,
    stile_width: f64,
    rail_width: f64,
) -> ShakerDoorComponents {
    let rail = door.width - 2.0 * stile_width;
    ShakerDoorComponents {
        top_rail: rail,
        bottom_rail: rail,
        stiles: door.height,
        panel_width: door.width - 2.0 * stile_width,
        panel_height: door.height - 2.0 * rail_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shaker_parts_layout() {
        let door = DoorDimensions::new(400.0, 700.0);
        let parts = calculate_shaker_door_parts(&door, 70.0, 60.0, 2.0);

        assert_eq!(parts.len(), 3);
        let names: Vec<&str> = parts.iter().map(|p| p.part_name.as_str()).collect();
        assert_eq!(names, vec!["Stile", "Rail", "Panel"]);
        let quantities: Vec<u32> = parts.iter().map(|p| p.quantity).collect();
        assert_eq!(quantities, vec![2, 2, 1]);

        assert_eq!((parts[0].width, parts[0].height), (60.0, 700.0));
        assert_eq!((parts[1].width, parts[1].height), (280.0, 70.0));
        assert_eq!((parts[2].width, parts[2].height), (282.0, 562.0));
    }

    #[test]
    fn test_shaker_parts_default_gap() {
        let door = DoorDimensions::new(400.0, 700.0);
        let parts = shaker_door_parts_default(&door, 70.0, 60.0);
        assert_eq!(parts, calculate_shaker_door_parts(&door, 70.0, 60.0, 2.0));
    }

    #[test]
    fn test_shaker_parts_degenerate_door_still_three_entries() {
        let parts = calculate_shaker_door_parts(&DoorDimensions::new(50.0, 50.0), 40.0, 40.0, 0.0);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].width, -30.0);
        assert_eq!(parts[2].height, -30.0);
    }

    #[test]
    fn test_shaker_components() {
        let door = DoorDimensions::new(400.0, 700.0);
        let components = calculate_shaker_door_components(&door, 60.0, 70.0);
        assert_eq!(components.top_rail, 280.0);
        assert_eq!(components.bottom_rail, 280.0);
        assert_eq!(components.stiles, 700.0);
        assert_eq!(components.panel_width, 280.0);
        assert_eq!(components.panel_height, 560.0);
    }

    #[test]
    fn test_components_omit_panel_gap() {
        let door = DoorDimensions::new(400.0, 700.0);
        let parts = calculate_shaker_door_parts(&door, 70.0, 60.0, 2.0);
        let components = calculate_shaker_door_components(&door, 60.0, 70.0);
        assert_eq!(parts[2].width - components.panel_width, 2.0);
        assert_eq!(parts[2].height - components.panel_height, 2.0);
    }
}
