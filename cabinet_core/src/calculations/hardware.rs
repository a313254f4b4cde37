//! # Hardware Placement
//!
//! Handle, hinge and drawer-system drilling coordinates. All points are in the
//! part's local coordinate system: x across the width, y along the height
//! (or depth for drawer boxes), origin at the part's corner.
//!
//! ## Hardware Rule Tables
//!
//! | Hardware              | Rule                                                   |
//! |-----------------------|--------------------------------------------------------|
//! | Blum Clip Top plates  | 2 hinges below 900, 3 below 1600, 4 from 1600 up       |
//! | Blum Tandembox M      | edge inset 37, front offset 9                          |
//! | Blum Tandembox B      | edge inset 42, front offset 12                         |
//! | Blum Tandembox D      | edge inset 50, front offset 15                         |
//!
//! These are working values for layout; check the manufacturer's drilling
//! templates before production runs.
//!
//! ## Example
//!
//! ```rust
//! use cabinet_core::calculations::hardware::{calculate_blum_clip_top_hinge_plate, HingeType};
//!
//! let plates = calculate_blum_clip_top_hinge_plate(1200.0, HingeType::Straight, None, None);
//! assert_eq!(plates.top_hinge, 100.0);
//! assert_eq!(plates.bottom_hinge, 1100.0);
//! assert_eq!(plates.middle_hinges, Some(vec![600.0]));
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::types::{DoorDimensions, DrillPoint, HardwareLocation};

/// Pattern label for handle locations
pub const HANDLE_PATTERN: &str = "handle";

/// Pattern label for hinge locations
pub const HINGE_PATTERN: &str = "hinge";

/// Default distance from each door edge to the outermost Clip Top hinge
pub const CLIP_TOP_DEFAULT_GAP: f64 = 100.0;

/// Door height at which a third Clip Top hinge is required
pub const CLIP_TOP_MIN_HEIGHT_FOR_3: f64 = 900.0;

/// Door height at which a fourth Clip Top hinge is required
pub const CLIP_TOP_MIN_HEIGHT_FOR_4: f64 = 1600.0;

// ============================================================================
// Handles and generic hinges
// ============================================================================

/// Handle position measured inward from the door's far (bottom-right) corner.
pub fn calculate_handle_placement(door: &DoorDimensions, offset_x: f64, offset_y: f64) -> HardwareLocation {
    HardwareLocation::new(door.width - offset_x, door.height - offset_y, HANDLE_PATTERN)
}

/// Evenly spaced hinges along the hinge-side edge (x = 0).
///
/// With fewer than two hinges a single hinge goes at mid-height and
/// `edge_offset` is ignored. Otherwise the first hinge sits at `edge_offset`,
/// the last at `height - edge_offset`, and the rest are interpolated linearly.
pub fn calculate_hinge_placements(door: &DoorDimensions, count: u32, edge_offset: f64) -> Vec<HardwareLocation> {
    if count < 2 {
        return vec![HardwareLocation::new(0.0, door.height / 2.0, HINGE_PATTERN)];
    }

    let usable_height = door.height - 2.0 * edge_offset;
    let last = f64::from(count - 1);
    (0..count)
        .map(|i| {
            let y = edge_offset + usable_height * f64::from(i) / last;
            HardwareLocation::new(0.0, y, HINGE_PATTERN)
        })
        .collect()
}

// ============================================================================
// Blum Clip Top hinge plates
// ============================================================================

/// Clip Top hinge arm style.
///
/// Accepted for signature compatibility; the current rule table does not
/// change geometry by hinge type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HingeType {
    #[default]
    Straight,
    Cranked,
}

impl HingeType {
    pub fn display_name(&self) -> &'static str {
        match self {
            HingeType::Straight => "straight",
            HingeType::Cranked => "cranked",
        }
    }
}

impl std::fmt::Display for HingeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for HingeType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "straight" => Ok(HingeType::Straight),
            "cranked" => Ok(HingeType::Cranked),
            _ => Err(CalcError::invalid_input(
                "hinge_type",
                s,
                "Hinge type must be 'straight' or 'cranked'",
            )),
        }
    }
}

/// Hinge plate positions, measured from the top edge of the door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipTopHingePositions {
    pub top_hinge: f64,
    pub bottom_hinge: f64,

    /// `None` for two-hinge doors
    pub middle_hinges: Option<Vec<f64>>,
}

impl ClipTopHingePositions {
    pub fn hinge_count(&self) -> usize {
        2 + self.middle_hinges.as_ref().map_or(0, Vec::len)
    }

    /// Every hinge position: top, middles, bottom.
    pub fn all_positions(&self) -> Vec<f64> {
        let mut positions = Vec::with_capacity(self.hinge_count());
        positions.push(self.top_hinge);
        if let Some(middle) = &self.middle_hinges {
            positions.extend_from_slice(middle);
        }
        positions.push(self.bottom_hinge);
        positions
    }
}

/// Blum Clip Top hinge plate positions for a door of the given height.
///
/// Gaps default to [`CLIP_TOP_DEFAULT_GAP`]. A three-hinge door puts its
/// middle hinge at half the full door height; a four-hinge door splits the
/// span between the top and bottom hinges into thirds.
pub fn calculate_blum_clip_top_hinge_plate(
    door_height: f64,
    _hinge_type: HingeType,
    top_gap: Option<f64>,
    bottom_gap: Option<f64>,
) -> ClipTopHingePositions {
    let top_hinge = top_gap.unwrap_or(CLIP_TOP_DEFAULT_GAP);
    let bottom_hinge = door_height - bottom_gap.unwrap_or(CLIP_TOP_DEFAULT_GAP);

    let middle_hinges = if door_height >= CLIP_TOP_MIN_HEIGHT_FOR_4 {
        let span = bottom_hinge - top_hinge;
        Some(vec![top_hinge + span / 3.0, top_hinge + 2.0 * span / 3.0])
    } else if door_height >= CLIP_TOP_MIN_HEIGHT_FOR_3 {
        Some(vec![door_height / 2.0])
    } else {
        None
    };

    ClipTopHingePositions {
        top_hinge,
        bottom_hinge,
        middle_hinges,
    }
}

// ============================================================================
// Blum Tandembox drawer systems
// ============================================================================

/// Tandembox drawer system model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TandemboxModel {
    /// Standard height
    M,
    /// Deeper box
    B,
    /// Tallest box
    D,
}

impl TandemboxModel {
    /// Look up a model by its single-letter code. Exact match only.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(TandemboxModel::M),
            "B" => Some(TandemboxModel::B),
            "D" => Some(TandemboxModel::D),
            _ => None,
        }
    }

    /// Drilling offsets as `(edge_inset, front_offset)`.
    pub fn offsets(&self) -> (f64, f64) {
        match self {
            TandemboxModel::M => (37.0, 9.0),
            TandemboxModel::B => (42.0, 12.0),
            TandemboxModel::D => (50.0, 15.0),
        }
    }
}

/// Tandembox drilling groups, each mirrored left/right across the box width.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TandemboxDrillPoints {
    pub front_bracket: Vec<DrillPoint>,
    pub side_drill: Vec<DrillPoint>,
    pub bottom_drill: Vec<DrillPoint>,
}

impl TandemboxDrillPoints {
    pub fn is_empty(&self) -> bool {
        self.front_bracket.is_empty() && self.side_drill.is_empty() && self.bottom_drill.is_empty()
    }
}

/// Mirror a point at `inset` from the left edge onto the right edge.
fn mirrored_pair(box_width: f64, inset: f64, y: f64) -> Vec<DrillPoint> {
    vec![DrillPoint::new(inset, y), DrillPoint::new(box_width - inset, y)]
}

/// Tandembox drilling groups for a parsed model.
///
/// `slide_length` does not affect the current rule set.
pub fn tandembox_drill_points(
    model: TandemboxModel,
    drawer_box_width: f64,
    drawer_box_depth: f64,
    _slide_length: f64,
) -> TandemboxDrillPoints {
    let (inset, front_offset) = model.offsets();
    TandemboxDrillPoints {
        front_bracket: mirrored_pair(drawer_box_width, inset, front_offset),
        side_drill: mirrored_pair(drawer_box_width, inset, inset),
        bottom_drill: mirrored_pair(drawer_box_width, inset, drawer_box_depth - inset),
    }
}

/// Tandembox drilling groups for a model code ("M", "B" or "D").
///
/// An unrecognized code yields three empty groups rather than an error.
pub fn calculate_blum_tandembox_drill_points(
    drawer_box_width: f64,
    drawer_box_depth: f64,
    slide_length: f64,
    model: &str,
) -> TandemboxDrillPoints {
    match TandemboxModel::from_code(model) {
        Some(model) => tandembox_drill_points(model, drawer_box_width, drawer_box_depth, slide_length),
        None => {
            tracing::debug!(model, "unrecognized Tandembox model, no drill points");
            TandemboxDrillPoints::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_handle_placement() {
        let door = DoorDimensions::new(436.0, 736.0);
        let handle = calculate_handle_placement(&door, 30.0, 100.0);
        assert_eq!(handle.x, 406.0);
        assert_eq!(handle.y, 636.0);
        assert_eq!(handle.pattern.as_deref(), Some("handle"));
    }

    #[test]
    fn test_single_hinge_at_center() {
        let door = DoorDimensions::new(400.0, 700.0);
        for count in [0, 1] {
            let hinges = calculate_hinge_placements(&door, count, 85.0);
            assert_eq!(hinges.len(), 1);
            assert_eq!(hinges[0].x, 0.0);
            assert_eq!(hinges[0].y, 350.0);
            assert_eq!(hinges[0].pattern.as_deref(), Some("hinge"));
        }
    }

    #[test]
    fn test_hinges_evenly_spaced() {
        let door = DoorDimensions::new(400.0, 1000.0);
        let hinges = calculate_hinge_placements(&door, 3, 100.0);
        let ys: Vec<f64> = hinges.iter().map(|h| h.y).collect();
        assert_eq!(ys, vec![100.0, 500.0, 900.0]);
        assert!(hinges.iter().all(|h| h.x == 0.0));
    }

    #[test]
    fn test_hinges_first_last_and_monotonic() {
        let door = DoorDimensions::new(450.0, 2100.0);
        let edge_offset = 95.0;
        for count in 2..=6 {
            let hinges = calculate_hinge_placements(&door, count, edge_offset);
            assert_eq!(hinges.len(), count as usize);
            assert!((hinges[0].y - edge_offset).abs() < EPS);
            assert!((hinges[hinges.len() - 1].y - (door.height - edge_offset)).abs() < EPS);
            assert!(hinges.windows(2).all(|pair| pair[1].y > pair[0].y));
        }
    }

    #[test]
    fn test_clip_top_two_hinges() {
        let plates = calculate_blum_clip_top_hinge_plate(899.0, HingeType::Straight, None, None);
        assert_eq!(plates.top_hinge, 100.0);
        assert_eq!(plates.bottom_hinge, 799.0);
        assert_eq!(plates.middle_hinges, None);
        assert_eq!(plates.hinge_count(), 2);
    }

    #[test]
    fn test_clip_top_three_hinges_use_full_height_midpoint() {
        let plates = calculate_blum_clip_top_hinge_plate(900.0, HingeType::Straight, Some(80.0), Some(120.0));
        assert_eq!(plates.middle_hinges, Some(vec![450.0]));
        assert_eq!(plates.hinge_count(), 3);

        let plates = calculate_blum_clip_top_hinge_plate(1599.0, HingeType::Straight, None, None);
        assert_eq!(plates.middle_hinges, Some(vec![799.5]));
    }

    #[test]
    fn test_clip_top_four_hinges_split_span() {
        let plates = calculate_blum_clip_top_hinge_plate(1600.0, HingeType::Straight, None, None);
        // span = 1500 - 100 = 1400
        let middle = plates.middle_hinges.clone().unwrap();
        assert_eq!(middle.len(), 2);
        assert!((middle[0] - (100.0 + 1400.0 / 3.0)).abs() < EPS);
        assert!((middle[1] - (100.0 + 2800.0 / 3.0)).abs() < EPS);
        assert_eq!(plates.hinge_count(), 4);

        let all = plates.all_positions();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], 100.0);
        assert_eq!(all[3], 1500.0);
    }

    #[test]
    fn test_clip_top_four_hinges_split_span_with_unequal_gaps() {
        let plates = calculate_blum_clip_top_hinge_plate(1800.0, HingeType::Straight, Some(80.0), Some(120.0));
        assert_eq!(plates.top_hinge, 80.0);
        assert_eq!(plates.bottom_hinge, 1680.0);

        // span = 1680 - 80 = 1600, so thirds land at 80 + 533.33 and 80 + 1066.67
        let middle = plates.middle_hinges.clone().unwrap();
        assert_eq!(middle.len(), 2);
        assert!((middle[0] - (80.0 + 1600.0 / 3.0)).abs() < EPS);
        assert!((middle[1] - (80.0 + 3200.0 / 3.0)).abs() < EPS);

        // Not thirds of the door height
        assert!((middle[0] - 1800.0 / 3.0).abs() > 1.0);
        assert!((middle[1] - 2.0 * 1800.0 / 3.0).abs() > 1.0);
    }

    #[test]
    fn test_clip_top_hinge_type_is_inert() {
        let straight = calculate_blum_clip_top_hinge_plate(1700.0, HingeType::Straight, None, None);
        let cranked = calculate_blum_clip_top_hinge_plate(1700.0, HingeType::Cranked, None, None);
        assert_eq!(straight, cranked);
    }

    #[test]
    fn test_hinge_type_parsing() {
        assert_eq!("Cranked".parse::<HingeType>().unwrap(), HingeType::Cranked);
        assert!("offset".parse::<HingeType>().is_err());

        for hinge_type in [HingeType::Straight, HingeType::Cranked] {
            assert_eq!(hinge_type.to_string().parse::<HingeType>().unwrap(), hinge_type);
        }
    }

    #[test]
    fn test_tandembox_model_m() {
        let points = calculate_blum_tandembox_drill_points(500.0, 450.0, 450.0, "M");
        assert_eq!(points.front_bracket, vec![DrillPoint::new(37.0, 9.0), DrillPoint::new(463.0, 9.0)]);
        assert_eq!(points.side_drill, vec![DrillPoint::new(37.0, 37.0), DrillPoint::new(463.0, 37.0)]);
        assert_eq!(points.bottom_drill, vec![DrillPoint::new(37.0, 413.0), DrillPoint::new(463.0, 413.0)]);
    }

    #[test]
    fn test_tandembox_models_b_and_d() {
        let b = calculate_blum_tandembox_drill_points(600.0, 500.0, 500.0, "B");
        assert_eq!(b.front_bracket, vec![DrillPoint::new(42.0, 12.0), DrillPoint::new(558.0, 12.0)]);
        assert_eq!(b.bottom_drill[1], DrillPoint::new(558.0, 458.0));

        let d = calculate_blum_tandembox_drill_points(600.0, 500.0, 500.0, "D");
        assert_eq!(d.front_bracket, vec![DrillPoint::new(50.0, 15.0), DrillPoint::new(550.0, 15.0)]);
        assert_eq!(d.side_drill[0], DrillPoint::new(50.0, 50.0));
        assert_eq!(d.bottom_drill[0], DrillPoint::new(50.0, 450.0));
    }

    #[test]
    fn test_tandembox_unknown_model_is_empty() {
        for code in ["X", "m", "", "MB"] {
            let points = calculate_blum_tandembox_drill_points(500.0, 450.0, 450.0, code);
            assert!(points.is_empty());
            assert_eq!(points, TandemboxDrillPoints::default());
        }
    }

    #[test]
    fn test_tandembox_slide_length_is_inert() {
        let short = tandembox_drill_points(TandemboxModel::B, 500.0, 450.0, 270.0);
        let long = tandembox_drill_points(TandemboxModel::B, 500.0, 450.0, 650.0);
        assert_eq!(short, long);
    }

    #[test]
    fn test_tandembox_json_shape() {
        let json = serde_json::to_string(&calculate_blum_tandembox_drill_points(1.0, 1.0, 1.0, "Q")).unwrap();
        assert_eq!(json, r#"{"front_bracket":[],"side_drill":[],"bottom_drill":[]}"#);
    }
}
