//! # Door & Drawer Front Dimensions
//!
//! Converts a cabinet opening and a fit style into door or drawer-front
//! outer dimensions, and packages those dimensions as cut-list entries.
//!
//! ## Formulas
//!
//! - Inset: `size = opening - 2 * gap` (reveal on every side)
//! - Overlay: `size = opening + 2 * overlay` (door covers the face frame)
//! - Double doors: `width = (opening.width + 2 * overlay - gap_between) / 2`
//!
//! No bounds checking is done. A gap larger than half the opening gives a
//! negative dimension, and that value is returned as-is.
//!
//! ## Example
//!
//! ```rust
//! use cabinet_core::calculations::door_drawer::calculate_double_doors;
//! use cabinet_core::types::{DoorOptions, OpeningDimensions};
//!
//! let opening = OpeningDimensions::new(500.0, 700.0);
//! let (left, right) = calculate_double_doors(&opening, &DoorOptions::overlay(18.0), 3.0);
//!
//! assert_eq!(left.width, 266.5);
//! assert_eq!(left, right);
//! ```

use crate::types::{DoorDimensions, DoorOptions, DrawerOptions, FitType, MaterialCut, OpeningDimensions};

/// Default part label for door cut-list entries
pub const DEFAULT_DOOR_PART_NAME: &str = "Door";

/// Default part label for drawer-front cut-list entries
pub const DEFAULT_DRAWER_FRONT_PART_NAME: &str = "Drawer Front";

/// Apply the fit adjustment to one axis.
fn fitted(size: f64, overlay: f64, gap: f64, fit: FitType) -> f64 {
    match fit {
        FitType::Inset => size - gap * 2.0,
        FitType::Overlay => size + overlay * 2.0,
    }
}

/// Calculate door dimensions for an opening, honoring the fit style.
pub fn calculate_door_dimensions(opening: &OpeningDimensions, options: &DoorOptions) -> DoorDimensions {
    DoorDimensions {
        width: fitted(opening.width, options.overlay, options.gap, options.fit),
        height: fitted(opening.height, options.overlay, options.gap, options.fit),
    }
}

/// Wrap door dimensions as a single cut-list entry.
pub fn get_door_material_cuts(door: &DoorDimensions, part_name: &str, quantity: u32) -> Vec<MaterialCut> {
    vec![MaterialCut::new(part_name, door.width, door.height, quantity)]
}

/// [`get_door_material_cuts`] with the "Door" label and a quantity of one.
pub fn door_material_cuts_default(door: &DoorDimensions) -> Vec<MaterialCut> {
    get_door_material_cuts(door, DEFAULT_DOOR_PART_NAME, 1)
}

/// Cut-list entry for a drawer front.
///
/// Width follows the opening; height follows `options.front_height`, never
/// the opening height.
pub fn get_drawer_front_material_cuts(
    opening: &OpeningDimensions,
    options: &DrawerOptions,
    part_name: &str,
    quantity: u32,
) -> Vec<MaterialCut> {
    let width = fitted(opening.width, options.overlay, options.gap, options.fit);
    let height = fitted(options.front_height, options.overlay, options.gap, options.fit);
    vec![MaterialCut::new(part_name, width, height, quantity)]
}

/// [`get_drawer_front_material_cuts`] with the "Drawer Front" label and a quantity of one.
pub fn drawer_front_material_cuts_default(opening: &OpeningDimensions, options: &DrawerOptions) -> Vec<MaterialCut> {
    get_drawer_front_material_cuts(opening, options, DEFAULT_DRAWER_FRONT_PART_NAME, 1)
}

/// Single overlay door. Always uses the overlay formula; `options.fit` is ignored.
pub fn calculate_single_door(opening: &OpeningDimensions, options: &DoorOptions) -> DoorDimensions {
    DoorDimensions {
        width: opening.width + options.overlay * 2.0,
        height: opening.height + options.overlay * 2.0,
    }
}

/// Split one opening into a left/right pair of overlay doors.
///
/// Both doors are numerically identical. `2 * width + gap_between` always
/// equals `opening.width + 2 * overlay`.
pub fn calculate_double_doors(
    opening: &OpeningDimensions,
    options: &DoorOptions,
    gap_between: f64,
) -> (DoorDimensions, DoorDimensions) {
    let single_width = (opening.width + options.overlay * 2.0 - gap_between) / 2.0;
    let height = opening.height + options.overlay * 2.0;
    let door = DoorDimensions::new(single_width, height);
    (door, door)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn overlay_options(overlay: f64) -> DoorOptions {
        DoorOptions {
            overlay,
            gap: 2.0,
            fit: FitType::Overlay,
        }
    }

    #[test]
    fn test_door_dimensions_inset() {
        let opening = OpeningDimensions::new(400.0, 700.0);
        let options = DoorOptions {
            overlay: 18.0,
            gap: 2.0,
            fit: FitType::Inset,
        };
        let door = calculate_door_dimensions(&opening, &options);
        assert_eq!(door, DoorDimensions::new(396.0, 696.0));
    }

    #[test]
    fn test_door_dimensions_overlay() {
        let opening = OpeningDimensions::new(400.0, 700.0);
        let door = calculate_door_dimensions(&opening, &overlay_options(18.0));
        assert_eq!(door, DoorDimensions::new(436.0, 736.0));
    }

    #[test]
    fn test_door_dimensions_inset_negative_result_propagates() {
        let opening = OpeningDimensions::new(10.0, 10.0);
        let door = calculate_door_dimensions(&opening, &DoorOptions::inset(8.0));
        assert_eq!(door, DoorDimensions::new(-6.0, -6.0));
    }

    #[test]
    fn test_door_material_cuts() {
        let door = DoorDimensions::new(436.0, 736.0);
        let cuts = get_door_material_cuts(&door, "Upper Door", 4);
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].part_name, "Upper Door");
        assert_eq!(cuts[0].quantity, 4);
        assert_eq!(cuts[0].width, 436.0);
        assert_eq!(cuts[0].height, 736.0);

        let defaults = door_material_cuts_default(&door);
        assert_eq!(defaults[0].part_name, "Door");
        assert_eq!(defaults[0].quantity, 1);
    }

    #[test]
    fn test_drawer_front_uses_front_height() {
        let opening = OpeningDimensions::new(500.0, 900.0);
        let options = DrawerOptions {
            box_height: 120.0,
            front_height: 180.0,
            overlay: 10.0,
            gap: 3.0,
            fit: FitType::Overlay,
        };
        let cuts = drawer_front_material_cuts_default(&opening, &options);
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].part_name, "Drawer Front");
        assert_eq!(cuts[0].width, 520.0);
        assert_eq!(cuts[0].height, 200.0);

        let inset = DrawerOptions {
            fit: FitType::Inset,
            ..options
        };
        let cuts = get_drawer_front_material_cuts(&opening, &inset, "Top Drawer", 2);
        assert_eq!(cuts[0].width, 494.0);
        assert_eq!(cuts[0].height, 174.0);
        assert_eq!(cuts[0].quantity, 2);
    }

    #[test]
    fn test_single_door_with_overlay() {
        let door = calculate_single_door(&OpeningDimensions::new(400.0, 700.0), &overlay_options(18.0));
        assert_eq!(door, DoorDimensions::new(436.0, 736.0));
    }

    #[test]
    fn test_single_door_zero_overlay() {
        let door = calculate_single_door(&OpeningDimensions::new(400.0, 700.0), &overlay_options(0.0));
        assert_eq!(door, DoorDimensions::new(400.0, 700.0));
    }

    #[test]
    fn test_single_door_zero_opening() {
        let door = calculate_single_door(&OpeningDimensions::new(0.0, 0.0), &overlay_options(18.0));
        assert_eq!(door, DoorDimensions::new(36.0, 36.0));
    }

    #[test]
    fn test_single_door_negative_overlay_shrinks() {
        let door = calculate_single_door(&OpeningDimensions::new(400.0, 700.0), &overlay_options(-5.0));
        assert_eq!(door, DoorDimensions::new(390.0, 690.0));
    }

    #[test]
    fn test_single_door_ignores_inset_fit() {
        let options = DoorOptions {
            overlay: 18.0,
            gap: 2.0,
            fit: FitType::Inset,
        };
        let door = calculate_single_door(&OpeningDimensions::new(400.0, 700.0), &options);
        assert_eq!(door, DoorDimensions::new(436.0, 736.0));
    }

    #[test]
    fn test_double_doors_with_overlay_and_gap() {
        let opening = OpeningDimensions::new(500.0, 700.0);
        let (left, right) = calculate_double_doors(&opening, &overlay_options(18.0), 3.0);
        assert_eq!(left, DoorDimensions::new(266.5, 736.0));
        assert_eq!(right, left);
    }

    #[test]
    fn test_double_doors_zero_overlay_and_gap() {
        let opening = OpeningDimensions::new(500.0, 700.0);
        let (left, right) = calculate_double_doors(&opening, &overlay_options(0.0), 0.0);
        assert_eq!(left, DoorDimensions::new(250.0, 700.0));
        assert_eq!(right, DoorDimensions::new(250.0, 700.0));
    }

    #[test]
    fn test_double_doors_small_gap() {
        // (500 + 36 - 0.1) / 2 = 267.95
        let opening = OpeningDimensions::new(500.0, 700.0);
        let (left, right) = calculate_double_doors(&opening, &overlay_options(18.0), 0.1);
        assert!((left.width - 267.95).abs() < EPS);
        assert_eq!(left.height, 736.0);
        assert_eq!(left, right);
    }

    #[test]
    fn test_double_doors_all_zero() {
        let opening = OpeningDimensions::new(0.0, 0.0);
        let (left, right) = calculate_double_doors(&opening, &overlay_options(0.0), 0.0);
        assert_eq!(left, DoorDimensions::new(0.0, 0.0));
        assert_eq!(right, DoorDimensions::new(0.0, 0.0));
    }

    #[test]
    fn test_double_doors_cover_full_width() {
        let cases = [(500.0, 18.0, 3.0), (812.5, 12.0, 2.5), (300.0, 0.0, 10.0)];
        for (width, overlay, gap_between) in cases {
            let opening = OpeningDimensions::new(width, 700.0);
            let (left, right) = calculate_double_doors(&opening, &overlay_options(overlay), gap_between);
            let covered = left.width + right.width + gap_between;
            assert!((covered - (width + 2.0 * overlay)).abs() < EPS);
        }
    }
}
