//! # Shared Data Types
//!
//! Plain value types shared by every calculator. Nothing here is mutated
//! after construction; each calculation builds fresh output values.
//!
//! All lengths are `f64` in a single caller-chosen linear unit (millimeters
//! in practice). No unit conversion happens anywhere in the crate.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "overlay": 18.0,
//!   "gap": 2.0,
//!   "type": "overlay"
//! }
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// How a door or drawer front sits relative to its opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitType {
    /// Sits inside the opening, leaving a reveal of `gap` on each side
    Inset,
    /// Sits in front of the opening, covering the face frame by `overlay` on each side
    #[default]
    Overlay,
}

impl FitType {
    pub fn display_name(&self) -> &'static str {
        match self {
            FitType::Inset => "inset",
            FitType::Overlay => "overlay",
        }
    }
}

impl std::fmt::Display for FitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for FitType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inset" => Ok(FitType::Inset),
            "overlay" => Ok(FitType::Overlay),
            _ => Err(CalcError::invalid_input(
                "type",
                s,
                "Fit type must be 'inset' or 'overlay'",
            )),
        }
    }
}

/// Rough cabinet opening that a door or drawer front must fit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OpeningDimensions {
    pub width: f64,
    pub height: f64,
}

impl OpeningDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        OpeningDimensions { width, height }
    }
}

/// Door fit options.
///
/// Both `overlay` and `gap` are always present; only the one matching
/// `fit` is used by a fit-aware calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DoorOptions {
    /// Amount the door face extends past the opening on each side
    pub overlay: f64,

    /// Reveal left inside the opening on each side (inset doors)
    pub gap: f64,

    /// Fit style
    #[serde(rename = "type")]
    pub fit: FitType,
}

impl DoorOptions {
    /// Overlay-style options with the given overlay and no gap.
    pub fn overlay(overlay: f64) -> Self {
        DoorOptions {
            overlay,
            gap: 0.0,
            fit: FitType::Overlay,
        }
    }

    /// Inset-style options with the given reveal and no overlay.
    pub fn inset(gap: f64) -> Self {
        DoorOptions {
            overlay: 0.0,
            gap,
            fit: FitType::Inset,
        }
    }
}

/// Outer size of a single door panel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DoorDimensions {
    pub width: f64,
    pub height: f64,
}

impl DoorDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        DoorDimensions { width, height }
    }
}

/// Drawer front fit options.
///
/// `front_height` is the face height and is independent of both the opening
/// height and the internal `box_height`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DrawerOptions {
    /// Internal drawer box height (carried for callers, not used by the front calculation)
    pub box_height: f64,

    /// Drawer face height before fit adjustment
    pub front_height: f64,

    pub overlay: f64,

    pub gap: f64,

    #[serde(rename = "type")]
    pub fit: FitType,
}

/// One line item in a cut list: `quantity` identical pieces of `width x height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCut {
    pub part_name: String,
    pub width: f64,
    pub height: f64,
    pub quantity: u32,
}

impl MaterialCut {
    pub fn new(part_name: impl Into<String>, width: f64, height: f64, quantity: u32) -> Self {
        MaterialCut {
            part_name: part_name.into(),
            width,
            height,
            quantity,
        }
    }

    /// Face area of all pieces in this line item (width x height x quantity)
    pub fn area(&self) -> f64 {
        self.width * self.height * f64::from(self.quantity)
    }
}

/// Total face area of a cut list.
pub fn total_area(cuts: &[MaterialCut]) -> f64 {
    cuts.iter().map(MaterialCut::area).sum()
}

/// A drilling or placement point in the part's own local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareLocation {
    pub x: f64,
    pub y: f64,

    /// Free-form label such as "handle" or "hinge"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl HardwareLocation {
    pub fn new(x: f64, y: f64, pattern: impl Into<String>) -> Self {
        HardwareLocation {
            x,
            y,
            pattern: Some(pattern.into()),
        }
    }

    /// A point without a pattern label
    pub fn unlabeled(x: f64, y: f64) -> Self {
        HardwareLocation { x, y, pattern: None }
    }
}

/// A bare drill coordinate used by the brand-specific drilling groups.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DrillPoint {
    pub x: f64,
    pub y: f64,
}

impl DrillPoint {
    pub fn new(x: f64, y: f64) -> Self {
        DrillPoint { x, y }
    }
}
