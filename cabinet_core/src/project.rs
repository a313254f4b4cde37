//! # Project Data Structures
//!
//! Shared vocabulary for applications built on cabinet_core. A `Project` is a
//! named collection of `Cabinet`s; `ShopSettings` holds a shop's default fit
//! and hardware offsets. None of the calculators read these types, and the
//! crate never stores them anywhere.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── id: Uuid
//! ├── name
//! ├── cabinets: Vec<Cabinet> (dimensions + material)
//! └── created_at: DateTime<Utc>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cabinet_core::project::{Cabinet, Project};
//!
//! let mut project = Project::new("Kitchen Remodel");
//! let id = project.add_cabinet(Cabinet::new(600.0, 720.0, 560.0, "Birch Ply"));
//!
//! assert_eq!(project.cabinet_count(), 1);
//! assert!(project.get_cabinet(&id).is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{DoorOptions, FitType, OpeningDimensions};

/// A single cabinet carcass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabinet {
    pub id: Uuid,
    pub width: f64,
    pub height: f64,
    pub depth: f64,

    /// Carcass material (e.g., "Birch Ply", "MDF")
    pub material: String,
}

impl Cabinet {
    /// Create a cabinet with a fresh id.
    pub fn new(width: f64, height: f64, depth: f64, material: impl Into<String>) -> Self {
        Cabinet {
            id: Uuid::new_v4(),
            width,
            height,
            depth,
            material: material.into(),
        }
    }

    /// Front opening of the cabinet (width x height).
    pub fn opening(&self) -> OpeningDimensions {
        OpeningDimensions::new(self.width, self.height)
    }
}

/// A named collection of cabinets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub cabinets: Vec<Cabinet>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a new empty project.
    pub fn new(name: impl Into<String>) -> Self {
        Project {
            id: Uuid::new_v4(),
            name: name.into(),
            cabinets: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a cabinet to the project.
    ///
    /// Returns the cabinet's id.
    pub fn add_cabinet(&mut self, cabinet: Cabinet) -> Uuid {
        let id = cabinet.id;
        self.cabinets.push(cabinet);
        id
    }

    /// Remove a cabinet by id.
    ///
    /// Returns the removed cabinet if it existed.
    pub fn remove_cabinet(&mut self, id: &Uuid) -> Option<Cabinet> {
        let index = self.cabinets.iter().position(|c| &c.id == id)?;
        Some(self.cabinets.remove(index))
    }

    pub fn get_cabinet(&self, id: &Uuid) -> Option<&Cabinet> {
        self.cabinets.iter().find(|c| &c.id == id)
    }

    pub fn cabinet_count(&self) -> usize {
        self.cabinets.len()
    }
}

/// Shop-wide default fit and hardware offsets.
///
/// ## JSON Example
///
/// ```json
/// {
///   "overlay": 18.0,
///   "gap": 2.0,
///   "fit": "overlay",
///   "hinge_edge_offset": 100.0,
///   "handle_offset_x": 30.0,
///   "handle_offset_y": 100.0,
///   "panel_gap": 2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopSettings {
    /// Overlay per side for overlay doors
    pub overlay: f64,

    /// Reveal per side for inset doors
    pub gap: f64,

    pub fit: FitType,

    /// Distance from door top/bottom to the outermost hinges
    pub hinge_edge_offset: f64,

    /// Handle distance in from the door's right edge
    pub handle_offset_x: f64,

    /// Handle distance in from the door's bottom edge
    pub handle_offset_y: f64,

    /// Shaker panel expansion allowance
    pub panel_gap: f64,
}

impl Default for ShopSettings {
    fn default() -> Self {
        ShopSettings {
            overlay: 18.0,
            gap: 2.0,
            fit: FitType::Overlay,
            hinge_edge_offset: 100.0,
            handle_offset_x: 30.0,
            handle_offset_y: 100.0,
            panel_gap: crate::calculations::shaker::DEFAULT_PANEL_GAP,
        }
    }
}

impl ShopSettings {
    /// Door options built from the shop defaults.
    pub fn door_options(&self) -> DoorOptions {
        DoorOptions {
            overlay: self.overlay,
            gap: self.gap,
            fit: self.fit,
        }
    }
}
