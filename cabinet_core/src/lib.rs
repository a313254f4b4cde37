//! # cabinet_core - Cabinet Component Calculation Engine
//!
//! `cabinet_core` derives cutting and hardware-placement dimensions for
//! cabinet doors, drawer fronts and shaker door parts from opening dimensions
//! and fit options. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Permissive**: No input validation; arithmetic results (even negative
//!   dimensions) are returned as computed
//! - **Unit-agnostic**: Every length uses whatever unit the caller supplies
//!
//! ## Quick Start
//!
//! ```rust
//! use cabinet_core::calculations::door_drawer::calculate_door_dimensions;
//! use cabinet_core::calculations::shaker::shaker_door_parts_default;
//! use cabinet_core::types::{DoorOptions, OpeningDimensions};
//!
//! let opening = OpeningDimensions::new(400.0, 700.0);
//! let door = calculate_door_dimensions(&opening, &DoorOptions::overlay(18.0));
//! assert_eq!((door.width, door.height), (436.0, 736.0));
//!
//! let parts = shaker_door_parts_default(&door, 70.0, 60.0);
//! assert_eq!(parts.len(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Door/drawer, hardware and shaker calculators
//! - [`types`] - Shared value types
//! - [`project`] - Project/cabinet vocabulary and shop settings
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod project;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use calculations::{evaluate, evaluate_batch, evaluate_json, CalculationOutput, CalculationRequest};
pub use errors::{CalcError, CalcResult};
pub use project::{Cabinet, Project, ShopSettings};
pub use types::{
    DoorDimensions, DoorOptions, DrawerOptions, DrillPoint, FitType, HardwareLocation, MaterialCut, OpeningDimensions,
};
