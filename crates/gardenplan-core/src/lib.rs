//! # Garden Plan Core
//!
//! Core types shared by the garden plan editor crates:
//! - Canvas coordinates ([`Point`]) and canvas size presets with their grid
//! - Typed entity identifiers ([`EntityRef`]) and the id generator
//! - Hex colors used for bed fill and stroke
//! - The error taxonomy used across the workspace

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod ids;

pub use canvas::{CanvasPreset, CanvasSize, GridLine, Orientation, GRID_SIZE};
pub use color::Color;
pub use error::{ColorError, Error, ExportError, GeometryError, Result, ScaleAxis};
pub use geometry::Point;
pub use ids::{BedId, EntityKind, EntityRef, IdGenerator, LabelId, PlantId};
