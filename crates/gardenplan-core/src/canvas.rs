//! Canvas size presets and the background grid.
//!
//! The canvas size only changes the drawable extent and the grid; it never
//! rescales placed entities.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Grid cell size in canvas pixels
pub const GRID_SIZE: u32 = 20;

/// Page orientation derived from a canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Canvas dimensions in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Landscape only when strictly wider than tall; a square canvas is portrait.
    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Background grid lines covering this canvas, vertical lines first.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        let columns = self.width / GRID_SIZE;
        let rows = self.height / GRID_SIZE;
        let mut lines = Vec::with_capacity((columns + rows + 2) as usize);

        for i in 0..=columns {
            let x = f64::from(i * GRID_SIZE);
            lines.push(GridLine {
                from: Point::new(x, 0.0),
                to: Point::new(x, f64::from(self.height)),
            });
        }
        for i in 0..=rows {
            let y = f64::from(i * GRID_SIZE);
            lines.push(GridLine {
                from: Point::new(0.0, y),
                to: Point::new(f64::from(self.width), y),
            });
        }
        lines
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasPreset::default().size()
    }
}

/// One background grid line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
}

/// The fixed set of canvas sizes a user can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasPreset {
    /// 600x400
    Small,
    /// 800x600
    #[default]
    Medium,
    /// 1200x800
    Large,
    /// 1400x600
    Wide,
}

impl CanvasPreset {
    pub const ALL: [CanvasPreset; 4] = [
        CanvasPreset::Small,
        CanvasPreset::Medium,
        CanvasPreset::Large,
        CanvasPreset::Wide,
    ];

    pub const fn size(self) -> CanvasSize {
        match self {
            CanvasPreset::Small => CanvasSize::new(600, 400),
            CanvasPreset::Medium => CanvasSize::new(800, 600),
            CanvasPreset::Large => CanvasSize::new(1200, 800),
            CanvasPreset::Wide => CanvasSize::new(1400, 600),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CanvasPreset::Small => "Small",
            CanvasPreset::Medium => "Medium",
            CanvasPreset::Large => "Large",
            CanvasPreset::Wide => "Wide",
        }
    }

    /// Finds the preset with exactly this size.
    pub fn from_size(size: CanvasSize) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.size() == size)
    }
}

impl std::fmt::Display for CanvasPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        write!(f, "{} ({}x{})", self.name(), size.width, size.height)
    }
}
