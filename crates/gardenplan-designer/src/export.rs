//! Plan export.
//!
//! Export is a one-shot pipeline: the surface rasterizes the current frame at
//! a fixed pixel ratio and a [`DocumentExporter`] writes one page sized to the
//! canvas. Failures are returned to the caller unchanged.

use std::path::{Path, PathBuf};

use gardenplan_core::{CanvasSize, ExportError, Orientation};
use image::RgbaImage;
use tracing::info;

use crate::designer_state::DesignerState;
use crate::render::SceneView;
use crate::surface::DrawingSurface;

pub const EXPORT_PIXEL_RATIO: f64 = 2.0;
pub const DEFAULT_EXPORT_FILE_NAME: &str = "garden-plan.pdf";

/// Page setup for one exported plan.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    /// Page size in canvas units; equal to the canvas size.
    pub page: CanvasSize,
    pub orientation: Orientation,
    pub pixel_ratio: f64,
    pub file_name: String,
}

impl ExportRequest {
    pub fn for_canvas(size: CanvasSize) -> Self {
        Self {
            page: size,
            orientation: size.orientation(),
            pixel_ratio: EXPORT_PIXEL_RATIO,
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Expected bitmap dimensions.
    pub fn bitmap_size(&self) -> (u32, u32) {
        (
            (f64::from(self.page.width) * self.pixel_ratio).round() as u32,
            (f64::from(self.page.height) * self.pixel_ratio).round() as u32,
        )
    }
}

/// Writes a rasterized plan as a document.
pub trait DocumentExporter {
    fn export(&mut self, request: &ExportRequest, bitmap: &RgbaImage) -> Result<(), ExportError>;
}

/// Writes the bitmap as a PNG into a directory, named after the request with
/// a `.png` extension.
#[derive(Debug, Clone)]
pub struct PngExporter {
    directory: PathBuf,
}

impl PngExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn output_path(&self, request: &ExportRequest) -> PathBuf {
        self.directory
            .join(&request.file_name)
            .with_extension("png")
    }
}

impl DocumentExporter for PngExporter {
    fn export(&mut self, request: &ExportRequest, bitmap: &RgbaImage) -> Result<(), ExportError> {
        let path = self.output_path(request);
        bitmap
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|err| match err {
                image::ImageError::IoError(io) => ExportError::Io(io),
                other => ExportError::Encode(other.to_string()),
            })?;
        info!(path = %path.display(), "plan exported");
        Ok(())
    }
}

/// Rasterizes the current scene and hands the bitmap to `exporter`.
pub fn export_plan<S, E>(
    surface: &mut S,
    exporter: &mut E,
    state: &DesignerState,
) -> Result<ExportRequest, ExportError>
where
    S: DrawingSurface + ?Sized,
    E: DocumentExporter + ?Sized,
{
    let request = ExportRequest::for_canvas(state.canvas_size());
    export_with(surface, exporter, state, request)
}

/// Like [`export_plan`], with a caller-prepared request.
pub fn export_with<S, E>(
    surface: &mut S,
    exporter: &mut E,
    state: &DesignerState,
    request: ExportRequest,
) -> Result<ExportRequest, ExportError>
where
    S: DrawingSurface + ?Sized,
    E: DocumentExporter + ?Sized,
{
    surface.render(&SceneView::build(state));
    let bitmap = surface.rasterize(request.pixel_ratio)?;
    let (width, height) = bitmap.dimensions();
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyBitmap { width, height });
    }
    exporter.export(&request, &bitmap)?;
    Ok(request)
}
