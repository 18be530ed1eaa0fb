use gardenplan_core::{CanvasPreset, Color, EntityRef, ExportError, Orientation, Point};
use gardenplan_designer::{
    export_plan, BedKind, BitmapSurface, DesignerState, DocumentExporter, DrawingSurface,
    ExportRequest, PngExporter, SceneView, TransformGesture,
};
use image::RgbaImage;
use std::time::{Duration, Instant};

/// Surface that refuses to rasterize.
struct BrokenSurface;

impl DrawingSurface for BrokenSurface {
    fn render(&mut self, _view: &SceneView) {}

    fn bind_handles(&mut self, _entity: Option<EntityRef>) {}

    fn reset_scale(&mut self, _entity: EntityRef) {}

    fn rasterize(&mut self, _pixel_ratio: f64) -> Result<RgbaImage, ExportError> {
        Err(ExportError::Rasterize("surface lost".to_string()))
    }
}

#[derive(Default)]
struct RecordingExporter {
    calls: Vec<(ExportRequest, (u32, u32))>,
}

impl DocumentExporter for RecordingExporter {
    fn export(&mut self, request: &ExportRequest, bitmap: &RgbaImage) -> Result<(), ExportError> {
        self.calls.push((request.clone(), bitmap.dimensions()));
        Ok(())
    }
}

#[test]
fn test_export_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = DesignerState::new();
    state.add_bed(BedKind::Rectangle, Color::GRASS);
    state.add_plant("Carrot", "");

    let mut surface = BitmapSurface::new();
    let mut exporter = PngExporter::new(dir.path());
    let request = export_plan(&mut surface, &mut exporter, &state).unwrap();

    let path = exporter.output_path(&request);
    assert!(path.exists());
    let written = image::open(&path).unwrap();
    assert_eq!((written.width(), written.height()), (1600, 1200));
}

#[test]
fn test_export_request_matches_canvas() {
    let state = DesignerState::with_preset(CanvasPreset::Wide);
    let mut surface = BitmapSurface::new();
    let mut exporter = RecordingExporter::default();

    export_plan(&mut surface, &mut exporter, &state).unwrap();

    let (request, dimensions) = &exporter.calls[0];
    assert_eq!(request.orientation, Orientation::Landscape);
    assert_eq!(request.pixel_ratio, 2.0);
    assert_eq!(request.file_name, "garden-plan.pdf");
    assert_eq!(*dimensions, (2800, 1200));
}

#[test]
fn test_rasterize_failure_propagates() {
    let state = DesignerState::new();
    let mut exporter = RecordingExporter::default();

    let result = export_plan(&mut BrokenSurface, &mut exporter, &state);

    assert!(matches!(result, Err(ExportError::Rasterize(_))));
    assert!(exporter.calls.is_empty());
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let state = DesignerState::with_preset(CanvasPreset::Small);
    let mut surface = BitmapSurface::new();
    let mut exporter = PngExporter::new(dir.path().join("does-not-exist"));

    let result = export_plan(&mut surface, &mut exporter, &state);
    assert!(matches!(result, Err(ExportError::Io(_))));
}

#[test]
fn test_export_after_huge_resize_stays_fast() {
    let mut state = DesignerState::new();
    let bed = state.add_bed(BedKind::Oval, Color::GRASS);
    for _ in 0..2 {
        let gesture = TransformGesture::new(40.0, 40.0, Point::new(400.0, 300.0));
        assert!(state.resize_entity(bed.into(), &gesture).unwrap());
    }

    let mut surface = BitmapSurface::new();
    let mut exporter = RecordingExporter::default();
    let started = Instant::now();
    export_plan(&mut surface, &mut exporter, &state).unwrap();

    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(exporter.calls[0].1, (1600, 1200));
}
