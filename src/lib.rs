//! # Garden Plan
//!
//! A 2D garden layout editor: place geometric beds, plant icons and text
//! labels on a fixed-size canvas, then move, resize, copy, label and export
//! them.
//!
//! ## Architecture
//!
//! The editor is organized as a workspace with multiple crates:
//!
//! 1. **gardenplan-core** - Points, typed entity ids, colors, canvas presets, errors
//! 2. **gardenplan-designer** - Scene stores, selection, clipboard, resize rules,
//!    input dispatch, render list and export
//! 3. **gardenplan-settings** - Configuration file handling
//! 4. **gardenplan** - Binary with a headless event-script runner

pub mod script;

pub use gardenplan_core::{
    BedId, CanvasPreset, CanvasSize, Color, EntityKind, EntityRef, Error, ExportError,
    GeometryError, LabelId, Orientation, PlantId, Point, Result,
};

pub use gardenplan_designer::{
    dispatch, export_plan, present, Action, Bed, BedKind, BedShape, BitmapSurface, DesignerState,
    DocumentExporter, DrawingSurface, EventOutcome, ExportRequest, InputEvent, Key, KeyChord,
    Label, Modifiers, Plant, PlantCatalog, PngExporter, PointerTarget, RenderPrimitive, SceneView,
    StaticCatalog, TransformGesture, UiPanelState,
};

pub use gardenplan_settings::{default_config_path, Config, SettingsError};

pub use script::{parse_script, Command, ScriptReport, ScriptRunner, ScriptStep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays free for script reports
/// - RUST_LOG environment variable support, falling back to `default_filter`
pub fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
