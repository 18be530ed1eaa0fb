//! Headless event scripts.
//!
//! A script is a JSON array of steps. Each step is either an input event as
//! the drawing surface would report it (`{"event": "click", ...}`) or a
//! toolbar command (`{"command": "add_bed", ...}`). Steps run in order against
//! one scene; the report holds every event outcome and the final render list.

use std::path::PathBuf;

use anyhow::Context;
use gardenplan_core::{CanvasPreset, Color};
use gardenplan_designer::{
    dispatch, export_with, present, BedKind, BitmapSurface, DesignerState, DrawingSurface,
    EventOutcome, ExportRequest, InputEvent, PlantCatalog, PngExporter, SceneView, StaticCatalog,
    UiPanelState,
};
use gardenplan_settings::Config;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Toolbar actions that do not come from the drawing surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    AddBed {
        kind: BedKind,
    },
    AddPlant {
        name: String,
        #[serde(default)]
        icon: String,
    },
    /// Picks a plant from the catalog, as the plant picker does.
    ChoosePlant {
        category: String,
        name: String,
    },
    AddLabel,
    SetFill {
        color: Color,
    },
    SetPreset {
        preset: CanvasPreset,
    },
    Copy,
    Paste,
    Delete,
    /// Exports a PNG into `directory`, or the configured output directory.
    Export {
        #[serde(default)]
        directory: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Event(InputEvent),
    Command(Command),
}

#[derive(Debug, Clone, Serialize)]
pub struct ScriptReport {
    pub outcomes: Vec<EventOutcome>,
    pub exported: Vec<PathBuf>,
    pub scene: SceneView,
}

pub fn parse_script(json: &str) -> anyhow::Result<Vec<ScriptStep>> {
    serde_json::from_str(json).context("Invalid event script")
}

/// Drives a scene from script steps.
pub struct ScriptRunner {
    config: Config,
    catalog: StaticCatalog,
    state: DesignerState,
    panel: UiPanelState,
    surface: BitmapSurface,
    outcomes: Vec<EventOutcome>,
    exported: Vec<PathBuf>,
}

impl ScriptRunner {
    pub fn new(config: Config) -> Self {
        let mut state = DesignerState::with_preset(config.canvas.default_preset);
        state.set_show_grid(config.canvas.show_grid);
        Self {
            state,
            panel: UiPanelState::with_fill(config.editor.default_fill),
            catalog: StaticCatalog::default(),
            surface: BitmapSurface::new(),
            outcomes: Vec::new(),
            exported: Vec::new(),
            config,
        }
    }

    pub fn with_catalog(mut self, catalog: StaticCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn state(&self) -> &DesignerState {
        &self.state
    }

    pub fn run(mut self, steps: Vec<ScriptStep>) -> anyhow::Result<ScriptReport> {
        for (index, step) in steps.into_iter().enumerate() {
            debug!(index, ?step, "script step");
            match step {
                ScriptStep::Event(event) => {
                    let outcome = dispatch(&mut self.state, event);
                    present(&mut self.surface, &self.state, &outcome);
                    self.outcomes.push(outcome);
                }
                ScriptStep::Command(command) => self
                    .command(command)
                    .with_context(|| format!("Script step {index} failed"))?,
            }
        }

        info!(
            steps = self.outcomes.len(),
            entities = self.state.entity_count(),
            "script finished"
        );
        Ok(ScriptReport {
            outcomes: self.outcomes,
            exported: self.exported,
            scene: SceneView::build(&self.state),
        })
    }

    fn command(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::AddBed { kind } => {
                self.panel.add_bed(&mut self.state, kind);
            }
            Command::AddPlant { name, icon } => {
                self.state.add_plant(name, icon);
            }
            Command::ChoosePlant { category, name } => match self.catalog.find(&category, &name) {
                Some(entry) => {
                    self.panel.choose_plant(&mut self.state, entry);
                }
                None => warn!(%category, %name, "plant not in catalog"),
            },
            Command::AddLabel => {
                self.state.add_label();
            }
            Command::SetFill { color } => self.panel.set_fill(color),
            Command::SetPreset { preset } => self.state.set_canvas_preset(preset),
            Command::Copy => {
                self.state.copy_selected();
            }
            Command::Paste => {
                self.state.paste();
            }
            Command::Delete => {
                self.state.delete_selected();
            }
            Command::Export { directory } => {
                let directory =
                    directory.unwrap_or_else(|| self.config.export.output_directory.clone());
                let mut exporter = PngExporter::new(directory);
                let request = ExportRequest::for_canvas(self.state.canvas_size())
                    .with_file_name(self.config.export.file_name.clone());
                let request = export_with(&mut self.surface, &mut exporter, &self.state, request)
                    .context("Export failed")?;
                self.exported.push(exporter.output_path(&request));
            }
        }
        self.surface.render(&SceneView::build(&self.state));
        Ok(())
    }
}
