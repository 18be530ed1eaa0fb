//! A software drawing surface rendered with tiny-skia.
//!
//! Draws the grid, bed shapes, plant placeholders and label text. Plant
//! icons are not fetched here; a plant with an icon gets a framed tile, a
//! plant without one gets a crossed frame.

use gardenplan_core::{Color, EntityRef, ExportError, Point};
use image::{Rgba, RgbaImage};
use rusttype::{point as rt_point, OutlineBuilder, Scale};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};
use tracing::debug;

use crate::font;
use crate::render::{RenderPrimitive, SceneView};
use crate::surface::DrawingSurface;

const BACKGROUND: Color = Color::rgb(0xff, 0xff, 0xff);
const GRID_COLOR: Color = Color::rgb(0xe5, 0xe7, 0xeb);
const PLACEHOLDER_COLOR: Color = Color::rgb(0x9c, 0xa3, 0xaf);
const PLACEHOLDER_FILL: Color = Color::rgb(0xf3, 0xf4, 0xf6);
const TEXT_COLOR: Color = Color::BLACK;
const GRID_STROKE_WIDTH: f32 = 1.0;
const PLACEHOLDER_STROKE_WIDTH: f32 = 1.0;

/// Offscreen surface used by the headless runner and by tests.
#[derive(Debug, Default)]
pub struct BitmapSurface {
    view: Option<SceneView>,
    handles: Option<EntityRef>,
    reset_count: usize,
}

impl BitmapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<&SceneView> {
        self.view.as_ref()
    }

    pub fn handles(&self) -> Option<EntityRef> {
        self.handles
    }

    /// How many node scale resets were requested.
    pub fn reset_count(&self) -> usize {
        self.reset_count
    }
}

impl DrawingSurface for BitmapSurface {
    fn render(&mut self, view: &SceneView) {
        self.view = Some(view.clone());
    }

    fn bind_handles(&mut self, entity: Option<EntityRef>) {
        self.handles = entity;
    }

    fn reset_scale(&mut self, entity: EntityRef) {
        debug!(%entity, "node scale reset");
        self.reset_count += 1;
    }

    fn rasterize(&mut self, pixel_ratio: f64) -> Result<RgbaImage, ExportError> {
        if !(pixel_ratio.is_finite() && pixel_ratio > 0.0) {
            return Err(ExportError::Rasterize(format!(
                "invalid pixel ratio {pixel_ratio}"
            )));
        }
        let view = self
            .view
            .as_ref()
            .ok_or_else(|| ExportError::Rasterize("nothing has been rendered yet".to_string()))?;

        let width = (f64::from(view.size.width) * pixel_ratio).round() as u32;
        let height = (f64::from(view.size.height) * pixel_ratio).round() as u32;
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            ExportError::Rasterize(format!("cannot allocate a {width}x{height} pixmap"))
        })?;
        pixmap.fill(skia_color(BACKGROUND));

        let mut painter = Painter {
            pixmap,
            transform: Transform::from_scale(pixel_ratio as f32, pixel_ratio as f32),
        };
        painter.grid(view);
        for primitive in &view.primitives {
            painter.primitive(primitive);
        }
        Ok(painter.into_image())
    }
}

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 0xff)
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    paint
}

fn rect_path(position: Point, width: f64, height: f64) -> Option<Path> {
    Rect::from_xywh(
        position.x as f32,
        position.y as f32,
        width as f32,
        height as f32,
    )
    .map(PathBuilder::from_rect)
}

/// Rectangle with circular corners, `radius` clamped to half the short side.
fn rounded_rect_path(position: Point, width: f64, height: f64, radius: f64) -> Option<Path> {
    let r = radius.min(width / 2.0).min(height / 2.0);
    if r <= 0.0 {
        return rect_path(position, width, height);
    }
    let (x, y, w, h, r) = (
        position.x as f32,
        position.y as f32,
        width as f32,
        height as f32,
        r as f32,
    );
    // Cubic approximation of a quarter circle
    let k = r * 0.552_284_8;
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

fn oval_path(center: Point, rx: f64, ry: f64) -> Option<Path> {
    Rect::from_xywh(
        (center.x - rx) as f32,
        (center.y - ry) as f32,
        (rx * 2.0) as f32,
        (ry * 2.0) as f32,
    )
    .and_then(PathBuilder::from_oval)
}

/// Collects rusttype glyph outlines into one tiny-skia path.
struct GlyphOutline(PathBuilder);

impl OutlineBuilder for GlyphOutline {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

struct Painter {
    pixmap: Pixmap,
    /// Scene units to device pixels.
    transform: Transform,
}

impl Painter {
    fn grid(&mut self, view: &SceneView) {
        let mut pb = PathBuilder::new();
        for line in &view.grid {
            pb.move_to(line.from.x as f32, line.from.y as f32);
            pb.line_to(line.to.x as f32, line.to.y as f32);
        }
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: GRID_STROKE_WIDTH,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&path, &paint(GRID_COLOR), &stroke, self.transform, None);
        }
    }

    fn shape(&mut self, path: Option<Path>, fill: Option<Color>, stroke: Color, width: f64) {
        let Some(path) = path else {
            return;
        };
        if let Some(fill) = fill {
            self.pixmap
                .fill_path(&path, &paint(fill), FillRule::Winding, self.transform, None);
        }
        if width > 0.0 {
            let stroke_style = Stroke {
                width: width as f32,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&path, &paint(stroke), &stroke_style, self.transform, None);
        }
    }

    fn primitive(&mut self, primitive: &RenderPrimitive) {
        match primitive {
            RenderPrimitive::Rect {
                position,
                width,
                height,
                corner_radius,
                fill,
                stroke,
                stroke_width,
                ..
            } => self.shape(
                rounded_rect_path(*position, *width, *height, *corner_radius),
                Some(*fill),
                *stroke,
                *stroke_width,
            ),
            RenderPrimitive::Circle {
                center,
                radius,
                fill,
                stroke,
                stroke_width,
                ..
            } => self.shape(
                oval_path(*center, *radius, *radius),
                Some(*fill),
                *stroke,
                *stroke_width,
            ),
            RenderPrimitive::Ellipse {
                center,
                radius_x,
                radius_y,
                fill,
                stroke,
                stroke_width,
                ..
            } => self.shape(
                oval_path(*center, *radius_x, *radius_y),
                Some(*fill),
                *stroke,
                *stroke_width,
            ),
            RenderPrimitive::Image {
                position,
                width,
                height,
                icon,
                ..
            } => self.placeholder(*position, *width, *height, icon.is_some()),
            RenderPrimitive::Text {
                position,
                text,
                font_size,
                width,
                visible,
                ..
            } => {
                if *visible {
                    self.text(*position, text, *font_size, *width);
                }
            }
        }
    }

    fn placeholder(&mut self, position: Point, width: f64, height: f64, has_icon: bool) {
        let frame = f64::from(PLACEHOLDER_STROKE_WIDTH);
        if has_icon {
            self.shape(
                rect_path(position, width, height),
                Some(PLACEHOLDER_FILL),
                PLACEHOLDER_COLOR,
                frame,
            );
            return;
        }
        self.shape(
            rect_path(position, width, height),
            None,
            PLACEHOLDER_COLOR,
            frame,
        );
        let corner = position.offset(width, height);
        let mut pb = PathBuilder::new();
        pb.move_to(position.x as f32, position.y as f32);
        pb.line_to(corner.x as f32, corner.y as f32);
        pb.move_to(corner.x as f32, position.y as f32);
        pb.line_to(position.x as f32, corner.y as f32);
        self.shape(pb.finish(), None, PLACEHOLDER_COLOR, frame);
    }

    /// Fills glyph outlines of `text`, wrapped at `width`. Layout happens in
    /// scene units; the surface transform brings it to `font_size * ratio`.
    fn text(&mut self, position: Point, text: &str, font_size: f64, width: f64) {
        let Some(font) = font::label_font() else {
            return;
        };
        let size = font_size as f32;
        if !(size.is_finite() && size > 0.0) {
            return;
        }
        let scale = Scale::uniform(size);
        let ascent = font.v_metrics(scale).ascent;
        let (x, y) = (position.x as f32, position.y as f32);

        let mut outline = GlyphOutline(PathBuilder::new());
        for (row, line) in font::wrap_lines(font, scale, text, width as f32)
            .iter()
            .enumerate()
        {
            let baseline = y + row as f32 * size + ascent;
            for glyph in font.layout(line, scale, rt_point(x, baseline)) {
                glyph.build_outline(&mut outline);
            }
        }
        if let Some(path) = outline.0.finish() {
            self.pixmap.fill_path(
                &path,
                &paint(TEXT_COLOR),
                FillRule::Winding,
                self.transform,
                None,
            );
        }
    }

    fn into_image(self) -> RgbaImage {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let mut image = RgbaImage::new(width, height);
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let color = src.demultiply();
            *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
        }
        image
    }
}
