//! Label font lookup and line wrapping.
//!
//! Fonts come from the system font database. A host without any sans-serif
//! face still exports; labels are simply left out of the bitmap.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{point, Font, Scale};
use std::{fs, sync::OnceLock};
use tracing::warn;

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

/// The face labels are drawn with, if the host has one.
pub fn label_font() -> Option<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(|| {
        let font = load_system_font(&[Family::SansSerif]).or_else(|| {
            // Any face beats no text at all
            db().faces()
                .next()
                .and_then(|face| font_from_source(&face.source))
        });
        if font.is_none() {
            warn!("no system font found, label text will not be rasterized");
        }
        font
    })
    .as_ref()
}

fn load_system_font(families: &[Family<'_>]) -> Option<Font<'static>> {
    let query = Query {
        families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    let id = db().query(&query)?;
    let face = db().face(id)?;
    font_from_source(&face.source)
}

fn font_from_source(source: &fontdb::Source) -> Option<Font<'static>> {
    match source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::Binary(bytes) => Font::try_from_vec(bytes.as_ref().as_ref().to_vec()),
    }
}

/// Advance width of `text` laid out on one line.
pub fn line_width(font: &Font<'_>, scale: Scale, text: &str) -> f32 {
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Greedy word wrap at `max_width`. Explicit newlines always break; a word
/// wider than `max_width` gets a line to itself.
pub fn wrap_lines(font: &Font<'_>, scale: Scale, text: &str, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{line} {word}");
            if line_width(font, scale, &candidate) <= max_width {
                line = candidate;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
            }
        }
        lines.push(line);
    }
    lines
}
