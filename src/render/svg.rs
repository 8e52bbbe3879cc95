//! SVG backend for draw commands.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::layout::CanvasGeometry;
use crate::types::WalkResult;

use super::DrawCommand;

/// Background fill behind the scene.
const BACKGROUND: &str = "#1e1e1e";
/// Label color.
const LABEL_COLOR: &str = "white";
/// Font size of vertex labels.
const VERTEX_FONT_SIZE: f64 = 25.0;
/// Font size of weight labels.
const WEIGHT_FONT_SIZE: f64 = 20.0;
/// Label typeface.
const FONT_FAMILY: &str = "Times New Roman, serif";

/// Accumulates draw commands into an SVG document.
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    /// An empty canvas matching the geometry's surface size.
    pub fn new(geometry: &CanvasGeometry) -> Self {
        Self {
            width: geometry.width,
            height: geometry.height,
            body: String::new(),
        }
    }

    /// Append one command to the document body.
    pub fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Vertex {
                at,
                radius,
                fill,
                label,
                ..
            } => {
                let _ = writeln!(
                    self.body,
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
                    at.x, at.y, radius, fill
                );
                self.text(at.x, at.y, label, VERTEX_FONT_SIZE);
            }
            DrawCommand::Edge {
                from,
                to,
                stroke,
                width,
                label,
                label_at,
            } => {
                let _ = writeln!(
                    self.body,
                    r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                    from.x, from.y, to.x, to.y, stroke, width
                );
                self.text(label_at.x, label_at.y, label, WEIGHT_FONT_SIZE);
            }
            DrawCommand::SelfLoop {
                at,
                radius,
                stroke,
                width,
                label,
                label_at,
            } => {
                // The host canvas draws an open arc; an outlined circle
                // occupies the same footprint.
                let _ = writeln!(
                    self.body,
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                    at.x, at.y, radius, stroke, width
                );
                self.text(label_at.x, label_at.y, label, WEIGHT_FONT_SIZE);
            }
        }
    }

    /// Append every command in order.
    pub fn draw_all(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(command);
        }
    }

    fn text(&mut self, x: f64, y: f64, content: &str, size: f64) {
        let _ = writeln!(
            self.body,
            r#"  <text x="{:.2}" y="{:.2}" fill="{}" font-size="{}" font-family="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            x, y, LABEL_COLOR, size, FONT_FAMILY, content
        );
    }

    /// The finished SVG document.
    pub fn finish(&self) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                "\n",
                r#"  <rect width="{w}" height="{h}" fill="{bg}"/>"#,
                "\n{body}</svg>\n"
            ),
            w = self.width,
            h = self.height,
            bg = BACKGROUND,
            body = self.body
        )
    }

    /// Write the finished document to a file.
    pub fn write_to_file(&self, path: &Path) -> WalkResult<()> {
        fs::write(path, self.finish())?;
        Ok(())
    }
}
