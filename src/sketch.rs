use crate::color::Color;
use crate::display::{Framebuffer, PixelBuffer};
use crate::geometry::{Point, Polygon};
use crate::raster::{fill_circle, fill_polygon, StrokeRequest};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawOp {
    Polygon {
        vertices: Polygon,
        color: Color,
    },
    Circle {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
    },
    Stroke(StrokeRequest),
}

impl DrawOp {
    pub fn apply<B: PixelBuffer + ?Sized>(&self, buffer: &mut B) {
        match self {
            DrawOp::Polygon { vertices, color } => fill_polygon(buffer, vertices.as_ref(), *color),
            DrawOp::Circle {
                cx,
                cy,
                radius,
                color,
            } => fill_circle(buffer, *cx, *cy, *radius, *color),
            DrawOp::Stroke(stroke) => stroke.draw(buffer),
        }
    }
}

impl From<StrokeRequest> for DrawOp {
    fn from(stroke: StrokeRequest) -> Self {
        DrawOp::Stroke(stroke)
    }
}

/// A replayable drawing: canvas size, background and draw calls in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sketch {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub background: Color,
    #[serde(default)]
    pub ops: Vec<DrawOp>,
}

impl Sketch {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            background: Color::WHITE,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: impl Into<DrawOp>) {
        self.ops.push(op.into());
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Paint the background over the whole buffer, then replay every op
    pub fn render<B: PixelBuffer + ?Sized>(&self, buffer: &mut B) {
        let right = buffer.width() as i32 - 1;
        for y in 0..buffer.height() as i32 {
            buffer.hline(0, right, y, self.background);
        }
        for op in &self.ops {
            op.apply(buffer);
        }
    }

    pub fn to_framebuffer(&self) -> Framebuffer {
        let mut fb = Framebuffer::filled(self.width, self.height, self.background);
        for op in &self.ops {
            op.apply(&mut fb);
        }
        fb
    }

    /// Save sketch to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load sketch from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}
