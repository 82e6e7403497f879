#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod draw_op;
pub mod error;
pub mod geometry;
pub mod input;
pub mod line;
pub mod panels;
pub mod point;
pub mod raster;
pub mod rasterizer;
pub mod renderer;
pub mod state;
pub mod texture;
pub mod tools;

pub use app::SketchApp;
pub use canvas::Canvas;
pub use command::Command;
pub use config::EditorConfig;
pub use draw_op::DrawOp;
pub use error::ConfigError;
pub use geometry::snap;
pub use line::Line;
pub use point::Point;
pub use raster::{PixelBuffer, RasterTarget};
pub use rasterizer::{CanvasRasterizer, LineRasterizer, LineStyle};
pub use renderer::Renderer;
pub use state::EditorState;
pub use tools::{PolygonBuilder, PolygonState, Tool, ToolType};
