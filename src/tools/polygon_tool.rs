use log::{debug, info};

use crate::geometry::find_vertex_near;
use crate::line::Line;
use crate::point::Point;
use crate::tools::{Tool, ToolOutput, ToolSettings};

/// Where the polygon builder is in its interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonState {
    #[default]
    Idle,
    /// Accumulating vertices.
    Building,
    /// A press landed on an existing vertex, which now follows the pointer.
    DraggingVertex(usize),
}

/// Collects polygon vertices and turns them into a closed loop of lines.
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    state: PolygonState,
    vertices: Vec<Point>,
    // Press position of the edge gesture in progress
    anchor: Option<Point>,
}

impl PolygonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PolygonState {
        self.state
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Start a fresh polygon.
    pub fn begin(&mut self) {
        self.vertices.clear();
        self.anchor = None;
        self.state = PolygonState::Building;
    }

    /// Record a completed press-release gesture as polygon vertices.
    ///
    /// The press point only becomes a vertex when the list is empty. A point
    /// equal to the current last vertex is never appended.
    pub fn commit_edge(&mut self, press: Point, release: Point) -> &[Point] {
        if self.vertices.is_empty() {
            self.vertices.push(press);
        }
        if self.vertices.last() != Some(&release) {
            self.vertices.push(release);
        }
        &self.vertices
    }

    /// Move the vertex at `index`, returning the updated list.
    pub fn replace_vertex(&mut self, index: usize, pos: Point) -> &[Point] {
        if let Some(vertex) = self.vertices.get_mut(index) {
            *vertex = pos;
        }
        &self.vertices
    }

    /// Close the loop and return its edges, then go back to `Idle`.
    ///
    /// Fewer than three vertices produce no edges.
    pub fn finalize(&mut self, dotted: bool) -> Vec<Line> {
        let edges = if self.vertices.len() >= 3 {
            closed_edges(&self.vertices, dotted)
        } else {
            Vec::new()
        };

        if edges.is_empty() {
            debug!("Discarding polygon with {} vertices", self.vertices.len());
        } else {
            info!("Finalized polygon with {} edges", edges.len());
        }

        self.vertices.clear();
        self.anchor = None;
        self.state = PolygonState::Idle;
        edges
    }

    /// Edges between consecutive committed vertices, without the closing edge.
    pub fn committed_edges(&self, dotted: bool) -> Vec<Line> {
        self.vertices
            .windows(2)
            .map(|pair| Line::new(pair[0], pair[1], dotted))
            .collect()
    }

    fn building_preview(&self, pointer: Point, dotted: bool) -> Vec<Line> {
        let mut lines = self.committed_edges(dotted);

        let from = self.vertices.last().copied().or(self.anchor);
        if let Some(from) = from {
            lines.push(Line::new(from, pointer, dotted));
        }
        // Would-be closing edge follows the pointer, not a committed vertex.
        if let Some(&first) = self.vertices.first() {
            lines.push(Line::new(pointer, first, dotted));
        }
        lines
    }

    fn dragging_preview(&self, dotted: bool) -> Vec<Line> {
        let mut lines = self.committed_edges(dotted);
        if self.vertices.len() >= 3 {
            let (first, last) = (self.vertices[0], self.vertices[self.vertices.len() - 1]);
            lines.push(Line::new(last, first, dotted));
        }
        lines
    }
}

impl Tool for PolygonBuilder {
    fn name(&self) -> &'static str {
        "Polygon"
    }

    fn activate(&mut self) {
        self.begin();
    }

    fn deactivate(&mut self, settings: &ToolSettings) -> Vec<Line> {
        self.finalize(settings.dotted)
    }

    fn on_pointer_down(&mut self, pos: Point, settings: &ToolSettings) {
        if self.state != PolygonState::Building {
            return;
        }
        match find_vertex_near(&self.vertices, pos, settings.hit_radius) {
            Some(index) => {
                debug!("Dragging polygon vertex {index}");
                self.anchor = None;
                self.state = PolygonState::DraggingVertex(index);
            }
            None => self.anchor = Some(pos),
        }
    }

    fn on_pointer_move(&mut self, pos: Point, settings: &ToolSettings) -> ToolOutput {
        match self.state {
            PolygonState::Idle => ToolOutput::default(),
            PolygonState::Building => {
                let pointer = match self.anchor {
                    Some(anchor) => settings.constrain(anchor, pos),
                    None => pos,
                };
                ToolOutput::preview(self.building_preview(pointer, settings.dotted))
            }
            PolygonState::DraggingVertex(index) => {
                self.replace_vertex(index, pos);
                ToolOutput::preview(self.dragging_preview(settings.dotted))
            }
        }
    }

    fn on_pointer_up(&mut self, pos: Point, settings: &ToolSettings) -> ToolOutput {
        match self.state {
            PolygonState::Idle => ToolOutput::default(),
            PolygonState::Building => {
                if let Some(anchor) = self.anchor.take() {
                    let release = settings.constrain(anchor, pos);
                    self.commit_edge(anchor, release);
                }
                ToolOutput::preview(self.committed_edges(settings.dotted))
            }
            PolygonState::DraggingVertex(index) => {
                self.replace_vertex(index, pos);
                debug!("Released polygon vertex {index}");
                self.state = PolygonState::Building;
                ToolOutput::preview(self.committed_edges(settings.dotted))
            }
        }
    }

    fn resting_preview(&self, settings: &ToolSettings) -> Vec<Line> {
        self.committed_edges(settings.dotted)
    }

    fn reset(&mut self) {
        self.vertices.clear();
        self.anchor = None;
        if self.state != PolygonState::Idle {
            self.state = PolygonState::Building;
        }
    }

    fn current_state_name(&self) -> &'static str {
        match self.state {
            PolygonState::Idle => "Idle",
            PolygonState::Building => "Building",
            PolygonState::DraggingVertex(_) => "DraggingVertex",
        }
    }
}

/// One line per consecutive vertex pair, plus the wrap-around edge.
pub fn closed_edges(vertices: &[Point], dotted: bool) -> Vec<Line> {
    let n = vertices.len();
    (0..n)
        .map(|i| Line::new(vertices[i], vertices[(i + 1) % n], dotted))
        .collect()
}
