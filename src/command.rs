use crate::point::Point;

/// Input the editor understands, already translated into raster coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pointer pressed.
    BeginStroke(Point),
    /// Pointer moved while pressed.
    UpdateStroke(Point),
    /// Pointer released.
    EndStroke(Point),
    /// Dotted style on or off for new lines.
    ToggleDotted(bool),
    /// Axis/diagonal snapping on or off.
    ToggleSnap(bool),
    /// Enter polygon mode, or leave it and commit the polygon.
    TogglePolygonMode,
    /// Drop all committed lines and any in-progress geometry.
    ClearAll,
}
