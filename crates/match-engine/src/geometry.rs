//! Geometry
//!
//! Viewport rectangles and the anchor points connector lines are drawn
//! between.

/// A point in surface or viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box, same shape as a DOM bounding client rect
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Where the outgoing line leaves a left-column element
    pub fn right_center(&self) -> Point {
        Point::new(self.right(), self.center_y())
    }

    /// Where the incoming line meets a right-column element
    pub fn left_center(&self) -> Point {
        Point::new(self.left, self.center_y())
    }
}

/// Convert a viewport point into coordinates local to `container`
pub fn to_local(point: Point, container: &Rect) -> Point {
    Point::new(point.x - container.left, point.y - container.top)
}

/// Start and end of the connector between two elements, local to `container`
pub fn connector_anchors(left: &Rect, right: &Rect, container: &Rect) -> (Point, Point) {
    (
        to_local(left.right_center(), container),
        to_local(right.left_center(), container),
    )
}
