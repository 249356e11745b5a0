//! Contains the Bounds struct, an order-independent rectangle in
//! screen-pixel space held as two corner points.  The zoom gesture
//! reassigns its current selection across asynchronous pointer
//! events, so every operation here returns a fresh value; no handler
//! ever observes a half-updated rectangle.

/// A point in screen-pixel space.  Pointer coordinates arrive
/// fractional, so the components are floats.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Horizontal component, growing rightward.
    pub x: f64,
    /// Vertical component, growing downward.
    pub y: f64,
}

impl Point {
    /// Constructor.
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// The point reflected through the origin.  Undoes a translation
    /// offset.
    pub fn negated(&self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Two corner points of a selection rectangle, in the order the user
/// drew them.  `start` is where the drag began and `end` is wherever
/// the pointer currently sits, so neither corner is guaranteed to be
/// the lesser one; the derived accessors sort that out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    /// The corner the drag started from.
    pub start: Point,
    /// The corner under the pointer.
    pub end: Point,
}

impl Bounds {
    /// Constructor.
    pub fn new(start: Point, end: Point) -> Bounds {
        Bounds { start, end }
    }

    /// The degenerate zero-size selection at the origin; the safe
    /// default before any gesture starts.
    pub fn empty() -> Bounds {
        Bounds::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
    }

    /// Horizontal extent, regardless of corner order.
    pub fn width(&self) -> f64 {
        (self.end.x - self.start.x).abs()
    }

    /// Vertical extent, regardless of corner order.
    pub fn height(&self) -> f64 {
        (self.end.y - self.start.y).abs()
    }

    /// The component-wise lesser corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y))
    }

    /// The component-wise greater corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y))
    }

    /// The midpoint of the rectangle.
    pub fn center(&self) -> Point {
        let top_left = self.top_left();
        let bottom_right = self.bottom_right();
        Point::new(
            (top_left.x + bottom_right.x) / 2.0,
            (top_left.y + bottom_right.y) / 2.0,
        )
    }

    /// The same rectangle with its corners ordered, so `start` is the
    /// top-left one afterward.  Applied when a draw gesture ends.
    pub fn as_normalized(&self) -> Bounds {
        Bounds::new(self.top_left(), self.bottom_right())
    }

    /// The rectangle translated whole by `offset`.  Used when the
    /// user drags the selection around rather than resizing it.
    pub fn move_by(&self, offset: Point) -> Bounds {
        Bounds::new(
            Point::new(self.start.x + offset.x, self.start.y + offset.y),
            Point::new(self.end.x + offset.x, self.end.y + offset.y),
        )
    }

    /// The rectangle with the same start and a replaced end corner.
    /// Applied on every pointer move during the draw gesture.
    pub fn with_end(&self, end: Point) -> Bounds {
        Bounds::new(self.start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_sort_component_wise() {
        let bounds = Bounds::new(Point::new(10.0, 2.0), Point::new(4.0, 8.0));
        assert_eq!(bounds.top_left(), Point::new(4.0, 2.0));
        assert_eq!(bounds.bottom_right(), Point::new(10.0, 8.0));
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 6.0);
        assert_eq!(bounds.center(), Point::new(7.0, 5.0));
    }

    #[test]
    fn normalization_orders_and_is_idempotent() {
        let bounds = Bounds::new(Point::new(10.0, 2.0), Point::new(4.0, 8.0));
        let normalized = bounds.as_normalized();
        assert_eq!(normalized.start, bounds.top_left());
        assert_eq!(normalized.end, bounds.bottom_right());
        assert_eq!(normalized.as_normalized(), normalized);
        assert_eq!(normalized.top_left(), bounds.top_left());
    }

    #[test]
    fn translation_is_invertible() {
        let bounds = Bounds::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        let offset = Point::new(5.5, -2.5);
        assert_eq!(bounds.move_by(offset).move_by(offset.negated()), bounds);
    }

    #[test]
    fn translation_preserves_size() {
        let bounds = Bounds::new(Point::new(1.0, 2.0), Point::new(7.0, 12.0));
        let moved = bounds.move_by(Point::new(100.0, 50.0));
        assert_eq!(moved.width(), bounds.width());
        assert_eq!(moved.height(), bounds.height());
        assert_eq!(moved.top_left(), Point::new(101.0, 52.0));
    }

    #[test]
    fn with_end_keeps_the_anchor() {
        let bounds = Bounds::new(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        let grown = bounds.with_end(Point::new(9.0, 7.0));
        assert_eq!(grown.start, bounds.start);
        assert_eq!(grown.end, Point::new(9.0, 7.0));
    }

    #[test]
    fn empty_has_no_extent() {
        assert_eq!(Bounds::empty().width(), 0.0);
        assert_eq!(Bounds::empty().height(), 0.0);
        assert_eq!(Bounds::empty().center(), Point::new(0.0, 0.0));
    }
}
