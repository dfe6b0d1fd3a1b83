//! Geometric primitives used by layout and viewport calculations.

/// A position in unitless layout coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> f32 {
        self.y
    }

    /// Moves the point by the given offset.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The dimensions of an element with width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if either dimension is zero or negative.
    ///
    /// A degenerate size cannot contain content and is skipped by the
    /// viewport fit calculation.
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Multiplies both dimensions by the given factor.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// An axis-aligned rectangular bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from a top-left origin and a size.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            min_x: origin.x(),
            min_y: origin.y(),
            max_x: origin.x() + size.width(),
            max_y: origin.y() + size.height(),
        }
    }

    /// Returns the minimum x-coordinate of the bounds.
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds.
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds.
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds.
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds.
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds.
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds.
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Converts the bounds to a size.
    pub fn to_size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Merges two bounds into the smallest bounds containing both.
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn point_accessors() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn point_translate() {
        let moved = Point::new(1.0, 2.0).translate(3.0, -1.0);
        assert_eq!(moved.x(), 4.0);
        assert_eq!(moved.y(), 1.0);
    }

    #[test]
    fn size_degenerate() {
        assert!(Size::new(0.0, 10.0).is_degenerate());
        assert!(Size::new(10.0, 0.0).is_degenerate());
        assert!(Size::new(-1.0, 5.0).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }

    #[test]
    fn size_scale() {
        let scaled = Size::new(10.0, 20.0).scale(0.5);
        assert_eq!(scaled.width(), 5.0);
        assert_eq!(scaled.height(), 10.0);
    }

    #[test]
    fn bounds_from_origin_size() {
        let bounds = Bounds::from_origin_size(Point::new(10.0, 20.0), Size::new(6.0, 8.0));
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.max_x(), 16.0);
        assert_eq!(bounds.max_y(), 28.0);
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 8.0);
    }

    #[test]
    fn bounds_center() {
        let bounds = Bounds::from_origin_size(Point::new(0.0, 0.0), Size::new(4.0, 6.0));
        let center = bounds.center();
        assert_eq!(center.x(), 2.0);
        assert_eq!(center.y(), 3.0);
    }

    #[test]
    fn bounds_merge() {
        let a = Bounds::from_origin_size(Point::new(1.0, 2.0), Size::new(4.0, 4.0));
        let b = Bounds::from_origin_size(Point::new(3.0, 0.0), Size::new(5.0, 4.0));
        let merged = a.merge(b);
        assert_eq!(merged.min_x(), 1.0);
        assert_eq!(merged.min_y(), 0.0);
        assert_eq!(merged.max_x(), 8.0);
        assert_eq!(merged.max_y(), 6.0);
    }

    #[test]
    fn bounds_to_size() {
        let bounds = Bounds::from_origin_size(Point::new(1.0, 2.0), Size::new(5.0, 7.0));
        let size = bounds.to_size();
        assert_eq!(size.width(), 5.0);
        assert_eq!(size.height(), 7.0);
    }

    #[test]
    fn center_of_unit_bounds() {
        let bounds = Bounds::from_origin_size(Point::new(0.1, 0.2), Size::new(1.0, 1.0));
        let center = bounds.center();
        assert_approx_eq!(f32, center.x(), 0.6);
        assert_approx_eq!(f32, center.y(), 0.7);
    }

    proptest! {
        #[test]
        fn merge_contains_both_inputs(
            ax in -1e3f32..1e3,
            ay in -1e3f32..1e3,
            aw in 0.0f32..1e3,
            ah in 0.0f32..1e3,
            bx in -1e3f32..1e3,
            by in -1e3f32..1e3,
            bw in 0.0f32..1e3,
            bh in 0.0f32..1e3,
        ) {
            let a = Bounds::from_origin_size(Point::new(ax, ay), Size::new(aw, ah));
            let b = Bounds::from_origin_size(Point::new(bx, by), Size::new(bw, bh));
            let merged = a.merge(b);

            for bounds in [a, b] {
                prop_assert!(merged.min_x() <= bounds.min_x());
                prop_assert!(merged.min_y() <= bounds.min_y());
                prop_assert!(merged.max_x() >= bounds.max_x());
                prop_assert!(merged.max_y() >= bounds.max_y());
            }
        }
    }
}
