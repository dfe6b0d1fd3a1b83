//! Viewport fit calculation.
//!
//! The fit-to-view operation scales and pans the rendered graph so that it
//! is centered inside the container with a fixed padding fraction, at a
//! zoom clamped to fixed bounds. None of the constants are configurable
//! per instance.

use cipherflow_core::geometry::{Bounds, Point, Size};

/// Container width below which the narrow layout variant is active.
pub const NARROW_BREAKPOINT: f32 = 468.0;

/// Fraction of the container reserved as padding on each axis.
pub const FIT_PADDING: f32 = 0.2;

/// Lower zoom clamp.
pub const MIN_ZOOM: f32 = 0.1;

/// Upper zoom clamp.
///
/// Applied uniformly: small graphs are centered at natural size rather
/// than magnified to fill the container.
pub const MAX_ZOOM: f32 = 1.0;

/// The transform that maps layout coordinates into container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f32,
    offset: Point,
}

impl Viewport {
    /// The identity transform used before any fit has run.
    pub fn identity() -> Self {
        Self {
            zoom: 1.0,
            offset: Point::new(0.0, 0.0),
        }
    }

    /// Computes the fit transform for the given content and container.
    ///
    /// The zoom is the largest factor at which the content fits inside the
    /// container minus the padding fraction, clamped to
    /// [`MIN_ZOOM`]..=[`MAX_ZOOM`]; the offset centers the scaled content.
    /// A degenerate container yields the identity transform.
    pub fn fit(content: Bounds, container: Size) -> Self {
        if container.is_degenerate() {
            return Self::identity();
        }

        let available = container.scale(1.0 - 2.0 * FIT_PADDING);

        // Zero-extent content (a single point) maxes the ratio out; the
        // clamp below turns that into MAX_ZOOM.
        let ratio_x = available.width() / content.width().max(f32::EPSILON);
        let ratio_y = available.height() / content.height().max(f32::EPSILON);
        let zoom = ratio_x.min(ratio_y).clamp(MIN_ZOOM, MAX_ZOOM);

        let center = content.center();
        let offset = Point::new(
            container.width() / 2.0 - center.x() * zoom,
            container.height() / 2.0 - center.y() * zoom,
        );

        Self { zoom, offset }
    }

    pub fn zoom(self) -> f32 {
        self.zoom
    }

    pub fn offset(self) -> Point {
        self.offset
    }

    /// Maps a layout-space point into container space.
    pub fn apply(self, point: Point) -> Point {
        Point::new(point.x() * self.zoom, point.y() * self.zoom)
            .translate(self.offset.x(), self.offset.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    fn content(width: f32, height: f32) -> Bounds {
        Bounds::from_origin_size(Point::new(0.0, 0.0), Size::new(width, height))
    }

    #[test]
    fn identity_before_fit() {
        let viewport = Viewport::identity();
        assert_eq!(viewport.zoom(), 1.0);
        assert_eq!(viewport.apply(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn large_content_is_scaled_down() {
        let viewport = Viewport::fit(content(1000.0, 400.0), Size::new(600.0, 400.0));
        assert!(viewport.zoom() < 1.0);
        assert!(viewport.zoom() >= MIN_ZOOM);
    }

    #[test]
    fn small_content_is_not_magnified() {
        let viewport = Viewport::fit(content(50.0, 30.0), Size::new(800.0, 600.0));
        assert_eq!(viewport.zoom(), MAX_ZOOM);
    }

    #[test]
    fn zoom_clamps_at_minimum_for_extreme_content() {
        let viewport = Viewport::fit(content(100_000.0, 100.0), Size::new(400.0, 400.0));
        assert_eq!(viewport.zoom(), MIN_ZOOM);
    }

    #[test]
    fn degenerate_container_yields_identity() {
        assert_eq!(
            Viewport::fit(content(100.0, 100.0), Size::new(0.0, 300.0)),
            Viewport::identity()
        );
    }

    #[test]
    fn fit_centers_the_content() {
        let bounds = content(200.0, 100.0);
        let container = Size::new(600.0, 400.0);
        let viewport = Viewport::fit(bounds, container);

        let mapped_center = viewport.apply(bounds.center());
        assert!(approx_eq!(f32, mapped_center.x(), 300.0, epsilon = 0.001));
        assert!(approx_eq!(f32, mapped_center.y(), 200.0, epsilon = 0.001));
    }

    proptest! {
        #[test]
        fn zoom_stays_within_clamp_bounds(
            content_w in 1.0f32..10_000.0,
            content_h in 1.0f32..10_000.0,
            container_w in 1.0f32..4_000.0,
            container_h in 1.0f32..4_000.0,
        ) {
            let viewport = Viewport::fit(
                content(content_w, content_h),
                Size::new(container_w, container_h),
            );
            prop_assert!(viewport.zoom() >= MIN_ZOOM);
            prop_assert!(viewport.zoom() <= MAX_ZOOM);
        }

        #[test]
        fn unclamped_fit_keeps_padded_content_inside_container(
            content_w in 10.0f32..2_000.0,
            content_h in 10.0f32..2_000.0,
            container_w in 100.0f32..4_000.0,
            container_h in 100.0f32..4_000.0,
        ) {
            let bounds = content(content_w, content_h);
            let container = Size::new(container_w, container_h);
            let viewport = Viewport::fit(bounds, container);

            // The fit guarantee only holds when the zoom was not forced up
            // by the minimum clamp.
            if viewport.zoom() > MIN_ZOOM {
                let scaled = bounds.to_size().scale(viewport.zoom());
                let slack = 0.01;
                prop_assert!(
                    scaled.width() <= container.width() * (1.0 - 2.0 * FIT_PADDING) + slack
                );
                prop_assert!(
                    scaled.height() <= container.height() * (1.0 - 2.0 * FIT_PADDING) + slack
                );
            }
        }

        #[test]
        fn fit_centering_holds_for_all_inputs(
            content_w in 1.0f32..2_000.0,
            content_h in 1.0f32..2_000.0,
            container_w in 1.0f32..4_000.0,
            container_h in 1.0f32..4_000.0,
        ) {
            let bounds = content(content_w, content_h);
            let container = Size::new(container_w, container_h);
            let viewport = Viewport::fit(bounds, container);

            let mapped = viewport.apply(bounds.center());
            prop_assert!(approx_eq!(
                f32,
                mapped.x(),
                container.width() / 2.0,
                epsilon = 0.01
            ));
            prop_assert!(approx_eq!(
                f32,
                mapped.y(),
                container.height() / 2.0,
                epsilon = 0.01
            ));
        }
    }
}
