//! Geometry engine: maps percentages to rectangles and rounded outlines.
//!
//! Every function here is a pure function of the container bounds, a
//! percentage and a corner style.

use lyon_path::{Path, math::point, path::Builder};

use crate::{
    config::{CornerRadii, OutlineStyle, RoundedCorners, ShapeConfig},
    error::ProgressBarError,
};

/// Control point distance, relative to the radius, of a cubic Bézier
/// approximating a quarter ellipse.
const QUARTER_ARC_KAPPA: f32 = 0.552_284_8;

/// A fill extent in `[0, 1]`.
///
/// Construction saturates out-of-range input instead of rejecting it. `NaN`
/// is treated as `0`.
///
/// ```
/// use progress_bar_kit::Percentage;
///
/// assert_eq!(Percentage::new(-0.3).get(), 0.0);
/// assert_eq!(Percentage::new(1.7).get(), 1.0);
/// assert_eq!(Percentage::new(0.42).get(), 0.42);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Percentage(f32);

impl Percentage {
    /// Empty.
    pub const ZERO: Self = Self(0.0);
    /// Full.
    pub const FULL: Self = Self(1.0);

    /// Clamps `raw` into `[0, 1]`.
    pub fn new(raw: f32) -> Self {
        Self(clamp_percentage(raw))
    }

    /// The clamped value.
    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<f32> for Percentage {
    fn from(raw: f32) -> Self {
        Self::new(raw)
    }
}

/// Saturates `raw` into `[0, 1]`; `NaN` maps to `0`.
pub fn clamp_percentage(raw: f32) -> f32 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 1.0)
    }
}

/// Size of the container the progress bar is laid out in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerBounds {
    /// Width of the container.
    pub width: f32,
    /// Height of the container.
    pub height: f32,
}

impl ContainerBounds {
    /// Creates bounds from a width and a height.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Rejects negative or non-finite sizes. A zero width is legal.
    pub fn validate(&self) -> Result<(), ProgressBarError> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(ProgressBarError::InvalidBounds {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The rectangle covering the whole container.
    pub fn full_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// An axis-aligned rectangle with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x: f32,
    /// The y-coordinate of the top-left corner.
    pub y: f32,
    /// The width of the rectangle.
    pub width: f32,
    /// The height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// A zero rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a rectangle from position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The x-coordinate of the trailing edge.
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// The y-coordinate of the bottom edge.
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// The smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let width = self.max_x().max(other.max_x()) - x;
        let height = self.max_y().max(other.max_y()) - y;
        Self::new(x, y, width, height)
    }

    /// Linear interpolation towards `other`; `t` is not clamped.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self::new(
            mix(self.x, other.x),
            mix(self.y, other.y),
            mix(self.width, other.width),
            mix(self.height, other.height),
        )
    }
}

/// A closed outline around a rectangle, with some corners rounded.
///
/// Two outlines are equal when they were built from the same rectangle and
/// style; the path is derived from both.
#[derive(Clone, Debug)]
pub struct Outline {
    rect: Rect,
    style: OutlineStyle,
    path: Path,
}

impl Outline {
    /// The outlined rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The corner style.
    pub fn style(&self) -> OutlineStyle {
        self.style
    }

    /// The outline as a path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PartialEq for Outline {
    fn eq(&self, other: &Self) -> bool {
        self.rect == other.rect && self.style == other.style
    }
}

/// Builds a closed outline of `rect` with the corners in `style` rounded.
pub fn rounded_outline(rect: Rect, style: OutlineStyle) -> Outline {
    let mut builder = Path::builder();
    append_rounded_rect(&mut builder, rect, style);
    Outline {
        rect,
        style,
        path: builder.build(),
    }
}

/// Appends `rect` as one closed sub-path to `builder`.
///
/// Radii are limited to half of the rectangle's width and height.
pub(crate) fn append_rounded_rect(builder: &mut Builder, rect: Rect, style: OutlineStyle) {
    let x0 = rect.x.min(rect.max_x());
    let x1 = rect.x.max(rect.max_x());
    let y0 = rect.y.min(rect.max_y());
    let y1 = rect.y.max(rect.max_y());
    let half_w = (x1 - x0) / 2.0;
    let half_h = (y1 - y0) / 2.0;

    let RoundedCorners {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    } = style.corners;
    let (tl_x, tl_y) = corner_radii(top_left, style.radii, half_w, half_h);
    let (tr_x, tr_y) = corner_radii(top_right, style.radii, half_w, half_h);
    let (br_x, br_y) = corner_radii(bottom_right, style.radii, half_w, half_h);
    let (bl_x, bl_y) = corner_radii(bottom_left, style.radii, half_w, half_h);
    let k = 1.0 - QUARTER_ARC_KAPPA;

    builder.begin(point(x0 + tl_x, y0));

    builder.line_to(point(x1 - tr_x, y0));
    if tr_x > 0.0 {
        builder.cubic_bezier_to(
            point(x1 - tr_x * k, y0),
            point(x1, y0 + tr_y * k),
            point(x1, y0 + tr_y),
        );
    }

    builder.line_to(point(x1, y1 - br_y));
    if br_x > 0.0 {
        builder.cubic_bezier_to(
            point(x1, y1 - br_y * k),
            point(x1 - br_x * k, y1),
            point(x1 - br_x, y1),
        );
    }

    builder.line_to(point(x0 + bl_x, y1));
    if bl_x > 0.0 {
        builder.cubic_bezier_to(
            point(x0 + bl_x * k, y1),
            point(x0, y1 - bl_y * k),
            point(x0, y1 - bl_y),
        );
    }

    builder.line_to(point(x0, y0 + tl_y));
    if tl_x > 0.0 {
        builder.cubic_bezier_to(
            point(x0, y0 + tl_y * k),
            point(x0 + tl_x * k, y0),
            point(x0 + tl_x, y0),
        );
    }

    builder.end(true);
}

/// Effective radii of one corner, `(0, 0)` when the corner stays square.
fn corner_radii(selected: bool, radii: CornerRadii, half_w: f32, half_h: f32) -> (f32, f32) {
    if !selected {
        return (0.0, 0.0);
    }
    let rx = radii.x.clamp(0.0, half_w);
    let ry = radii.y.clamp(0.0, half_h);
    if rx > 0.0 && ry > 0.0 {
        (rx, ry)
    } else {
        (0.0, 0.0)
    }
}

/// Computes the bar and track rectangles inside a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryEngine {
    bounds: ContainerBounds,
}

impl GeometryEngine {
    /// Creates an engine for the given container.
    pub fn new(bounds: ContainerBounds) -> Self {
        Self { bounds }
    }

    /// The container bounds.
    pub fn bounds(&self) -> ContainerBounds {
        self.bounds
    }

    /// Full container height, `percentage * container width` wide.
    fn rect_for(&self, percentage: Percentage) -> Rect {
        Rect::new(
            0.0,
            0.0,
            percentage.get() * self.bounds.width,
            self.bounds.height,
        )
    }

    /// The rectangle the bar currently occupies.
    pub fn start_rect(&self, current: Percentage) -> Rect {
        self.rect_for(current)
    }

    /// The rectangle the bar occupies at `value`.
    ///
    /// `end_rect(Percentage::FULL).width` is exactly the container width.
    pub fn end_rect(&self, value: Percentage) -> Rect {
        self.rect_for(value)
    }

    /// Outline of [`Self::start_rect`], styled by `config`.
    pub fn start_outline(&self, config: &ShapeConfig, current: Percentage) -> Outline {
        rounded_outline(self.start_rect(current), config.outline_style())
    }

    /// Outline of [`Self::end_rect`], styled by `config`.
    pub fn end_outline(&self, config: &ShapeConfig, value: Percentage) -> Outline {
        rounded_outline(self.end_rect(value), config.outline_style())
    }
}

#[cfg(test)]
mod tests {
    use lyon_path::Event;

    use super::*;
    use crate::config::BarConfig;

    fn count_curves(path: &Path) -> usize {
        path.iter()
            .filter(|event| matches!(event, Event::Cubic { .. }))
            .count()
    }

    #[test]
    fn test_percentage_saturates() {
        assert_eq!(Percentage::new(-0.3), Percentage::ZERO);
        assert_eq!(Percentage::new(1.7), Percentage::FULL);
        assert_eq!(Percentage::new(0.42).get(), 0.42);
        assert_eq!(Percentage::new(f32::NAN), Percentage::ZERO);
        assert_eq!(Percentage::new(f32::INFINITY), Percentage::FULL);
        assert_eq!(Percentage::new(f32::NEG_INFINITY), Percentage::ZERO);
    }

    #[test]
    fn test_end_rect_full_width_is_exact() {
        for width in [0.0, 1.0, 99.9, 300.0, 1234.567] {
            let engine = GeometryEngine::new(ContainerBounds::new(width, 12.0));
            let rect = engine.end_rect(Percentage::FULL);
            assert_eq!(rect.width, width);
            assert_eq!(rect.height, 12.0);
        }
    }

    #[test]
    fn test_start_rect_follows_current_percentage() {
        let engine = GeometryEngine::new(ContainerBounds::new(200.0, 10.0));
        assert_eq!(
            engine.start_rect(Percentage::ZERO),
            Rect::new(0.0, 0.0, 0.0, 10.0)
        );
        assert_eq!(
            engine.start_rect(Percentage::new(0.25)),
            Rect::new(0.0, 0.0, 50.0, 10.0)
        );
    }

    #[test]
    fn test_zero_width_container_is_degenerate_not_an_error() {
        let bounds = ContainerBounds::new(0.0, 8.0);
        assert!(bounds.validate().is_ok());

        let engine = GeometryEngine::new(bounds);
        let outline = engine.end_outline(&ShapeConfig::Plain, Percentage::new(0.7));
        assert!(outline.rect().is_empty());
        assert!(outline.path().iter().count() > 0);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        assert!(ContainerBounds::new(-1.0, 8.0).validate().is_err());
        assert!(ContainerBounds::new(10.0, f32::NAN).validate().is_err());
    }

    #[test]
    fn test_rounded_outline_only_rounds_selected_corners() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);

        let square = rounded_outline(rect, OutlineStyle::SQUARE);
        assert_eq!(count_curves(square.path()), 0);

        let left = rounded_outline(
            rect,
            OutlineStyle {
                corners: RoundedCorners::LEFT,
                radii: CornerRadii::uniform(8.0),
            },
        );
        assert_eq!(count_curves(left.path()), 2);

        let all = rounded_outline(
            rect,
            OutlineStyle {
                corners: RoundedCorners::ALL,
                radii: CornerRadii::uniform(8.0),
            },
        );
        assert_eq!(count_curves(all.path()), 4);
    }

    #[test]
    fn test_radii_limited_to_half_the_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
        let outline = rounded_outline(
            rect,
            OutlineStyle {
                corners: RoundedCorners::ALL,
                radii: CornerRadii::uniform(50.0),
            },
        );

        for event in outline.path().iter() {
            if let Event::Cubic { to, .. } = event {
                assert!(to.x >= 0.0 && to.x <= 10.0);
                assert!(to.y >= 0.0 && to.y <= 4.0);
            }
        }
        // First point sits at the end of the top-left arc.
        let first = outline.path().iter().next();
        assert!(matches!(
            first,
            Some(Event::Begin { at }) if at.x == 5.0 && at.y == 0.0
        ));
    }

    #[test]
    fn test_outline_is_pure() {
        let engine = GeometryEngine::new(ContainerBounds::new(300.0, 16.0));
        let config = ShapeConfig::Bar(
            BarConfig::default()
                .rounded_corners(RoundedCorners::ALL)
                .corner_radii(CornerRadii::uniform(8.0)),
        );
        let a = engine.end_outline(&config, Percentage::new(0.5));
        let b = engine.end_outline(&config, Percentage::new(0.5));
        assert_eq!(a, b);
        assert_eq!(a.rect().width, 150.0);
    }

    #[test]
    fn test_rect_union_and_lerp() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 2.0, 10.0, 10.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 30.0, 12.0));
        assert_eq!(a.lerp(&b, 0.5), Rect::new(10.0, 1.0, 10.0, 10.0));
    }
}
