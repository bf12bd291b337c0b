//! Fill strategy selection.
//!
//! A single color is drawn as a filled outline whose path is animated
//! directly. Two or more colors are drawn as a horizontal linear gradient
//! clipped by the segment mask; gradient layers cannot interpolate an
//! arbitrary path, so their width is animated instead.

use std::fmt;

use glam::Vec2;

use crate::{
    color::{Color, ColorSpec},
    error::{LayerRole, ProgressBarError},
    geometry::Outline,
};

/// Whether `colors` describes a solid fill.
pub fn is_solid(colors: &ColorSpec) -> bool {
    colors.is_solid()
}

/// A linear gradient in the layer's unit space.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    colors: ColorSpec,
    start_point: Vec2,
    end_point: Vec2,
}

impl LinearGradient {
    /// A left-to-right gradient from `(0, 0)` to `(1, 0)`.
    pub fn horizontal(colors: ColorSpec) -> Self {
        Self {
            colors,
            start_point: Vec2::ZERO,
            end_point: Vec2::X,
        }
    }

    /// The gradient stops, evenly spaced in order.
    pub fn colors(&self) -> &ColorSpec {
        &self.colors
    }

    /// Start of the gradient axis in unit space.
    pub fn start_point(&self) -> Vec2 {
        self.start_point
    }

    /// End of the gradient axis in unit space.
    pub fn end_point(&self) -> Vec2 {
        self.end_point
    }

    /// Color at `position` along the gradient axis, `0` at the start point.
    pub fn color_at(&self, position: f32) -> Color {
        let stops = self.colors.as_slice();
        match stops {
            [] => Color::TRANSPARENT,
            [only] => *only,
            _ => {
                let scaled = position.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
                let index = (scaled.floor() as usize).min(stops.len() - 2);
                let t = scaled - index as f32;
                let (a, b) = (stops[index], stops[index + 1]);
                Color::new(
                    a.r + (b.r - a.r) * t,
                    a.g + (b.g - a.g) * t,
                    a.b + (b.b - a.b) * t,
                    a.a + (b.a - a.a) * t,
                )
            }
        }
    }
}

/// How a layer is painted.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    /// One fill color applied to the outline.
    Solid(Color),
    /// A horizontal gradient clipped by the mask.
    LinearGradient(LinearGradient),
}

impl Fill {
    /// Picks the fill for `colors` by their count.
    pub fn select(colors: &ColorSpec, role: LayerRole) -> Result<Self, ProgressBarError> {
        match colors.as_slice() {
            [] => Err(ProgressBarError::EmptyColors { role }),
            [color] => Ok(Fill::Solid(*color)),
            _ => Ok(Fill::LinearGradient(LinearGradient::horizontal(colors.clone()))),
        }
    }

    /// Whether this is a solid fill.
    pub fn is_solid(&self) -> bool {
        matches!(self, Fill::Solid(_))
    }

    /// The layer property a transition drives for this fill.
    pub fn animated_key(&self) -> AnimatedKey {
        match self {
            Fill::Solid(_) => AnimatedKey::Path,
            Fill::LinearGradient(_) => AnimatedKey::BoundsWidth,
        }
    }

    /// The value of [`Self::animated_key`] for a bar drawn as `outline`.
    pub fn animated_value(&self, outline: &Outline) -> AnimatedValue {
        match self {
            Fill::Solid(_) => AnimatedValue::Path(outline.clone()),
            Fill::LinearGradient(_) => AnimatedValue::Width(outline.rect().width),
        }
    }
}

/// The animatable layer property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimatedKey {
    /// The outline path of a shape layer.
    Path,
    /// The width of a gradient layer's bounds.
    BoundsWidth,
}

impl AnimatedKey {
    /// Key path understood by the rendering layer.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimatedKey::Path => "path",
            AnimatedKey::BoundsWidth => "bounds.size.width",
        }
    }
}

impl fmt::Display for AnimatedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value of an [`AnimatedKey`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnimatedValue {
    /// A full outline.
    Path(Outline),
    /// A scalar width.
    Width(f32),
}

impl AnimatedValue {
    /// Width of the bar this value describes.
    pub fn width(&self) -> f32 {
        match self {
            AnimatedValue::Path(outline) => outline.rect().width,
            AnimatedValue::Width(width) => *width,
        }
    }

    /// The outline, for path values.
    pub fn outline(&self) -> Option<&Outline> {
        match self {
            AnimatedValue::Path(outline) => Some(outline),
            AnimatedValue::Width(_) => None,
        }
    }
}
