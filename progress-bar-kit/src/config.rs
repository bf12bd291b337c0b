//! Configuration model for the track segments and the bar.
//!
//! A progress bar is described by one [`TrackSegmentConfig`] per visible
//! track segment and a single [`BarConfig`]. Both are plain values with
//! chainable setters:
//!
//! ```
//! use progress_bar_kit::config::{CornerRadii, EdgeInsets, RoundedCorners, TrackSegmentConfig};
//!
//! let first = TrackSegmentConfig::default()
//!     .rounded_corners(RoundedCorners::LEFT)
//!     .corner_radii(CornerRadii::uniform(8.0))
//!     .edge_insets(EdgeInsets::uniform(2.5));
//! let last = first.clone().rounded_corners(RoundedCorners::RIGHT);
//!
//! // Three segments: rounded on the outer ends only.
//! let segments = vec![first, TrackSegmentConfig::default(), last];
//! assert_eq!(segments.len(), 3);
//! ```

use std::ops::BitOr;

use derive_setters::Setters;

/// Selects which corners of a rectangle are rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundedCorners {
    /// Top-left corner.
    pub top_left: bool,
    /// Top-right corner.
    pub top_right: bool,
    /// Bottom-right corner.
    pub bottom_right: bool,
    /// Bottom-left corner.
    pub bottom_left: bool,
}

impl RoundedCorners {
    /// No rounded corner.
    pub const NONE: Self = Self::new(false, false, false, false);
    /// All four corners.
    pub const ALL: Self = Self::new(true, true, true, true);
    /// Top-left only.
    pub const TOP_LEFT: Self = Self::new(true, false, false, false);
    /// Top-right only.
    pub const TOP_RIGHT: Self = Self::new(false, true, false, false);
    /// Bottom-right only.
    pub const BOTTOM_RIGHT: Self = Self::new(false, false, true, false);
    /// Bottom-left only.
    pub const BOTTOM_LEFT: Self = Self::new(false, false, false, true);
    /// Both corners of the leading edge.
    pub const LEFT: Self = Self::new(true, false, false, true);
    /// Both corners of the trailing edge.
    pub const RIGHT: Self = Self::new(false, true, true, false);

    /// Corner selection in clockwise order starting at the top-left.
    pub const fn new(
        top_left: bool,
        top_right: bool,
        bottom_right: bool,
        bottom_left: bool,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Whether every corner selected in `other` is also selected here.
    pub fn contains(self, other: Self) -> bool {
        (!other.top_left || self.top_left)
            && (!other.top_right || self.top_right)
            && (!other.bottom_right || self.bottom_right)
            && (!other.bottom_left || self.bottom_left)
    }

    /// Whether no corner is selected.
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

impl BitOr for RoundedCorners {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::new(
            self.top_left || rhs.top_left,
            self.top_right || rhs.top_right,
            self.bottom_right || rhs.bottom_right,
            self.bottom_left || rhs.bottom_left,
        )
    }
}

/// Horizontal and vertical radii of a rounded corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerRadii {
    /// Radius along the x axis.
    pub x: f32,
    /// Radius along the y axis.
    pub y: f32,
}

impl CornerRadii {
    /// Square corners.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates elliptical radii.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Circular radii.
    pub const fn uniform(radius: f32) -> Self {
        Self::new(radius, radius)
    }
}

/// Insets applied to a track segment inside its slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    /// Inset from the top edge.
    pub top: f32,
    /// Inset from the leading edge.
    pub left: f32,
    /// Inset from the bottom edge.
    pub bottom: f32,
    /// Inset from the trailing edge.
    pub right: f32,
}

impl EdgeInsets {
    /// No inset.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Insets in `(top, left, bottom, right)` order.
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on every edge.
    pub const fn uniform(inset: f32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Sum of the leading and trailing insets.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Whether every inset is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .into_iter()
            .all(|inset| inset.is_finite() && inset >= 0.0)
    }
}

/// Corner rounding applied when outlining a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutlineStyle {
    /// Corners to round.
    pub corners: RoundedCorners,
    /// Radii of the rounded corners.
    pub radii: CornerRadii,
}

impl OutlineStyle {
    /// Square corners everywhere.
    pub const SQUARE: Self = Self {
        corners: RoundedCorners::NONE,
        radii: CornerRadii::ZERO,
    };

    /// Whether the style produces at least one visibly rounded corner.
    pub fn is_rounded(&self) -> bool {
        !self.corners.is_empty() && self.radii.x > 0.0 && self.radii.y > 0.0
    }
}

/// Configuration of one track segment.
///
/// The number of configurations handed to a progress bar is the number of
/// segments its track is divided into.
#[derive(Clone, Debug, Default, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackSegmentConfig {
    /// The corners to be rounded.
    pub rounded_corners: RoundedCorners,
    /// The radii of the rounded corners.
    pub corner_radii: CornerRadii,
    /// Insets of the segment inside its slot.
    pub edge_insets: EdgeInsets,
}

impl TrackSegmentConfig {
    /// Rounding of this segment.
    pub fn outline_style(&self) -> OutlineStyle {
        OutlineStyle {
            corners: self.rounded_corners,
            radii: self.corner_radii,
        }
    }
}

/// Configuration of the bar fill.
#[derive(Clone, Debug, Default, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarConfig {
    /// The corners to be rounded.
    pub rounded_corners: RoundedCorners,
    /// The radii of the rounded corners.
    pub corner_radii: CornerRadii,
}

impl BarConfig {
    /// Rounding of the bar.
    pub fn outline_style(&self) -> OutlineStyle {
        OutlineStyle {
            corners: self.rounded_corners,
            radii: self.corner_radii,
        }
    }
}

/// The configuration an outline is styled with.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ShapeConfig {
    /// Square corners; used for the full track rectangle underneath the mask.
    #[default]
    Plain,
    /// Styled like a track segment. Insets are ignored for single outlines.
    Track(TrackSegmentConfig),
    /// Styled like the bar.
    Bar(BarConfig),
}

impl ShapeConfig {
    /// Rounding described by this configuration.
    pub fn outline_style(&self) -> OutlineStyle {
        match self {
            ShapeConfig::Plain => OutlineStyle::SQUARE,
            ShapeConfig::Track(config) => config.outline_style(),
            ShapeConfig::Bar(config) => config.outline_style(),
        }
    }
}

impl From<TrackSegmentConfig> for ShapeConfig {
    fn from(config: TrackSegmentConfig) -> Self {
        ShapeConfig::Track(config)
    }
}

impl From<BarConfig> for ShapeConfig {
    fn from(config: BarConfig) -> Self {
        ShapeConfig::Bar(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_union() {
        let corners = RoundedCorners::TOP_LEFT | RoundedCorners::BOTTOM_LEFT;
        assert_eq!(corners, RoundedCorners::LEFT);
        assert_eq!(
            RoundedCorners::LEFT | RoundedCorners::RIGHT,
            RoundedCorners::ALL
        );
        assert!(RoundedCorners::ALL.contains(RoundedCorners::RIGHT));
        assert!(!RoundedCorners::LEFT.contains(RoundedCorners::TOP_RIGHT));
        assert!(RoundedCorners::NONE.is_empty());
    }

    #[test]
    fn test_default_segment_is_square_without_insets() {
        let config = TrackSegmentConfig::default();
        assert_eq!(config.outline_style(), OutlineStyle::SQUARE);
        assert_eq!(config.edge_insets, EdgeInsets::ZERO);
        assert!(!config.outline_style().is_rounded());
    }

    #[test]
    fn test_shape_config_dispatch() {
        let bar = BarConfig::default()
            .rounded_corners(RoundedCorners::ALL)
            .corner_radii(CornerRadii::uniform(4.0));
        let track = TrackSegmentConfig::default()
            .rounded_corners(RoundedCorners::RIGHT)
            .corner_radii(CornerRadii::new(6.0, 3.0));

        assert_eq!(ShapeConfig::Plain.outline_style(), OutlineStyle::SQUARE);
        assert_eq!(
            ShapeConfig::from(bar).outline_style(),
            OutlineStyle {
                corners: RoundedCorners::ALL,
                radii: CornerRadii::uniform(4.0),
            }
        );
        assert_eq!(
            ShapeConfig::from(track).outline_style().radii,
            CornerRadii::new(6.0, 3.0)
        );
    }

    #[test]
    fn test_insets_sums() {
        let insets = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal(), 6.0);
        assert_eq!(insets.vertical(), 4.0);
        assert!(insets.is_valid());
        assert!(!EdgeInsets::new(0.0, -1.0, 0.0, 0.0).is_valid());
        assert!(!EdgeInsets::uniform(f32::NAN).is_valid());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_segment_config_from_json() {
        let config: TrackSegmentConfig = serde_json::from_str(
            r#"{ "corner_radii": { "x": 8.0, "y": 8.0 },
                 "rounded_corners": { "top_left": true, "top_right": false,
                                      "bottom_right": false, "bottom_left": true } }"#,
        )
        .expect("valid segment config");

        assert_eq!(config.rounded_corners, RoundedCorners::LEFT);
        assert_eq!(config.corner_radii, CornerRadii::uniform(8.0));
        assert_eq!(config.edge_insets, EdgeInsets::ZERO);
    }
}
