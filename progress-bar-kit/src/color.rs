//! Colors used to fill the track and the bar.

use bytemuck::{Pod, Zeroable};
use smallvec::SmallVec;

/// A color in the linear sRGB color space with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)] // Gradient stops are uploaded as-is.
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white. Mask layers are filled with it.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three `f32` values.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` values.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

/// An ordered list of colors describing how a layer is filled.
///
/// A single color means a solid fill. Two or more colors are blended as a
/// horizontal gradient, first color on the left.
///
/// # Example
///
/// ```
/// use progress_bar_kit::{Color, ColorSpec};
///
/// let solid = ColorSpec::solid(Color::BLACK);
/// assert!(solid.is_solid());
///
/// let gradient: ColorSpec = [Color::BLACK, Color::WHITE].into_iter().collect();
/// assert!(!gradient.is_solid());
/// assert_eq!(gradient.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColorSpec(SmallVec<[Color; 4]>);

impl ColorSpec {
    /// A single-color specification.
    pub fn solid(color: Color) -> Self {
        let mut colors = SmallVec::new();
        colors.push(color);
        Self(colors)
    }

    /// A gradient specification from left to right.
    pub fn gradient(colors: impl IntoIterator<Item = Color>) -> Self {
        colors.into_iter().collect()
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no color was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the layer renders as a solid fill.
    pub fn is_solid(&self) -> bool {
        self.0.len() == 1
    }

    /// The first color, if any.
    pub fn first(&self) -> Option<Color> {
        self.0.first().copied()
    }

    /// All colors in order.
    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    /// Raw bytes of the colors, laid out as consecutive `[f32; 4]` stops.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.0.as_slice())
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

impl From<Vec<Color>> for ColorSpec {
    fn from(colors: Vec<Color>) -> Self {
        Self(SmallVec::from_vec(colors))
    }
}

impl<const N: usize> From<[Color; N]> for ColorSpec {
    fn from(colors: [Color; N]) -> Self {
        colors.into_iter().collect()
    }
}

impl FromIterator<Color> for ColorSpec {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
