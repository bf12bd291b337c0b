//! Errors reported by the progress bar.

use std::fmt;

use crate::config::EdgeInsets;

/// The layer a configuration error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerRole {
    /// The background track.
    Track,
    /// The foreground bar.
    Bar,
}

impl fmt::Display for LayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerRole::Track => f.write_str("track"),
            LayerRole::Bar => f.write_str("bar"),
        }
    }
}

/// Errors that can occur while binding or animating a progress bar.
///
/// Out-of-range percentages are never an error; they are clamped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProgressBarError {
    /// No track segment configuration was supplied.
    #[error("at least one track segment is required")]
    EmptyTrack,
    /// A layer was configured without any color.
    #[error("the {role} needs at least one color")]
    EmptyColors {
        /// The layer missing colors.
        role: LayerRole,
    },
    /// The container size is negative or not finite.
    #[error("invalid container size {width}x{height}")]
    InvalidBounds {
        /// Container width.
        width: f32,
        /// Container height.
        height: f32,
    },
    /// A segment has a negative or non-finite inset.
    #[error("insets of track segment {index} must be finite and non-negative, got {insets:?}")]
    InvalidInsets {
        /// Index of the offending segment.
        index: usize,
        /// The rejected insets.
        insets: EdgeInsets,
    },
    /// A segment's insets do not fit inside its slot.
    #[error(
        "insets of track segment {index} ({horizontal}x{vertical}) exceed its slot ({slot_width}x{slot_height})"
    )]
    InsetsExceedSlot {
        /// Index of the offending segment.
        index: usize,
        /// Width available to the segment.
        slot_width: f32,
        /// Height available to the segment.
        slot_height: f32,
        /// Sum of the leading and trailing insets.
        horizontal: f32,
        /// Sum of the top and bottom insets.
        vertical: f32,
    },
    /// The progress bar was used before being bound to a container.
    #[error("progress bar is not bound to a container yet")]
    NotBound,
    /// The progress bar was bound a second time.
    #[error("progress bar is already bound to a container")]
    AlreadyBound,
}
