//! Segment mask builder.
//!
//! The track is divided into equally wide slots, one per
//! [`TrackSegmentConfig`]. Each slot holds one segment, shrunk by the
//! segment's insets and outlined with the segment's own rounding. The union
//! of all segment outlines clips both the track and the bar, so the bar never
//! shows outside the visible segments.

use lyon_path::Path;
use smallvec::SmallVec;
use tracing::trace;

use crate::{
    color::Color,
    config::TrackSegmentConfig,
    error::ProgressBarError,
    geometry::{Rect, append_rounded_rect},
};

/// Clip region made of one rounded rectangle per track segment.
#[derive(Clone, Debug)]
pub struct SegmentMask {
    slot_width: f32,
    slots: SmallVec<[Rect; 4]>,
    segments: SmallVec<[Rect; 4]>,
    path: Path,
}

impl SegmentMask {
    /// Partitions `full` into `configs.len()` slots and outlines every
    /// segment.
    ///
    /// Fails with [`ProgressBarError::EmptyTrack`] when `configs` is empty,
    /// with [`ProgressBarError::InvalidInsets`] when an inset is negative or
    /// not finite, and with [`ProgressBarError::InsetsExceedSlot`] when a
    /// segment's insets leave it with a negative size.
    pub fn build(full: Rect, configs: &[TrackSegmentConfig]) -> Result<Self, ProgressBarError> {
        if configs.is_empty() {
            return Err(ProgressBarError::EmptyTrack);
        }

        let slot_width = full.width / configs.len() as f32;
        let mut slots = SmallVec::with_capacity(configs.len());
        let mut segments = SmallVec::with_capacity(configs.len());
        let mut builder = Path::builder();

        for (index, config) in configs.iter().enumerate() {
            let insets = config.edge_insets;
            if !insets.is_valid() {
                return Err(ProgressBarError::InvalidInsets { index, insets });
            }

            let horizontal = insets.horizontal();
            let vertical = insets.vertical();
            if horizontal > slot_width || vertical > full.height {
                return Err(ProgressBarError::InsetsExceedSlot {
                    index,
                    slot_width,
                    slot_height: full.height,
                    horizontal,
                    vertical,
                });
            }

            let slot_x = full.x + index as f32 * slot_width;
            let slot = Rect::new(slot_x, full.y, slot_width, full.height);
            let segment = Rect::new(
                slot_x + insets.left,
                full.y + insets.top,
                slot_width - horizontal,
                full.height - vertical,
            );
            trace!(index, ?segment, "track segment laid out");

            append_rounded_rect(&mut builder, segment, config.outline_style());
            slots.push(slot);
            segments.push(segment);
        }

        Ok(Self {
            slot_width,
            slots,
            segments,
            path: builder.build(),
        })
    }

    /// Width of each slot, insets not subtracted.
    pub fn slot_width(&self) -> f32 {
        self.slot_width
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A built mask always holds at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The slots the track is partitioned into.
    pub fn slots(&self) -> &[Rect] {
        &self.slots
    }

    /// The visible segment rectangles, insets applied.
    pub fn segments(&self) -> &[Rect] {
        &self.segments
    }

    /// The smallest rectangle containing every segment.
    pub fn bounding_rect(&self) -> Rect {
        self.segments
            .iter()
            .copied()
            .reduce(|acc, segment| acc.union(&segment))
            .unwrap_or(Rect::ZERO)
    }

    /// The combined clip path, one closed sub-path per segment.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Color the mask layer is filled with; only its coverage matters.
    pub fn fill_color(&self) -> Color {
        Color::WHITE
    }
}
