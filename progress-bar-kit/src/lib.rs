//! Geometry and animation model for an animatable, segmented progress bar.
//!
//! The crate computes everything a host UI toolkit needs to draw and animate
//! a progress bar: the track and bar outlines, the clip mask shared by both,
//! the fill representation (solid or horizontal gradient) and an immutable
//! [`AnimationDescriptor`] for every value change. Running the animation is
//! left to the host's compositor and frame clock.
//!
//! # Usage
//!
//! ```
//! use progress_bar_kit::{
//!     Color, ContainerBounds, ProgressBar, ProgressBarArgs,
//!     config::{CornerRadii, EdgeInsets, RoundedCorners, TrackSegmentConfig},
//! };
//!
//! let segment = TrackSegmentConfig::default()
//!     .rounded_corners(RoundedCorners::ALL)
//!     .corner_radii(CornerRadii::uniform(8.0))
//!     .edge_insets(EdgeInsets::uniform(2.5));
//!
//! let args = ProgressBarArgs::new(Color::BLACK, Color::from_rgb_u8(128, 0, 128))
//!     .track_configs(vec![segment; 3]);
//! let mut bar = ProgressBar::new(args);
//!
//! // Bind once the container has its final size.
//! bar.bind(ContainerBounds::new(300.0, 16.0))?;
//!
//! let transition = bar.set_value(0.5)?;
//! assert_eq!(transition.to_percentage().get(), 0.5);
//! assert_eq!(bar.current_percentage().get(), 0.5);
//! # Ok::<(), progress_bar_kit::ProgressBarError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod logging;
pub mod mask;
pub mod widget;

pub use animation::{
    AnimationDescriptor, FillMode, TimingCurve, TransitionOrigin, TransitionPlanner,
};
pub use color::{Color, ColorSpec};
pub use error::ProgressBarError;
pub use fill::{AnimatedKey, AnimatedValue, Fill, LinearGradient};
pub use geometry::{ContainerBounds, GeometryEngine, Outline, Percentage, Rect};
pub use mask::SegmentMask;
pub use widget::{LayerSpec, ProgressBar, ProgressBarArgs};
