//! The progress bar widget.
//!
//! ## Usage
//!
//! Construct a [`ProgressBar`] from [`ProgressBarArgs`], bind it once to the
//! container's final size, then request value changes. Each change yields an
//! [`AnimationDescriptor`] for the rendering layer.
//!
//! ```
//! use progress_bar_kit::{Color, ContainerBounds, FillMode, ProgressBar, ProgressBarArgs};
//!
//! let mut bar = ProgressBar::new(ProgressBarArgs::new(
//!     Color::BLACK,
//!     [Color::from_rgb(0.3, 0.2, 0.9), Color::from_rgb(0.9, 0.4, 0.9)],
//! ));
//! bar.bind(ContainerBounds::new(240.0, 8.0))?;
//!
//! let grow = bar.set_value(0.8)?;
//! assert_eq!(grow.fill_mode(), FillMode::Forwards);
//!
//! let shrink = bar.set_value(0.3)?;
//! assert_eq!(shrink.fill_mode(), FillMode::Backwards);
//! # Ok::<(), progress_bar_kit::ProgressBarError>(())
//! ```

use std::{sync::Arc, time::Duration};

use derive_setters::Setters;
use tracing::{debug, warn};

use crate::{
    animation::{AnimationDescriptor, TimingCurve, TransitionOrigin, TransitionPlanner},
    color::{Color, ColorSpec},
    config::{BarConfig, ShapeConfig, TrackSegmentConfig},
    error::{LayerRole, ProgressBarError},
    fill::Fill,
    geometry::{ContainerBounds, GeometryEngine, Outline, Percentage, Rect},
    mask::SegmentMask,
};

/// Stacking index of the track layer inside the container.
const TRACK_Z_INDEX: u32 = 0;
/// Stacking index of the bar layer, drawn above the track.
const BAR_Z_INDEX: u32 = 1;

/// Arguments for constructing a [`ProgressBar`].
///
/// With the `serde` feature every field except the two color lists may be
/// omitted and takes its [`ProgressBarArgs::new`] default.
#[derive(Clone, Debug, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressBarArgs {
    /// Colors of the track. One color is a solid fill, more form a gradient.
    #[setters(into)]
    pub track_colors: ColorSpec,

    /// Colors of the bar. One color is a solid fill, more form a gradient.
    #[setters(into)]
    pub bar_colors: ColorSpec,

    /// One configuration per track segment.
    #[cfg_attr(feature = "serde", serde(default = "single_segment"))]
    pub track_configs: Vec<TrackSegmentConfig>,

    /// Configuration of the bar.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bar_config: BarConfig,

    /// Where each transition starts from.
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: TransitionOrigin,

    /// Easing applied to transitions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timing: TimingCurve,

    /// Duration used when a value change does not specify one.
    ///
    /// When omitted, the origin's default applies.
    #[setters(strip_option)]
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<Duration>,
}

impl ProgressBarArgs {
    /// Arguments with a single default track segment and a square bar.
    pub fn new(track_colors: impl Into<ColorSpec>, bar_colors: impl Into<ColorSpec>) -> Self {
        Self {
            track_colors: track_colors.into(),
            bar_colors: bar_colors.into(),
            track_configs: single_segment(),
            bar_config: BarConfig::default(),
            origin: TransitionOrigin::default(),
            timing: TimingCurve::default(),
            duration: None,
        }
    }
}

fn single_segment() -> Vec<TrackSegmentConfig> {
    vec![TrackSegmentConfig::default()]
}

/// A layer handed to the rendering layer: how to paint it, where, and the
/// mask clipping it.
#[derive(Clone, Debug)]
pub struct LayerSpec {
    fill: Fill,
    frame: Rect,
    outline: Outline,
    mask: Arc<SegmentMask>,
    z_index: u32,
}

impl LayerSpec {
    /// How the layer is painted.
    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    /// Frame of the layer in container coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Outline filled by solid layers.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The clip mask, shared between the track and the bar.
    pub fn mask(&self) -> &Arc<SegmentMask> {
        &self.mask
    }

    /// Stacking index inside the container; higher is drawn on top.
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    /// Color of a solid layer.
    pub fn solid_color(&self) -> Option<Color> {
        match &self.fill {
            Fill::Solid(color) => Some(*color),
            Fill::LinearGradient(_) => None,
        }
    }
}

/// State created when the progress bar is bound to its container.
#[derive(Clone, Debug)]
struct BoundState {
    geometry: GeometryEngine,
    bar_shape: ShapeConfig,
    track: LayerSpec,
    bar: LayerSpec,
    current: Percentage,
}

/// An animatable progress bar.
///
/// The bar starts empty. It must be bound to a container exactly once before
/// its value can change.
#[derive(Clone, Debug)]
pub struct ProgressBar {
    args: ProgressBarArgs,
    state: Option<BoundState>,
}

impl ProgressBar {
    /// Creates an unbound progress bar.
    pub fn new(args: ProgressBarArgs) -> Self {
        Self { args, state: None }
    }

    /// The construction arguments.
    pub fn args(&self) -> &ProgressBarArgs {
        &self.args
    }

    /// Lays out the track, the bar at 0% and the shared mask inside a
    /// container of the given size.
    ///
    /// Call once the container has its final size. A second call fails with
    /// [`ProgressBarError::AlreadyBound`] and leaves the layout untouched;
    /// build a new progress bar to move to another container.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn bind(&mut self, bounds: ContainerBounds) -> Result<(), ProgressBarError> {
        if self.state.is_some() {
            warn!("progress bar bound twice; keeping the first container");
            return Err(ProgressBarError::AlreadyBound);
        }

        let state = self
            .layout(bounds)
            .inspect_err(|err| warn!(%err, "rejected progress bar configuration"))?;
        debug!(
            segments = state.track.mask.len(),
            slot_width = state.track.mask.slot_width(),
            "progress bar bound"
        );
        self.state = Some(state);
        Ok(())
    }

    fn layout(&self, bounds: ContainerBounds) -> Result<BoundState, ProgressBarError> {
        bounds.validate()?;
        let track_fill = Fill::select(&self.args.track_colors, LayerRole::Track)?;
        let bar_fill = Fill::select(&self.args.bar_colors, LayerRole::Bar)?;

        let geometry = GeometryEngine::new(bounds);
        let mask = Arc::new(SegmentMask::build(
            geometry.end_rect(Percentage::FULL),
            &self.args.track_configs,
        )?);

        let track_outline = geometry.end_outline(&ShapeConfig::Plain, Percentage::FULL);
        let track = LayerSpec {
            fill: track_fill,
            frame: track_outline.rect(),
            outline: track_outline,
            mask: Arc::clone(&mask),
            z_index: TRACK_Z_INDEX,
        };

        let bar_shape = ShapeConfig::Bar(self.args.bar_config.clone());
        let bar_outline = geometry.start_outline(&bar_shape, Percentage::ZERO);
        let bar = LayerSpec {
            fill: bar_fill,
            frame: bar_outline.rect(),
            outline: bar_outline,
            mask,
            z_index: BAR_Z_INDEX,
        };

        Ok(BoundState {
            geometry,
            bar_shape,
            track,
            bar,
            current: Percentage::ZERO,
        })
    }

    /// Moves the bar to `value`, clamped into `[0, 1]`, using the configured
    /// duration.
    pub fn set_value(&mut self, value: f32) -> Result<AnimationDescriptor, ProgressBarError> {
        self.transition(value, None)
    }

    /// Moves the bar to `value`, clamped into `[0, 1]`, over `duration`.
    pub fn set_value_with_duration(
        &mut self,
        value: f32,
        duration: Duration,
    ) -> Result<AnimationDescriptor, ProgressBarError> {
        self.transition(value, Some(duration))
    }

    fn transition(
        &mut self,
        value: f32,
        duration: Option<Duration>,
    ) -> Result<AnimationDescriptor, ProgressBarError> {
        let state = self.state.as_mut().ok_or(ProgressBarError::NotBound)?;

        let descriptor = TransitionPlanner::new(&state.geometry, &state.bar.fill, &state.bar_shape)
            .origin(self.args.origin)
            .timing(self.args.timing)
            .plan(state.current, value, duration.or(self.args.duration));

        // The start geometry is captured above; only now commit the target.
        let to = descriptor.to_percentage();
        let outline = state.geometry.end_outline(&state.bar_shape, to);
        state.bar.frame = outline.rect();
        state.bar.outline = outline;
        state.current = to;

        Ok(descriptor)
    }

    /// The last committed percentage; `0` before binding.
    pub fn current_percentage(&self) -> Percentage {
        self.state
            .as_ref()
            .map_or(Percentage::ZERO, |state| state.current)
    }

    /// Whether the progress bar has been bound to a container.
    pub fn is_bound(&self) -> bool {
        self.state.is_some()
    }

    /// The container bounds, once bound.
    pub fn bounds(&self) -> Option<ContainerBounds> {
        self.state.as_ref().map(|state| state.geometry.bounds())
    }

    /// The track layer, once bound.
    pub fn track_layer(&self) -> Option<&LayerSpec> {
        self.state.as_ref().map(|state| &state.track)
    }

    /// The bar layer, once bound. Its geometry reflects the last committed
    /// percentage.
    pub fn bar_layer(&self) -> Option<&LayerSpec> {
        self.state.as_ref().map(|state| &state.bar)
    }

    /// The segment mask, once bound.
    pub fn mask(&self) -> Option<&SegmentMask> {
        self.state.as_ref().map(|state| state.track.mask.as_ref())
    }
}
