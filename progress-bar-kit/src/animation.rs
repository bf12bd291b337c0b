//! Animation planning for bar transitions.
//!
//! The planner never schedules frames. It turns a pair of percentages into an
//! immutable [`AnimationDescriptor`] that the rendering layer plays back.

use std::time::Duration;

use lyon_geom::{CubicBezierSegment, point};
use tracing::{debug, trace};

use crate::{
    config::ShapeConfig,
    fill::{AnimatedKey, AnimatedValue, Fill},
    geometry::{GeometryEngine, Percentage, clamp_percentage, rounded_outline},
};

/// Duration used when the bar continues from its current extent.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(750);

/// Duration used when every transition restarts from an empty bar.
pub const FROM_ZERO_DURATION: Duration = Duration::from_millis(500);

/// Bisection steps used to invert the timing curve's x coordinate.
const TIMING_BISECTION_STEPS: usize = 16;

/// Direction a finished transition is held in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillMode {
    /// The bar grew or stayed put; the final value is kept.
    #[default]
    Forwards,
    /// The bar shrank.
    Backwards,
}

/// Where each transition starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionOrigin {
    /// From the last committed percentage. Shrinking is animated backwards.
    #[default]
    Current,
    /// From an empty bar, always growing forwards.
    Zero,
}

impl TransitionOrigin {
    /// Duration used when the caller does not pick one.
    pub fn default_duration(self) -> Duration {
        match self {
            TransitionOrigin::Current => DEFAULT_DURATION,
            TransitionOrigin::Zero => FROM_ZERO_DURATION,
        }
    }
}

/// A cubic Bézier easing curve from `(0, 0)` to `(1, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingCurve {
    /// First control point.
    pub x1: f32,
    /// First control point.
    pub y1: f32,
    /// Second control point.
    pub x2: f32,
    /// Second control point.
    pub y2: f32,
}

impl TimingCurve {
    /// The platform's default ease.
    pub const DEFAULT: Self = Self::new(0.25, 0.1, 0.25, 1.0);
    /// Constant speed.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Slow start and end.
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);

    /// Creates a curve from its two control points.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn transform(self, progress: f32) -> f32 {
        let x = progress.clamp(0.0, 1.0);
        if x <= 0.0 || x >= 1.0 || x.is_nan() {
            return if x >= 1.0 { 1.0 } else { 0.0 };
        }
        let curve = CubicBezierSegment {
            from: point(0.0, 0.0),
            ctrl1: point(self.x1, self.y1),
            ctrl2: point(self.x2, self.y2),
            to: point(1.0, 1.0),
        };

        let mut lo = 0.0;
        let mut hi = 1.0;
        let mut t = x;
        for _ in 0..TIMING_BISECTION_STEPS {
            let mid = (lo + hi) * 0.5;
            if curve.x(mid) < x {
                lo = mid;
            } else {
                hi = mid;
            }
            t = mid;
        }

        curve.y(t).clamp(0.0, 1.0)
    }
}

impl Default for TimingCurve {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything the rendering layer needs to play one transition.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDescriptor {
    key: AnimatedKey,
    from: AnimatedValue,
    to: AnimatedValue,
    from_percentage: Percentage,
    to_percentage: Percentage,
    duration: Duration,
    fill_mode: FillMode,
    timing: TimingCurve,
}

impl AnimationDescriptor {
    /// The animated layer property.
    pub fn key(&self) -> AnimatedKey {
        self.key
    }

    /// Value at the start of the transition.
    pub fn from_value(&self) -> &AnimatedValue {
        &self.from
    }

    /// Value at the end of the transition.
    pub fn to_value(&self) -> &AnimatedValue {
        &self.to
    }

    /// Percentage the transition starts from.
    pub fn from_percentage(&self) -> Percentage {
        self.from_percentage
    }

    /// Clamped percentage the transition ends at.
    pub fn to_percentage(&self) -> Percentage {
        self.to_percentage
    }

    /// Playback duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Direction the finished transition is held in.
    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    /// Easing applied during playback.
    pub fn timing(&self) -> TimingCurve {
        self.timing
    }

    /// Whether the animation is removed once playback ends. Always `false`:
    /// the bar keeps its end geometry.
    pub fn removed_on_completion(&self) -> bool {
        false
    }

    /// Whether start and end percentages are equal.
    pub fn is_noop(&self) -> bool {
        self.from_percentage == self.to_percentage
    }

    /// Interpolated value at linear playback progress `progress` in `[0, 1]`,
    /// eased by [`Self::timing`].
    pub fn sample(&self, progress: f32) -> AnimatedValue {
        let t = self.timing.transform(progress);
        match (&self.from, &self.to) {
            (AnimatedValue::Path(from), AnimatedValue::Path(to)) => {
                let rect = from.rect().lerp(&to.rect(), t);
                AnimatedValue::Path(rounded_outline(rect, to.style()))
            }
            (from, to) => {
                let (a, b) = (from.width(), to.width());
                AnimatedValue::Width(a + (b - a) * t)
            }
        }
    }
}

/// Plans bar transitions for one laid-out progress bar.
#[derive(Clone, Copy, Debug)]
pub struct TransitionPlanner<'a> {
    geometry: &'a GeometryEngine,
    fill: &'a Fill,
    shape: &'a ShapeConfig,
    origin: TransitionOrigin,
    timing: TimingCurve,
}

impl<'a> TransitionPlanner<'a> {
    /// A planner for a bar painted with `fill` and outlined with `shape`.
    pub fn new(geometry: &'a GeometryEngine, fill: &'a Fill, shape: &'a ShapeConfig) -> Self {
        Self {
            geometry,
            fill,
            shape,
            origin: TransitionOrigin::default(),
            timing: TimingCurve::default(),
        }
    }

    /// Sets where transitions start from.
    pub fn origin(mut self, origin: TransitionOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the easing curve.
    pub fn timing(mut self, timing: TimingCurve) -> Self {
        self.timing = timing;
        self
    }

    /// Plans a transition from `from` to `to_raw`, clamped into `[0, 1]`.
    ///
    /// `duration` falls back to the origin's default.
    pub fn plan(
        &self,
        from: Percentage,
        to_raw: f32,
        duration: Option<Duration>,
    ) -> AnimationDescriptor {
        let to = Percentage::new(to_raw);
        if clamp_percentage(to_raw) != to_raw {
            trace!(raw = to_raw, clamped = to.get(), "percentage clamped");
        }

        let from = match self.origin {
            TransitionOrigin::Current => from,
            TransitionOrigin::Zero => Percentage::ZERO,
        };
        let from_outline = self.geometry.start_outline(self.shape, from);
        let to_outline = self.geometry.end_outline(self.shape, to);

        let fill_mode = match self.origin {
            TransitionOrigin::Zero => FillMode::Forwards,
            TransitionOrigin::Current if to >= from => FillMode::Forwards,
            TransitionOrigin::Current => FillMode::Backwards,
        };
        let duration = duration.unwrap_or_else(|| self.origin.default_duration());
        let key = self.fill.animated_key();

        debug!(
            from = from.get(),
            to = to.get(),
            %key,
            ?fill_mode,
            duration_ms = duration.as_millis() as u64,
            "planned bar transition"
        );

        AnimationDescriptor {
            key,
            from: self.fill.animated_value(&from_outline),
            to: self.fill.animated_value(&to_outline),
            from_percentage: from,
            to_percentage: to,
            duration,
            fill_mode,
            timing: self.timing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        color::{Color, ColorSpec},
        config::{BarConfig, CornerRadii, RoundedCorners},
        fill::LinearGradient,
        geometry::ContainerBounds,
    };

    fn solid() -> Fill {
        Fill::Solid(Color::BLACK)
    }

    fn gradient() -> Fill {
        Fill::LinearGradient(LinearGradient::horizontal(ColorSpec::gradient([
            Color::BLACK,
            Color::WHITE,
        ])))
    }

    fn engine() -> GeometryEngine {
        GeometryEngine::new(ContainerBounds::new(300.0, 16.0))
    }

    #[test]
    fn test_fill_mode_follows_direction() {
        let geometry = engine();
        let fill = solid();
        let shape = ShapeConfig::Plain;
        let planner = TransitionPlanner::new(&geometry, &fill, &shape);

        let grow = planner.plan(Percentage::new(0.2), 0.8, None);
        assert_eq!(grow.fill_mode(), FillMode::Forwards);

        let shrink = planner.plan(Percentage::new(0.8), 0.2, None);
        assert_eq!(shrink.fill_mode(), FillMode::Backwards);

        let same = planner.plan(Percentage::new(0.4), 0.4, None);
        assert_eq!(same.fill_mode(), FillMode::Forwards);
        assert!(same.is_noop());
    }

    #[test]
    fn test_zero_origin_always_grows_from_empty() {
        let geometry = engine();
        let fill = solid();
        let shape = ShapeConfig::Plain;
        let planner =
            TransitionPlanner::new(&geometry, &fill, &shape).origin(TransitionOrigin::Zero);

        let plan = planner.plan(Percentage::new(0.8), 0.2, None);
        assert_eq!(plan.fill_mode(), FillMode::Forwards);
        assert_eq!(plan.from_percentage(), Percentage::ZERO);
        assert_eq!(plan.from_value().width(), 0.0);
        assert_eq!(plan.duration(), FROM_ZERO_DURATION);
    }

    #[test]
    fn test_default_and_explicit_durations() {
        let geometry = engine();
        let fill = solid();
        let shape = ShapeConfig::Plain;
        let planner = TransitionPlanner::new(&geometry, &fill, &shape);

        assert_eq!(
            planner.plan(Percentage::ZERO, 1.0, None).duration(),
            DEFAULT_DURATION
        );
        assert_eq!(
            planner
                .plan(Percentage::ZERO, 1.0, Some(Duration::from_secs(2)))
                .duration(),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_target_is_clamped() {
        let geometry = engine();
        let fill = solid();
        let shape = ShapeConfig::Plain;
        let planner = TransitionPlanner::new(&geometry, &fill, &shape);

        let over = planner.plan(Percentage::ZERO, 1.7, None);
        assert_eq!(over.to_percentage(), Percentage::FULL);
        assert_eq!(over.to_value().width(), 300.0);

        let under = planner.plan(Percentage::new(0.5), -0.3, None);
        assert_eq!(under.to_percentage(), Percentage::ZERO);
        assert_eq!(under.to_value().width(), 0.0);
    }

    #[test]
    fn test_solid_fill_animates_path_between_outlines() {
        let geometry = engine();
        let fill = solid();
        let shape = ShapeConfig::Bar(
            BarConfig::default()
                .rounded_corners(RoundedCorners::ALL)
                .corner_radii(CornerRadii::uniform(8.0)),
        );
        let plan =
            TransitionPlanner::new(&geometry, &fill, &shape).plan(Percentage::new(0.2), 0.8, None);

        assert_eq!(plan.key(), AnimatedKey::Path);
        let from = plan.from_value().outline().expect("path value");
        let to = plan.to_value().outline().expect("path value");
        assert_eq!(from.rect().width, 60.0);
        assert_eq!(to.rect().width, 240.0);
        assert_eq!(to.style(), shape.outline_style());
    }

    #[test]
    fn test_gradient_fill_animates_scalar_width() {
        let geometry = engine();
        let fill = gradient();
        let shape = ShapeConfig::Plain;
        let plan =
            TransitionPlanner::new(&geometry, &fill, &shape).plan(Percentage::new(0.2), 0.8, None);

        assert_eq!(plan.key(), AnimatedKey::BoundsWidth);
        assert_eq!(plan.from_value(), &AnimatedValue::Width(60.0));
        assert_eq!(plan.to_value(), &AnimatedValue::Width(240.0));
        assert!(!plan.removed_on_completion());
    }

    #[test]
    fn test_timing_curve_endpoints_and_monotonicity() {
        for curve in [TimingCurve::DEFAULT, TimingCurve::LINEAR, TimingCurve::EASE_IN_OUT] {
            assert!(curve.transform(0.0).abs() < 1e-3);
            assert!((curve.transform(1.0) - 1.0).abs() < 1e-3);

            let mut previous = 0.0;
            for step in 1..=20 {
                let value = curve.transform(step as f32 / 20.0);
                assert!(value + 1e-4 >= previous);
                previous = value;
            }
        }
        assert!((TimingCurve::LINEAR.transform(0.3) - 0.3).abs() < 1e-3);
    }

    #[test]
    fn test_sample_interpolates_between_endpoints() {
        let geometry = engine();
        let fill = gradient();
        let shape = ShapeConfig::Plain;
        let planner = TransitionPlanner::new(&geometry, &fill, &shape).timing(TimingCurve::LINEAR);
        let plan = planner.plan(Percentage::ZERO, 1.0, None);

        assert_eq!(plan.sample(0.0), AnimatedValue::Width(0.0));
        assert!((plan.sample(0.5).width() - 150.0).abs() < 0.1);
        assert_eq!(plan.sample(1.0), AnimatedValue::Width(300.0));

        let fill = solid();
        let plan = TransitionPlanner::new(&geometry, &fill, &shape)
            .timing(TimingCurve::LINEAR)
            .plan(Percentage::new(1.0), 0.0, None);
        let midway = plan.sample(0.5);
        assert!(midway.outline().is_some());
        assert!((midway.width() - 150.0).abs() < 0.1);
    }
}
