//! The clock instance: owns the scene graph and drives it from time and
//! pointer input.
//!
//! All mutation happens inside [`Clock::update`] and the pointer handlers,
//! which the host calls one at a time.

use crate::angles::{compute_angles, HandAngles, SweepMode};
use crate::config::{ClockOptions, ConfigError};
use crate::geometry::{GeometryConfig, HandKind, Point};
use crate::pointer::{click_angle, parallax, pointer_offset, InteractionMode};
use crate::scene::SceneGraph;
use crate::time_engine::{SystemClock, TimeSample, TimeSource};

/// What one frame showed: the sampled time and the angles drawn from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockReading {
    pub sample: TimeSample,
    pub angles: HandAngles,
}

/// An analog clock face
#[derive(Debug)]
pub struct Clock<S: TimeSource = SystemClock> {
    options: ClockOptions,
    geometry: GeometryConfig,
    scene: SceneGraph,
    source: S,
}

impl Clock<SystemClock> {
    /// Build a clock that follows the local wall clock
    pub fn new(options: ClockOptions) -> Result<Self, ConfigError> {
        Self::with_source(options, SystemClock)
    }

    /// Like [`Clock::new`], but invalid options are swapped for
    /// [`ClockOptions::fallback`] and the error is handed back
    pub fn new_or_fallback(options: ClockOptions) -> (Self, Option<ConfigError>) {
        Self::with_source_or_fallback(options, SystemClock)
    }
}

impl<S: TimeSource> Clock<S> {
    /// Build a clock reading time from `source`
    pub fn with_source(options: ClockOptions, source: S) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self::assemble(options, source))
    }

    pub fn with_source_or_fallback(
        options: ClockOptions,
        source: S,
    ) -> (Self, Option<ConfigError>) {
        match options.validate() {
            Ok(()) => (Self::assemble(options, source), None),
            Err(e) => {
                log::error!("Invalid clock config, using defaults: {}", e);
                (Self::assemble(options.fallback(), source), Some(e))
            }
        }
    }

    /// `options` must already be valid
    fn assemble(options: ClockOptions, source: S) -> Self {
        let geometry = options.geometry();
        let scene = SceneGraph::build(&geometry, &options.style, options.layout);

        log::info!(
            "clock built: radius {} centered at ({}, {}), {:?} layout, {} nodes",
            geometry.radius,
            geometry.center.x,
            geometry.center.y,
            options.layout,
            scene.node_count()
        );
        log::debug!(
            "interaction {}, sweep {}, resolution {}",
            options.interaction,
            options.sweep,
            options.resolution
        );

        Self {
            options,
            geometry,
            scene,
            source,
        }
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn options(&self) -> &ClockOptions {
        &self.options
    }

    pub fn interaction(&self) -> InteractionMode {
        self.options.interaction
    }

    /// Switch pointer handling; rejected when the layout cannot offset groups
    pub fn set_interaction(&mut self, mode: InteractionMode) -> Result<(), ConfigError> {
        let candidate = ClockOptions {
            interaction: mode,
            ..self.options
        };
        candidate.validate()?;
        self.options = candidate;
        Ok(())
    }

    pub fn sweep_mode(&self) -> SweepMode {
        self.options.sweep
    }

    pub fn set_sweep_mode(&mut self, mode: SweepMode) {
        self.options.sweep = mode;
    }

    /// One frame: sample the time source and turn the hands
    pub fn update(&mut self) -> ClockReading {
        let sample = self.source.now();
        let angles = self.apply_sample(&sample);
        ClockReading { sample, angles }
    }

    /// Turn the hands to match `sample`
    ///
    /// Angles are derived from the sample alone, so a skipped frame leaves
    /// nothing to catch up on.
    pub fn apply_sample(&mut self, sample: &TimeSample) -> HandAngles {
        let angles = compute_angles(sample, self.options.sweep);
        for kind in HandKind::ALL {
            self.scene
                .hand_drawable_mut(kind)
                .set_rotation(angles.radians(kind));
        }
        angles
    }

    /// Pointer moved to `device` (backing-store pixels)
    ///
    /// Returns `true` if the scene was moved.
    pub fn pointer_moved(&mut self, device: Point) -> bool {
        if !self.options.interaction.parallax() {
            return false;
        }
        let offset = self.offset_from_center(device);
        let shift = parallax(offset);

        let Some(group) = self.scene.hand_group_mut() else {
            return false;
        };
        group.set_position(shift.hand_group);
        self.scene.tick_ring_mut().set_position(shift.tick_ring);

        log::trace!(
            "parallax: offset ({:.1}, {:.1}) ring ({:.3}, {:.3}) hands ({:.3}, {:.3})",
            offset.x,
            offset.y,
            shift.tick_ring.x,
            shift.tick_ring.y,
            shift.hand_group.x,
            shift.hand_group.y
        );
        true
    }

    /// Pointer clicked at `device`; reports the angle around the dial center
    ///
    /// The scene is not touched.
    pub fn pointer_clicked(&self, device: Point) -> Option<i32> {
        if !self.options.interaction.click_to_angle() {
            return None;
        }
        let offset = self.offset_from_center(device);
        let angle = click_angle(offset);
        log::debug!(
            "click at offset ({:.1}, {:.1}) -> {} degrees",
            offset.x,
            offset.y,
            angle
        );
        Some(angle)
    }

    fn offset_from_center(&self, device: Point) -> Point {
        pointer_offset(device, self.options.resolution, self.geometry.center)
    }
}
