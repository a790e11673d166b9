//! Core of the analog dial clock
//!
//! Time sampling, hand angles, the dial's scene graph and pointer handling.
//! Rendering and windowing live in the clock binaries.

pub mod angles;
pub mod clock;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod pointer;
pub mod scene;
pub mod time_engine;

pub use angles::{compute_angles, degrees_to_radians, HandAngles, SweepMode};
pub use clock::{Clock, ClockReading};
pub use config::{
    config_dir, config_path, load_config, parse_config, ClockOptions, ConfigError, DialSettings,
    Viewport,
};
pub use geometry::{
    ClockStyle, DropShadow, GeometryConfig, HandKind, HandSizes, HandStyles, Point, RectSize,
    Style,
};
pub use logging::{init_logging, DEFAULT_LOG_FILTER};
pub use pointer::{click_angle, parallax, pointer_offset, InteractionMode, Parallax};
pub use scene::{Affine2, Drawable, SceneGraph, SceneLayout, TransformNode};
pub use time_engine::{sample_at, sample_now, FixedClock, SystemClock, TimeSample, TimeSource};
