//! Dial geometry and presentation descriptors
//!
//! Pure data describing where the dial, ticks and hands sit. Style values are
//! carried through to the renderer untouched.

use serde::{Deserialize, Serialize};

/// A point or offset in stage coordinates (logical pixels, y pointing down)
pub type Point = glam::Vec2;

/// Which of the three hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// All hands in paint order
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    pub fn index(self) -> usize {
        match self {
            HandKind::Hour => 0,
            HandKind::Minute => 1,
            HandKind::Second => 2,
        }
    }
}

impl std::fmt::Display for HandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandKind::Hour => write!(f, "hour"),
            HandKind::Minute => write!(f, "minute"),
            HandKind::Second => write!(f, "second"),
        }
    }
}

/// Width and height of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSize {
    pub width: f32,
    pub height: f32,
}

impl RectSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Hand rectangle sizes, one per [`HandKind`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandSizes {
    pub hour: RectSize,
    pub minute: RectSize,
    pub second: RectSize,
}

impl Default for HandSizes {
    fn default() -> Self {
        Self {
            hour: RectSize::new(18.0, 160.0),
            minute: RectSize::new(18.0, 240.0),
            second: RectSize::new(8.0, 320.0),
        }
    }
}

impl HandSizes {
    pub fn get(&self, kind: HandKind) -> RectSize {
        match kind {
            HandKind::Hour => self.hour,
            HandKind::Minute => self.minute,
            HandKind::Second => self.second,
        }
    }
}

/// Immutable placement data for one dial
///
/// `center` and `radius` together fix where every tick and hand lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Distance from the center to each tick
    pub radius: f32,
    /// Dial center in stage coordinates
    pub center: Point,
    /// Tick rectangle size
    pub tick: RectSize,
    /// Hand rectangle sizes
    pub hands: HandSizes,
}

impl GeometryConfig {
    pub fn new(radius: f32, center: Point, tick: RectSize, hands: HandSizes) -> Self {
        Self {
            radius,
            center,
            tick,
            hands,
        }
    }

    pub fn hand(&self, kind: HandKind) -> RectSize {
        self.hands.get(kind)
    }

    /// Position of tick `index` relative to the dial center
    pub fn tick_offset(&self, index: usize) -> Point {
        let theta = (index as f32 * 30.0).to_radians();
        Point::new(self.radius * theta.cos(), self.radius * theta.sin())
    }
}

/// Drop shadow parameters, forwarded to the renderer as-is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropShadow {
    /// 0xRRGGBB
    pub color: u32,
    pub alpha: f32,
    pub blur: f32,
    pub distance: f32,
}

impl DropShadow {
    const fn dial_green(alpha: f32, blur: f32, distance: f32) -> Self {
        Self {
            color: 0x074e2e,
            alpha,
            blur,
            distance,
        }
    }
}

/// Fill and optional shadow of a drawable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// 0xRRGGBB
    pub fill: u32,
    #[serde(default)]
    pub shadow: Option<DropShadow>,
}

impl Style {
    pub const fn solid(fill: u32) -> Self {
        Self { fill, shadow: None }
    }
}

/// Per-hand styles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandStyles {
    pub hour: Style,
    pub minute: Style,
    pub second: Style,
}

impl Default for HandStyles {
    fn default() -> Self {
        Self {
            hour: Style {
                fill: 0xffffff,
                shadow: Some(DropShadow::dial_green(0.65, 4.0, 8.0)),
            },
            minute: Style {
                fill: 0xffffff,
                shadow: Some(DropShadow::dial_green(0.5, 6.0, 10.0)),
            },
            second: Style {
                fill: 0xffffff,
                shadow: Some(DropShadow::dial_green(0.5, 10.0, 10.0)),
            },
        }
    }
}

impl HandStyles {
    pub fn get(&self, kind: HandKind) -> Style {
        match kind {
            HandKind::Hour => self.hour,
            HandKind::Minute => self.minute,
            HandKind::Second => self.second,
        }
    }
}

/// Presentation settings for the whole clock face
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockStyle {
    /// Background colour behind the dial (0xRRGGBB)
    pub dial: u32,
    pub tick: Style,
    pub hands: HandStyles,
}

impl Default for ClockStyle {
    fn default() -> Self {
        Self {
            dial: 0x127749,
            tick: Style::solid(0xc4a468),
            hands: HandStyles::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_tick_offsets_lie_on_radius() {
        let geometry = GeometryConfig::new(
            300.0,
            Point::new(400.0, 300.0),
            RectSize::new(16.0, 42.0),
            HandSizes::default(),
        );
        for i in 0..12 {
            let p = geometry.tick_offset(i);
            assert!(close((p.x * p.x + p.y * p.y).sqrt(), 300.0));
        }
        let three = geometry.tick_offset(0);
        assert!(close(three.x, 300.0) && close(three.y, 0.0));
        let six = geometry.tick_offset(3);
        assert!(close(six.x, 0.0) && close(six.y, 300.0));
    }

    #[test]
    fn test_hand_sizes_by_kind() {
        let hands = HandSizes::default();
        assert_eq!(hands.get(HandKind::Second), RectSize::new(8.0, 320.0));
        assert_eq!(HandKind::ALL.map(HandKind::index), [0, 1, 2]);
    }
}
