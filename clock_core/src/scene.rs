//! Scene graph - transform nodes for the dial, tick ring and hands
//!
//! The tree is built once per clock and keeps its shape for the lifetime of
//! the clock. Only node positions and rotations change afterwards.
//!
//! Coordinates follow the stage convention: origin top-left, y pointing down,
//! positive rotation turning clockwise on screen.

pub use glam::Affine2;
use serde::{Deserialize, Serialize};

use crate::angles::degrees_to_radians;
use crate::geometry::{ClockStyle, GeometryConfig, HandKind, Point, RectSize, Style};

/// Number of hour ticks on the ring
pub const TICK_COUNT: usize = 12;

/// Where along its length a hand pivots (`height / HAND_PIVOT_DIVISOR`)
const HAND_PIVOT_DIVISOR: f32 = 1.2;

/// How hands are grouped under the stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneLayout {
    /// Hands live in their own group, which can be offset independently of
    /// the tick ring
    #[default]
    Perspective,
    /// Hands hang directly off the dial
    Flat,
}

impl SceneLayout {
    /// Whether the hands can be offset as a group, separately from the ticks
    pub fn supports_group_offset(self) -> bool {
        matches!(self, SceneLayout::Perspective)
    }
}

/// A rectangle the renderer paints at the node's origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub size: RectSize,
    pub style: Style,
}

/// One node of the scene graph
#[derive(Debug, Clone, PartialEq)]
pub struct TransformNode {
    name: &'static str,
    pivot: Point,
    position: Point,
    rotation: f32,
    drawable: Option<Drawable>,
    children: Vec<TransformNode>,
}

impl TransformNode {
    fn group(name: &'static str, pivot: Point) -> Self {
        Self {
            name,
            pivot,
            position: Point::ZERO,
            rotation: 0.0,
            drawable: None,
            children: Vec::new(),
        }
    }

    fn rect(name: &'static str, size: RectSize, style: Style, pivot: Point) -> Self {
        Self {
            drawable: Some(Drawable { size, style }),
            ..Self::group(name, pivot)
        }
    }

    fn push(&mut self, child: TransformNode) {
        self.children.push(child);
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Point about which rotation is applied, in the node's own space
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
    }

    pub fn drawable(&self) -> Option<&Drawable> {
        self.drawable.as_ref()
    }

    /// Children in paint order
    pub fn children(&self) -> &[TransformNode] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&TransformNode> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut TransformNode> {
        self.children.get_mut(index)
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(TransformNode::subtree_len).sum::<usize>()
    }

    /// Transform from this node's space into its parent's space
    ///
    /// Translate by the position, rotate, then shift the pivot to the origin.
    pub fn local_transform(&self) -> Affine2 {
        Affine2::from_translation(self.position)
            * Affine2::from_angle(self.rotation)
            * Affine2::from_translation(-self.pivot)
    }
}

/// Child-index paths to the nodes the clock mutates
#[derive(Debug, Clone, PartialEq)]
struct ScenePaths {
    tick_ring: Vec<usize>,
    hand_group: Option<Vec<usize>>,
    hands: [Vec<usize>; 3],
}

/// The whole clock face
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGraph {
    root: TransformNode,
    layout: SceneLayout,
    paths: ScenePaths,
}

impl SceneGraph {
    /// Build the stage: dial with its tick ring, plus the three hands
    pub fn build(geometry: &GeometryConfig, style: &ClockStyle, layout: SceneLayout) -> Self {
        let mut root = TransformNode::group("stage", Point::ZERO);
        let mut dial = TransformNode::group("dial", Point::ZERO);

        // Pivoting at -center moves the ring's origin onto the dial center
        let mut ring = TransformNode::group("tick_ring", -geometry.center);
        let tick = geometry.tick;
        for i in 0..TICK_COUNT {
            let mut node = TransformNode::rect(
                "tick",
                tick,
                style.tick,
                Point::new(tick.width / 2.0, tick.height / 2.0),
            );
            node.position = geometry.tick_offset(i);
            node.rotation = tick_rotation(i);
            ring.push(node);
        }
        dial.push(ring);

        let hands = HandKind::ALL.map(|kind| build_hand(geometry, style, kind));

        let paths = match layout {
            SceneLayout::Perspective => {
                let mut group = TransformNode::group("hand_group", Point::ZERO);
                for hand in hands {
                    group.push(hand);
                }
                root.push(dial);
                root.push(group);
                ScenePaths {
                    tick_ring: vec![0, 0],
                    hand_group: Some(vec![1]),
                    hands: HandKind::ALL.map(|kind| vec![1, kind.index()]),
                }
            }
            SceneLayout::Flat => {
                for hand in hands {
                    dial.push(hand);
                }
                root.push(dial);
                ScenePaths {
                    tick_ring: vec![0, 0],
                    hand_group: None,
                    hands: HandKind::ALL.map(|kind| vec![0, 1 + kind.index()]),
                }
            }
        };

        Self { root, layout, paths }
    }

    pub fn layout(&self) -> SceneLayout {
        self.layout
    }

    /// The stage node everything hangs off
    pub fn root(&self) -> &TransformNode {
        &self.root
    }

    pub fn dial(&self) -> &TransformNode {
        self.expect_node(&[0], "dial")
    }

    pub fn tick_ring(&self) -> &TransformNode {
        self.expect_node(&self.paths.tick_ring, "tick ring")
    }

    pub fn tick_ring_mut(&mut self) -> &mut TransformNode {
        expect_node_mut(&mut self.root, &self.paths.tick_ring, "tick ring")
    }

    /// The hand group, absent in the flat layout
    pub fn hand_group(&self) -> Option<&TransformNode> {
        let path = self.paths.hand_group.as_deref()?;
        node_at(&self.root, path)
    }

    pub fn hand_group_mut(&mut self) -> Option<&mut TransformNode> {
        let path = self.paths.hand_group.as_deref()?;
        node_at_mut(&mut self.root, path)
    }

    /// The container node of a hand (pivoted on the dial center)
    pub fn hand(&self, kind: HandKind) -> &TransformNode {
        self.expect_node(&self.paths.hands[kind.index()], "hand")
    }

    pub fn hand_mut(&mut self, kind: HandKind) -> &mut TransformNode {
        expect_node_mut(&mut self.root, &self.paths.hands[kind.index()], "hand")
    }

    /// The rectangle inside a hand; its rotation is what the update loop sets
    ///
    /// # Panics
    ///
    /// If the hand lost its drawable child, which the builder never allows.
    pub fn hand_drawable(&self, kind: HandKind) -> &TransformNode {
        self.hand(kind)
            .child(0)
            .expect("hand node is built with exactly one drawable child")
    }

    /// # Panics
    ///
    /// If the hand lost its drawable child, which the builder never allows.
    pub fn hand_drawable_mut(&mut self, kind: HandKind) -> &mut TransformNode {
        self.hand_mut(kind)
            .child_mut(0)
            .expect("hand node is built with exactly one drawable child")
    }

    /// Total number of nodes, stage included
    pub fn node_count(&self) -> usize {
        self.root.subtree_len()
    }

    /// Depth-first walk in paint order, passing each node's world transform
    pub fn visit<F>(&self, mut f: F)
    where
        F: FnMut(&TransformNode, &Affine2),
    {
        walk(&self.root, &Affine2::IDENTITY, &mut f);
    }

    fn expect_node(&self, path: &[usize], what: &str) -> &TransformNode {
        match node_at(&self.root, path) {
            Some(node) => node,
            None => panic!("scene graph is missing its {what} node"),
        }
    }
}

fn build_hand(geometry: &GeometryConfig, style: &ClockStyle, kind: HandKind) -> TransformNode {
    let (container, item) = match kind {
        HandKind::Hour => ("hour_hand", "hour_hand_item"),
        HandKind::Minute => ("minute_hand", "minute_hand_item"),
        HandKind::Second => ("second_hand", "second_hand_item"),
    };
    let size = geometry.hand(kind);

    let mut hand = TransformNode::group(container, -geometry.center);
    hand.push(TransformNode::rect(
        item,
        size,
        style.hands.get(kind),
        Point::new(size.width / 2.0, size.height / HAND_PIVOT_DIVISOR),
    ));
    hand
}

/// Fixed rotation of tick `index` so it points away from the center
pub fn tick_rotation(index: usize) -> f32 {
    let degrees = (index as f64 * 30.0 + 90.0).rem_euclid(360.0);
    degrees_to_radians(degrees) as f32
}

fn walk<F>(node: &TransformNode, parent: &Affine2, f: &mut F)
where
    F: FnMut(&TransformNode, &Affine2),
{
    let world = *parent * node.local_transform();
    f(node, &world);
    for child in &node.children {
        walk(child, &world, f);
    }
}

fn node_at<'a>(root: &'a TransformNode, path: &[usize]) -> Option<&'a TransformNode> {
    path.iter().try_fold(root, |node, &i| node.child(i))
}

fn node_at_mut<'a>(root: &'a mut TransformNode, path: &[usize]) -> Option<&'a mut TransformNode> {
    path.iter().try_fold(root, |node, &i| node.child_mut(i))
}

fn expect_node_mut<'a>(
    root: &'a mut TransformNode,
    path: &[usize],
    what: &str,
) -> &'a mut TransformNode {
    match node_at_mut(root, path) {
        Some(node) => node,
        None => panic!("scene graph is missing its {what} node"),
    }
}
