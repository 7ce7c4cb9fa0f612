//! Cut modes and the derivation of a cut from the cursor.
//!
//! Each mode picks an origin and an angle for the cutting line:
//!
//! | Mode          | Origin                               | Angle            |
//! |---------------|--------------------------------------|------------------|
//! | Select        | none                                 | none             |
//! | Knife         | cursor                               | configured       |
//! | Anchor        | confirmed start point                | start to cursor  |
//! | Half splitter | panel centroid                       | configured       |
//! | Grid snapper  | nearest grid corner of the panel box | configured       |

use panelcut_core::{Aabb, OffsetGuides, Point, Polygon};
use panelcut_settings::{EditorConfig, ModeKind};

/// Two-stage anchor gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnchorState {
    /// Following the nearest boundary point; apply confirms it.
    #[default]
    AwaitingStart,
    /// Start point fixed; apply cuts towards the cursor.
    AwaitingApply { start: Point },
}

/// Active mode together with its transient state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Mode {
    #[default]
    Select,
    Knife,
    Anchor(AnchorState),
    HalfSplitter,
    GridSnapper {
        /// Box frozen by a pointer press; the live panel box is used otherwise.
        frozen: Option<Aabb>,
    },
}

impl Mode {
    /// Fresh mode state for `kind`.
    pub fn from_kind(kind: ModeKind) -> Self {
        match kind {
            ModeKind::Select => Mode::Select,
            ModeKind::Knife => Mode::Knife,
            ModeKind::Anchor => Mode::Anchor(AnchorState::AwaitingStart),
            ModeKind::HalfSplitter => Mode::HalfSplitter,
            ModeKind::GridSnapper => Mode::GridSnapper { frozen: None },
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Select => ModeKind::Select,
            Mode::Knife => ModeKind::Knife,
            Mode::Anchor(_) => ModeKind::Anchor,
            Mode::HalfSplitter => ModeKind::HalfSplitter,
            Mode::GridSnapper { .. } => ModeKind::GridSnapper,
        }
    }

    /// Whether the mode produces cuts (and reacts to the wheel).
    pub fn is_cutting(&self) -> bool {
        !matches!(self, Mode::Select)
    }

    /// Frozen grid box, if any.
    pub fn frozen_aabb(&self) -> Option<Aabb> {
        match self {
            Mode::GridSnapper { frozen } => *frozen,
            _ => None,
        }
    }

    /// Confirmed anchor start point, if any.
    pub fn anchor_start(&self) -> Option<Point> {
        match self {
            Mode::Anchor(AnchorState::AwaitingApply { start }) => Some(*start),
            _ => None,
        }
    }

    /// Drops transient state: unfreezes the grid box and cancels an anchor.
    pub fn clear(&mut self) {
        *self = Mode::from_kind(self.kind());
    }
}

/// Everything derived from the cursor for the selected panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutPreview {
    /// Point the cutting line runs through.
    pub origin: Option<Point>,
    /// Direction of the cutting line in radians.
    pub angle: f64,
    pub guides: OffsetGuides,
    /// Candidate anchor point while no start is confirmed.
    pub anchor: Option<Point>,
    /// Grid corner the origin snapped to.
    pub snapped: Option<Point>,
}

impl CutPreview {
    fn through(polygon: &Polygon, origin: Point, angle: f64, margin: f64) -> Self {
        Self {
            origin: Some(origin),
            angle,
            guides: OffsetGuides::compute(polygon, origin, angle, margin),
            ..Self::default()
        }
    }

    pub fn is_cuttable(&self) -> bool {
        self.guides.is_cuttable()
    }
}

/// Derives origin, angle and guide crossings for `polygon`.
///
/// Pure: depends only on its arguments.
pub fn derive_cut(mode: &Mode, config: &EditorConfig, cursor: Point, polygon: &Polygon) -> CutPreview {
    let margin = config.layout().panel_margin_px;
    let angle = config.angle_radians();

    match mode {
        Mode::Select => CutPreview::default(),
        Mode::Knife => CutPreview::through(polygon, cursor, angle, margin),
        Mode::HalfSplitter => CutPreview::through(polygon, polygon.centroid(), angle, margin),
        Mode::GridSnapper { frozen } => {
            let bbox = frozen.unwrap_or_else(|| polygon.bounding_box());
            let snapped = bbox.snap_to_grid(cursor, config.grid_div);
            CutPreview {
                snapped: Some(snapped),
                ..CutPreview::through(polygon, snapped, angle, margin)
            }
        }
        Mode::Anchor(AnchorState::AwaitingStart) => {
            let (anchor, _) = polygon.nearest_boundary_point(cursor, config.snap_to_points);
            CutPreview {
                anchor: Some(anchor),
                ..CutPreview::default()
            }
        }
        Mode::Anchor(AnchorState::AwaitingApply { start }) => {
            let angle = (cursor - *start).angle();
            CutPreview::through(polygon, *start, angle, margin)
        }
    }
}
