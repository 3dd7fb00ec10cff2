use super::style::Color;
use nalgebra::Point2;

/// A renderer-agnostic drawing primitive emitted by diagram assembly.
///
/// Assembly reduces a mechanism to an ordered sequence of these primitives;
/// a rendering backend only has to know how to draw the four shapes. All
/// positions are in data coordinates (reaction coordinate on x, ΔG on y).
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A thick horizontal segment marking a stable energy level, centered on
    /// the level's reaction coordinate. `start` and `end` share the same y.
    LevelMarker {
        start: Point2<f64>,
        end: Point2<f64>,
    },
    /// A straight dashed segment bridging two adjacent stable levels, inset
    /// by the marker half-width on both sides.
    Connector {
        start: Point2<f64>,
        end: Point2<f64>,
    },
    /// A smooth polyline over a transition-state barrier, bridging the stable
    /// levels on either side of it.
    TransitionCurve { points: Vec<Point2<f64>> },
    /// A zero-size marker at the transition state's own position, kept purely
    /// for legend and visual continuity.
    TransitionMarker { at: Point2<f64> },
}

impl Primitive {
    /// Returns `true` for primitives that bridge two adjacent levels
    /// (connectors and transition curves), as opposed to per-level markers.
    pub fn is_bridge(&self) -> bool {
        matches!(
            self,
            Primitive::Connector { .. } | Primitive::TransitionCurve { .. }
        )
    }
}

/// The assembled primitives of one mechanism, together with the styling a
/// renderer needs to draw them and the matching legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MechanismLayer {
    /// Legend label of the mechanism this layer was assembled from.
    pub label: String,
    /// Color every primitive of the layer is drawn in.
    pub color: Color,
    /// Drawing primitives in emission order: all level markers first, then
    /// the bridging primitives from left to right.
    pub primitives: Vec<Primitive>,
}

impl MechanismLayer {
    /// Counts the level markers in the layer.
    pub fn marker_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::LevelMarker { .. }))
            .count()
    }

    /// Counts the bridging primitives (connectors plus transition curves).
    pub fn bridge_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.is_bridge()).count()
    }
}
