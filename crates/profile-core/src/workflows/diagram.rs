use crate::core::models::mechanism::Mechanism;
use crate::core::models::primitives::{MechanismLayer, Primitive};
use crate::engine::assembler::assemble_mechanism;
use crate::engine::config::AssemblyConfig;
use crate::engine::error::AssemblyError;
use crate::engine::validation::validate_mechanism;
use nalgebra::Point2;
use tracing::{info, instrument};

/// A fully assembled potential energy diagram: one primitive layer per
/// mechanism, sharing the same pair of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub layers: Vec<MechanismLayer>,
}

impl Diagram {
    /// The x-extent of the drawable content, or `None` for an empty diagram.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.fold_points(|p| p.x)
    }

    /// The y-extent of the drawable content, or `None` for an empty diagram.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.fold_points(|p| p.y)
    }

    fn fold_points(&self, axis: impl Fn(&Point2<f64>) -> f64) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        let mut extend = |value: f64| {
            range = Some(match range {
                None => (value, value),
                Some((lo, hi)) => (lo.min(value), hi.max(value)),
            });
        };

        for layer in &self.layers {
            for primitive in &layer.primitives {
                match primitive {
                    Primitive::LevelMarker { start, end }
                    | Primitive::Connector { start, end } => {
                        extend(axis(start));
                        extend(axis(end));
                    }
                    Primitive::TransitionCurve { points } => {
                        for point in points {
                            extend(axis(point));
                        }
                    }
                    Primitive::TransitionMarker { at } => extend(axis(at)),
                }
            }
        }
        range
    }
}

/// Assembles a diagram from a set of mechanisms.
///
/// Every mechanism is validated before any primitive is emitted, so a broken
/// input never yields a partially assembled diagram.
///
/// # Errors
///
/// Returns [`AssemblyError`] if any mechanism violates the data invariants:
/// mismatched sequence lengths, non-increasing coordinates, a transition
/// state at a boundary or out of range, adjacent transition states, or a
/// marker width that leaves no room for a transition curve.
#[instrument(skip_all, name = "diagram_workflow")]
pub fn run(
    mechanisms: &[Mechanism],
    config: &AssemblyConfig,
) -> Result<Diagram, AssemblyError> {
    for mechanism in mechanisms {
        validate_mechanism(mechanism, config)?;
    }

    let mut layers = Vec::with_capacity(mechanisms.len());
    for mechanism in mechanisms {
        let layer = assemble_mechanism(mechanism, config)?;
        info!(
            "Assembled mechanism '{}' into {} primitives.",
            mechanism.label,
            layer.primitives.len()
        );
        layers.push(layer);
    }

    Ok(Diagram { layers })
}
