use super::config::AssemblyConfig;
use super::error::AssemblyError;
use crate::core::curve::transition_curve;
use crate::core::models::mechanism::Mechanism;
use crate::core::models::primitives::{MechanismLayer, Primitive};
use nalgebra::Point2;

/// Emits the drawing primitives for one validated mechanism.
///
/// Every stable level gets exactly one marker, and every pair of adjacent
/// levels exactly one bridge: a dashed connector, or the transition curve
/// that already spans both gaps around a barrier.
pub(crate) fn assemble_mechanism(
    mechanism: &Mechanism,
    config: &AssemblyConfig,
) -> Result<MechanismLayer, AssemblyError> {
    let coords = &mechanism.coordinates;
    let levels = &mechanism.levels;
    let half_width = config.half_width();

    let mut primitives = Vec::new();

    for i in 0..mechanism.len() {
        if !mechanism.is_transition_state(i) {
            primitives.push(Primitive::LevelMarker {
                start: Point2::new(coords[i] - half_width, levels[i]),
                end: Point2::new(coords[i] + half_width, levels[i]),
            });
        }
    }

    for i in 1..mechanism.len() {
        if mechanism.is_transition_state(i) {
            let points = transition_curve(
                [coords[i - 1] + half_width, coords[i], coords[i + 1] - half_width],
                [levels[i - 1], levels[i], levels[i + 1]],
                config.samples_per_segment,
            )?;
            primitives.push(Primitive::TransitionCurve { points });
            primitives.push(Primitive::TransitionMarker {
                at: Point2::new(coords[i], levels[i]),
            });
        } else if mechanism.is_transition_state(i - 1) {
            // Already bridged by the transition curve ending at this level.
        } else {
            primitives.push(Primitive::Connector {
                start: Point2::new(coords[i - 1] + half_width, levels[i - 1]),
                end: Point2::new(coords[i] - half_width, levels[i]),
            });
        }
    }

    Ok(MechanismLayer {
        label: mechanism.label.clone(),
        color: mechanism.color,
        primitives,
    })
}
