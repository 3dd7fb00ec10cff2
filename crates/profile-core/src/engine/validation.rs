use super::config::AssemblyConfig;
use super::error::AssemblyError;
use crate::core::models::mechanism::Mechanism;

/// Checks every invariant a mechanism must satisfy before assembly.
///
/// All checks run up front; a broken mechanism never produces a partial
/// primitive sequence.
pub(crate) fn validate_mechanism(
    mechanism: &Mechanism,
    config: &AssemblyConfig,
) -> Result<(), AssemblyError> {
    let label = || mechanism.label.clone();
    let len = mechanism.len();

    if mechanism.coordinates.len() != len {
        return Err(AssemblyError::LengthMismatch {
            label: label(),
            coordinates: mechanism.coordinates.len(),
            levels: len,
        });
    }

    for (index, pair) in mechanism.coordinates.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(AssemblyError::NonIncreasingCoordinates {
                label: label(),
                index: index + 1,
            });
        }
    }

    let half_width = config.half_width();
    for &ts in &mechanism.transition_states {
        if ts >= len {
            return Err(AssemblyError::TransitionStateOutOfRange {
                label: label(),
                index: ts,
                len,
            });
        }
        if ts == 0 || ts == len - 1 {
            return Err(AssemblyError::TransitionStateAtBoundary {
                label: label(),
                index: ts,
            });
        }
        if mechanism.transition_states.contains(&(ts + 1)) {
            return Err(AssemblyError::AdjacentTransitionStates {
                label: label(),
                first: ts,
                second: ts + 1,
            });
        }

        // The curve's control x-points must stay strictly increasing once the
        // neighbors are inset by the marker half-width.
        let before = mechanism.coordinates[ts - 1] + half_width;
        let after = mechanism.coordinates[ts + 1] - half_width;
        let at = mechanism.coordinates[ts];
        if before >= at || at >= after {
            return Err(AssemblyError::MarkerOverlapsTransition {
                label: label(),
                index: ts,
                marker_width: config.marker_width,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::style::Color;

    fn mechanism(
        coordinates: Vec<f64>,
        levels: Vec<f64>,
        ts: impl IntoIterator<Item = usize>,
    ) -> Mechanism {
        Mechanism::new("Test", Color::BLACK, coordinates, levels, ts)
    }

    fn config() -> AssemblyConfig {
        AssemblyConfig::default()
    }

    #[test]
    fn valid_mechanism_passes() {
        let m = mechanism(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.0, -0.1, 0.3, -0.2, -0.3],
            [2],
        );
        assert_eq!(validate_mechanism(&m, &config()), Ok(()));
    }

    #[test]
    fn mechanism_without_transition_states_passes() {
        let m = mechanism(vec![0.0, 1.0], vec![0.0, -0.1], []);
        assert_eq!(validate_mechanism(&m, &config()), Ok(()));
    }

    #[test]
    fn empty_and_single_level_mechanisms_pass() {
        assert_eq!(validate_mechanism(&mechanism(vec![], vec![], []), &config()), Ok(()));
        assert_eq!(
            validate_mechanism(&mechanism(vec![0.0], vec![0.5], []), &config()),
            Ok(())
        );
    }

    #[test]
    fn mismatched_sequence_lengths_are_rejected() {
        let m = mechanism(vec![0.0, 1.0, 2.0], vec![0.0, -0.1], []);
        assert!(matches!(
            validate_mechanism(&m, &config()),
            Err(AssemblyError::LengthMismatch {
                coordinates: 3,
                levels: 2,
                ..
            })
        ));
    }

    #[test]
    fn non_increasing_coordinates_are_rejected() {
        let m = mechanism(vec![0.0, 1.0, 1.0], vec![0.0, -0.1, -0.2], []);
        assert!(matches!(
            validate_mechanism(&m, &config()),
            Err(AssemblyError::NonIncreasingCoordinates { index: 2, .. })
        ));

        let m = mechanism(vec![0.0, 2.0, 1.0], vec![0.0, -0.1, -0.2], []);
        assert!(matches!(
            validate_mechanism(&m, &config()),
            Err(AssemblyError::NonIncreasingCoordinates { index: 2, .. })
        ));
    }

    #[test]
    fn transition_state_at_index_zero_is_rejected() {
        let m = mechanism(vec![0.0, 1.0, 2.0], vec![0.0, 0.4, -0.1], [0]);
        assert!(matches!(
            validate_mechanism(&m, &config()),
            Err(AssemblyError::TransitionStateAtBoundary { index: 0, .. })
        ));
    }

    #[test]
    fn transition_state_at_last_index_is_rejected() {
        let m = mechanism(vec![0.0, 1.0, 2.0], vec![0.0, 0.4, -0.1], [2]);
        assert!(matches!(
            validate_mechanism(&m, &config()),
            Err(AssemblyError::TransitionStateAtBoundary { index: 2, .. })
        ));
    }

    #[test]
    fn transition_state_out_of_range_is_rejected() {
        let m = mechanism(vec![0.0, 1.0, 2.0], vec![0.0, 0.4, -0.1], [7]);
        assert!(matches!(
            validate_mechanism(&m, &config()),
            Err(AssemblyError::TransitionStateOutOfRange { index: 7, len: 3, .. })
        ));
    }

    #[test]
    fn adjacent_transition_states_are_rejected() {
        let m = mechanism(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.0, 0.4, 0.5, -0.1, -0.2],
            [1, 2],
        );
        assert!(matches!(
            validate_mechanism(&m, &config()),
            Err(AssemblyError::AdjacentTransitionStates {
                first: 1,
                second: 2,
                ..
            })
        ));
    }

    #[test]
    fn marker_width_swallowing_the_curve_is_rejected() {
        // Half-width 1.0 on levels spaced 1.0 apart leaves no curve span.
        let wide = crate::engine::config::AssemblyConfigBuilder::new()
            .marker_width(2.0)
            .build()
            .unwrap();
        let m = mechanism(vec![0.0, 1.0, 2.0], vec![0.0, 0.4, -0.1], [1]);
        assert!(matches!(
            validate_mechanism(&m, &wide),
            Err(AssemblyError::MarkerOverlapsTransition { index: 1, .. })
        ));
    }
}
