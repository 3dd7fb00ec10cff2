use super::style::Color;
use std::collections::BTreeSet;

/// Represents one complete reaction pathway in a potential energy diagram.
///
/// A mechanism pairs an ordered sequence of positions along the reaction
/// coordinate with the free energy of the species at each position, and flags
/// which of those positions are transition states (barrier peaks) rather than
/// stable intermediates. Stable levels are drawn as flat markers joined by
/// dashed connectors; transition states are drawn as smooth interpolated
/// curves bridging their neighbors.
///
/// Mechanisms are plain data: construction performs no validation. The
/// invariants (index-aligned sequences, strictly increasing coordinates,
/// interior non-adjacent transition states) are checked eagerly by the engine
/// before any primitive is emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Mechanism {
    /// Position of each energy level along the reaction coordinate (x-axis),
    /// in drawing order. Must be strictly increasing.
    pub coordinates: Vec<f64>,
    /// Free energy change (ΔG, in eV) of each level, index-aligned with
    /// `coordinates`.
    pub levels: Vec<f64>,
    /// Indices into `levels` marking transition states. Each must have a
    /// stable neighbor on both sides.
    pub transition_states: BTreeSet<usize>,
    /// Legend label for this pathway.
    pub label: String,
    /// Display color applied to every primitive of this pathway.
    pub color: Color,
}

impl Mechanism {
    /// Creates a new `Mechanism` from its raw parts.
    ///
    /// # Arguments
    ///
    /// * `label` - The legend label for the pathway.
    /// * `color` - The display color for the pathway.
    /// * `coordinates` - Positions along the reaction coordinate.
    /// * `levels` - Free energies, index-aligned with `coordinates`.
    /// * `transition_states` - Indices of the levels that are transition states.
    pub fn new(
        label: &str,
        color: Color,
        coordinates: Vec<f64>,
        levels: Vec<f64>,
        transition_states: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            coordinates,
            levels,
            transition_states: transition_states.into_iter().collect(),
            label: label.to_string(),
            color,
        }
    }

    /// Returns the number of energy levels in the pathway.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if the pathway has no energy levels at all.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns `true` if the level at `index` is flagged as a transition state.
    pub fn is_transition_state(&self, index: usize) -> bool {
        self.transition_states.contains(&index)
    }
}
