use crate::config::models::MechanismStyle;
use rxnprofile::core::models::mechanism::Mechanism;

/// The two bundled reaction pathways, as measured free energies (eV) along
/// their reaction coordinates. The second pathway starts one step into the
/// first one's coordinate range and carries its barrier right after the
/// initial species.
pub fn builtin_mechanisms(styles: &[MechanismStyle; 2]) -> [Mechanism; 2] {
    [
        Mechanism::new(
            &styles[0].label,
            styles[0].color,
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.0, -0.1, -0.3, 0.2, -0.1, -0.2, -0.3],
            [3],
        ),
        Mechanism::new(
            &styles[1].label,
            styles[1].color,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.0, 0.4, -0.01, -0.1, -0.3, -0.3],
            [1],
        ),
    ]
}
