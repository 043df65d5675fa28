use bevy::prelude::*;

use crate::sim::constants::{CORRIDOR_HALF_WIDTH, CORRIDOR_START_Z, NUM_PAIRS, PAIR_SPACING};

/// Ground positions (x, z) of the cones marking the parking corridor:
/// three pairs straddling the lane, then a single marker cone past the end.
/// Computed once at startup and never mutated.
pub fn cone_corridor() -> Vec<Vec2> {
    let mut cones = Vec::with_capacity(NUM_PAIRS * 2 + 1);
    for i in 0..NUM_PAIRS {
        let z = CORRIDOR_START_Z - i as f32 * PAIR_SPACING;
        cones.push(Vec2::new(-CORRIDOR_HALF_WIDTH, z));
        cones.push(Vec2::new(CORRIDOR_HALF_WIDTH, z));
    }
    cones.push(Vec2::new(
        0.0,
        CORRIDOR_START_Z - NUM_PAIRS as f32 * PAIR_SPACING - 1.5,
    ));
    cones
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corridor_has_three_pairs_and_a_marker() {
        let cones = cone_corridor();
        assert_eq!(cones.len(), 7);

        for (i, pair) in cones[..6].chunks(2).enumerate() {
            let z = 2.0 - i as f32 * 3.0;
            assert_eq!(pair[0], Vec2::new(-1.2, z));
            assert_eq!(pair[1], Vec2::new(1.2, z));
        }

        assert_eq!(cones[6], Vec2::new(0.0, -8.5));
    }
}
