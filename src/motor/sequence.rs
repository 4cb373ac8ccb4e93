//! Half-step coil sequence for 4-coil unipolar steppers.
//!
//! Eight patterns alternate one and two energized coils, which doubles the
//! resolution of a 28BYJ-48 style motor compared to full stepping.

/// Coil activation pattern, one flag per coil (true = energized).
pub type CoilPattern = [bool; 4];

/// Number of entries in the phase table.
pub const PHASE_COUNT: u8 = 8;

/// Direction of motor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (forward through the phase table, up on the vertical axis).
    Clockwise,
    /// Counter-clockwise (backward through the phase table, down on the vertical axis).
    CounterClockwise,
}

impl Direction {
    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Fixed cyclic table of coil patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSequence([CoilPattern; PHASE_COUNT as usize]);

impl PhaseSequence {
    /// Half-step table used by both scanner motors.
    pub const HALF_STEP: Self = Self([
        [true, false, false, true],
        [true, false, false, false],
        [true, true, false, false],
        [false, true, false, false],
        [false, true, true, false],
        [false, false, true, false],
        [false, false, true, true],
        [false, false, false, true],
    ]);

    /// Pattern at `index`, taken modulo the table length.
    #[inline]
    pub fn pattern(&self, index: u8) -> CoilPattern {
        self.0[(index % PHASE_COUNT) as usize]
    }

    /// Index one position away from `index` in `direction`, always in `[0, 8)`.
    #[inline]
    pub fn next_index(&self, index: u8, direction: Direction) -> u8 {
        Self::normalize(index as i32 + direction.sign())
    }

    /// Wrap any signed offset into `[0, 8)`.
    #[inline]
    pub fn normalize(index: i32) -> u8 {
        index.rem_euclid(PHASE_COUNT as i32) as u8
    }
}

impl Default for PhaseSequence {
    fn default() -> Self {
        Self::HALF_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_forward_wraps_to_zero() {
        let seq = PhaseSequence::HALF_STEP;
        assert_eq!(seq.next_index(7, Direction::Clockwise), 0);
        assert_eq!(seq.next_index(0, Direction::Clockwise), 1);
    }

    #[test]
    fn test_backward_wraps_to_seven() {
        let seq = PhaseSequence::HALF_STEP;
        assert_eq!(seq.next_index(0, Direction::CounterClockwise), 7);
        assert_eq!(seq.next_index(1, Direction::CounterClockwise), 0);
    }

    #[test]
    fn test_adjacent_patterns_differ_by_one_coil() {
        let seq = PhaseSequence::HALF_STEP;
        for i in 0..PHASE_COUNT {
            let a = seq.pattern(i);
            let b = seq.pattern(seq.next_index(i, Direction::Clockwise));
            let changed = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
            assert_eq!(changed, 1, "phase {} -> next toggles {} coils", i, changed);
        }
    }

    proptest! {
        #[test]
        fn prop_normalize_in_range(index in any::<i32>()) {
            prop_assert!(PhaseSequence::normalize(index) < PHASE_COUNT);
        }

        #[test]
        fn prop_forward_then_back_is_identity(index in 0u8..PHASE_COUNT) {
            let seq = PhaseSequence::HALF_STEP;
            let there = seq.next_index(index, Direction::Clockwise);
            prop_assert_eq!(seq.next_index(there, Direction::CounterClockwise), index);
        }

        #[test]
        fn prop_eight_steps_return_to_start(index in 0u8..PHASE_COUNT, cw in any::<bool>()) {
            let seq = PhaseSequence::HALF_STEP;
            let dir = if cw { Direction::Clockwise } else { Direction::CounterClockwise };
            let mut i = index;
            for _ in 0..PHASE_COUNT {
                i = seq.next_index(i, dir);
            }
            prop_assert_eq!(i, index);
        }
    }
}
