//! Injected randomness.
//!
//! The domain never reaches for a global generator. Callers pass a
//! `RandomSource`, which any `FnMut(min, max) -> i32` closure satisfies.

/// Source of uniformly distributed integers in an inclusive range.
pub trait RandomSource {
    /// Returns a value in `min..=max`.
    fn roll(&mut self, min: i32, max: i32) -> i32;
}

impl<F> RandomSource for F
where
    F: FnMut(i32, i32) -> i32,
{
    fn roll(&mut self, min: i32, max: i32) -> i32 {
        self(min, max)
    }
}

/// Roll one die with `sides` faces.
pub fn roll_die(rng: &mut dyn RandomSource, sides: i32) -> i32 {
    rng.roll(1, sides)
}

/// Roll four d6 and keep the best three.
pub fn best_three_of_four_d6(rng: &mut dyn RandomSource) -> i32 {
    let mut rolls = [0; 4];
    for slot in rolls.iter_mut() {
        *slot = roll_die(rng, 6);
    }
    rolls.sort_unstable();
    rolls[1..].iter().sum()
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedRolls;
    use super::*;

    #[test]
    fn closures_are_random_sources() {
        let mut always_max = |_min: i32, max: i32| max;
        assert_eq!(roll_die(&mut always_max, 20), 20);
    }

    #[test]
    fn drops_lowest_of_four() {
        let mut rolls = ScriptedRolls::new(vec![1, 6, 3, 5]);
        assert_eq!(best_three_of_four_d6(&mut rolls), 14);
        assert_eq!(rolls.requested, vec![(1, 6); 4]);
    }
}
