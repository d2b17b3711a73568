use super::{
    aggregate::{DieRoll, DroppedDieRoll},
    error::RollError,
    roller::Roller,
    RResult,
};
use crate::common::*;
use rand::SeedableRng;

/// The roller used outside of tests. It is `Send`, so an action can hold it
/// across awaits on a spawned task.
pub type DefaultRoller = rand::rngs::StdRng;

/// Largest radius [`RollContext::jitter`] honors.
pub const MAX_JITTER: UInt = (UInt::MAX - 1) / 2;

/// Counts every die drawn for one action against an optional budget.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    /// Dice drawn so far.
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls += n;
        match self.max_rolls {
            Some(limit) if self.rolls > limit => Err(RollError::TooManyRolls { limit }),
            _ => Ok(()),
        }
    }

    pub fn roll(
        &mut self,
        num: usize,
        sides: NonZeroUInt,
    ) -> RResult<impl Iterator<Item = UInt> + '_> {
        self.count_rolls(num)?;
        Ok(self.roller.roll_iter(num, sides))
    }

    pub fn roll_one(&mut self, sides: NonZeroUInt) -> RResult<UInt> {
        self.count_rolls(1)?;
        Ok(self.roller.roll(sides))
    }

    /// Rolls `n` six-sided dice and sums them.
    pub fn sum_of_n(&mut self, n: Num) -> RResult<DieRoll> {
        let first = self.roll_one(D6)?;
        let mut rolls = vec1![first];
        for face in self.roll(n.get() - 1, D6)? {
            rolls.push(face);
        }
        Ok(DieRoll::new(rolls))
    }

    /// Rolls six six-sided dice and sums the highest five.
    pub fn drop_lowest_of_six(&mut self) -> RResult<DroppedDieRoll> {
        let first = self.roll_one(D6)?;
        let mut rolls = vec1![first];
        for face in self.roll(5, D6)? {
            rolls.push(face);
        }
        Ok(DroppedDieRoll::new(rolls))
    }

    /// A uniform offset in `-radius..=radius`. Not counted as a die.
    ///
    /// `radius` is clamped so that the span still fits in a single die.
    pub fn jitter(&mut self, radius: UInt) -> i64 {
        let radius = radius.min(MAX_JITTER);
        if radius == 0 {
            return 0;
        }
        match NonZeroUInt::new(2 * radius + 1) {
            Some(span) => i64::from(self.roller.roll(span)) - i64::from(radius) - 1,
            None => 0,
        }
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Some(1000), DefaultRoller::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::*;
    use crate::roll::{roller::StepRoller, Tally};

    #[test]
    fn test_sum_of_n_properties() {
        let mut ctx: RollContext = RollContext::default();
        for n in 1..=12 {
            let roll = ctx.sum_of_n(num(n)).unwrap();
            assert_eq!(roll.rolls().len(), n);
            assert!(roll.rolls().iter().all(|f| (1..=6).contains(f)));
            assert_eq!(roll.total(), roll.rolls().iter().sum::<UInt>());
        }
    }

    #[test]
    fn test_sum_of_n_keeps_draw_order() {
        let mut ctx = scripted(&[2, 5, 3]);
        let roll = ctx.sum_of_n(num(3)).unwrap();
        assert_eq!(roll.rolls(), &[2, 5, 3]);
        assert_eq!(roll.total(), 10);
    }

    #[test]
    fn test_drop_lowest_properties() {
        let mut ctx: RollContext = RollContext::default();
        for _ in 0..100 {
            let roll = ctx.drop_lowest_of_six().unwrap();
            let rolls = roll.rolls();
            assert_eq!(rolls.len(), 6);
            assert!(rolls.iter().all(|f| (1..=6).contains(f)));
            assert_eq!(roll.dropped(), rolls.iter().min().copied());
            assert_eq!(roll.kept().len(), 5);
            let kept: UInt = roll.kept().iter().sum();
            assert_eq!(kept, roll.total());
            assert_eq!(kept + roll.dropped().unwrap(), rolls.iter().sum::<UInt>());
        }
    }

    #[test]
    fn test_drop_lowest_with_step_roller() {
        let mut ctx = RollContext::new_unbounded(StepRoller::new(sides(4), 1));
        let roll = ctx.drop_lowest_of_six().unwrap();
        assert_eq!(roll.rolls(), &[4, 5, 6, 1, 2, 3]);
        assert_eq!(roll.dropped(), Some(1));
        assert_eq!(roll.total(), 20);
    }

    #[test]
    fn test_budget_counts_every_die() {
        let mut ctx = scripted(&[1; 10]);
        ctx.sum_of_n(num(3)).unwrap();
        ctx.roll_one(D6).unwrap();
        assert_eq!(ctx.rolls(), 4);
    }

    #[test]
    fn test_err_too_many_rolls() {
        let mut ctx = RollContext::new_bounded(5, StepRoller::new(sides(1), 1));
        assert_eq!(
            ctx.drop_lowest_of_six().unwrap_err(),
            RollError::TooManyRolls { limit: 5 }
        );

        let mut ctx = RollContext::new_bounded(6, StepRoller::new(sides(1), 1));
        assert!(ctx.drop_lowest_of_six().is_ok());
    }

    #[test]
    fn test_jitter_range() {
        let mut ctx: RollContext = RollContext::default();
        for _ in 0..200 {
            let offset = ctx.jitter(20);
            assert!((-20..=20).contains(&offset));
        }
        assert_eq!(ctx.jitter(0), 0);
        assert_eq!(ctx.rolls(), 0);
    }

    #[test]
    fn test_jitter_huge_radius_stays_symmetric() {
        let mut ctx = scripted(&[1, UInt::MAX]);
        assert_eq!(ctx.jitter(UInt::MAX - 1), -i64::from(MAX_JITTER));
        assert_eq!(ctx.jitter(UInt::MAX), i64::from(MAX_JITTER));
    }

    #[test]
    fn test_jitter_extremes() {
        let mut ctx = scripted(&[1, 41]);
        assert_eq!(ctx.jitter(20), -20);
        assert_eq!(ctx.jitter(20), 20);
    }
}
