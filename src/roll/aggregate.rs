use crate::common::*;

/// Anything built from several die faces that adds up to a total.
#[enum_dispatch::enum_dispatch]
pub trait Tally {
    /// The faces in the order they were drawn.
    fn rolls(&self) -> &[UInt];

    fn total(&self) -> UInt;

    /// The face excluded from the total, if one was.
    fn dropped(&self) -> Option<UInt> {
        None
    }
}

fn saturating_sum(faces: &[UInt]) -> UInt {
    faces.iter().fold(0, |acc, &face| acc.saturating_add(face))
}

/// A plain sum of dice.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DieRoll {
    rolls: NonEmpty<UInt>,
    total: UInt,
}

impl DieRoll {
    pub fn new(rolls: NonEmpty<UInt>) -> Self {
        let total = saturating_sum(&rolls);
        Self { rolls, total }
    }
}

impl Tally for DieRoll {
    fn rolls(&self) -> &[UInt] {
        &self.rolls
    }

    fn total(&self) -> UInt {
        self.total
    }
}

/// A sum of dice with the lowest face set aside.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DroppedDieRoll {
    rolls: NonEmpty<UInt>,
    kept: Vec<UInt>,
    dropped: UInt,
    total: UInt,
}

impl DroppedDieRoll {
    /// Sorts a copy of `rolls`, drops its first (lowest) face and sums the rest.
    ///
    /// `kept` stays in ascending order; `rolls` keeps the draw order.
    pub fn new(rolls: NonEmpty<UInt>) -> Self {
        let mut sorted = rolls.clone();
        sorted.sort_unstable();
        let dropped = *sorted.first();
        let kept = sorted[1..].to_vec();
        let total = saturating_sum(&kept);
        Self {
            rolls,
            kept,
            dropped,
            total,
        }
    }

    pub fn kept(&self) -> &[UInt] {
        &self.kept
    }
}

impl Tally for DroppedDieRoll {
    fn rolls(&self) -> &[UInt] {
        &self.rolls
    }

    fn total(&self) -> UInt {
        self.total
    }

    fn dropped(&self) -> Option<UInt> {
        Some(self.dropped)
    }
}

/// One aggregate of a roll package, whichever rule produced it.
#[derive(Debug, Clone, Eq, PartialEq)]
#[enum_dispatch::enum_dispatch(Tally)]
pub enum Aggregate {
    Sum(DieRoll),
    DropLowest(DroppedDieRoll),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::rolls;

    #[test]
    fn test_sum_total() {
        let roll = DieRoll::new(rolls(&[2, 5, 3]));
        assert_eq!(roll.rolls(), &[2, 5, 3]);
        assert_eq!(roll.total(), 10);
        assert_eq!(roll.dropped(), None);
    }

    #[test]
    fn test_totals_saturate() {
        assert_eq!(DieRoll::new(rolls(&[UInt::MAX, 6])).total(), UInt::MAX);
        let roll = DroppedDieRoll::new(rolls(&[1, UInt::MAX, UInt::MAX]));
        assert_eq!(roll.total(), UInt::MAX);
    }

    #[test]
    fn test_drop_lowest_keeps_sorted_remainder() {
        let roll = DroppedDieRoll::new(rolls(&[4, 1, 6, 2, 5, 3]));
        assert_eq!(roll.rolls(), &[4, 1, 6, 2, 5, 3]);
        assert_eq!(roll.dropped(), Some(1));
        assert_eq!(roll.kept(), &[2, 3, 4, 5, 6]);
        assert_eq!(roll.total(), 20);
    }

    #[test]
    fn test_drop_lowest_tie_drops_exactly_one() {
        let roll = DroppedDieRoll::new(rolls(&[2, 6, 2, 2, 5, 3]));
        assert_eq!(roll.dropped(), Some(2));
        assert_eq!(roll.kept(), &[2, 2, 3, 5, 6]);
        assert_eq!(roll.total(), 18);

        let flat = DroppedDieRoll::new(rolls(&[4; 6]));
        assert_eq!(flat.kept().len(), 5);
        assert_eq!(flat.total(), 20);
    }

    #[test]
    fn test_aggregate_dispatch() {
        let sum: Aggregate = DieRoll::new(rolls(&[1, 1, 1])).into();
        let drop: Aggregate = DroppedDieRoll::new(rolls(&[6, 6, 6, 6, 6, 1])).into();
        assert_eq!(sum.total(), 3);
        assert_eq!(sum.dropped(), None);
        assert_eq!(drop.total(), 30);
        assert_eq!(drop.dropped(), Some(1));
        assert_eq!(drop.rolls().len(), 6);
    }
}
