use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// A source of die faces.
///
/// Every [`Rng`] is a roller; tests substitute rollers that replay known faces.
pub trait Roller {
    type RollIter<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    /// Rolls one die, returning a face in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_>;
}

impl<R: Rng> Roller for R {
    type RollIter<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
        Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
    }
}

/// Converts a raw side count, rejecting zero.
pub fn try_sides(n: UInt) -> Result<NonZeroUInt, super::RollError> {
    NonZeroUInt::new(n).ok_or(super::RollError::ZeroSides)
}

#[cfg(test)]
pub(crate) use replay::{ScriptedRoller, StepRoller};

#[cfg(test)]
mod replay {
    use super::*;
    use std::collections::VecDeque;

    /// Yields `initial`, `initial + step`, ... wrapped onto the die.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
    }

    impl StepRoller {
        pub fn new(initial: NonZeroUInt, step: UInt) -> Self {
            Self {
                current: initial.get(),
                step,
            }
        }
    }

    impl Roller for StepRoller {
        type RollIter<'a> = ReplayIter<'a, Self>;

        fn roll(&mut self, sides: NonZeroUInt) -> UInt {
            let ret = (self.current - 1) % sides.get() + 1;
            self.current += self.step;
            ret
        }

        fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
            ReplayIter {
                roller: self,
                num,
                sides,
            }
        }
    }

    /// Replays a fixed list of faces regardless of die size.
    pub(crate) struct ScriptedRoller {
        faces: VecDeque<UInt>,
    }

    impl ScriptedRoller {
        pub fn new(faces: impl IntoIterator<Item = UInt>) -> Self {
            Self {
                faces: faces.into_iter().collect(),
            }
        }

        pub fn remaining(&self) -> usize {
            self.faces.len()
        }
    }

    impl Roller for ScriptedRoller {
        type RollIter<'a> = ReplayIter<'a, Self>;

        fn roll(&mut self, _sides: NonZeroUInt) -> UInt {
            self.faces.pop_front().expect("scripted roller ran out of faces")
        }

        fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> Self::RollIter<'_> {
            ReplayIter {
                roller: self,
                num,
                sides,
            }
        }
    }

    pub(crate) struct ReplayIter<'a, R> {
        roller: &'a mut R,
        num: usize,
        sides: NonZeroUInt,
    }

    impl<R: Roller> Iterator for ReplayIter<'_, R> {
        type Item = UInt;

        fn next(&mut self) -> Option<Self::Item> {
            if self.num == 0 {
                None
            } else {
                self.num -= 1;
                Some(self.roller.roll(self.sides))
            }
        }
    }
}
