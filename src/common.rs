use std::num::{NonZeroU32, NonZeroUsize};

pub use vec1::vec1;

pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// A count of dice to roll.
pub type Num = NonZeroUsize;

pub type NonEmpty<T> = vec1::Vec1<T>;

pub(crate) const fn sides(n: UInt) -> NonZeroUInt {
    match NonZeroUInt::new(n) {
        Some(sides) => sides,
        None => panic!("a die needs at least one side"),
    }
}

pub(crate) const fn num(n: usize) -> Num {
    match Num::new(n) {
        Some(num) => num,
        None => panic!("at least one die must be rolled"),
    }
}

pub const D6: NonZeroUInt = sides(6);
