use super::{aggregate::Aggregate, Roller, RollContext, RResult, Tally};
use crate::common::{sides, NonZeroUInt, UInt};
use std::fmt;

/// The die an aggregate total buys for the final attack roll.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AttackDie {
    D4,
    D6,
    D8,
    D10,
    D12,
}

impl AttackDie {
    /// Maps a seed total onto a die, stepping up every two points from 12.
    pub const fn select(total: UInt) -> Self {
        match total {
            0..=11 => Self::D4,
            12..=13 => Self::D6,
            14..=15 => Self::D8,
            16..=17 => Self::D10,
            _ => Self::D12,
        }
    }

    pub const fn sides(self) -> NonZeroUInt {
        match self {
            Self::D4 => sides(4),
            Self::D6 => sides(6),
            Self::D8 => sides(8),
            Self::D10 => sides(10),
            Self::D12 => sides(12),
        }
    }
}

impl fmt::Display for AttackDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Two seeds, the dice they select and what those dice came up as.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AttackResolution {
    pub attack_seed: Aggregate,
    pub attack_die: AttackDie,
    pub attack_roll: UInt,
    pub modifier_seed: Aggregate,
    pub modifier_die: AttackDie,
    pub modifier_roll: UInt,
}

impl AttackResolution {
    /// Selects both dice and rolls them, attack first.
    pub fn resolve<R: Roller>(
        ctx: &mut RollContext<R>,
        attack_seed: Aggregate,
        modifier_seed: Aggregate,
    ) -> RResult<Self> {
        let attack_die = AttackDie::select(attack_seed.total());
        let modifier_die = AttackDie::select(modifier_seed.total());
        let attack_roll = ctx.roll_one(attack_die.sides())?;
        let modifier_roll = ctx.roll_one(modifier_die.sides())?;
        Ok(Self {
            attack_seed,
            attack_die,
            attack_roll,
            modifier_seed,
            modifier_die,
            modifier_roll,
        })
    }

    pub fn total(&self) -> UInt {
        self.attack_roll + self.modifier_roll
    }
}
