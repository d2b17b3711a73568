use crate::common::{num, Num, UInt};
use crate::roll::{Aggregate, AttackResolution, HitPoints, RResult, RollContext, RollPackage, Roller};
use std::fmt;

/// The four fixed roll formulas.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Preset {
    Weak,
    Strong,
    Threatening,
    Boss,
}

impl Preset {
    pub const ALL: [Self; 4] = [Self::Weak, Self::Strong, Self::Threatening, Self::Boss];

    /// Dice per aggregate, or `None` when every aggregate is 6d6 drop lowest.
    pub const fn die_count(self) -> Option<Num> {
        match self {
            Self::Weak => Some(num(3)),
            Self::Strong => Some(num(4)),
            Self::Threatening => Some(num(5)),
            Self::Boss => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak Mob (3d6)",
            Self::Strong => "Strong Mob (4d6)",
            Self::Threatening => "Threatening Mob (5d6)",
            Self::Boss => "BBEG (6d6 drop lowest)",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Strong => "Strong",
            Self::Threatening => "Threatening",
            Self::Boss => "BBEG",
        }
    }

    fn aggregate<R: Roller>(self, ctx: &mut RollContext<R>) -> RResult<Aggregate> {
        match self.die_count() {
            Some(n) => ctx.sum_of_n(n).map(Aggregate::from),
            None => ctx.drop_lowest_of_six().map(Aggregate::from),
        }
    }

    /// Rolls a full package: HP, AC, both seeds, both attack dice, then any
    /// level bonus. `level_bonus` only applies to [`Preset::Boss`].
    pub fn roll<R: Roller>(self, ctx: &mut RollContext<R>, level_bonus: UInt) -> RResult<RollPackage> {
        let hp = self.aggregate(ctx)?;
        let ac = self.aggregate(ctx)?;
        let attack_seed = self.aggregate(ctx)?;
        let modifier_seed = self.aggregate(ctx)?;
        let attack = AttackResolution::resolve(ctx, attack_seed, modifier_seed)?;

        let bonus = match (self, Num::new(level_bonus as usize)) {
            (Self::Boss, Some(n)) => Some(ctx.sum_of_n(n)?),
            _ => None,
        };

        Ok(RollPackage {
            preset: self,
            hp: HitPoints { base: hp, bonus },
            ac,
            attack,
        })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
