use super::{aggregate::*, attack::AttackResolution};
use crate::common::UInt;
use crate::preset::Preset;

/// Hit points: the preset's aggregate plus any level bonus dice.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HitPoints {
    pub base: Aggregate,
    pub bonus: Option<DieRoll>,
}

impl HitPoints {
    pub fn total(&self) -> UInt {
        self.base
            .total()
            .saturating_add(self.bonus.as_ref().map_or(0, Tally::total))
    }
}

/// Everything rolled for one creature by one preset.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollPackage {
    pub preset: Preset,
    pub hp: HitPoints,
    pub ac: Aggregate,
    pub attack: AttackResolution,
}
