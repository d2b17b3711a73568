use super::{
    aggregate::{DieRoll, Tally},
    attack::AttackResolution,
    package::{HitPoints, RollPackage},
};
use crate::common::UInt;
use std::fmt;

/// The rendered lines of a roll package.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// One line per entry, as placed on the canvas.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Everything on a single line, for notifications.
    pub fn summary(&self) -> String {
        self.lines.join(" | ")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

pub trait Stringify {
    fn str_faces(&mut self, faces: &[UInt]) -> String {
        faces
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn str_tally<T: Tally + ?Sized>(&mut self, tag: &str, roll: &T) -> String {
        let faces = self.str_faces(roll.rolls());
        match roll.dropped() {
            Some(dropped) => format!("{}: [{}] drop {} = {}", tag, faces, dropped, roll.total()),
            None => format!("{}: [{}] = {}", tag, faces, roll.total()),
        }
    }

    fn str_bonus(&mut self, base: UInt, bonus: &DieRoll) -> String {
        let faces = self.str_faces(bonus.rolls());
        format!("  + [{}] = {}", faces, base + bonus.total())
    }

    fn str_hit_points(&mut self, hp: &HitPoints) -> String {
        let mut ret = self.str_tally("HP", &hp.base);
        if let Some(bonus) = &hp.bonus {
            let bonus = self.str_bonus(hp.base.total(), bonus);
            ret.push_str(&bonus);
        }
        ret
    }

    fn str_attack(&mut self, attack: &AttackResolution) -> [String; 3] {
        let seed = self.str_tally("ATK Seed", &attack.attack_seed);
        let modifier = self.str_tally("Mod Seed", &attack.modifier_seed);
        [
            format!("{} → {} = {}", seed, attack.attack_die, attack.attack_roll),
            format!("{} → +{} = {}", modifier, attack.modifier_die, attack.modifier_roll),
            format!("ATK Total: {}", attack.total()),
        ]
    }

    fn str_package(&mut self, pkg: &RollPackage) -> Report {
        let mut lines = vec![
            format!("=== {} ===", pkg.preset.label()),
            self.str_hit_points(&pkg.hp),
            self.str_tally("AC", &pkg.ac),
        ];
        lines.extend(self.str_attack(&pkg.attack));
        Report::new(lines)
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify(&mut self, pkg: &RollPackage) -> Report {
        self.str_package(pkg)
    }
}

impl Stringify for SimpleStringifier {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::*;
    use crate::preset::Preset;
    use crate::roll::{Aggregate, DroppedDieRoll};

    #[test]
    fn test_str_sum() {
        let roll = DieRoll::new(rolls(&[2, 5, 3]));
        assert_eq!(SimpleStringifier.str_tally("HP", &roll), "HP: [2, 5, 3] = 10");
    }

    #[test]
    fn test_str_dropped_in_draw_order() {
        let roll = DroppedDieRoll::new(rolls(&[4, 1, 6, 2, 5, 3]));
        assert_eq!(
            SimpleStringifier.str_tally("HP", &roll),
            "HP: [4, 1, 6, 2, 5, 3] drop 1 = 20"
        );
    }

    #[test]
    fn test_str_boss_bonus() {
        let hp = HitPoints {
            base: Aggregate::from(DroppedDieRoll::new(rolls(&[4, 1, 6, 2, 5, 3]))),
            bonus: Some(DieRoll::new(rolls(&[3, 4]))),
        };
        let line = SimpleStringifier.str_hit_points(&hp);
        assert_eq!(line, "HP: [4, 1, 6, 2, 5, 3] drop 1 = 20  + [3, 4] = 27");
        assert!(line.ends_with("+ [3, 4] = 27"));
    }

    #[test]
    fn test_str_package() {
        let mut ctx = scripted(&[1, 1, 1, 2, 2, 2, 6, 6, 6, 1, 1, 1, 7, 2]);
        let pkg = Preset::Weak.roll(&mut ctx, 0).unwrap();
        let report = SimpleStringifier::new().stringify(&pkg);
        assert_eq!(
            report.lines(),
            &[
                "=== Weak Mob (3d6) ===",
                "HP: [1, 1, 1] = 3",
                "AC: [2, 2, 2] = 6",
                "ATK Seed: [6, 6, 6] = 18 → d12 = 7",
                "Mod Seed: [1, 1, 1] = 3 → +d4 = 2",
                "ATK Total: 9",
            ]
        );
        assert!(report.text().contains("\nAC: [2, 2, 2] = 6\n"));
        assert!(report.summary().starts_with("=== Weak Mob (3d6) === | HP: [1, 1, 1] = 3 | "));
    }
}
