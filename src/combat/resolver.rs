//! Damage application and per-archetype attack sequences.
//!
//! Every attack resolves as a sequence of hits, one per archetype rule, and
//! every hit funnels through [`apply_damage`]: defence absorbs first, the
//! remainder spills onto life. The resolver mutates only the target — the
//! attacker's stats never change during its own attack.
//!
//! Outcomes are structured ([`AttackOutcome`], [`HitReport`]) and carry a
//! display-ready narrative so the presentation layer can print them as-is.

use serde::{Deserialize, Serialize};

use crate::cards::{Archetype, Card};
use crate::core::GameRng;

/// Hits per Scissors attack action, the guaranteed opener included.
const SCISSORS_MAX_HITS: usize = 3;

/// Which stat Paper's ability muted on the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutedStat {
    Attack,
    Defence,
}

/// What one hit did to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitReport {
    /// Damage the hit was rolled for.
    pub amount: i32,
    /// Portion absorbed by defence.
    pub absorbed: i32,
    /// Portion that reached life.
    pub life_loss: i32,
    /// Whether the target was defeated by this hit (or already was).
    pub target_defeated: bool,
}

/// The full result of one attack action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// True when the attacker was attack-muted and dealt nothing.
    pub attacker_muted: bool,
    /// One entry per hit that landed, in order.
    pub hits: Vec<HitReport>,
    /// The mute Paper's ability applied to the target, if any.
    pub mute_applied: Option<MutedStat>,
    narrative: String,
}

impl AttackOutcome {
    /// Whether the target ended the attack defeated.
    #[must_use]
    pub fn target_defeated(&self) -> bool {
        self.hits.last().is_some_and(|hit| hit.target_defeated)
    }

    /// The display-ready, line-per-event narrative.
    #[must_use]
    pub fn narrative(&self) -> &str {
        &self.narrative
    }
}

impl std::fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.narrative)
    }
}

/// Apply `amount` damage to `target`.
///
/// Defence absorbs first. Remaining damage reaches life only while the
/// target's defence is not muted; a defence-muted target soaks the
/// remainder without losing life. Stats clamp at 0 and the target is
/// defeated once its life reaches 0.
pub fn apply_damage(target: &mut Card, amount: i32) -> HitReport {
    let absorbed = target.reduce_defence(amount);
    let remaining = amount - absorbed;

    let life_loss = if remaining > 0 && !target.is_defence_muted() {
        target.reduce_life(remaining)
    } else {
        0
    };

    HitReport {
        amount,
        absorbed,
        life_loss,
        target_defeated: target.is_defeated(),
    }
}

/// Resolve one attack action from `attacker` against `target`.
///
/// An attack-muted attacker deals nothing. Otherwise the attacker's
/// archetype drives the hit sequence:
///
/// - **Stone**: a single hit of attack power.
/// - **Paper**: a single hit of attack power; if the target survives, a
///   50/50 roll mutes exactly one of the target's attack or defence.
/// - **Scissors**: an opening hit of full attack power, then up to two more
///   while the target lives, each rolled uniformly from `[1, attack]`.
pub fn resolve_attack(attacker: &Card, target: &mut Card, rng: &mut GameRng) -> AttackOutcome {
    if attacker.is_attack_muted() {
        return AttackOutcome {
            attacker_muted: true,
            hits: Vec::new(),
            mute_applied: None,
            narrative: format!("{} is muted and cannot attack!", attacker.name()),
        };
    }

    let mut hits = Vec::new();
    let mut lines = Vec::new();
    let mut mute_applied = None;

    match attacker.archetype() {
        Archetype::Stone => {
            land_hit(attacker, target, attacker.attack(), &mut hits, &mut lines);
        }
        Archetype::Paper => {
            land_hit(attacker, target, attacker.attack(), &mut hits, &mut lines);

            if !target.is_defeated() {
                mute_applied = Some(roll_mute(attacker, target, rng, &mut lines));
            }
        }
        Archetype::Scissors => {
            land_hit(attacker, target, attacker.attack(), &mut hits, &mut lines);

            for _ in 1..SCISSORS_MAX_HITS {
                if target.is_defeated() {
                    break;
                }
                let amount = rng.gen_range(1..attacker.attack() + 1);
                lines.push("Continuing attack:".to_string());
                land_hit(attacker, target, amount, &mut hits, &mut lines);
            }
        }
    }

    AttackOutcome {
        attacker_muted: false,
        hits,
        mute_applied,
        narrative: lines.join("\n"),
    }
}

/// Apply one hit and narrate what it did.
fn land_hit(
    attacker: &Card,
    target: &mut Card,
    amount: i32,
    hits: &mut Vec<HitReport>,
    lines: &mut Vec<String>,
) {
    lines.push(format!(
        "{} attacks {} for {} damage!",
        attacker.name(),
        target.name(),
        amount
    ));

    let report = apply_damage(target, amount);

    if report.absorbed > 0 {
        lines.push(format!(
            "{}'s defence reduced by {} ({} remaining)",
            target.name(),
            report.absorbed,
            target.current_defence()
        ));
    }

    if report.life_loss > 0 {
        lines.push(format!(
            "{}'s life reduced by {} ({} remaining)",
            target.name(),
            report.life_loss,
            target.current_life()
        ));

        if report.target_defeated {
            lines.push(format!("{} has been defeated!", target.name()));
        }
    }

    hits.push(report);
}

/// Paper's ability: mute exactly one of the target's stats, never both.
fn roll_mute(
    attacker: &Card,
    target: &mut Card,
    rng: &mut GameRng,
    lines: &mut Vec<String>,
) -> MutedStat {
    if rng.gen_bool(0.5) {
        target.mute_attack();
        lines.push(format!(
            "{} muted {}'s attack ability!",
            attacker.name(),
            target.name()
        ));
        MutedStat::Attack
    } else {
        target.mute_defence();
        lines.push(format!(
            "{} muted {}'s defence ability!",
            attacker.name(),
            target.name()
        ));
        MutedStat::Defence
    }
}
