use tracing::warn;

use super::{Extraction, Rule};
use crate::model::{normalize_id, WeaponFlag, WeaponRecord, UNDECODED_AMMO};
use crate::parser::anchors::{after, before, between, to_float, to_int, ExtractionError};
use crate::parser::sections::Section;

pub const RULES: &[Rule] = &[
    Rule {
        name: "weapon_name",
        scope: Some(Section::Weapons),
        applies: |_, line| line.chars().count() > 1 && !line.starts_with('<'),
        apply: |ex, line| {
            ex.pending_weapon = Some(normalize_id(line));
            Ok(())
        },
    },
    Rule {
        name: "weapon_stats",
        scope: Some(Section::Weapons),
        applies: |_, line| line.starts_with("<span style="),
        apply: apply_stats,
    },
    Rule {
        name: "weapon_count",
        scope: Some(Section::Weapons),
        applies: |_, line| line.starts_with("<td class=\"noBorderX\">"),
        apply: apply_count,
    },
];

/// Stat block fields in page order. Each is optional, none may move.
const STAT_FIELDS: &[(&str, fn(&mut StatBlock, &str) -> Result<(), ExtractionError>)] = &[
    ("AP-Kosten:", |s, v| {
        s.weapon.ap_cost = to_int(v)?;
        Ok(())
    }),
    ("Energie-Kosten:", |s, v| {
        s.weapon.energy_cost = to_int(v)?;
        Ok(())
    }),
    ("Schüsse:", |s, v| {
        s.weapon.shots = to_int(v)?;
        Ok(())
    }),
    ("Max. Überhitzung:", |s, v| {
        s.max_heat = Some(to_int(v)?);
        Ok(())
    }),
    ("Schaden (H/S/Sub):", |s, v| {
        if s.ammunition(v) {
            return Ok(());
        }
        let (hull, shield, sub) = triple(v)?;
        s.weapon.base_damage = to_int(hull)?;
        s.weapon.shield_damage = to_int(shield)?;
        s.weapon.sub_damage = to_int(sub)?;
        Ok(())
    }),
    ("Trefferws (C/J/Torp):", |s, v| {
        if s.ammunition(v) {
            return Ok(());
        }
        let (capital, small, torpedo) = triple(v)?;
        s.weapon.hit_chance_capital = to_int(capital)?;
        s.weapon.hit_chance_small = to_int(small)?;
        s.weapon.hit_chance_torpedo = to_float(torpedo)?;
        Ok(())
    }),
];

/// A parsed weapon stat block.
#[derive(Debug, Default, PartialEq)]
pub struct StatBlock {
    pub weapon: WeaponRecord,
    /// Overheat cap; stored per ship, not per weapon.
    pub max_heat: Option<i64>,
    pub unknown_flags: Vec<String>,
}

impl StatBlock {
    /// Damage and hit chance may read "Munition" when they depend on the
    /// loaded ammunition. Records the placeholder token in that case.
    fn ammunition(&mut self, value: &str) -> bool {
        if value.trim_start().starts_with("Munition") {
            self.weapon.ammunition.insert(UNDECODED_AMMO.to_string());
            true
        } else {
            false
        }
    }
}

/// Split a stat block payload into its `<br>`-terminated segments.
pub fn tokenize(payload: &str) -> Result<Vec<&str>, ExtractionError> {
    let mut rest = payload
        .strip_suffix("</span>")
        .ok_or_else(|| ExtractionError::UnterminatedStatBlock(payload.to_string()))?;
    let mut tokens = Vec::new();
    while !rest.is_empty() {
        let token = before(rest, "<br>")
            .map_err(|_| ExtractionError::UnterminatedStatBlock(payload.to_string()))?;
        tokens.push(token);
        rest = &rest[token.len() + "<br>".len()..];
    }
    Ok(tokens)
}

/// Parse the payload of a stat block line (everything after `'">`).
pub fn parse_stat_block(id: &str, payload: &str) -> Result<StatBlock, ExtractionError> {
    let mut block = StatBlock {
        weapon: WeaponRecord::new(id),
        ..Default::default()
    };
    let mut tokens = tokenize(payload)?.into_iter().peekable();

    for (label, assign) in STAT_FIELDS {
        if let Some(value) = tokens.peek().and_then(|t| t.strip_prefix(label)) {
            assign(&mut block, value)?;
            tokens.next();
        }
    }

    for token in tokens {
        match WeaponFlag::from_description(token.trim()) {
            Some(flag) => {
                block.weapon.flags.insert(flag);
            }
            None => block.unknown_flags.push(token.to_string()),
        }
    }
    Ok(block)
}

fn triple(value: &str) -> Result<(&str, &str, &str), ExtractionError> {
    let first = before(value, "/")?;
    let rest = after(value, "/")?;
    Ok((first, before(rest, "/")?, after(rest, "/")?))
}

fn apply_stats(ex: &mut Extraction, line: &str) -> Result<(), ExtractionError> {
    let Some(id) = ex.pending_weapon.clone() else {
        ex.report(line);
        return Ok(());
    };
    let block = parse_stat_block(&id, between(line, Some("'\">"), None)?)?;
    for flag in &block.unknown_flags {
        warn!(line_no = ex.line_no(), weapon = %id, "Unknown weapon flag: {}", flag);
    }
    if let Some(heat) = block.max_heat {
        ex.ship.max_heat.insert(id.clone(), heat);
    }
    ex.weapons.insert(id, block.weapon);
    Ok(())
}

fn apply_count(ex: &mut Extraction, line: &str) -> Result<(), ExtractionError> {
    let count = to_int(between(line, Some("<td class=\"noBorderX\">"), Some("</td>"))?)?;
    match ex.pending_weapon.clone() {
        Some(id) => {
            ex.ship.weapons.insert(id, count);
        }
        None => {
            ex.report(line);
        }
    }
    Ok(())
}
