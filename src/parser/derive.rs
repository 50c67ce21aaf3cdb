use serde::{Deserialize, Serialize};

use super::bbcode::to_bbcode;
use super::extract::Extraction;
use crate::model::{ShipClass, ShipPage, ShipTypeFlag};

/// Values the page does not show, filled in after extraction.
///
/// These are guesses about the game's balancing rather than page data, so
/// every field can be overridden from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    pub bounty: u64,
    pub loot_chance: i64,
    pub group_wrap: i64,
    pub group_wrap_geschuetz: i64,
    pub emp_loss_chance: f64,
    pub emp_loss_chance_awacs: f64,
    /// Fraction of the crew quarters a ship needs manned.
    pub min_crew_ratio: f64,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            bounty: 0,
            loot_chance: 0,
            group_wrap: 10,
            group_wrap_geschuetz: 5,
            emp_loss_chance: 0.75,
            emp_loss_chance_awacs: 0.5,
            min_crew_ratio: 0.6,
        }
    }
}

/// Close out an extraction: derived ship fields, then the page result.
pub fn finish(ex: Extraction, h: &Heuristics) -> ShipPage {
    let Extraction {
        mut ship,
        build,
        weapons,
        flags,
        description,
        diagnostics,
        ..
    } = ex;

    ship.flags = ShipTypeFlag::encode(flags.iter().copied());
    ship.supply_ship = flags.contains(&ShipTypeFlag::Versorger);
    ship.description = to_bbcode(description.trim());

    ship.bounty = h.bounty;
    ship.loot_chance = h.loot_chance;
    ship.group_wrap = match ship.ship_class {
        ShipClass::Geschuetz => h.group_wrap_geschuetz,
        _ => h.group_wrap,
    };
    ship.emp_loss_chance = match ship.ship_class {
        ShipClass::Awacs => h.emp_loss_chance_awacs,
        _ => h.emp_loss_chance,
    };
    ship.min_crew = min_crew(ship.crew, h.min_crew_ratio);
    ship.short_range_scanner = ship.sensor_range > 0;

    ShipPage {
        ship_type: ship,
        build,
        weapons,
        diagnostics,
    }
}

pub fn min_crew(crew: i64, ratio: f64) -> i64 {
    (crew as f64 * ratio).trunc() as i64
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_crew_truncates() {
        let ratio = Heuristics::default().min_crew_ratio;
        let got: Vec<i64> = [0, 1, 5, 100].iter().map(|&c| min_crew(c, ratio)).collect();
        assert_eq!(got, vec![0, 0, 3, 60]);
    }

    #[test]
    fn defaults_for_plain_ship() {
        let mut ex = Extraction::new(7);
        ex.ship.crew = 20;
        ex.ship.sensor_range = 2;
        let page = finish(ex, &Heuristics::default());
        let s = &page.ship_type;
        assert_eq!((s.bounty, s.loot_chance, s.group_wrap), (0, 0, 10));
        assert_eq!(s.emp_loss_chance, 0.75);
        assert_eq!(s.min_crew, 12);
        assert!(s.short_range_scanner);
        assert!(!s.supply_ship);
        assert_eq!(s.flags, "");
    }

    #[test]
    fn class_specific_values() {
        let mut ex = Extraction::new(1);
        ex.ship.ship_class = ShipClass::Geschuetz;
        assert_eq!(finish(ex, &Heuristics::default()).ship_type.group_wrap, 5);

        let mut ex = Extraction::new(1);
        ex.ship.ship_class = ShipClass::Awacs;
        let s = finish(ex, &Heuristics::default()).ship_type;
        assert_eq!(s.emp_loss_chance, 0.5);
        assert_eq!(s.group_wrap, 10);
        assert!(!s.short_range_scanner);
    }

    #[test]
    fn flags_and_supply_ship() {
        let mut ex = Extraction::new(1);
        ex.flags = vec![ShipTypeFlag::Versorger, ShipTypeFlag::NichtKaperbar];
        let s = finish(ex, &Heuristics::default()).ship_type;
        assert_eq!(s.flags, "versorger nicht_kaperbar");
        assert!(s.supply_ship);
        assert!(s.has_flag(ShipTypeFlag::NichtKaperbar));
    }

    #[test]
    fn description_becomes_bbcode() {
        let mut ex = Extraction::new(1);
        ex.description = "Ein <b>schneller</b> Kreuzer.<br> ".to_string();
        let s = finish(ex, &Heuristics::default()).ship_type;
        assert_eq!(s.description, "Ein [b]schneller[/b] Kreuzer.");
    }

    #[test]
    fn overrides_change_derived_values() {
        let h = Heuristics {
            bounty: 500,
            min_crew_ratio: 0.5,
            ..Heuristics::default()
        };
        let mut ex = Extraction::new(1);
        ex.ship.crew = 5;
        let s = finish(ex, &h).ship_type;
        assert_eq!(s.bounty, 500);
        assert_eq!(s.min_crew, 2);
    }
}
