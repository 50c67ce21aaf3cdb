pub mod catalog;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

pub use catalog::{ItemId, Race, ShipClass, ShipTypeFlag, WeaponFlag};

/// Placeholder ammunition token for weapons whose stat block only says
/// "Munition". The page does not expose the munitions identifier.
pub const UNDECODED_AMMO: &str = "undecoded";

// ── Ship type ──

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShipTypeRecord {
    pub id: u32,
    pub nickname: String,
    pub hide: bool,
    pub ship_class: ShipClass,
    pub picture: String,

    pub reactor_uranium: i64,
    pub reactor_deuterium: i64,
    pub reactor_antimatter: i64,
    pub reactor_max: i64,

    pub flight_cost: i64,
    pub heat: i64,
    pub size: i64,
    pub sensor_range: i64,

    pub eps: i64,
    pub cargo: i64,
    pub crew: i64,
    pub min_crew: i64,

    pub hull: i64,
    pub ablative_armor: i64,
    pub armor: i64,
    pub shields: i64,
    pub fighter_docks: i64,
    pub external_docks: i64,
    pub shipyard_slots: i64,
    pub unit_space: i64,
    pub max_unit_size: i64,
    pub food_cargo: i64,
    pub food_production: i64,
    pub deut_factor: i64,
    pub torpedo_defense: i64,
    pub upkeep_cost: i64,

    pub description: String,
    /// Encoded slot layout, `"1:<id>;2:<id>;…"`.
    pub modules: String,
    /// Weapon id → mounted count.
    pub weapons: BTreeMap<String, i64>,
    /// Weapon id → overheat cap.
    pub max_heat: BTreeMap<String, i64>,
    /// Space-separated ship flag tokens.
    pub flags: String,

    pub supply_ship: bool,
    pub bounty: u64,
    pub loot_chance: i64,
    pub group_wrap: i64,
    pub emp_loss_chance: f64,
    pub short_range_scanner: bool,
}

impl ShipTypeRecord {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn has_flag(&self, flag: ShipTypeFlag) -> bool {
        self.flags.split_whitespace().any(|t| t == flag.token())
    }
}

// ── Build costs ──

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchRef {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipBuildRecord {
    /// Id of the ship type this record builds.
    pub ship_type: u32,
    pub costs: BTreeMap<ItemId, i64>,
    pub requirements: [Option<ResearchRef>; 3],
    pub energy_cost: i64,
    pub crew: i64,
    pub duration: i64,
    pub shipyard_slots: i64,
    pub race: Race,
    pub flagship: bool,
}

impl ShipBuildRecord {
    pub fn new(ship_type: u32) -> Self {
        Self {
            ship_type,
            costs: BTreeMap::new(),
            requirements: [None, None, None],
            energy_cost: 0,
            crew: 0,
            duration: 0,
            shipyard_slots: 0,
            race: Race::Unknown,
            flagship: false,
        }
    }

    pub fn add_cost(&mut self, item: ItemId, count: i64) {
        *self.costs.entry(item).or_insert(0) += count;
    }

    /// Put `research` into the first free requirement slot. Hands it back when
    /// all three slots are taken.
    pub fn push_requirement(&mut self, research: ResearchRef) -> Result<(), ResearchRef> {
        match self.requirements.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(research);
                Ok(())
            }
            None => Err(research),
        }
    }
}

// ── Weapons ──

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeaponRecord {
    pub id: String,
    pub ap_cost: i64,
    pub energy_cost: i64,
    pub shots: i64,
    pub base_damage: i64,
    pub shield_damage: i64,
    pub sub_damage: i64,
    pub hit_chance_capital: i64,
    pub hit_chance_small: i64,
    pub hit_chance_torpedo: f64,
    pub ammunition: BTreeSet<String>,
    pub flags: BTreeSet<WeaponFlag>,
}

impl WeaponRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

// ── Result ──

/// An unexpected line, reported for operator visibility only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line_no: usize,
    pub line: String,
}

/// Everything extracted from one ship info page.
#[derive(Debug, Clone, Serialize)]
pub struct ShipPage {
    pub ship_type: ShipTypeRecord,
    pub build: ShipBuildRecord,
    pub weapons: BTreeMap<String, WeaponRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Fold a display string into a stable id: lowercase, umlauts spelled out,
/// runs of anything non-alphanumeric collapsed into a single `_`.
pub fn normalize_id(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_sep = false;
    for ch in s.chars().flat_map(char::to_lowercase) {
        let folded = match ch {
            'ä' => "ae",
            'ö' => "oe",
            'ü' => "ue",
            'ß' => "ss",
            c if c.is_alphanumeric() => {
                if pending_sep && !out.is_empty() {
                    out.push('_');
                }
                pending_sep = false;
                out.push(c);
                continue;
            }
            _ => {
                pending_sep = true;
                continue;
            }
        };
        if pending_sep && !out.is_empty() {
            out.push('_');
        }
        pending_sep = false;
        out.push_str(folded);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_weapon_names() {
        assert_eq!(normalize_id("Laser Mk1"), "laser_mk1");
        assert_eq!(normalize_id("  Schwerer Laser (Typ-2) "), "schwerer_laser_typ_2");
        assert_eq!(normalize_id("Größe"), "groesse");
        assert_eq!(normalize_id("Jäger-Torpedo"), "jaeger_torpedo");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["Laser Mk1", "Schild / Panzerung", "Überhitzung!!", "a__b"] {
            let once = normalize_id(s);
            assert_eq!(normalize_id(&once), once);
        }
    }

    #[test]
    fn requirement_slots_fill_in_order() {
        let mut build = ShipBuildRecord::new(7);
        for id in 1..=3 {
            let r = ResearchRef { id, name: format!("R{}", id) };
            assert!(build.push_requirement(r).is_ok());
        }
        let fourth = ResearchRef { id: 4, name: "R4".into() };
        assert_eq!(build.push_requirement(fourth.clone()), Err(fourth));
        let ids: Vec<u32> = build.requirements.iter().flatten().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn costs_accumulate() {
        let mut build = ShipBuildRecord::new(1);
        let uran: ItemId = "i3|0|0".parse().unwrap();
        build.add_cost(uran.clone(), 10);
        build.add_cost(uran.clone(), 5);
        assert_eq!(build.costs.get(&uran), Some(&15));
    }
}
