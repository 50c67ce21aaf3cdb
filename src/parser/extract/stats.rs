use super::Rule;
use crate::parser::anchors::{before, between, to_int};

// These lines are unique on the page, so they are matched in any section.
pub const RULES: &[Rule] = &[
    Rule {
        name: "shipyard_slots",
        scope: None,
        applies: |_, line| line.ends_with("Werftslots<br>"),
        apply: |ex, line| {
            ex.ship.shipyard_slots = to_int(before(line, "Werftslots<br>")?)?;
            Ok(())
        },
    },
    Rule {
        name: "hull",
        scope: None,
        applies: |_, line| line.starts_with("<br>Hüllenstärke: "),
        apply: |ex, line| {
            ex.ship.hull = to_int(between(line, Some("Hüllenstärke: "), Some("<br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "ablative_armor",
        scope: None,
        applies: |_, line| line.starts_with("Ablative Panzerung: "),
        apply: |ex, line| {
            ex.ship.ablative_armor = to_int(between(line, Some("Ablative Panzerung: "), Some("<br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "armor",
        scope: None,
        applies: |_, line| line.starts_with("Panzerung:"),
        apply: |ex, line| {
            ex.ship.armor = to_int(between(line, Some("Panzerung:"), Some("<br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "shields",
        scope: None,
        applies: |_, line| line.starts_with("Schildstärke:"),
        apply: |ex, line| {
            ex.ship.shields = to_int(between(line, Some("Schildstärke:"), Some("<br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "unit_space",
        scope: None,
        applies: |_, line| line.starts_with("Platz für Einheiten:"),
        apply: |ex, line| {
            ex.ship.unit_space = to_int(between(line, Some("Platz für Einheiten:"), Some("<br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "max_unit_size",
        scope: None,
        applies: |_, line| line.starts_with("Maximale Einheitengröße:"),
        apply: |ex, line| {
            ex.ship.max_unit_size =
                to_int(between(line, Some("Maximale Einheitengröße:"), Some("<br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "food_cargo",
        scope: None,
        applies: |_, line| line.starts_with("Nahrungsspeicher:"),
        apply: |ex, line| {
            ex.ship.food_cargo = to_int(between(line, Some("Nahrungsspeicher:"), Some("<br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "deut_factor",
        scope: None,
        applies: |_, line| line.starts_with("Tanker: <img"),
        apply: |ex, line| {
            ex.ship.deut_factor = to_int(between(line, Some("Deuterium\">"), Some(" für <img"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "food_production",
        scope: None,
        applies: |_, line| line.starts_with("Produziert: <img") && line.contains("alt=\"Nahrung\">"),
        apply: |ex, line| {
            ex.ship.food_production = to_int(between(line, Some("alt=\"Nahrung\">"), Some("<br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "torpedo_defense",
        scope: None,
        applies: |_, line| line.starts_with("Torpedoabwehr:"),
        apply: |ex, line| {
            ex.ship.torpedo_defense = to_int(between(line, Some("Torpedoabwehr:"), Some("%<br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "upkeep_cost",
        scope: None,
        applies: |_, line| line.starts_with("Betriebskosten: "),
        apply: |ex, line| {
            ex.ship.upkeep_cost = to_int(between(line, Some("Betriebskosten: "), Some("RE"))?)?;
            Ok(())
        },
    },
];

#[cfg(test)]
mod tests {
    use crate::parser::extract::Extraction;

    #[test]
    fn stat_lines() {
        let mut ex = Extraction::new(1);
        for line in [
            "3 Werftslots<br>",
            "<br>Hüllenstärke: 1500<br>",
            "Ablative Panzerung: 200<br>",
            "Panzerung:12<br>",
            "Schildstärke:800<br>",
            "Platz für Einheiten:40<br>",
            "Maximale Einheitengröße:3<br>",
            "Nahrungsspeicher:100<br>",
            "Tanker: <img src=\"./Schiffinfo_files/deut.gif\" alt=\"Deuterium\">5 für <img src=\"./Schiffinfo_files/energie.gif\" alt=\"Energie\">1<br>",
            "Produziert: <img src=\"./Schiffinfo_files/nahrung.gif\" alt=\"Nahrung\">25<br>",
            "Torpedoabwehr:35%<br>",
            "Betriebskosten: 120RE<br>",
        ] {
            ex.step(line).unwrap();
        }
        let s = &ex.ship;
        assert_eq!(s.shipyard_slots, 3);
        assert_eq!((s.hull, s.ablative_armor, s.armor, s.shields), (1500, 200, 12, 800));
        assert_eq!((s.unit_space, s.max_unit_size, s.food_cargo), (40, 3, 100));
        assert_eq!((s.deut_factor, s.food_production), (5, 25));
        assert_eq!((s.torpedo_defense, s.upkeep_cost), (35, 120));
        assert!(ex.diagnostics.is_empty());
    }

    #[test]
    fn ablative_armor_is_not_armor() {
        let mut ex = Extraction::new(1);
        ex.step("Ablative Panzerung: 200<br>").unwrap();
        assert_eq!(ex.ship.ablative_armor, 200);
        assert_eq!(ex.ship.armor, 0);
    }

    #[test]
    fn production_of_other_goods_is_unknown() {
        let mut ex = Extraction::new(1);
        ex.step("Produziert: <img src=\"./Schiffinfo_files/erz.gif\" alt=\"Erz\">5<br>").unwrap();
        assert_eq!(ex.ship.food_production, 0);
        assert_eq!(ex.diagnostics.len(), 1);
    }
}
