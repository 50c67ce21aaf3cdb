use super::Rule;
use crate::parser::anchors::{before, between, to_int};
use crate::parser::sections::Section;

pub const RULES: &[Rule] = &[
    Rule {
        name: "storage",
        scope: Some(Section::Equipment),
        applies: |_, line| line.contains("Energiespeicher<br>"),
        apply: |ex, line| {
            ex.ship.eps = to_int(before(line, "Energiespeicher<br>")?)?;
            ex.ship.cargo = to_int(between(line, Some("Energiespeicher<br>"), Some("Cargo<br>"))?)?;
            ex.ship.crew = to_int(between(line, Some("Cargo<br>"), Some("Kabinen<br>"))?)?;
            Ok(())
        },
    },
    // Docks are listed under equipment but also show up elsewhere.
    Rule {
        name: "fighter_docks",
        scope: None,
        applies: |_, line| line.ends_with("Jägerdocks<br>"),
        apply: |ex, line| {
            ex.ship.fighter_docks = to_int(before(line, "Jägerdocks<br>")?)?;
            Ok(())
        },
    },
    Rule {
        name: "external_docks",
        scope: None,
        applies: |_, line| line.starts_with("Externe Dockinganlage (Kapazität:"),
        apply: |ex, line| {
            ex.ship.external_docks =
                to_int(between(line, Some("Externe Dockinganlage (Kapazität:"), Some(")<br>"))?)?;
            Ok(())
        },
    },
];
