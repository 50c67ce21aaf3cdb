use super::Rule;
use crate::parser::anchors::{before, between, to_int};
use crate::parser::sections::Section;

pub const RULES: &[Rule] = &[
    Rule {
        name: "flight_cost",
        scope: Some(Section::Propulsion),
        applies: |_, line| line.contains("Flugkosten<br>"),
        apply: |ex, line| {
            ex.ship.flight_cost = to_int(before(line, " Flugkosten<br>")?)?;
            ex.ship.heat = to_int(between(line, Some("<br>"), Some(" Überhitzung<br><br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "size",
        scope: Some(Section::Propulsion),
        applies: |_, line| line.starts_with("Größe/Beweglichkeit:"),
        apply: |ex, line| {
            ex.ship.size = to_int(between(line, Some("Größe/Beweglichkeit:"), Some("<br>"))?)?;
            Ok(())
        },
    },
    Rule {
        name: "sensor_range",
        scope: Some(Section::Propulsion),
        applies: |_, line| line.starts_with("Sensorreichweite:"),
        apply: |ex, line| {
            // The page shows the range one higher than the game stores it.
            let shown = to_int(between(line, Some("Sensorreichweite:"), Some("<br><br>"))?)?;
            ex.ship.sensor_range = shown - 1;
            Ok(())
        },
    },
];
