use super::Rule;
use crate::parser::anchors::{between, to_int, ExtractionError};
use crate::parser::sections::Section;

const URANIUM: &str = "</td><td class=\"noBorderX\">Uran</td></tr>";
const DEUTERIUM: &str = "</td><td class=\"noBorderX\">Deuterium</td></tr>";
const ANTIMATTER: &str = "</td><td class=\"noBorderX\">Antimaterie</td></tr>";
const MAXIMUM: &str = "</td><td class=\"noBorderX\">maximal</td></tr>";

fn row_value(line: &str) -> Result<i64, ExtractionError> {
    to_int(between(
        line,
        Some("<tr><td class=\"noBorderX\">"),
        Some("</td><td class=\"noBorderX\"><img"),
    )?)
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "reactor_uranium",
        scope: Some(Section::Reactor),
        applies: |_, line| line.ends_with(URANIUM),
        apply: |ex, line| {
            ex.ship.reactor_uranium = row_value(line)?;
            Ok(())
        },
    },
    Rule {
        name: "reactor_deuterium",
        scope: Some(Section::Reactor),
        applies: |_, line| line.ends_with(DEUTERIUM),
        apply: |ex, line| {
            ex.ship.reactor_deuterium = row_value(line)?;
            Ok(())
        },
    },
    Rule {
        name: "reactor_antimatter",
        scope: Some(Section::Reactor),
        applies: |_, line| line.ends_with(ANTIMATTER),
        apply: |ex, line| {
            ex.ship.reactor_antimatter = row_value(line)?;
            Ok(())
        },
    },
    Rule {
        name: "reactor_max",
        scope: Some(Section::Reactor),
        applies: |_, line| line.ends_with(MAXIMUM),
        apply: |ex, line| {
            ex.ship.reactor_max = row_value(line)?;
            Ok(())
        },
    },
];
