use super::{Extraction, Rule};
use crate::model::ItemId;
use crate::parser::anchors::{after, between, to_int, ExtractionError};
use crate::parser::sections::Section;

fn row_value(line: &str) -> Result<i64, ExtractionError> {
    to_int(between(line, Some("alt=\"\">"), Some("</td></tr>"))?)
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "resource_cost",
        scope: Some(Section::BuildCost),
        applies: |_, line| line.starts_with("<td class=\"noBorderX\" align=\"left\"><img src="),
        apply: apply_resource,
    },
    Rule {
        name: "energy_cost",
        scope: Some(Section::BuildCost),
        applies: |_, line| line.starts_with("<tr><td class=\"noBorderX\">Energie</td>"),
        apply: |ex, line| {
            ex.build.energy_cost = row_value(line)?;
            Ok(())
        },
    },
    Rule {
        name: "build_crew",
        scope: Some(Section::BuildCost),
        applies: |_, line| line.starts_with("<tr><td class=\"noBorderX\">Besatzung</td>"),
        apply: |ex, line| {
            ex.build.crew = row_value(line)?;
            Ok(())
        },
    },
    Rule {
        name: "build_duration",
        scope: Some(Section::BuildCost),
        applies: |_, line| line.starts_with("<tr><td class=\"noBorderX\">Dauer</td>"),
        apply: |ex, line| {
            ex.build.duration = row_value(line)?;
            Ok(())
        },
    },
    Rule {
        name: "build_shipyard_slots",
        scope: Some(Section::BuildCost),
        applies: |_, line| line.starts_with("<tr><td class=\"noBorderX\">Werftslots</td>"),
        apply: |ex, line| {
            ex.build.shipyard_slots = row_value(line)?;
            Ok(())
        },
    },
];

fn apply_resource(ex: &mut Extraction, line: &str) -> Result<(), ExtractionError> {
    let link = after(line, "<a class=\"tooltip forschinfo\"")?;
    let count = to_int(between(link, Some("\">"), Some("<span class="))?)?;
    let item: ItemId = between(link, Some("ds-item-id=\""), Some("\"><img src="))?.parse()?;
    ex.build.add_cost(item, count);
    Ok(())
}
