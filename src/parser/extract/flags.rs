use super::Rule;
use crate::model::ShipTypeFlag;
use crate::parser::sections::Section;

pub const RULES: &[Rule] = &[
    Rule {
        name: "ship_flag",
        scope: None,
        applies: |_, line| ShipTypeFlag::from_line(line).is_some(),
        apply: |ex, line| {
            ex.section = Section::Flags;
            // Label and description both name the flag; keep it once.
            if let Some(flag) = ShipTypeFlag::from_line(line) {
                if !ex.flags.contains(&flag) {
                    ex.flags.push(flag);
                }
            }
            Ok(())
        },
    },
    // Free-form flag explanations between the flag line and `</span>`.
    Rule {
        name: "flag_text",
        scope: Some(Section::Flags),
        applies: |ex, line| !ex.section.closed_by(line),
        apply: |_, _| Ok(()),
    },
];
