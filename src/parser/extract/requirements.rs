use super::{Extraction, Rule};
use crate::model::{Race, ResearchRef};
use crate::parser::anchors::{between, to_int, ExtractionError};
use crate::parser::sections::Section;

const RESEARCH_HREF: &str =
    "href=\"https://ds2.drifting-souls.net/ds?module=forschinfo&amp;action=default&amp;res=";

pub const RULES: &[Rule] = &[
    Rule {
        name: "research",
        scope: Some(Section::Requirements),
        applies: |_, line| {
            ["<a class=\"ok\" ", "<a class=\"error\" "]
                .iter()
                .any(|p| line.strip_prefix(p).is_some_and(|rest| rest.starts_with(RESEARCH_HREF)))
        },
        apply: apply_research,
    },
    Rule {
        name: "race",
        scope: Some(Section::Requirements),
        applies: |_, line| line.starts_with("Rasse: "),
        apply: |ex, line| {
            ex.build.race = Race::from_name(between(line, Some("Rasse: "), Some("<br>"))?);
            Ok(())
        },
    },
];

fn apply_research(ex: &mut Extraction, line: &str) -> Result<(), ExtractionError> {
    let raw_id = between(line, Some(RESEARCH_HREF), Some("\">"))?;
    let id = u32::try_from(to_int(raw_id)?)
        .map_err(|_| ExtractionError::InvalidNumber(raw_id.to_string()))?;
    let name = between(line, Some("\">"), Some("</a><br>"))?.to_string();
    if ex.build.push_requirement(ResearchRef { id, name }).is_err() {
        ex.report(line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::Step;

    fn research(class: &str, id: u32, name: &str) -> String {
        format!(
            "<a class=\"{}\" href=\"https://ds2.drifting-souls.net/ds?module=forschinfo&amp;action=default&amp;res={}\">{}</a><br>",
            class, id, name
        )
    }

    #[test]
    fn requirements_and_race() {
        let mut ex = Extraction::new(5);
        ex.step("<h3>Vorrausetzungen</h3>").unwrap();
        ex.step(&research("ok", 12, "Laser")).unwrap();
        ex.step(&research("error", 40, "Schwere Panzerung")).unwrap();
        ex.step("Rasse: Vasudaner<br>").unwrap();

        let ids: Vec<_> = ex.build.requirements.iter().flatten().map(|r| (r.id, r.name.as_str())).collect();
        assert_eq!(ids, vec![(12, "Laser"), (40, "Schwere Panzerung")]);
        assert!(ex.build.requirements[2].is_none());
        assert_eq!(ex.build.race, Race::Vasudaner);
        assert_eq!(ex.section, Section::None);
    }

    #[test]
    fn fourth_requirement_is_a_diagnostic() {
        let mut ex = Extraction::new(5);
        ex.step("<h3>Vorrausetzungen</h3>").unwrap();
        let steps: Vec<Step> = (1..=4).map(|id| ex.step(&research("ok", id, "R")).unwrap()).collect();
        assert_eq!(steps[2], Step::Rule("research"));
        assert_eq!(steps[3], Step::Rejected("research"));
        assert_eq!(ex.section, Section::Requirements);
        assert_eq!(ex.build.requirements.iter().flatten().count(), 3);
        assert_eq!(ex.diagnostics.len(), 1);
        assert_eq!(ex.diagnostics[0].line_no, 5);
    }

    #[test]
    fn unknown_race() {
        let mut ex = Extraction::new(5);
        ex.step("<h3>Vorrausetzungen</h3>").unwrap();
        ex.step("Rasse: Borg<br>").unwrap();
        assert_eq!(ex.build.race.id(), -1);
    }
}
