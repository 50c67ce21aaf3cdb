use super::Rule;
use crate::parser::sections::Section;

pub const RULES: &[Rule] = &[Rule {
    name: "description",
    scope: Some(Section::Description),
    applies: |ex, line| !ex.section.closed_by(line),
    apply: |ex, line| {
        ex.description.push_str(line);
        ex.description.push(' ');
        Ok(())
    },
}];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::Extraction;

    #[test]
    fn collects_until_cell_end() {
        let mut ex = Extraction::new(1);
        for line in [
            "<h3>Beschreibung</h3>",
            "Ein schneller Kreuzer.",
            "<b>Achtung:</b> teuer.",
            "</td>",
            "Nachgeschobener Text",
        ] {
            ex.step(line).unwrap();
        }
        assert_eq!(ex.description, "Ein schneller Kreuzer. <b>Achtung:</b> teuer. ");
        assert_eq!(ex.section, Section::None);
        assert_eq!(ex.diagnostics.len(), 1);
    }

    #[test]
    fn stat_lines_win_over_description() {
        let mut ex = Extraction::new(1);
        ex.step("<h3>Beschreibung</h3>").unwrap();
        ex.step("Panzerung:5<br>").unwrap();
        assert_eq!(ex.ship.armor, 5);
        assert!(ex.description.is_empty());
        assert_eq!(ex.section, Section::Description);
    }
}
