use super::{Extraction, Rule};
use crate::model::ShipClass;
use crate::parser::anchors::{between, ExtractionError};

const NICKNAME: &str = "<span style=\"color:#FFFFFF;font-weight:bold;\">";
const HIDDEN: &str = "<span class=\"verysmallfont\" style=\"color:red;font-style:italic;font-weight:normal\">unsichtbar</span>";
const CLASS: &str = "<span class=\"verysmallfont\" style=\"font-style:italic\">";

/// Pictures are served from here; the page links a locally saved copy.
const PICTURE_PATH: &str = "data/dynamicContent/";

pub const RULES: &[Rule] = &[
    Rule {
        name: "nickname",
        scope: None,
        applies: |ex, line| ex.ship.nickname.is_empty() && line.starts_with(NICKNAME),
        apply: |ex, line| {
            ex.ship.nickname = between(line, Some(">"), Some("</span><br>"))?.to_string();
            Ok(())
        },
    },
    Rule {
        name: "hidden",
        scope: None,
        applies: |_, line| line == HIDDEN,
        apply: |ex, _| {
            ex.ship.hide = true;
            Ok(())
        },
    },
    Rule {
        name: "ship_class",
        scope: None,
        applies: |ex, line| ex.ship.ship_class == ShipClass::Unknown && line.starts_with(CLASS),
        apply: apply_ship_class,
    },
    Rule {
        name: "picture",
        scope: None,
        applies: |ex, line| {
            ex.ship.picture.is_empty() && line.starts_with("<img src=\"") && line.ends_with(" alt=\"\">")
        },
        apply: |ex, line| {
            let file = between(line, Some("_files/"), Some("\" alt=\""))?;
            ex.ship.picture = format!("{}{}", PICTURE_PATH, file);
            Ok(())
        },
    },
];

fn apply_ship_class(ex: &mut Extraction, line: &str) -> Result<(), ExtractionError> {
    let name = between(line, Some(">"), Some("</span><br>"))?;
    match ShipClass::from_name(name) {
        Some(class) => ex.ship.ship_class = class,
        None => {
            ex.report(line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::Step;

    #[test]
    fn header_block() {
        let mut ex = Extraction::new(3);
        for line in [
            "<span style=\"color:#FFFFFF;font-weight:bold;\">Nebelwolf</span><br>",
            HIDDEN,
            "<span class=\"verysmallfont\" style=\"font-style:italic\">Schwerer Kreuzer</span><br>",
            "<img src=\"./Schiffinfo_files/nebelwolf.png\" alt=\"\">",
        ] {
            ex.step(line).unwrap();
        }
        assert_eq!(ex.ship.nickname, "Nebelwolf");
        assert!(ex.ship.hide);
        assert_eq!(ex.ship.ship_class, ShipClass::SchwererKreuzer);
        assert_eq!(ex.ship.picture, "data/dynamicContent/nebelwolf.png");
    }

    #[test]
    fn only_first_nickname_counts() {
        let mut ex = Extraction::new(3);
        ex.step("<span style=\"color:#FFFFFF;font-weight:bold;\">Erster</span><br>").unwrap();
        let step = ex
            .step("<span style=\"color:#FFFFFF;font-weight:bold;\">Zweiter</span><br>")
            .unwrap();
        assert_eq!(ex.ship.nickname, "Erster");
        assert_eq!(step, Step::Unknown);
    }

    #[test]
    fn unknown_class_is_a_diagnostic() {
        let mut ex = Extraction::new(3);
        let step = ex
            .step("<span class=\"verysmallfont\" style=\"font-style:italic\">Raumwal</span><br>")
            .unwrap();
        assert_eq!(step, Step::Rejected("ship_class"));
        assert_eq!(ex.ship.ship_class, ShipClass::Unknown);
        assert_eq!(ex.diagnostics.len(), 1);
    }

    #[test]
    fn nickname_without_terminator_fails() {
        let mut ex = Extraction::new(3);
        assert!(ex.step("<span style=\"color:#FFFFFF;font-weight:bold;\">Nebelwolf").is_err());
    }
}
