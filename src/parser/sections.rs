use serde::Serialize;

/// Which part of the ship info page the current line belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    None,
    Reactor,
    Requirements,
    BuildCost,
    Weapons,
    Propulsion,
    Equipment,
    Modules,
    Flags,
    Description,
}

impl Section {
    /// Section started by a heading line. The flag section has no heading;
    /// it is entered by the first flag line (see `extract::flags`).
    pub fn opened_by(line: &str) -> Option<Section> {
        match line {
            "<h3>Reaktorwerte</h3>" => Some(Section::Reactor),
            "<h3>Vorrausetzungen</h3>" => Some(Section::Requirements),
            "<h3>Produktionskosten</h3>" => Some(Section::BuildCost),
            "<h3>Bewaffnung</h3>" => Some(Section::Weapons),
            "<h3>Antrieb</h3>" => Some(Section::Propulsion),
            "<h3>Ausstattung</h3>" => Some(Section::Equipment),
            "<h1>Modulsteckplätze</h1>" => Some(Section::Modules),
            "<h3>Beschreibung</h3>" => Some(Section::Description),
            _ => None,
        }
    }

    /// Whether `line` is the last line of this section.
    pub fn closed_by(self, line: &str) -> bool {
        match self {
            Section::None | Section::Propulsion => false,
            Section::Reactor => line.ends_with("</td><td class=\"noBorderX\">maximal</td></tr>"),
            Section::Requirements => line.starts_with("Rasse: "),
            Section::BuildCost => line.starts_with("<tr><td class=\"noBorderX\">Werftslots</td>"),
            Section::Weapons => {
                line == "</tbody></table>"
                    || line == "<tbody><tr><td class=\"noBorderX\">-keine-</td></tr>"
            }
            Section::Equipment => line.contains("Energiespeicher<br>"),
            Section::Modules => line.contains("<br>"),
            Section::Flags => line == "</span>",
            Section::Description => line == "</td>",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_open_sections() {
        let cases = [
            ("<h3>Reaktorwerte</h3>", Section::Reactor),
            ("<h3>Vorrausetzungen</h3>", Section::Requirements),
            ("<h3>Produktionskosten</h3>", Section::BuildCost),
            ("<h3>Bewaffnung</h3>", Section::Weapons),
            ("<h3>Antrieb</h3>", Section::Propulsion),
            ("<h3>Ausstattung</h3>", Section::Equipment),
            ("<h1>Modulsteckplätze</h1>", Section::Modules),
            ("<h3>Beschreibung</h3>", Section::Description),
        ];
        for (line, section) in cases {
            assert_eq!(Section::opened_by(line), Some(section), "{}", line);
        }
    }

    #[test]
    fn module_sub_header_does_not_open() {
        assert_eq!(Section::opened_by("<h3>Modulsteckplätze</h3>"), None);
        assert_eq!(Section::opened_by("Reaktorwerte"), None);
    }

    #[test]
    fn closing_lines() {
        let cases = [
            (Section::Reactor, "<tr><td class=\"noBorderX\">30</td><td class=\"noBorderX\"><img src=\"r.png\" alt=\"\"></td><td class=\"noBorderX\">maximal</td></tr>"),
            (Section::Requirements, "Rasse: GCP<br>"),
            (Section::BuildCost, "<tr><td class=\"noBorderX\">Werftslots</td><td class=\"noBorderX\"><img src=\"w.png\" alt=\"\">2</td></tr>"),
            (Section::Weapons, "</tbody></table>"),
            (Section::Weapons, "<tbody><tr><td class=\"noBorderX\">-keine-</td></tr>"),
            (Section::Equipment, "500 Energiespeicher<br>1000 Cargo<br>20 Kabinen<br>"),
            (Section::Modules, "Waffe<br>Schild<br>"),
            (Section::Flags, "</span>"),
            (Section::Description, "</td>"),
        ];
        for (section, line) in cases {
            assert!(section.closed_by(line), "{:?} should close on {}", section, line);
        }
    }

    #[test]
    fn lines_that_do_not_close() {
        assert!(!Section::Reactor.closed_by("<tr><td class=\"noBorderX\">10</td><td class=\"noBorderX\"><img src=\"u.png\" alt=\"\"></td><td class=\"noBorderX\">Uran</td></tr>"));
        assert!(!Section::Requirements.closed_by("Benötigt: Rasse: GCP"));
        assert!(!Section::Weapons.closed_by("</tbody>"));
        assert!(!Section::Flags.closed_by("</span><br>"));
        assert!(!Section::Description.closed_by("</td></tr>"));
        assert!(!Section::Propulsion.closed_by("</td>"));
        assert!(!Section::None.closed_by("</span>"));
    }
}
