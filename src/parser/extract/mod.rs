pub mod costs;
pub mod description;
pub mod equipment;
pub mod flags;
pub mod header;
pub mod modules;
pub mod propulsion;
pub mod reactor;
pub mod requirements;
pub mod stats;
pub mod weapons;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use super::anchors::ExtractionError;
use super::sections::Section;
use super::unknown;
use crate::model::{Diagnostic, ShipBuildRecord, ShipTypeFlag, ShipTypeRecord, WeaponRecord};

/// One line pattern and what to do with it.
///
/// `scope` restricts the rule to a section; `None` means the rule applies
/// wherever the line shows up.
pub struct Rule {
    pub name: &'static str,
    pub scope: Option<Section>,
    pub applies: fn(&Extraction, &str) -> bool,
    pub apply: fn(&mut Extraction, &str) -> Result<(), ExtractionError>,
}

impl Rule {
    fn matches(&self, ex: &Extraction, line: &str) -> bool {
        self.scope.map_or(true, |s| s == ex.section) && (self.applies)(ex, line)
    }
}

/// Rule tables in priority order. The first rule that accepts a line wins.
const RULE_TABLES: &[&[Rule]] = &[
    header::RULES,
    reactor::RULES,
    requirements::RULES,
    costs::RULES,
    weapons::RULES,
    propulsion::RULES,
    equipment::RULES,
    modules::RULES,
    stats::RULES,
    flags::RULES,
    description::RULES,
];

pub fn rules() -> impl Iterator<Item = &'static Rule> {
    RULE_TABLES.iter().flat_map(|table| table.iter())
}

/// What happened to a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum Step {
    Opened(Section),
    Rule(&'static str),
    /// The rule recognized the line but could not use it.
    Rejected(&'static str),
    Closed(Section),
    Boilerplate,
    Unknown,
}

/// In-progress state of one page extraction.
pub struct Extraction {
    pub section: Section,
    pub ship: ShipTypeRecord,
    pub build: ShipBuildRecord,
    pub weapons: BTreeMap<String, WeaponRecord>,
    /// Normalized name of the weapon whose stat block / count comes next.
    pub pending_weapon: Option<String>,
    pub flags: Vec<ShipTypeFlag>,
    /// Raw description markup, one page line per chunk.
    pub description: String,
    pub diagnostics: Vec<Diagnostic>,
    line_no: usize,
    rejected: bool,
}

impl Extraction {
    pub fn new(ship_id: u32) -> Self {
        Self {
            section: Section::None,
            ship: ShipTypeRecord::new(ship_id),
            build: ShipBuildRecord::new(ship_id),
            weapons: BTreeMap::new(),
            pending_weapon: None,
            flags: Vec::new(),
            description: String::new(),
            diagnostics: Vec::new(),
            line_no: 0,
            rejected: false,
        }
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Consume one trimmed line.
    pub fn step(&mut self, line: &str) -> Result<Step, ExtractionError> {
        self.line_no += 1;

        if let Some(next) = Section::opened_by(line) {
            debug!(line_no = self.line_no, from = ?self.section, to = ?next, "section opened");
            self.section = next;
            return Ok(Step::Opened(next));
        }

        let section = self.section;
        if let Some(rule) = rules().find(|r| r.matches(self, line)) {
            self.rejected = false;
            (rule.apply)(self, line)?;
            if self.rejected {
                return Ok(Step::Rejected(rule.name));
            }
            // Only a section's own rules may end it; a global rule firing
            // inside a section leaves it open.
            if rule.scope == Some(section) && self.section == section && section.closed_by(line) {
                self.close(section);
            }
            return Ok(Step::Rule(rule.name));
        }

        if section.closed_by(line) {
            self.close(section);
            return Ok(Step::Closed(section));
        }

        Ok(self.unexpected(line))
    }

    fn close(&mut self, section: Section) {
        debug!(line_no = self.line_no, ?section, "section closed");
        self.section = Section::None;
    }

    /// Route a line nothing else wanted through the boilerplate allow-list.
    fn unexpected(&mut self, line: &str) -> Step {
        if unknown::is_boilerplate(line) {
            return Step::Boilerplate;
        }
        self.push_diagnostic(line);
        Step::Unknown
    }

    /// Record a line a rule matched but could not use. Skips the
    /// allow-list: short `<td ` rows would otherwise vanish.
    pub fn report(&mut self, line: &str) {
        self.rejected = true;
        self.push_diagnostic(line);
    }

    fn push_diagnostic(&mut self, line: &str) {
        warn!(line_no = self.line_no, "Unknown line: {}", line);
        self.diagnostics.push(Diagnostic {
            line_no: self.line_no,
            line: line.to_string(),
        });
    }
}
