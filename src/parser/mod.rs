pub mod anchors;
pub mod bbcode;
pub mod derive;
pub mod extract;
pub mod sections;
pub mod unknown;

use std::io::{BufRead, Cursor};

use serde::Serialize;
use thiserror::Error;

pub use anchors::ExtractionError;
pub use derive::Heuristics;

use crate::model::ShipPage;
use extract::{Extraction, Step};
use sections::Section;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read page: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line_no}: {source} (line: {line:?})")]
    Extraction {
        line_no: usize,
        line: String,
        #[source]
        source: ExtractionError,
    },
}

/// Extract the ship type and build record from one ship info page.
///
/// Every call starts from scratch; nothing is kept between pages.
pub fn parse_page<R: BufRead>(reader: R, ship_id: u32, heuristics: &Heuristics) -> Result<ShipPage, ParseError> {
    let mut ex = Extraction::new(ship_id);
    for line in reader.lines() {
        let line = line?;
        step(&mut ex, line.trim())?;
    }
    Ok(derive::finish(ex, heuristics))
}

pub fn parse_str(page: &str, ship_id: u32, heuristics: &Heuristics) -> Result<ShipPage, ParseError> {
    parse_page(Cursor::new(page), ship_id, heuristics)
}

/// How one page line was handled, for layout debugging.
#[derive(Debug, Clone, Serialize)]
pub struct TraceLine {
    pub line_no: usize,
    /// Section the line was read in.
    pub section: Section,
    pub step: Step,
    pub line: String,
}

/// Run the extractor over a page and report what happened to every line.
pub fn trace_page<R: BufRead>(reader: R, ship_id: u32) -> Result<Vec<TraceLine>, ParseError> {
    let mut ex = Extraction::new(ship_id);
    let mut trace = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        let section = ex.section;
        let step = step(&mut ex, line)?;
        trace.push(TraceLine {
            line_no: ex.line_no(),
            section,
            step,
            line: line.to_string(),
        });
    }
    Ok(trace)
}

fn step(ex: &mut Extraction, line: &str) -> Result<Step, ParseError> {
    ex.step(line).map_err(|source| ParseError::Extraction {
        line_no: ex.line_no(),
        line: line.to_string(),
        source,
    })
}

// ── Tests ──
