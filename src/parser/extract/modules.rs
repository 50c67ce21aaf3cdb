use super::Rule;
use crate::model::normalize_id;
use crate::parser::sections::Section;

pub const RULES: &[Rule] = &[Rule {
    name: "module_slots",
    scope: Some(Section::Modules),
    applies: |_, line| line.contains("<br>"),
    apply: |ex, line| {
        ex.ship.modules = encode(slot_labels(line));
        Ok(())
    },
}];

/// Raw slot labels, one per `<br>`-terminated chunk. Text after the last
/// `<br>` is not a slot.
pub fn slot_labels(line: &str) -> impl Iterator<Item = &str> {
    let mut chunks: Vec<&str> = line.split("<br>").collect();
    chunks.pop();
    chunks.into_iter()
}

/// Number the labels from 1 and encode them as `"1:<id>;2:<id>"`.
pub fn encode<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| format!("{}:{}", i + 1, normalize_id(label)))
        .collect::<Vec<_>>()
        .join(";")
}

/// Slot number and id pairs from an encoded layout.
pub fn decode(encoded: &str) -> Vec<(usize, String)> {
    encoded
        .split(';')
        .filter(|s| !s.is_empty())
        .filter_map(|slot| {
            let (n, id) = slot.split_once(':')?;
            Some((n.parse().ok()?, id.to_string()))
        })
        .collect()
}
