use std::collections::HashMap;

use crate::model::event::EventAttribute;

/// Attributes whose key appears in `attribute_order` come first, in that
/// order, followed by the remaining attributes in their original order.
///
/// A configured key keeps only the last attribute carrying it; configured
/// keys with no attribute are skipped.
pub fn segment_and_sort_attributes_for_tooltip<'e>(
    attributes: &'e [EventAttribute],
    attribute_order: &[String],
) -> Vec<&'e EventAttribute> {
    let (first, rest): (Vec<&EventAttribute>, Vec<&EventAttribute>) = attributes
        .iter()
        .partition(|a| attribute_order.contains(&a.key));

    let by_key: HashMap<&str, &EventAttribute> =
        first.into_iter().map(|a| (a.key.as_str(), a)).collect();

    attribute_order
        .iter()
        .filter_map(|k| by_key.get(k.as_str()).copied())
        .chain(rest)
        .collect()
}

pub fn format_tooltip(attributes: &[&EventAttribute]) -> String {
    attributes
        .iter()
        .map(|a| format!("{}: {}", a.key, a.value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tooltip.rs"]
mod tests;
