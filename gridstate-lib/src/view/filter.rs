//! Search and structural filter predicates.
//!
//! Both predicates are independent and AND-composed: a row is in the view
//! iff it matches the search query and every active filter selection.
//! Either predicate alone is order-independent with the other.

use std::collections::BTreeSet;
use std::collections::HashMap;

use crate::model::FieldSpec;
use crate::model::Record;

/// Per-field chosen-value sets for structural filtering.
///
/// Keys are field keys; values are the raw strings the filter controls
/// emit. A field absent from the map, or present with an empty set,
/// imposes no constraint ("no selection = unconstrained"). Unknown field
/// keys are ignored when matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelections {
    selections: HashMap<String, BTreeSet<String>>,
}

impl FilterSelections {
    /// Creates an empty, unconstrained selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection for one field.
    pub fn select(
        mut self,
        field: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.set(field, values);
        self
    }

    /// Replaces the selection for one field in place.
    pub fn set(
        &mut self,
        field: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.selections
            .insert(field.into(), values.into_iter().map(Into::into).collect());
    }

    /// Removes the selection for one field.
    pub fn clear_field(&mut self, field: &str) {
        self.selections.remove(field);
    }

    /// Removes all selections.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Returns `true` if no field imposes a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.selections.values().all(BTreeSet::is_empty)
    }

    /// Returns the selected values for a field, if any.
    pub fn values(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.selections.get(field)
    }

    /// Returns `(field key, comma-joined values)` for every active field.
    ///
    /// This feeds the active-filter badge strip; fields with empty
    /// selections are skipped.
    pub fn summary(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self
            .selections
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(key, values)| {
                let joined = values.iter().cloned().collect::<Vec<_>>().join(", ");
                (key.clone(), joined)
            })
            .collect();
        entries.sort();
        entries
    }

    /// Returns `true` if the record passes every active selection.
    ///
    /// The record's value for each constrained field resolves through the
    /// field's accessor when one is configured, then coerces to its text
    /// form for set membership. Keys without a matching field spec fall
    /// back to direct record lookup.
    pub fn matches(&self, record: &Record, fields: &[FieldSpec]) -> bool {
        self.selections.iter().all(|(key, chosen)| {
            if chosen.is_empty() {
                return true;
            }
            let text = match fields.iter().find(|f| &f.key == key) {
                Some(spec) => spec.text_of(record),
                None => record.text(key),
            };
            chosen.contains(&text)
        })
    }
}

/// Returns `true` if the record matches a search query.
///
/// Case-insensitive substring match over the given searchable keys; with
/// no searchable keys configured, every field of the record is scanned.
/// A blank query matches everything.
pub fn matches_query(record: &Record, fields: &[FieldSpec], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let searchable: Vec<&FieldSpec> = fields.iter().filter(|f| f.searchable).collect();
    if searchable.is_empty() {
        // Whole-record fallback scan
        return record
            .fields()
            .values()
            .any(|value| value.to_text().to_lowercase().contains(&needle));
    }

    searchable
        .iter()
        .any(|spec| spec.text_of(record).to_lowercase().contains(&needle))
}
