//! Ordering of the derived view.

use std::cmp::Ordering;

use crate::model::FieldSpec;
use crate::model::Record;
use crate::model::Value;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The active sort of a table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Key of the field being sorted.
    pub field: String,
    /// Current direction.
    pub direction: Direction,
}

impl SortState {
    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }
}

/// Compares two cell values for sorting.
///
/// When both operands coerce to finite numbers they compare numerically,
/// so `"10"` lands after `"9"`. Otherwise they compare as lowercased
/// strings by code point, with `Null` as the empty string. Total and
/// deterministic; never panics on mixed types.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        // Finite by construction, so total_cmp and partial_cmp agree
        return x.total_cmp(&y);
    }
    a.to_text().to_lowercase().cmp(&b.to_text().to_lowercase())
}

/// Sorts rows in place per the active sort state.
///
/// A stable sort, so ties keep their filtered order. An unknown field key
/// resolves every cell to `Null` and leaves the order unchanged.
pub fn sort_records(rows: &mut [Record], fields: &[FieldSpec], sort: &SortState) {
    let spec = fields.iter().find(|f| f.key == sort.field);

    rows.sort_by(|a, b| {
        let (va, vb) = match spec {
            Some(spec) => (spec.value_of(a), spec.value_of(b)),
            None => (
                a.get(&sort.field).cloned().unwrap_or(Value::Null),
                b.get(&sort.field).cloned().unwrap_or(Value::Null),
            ),
        };
        let ordering = compare_values(&va, &vb);
        match sort.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;

    fn named(names: &[&str]) -> Vec<Record> {
        names.iter().map(|n| Record::new().set("name", *n)).collect()
    }

    fn name_order(rows: &[Record]) -> Vec<String> {
        rows.iter().map(|r| r.text("name")).collect()
    }

    #[test]
    fn test_numeric_before_string_comparison() {
        assert_eq!(
            compare_values(&Value::from("9"), &Value::from("10")),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&Value::from("b"), &Value::from("A")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_null_sorts_as_empty_string() {
        assert_eq!(
            compare_values(&Value::Null, &Value::from("a")),
            Ordering::Less
        );
        assert_eq!(compare_values(&Value::Null, &Value::Null), Ordering::Equal);
    }

    #[test]
    fn test_sort_ascending_then_descending() {
        let fields = vec![FieldSpec::new("name", "Name", FieldType::Text)];
        let mut rows = named(&["C", "A", "B"]);

        sort_records(&mut rows, &fields, &SortState::asc("name"));
        assert_eq!(name_order(&rows), ["A", "B", "C"]);

        let desc = SortState {
            field: "name".into(),
            direction: Direction::Desc,
        };
        sort_records(&mut rows, &fields, &desc);
        assert_eq!(name_order(&rows), ["C", "B", "A"]);
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let fields = vec![FieldSpec::new("name", "Name", FieldType::Text)];
        let mut rows = named(&["C", "A", "B"]);
        sort_records(&mut rows, &fields, &SortState::asc("nope"));
        assert_eq!(name_order(&rows), ["C", "A", "B"]);
    }

    #[test]
    fn test_sort_uses_accessor() {
        let fields = vec![
            FieldSpec::new("level", "Level", FieldType::Number)
                .accessor(|r| r.get("nested_level").cloned().unwrap_or(Value::Null)),
        ];
        let mut rows = vec![
            Record::new().set("name", "x").set("nested_level", 3i32),
            Record::new().set("name", "y").set("nested_level", 1i32),
        ];
        sort_records(&mut rows, &fields, &SortState::asc("level"));
        assert_eq!(name_order(&rows), ["y", "x"]);
    }
}
