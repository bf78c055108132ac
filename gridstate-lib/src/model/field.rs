//! Field schema types

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::Record;
use super::Value;

/// The rendering/coercion class of a field.
///
/// The type determines how a presentation layer renders the cell and how
/// an edit form collects it; it does not constrain the stored `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free text input.
    Text,
    /// Numeric input.
    Number,
    /// Single choice from a fixed option list.
    Select,
    /// Checkbox.
    Boolean,
    /// Calendar date.
    Date,
    /// Date and time.
    DateTime,
    /// Multi-line text input.
    TextArea,
    /// Image URL rendered as a thumbnail.
    Image,
    /// URL rendered as a hyperlink.
    Link,
}

/// One choice of a select field.
///
/// `value` is the canonical stored representation and is compared as a
/// string, since filter controls emit strings. `class` is an optional
/// presentation hint (the source styles option badges with it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Canonical stored value.
    pub value: String,
    /// Display text.
    pub label: String,
    /// Optional presentation hint (e.g. a badge CSS class).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl SelectOption {
    /// Creates a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            class: None,
        }
    }

    /// Sets the presentation hint.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// An accessor override resolving a field's value from a record.
///
/// Used for values absent from the flat record (nested or computed). Must
/// be pure; it receives the record and nothing else.
pub type FieldAccessor = Arc<dyn Fn(&Record) -> Value + Send + Sync>;

/// Static metadata for one table column.
///
/// Supplied once at controller construction and immutable thereafter.
/// The participation gates control which controller operations the field
/// takes part in; all default to `true`.
///
/// # Example
///
/// ```
/// use gridstate_lib::model::{FieldSpec, FieldType, SelectOption};
///
/// let level = FieldSpec::new("level", "Member level", FieldType::Select)
///     .searchable(false)
///     .options([
///         SelectOption::new("0", "None"),
///         SelectOption::new("1", "Level 1").with_class("bg-primary"),
///     ]);
/// ```
#[derive(Clone)]
pub struct FieldSpec {
    /// Unique identifier within the record.
    pub key: String,
    /// Display name.
    pub label: String,
    /// Rendering/coercion class.
    pub field_type: FieldType,
    /// Participates in substring search.
    pub searchable: bool,
    /// Participates in column sorting.
    pub sortable: bool,
    /// Participates in structural filtering (also requires options).
    pub filterable: bool,
    /// Shown in edit forms.
    pub editable: bool,
    /// Shown in add forms.
    pub addable: bool,
    /// Shown as a column.
    pub visible: bool,
    /// Choices for select fields.
    pub options: Vec<SelectOption>,
    /// Accessor override for nested/computed values.
    pub accessor: Option<FieldAccessor>,
    /// Edit-form constraint, passed through to the form collaborator.
    pub required: bool,
    /// Message shown by the form collaborator when `required` fails.
    pub validation_message: Option<String>,
}

impl FieldSpec {
    /// Creates a new field spec with all gates open.
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            searchable: true,
            sortable: true,
            filterable: true,
            editable: true,
            addable: true,
            visible: true,
            options: Vec::new(),
            accessor: None,
            required: false,
            validation_message: None,
        }
    }

    /// Sets whether the field participates in search.
    pub fn searchable(mut self, yes: bool) -> Self {
        self.searchable = yes;
        self
    }

    /// Sets whether the field participates in sorting.
    pub fn sortable(mut self, yes: bool) -> Self {
        self.sortable = yes;
        self
    }

    /// Sets whether the field participates in filtering.
    pub fn filterable(mut self, yes: bool) -> Self {
        self.filterable = yes;
        self
    }

    /// Sets whether the field appears in edit forms.
    pub fn editable(mut self, yes: bool) -> Self {
        self.editable = yes;
        self
    }

    /// Sets whether the field appears in add forms.
    pub fn addable(mut self, yes: bool) -> Self {
        self.addable = yes;
        self
    }

    /// Sets whether the field is rendered as a column.
    pub fn visible(mut self, yes: bool) -> Self {
        self.visible = yes;
        self
    }

    /// Sets the select options.
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Sets the accessor override for nested/computed values.
    pub fn accessor(mut self, accessor: impl Fn(&Record) -> Value + Send + Sync + 'static) -> Self {
        self.accessor = Some(Arc::new(accessor));
        self
    }

    /// Marks the field required, with the message the form shows on failure.
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.validation_message = Some(message.into());
        self
    }

    /// Resolves this field's value from a record.
    ///
    /// The accessor takes precedence over direct key lookup; a missing key
    /// resolves to `Value::Null`.
    pub fn value_of(&self, record: &Record) -> Value {
        match &self.accessor {
            Some(accessor) => accessor(record),
            None => record.get(&self.key).cloned().unwrap_or(Value::Null),
        }
    }

    /// Resolves this field's value as its canonical text form.
    pub fn text_of(&self, record: &Record) -> String {
        self.value_of(record).to_text()
    }

    /// Looks up the display option for a stored value, if any.
    pub fn option_label(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|opt| opt.value == value)
    }

    /// Returns `true` if the field takes part in structural filtering.
    ///
    /// Filtering needs a closed value domain, so a filterable field
    /// without options is treated as not filterable.
    pub fn is_filter_field(&self) -> bool {
        self.filterable && !self.options.is_empty()
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("field_type", &self.field_type)
            .field("searchable", &self.searchable)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("editable", &self.editable)
            .field("addable", &self.addable)
            .field("visible", &self.visible)
            .field("options", &self.options)
            .field("accessor", &self.accessor.as_ref().map(|_| "<fn>"))
            .field("required", &self.required)
            .field("validation_message", &self.validation_message)
            .finish()
    }
}
