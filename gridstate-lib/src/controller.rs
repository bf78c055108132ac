//! The table controller: dataset ownership, view derivation, CRUD.
//!
//! One controller instance per table. All table state lives inside the
//! instance; two tables on one screen are two independent controllers.
//! The controller renders nothing — [`render`](TableController::render)
//! produces a [`RenderModel`] and a presentation layer takes it from
//! there.

use log::debug;

use crate::error::TableError;
use crate::model::FieldSpec;
use crate::model::Record;
use crate::model::Value;
use crate::presentation::Notifier;
use crate::presentation::Severity;
use crate::presentation::TableHooks;
use crate::remote::RemoteCall;
use crate::view::FilterSelections;
use crate::view::PageInfo;
use crate::view::RenderModel;
use crate::view::SortState;
use crate::view::ViewState;
use crate::view::clamp_page;
use crate::view::derive_rows;
use crate::view::page_info;
use crate::view::page_slice;

// =============================================================================
// Configuration
// =============================================================================

/// Construction-time configuration for a [`TableController`].
///
/// # Example
///
/// ```
/// use gridstate_lib::controller::TableConfig;
/// use gridstate_lib::model::{FieldSpec, FieldType};
///
/// let config = TableConfig::new("id")
///     .field(FieldSpec::new("id", "ID", FieldType::Number).editable(false))
///     .field(FieldSpec::new("name", "Name", FieldType::Text))
///     .items_per_page(20);
/// ```
#[derive(Default)]
pub struct TableConfig {
    /// Column schema, in display order.
    pub fields: Vec<FieldSpec>,
    /// Key of the field that uniquely identifies a record.
    pub id_field: String,
    /// Rows per page; values below 1 are treated as 1.
    pub items_per_page: usize,
    /// Dataset to start with.
    pub initial_data: Vec<Record>,
    /// Per-table customization hooks.
    pub hooks: TableHooks,
    /// Notification sink for backend messages.
    pub notifier: Option<Box<dyn Notifier + Send + Sync>>,
}

impl TableConfig {
    /// Creates a config with the given id field and a page size of 10.
    pub fn new(id_field: impl Into<String>) -> Self {
        Self {
            fields: Vec::new(),
            id_field: id_field.into(),
            items_per_page: 10,
            initial_data: Vec::new(),
            hooks: TableHooks::new(),
            notifier: None,
        }
    }

    /// Appends a field spec.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Sets the whole field schema at once.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    /// Sets the page size.
    pub fn items_per_page(mut self, n: usize) -> Self {
        self.items_per_page = n;
        self
    }

    /// Sets the initial dataset.
    pub fn initial_data(mut self, data: impl IntoIterator<Item = Record>) -> Self {
        self.initial_data = data.into_iter().collect();
        self
    }

    /// Sets the customization hooks.
    pub fn hooks(mut self, hooks: TableHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Sets the notification sink backend messages are surfaced through.
    pub fn notifier(mut self, notifier: impl Notifier + Send + Sync + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }
}

impl std::fmt::Debug for TableConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableConfig")
            .field("fields", &self.fields)
            .field("id_field", &self.id_field)
            .field("items_per_page", &self.items_per_page)
            .field("initial_data", &self.initial_data.len())
            .field("hooks", &self.hooks)
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}

// =============================================================================
// CRUD outcome
// =============================================================================

/// Result of a successful CRUD operation.
///
/// Carries the reconciled record and the backend's pass-through message,
/// and records whether the server or the caller supplied the canonical
/// value.
#[derive(Debug, Clone)]
pub enum CrudOutcome {
    /// A record was added.
    Created {
        /// The record as it now exists in the dataset.
        record: Record,
        /// `true` when the server returned the canonical record.
        from_server: bool,
        /// Backend message for notification.
        message: Option<String>,
    },
    /// A record was updated.
    Updated {
        /// The record as it now exists in the dataset.
        record: Record,
        /// `true` when the server returned the canonical record.
        from_server: bool,
        /// Backend message for notification.
        message: Option<String>,
    },
    /// A record was removed.
    Deleted {
        /// The record that was removed.
        record: Record,
        /// Backend message for notification.
        message: Option<String>,
    },
}

impl CrudOutcome {
    /// Returns the record this outcome settled on.
    pub fn record(&self) -> &Record {
        match self {
            Self::Created { record, .. }
            | Self::Updated { record, .. }
            | Self::Deleted { record, .. } => record,
        }
    }

    /// Returns the backend's pass-through message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Created { message, .. }
            | Self::Updated { message, .. }
            | Self::Deleted { message, .. } => message.as_deref(),
        }
    }

    /// Returns `true` when the canonical record came from the server.
    pub fn from_server(&self) -> bool {
        match self {
            Self::Created { from_server, .. } | Self::Updated { from_server, .. } => *from_server,
            Self::Deleted { .. } => false,
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Owns a dataset and its derived view; the core of the table layer.
///
/// View inputs (search, sort, filters, page) are ephemeral and the
/// filtered row set is recomputed from the source dataset on every
/// change — predicates never stack destructively. The dataset itself
/// changes only through `set_data` and the CRUD operations.
pub struct TableController {
    fields: Vec<FieldSpec>,
    id_field: String,
    items_per_page: usize,
    dataset: Vec<Record>,
    view: ViewState,
    hooks: TableHooks,
    notifier: Option<Box<dyn Notifier + Send + Sync>>,
}

impl TableController {
    /// Creates a controller from a config.
    pub fn new(config: TableConfig) -> Self {
        Self {
            fields: config.fields,
            id_field: config.id_field,
            items_per_page: config.items_per_page.max(1),
            dataset: config.initial_data,
            view: ViewState::new(),
            hooks: config.hooks,
            notifier: config.notifier,
        }
    }

    /// Surfaces a backend pass-through message, when a sink is attached.
    fn notify(&self, message: Option<&str>, severity: Severity) {
        if let (Some(notifier), Some(message)) = (&self.notifier, message) {
            notifier.notify(message, severity);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the configured field schema.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the keys of the fields that participate in search.
    ///
    /// Empty means search falls back to scanning every field of each
    /// record.
    pub fn searchable_keys(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.searchable)
            .map(|f| f.key.as_str())
            .collect()
    }

    /// Returns the fields that participate in structural filtering.
    pub fn filterable_fields(&self) -> Vec<&FieldSpec> {
        self.fields.iter().filter(|f| f.is_filter_field()).collect()
    }

    /// Returns the source dataset, unfiltered.
    pub fn dataset(&self) -> &[Record] {
        &self.dataset
    }

    /// Returns the number of records in the source dataset.
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    /// Returns `true` if the source dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Returns the current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.view.current_page
    }

    /// Returns the current view inputs.
    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Returns the record with the given id, if present.
    pub fn find(&self, id: impl Into<Value>) -> Option<&Record> {
        let id = id.into().to_text();
        self.dataset.iter().find(|r| r.text(&self.id_field) == id)
    }

    fn position_of(&self, id_text: &str) -> Option<usize> {
        self.dataset
            .iter()
            .position(|r| r.text(&self.id_field) == id_text)
    }

    /// Derives the full filtered, sorted row set (all pages).
    pub fn filtered_rows(&self) -> Vec<Record> {
        derive_rows(&self.dataset, &self.fields, &self.view)
    }

    /// Re-clamps the current page against the derived row count.
    fn reclamp_page(&mut self) {
        let count = self.filtered_rows().len();
        self.view.current_page = clamp_page(self.view.current_page, count, self.items_per_page);
    }

    // =========================================================================
    // View operations
    // =========================================================================

    /// Replaces the dataset and returns to page 1.
    ///
    /// Active search, sort, and filters are kept and re-applied to the
    /// new data, so reloading under an active filter stays filtered.
    /// Call [`reset_filters`](Self::reset_filters) first for a clean
    /// slate.
    pub fn set_data(&mut self, records: impl IntoIterator<Item = Record>) {
        self.dataset = records.into_iter().collect();
        self.view.current_page = 1;
        debug!("table data replaced: {} records", self.dataset.len());
    }

    /// Sets the search query and returns to page 1.
    ///
    /// Case-insensitive substring match over the searchable fields; a
    /// blank query clears the search constraint only, leaving structural
    /// filters in force.
    pub fn search(&mut self, query: impl Into<String>) {
        self.view.search_query = query.into();
        self.view.current_page = 1;
    }

    /// Sorts by a field, toggling direction on a repeated key.
    ///
    /// A first sort on a field is ascending; sorting the same field again
    /// flips the direction. Unknown or non-sortable keys are silent
    /// no-ops. The current page is kept.
    pub fn sort(&mut self, field: &str) {
        let sortable = self
            .fields
            .iter()
            .any(|f| f.key == field && f.sortable);
        if !sortable {
            debug!("ignoring sort on unknown or non-sortable field '{field}'");
            return;
        }

        self.view.sort = match self.view.sort.take() {
            Some(mut sort) if sort.field == field => {
                sort.direction = sort.direction.toggled();
                Some(sort)
            }
            _ => Some(SortState::asc(field)),
        };
    }

    /// Replaces the structural filter selections and returns to page 1.
    ///
    /// Selections for keys that are not filterable fields are dropped.
    /// An empty selection set for a field imposes no constraint.
    pub fn apply_filters(&mut self, selections: FilterSelections) {
        let mut accepted = FilterSelections::new();
        for spec in self.filterable_fields() {
            if let Some(values) = selections.values(&spec.key) {
                accepted.set(&spec.key, values.iter().cloned());
            }
        }
        self.view.filters = accepted;
        self.view.current_page = 1;
    }

    /// Clears all filter selections and the search query; page 1.
    ///
    /// The active sort is kept.
    pub fn reset_filters(&mut self) {
        self.view.filters.clear();
        self.view.search_query.clear();
        self.view.current_page = 1;
    }

    /// Navigates to a page, clamping silently into range.
    ///
    /// Out-of-range requests are recoverable state, not a fault: zero
    /// clamps to the first page and beyond-range to the last.
    pub fn go_to_page(&mut self, page: usize) {
        let count = self.filtered_rows().len();
        self.view.current_page = clamp_page(page, count, self.items_per_page);
    }

    /// Produces the render model for the current state.
    ///
    /// Pure with respect to controller state; call it after any
    /// state-changing operation and hand the result to the presentation
    /// layer.
    pub fn render(&self) -> RenderModel {
        let rows = self.filtered_rows();
        let total_count = rows.len();
        let pagination: PageInfo =
            page_info(self.view.current_page, total_count, self.items_per_page);
        let page_rows = page_slice(&rows, pagination.current_page, self.items_per_page).to_vec();

        RenderModel {
            header_fields: self.fields.iter().filter(|f| f.visible).cloned().collect(),
            rows: page_rows,
            pagination,
            total_count,
        }
    }

    // =========================================================================
    // Local CRUD
    // =========================================================================

    /// Appends a record to the dataset.
    ///
    /// Id uniqueness is the caller's contract; the controller does not
    /// deduplicate or merge colliding ids.
    pub fn add_item(&mut self, record: Record) -> Record {
        debug!("add record id='{}'", record.text(&self.id_field));
        self.dataset.push(record.clone());
        self.reclamp_page();
        record
    }

    /// Merges a partial update on top of the record with the given id.
    ///
    /// Returns the updated record, or [`TableError::NotFound`] as a
    /// result value — an unknown id is reported, never a panic.
    pub fn update_item(
        &mut self,
        id: impl Into<Value>,
        partial: Record,
    ) -> Result<Record, TableError> {
        let id_text = id.into().to_text();
        let index = self
            .position_of(&id_text)
            .ok_or_else(|| TableError::not_found(id_text.as_str()))?;

        self.dataset[index].merge(&partial);
        let updated = self.dataset[index].clone();
        self.reclamp_page();
        Ok(updated)
    }

    /// Removes the record with the given id.
    ///
    /// Returns the removed record; re-clamps the page so that deleting
    /// the last row of the last page lands on the new last page.
    pub fn delete_item(&mut self, id: impl Into<Value>) -> Result<Record, TableError> {
        let id_text = id.into().to_text();
        let index = self
            .position_of(&id_text)
            .ok_or_else(|| TableError::not_found(id_text.as_str()))?;

        let removed = self.dataset.remove(index);
        self.reclamp_page();
        Ok(removed)
    }

    // =========================================================================
    // Remote-backed CRUD
    //
    // Write-then-reconcile: nothing is applied locally until the backend
    // answers, so a failure needs no rollback. Each operation issues its
    // call exactly once; retries are a caller/backend concern.
    // =========================================================================

    /// Adds a record through the backend.
    ///
    /// On `success` with a record, the server-returned record is the one
    /// that enters the dataset; without one, the supplied record does.
    /// On rejection or transport failure the dataset is untouched.
    pub async fn add_item_remote<R>(
        &mut self,
        record: Record,
        remote: &R,
    ) -> Result<CrudOutcome, TableError>
    where
        R: RemoteCall + ?Sized,
    {
        let response = remote.invoke().await?;
        if !response.success {
            debug!("add rejected by backend");
            self.notify(response.message.as_deref(), Severity::Error);
            return Err(TableError::Rejected {
                message: response.message,
            });
        }

        let from_server = response.data.is_some();
        let canonical = response.data.unwrap_or(record);
        debug!(
            "add reconciled id='{}' from_server={from_server}",
            canonical.text(&self.id_field)
        );
        self.dataset.push(canonical.clone());
        self.reclamp_page();
        self.notify(response.message.as_deref(), Severity::Success);

        Ok(CrudOutcome::Created {
            record: canonical,
            from_server,
            message: response.message,
        })
    }

    /// Updates a record through the backend.
    ///
    /// An unknown id reports not-found without issuing the call. On
    /// `success` with a record, the server record replaces the local
    /// entry verbatim; without one, the partial merges on top of the
    /// existing record. On rejection or transport failure the dataset is
    /// untouched.
    pub async fn update_item_remote<R>(
        &mut self,
        id: impl Into<Value>,
        partial: Record,
        remote: &R,
    ) -> Result<CrudOutcome, TableError>
    where
        R: RemoteCall + ?Sized,
    {
        let id_text = id.into().to_text();
        let index = self
            .position_of(&id_text)
            .ok_or_else(|| TableError::not_found(id_text.as_str()))?;

        let response = remote.invoke().await?;
        if !response.success {
            debug!("update of id='{id_text}' rejected by backend");
            self.notify(response.message.as_deref(), Severity::Error);
            return Err(TableError::Rejected {
                message: response.message,
            });
        }

        let from_server = response.data.is_some();
        match response.data {
            Some(server_record) => {
                self.dataset[index] = server_record;
            }
            None => {
                self.dataset[index].merge(&partial);
            }
        }
        debug!("update reconciled id='{id_text}' from_server={from_server}");
        let record = self.dataset[index].clone();
        self.reclamp_page();
        self.notify(response.message.as_deref(), Severity::Success);

        Ok(CrudOutcome::Updated {
            record,
            from_server,
            message: response.message,
        })
    }

    /// Deletes a record through the backend.
    ///
    /// An unknown id reports not-found without issuing the call. On
    /// `success`, the entry is removed — matched by the server-returned
    /// record's id when one is present, else by the given id. On
    /// rejection or transport failure the dataset is untouched.
    pub async fn delete_item_remote<R>(
        &mut self,
        id: impl Into<Value>,
        remote: &R,
    ) -> Result<CrudOutcome, TableError>
    where
        R: RemoteCall + ?Sized,
    {
        let id_text = id.into().to_text();
        if self.position_of(&id_text).is_none() {
            return Err(TableError::not_found(id_text.as_str()));
        }

        let response = remote.invoke().await?;
        if !response.success {
            debug!("delete of id='{id_text}' rejected by backend");
            self.notify(response.message.as_deref(), Severity::Error);
            return Err(TableError::Rejected {
                message: response.message,
            });
        }

        let removal_text = response
            .data
            .map(|r| r.text(&self.id_field))
            .unwrap_or(id_text);
        let index = self
            .position_of(&removal_text)
            .ok_or_else(|| TableError::not_found(removal_text.as_str()))?;
        let removed = self.dataset.remove(index);
        debug!("delete reconciled id='{removal_text}'");
        self.reclamp_page();
        self.notify(response.message.as_deref(), Severity::Success);

        Ok(CrudOutcome::Deleted {
            record: removed,
            message: response.message,
        })
    }

    // =========================================================================
    // Hook triggers
    // =========================================================================

    /// Fires the add hook.
    pub fn request_add(&self) {
        if let Some(hook) = &self.hooks.on_add {
            hook();
        }
    }

    /// Fires the edit hook with the record for the given id.
    pub fn request_edit(&self, id: impl Into<Value>) -> Result<(), TableError> {
        let id = id.into();
        let record = self
            .find(id.clone())
            .ok_or_else(|| TableError::not_found(id.to_text()))?;
        if let Some(hook) = &self.hooks.on_edit {
            hook(record);
        }
        Ok(())
    }

    /// Fires the delete hook with the record for the given id.
    pub fn request_delete(&self, id: impl Into<Value>) -> Result<(), TableError> {
        let id = id.into();
        let record = self
            .find(id.clone())
            .ok_or_else(|| TableError::not_found(id.to_text()))?;
        if let Some(hook) = &self.hooks.on_delete {
            hook(record);
        }
        Ok(())
    }

    /// Fires the view hook with the record for the given id.
    pub fn request_view(&self, id: impl Into<Value>) -> Result<(), TableError> {
        let id = id.into();
        let record = self
            .find(id.clone())
            .ok_or_else(|| TableError::not_found(id.to_text()))?;
        if let Some(hook) = &self.hooks.on_view {
            hook(record);
        }
        Ok(())
    }
}

impl std::fmt::Debug for TableController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableController")
            .field("id_field", &self.id_field)
            .field("items_per_page", &self.items_per_page)
            .field("fields", &self.fields.len())
            .field("records", &self.dataset.len())
            .field("view", &self.view)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;
    use crate::model::SelectOption;

    fn controller() -> TableController {
        TableController::new(
            TableConfig::new("id")
                .field(FieldSpec::new("id", "ID", FieldType::Number))
                .field(FieldSpec::new("name", "Name", FieldType::Text))
                .field(
                    FieldSpec::new("lvl", "Level", FieldType::Select)
                        .searchable(false)
                        .options([SelectOption::new("1", "One"), SelectOption::new("2", "Two")]),
                )
                .items_per_page(2)
                .initial_data([
                    Record::new().set("id", 1i32).set("name", "A").set("lvl", 1i32),
                    Record::new().set("id", 2i32).set("name", "B").set("lvl", 2i32),
                    Record::new().set("id", 3i32).set("name", "C").set("lvl", 1i32),
                ]),
        )
    }

    #[test]
    fn test_filter_scenario() {
        let mut table = controller();
        table.apply_filters(FilterSelections::new().select("lvl", ["1"]));

        let model = table.render();
        assert_eq!(model.total_count, 2);
        assert_eq!(model.pagination.total_pages, 1);
        assert_eq!(model.rows.len(), 2);
        assert_eq!(model.rows[0].text("id"), "1");
        assert_eq!(model.rows[1].text("id"), "3");
    }

    #[test]
    fn test_sort_toggle_scenario() {
        let mut table = TableController::new(
            TableConfig::new("id")
                .field(FieldSpec::new("name", "Name", FieldType::Text))
                .items_per_page(10)
                .initial_data([
                    Record::new().set("id", 1i32).set("name", "C"),
                    Record::new().set("id", 2i32).set("name", "A"),
                    Record::new().set("id", 3i32).set("name", "B"),
                ]),
        );

        table.sort("name");
        let names: Vec<String> = table.render().rows.iter().map(|r| r.text("name")).collect();
        assert_eq!(names, ["A", "B", "C"]);

        table.sort("name");
        let names: Vec<String> = table.render().rows.iter().map(|r| r.text("name")).collect();
        assert_eq!(names, ["C", "B", "A"]);
    }

    #[test]
    fn test_sort_unknown_field_is_noop() {
        let mut table = controller();
        table.sort("nope");
        assert!(table.view_state().sort.is_none());
    }

    #[test]
    fn test_sort_keeps_page_search_resets_it() {
        let mut table = controller();
        table.go_to_page(2);
        assert_eq!(table.current_page(), 2);

        table.sort("name");
        assert_eq!(table.current_page(), 2);

        table.search("a");
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut table = controller();
        table.go_to_page(0);
        assert_eq!(table.current_page(), 1);
        table.go_to_page(99);
        assert_eq!(table.current_page(), 2);
    }

    #[test]
    fn test_set_data_keeps_filters() {
        let mut table = controller();
        table.apply_filters(FilterSelections::new().select("lvl", ["1"]));
        table.go_to_page(1);

        table.set_data([
            Record::new().set("id", 9i32).set("name", "Z").set("lvl", 2i32),
        ]);

        // The level filter is still active against the new data
        assert_eq!(table.render().total_count, 0);
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_apply_filters_drops_unknown_keys() {
        let mut table = controller();
        table.apply_filters(
            FilterSelections::new()
                .select("lvl", ["1"])
                .select("ghost", ["x"]),
        );
        assert!(table.view_state().filters.values("ghost").is_none());
        assert_eq!(table.render().total_count, 2);
    }

    #[test]
    fn test_reset_filters_keeps_sort() {
        let mut table = controller();
        table.sort("name");
        table.search("a");
        table.apply_filters(FilterSelections::new().select("lvl", ["2"]));

        table.reset_filters();
        assert_eq!(table.render().total_count, 3);
        assert!(table.view_state().sort.is_some());
        assert!(table.view_state().search_query.is_empty());
    }

    #[test]
    fn test_local_crud_roundtrip() {
        let mut table = controller();

        table.add_item(Record::new().set("id", 4i32).set("name", "D").set("lvl", 2i32));
        assert_eq!(table.len(), 4);

        let updated = table
            .update_item(4i32, Record::new().set("name", "D2"))
            .unwrap();
        assert_eq!(updated.text("name"), "D2");
        // Merge keeps fields the partial does not mention
        assert_eq!(updated.text("lvl"), "2");

        let removed = table.delete_item(4i32).unwrap();
        assert_eq!(removed.text("name"), "D2");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_unknown_id_reports_not_found() {
        let mut table = controller();
        assert!(table
            .update_item(99i32, Record::new())
            .unwrap_err()
            .is_not_found());
        assert!(table.delete_item(99i32).unwrap_err().is_not_found());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_delete_reclamps_page() {
        let mut table = controller();
        table.go_to_page(2); // 3 records, 2 per page
        table.delete_item(3i32).unwrap();
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_hooks_fire_with_record() {
        use std::sync::Arc;
        use std::sync::atomic::AtomicUsize;
        use std::sync::atomic::Ordering;

        let edits = Arc::new(AtomicUsize::new(0));
        let edits_in_hook = Arc::clone(&edits);

        let table = TableController::new(
            TableConfig::new("id")
                .field(FieldSpec::new("id", "ID", FieldType::Number))
                .initial_data([Record::new().set("id", 1i32)])
                .hooks(TableHooks::new().on_edit(move |record| {
                    assert_eq!(record.text("id"), "1");
                    edits_in_hook.fetch_add(1, Ordering::SeqCst);
                })),
        );

        table.request_edit(1i32).unwrap();
        assert_eq!(edits.load(Ordering::SeqCst), 1);
        assert!(table.request_edit(5i32).unwrap_err().is_not_found());
        // Absent hooks are no-ops
        table.request_add();
        table.request_view(1i32).unwrap();
    }
}
