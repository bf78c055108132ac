//! End-to-end controller scenarios, including remote reconciliation
//! against a mock backend.

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use async_trait::async_trait;
use gridstate_lib::TableConfig;
use gridstate_lib::TableController;
use gridstate_lib::error::RemoteError;
use gridstate_lib::error::TableError;
use gridstate_lib::model::FieldSpec;
use gridstate_lib::model::FieldType;
use gridstate_lib::model::Record;
use gridstate_lib::model::SelectOption;
use gridstate_lib::remote::ApiResponse;
use gridstate_lib::remote::RemoteCall;
use gridstate_lib::view::FilterSelections;

// =============================================================================
// Mock backend
// =============================================================================

enum Canned {
    Respond(ApiResponse),
    TransportFailure,
}

struct MockRemote {
    canned: Canned,
    calls: AtomicUsize,
}

impl MockRemote {
    fn responding(response: ApiResponse) -> Self {
        Self {
            canned: Canned::Respond(response),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            canned: Canned::TransportFailure,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteCall for MockRemote {
    async fn invoke(&self) -> Result<ApiResponse, RemoteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.canned {
            Canned::Respond(response) => Ok(response.clone()),
            Canned::TransportFailure => Err(RemoteError::parse("connection reset")),
        }
    }
}

// =============================================================================
// Fixtures
// =============================================================================

fn course_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("id", "ID", FieldType::Number).editable(false),
        FieldSpec::new("name", "Course", FieldType::Text),
        FieldSpec::new("semester", "Semester", FieldType::Select)
            .searchable(false)
            .options([
                SelectOption::new("1", "First").with_class("bg-primary"),
                SelectOption::new("2", "Second").with_class("bg-success"),
            ]),
    ]
}

fn course(id: i32, name: &str, semester: i32) -> Record {
    Record::new()
        .set("id", id)
        .set("name", name)
        .set("semester", semester)
}

fn table_with(count: i32, items_per_page: usize) -> TableController {
    let data: Vec<Record> = (1..=count)
        .map(|i| course(i, &format!("Course {i:02}"), 1 + (i % 2)))
        .collect();
    TableController::new(
        TableConfig::new("id")
            .fields(course_fields())
            .items_per_page(items_per_page)
            .initial_data(data),
    )
}

// =============================================================================
// View properties
// =============================================================================

#[test]
fn pagination_is_complete_and_gap_free() {
    for items_per_page in [1, 3, 10, 25] {
        let mut table = table_with(23, items_per_page);
        table.sort("name");

        let expected = table.filtered_rows();
        let mut collected: Vec<Record> = Vec::new();
        let total_pages = table.render().pagination.total_pages;

        for page in 1..=total_pages {
            table.go_to_page(page);
            collected.extend(table.render().rows);
        }

        assert_eq!(collected, expected, "items_per_page={items_per_page}");
    }
}

#[test]
fn render_is_pure_and_sort_order_is_stable() {
    let mut table = table_with(9, 5);
    table.sort("name");

    let first = table.render();
    let second = table.render();
    assert_eq!(first.rows, second.rows);
    assert_eq!(first.pagination, second.pagination);
}

#[test]
fn sorting_same_field_twice_reverses_order() {
    let mut table = table_with(7, 100);

    table.sort("name");
    let ascending: Vec<String> = table.render().rows.iter().map(|r| r.text("name")).collect();

    table.sort("name");
    let descending: Vec<String> = table.render().rows.iter().map(|r| r.text("name")).collect();

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn search_and_filter_are_order_independent() {
    let mut a = table_with(20, 10);
    a.search("course 1");
    a.apply_filters(FilterSelections::new().select("semester", ["2"]));

    let mut b = table_with(20, 10);
    b.apply_filters(FilterSelections::new().select("semester", ["2"]));
    b.search("course 1");

    assert_eq!(a.filtered_rows(), b.filtered_rows());
}

#[test]
fn header_fields_are_the_visible_specs() {
    let table = TableController::new(
        TableConfig::new("id")
            .field(FieldSpec::new("id", "ID", FieldType::Number))
            .field(FieldSpec::new("internal", "Internal", FieldType::Text).visible(false)),
    );

    let headers = table.render().header_fields;
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].key, "id");
}

// =============================================================================
// Remote reconciliation
// =============================================================================

#[tokio::test(flavor = "current_thread")]
async fn server_record_replaces_local_partial_verbatim() {
    let mut table = table_with(3, 10);

    // Server normalizes the name and adds a field the client never sent
    let server_record = course(2, "Course 02 (renamed)", 1).set("approved", true);
    let remote = MockRemote::responding(ApiResponse::ok_with(server_record.clone()));

    let partial = Record::new().set("name", "whatever the form said");
    let outcome = table
        .update_item_remote(2i32, partial, &remote)
        .await
        .unwrap();

    assert!(outcome.from_server());
    assert_eq!(remote.call_count(), 1);
    // Verbatim replacement, not a merge of the partial over the old record
    assert_eq!(table.find(2i32).unwrap(), &server_record);
}

#[tokio::test(flavor = "current_thread")]
async fn acknowledgement_without_record_merges_partial() {
    let mut table = table_with(3, 10);
    let remote = MockRemote::responding(ApiResponse::ok());

    let outcome = table
        .update_item_remote(2i32, Record::new().set("name", "Edited"), &remote)
        .await
        .unwrap();

    assert!(!outcome.from_server());
    let record = table.find(2i32).unwrap();
    assert_eq!(record.text("name"), "Edited");
    // Untouched fields survive the merge
    assert_eq!(record.text("semester"), "1");
}

#[tokio::test(flavor = "current_thread")]
async fn rejection_leaves_dataset_untouched() {
    let mut table = table_with(5, 10);
    let before = table.dataset().to_vec();
    let remote = MockRemote::responding(ApiResponse::rejected("semester is closed"));

    let add = table.add_item_remote(course(6, "New", 1), &remote).await;
    let update = table
        .update_item_remote(1i32, Record::new().set("name", "X"), &remote)
        .await;
    let delete = table.delete_item_remote(1i32, &remote).await;

    for result in [add, update, delete] {
        let err = result.unwrap_err();
        assert_eq!(err.server_message(), Some("semester is closed"));
    }
    assert_eq!(table.dataset(), &before[..]);
    assert_eq!(remote.call_count(), 3);
}

#[tokio::test(flavor = "current_thread")]
async fn transport_failure_leaves_dataset_untouched() {
    let mut table = table_with(5, 10);
    let before = table.dataset().to_vec();
    let remote = MockRemote::failing();

    let err = table
        .update_item_remote(1i32, Record::new().set("name", "X"), &remote)
        .await
        .unwrap_err();

    assert!(matches!(err, TableError::Remote(_)));
    assert_eq!(table.dataset(), &before[..]);
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_id_skips_the_remote_call() {
    let mut table = table_with(3, 10);
    let remote = MockRemote::responding(ApiResponse::ok());

    let err = table
        .update_item_remote(99i32, Record::new(), &remote)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(remote.call_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn added_server_record_is_the_stored_one() {
    let mut table = table_with(1, 10);
    let server_record = course(2, "Server Truth", 2);
    let remote = MockRemote::responding(ApiResponse::ok_with(server_record.clone()));

    let outcome = table
        .add_item_remote(course(2, "Client Draft", 1), &remote)
        .await
        .unwrap();

    assert!(outcome.from_server());
    assert_eq!(table.find(2i32).unwrap(), &server_record);
    assert_eq!(table.len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn deleting_last_row_of_last_page_reclamps() {
    // 11 records, page size 10: page 2 holds only record 11
    let mut table = table_with(11, 10);
    table.go_to_page(2);
    assert_eq!(table.current_page(), 2);

    let remote = MockRemote::responding(ApiResponse::ok());
    let outcome = table.delete_item_remote(11i32, &remote).await.unwrap();

    assert_eq!(outcome.record().text("id"), "11");
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.render().pagination.total_pages, 1);
}

#[tokio::test(flavor = "current_thread")]
async fn delete_matches_by_server_returned_id() {
    let mut table = table_with(3, 10);
    // Backend answers with the canonical record it removed
    let remote = MockRemote::responding(ApiResponse::ok_with(course(3, "Course 03", 2)));

    table.delete_item_remote(3i32, &remote).await.unwrap();
    assert!(table.find(3i32).is_none());
    assert_eq!(table.len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn backend_message_passes_through_on_success() {
    let mut table = table_with(1, 10);
    let mut response = ApiResponse::ok();
    response.message = Some("saved".to_string());
    let remote = MockRemote::responding(response);

    let outcome = table
        .update_item_remote(1i32, Record::new().set("name", "N"), &remote)
        .await
        .unwrap();
    assert_eq!(outcome.message(), Some("saved"));
}
