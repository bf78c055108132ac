//! Presentation collaborator contracts.
//!
//! The controller renders nothing. Toasts, confirmation prompts, and edit
//! forms are capabilities it calls into through these traits; a TUI, web
//! bridge, or test harness provides the implementations. Default no-op
//! implementations keep headless use friction-free.

use crate::model::FieldSpec;
use crate::model::Record;

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation completed.
    Success,
    /// Neutral information.
    Info,
    /// Something worth attention, not a failure.
    Warning,
    /// Operation failed.
    Error,
}

/// A toast/notification sink.
pub trait Notifier {
    /// Shows a message to the user.
    fn notify(&self, message: &str, severity: Severity);
}

/// A notifier that drops everything, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}

/// What a confirmation prompt should display.
#[derive(Debug, Clone)]
pub struct ConfirmOptions {
    /// Dialog title.
    pub title: String,
    /// Body text, e.g. "Delete X? This cannot be undone."
    pub message: String,
    /// Label of the confirming control.
    pub confirm_text: String,
    /// Whether the action is destructive (styling hint).
    pub destructive: bool,
}

impl ConfirmOptions {
    /// Creates prompt options with a default confirm label.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_text: "OK".to_string(),
            destructive: false,
        }
    }

    /// Sets the confirm control label.
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    /// Marks the action destructive.
    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// A confirmation-prompt sink.
///
/// Does not return a decision; it invokes exactly one of the callbacks,
/// matching the modal widgets this replaces.
pub trait ConfirmPrompt {
    /// Shows the prompt and routes the decision to a callback.
    fn confirm(
        &self,
        options: ConfirmOptions,
        on_confirm: Box<dyn FnOnce() + Send>,
        on_cancel: Box<dyn FnOnce() + Send>,
    );
}

/// An edit-form sink.
///
/// Collects structured field values and returns them as a flat record for
/// `add_item`/`update_item` consumption, or `None` when the user cancels.
/// Enforcing `required`/`validation_message` is this collaborator's job,
/// before the controller is invoked.
pub trait EditForm {
    /// Collects a record from the user.
    ///
    /// `current` carries the existing record when editing, `None` when
    /// adding; the form should offer only `editable` (resp. `addable`)
    /// fields.
    fn collect(&self, fields: &[FieldSpec], current: Option<&Record>) -> Option<Record>;
}

// =============================================================================
// Table hooks
// =============================================================================

type RecordHook = Box<dyn Fn(&Record) + Send + Sync>;

/// Per-table customization hooks.
///
/// The source customized tables by subclassing and overriding `onAdd`,
/// `onEdit`, `onDelete`; here the same customization is a configuration
/// object of optional callbacks injected at construction. An absent hook
/// is a no-op.
#[derive(Default)]
pub struct TableHooks {
    pub(crate) on_add: Option<Box<dyn Fn() + Send + Sync>>,
    pub(crate) on_edit: Option<RecordHook>,
    pub(crate) on_delete: Option<RecordHook>,
    pub(crate) on_view: Option<RecordHook>,
}

impl TableHooks {
    /// Creates an empty hook set (every hook a no-op).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the add hook, fired when the user asks to create a record.
    pub fn on_add(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_add = Some(Box::new(hook));
        self
    }

    /// Sets the edit hook, fired with the record being edited.
    pub fn on_edit(mut self, hook: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.on_edit = Some(Box::new(hook));
        self
    }

    /// Sets the delete hook, fired with the record pending deletion.
    pub fn on_delete(mut self, hook: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.on_delete = Some(Box::new(hook));
        self
    }

    /// Sets the view hook, fired with the record being inspected.
    pub fn on_view(mut self, hook: impl Fn(&Record) + Send + Sync + 'static) -> Self {
        self.on_view = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for TableHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableHooks")
            .field("on_add", &self.on_add.is_some())
            .field("on_edit", &self.on_edit.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .field("on_view", &self.on_view.is_some())
            .finish()
    }
}
