use crate::delegate::{DocumentStore, NullDocuments, NullSink, ReportingSink};
use crate::rows::{self, EditAction, RowKind};
use propdeck_forms::{Entry, PendingProperty, PropertyBatch};
use std::collections::VecDeque;

/// Notice shown after a batch has been handed to the reporting sink.
pub const NOTICE_PROPERTIES_QUEUED: &str = "The custom properties log is queued";

/// Prompt input substituted when the user confirms with an empty field.
pub const DEFAULT_ENTRY_INPUT: &str = "placeholder,blue";

/// Signals buffered for the view layer to drain after each operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSideEffect {
    /// Show a confirmation notice to the user.
    UserNotice(String),
    /// The row layout changed; re-render everything.
    Reload,
}

/// The demo screen's core: an ordered list of pending custom properties and
/// an ordered list of to-do entries, with position-based row classification
/// and a fire-and-forget submit path.
pub struct PropertyFormEditor {
    properties: Vec<PendingProperty>,
    entries: Vec<Entry>,
    properties_section: usize,
    sink: Box<dyn ReportingSink>,
    documents: Box<dyn DocumentStore>,
    pub side_effects: VecDeque<EditorSideEffect>,
}

impl PropertyFormEditor {
    pub fn new(sink: Box<dyn ReportingSink>, documents: Box<dyn DocumentStore>) -> Self {
        Self {
            properties: Vec::new(),
            entries: Vec::new(),
            properties_section: 0,
            sink,
            documents,
            side_effects: VecDeque::new(),
        }
    }

    /// Editor wired to no-op collaborators.
    pub fn detached() -> Self {
        Self::new(Box::new(NullSink), Box::new(NullDocuments))
    }

    pub fn set_reporting_sink(&mut self, sink: Box<dyn ReportingSink>) {
        self.sink = sink;
    }

    pub fn set_document_store(&mut self, documents: Box<dyn DocumentStore>) {
        self.documents = documents;
    }

    pub fn properties_section(&self) -> usize {
        self.properties_section
    }

    pub fn set_properties_section(&mut self, section: usize) {
        self.properties_section = section;
    }

    pub fn properties(&self) -> &[PendingProperty] {
        &self.properties
    }

    /// In-place row edits go through here; the bound index comes from
    /// `RowKind::Data`.
    pub fn property_mut(&mut self, index: usize) -> Option<&mut PendingProperty> {
        self.properties.get_mut(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    // ── Row classification ───────────────────────────────────────────────

    pub fn classify(&self, section: usize, row: usize) -> Option<RowKind> {
        rows::classify(self.properties_section, self.properties.len(), section, row)
    }

    pub fn row_count(&self, section: usize) -> usize {
        rows::row_count(self.properties_section, self.properties.len(), section)
    }

    pub fn editing_style(&self, section: usize, row: usize) -> Option<EditAction> {
        rows::editing_style(self.properties_section, self.properties.len(), section, row)
    }

    // ── Operations ───────────────────────────────────────────────────────

    /// Append a fresh pending property with the default kind (empty string).
    pub fn insert_property(&mut self) {
        self.properties.push(PendingProperty::string("", ""));
        tracing::debug!(count = self.properties.len(), "inserted pending property");
        self.side_effects.push_back(EditorSideEffect::Reload);
    }

    /// Remove the pending property at `index`; later rows shift up and the
    /// next classification query reflects the new count. An index past the
    /// end is ignored.
    pub fn delete_property(&mut self, index: usize) {
        if index < self.properties.len() {
            self.properties.remove(index);
            tracing::debug!(index, count = self.properties.len(), "deleted pending property");
            self.side_effects.push_back(EditorSideEffect::Reload);
        }
    }

    /// Dispatch a committed edit gesture per the row's classification.
    pub fn commit_edit(&mut self, section: usize, row: usize) {
        match self.editing_style(section, row) {
            Some(EditAction::Insert) => self.insert_property(),
            Some(EditAction::Delete) => {
                if let Some(RowKind::Data(index)) = self.classify(section, row) {
                    self.delete_property(index);
                }
            }
            None => {}
        }
    }

    /// Selecting the insert-row behaves like its edit gesture; every other
    /// row is inert on selection.
    pub fn select_row(&mut self, section: usize, row: usize) {
        if self.classify(section, row) == Some(RowKind::Insert) {
            self.commit_edit(section, row);
        }
    }

    /// Fold the pending list into a batch, hand it to the reporting sink and
    /// clear the list. The clear is unconditional: the sink call is
    /// fire-and-forget and its outcome is never observed here.
    pub fn send(&mut self) {
        let batch = PropertyBatch::from_pending(&self.properties);
        tracing::debug!(pending = self.properties.len(), keys = batch.len(), "submitting batch");
        self.sink.submit_properties(batch);
        self.properties.clear();
        self.side_effects
            .push_back(EditorSideEffect::UserNotice(NOTICE_PROPERTIES_QUEUED.to_string()));
        self.side_effects.push_back(EditorSideEffect::Reload);
    }

    /// Append a to-do entry parsed from prompt input, forwarding the raw
    /// string to the document collaborator. Absent or empty input falls back
    /// to the stated default.
    pub fn append_entry(&mut self, input: Option<&str>) {
        let raw = match input {
            Some(text) if !text.is_empty() => text,
            _ => DEFAULT_ENTRY_INPUT,
        };
        let entry = Entry::parse(raw);
        tracing::debug!(label = %entry.label, tag = %entry.color_tag, "appended entry");
        self.entries.push(entry);
        self.documents.create_document(raw);
        self.side_effects.push_back(EditorSideEffect::Reload);
    }
}
