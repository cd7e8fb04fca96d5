pub mod delegate;
pub mod editor;
pub mod rows;

pub use delegate::{DocumentStore, NullDocuments, NullSink, ReportingSink};
pub use editor::{EditorSideEffect, PropertyFormEditor, NOTICE_PROPERTIES_QUEUED};
pub use rows::{classify, editing_style, row_count, EditAction, RowKind};
