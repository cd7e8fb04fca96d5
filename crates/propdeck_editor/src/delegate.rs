use propdeck_forms::PropertyBatch;

/// Receives each submitted property batch. The editor fires and forgets:
/// it never awaits completion and never observes sink-side failures, so any
/// retry or error surfacing lives behind this trait.
pub trait ReportingSink {
    fn submit_properties(&mut self, batch: PropertyBatch);
}

/// Receives the raw prompt input each time an entry is appended.
pub trait DocumentStore {
    fn create_document(&mut self, raw: &str);
}

/// Sink that drops every batch. Stands in until the hosting shell installs
/// the real collaborator.
#[derive(Debug, Default)]
pub struct NullSink;

impl ReportingSink for NullSink {
    fn submit_properties(&mut self, _batch: PropertyBatch) {}
}

#[derive(Debug, Default)]
pub struct NullDocuments;

impl DocumentStore for NullDocuments {
    fn create_document(&mut self, _raw: &str) {}
}
