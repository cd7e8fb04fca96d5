use propdeck_editor::{DocumentStore, ReportingSink};
use propdeck_forms::PropertyBatch;

/// Reporting sink backed by the console: each submitted batch is printed as
/// pretty JSON. A real host would queue the batch for upload; failures stop
/// here and are never reported back to the editor.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ReportingSink for ConsoleSink {
    fn submit_properties(&mut self, batch: PropertyBatch) {
        match serde_json::to_string_pretty(&batch) {
            Ok(json) => println!("custom properties queued:\n{}", json),
            Err(err) => tracing::warn!(%err, "failed to encode batch"),
        }
    }
}

/// Document collaborator backed by the console.
#[derive(Debug, Default)]
pub struct ConsoleDocuments;

impl DocumentStore for ConsoleDocuments {
    fn create_document(&mut self, raw: &str) {
        println!("document created from: {:?}", raw);
    }
}
