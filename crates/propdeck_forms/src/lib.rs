pub mod entry;
pub mod properties;

pub use entry::{CellBackground, Entry};
pub use properties::{PendingProperty, PropertyBatch, PropertyUpdate, PropertyValue};
