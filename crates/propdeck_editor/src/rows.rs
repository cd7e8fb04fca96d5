/// What a table row is, derived purely from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Row 0 of the properties section: the "add a property" control.
    Insert,
    /// A pending-property row, bound to this index in the pending list.
    Data(usize),
    /// Row 0 of any non-properties section.
    Send,
    /// Row 1 of any non-properties section.
    Dismiss,
}

/// What an edit gesture on a row means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert,
    Delete,
}

/// Classify `(section, row)` from the two counters alone: the index of the
/// properties section and the current pending-property count. Pure and O(1),
/// so the view layer can call it on every render and after every mutation
/// without any cached row state going stale.
///
/// Rows beyond the real row count do not exist and classify to `None`.
pub fn classify(
    properties_section: usize,
    property_count: usize,
    section: usize,
    row: usize,
) -> Option<RowKind> {
    if section == properties_section {
        match row {
            0 => Some(RowKind::Insert),
            r if r <= property_count => Some(RowKind::Data(r - 1)),
            _ => None,
        }
    } else {
        match row {
            0 => Some(RowKind::Send),
            1 => Some(RowKind::Dismiss),
            _ => None,
        }
    }
}

/// Number of rows in a section: the pending properties plus their insert
/// control, or the fixed send/dismiss pair.
pub fn row_count(properties_section: usize, property_count: usize, section: usize) -> usize {
    if section == properties_section {
        property_count + 1
    } else {
        2
    }
}

/// Route an edit gesture: the insert-row inserts, data-rows delete, and the
/// action rows have no edit affordance.
pub fn editing_style(
    properties_section: usize,
    property_count: usize,
    section: usize,
    row: usize,
) -> Option<EditAction> {
    match classify(properties_section, property_count, section, row)? {
        RowKind::Insert => Some(EditAction::Insert),
        RowKind::Data(_) => Some(EditAction::Delete),
        RowKind::Send | RowKind::Dismiss => None,
    }
}
