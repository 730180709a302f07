//! Borrowed per-column views produced by projections.

use crate::board::domain::{Activity, ActivityId, ColumnId};

/// Projected activities of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    column: ColumnId,
    activities: Vec<&'a Activity>,
}

impl<'a> ColumnView<'a> {
    pub(super) const fn new(column: ColumnId, activities: Vec<&'a Activity>) -> Self {
        Self { column, activities }
    }

    /// Returns the column this view belongs to.
    #[must_use]
    pub const fn column(&self) -> ColumnId {
        self.column
    }

    /// Returns the projected activities in display order.
    #[must_use]
    pub fn activities(&self) -> &[&'a Activity] {
        &self.activities
    }

    /// Returns the projected identifiers in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<ActivityId> {
        self.activities.iter().map(|activity| activity.id()).collect()
    }

    /// Returns the number of projected activities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Returns `true` when nothing in the column matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// Projected activities of every column, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    columns: Vec<ColumnView<'a>>,
}

impl<'a> BoardView<'a> {
    pub(super) const fn new(columns: Vec<ColumnView<'a>>) -> Self {
        Self { columns }
    }

    /// Returns the view of `column`.
    #[must_use]
    pub fn column(&self, column: ColumnId) -> &[&'a Activity] {
        self.columns
            .iter()
            .find(|view| view.column() == column)
            .map(ColumnView::activities)
            .unwrap_or_default()
    }

    /// Returns the projected identifiers of `column`.
    #[must_use]
    pub fn ids(&self, column: ColumnId) -> Vec<ActivityId> {
        self.column(column).iter().map(|activity| activity.id()).collect()
    }

    /// Iterates over the column views in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnView<'a>> {
        self.columns.iter()
    }

    /// Returns the per-column counts in display order.
    #[must_use]
    pub fn counts(&self) -> Vec<(ColumnId, usize)> {
        self.columns
            .iter()
            .map(|view| (view.column(), view.len()))
            .collect()
    }

    /// Returns the total number of projected activities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.iter().map(ColumnView::len).sum()
    }

    /// Returns `true` when no column has any projected activity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(ColumnView::is_empty)
    }
}
