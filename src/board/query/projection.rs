//! Filtering and sorting of board snapshots for display.

use super::{ActivityQuery, BoardView, ColumnView, SearchDateFormat, SortDirection, SortKey};
use crate::board::domain::{Activity, Board, ColumnId};
use chrono::FixedOffset;
use std::cmp::Ordering;

/// Derives per-column display views from a snapshot.
///
/// Filters run first (search text, then assignee; an activity must pass
/// both), then the optional sort. Sorting is stable in both directions, so
/// activities with equal keys keep their column order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryProjection {
    dates: SearchDateFormat,
}

impl QueryProjection {
    /// Creates a projection that renders dates for search in `offset`.
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self {
            dates: SearchDateFormat::new(offset),
        }
    }

    /// Returns the date rendering used by the search filter.
    #[must_use]
    pub const fn date_format(&self) -> &SearchDateFormat {
        &self.dates
    }

    /// Projects every column of `board`.
    #[must_use]
    pub fn project<'a>(&self, board: &'a Board, query: &ActivityQuery) -> BoardView<'a> {
        let columns = board
            .columns()
            .map(|(column, activities)| self.project_column(column, activities, query))
            .collect();
        BoardView::new(columns)
    }

    /// Projects a single column.
    #[must_use]
    pub fn project_column<'a>(
        &self,
        column: ColumnId,
        activities: &'a [Activity],
        query: &ActivityQuery,
    ) -> ColumnView<'a> {
        let needle = query.search_needle();
        let assignee = query.assignee_filter();

        let mut selected: Vec<&'a Activity> = activities
            .iter()
            .filter(|activity| {
                needle
                    .as_deref()
                    .is_none_or(|text| self.dates.matches(activity, text))
            })
            .filter(|activity| assignee.is_none_or(|name| activity.assignee() == name))
            .collect();

        if query.sort_key != SortKey::None {
            selected.sort_by(|left, right| {
                let ordering = compare(query.sort_key, left, right);
                match query.sort_direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        ColumnView::new(column, selected)
    }
}

fn compare(key: SortKey, left: &Activity, right: &Activity) -> Ordering {
    match key {
        SortKey::None => Ordering::Equal,
        SortKey::Date => left.start_date().cmp(&right.start_date()),
        SortKey::Priority => left.priority().rank().cmp(&right.priority().rank()),
    }
}
