//! Assignee listings derived from a snapshot.

use super::{BoardView, ColumnView};
use crate::board::domain::Board;
use std::collections::BTreeSet;

/// Returns every assignee on the board, sorted and de-duplicated.
#[must_use]
pub fn assignees(board: &Board) -> Vec<&str> {
    board
        .activities()
        .map(|activity| activity.assignee())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Returns the activities assigned to `member`, per column, in column order.
///
/// The name must match exactly; a blank member owns nothing.
#[must_use]
pub fn member_view<'a>(board: &'a Board, member: &str) -> BoardView<'a> {
    let columns = board
        .columns()
        .map(|(column, activities)| {
            let owned = activities
                .iter()
                .filter(|activity| activity.assignee() == member)
                .collect();
            ColumnView::new(column, owned)
        })
        .collect();
    BoardView::new(columns)
}
