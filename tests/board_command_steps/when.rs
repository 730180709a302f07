//! When steps for board command BDD scenarios.

use super::world::{BoardWorld, column, scheduled_at};
use activity_board::board::{
    domain::ActivityDraft,
    query::{ActivityQuery, QueryProjection, SortDirection, SortKey},
};
use rstest_bdd_macros::when;

#[when(r#"activity "{title}" is moved from "{from}" to "{to}""#)]
fn move_activity(
    world: &mut BoardWorld,
    title: String,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    let (from_column, to_column) = (column(&from)?, column(&to)?);
    world.remember_snapshot();
    world.last_error = world
        .store
        .move_activity(id, from_column, to_column)
        .err();
    Ok(())
}

#[when(r#"column "{target}" is reordered from {from_index:u64} to {to_index:u64}"#)]
fn reorder_column(
    world: &mut BoardWorld,
    target: String,
    from_index: u64,
    to_index: u64,
) -> Result<(), eyre::Report> {
    let target_column = column(&target)?;
    let (from_position, to_position) = (usize::try_from(from_index)?, usize::try_from(to_index)?);
    world.remember_snapshot();
    world.last_error = world
        .store
        .reorder(target_column, from_position, to_position)
        .err();
    Ok(())
}

#[when(r#"activity "{title}" for "{assignee}" without a start date is added to "{target}""#)]
fn add_without_start_date(
    world: &mut BoardWorld,
    title: String,
    assignee: String,
    target: String,
) -> Result<(), eyre::Report> {
    let target_column = column(&target)?;
    let draft = ActivityDraft::new(title, assignee).with_end_date(scheduled_at()?);
    world.remember_snapshot();
    world.last_error = world.store.add(target_column, draft).err();
    Ok(())
}

#[when(r#"activity "{title}" is deleted from "{target}""#)]
fn delete_activity(
    world: &mut BoardWorld,
    title: String,
    target: String,
) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    let target_column = column(&target)?;
    world.remember_snapshot();
    world.last_error = world.store.delete(target_column, id).err();
    Ok(())
}

#[when(r#"the board is searched for "{text}""#)]
fn search_board(world: &mut BoardWorld, text: String) {
    project(world, &ActivityQuery::default().with_search(text));
}

#[when(r#"the board is sorted by "{key}" "{direction}""#)]
fn sort_board(world: &mut BoardWorld, key: String, direction: String) -> Result<(), eyre::Report> {
    let sort_key: SortKey = key.parse()?;
    let sort_direction: SortDirection = direction.parse()?;
    project(world, &ActivityQuery::default().sorted_by(sort_key, sort_direction));
    Ok(())
}

fn project(world: &mut BoardWorld, query: &ActivityQuery) {
    let view = QueryProjection::default().project(world.store.snapshot(), query);
    let columns = view
        .iter()
        .map(|column_view| {
            let titles = column_view
                .activities()
                .iter()
                .map(|activity| activity.title().to_owned())
                .collect();
            (column_view.column(), titles)
        })
        .collect();
    world.view = columns;
}
