//! Given steps for board command BDD scenarios.

use super::world::{BoardWorld, column, scheduled_at};
use activity_board::board::domain::{ActivityDraft, Board, Priority};
use activity_board::board::{adapters::SequentialIdSource, services::BoardStore};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) {
    world.store = BoardStore::new(Board::new(), SequentialIdSource::default());
}

#[given(r#"activity "{title}" for "{assignee}" with "{priority}" priority in "{target}""#)]
fn activity_in_column(
    world: &mut BoardWorld,
    title: String,
    assignee: String,
    priority: String,
    target: String,
) -> Result<(), eyre::Report> {
    let urgency = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let start = scheduled_at()?;
    let draft = ActivityDraft::new(title, assignee)
        .with_priority(urgency)
        .with_schedule(start, start);
    world
        .store
        .add(column(&target)?, draft)
        .wrap_err("add scenario activity")?;
    Ok(())
}
