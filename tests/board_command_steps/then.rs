//! Then steps for board command BDD scenarios.

use super::world::{BoardWorld, column, title_list};
use activity_board::board::domain::BoardError;
use rstest_bdd_macros::then;

#[then(r#"column "{target}" holds "{titles}""#)]
fn column_holds(world: &BoardWorld, target: String, titles: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = world
        .store
        .snapshot()
        .column(column(&target)?)
        .iter()
        .map(|activity| activity.title().to_owned())
        .collect();
    let expected = title_list(&titles);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected {target} to hold {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the view of "{target}" shows "{titles}""#)]
fn view_shows(world: &BoardWorld, target: String, titles: String) -> Result<(), eyre::Report> {
    let target_column = column(&target)?;
    let actual = world
        .view
        .iter()
        .find(|(candidate, _)| *candidate == target_column)
        .map(|(_, shown)| shown.clone())
        .unwrap_or_default();
    let expected = title_list(&titles);
    if actual != expected {
        return Err(eyre::eyre!(
            "expected view of {target} to show {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the command fails because "{field}" is missing"#)]
fn fails_with_missing_field(world: &BoardWorld, field: String) -> Result<(), eyre::Report> {
    let Some(BoardError::Validation(errors)) = world.last_error.as_ref() else {
        return Err(eyre::eyre!(
            "expected a validation error, got {:?}",
            world.last_error
        ));
    };
    let missing: Vec<&str> = errors.missing().iter().map(|item| item.as_str()).collect();
    if missing != [field.as_str()] {
        return Err(eyre::eyre!("expected only {field} missing, got {missing:?}"));
    }
    Ok(())
}

#[then("the command fails because an index is out of range")]
fn fails_with_index_out_of_range(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !matches!(world.last_error, Some(BoardError::IndexOutOfRange { .. })) {
        return Err(eyre::eyre!(
            "expected IndexOutOfRange error, got {:?}",
            world.last_error
        ));
    }
    Ok(())
}

#[then("the board is unchanged")]
fn board_is_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let before = world
        .before
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing snapshot taken before the command"))?;
    if world.store.snapshot() != before {
        return Err(eyre::eyre!("board changed after a failed command"));
    }
    Ok(())
}
