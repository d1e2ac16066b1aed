//! Then steps for history tracking BDD scenarios.

use super::world::{HistoryWorld, counter_key, parse_values};
use rstest_bdd_macros::then;
use switchboard::backend::{domain::ResourceId, ports::ManagementBackend};

#[then(r#"the recorded history is "{values}""#)]
fn recorded_history_is(world: &mut HistoryWorld, values: String) -> Result<(), eyre::Report> {
    let expected = parse_values(&values)?;
    let samples = world
        .switchboard()?
        .history()
        .samples(&counter_key()?)
        .ok_or_else(|| eyre::eyre!("counter is not tracked"))?;
    let recorded: Vec<_> = samples.into_iter().map(|sample| sample.value).collect();
    if recorded != expected {
        return Err(eyre::eyre!("expected history {expected:?}, found {recorded:?}"));
    }
    Ok(())
}

#[then("the last response carried {count:usize} previous values")]
fn last_response_carried(world: &mut HistoryWorld, count: usize) -> Result<(), eyre::Report> {
    let response = world
        .last_response
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no response recorded"))?;
    let carried = response.history().map_or(0, <[_]>::len);
    if carried != count {
        return Err(eyre::eyre!("expected {count} previous values, found {carried}"));
    }
    if response.timestamp().is_none() {
        return Err(eyre::eyre!("response is missing its timestamp"));
    }
    Ok(())
}

#[then("the admin resource is no longer registered")]
fn admin_resource_unregistered(world: &mut HistoryWorld) -> Result<(), eyre::Report> {
    let admin = ResourceId::new("switchboard:type=History")
        .map_err(|err| eyre::eyre!("admin id: {err}"))?;
    let ids = world
        .backend
        .resource_ids()
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    if ids.contains(&admin) {
        return Err(eyre::eyre!("admin resource still registered"));
    }
    Ok(())
}
