//! When steps for history tracking BDD scenarios.

use serde_json::json;

use super::world::{
    COUNTER_ATTRIBUTE, COUNTER_RESOURCE, HistoryWorld, counter_id, parse_values,
};
use rstest_bdd_macros::{given, when};
use switchboard::{
    backend::{domain::ResourceId, ports::ManagementBackend},
    dispatch::domain::Request,
};

const ADMIN_RESOURCE: &str = "switchboard:type=History";

fn admin_id() -> Result<ResourceId, eyre::Report> {
    ResourceId::new(ADMIN_RESOURCE).map_err(|err| eyre::eyre!("admin id: {err}"))
}

/// Sets the counter on the backend and reads it through the switchboard,
/// once per value.
fn report_values(world: &mut HistoryWorld, values: &str) -> Result<(), eyre::Report> {
    let resource = counter_id()?;
    for value in parse_values(values)? {
        world
            .backend
            .write_attribute(&resource, COUNTER_ATTRIBUTE, value)
            .map_err(|err| eyre::eyre!("set counter: {err}"))?;
        let response = world.execute(&Request::read(resource.clone(), COUNTER_ATTRIBUTE))?;
        world.last_response = Some(response);
    }
    Ok(())
}

#[given(r#"the counter reports the values "{values}" in turn"#)]
fn counter_reported_values(world: &mut HistoryWorld, values: String) -> Result<(), eyre::Report> {
    report_values(world, &values)
}

#[when(r#"the counter reports the values "{values}" in turn"#)]
fn counter_reports_values(world: &mut HistoryWorld, values: String) -> Result<(), eyre::Report> {
    report_values(world, &values)
}

#[when("the admin resource limits the counter history to {count:usize} entries")]
fn admin_limits_history(world: &mut HistoryWorld, count: usize) -> Result<(), eyre::Report> {
    let request = Request::exec(
        admin_id()?,
        "configure",
        [
            json!(COUNTER_RESOURCE),
            json!("attribute"),
            json!(COUNTER_ATTRIBUTE),
            json!(count),
        ],
    );
    world.execute(&request)?;
    Ok(())
}

#[when("the admin attribute MaxEntries is set to {count:usize}")]
fn admin_sets_ceiling(world: &mut HistoryWorld, count: usize) -> Result<(), eyre::Report> {
    world.execute(&Request::write(admin_id()?, "MaxEntries", json!(count)))?;
    Ok(())
}

#[when("the switchboard shuts down")]
fn switchboard_shuts_down(world: &mut HistoryWorld) -> Result<(), eyre::Report> {
    let switchboard = world
        .switchboard
        .take()
        .ok_or_else(|| eyre::eyre!("switchboard not running"))?;
    switchboard
        .shutdown()
        .map_err(|err| eyre::eyre!("shutdown failed: {err}"))
}
