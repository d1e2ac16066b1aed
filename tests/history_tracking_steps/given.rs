//! Given steps for history tracking BDD scenarios.

use super::world::{HistoryWorld, counter_key};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a switchboard over a counter resource")]
fn switchboard_over_counter(world: &mut HistoryWorld) -> Result<(), eyre::Report> {
    world.start().wrap_err("start switchboard for scenario")
}

#[given("history for the counter is limited to {count:usize} entries")]
fn history_limited(world: &mut HistoryWorld, count: usize) -> Result<(), eyre::Report> {
    let key = counter_key()?;
    world.switchboard()?.history().configure(key, count);
    Ok(())
}
