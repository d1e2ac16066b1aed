//! Unit tests for backend discovery.

use std::sync::Arc;

use crate::backend::{
    adapters::memory::InMemoryBackend,
    domain::BackendId,
    ports::{Backend, BackendSet, DiscoveryError, DiscoveryResult, DiscoveryStrategy},
    services::BackendDiscovery,
};
use rstest::{fixture, rstest};

struct StubStrategy {
    name: &'static str,
    outcome: DiscoveryResult<Vec<Backend>>,
    refresh: bool,
}

impl StubStrategy {
    fn found(name: &'static str, backends: Vec<Backend>) -> Box<dyn DiscoveryStrategy> {
        Box::new(Self {
            name,
            outcome: Ok(backends),
            refresh: false,
        })
    }

    fn refreshing(name: &'static str, backends: Vec<Backend>) -> Box<dyn DiscoveryStrategy> {
        Box::new(Self {
            name,
            outcome: Ok(backends),
            refresh: true,
        })
    }

    fn failing(name: &'static str, error: DiscoveryError) -> Box<dyn DiscoveryStrategy> {
        Box::new(Self {
            name,
            outcome: Err(error),
            refresh: false,
        })
    }
}

impl DiscoveryStrategy for StubStrategy {
    fn name(&self) -> &str {
        self.name
    }

    fn discover(&self) -> DiscoveryResult<Vec<Backend>> {
        self.outcome.clone()
    }

    fn requires_metadata_refresh(&self) -> bool {
        self.refresh
    }
}

fn memory_backend(name: &str) -> Backend {
    Arc::new(InMemoryBackend::new(name))
}

#[fixture]
fn fallback() -> Backend {
    Arc::new(InMemoryBackend::platform())
}

#[rstest]
fn fallback_is_used_when_no_strategy_applies(fallback: Backend) {
    let strategies = vec![
        StubStrategy::failing("first", DiscoveryError::not_applicable("first", "absent")),
        StubStrategy::failing("second", DiscoveryError::not_applicable("second", "absent")),
    ];

    let discovery =
        BackendDiscovery::discover(&strategies, Arc::clone(&fallback)).expect("discovery");

    assert_eq!(discovery.backends().ids(), vec![fallback.id()]);
    assert!(!discovery.requires_metadata_refresh());
}

#[rstest]
fn strategy_order_is_preserved_and_fallback_comes_last(fallback: Backend) {
    let a = memory_backend("a");
    let b = memory_backend("b");
    let c = memory_backend("c");
    let strategies = vec![
        StubStrategy::found("first", vec![Arc::clone(&a), Arc::clone(&b)]),
        StubStrategy::failing("skipped", DiscoveryError::not_applicable("skipped", "absent")),
        StubStrategy::found("second", vec![Arc::clone(&c)]),
    ];

    let discovery =
        BackendDiscovery::discover(&strategies, Arc::clone(&fallback)).expect("discovery");

    assert_eq!(
        discovery.backends().ids(),
        vec![a.id(), b.id(), c.id(), fallback.id()]
    );
}

#[rstest]
fn the_same_backend_found_twice_is_kept_once(fallback: Backend) {
    let shared = memory_backend("shared");
    let strategies = vec![
        StubStrategy::found("first", vec![Arc::clone(&shared)]),
        StubStrategy::found("second", vec![Arc::clone(&shared), Arc::clone(&fallback)]),
    ];

    let discovery =
        BackendDiscovery::discover(&strategies, Arc::clone(&fallback)).expect("discovery");

    let ids: Vec<BackendId> = discovery.backends().ids();
    assert_eq!(ids, vec![shared.id(), fallback.id()]);
}

#[rstest]
fn integration_failure_aborts_discovery(fallback: Backend) {
    let error = DiscoveryError::Integration {
        strategy: "platform-x".to_owned(),
        platform: "platform-x".to_owned(),
        reason: "symbol missing".to_owned(),
    };
    let strategies = vec![
        StubStrategy::failing("platform-x", error.clone()),
        StubStrategy::found("later", vec![memory_backend("later")]),
    ];

    let result = BackendDiscovery::discover(&strategies, fallback);

    assert_eq!(result.map(|discovery| discovery.backends().len()), Err(error));
}

#[rstest]
fn integration_message_names_the_platform() {
    let error = DiscoveryError::Integration {
        strategy: "weblogic".to_owned(),
        platform: "WebLogic".to_owned(),
        reason: "no runtime".to_owned(),
    };
    let message = error.to_string();
    assert!(message.contains("found WebLogic"));
    assert!(message.contains("wrong WebLogic version?"));
}

#[rstest]
fn refresh_flag_is_set_by_any_contributing_strategy(fallback: Backend) {
    let strategies = vec![
        StubStrategy::found("plain", vec![memory_backend("a")]),
        StubStrategy::refreshing("stale-cache", vec![memory_backend("b")]),
    ];

    let discovery = BackendDiscovery::discover(&strategies, fallback).expect("discovery");

    assert!(discovery.requires_metadata_refresh());
}

#[rstest]
fn empty_backend_set_is_rejected() {
    let result = BackendDiscovery::from_backends(BackendSet::default(), false);
    assert!(matches!(result, Err(DiscoveryError::NoBackendFound)));
}
