#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use timetable_api::{ApiState, app, repository::ScheduleRepository, seed::SeedData};

/// A server over the built-in timetable.
pub fn seeded_server() -> TestServer {
    let seed = SeedData::builtin().expect("built-in seed is valid");
    let state = ApiState::seeded(seed).expect("built-in seed builds schedules");
    TestServer::new(app(Arc::new(state))).expect("Failed to start test server")
}

/// A server over an arbitrary repository.
pub fn server_with(repository: Arc<dyn ScheduleRepository>) -> TestServer {
    TestServer::new(app(Arc::new(ApiState::new(repository)))).expect("Failed to start test server")
}
