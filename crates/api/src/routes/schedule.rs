use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/teachers", get(handlers::schedule::list_teachers))
        .route(
            "/api/teachers/:id/schedule",
            get(handlers::schedule::get_teacher_schedule).post(handlers::schedule::add_teacher_slot),
        )
        .route(
            "/api/teachers/:id/schedule/conflicts",
            post(handlers::schedule::check_teacher_conflicts),
        )
        .route("/api/classes", get(handlers::schedule::list_classes))
        .route(
            "/api/classes/:id/schedule",
            get(handlers::schedule::get_class_schedule).post(handlers::schedule::add_class_slot),
        )
        .route(
            "/api/classes/:id/schedule/conflicts",
            post(handlers::schedule::check_class_conflicts),
        )
}
