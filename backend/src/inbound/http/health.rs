//! Health endpoints: a liveness probe and a dependency readiness report.
//!
//! ```text
//! GET /health
//! GET /health/dependency
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use actix_web::{HttpResponse, get, http::header, web};
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::ports::DependencyHealthCheck;

/// Process health flags plus the dependencies probed on readiness.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    dependencies: Vec<Arc<dyn DependencyHealthCheck>>,
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl HealthState {
    /// Start live but not ready.
    pub fn new(dependencies: Vec<Arc<dyn DependencyHealthCheck>>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            dependencies,
        }
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness probes, e.g. while draining for shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Probe every dependency concurrently.
    pub async fn report(&self) -> HealthReport {
        let started = Instant::now();
        let checks = self.dependencies.iter().map(|check| async move {
            let check_started = Instant::now();
            let outcome = check.check().await;
            (check.name().to_owned(), outcome, check_started.elapsed())
        });
        let results = join_all(checks).await;

        let mut entries = BTreeMap::new();
        for (name, outcome, elapsed) in results {
            let entry = match outcome {
                Ok(()) => HealthEntry {
                    duration: format_duration(elapsed),
                    status: HealthStatus::Healthy,
                    error: None,
                },
                Err(message) => {
                    warn!(dependency = %name, error = %message, "dependency health check failed");
                    HealthEntry {
                        duration: format_duration(elapsed),
                        status: HealthStatus::Unhealthy,
                        error: Some(message),
                    }
                }
            };
            entries.insert(name, entry);
        }

        let healthy = self.is_ready()
            && entries
                .values()
                .all(|entry| entry.status == HealthStatus::Healthy);

        HealthReport {
            status: if healthy {
                HealthStatus::Healthy
            } else {
                HealthStatus::Unhealthy
            },
            total_duration: format_duration(started.elapsed()),
            entries,
        }
    }

    fn flag_response(healthy: bool) -> HttpResponse {
        let mut response = if healthy {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntry {
    pub duration: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthStatus,
    pub total_duration: String,
    pub entries: BTreeMap<String, HealthEntry>,
}

/// `hh:mm:ss.fffffff`, the layout dashboards built for this report expect.
fn format_duration(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let ticks = elapsed.subsec_nanos() / 100;
    format!(
        "{:02}:{:02}:{:02}.{ticks:07}",
        total_secs / 3600,
        (total_secs / 60) % 60,
        total_secs % 60
    )
}

/// Liveness probe: 200 while the process is alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::flag_response(state.is_alive())
}

/// Readiness report covering every registered dependency.
#[utoipa::path(
    get,
    path = "/health/dependency",
    tags = ["health"],
    responses(
        (status = 200, description = "All dependencies healthy", body = HealthReport),
        (status = 503, description = "A dependency is unhealthy or startup is incomplete", body = HealthReport)
    )
)]
#[get("/health/dependency")]
pub async fn readiness(state: web::Data<HealthState>) -> HttpResponse {
    let report = state.report().await;
    let mut response = match report.status {
        HealthStatus::Healthy => HttpResponse::Ok(),
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable(),
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(report)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MockDependencyHealthCheck;

    fn dependency_check(
        name: &'static str,
        outcome: Result<(), String>,
    ) -> Arc<dyn DependencyHealthCheck> {
        let mut check = MockDependencyHealthCheck::new();
        check.expect_name().return_const(name);
        check.expect_check().return_once(move || outcome);
        Arc::new(check)
    }

    async fn call(state: HealthState, uri: &str) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(live)
                .service(readiness),
        )
        .await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn liveness_follows_the_live_flag() {
        let res = call(HealthState::default(), "/health").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-store"[..])
        );

        let draining = HealthState::default();
        draining.mark_unhealthy();
        let res = call(draining, "/health").await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn readiness_reports_each_dependency() {
        let state = HealthState::new(vec![dependency_check("Database", Ok(()))]);
        state.mark_ready();

        let res = call(state, "/health/dependency").await;
        assert_eq!(res.status(), StatusCode::OK);

        let report: HealthReport = actix_test::read_body_json(res).await;
        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.entries["Database"].status, HealthStatus::Healthy);
        assert!(report.entries["Database"].error.is_none());
    }

    #[actix_web::test]
    async fn failing_dependency_makes_readiness_unavailable() {
        let state = HealthState::new(vec![
            dependency_check("Database", Err("connection refused".to_owned())),
            dependency_check("Other", Ok(())),
        ]);
        state.mark_ready();

        let res = call(state, "/health/dependency").await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

        let report: HealthReport = actix_test::read_body_json(res).await;
        assert_eq!(report.status, HealthStatus::Unhealthy);
        assert_eq!(
            report.entries["Database"].error.as_deref(),
            Some("connection refused")
        );
        assert_eq!(report.entries["Other"].status, HealthStatus::Healthy);
    }

    #[actix_web::test]
    async fn not_ready_until_startup_completes() {
        let res = call(HealthState::default(), "/health/dependency").await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[rstest]
    #[case::zero(Duration::ZERO, "00:00:00.0000000")]
    #[case::millis(Duration::from_millis(1_234), "00:00:01.2340000")]
    #[case::hours(Duration::from_secs(3_723), "01:02:03.0000000")]
    fn durations_use_clock_layout(#[case] elapsed: Duration, #[case] expected: &str) {
        assert_eq!(format_duration(elapsed), expected);
    }
}
