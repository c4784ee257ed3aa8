pub mod middleware;

pub use middleware::MetricsMiddleware;

use std::sync::{Arc, OnceLock};

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

use crate::config::AppConfig;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Handle on the process-wide Prometheus recorder
///
/// The recorder is installed by the first instance, later instances share it.
#[derive(Clone)]
pub struct AppMetrics {
    prometheus_handle: Arc<PrometheusHandle>,
}

impl AppMetrics {
    pub fn new() -> Self {
        Self::with_config(None)
    }

    pub fn with_config(config: Option<&AppConfig>) -> Self {
        let handle = PROMETHEUS_HANDLE.get_or_init(|| {
            let builder = match config {
                Some(cfg) => PrometheusBuilder::new()
                    .add_global_label("service", cfg.app.name.clone())
                    .add_global_label("version", cfg.app.version.clone())
                    .add_global_label("environment", cfg.app.environment.clone()),
                None => PrometheusBuilder::new(),
            };

            let builder = builder
                .set_buckets_for_metric(
                    Matcher::Full("http_requests_duration_seconds".to_string()),
                    &[0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0],
                )
                .expect("bucket list is not empty");

            Self::describe_metrics();

            builder
                .install_recorder()
                .expect("Failed to install Prometheus recorder")
        });

        Self {
            prometheus_handle: Arc::new(handle.clone()),
        }
    }

    fn describe_metrics() {
        describe_counter!("http_requests_total", "Total number of HTTP requests");
        describe_histogram!(
            "http_requests_duration_seconds",
            "HTTP request duration in seconds"
        );
        describe_gauge!(
            "http_requests_in_flight",
            "Number of HTTP requests currently being processed"
        );

        describe_counter!("session_cache_hits_total", "Sessions resolved from memory");
        describe_counter!("session_cache_misses_total", "Sessions loaded from the database");
        describe_counter!("auth_login_attempts_total", "Total number of login attempts");
        describe_counter!("auth_sessions_purged_total", "Expired sessions removed");

        describe_gauge!("manufacturers_total", "Number of manufacturers");
        describe_gauge!("drivers_total", "Number of drivers");
    }

    pub fn record_http_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        counter!(
            "http_requests_total",
            "method" => method.to_string(),
            "path" => path.to_string(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(
            "http_requests_duration_seconds",
            "method" => method.to_string(),
            "path" => path.to_string()
        )
        .record(duration_secs);
    }

    pub fn http_request_start(&self) {
        gauge!("http_requests_in_flight").increment(1.0);
    }

    pub fn http_request_end(&self) {
        gauge!("http_requests_in_flight").decrement(1.0);
    }

    pub fn record_session_cache_hit(&self) {
        counter!("session_cache_hits_total").increment(1);
    }

    pub fn record_session_cache_miss(&self) {
        counter!("session_cache_misses_total").increment(1);
    }

    pub fn record_login_attempt(&self, success: bool) {
        counter!("auth_login_attempts_total", "success" => success.to_string()).increment(1);
    }

    pub fn record_sessions_purged(&self, count: u64) {
        counter!("auth_sessions_purged_total").increment(count);
    }

    pub fn set_manufacturers_total(&self, count: u64) {
        gauge!("manufacturers_total").set(count as f64);
    }

    pub fn set_drivers_total(&self, count: u64) {
        gauge!("drivers_total").set(count as f64);
    }

    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}
