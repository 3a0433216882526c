use tracing::info;

pub trait Metrics: Send + Sync {
    fn log_request_processed(&self);
}

pub struct LoggingMetrics;

impl Metrics for LoggingMetrics {
    fn log_request_processed(&self) {
        info!(target: "metrics", "HTTP trigger function processed a request.");
    }
}
