use crate::ports::outbound::ProgressReporter;

/// TracingProgressReporter adapter forwarding progress to `tracing`
///
/// Messages become events on the `progress` target, so the subscriber
/// installed by the binary decides where and whether they are shown. Stdout
/// stays reserved for the forward pointer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgressReporter;

impl TracingProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for TracingProgressReporter {
    fn report(&self, message: &str) {
        tracing::info!(target: "progress", "{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        tracing::debug!(
            target: "progress",
            current,
            total,
            "{}",
            message.unwrap_or("in progress")
        );
    }

    fn report_error(&self, message: &str) {
        tracing::warn!(target: "progress", "{}", message);
    }

    fn report_completion(&self, message: &str) {
        tracing::info!(target: "progress", "{}", message);
    }
}
