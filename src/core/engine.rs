use crate::core::Pipeline;
use crate::domain::model::DeliverySummary;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a [`Pipeline`] through its three phases and reports the final
/// delivery accounting.
pub struct HoroscopeEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> HoroscopeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<DeliverySummary> {
        tracing::info!("🚀 Starting daily horoscope run");
        self.monitor.log_stats("startup");

        tracing::info!("📥 Loading subscriber list...");
        let subscribers = self.pipeline.extract().await?;
        tracing::info!("📥 Loaded {} subscriber(s)", subscribers.len());
        self.monitor.log_stats("extract");

        tracing::info!("📝 Composing predictions...");
        let composed = self.pipeline.transform(subscribers).await?;
        tracing::info!(
            "📝 Composed {} email(s), skipped {} record(s)",
            composed.emails.len(),
            composed.skipped
        );
        self.monitor.log_stats("transform");

        tracing::info!("📧 Delivering emails...");
        let summary = self.pipeline.load(composed).await?;
        tracing::info!(
            "📊 Summary: {}/{} emails sent successfully",
            summary.sent,
            summary.attempted
        );
        self.monitor.log_final_stats();

        Ok(summary)
    }
}
