use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::application::use_cases::analytics::AnalyticsSink;
use crate::domain::processing::{ProcessingFlow, ProductType};

/// What a processing page needs to render after it has been mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingPage {
    pub product: ProductType,
    pub duration: Duration,
    pub destination: String,
}

impl ProcessingPage {
    /// Fires the mount event and resolves where the page navigates once the duration elapses.
    pub fn mount(flow: &ProcessingFlow, raw_query: &str, analytics: &dyn AnalyticsSink) -> Self {
        analytics.track(flow.mount_event());
        let destination = flow.destination(raw_query);
        debug!(
            product = %flow.product,
            duration_ms = flow.duration.as_millis() as u64,
            destination = %destination,
            "Processing page mounted"
        );
        Self {
            product: flow.product,
            duration: flow.duration,
            destination,
        }
    }
}

/// A mounted flow with its completion timer armed.
///
/// Dropping the session cancels the timer, so the completion callback never
/// runs for a flow that was unmounted early.
pub struct ProcessingSession {
    destination: String,
    timer: JoinHandle<()>,
}

impl ProcessingSession {
    /// Must be called from within a tokio runtime.
    pub fn mount<F>(
        flow: &ProcessingFlow,
        raw_query: &str,
        analytics: Arc<dyn AnalyticsSink>,
        on_complete: F,
    ) -> Self
    where
        F: FnOnce(String) + Send + 'static,
    {
        analytics.track(flow.mount_event());

        let destination = flow.destination(raw_query);
        let duration = flow.duration;
        let product = flow.product;
        let target = destination.clone();

        let timer = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            info!(product = %product, destination = %target, "Processing flow complete");
            on_complete(target);
        });

        Self { destination, timer }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn is_complete(&self) -> bool {
        self.timer.is_finished()
    }
}

impl Drop for ProcessingSession {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::analytics::SharedAnalyticsLog;
    use std::sync::Mutex;
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnOnce(String) + Send + 'static) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |destination| sink.lock().unwrap().push(destination))
    }

    #[test]
    fn test_page_mount_tracks_once_and_forwards_query() {
        let analytics = SharedAnalyticsLog::default();
        let page = ProcessingPage::mount(&ProcessingFlow::quick(), "id=42", &analytics);

        assert_eq!(page.destination, "/pre-result?id=42");
        assert_eq!(page.duration, Duration::from_millis(4000));
        let events = analytics.recent_events(10);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].product_type, ProductType::Quick);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_session_completes_after_four_seconds() {
        let analytics = SharedAnalyticsLog::default();
        let (calls, on_complete) = recorder();
        let session = ProcessingSession::mount(
            &ProcessingFlow::quick(),
            "id=42",
            Arc::new(analytics.clone()),
            on_complete,
        );

        assert_eq!(analytics.recent_events(10).len(), 1);
        assert_eq!(session.destination(), "/pre-result?id=42");

        sleep(Duration::from_millis(3999)).await;
        assert!(calls.lock().unwrap().is_empty());
        assert!(!session.is_complete());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["/pre-result?id=42".to_string()]);
        assert!(session.is_complete());
        assert_eq!(analytics.recent_events(10).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deep_session_completes_after_six_seconds() {
        let analytics = SharedAnalyticsLog::default();
        let (calls, on_complete) = recorder();
        let _session =
            ProcessingSession::mount(&ProcessingFlow::deep(), "", Arc::new(analytics.clone()), on_complete);

        sleep(Duration::from_millis(5999)).await;
        assert!(calls.lock().unwrap().is_empty());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["/pre-result".to_string()]);
        assert_eq!(
            analytics.recent_events(10)[0].product_type,
            ProductType::Deep
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_session_cancels_navigation() {
        let (calls, on_complete) = recorder();
        let session = ProcessingSession::mount(
            &ProcessingFlow::quick(),
            "id=1",
            Arc::new(SharedAnalyticsLog::default()),
            on_complete,
        );

        sleep(Duration::from_millis(1000)).await;
        drop(session);
        sleep(Duration::from_millis(10_000)).await;
        assert!(calls.lock().unwrap().is_empty());
    }
}
