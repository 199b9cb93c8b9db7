use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use wayfare_core::AirportQuery;
use wayfare_store::app_config::AutocompleteConfig;

use crate::gateway::FlightGateway;

/// Runs only the most recent of a burst of scheduled tasks.
///
/// Scheduling replaces any task still waiting out its delay. A task that has
/// already fired is never interrupted.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: Mutex::new(None) }
    }

    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so a later schedule cannot abort it mid-flight
            tokio::spawn(task);
        });

        if let Some(previous) = self.pending().replace(timer) {
            previous.abort();
        }
    }

    /// Drop the pending task, if any
    pub fn cancel(&self) {
        if let Some(previous) = self.pending().take() {
            previous.abort();
        }
    }

    fn pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[async_trait]
pub trait AirportLookup: Send + Sync + 'static {
    async fn lookup(&self, query: AirportQuery) -> Value;
}

#[async_trait]
impl AirportLookup for FlightGateway {
    async fn lookup(&self, query: AirportQuery) -> Value {
        self.search_airports(&query).await.body
    }
}

/// Airport search-as-you-type.
///
/// Input shorter than the minimum never reaches the lookup and cancels any
/// lookup still waiting on its debounce. Results land in a watch channel, the
/// latest finished lookup winning.
pub struct AirportAutocomplete {
    lookup: Arc<dyn AirportLookup>,
    debouncer: Debouncer,
    min_len: usize,
    results: Arc<watch::Sender<Option<Value>>>,
}

impl AirportAutocomplete {
    pub fn new(lookup: Arc<dyn AirportLookup>, config: &AutocompleteConfig) -> Self {
        let (results, _) = watch::channel(None);
        Self {
            lookup,
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            min_len: config.min_query_len,
            results: Arc::new(results),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Value>> {
        self.results.subscribe()
    }

    pub fn on_input(&self, text: &str) {
        if text.chars().count() < self.min_len {
            self.debouncer.cancel();
            return;
        }
        let Ok(query) = AirportQuery::parse(text) else {
            self.debouncer.cancel();
            return;
        };

        let lookup = self.lookup.clone();
        let results = self.results.clone();
        self.debouncer.schedule(async move {
            let body = lookup.lookup(query).await;
            results.send_replace(Some(body));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Recorder {
        queries: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AirportLookup for Recorder {
        async fn lookup(&self, query: AirportQuery) -> Value {
            self.queries.lock().unwrap().push(query.query.clone());
            json!({ "status": true, "data": [query.query] })
        }
    }

    fn autocomplete(recorder: &Arc<Recorder>) -> AirportAutocomplete {
        AirportAutocomplete::new(recorder.clone(), &AutocompleteConfig::default())
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_keystrokes_fires_once_with_last_text() {
        let recorder = Arc::new(Recorder::default());
        let autocomplete = autocomplete(&recorder);
        let rx = autocomplete.subscribe();

        autocomplete.on_input("La");
        wait(100).await;
        autocomplete.on_input("Lag");
        wait(100).await;
        autocomplete.on_input("Lago");
        wait(350).await;

        assert_eq!(recorder.queries(), vec!["Lago"]);
        assert_eq!(rx.borrow().clone(), Some(json!({ "status": true, "data": ["Lago"] })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_fires_before_delay() {
        let recorder = Arc::new(Recorder::default());
        let autocomplete = autocomplete(&recorder);

        autocomplete.on_input("Abuja");
        wait(250).await;
        assert!(recorder.queries().is_empty());
        wait(100).await;
        assert_eq!(recorder.queries(), vec!["Abuja"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_input_never_fires() {
        let recorder = Arc::new(Recorder::default());
        let autocomplete = autocomplete(&recorder);

        autocomplete.on_input("L");
        wait(1_000).await;
        assert!(recorder.queries().is_empty());
        assert!(autocomplete.subscribe().borrow().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_input_cancels_pending_lookup() {
        let recorder = Arc::new(Recorder::default());
        let autocomplete = autocomplete(&recorder);

        autocomplete.on_input("Lag");
        wait(100).await;
        autocomplete.on_input("L");
        wait(1_000).await;
        assert!(recorder.queries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_inputs_separated_by_idle_gap_each_fire() {
        let recorder = Arc::new(Recorder::default());
        let autocomplete = autocomplete(&recorder);

        autocomplete.on_input("Lagos");
        wait(400).await;
        autocomplete.on_input("London");
        wait(400).await;
        assert_eq!(recorder.queries(), vec!["Lagos", "London"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gateway_lookup_uses_mock_directory() {
        let gateway: Arc<dyn AirportLookup> = Arc::new(FlightGateway::offline());
        let autocomplete = AirportAutocomplete::new(gateway, &AutocompleteConfig::default());
        let rx = autocomplete.subscribe();

        autocomplete.on_input("Heathrow");
        wait(350).await;
        let body = rx.borrow().clone().unwrap();
        assert_eq!(body["data"][0]["skyId"], "LHR");
    }
}
