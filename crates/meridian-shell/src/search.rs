//! The global search controller.
//!
//! Turns rapid keystrokes into at most one settled network call per
//! pause, keeps the displayed results in lockstep with the most recently
//! issued query, and routes a selected result to its destination view.
//!
//! Fetches are driven solely by the *stabilized* query: raw keystrokes go
//! into the debouncer, and only a [`ShellEvent::QueryStabilized`] coming
//! back through the event loop can issue network work. Each issued fetch
//! is tagged with a generation; a completion whose tag no longer matches
//! is stale and is discarded on arrival, so out-of-order responses can
//! never show an older query's results. A blank stabilized query bumps
//! the generation too, so clearing the box invalidates whatever is
//! still in flight.

use std::sync::Arc;
use std::time::Duration;

use meridian_core::{ResultKind, SearchResult};
use tokio::sync::mpsc::UnboundedSender;

use crate::debounce::Debouncer;
use crate::event::ShellEvent;
use crate::gateway::{GatewayError, SearchGateway};
use crate::notice::Notice;
use crate::route::Route;

/// How long the search input must be quiet before a fetch is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Maximum entries shown per kind group, independent of total matches.
pub const GROUP_CAP: usize = 5;

/// One kind's slice of the grouped display.
#[derive(Debug, PartialEq)]
pub struct ResultGroup<'a> {
    /// The kind every entry in this group shares.
    pub kind: ResultKind,
    /// At most [`GROUP_CAP`] entries, in result order.
    pub entries: Vec<&'a SearchResult>,
}

impl ResultGroup<'_> {
    /// Human heading for this group.
    pub fn heading(&self) -> &'static str {
        self.kind.heading()
    }
}

/// Owns the search panel state and the query → fetch pipeline.
pub struct SearchController {
    gateway: Arc<dyn SearchGateway>,
    events: UnboundedSender<ShellEvent>,
    debouncer: Debouncer<String>,
    query: String,
    debounced_query: String,
    results: Vec<SearchResult>,
    loading: bool,
    open: bool,
    generation: u64,
}

impl SearchController {
    /// Create a controller reporting completions on `events`.
    pub fn new(gateway: Arc<dyn SearchGateway>, events: UnboundedSender<ShellEvent>) -> Self {
        Self::with_debounce(gateway, events, SEARCH_DEBOUNCE)
    }

    /// Create a controller with a custom debounce delay.
    pub fn with_debounce(
        gateway: Arc<dyn SearchGateway>,
        events: UnboundedSender<ShellEvent>,
        delay: Duration,
    ) -> Self {
        let settled = events.clone();
        let debouncer = Debouncer::new(delay, move |query| {
            let _ = settled.send(ShellEvent::QueryStabilized(query));
        });
        Self {
            gateway,
            events,
            debouncer,
            query: String::new(),
            debounced_query: String::new(),
            results: Vec::new(),
            loading: false,
            open: false,
            generation: 0,
        }
    }

    // ── Render-ready state ───────────────────────────────────────────

    /// The raw query, updated on every keystroke.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The stabilized query the current results correspond to.
    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    /// The current result set, in server order.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Whether a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Whether the panel is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Results grouped by kind for display: Products, Customers, Orders,
    /// Invoices, in that order, each independently capped at
    /// [`GROUP_CAP`]. Kinds with no matches are omitted entirely so no
    /// empty heading renders.
    pub fn grouped_results(&self) -> Vec<ResultGroup<'_>> {
        ResultKind::DISPLAY_ORDER
            .iter()
            .filter_map(|kind| {
                let entries: Vec<&SearchResult> = self
                    .results
                    .iter()
                    .filter(|r| r.kind == *kind)
                    .take(GROUP_CAP)
                    .collect();
                if entries.is_empty() {
                    None
                } else {
                    Some(ResultGroup {
                        kind: *kind,
                        entries,
                    })
                }
            })
            .collect()
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Show the panel. Opening never fetches; only stabilized query
    /// changes do.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the panel. State (query, results) is kept for reopening.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Toggle panel visibility (the keyboard-shortcut action).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Record a keystroke: updates the raw query immediately and restarts
    /// the stabilization timer.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.query = query.clone();
        self.debouncer.update(query);
    }

    /// Reset the query to empty. Does not close the panel; returning
    /// focus to the input field is the embedding view's job.
    pub fn clear(&mut self) {
        self.set_query(String::new());
    }

    /// Select a result: closes the panel and returns the destination the
    /// embedding router should navigate to. A kind this build cannot
    /// route returns `None` (logged, not fatal).
    pub fn select(&mut self, result: &SearchResult) -> Option<Route> {
        self.open = false;
        Route::for_result(result)
    }

    // ── Event handling (called by Shell on the event loop) ───────────

    pub(crate) fn handle_query_stabilized(&mut self, query: String) {
        self.debounced_query = query.clone();
        // Every stabilized change supersedes whatever is in flight,
        // including a change to blank.
        self.generation = self.generation.wrapping_add(1);

        if query.trim().is_empty() {
            self.results.clear();
            self.loading = false;
            return;
        }

        self.loading = true;
        let generation = self.generation;
        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        tracing::debug!(query = %query, generation, "issuing search fetch");
        tokio::spawn(async move {
            let outcome = gateway.search(&query).await;
            let _ = events.send(ShellEvent::SearchCompleted {
                generation,
                query,
                outcome,
            });
        });
    }

    pub(crate) fn handle_search_completed(
        &mut self,
        generation: u64,
        query: String,
        outcome: Result<Vec<SearchResult>, GatewayError>,
    ) -> Option<Notice> {
        if generation != self.generation {
            tracing::debug!(query = %query, "discarding stale search response");
            return None;
        }

        self.loading = false;
        match outcome {
            Ok(results) => {
                self.results = results;
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, query = %query, "search fetch failed");
                self.results.clear();
                Some(Notice::error(
                    "Search failed",
                    "Failed to fetch search results. Please try again.",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::ResultId;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc::{self, UnboundedReceiver};
    use tokio::task::yield_now;
    use tokio::time::advance;

    fn result(id: &str, kind: ResultKind, name: &str) -> SearchResult {
        SearchResult {
            id: ResultId::from(id),
            kind,
            name: name.into(),
            sku: None,
            email: None,
            order_number: None,
            total: None,
        }
    }

    /// Scripted gateway: per-query latency and response, call counting.
    #[derive(Default)]
    struct ScriptedSearch {
        delays: HashMap<String, Duration>,
        responses: HashMap<String, Result<Vec<SearchResult>, GatewayError>>,
        calls: AtomicUsize,
    }

    impl ScriptedSearch {
        fn respond(mut self, query: &str, response: Result<Vec<SearchResult>, GatewayError>) -> Self {
            self.responses.insert(query.into(), response);
            self
        }

        fn delayed(mut self, query: &str, delay_ms: u64) -> Self {
            self.delays.insert(query.into(), Duration::from_millis(delay_ms));
            self
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl SearchGateway for ScriptedSearch {
        async fn search(&self, query: &str) -> Result<Vec<SearchResult>, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(query) {
                tokio::time::sleep(*delay).await;
            }
            self.responses.get(query).cloned().unwrap_or_else(|| Ok(vec![]))
        }
    }

    fn controller(
        gateway: Arc<ScriptedSearch>,
    ) -> (SearchController, UnboundedReceiver<ShellEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (SearchController::new(gateway, tx), rx)
    }

    /// Feed every queued event back into the controller, collecting any
    /// notices it raises.
    fn pump(controller: &mut SearchController, rx: &mut UnboundedReceiver<ShellEvent>) -> Vec<Notice> {
        let mut notices = Vec::new();
        while let Ok(event) = rx.try_recv() {
            match event {
                ShellEvent::QueryStabilized(q) => controller.handle_query_stabilized(q),
                ShellEvent::SearchCompleted {
                    generation,
                    query,
                    outcome,
                } => {
                    if let Some(n) = controller.handle_search_completed(generation, query, outcome) {
                        notices.push(n);
                    }
                }
                other => panic!("unexpected event: {other:?}"),
            }
        }
        notices
    }

    /// Let freshly spawned tasks register their timers, move the paused
    /// clock, then let woken tasks run.
    async fn settle(ms: u64) {
        yield_now().await;
        advance(Duration::from_millis(ms)).await;
        yield_now().await;
    }

    /// Let an already-issued, delay-free fetch task complete and report.
    async fn drain() {
        yield_now().await;
        yield_now().await;
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn typing_fetches_once_after_the_pause() {
        let gateway = Arc::new(
            ScriptedSearch::default()
                .respond("lap", Ok(vec![result("1", ResultKind::Product, "Laptop Pro X")])),
        );
        let (mut ctrl, mut rx) = controller(Arc::clone(&gateway));

        ctrl.open();
        ctrl.set_query("l");
        settle(100).await;
        ctrl.set_query("la");
        settle(100).await;
        ctrl.set_query("lap");
        settle(300).await;
        pump(&mut ctrl, &mut rx);
        assert!(ctrl.loading());

        drain().await;
        pump(&mut ctrl, &mut rx);

        assert!(!ctrl.loading());
        assert_eq!(gateway.call_count(), 1, "one settled call per burst");
        assert_eq!(ctrl.results().len(), 1);
        assert_eq!(ctrl.debounced_query(), "lap");
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn blank_query_never_touches_the_network() {
        let gateway = Arc::new(ScriptedSearch::default());
        let (mut ctrl, mut rx) = controller(Arc::clone(&gateway));

        ctrl.set_query("   ");
        settle(300).await;
        pump(&mut ctrl, &mut rx);

        assert_eq!(gateway.call_count(), 0);
        assert!(ctrl.results().is_empty());
        assert!(!ctrl.loading());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn opening_the_panel_does_not_fetch() {
        let gateway = Arc::new(ScriptedSearch::default());
        let (mut ctrl, mut rx) = controller(Arc::clone(&gateway));

        ctrl.open();
        settle(500).await;
        pump(&mut ctrl, &mut rx);

        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn displayed_results_track_the_most_recently_issued_query() {
        // "first" answers slowly, "second" quickly: the second response
        // arrives first, then the first's late completion must be dropped.
        let gateway = Arc::new(
            ScriptedSearch::default()
                .respond("first", Ok(vec![result("f", ResultKind::Product, "First")]))
                .delayed("first", 500)
                .respond("second", Ok(vec![result("s", ResultKind::Product, "Second")]))
                .delayed("second", 50),
        );
        let (mut ctrl, mut rx) = controller(Arc::clone(&gateway));

        ctrl.set_query("first");
        settle(300).await;
        pump(&mut ctrl, &mut rx); // issues fetch for "first"

        ctrl.set_query("second");
        settle(300).await;
        pump(&mut ctrl, &mut rx); // issues fetch for "second"

        settle(50).await;
        pump(&mut ctrl, &mut rx); // "second" completes and lands
        assert_eq!(ctrl.results()[0].name, "Second");
        assert!(!ctrl.loading());

        settle(150).await;
        let notices = pump(&mut ctrl, &mut rx); // "first" completes, stale
        assert!(notices.is_empty());
        assert_eq!(ctrl.results()[0].name, "Second");
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn clearing_invalidates_the_in_flight_fetch() {
        let gateway = Arc::new(
            ScriptedSearch::default()
                .respond("slow", Ok(vec![result("x", ResultKind::Product, "Slow")]))
                .delayed("slow", 400),
        );
        let (mut ctrl, mut rx) = controller(Arc::clone(&gateway));

        ctrl.set_query("slow");
        settle(300).await;
        pump(&mut ctrl, &mut rx); // fetch in flight

        ctrl.clear();
        assert_eq!(ctrl.query(), "");
        settle(300).await;
        pump(&mut ctrl, &mut rx); // blank stabilizes, results cleared
        assert!(!ctrl.loading());

        settle(200).await;
        pump(&mut ctrl, &mut rx); // the slow completion arrives, stale
        assert!(ctrl.results().is_empty());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn fetch_failure_clears_results_and_raises_a_notice() {
        let gateway = Arc::new(ScriptedSearch::default().respond(
            "lap",
            Err(GatewayError {
                endpoint: "GET /api/search".into(),
                detail: "connection reset".into(),
            }),
        ));
        let (mut ctrl, mut rx) = controller(gateway);

        ctrl.set_query("lap");
        settle(300).await;
        pump(&mut ctrl, &mut rx);
        drain().await;
        let notices = pump(&mut ctrl, &mut rx);

        assert!(ctrl.results().is_empty());
        assert!(!ctrl.loading());
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Search failed");
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn empty_result_set_renders_no_groups() {
        let gateway = Arc::new(ScriptedSearch::default().respond("xyz", Ok(vec![])));
        let (mut ctrl, mut rx) = controller(gateway);

        ctrl.set_query("xyz");
        settle(300).await;
        pump(&mut ctrl, &mut rx);
        drain().await;
        pump(&mut ctrl, &mut rx);

        assert!(ctrl.results().is_empty());
        assert!(ctrl.grouped_results().is_empty(), "no group headers render");
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn selecting_a_product_routes_and_closes() {
        let gateway = Arc::new(ScriptedSearch::default().respond(
            "lap",
            Ok(vec![{
                let mut r = result("1", ResultKind::Product, "Laptop Pro X");
                r.sku = Some("P001".into());
                r
            }]),
        ));
        let (mut ctrl, mut rx) = controller(gateway);

        ctrl.open();
        ctrl.set_query("lap");
        settle(300).await;
        pump(&mut ctrl, &mut rx);
        drain().await;
        pump(&mut ctrl, &mut rx);

        let groups = ctrl.grouped_results();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].heading(), "Products");
        assert_eq!(groups[0].entries.len(), 1);

        let selected = groups[0].entries[0].clone();
        let route = ctrl.select(&selected).unwrap();
        assert_eq!(route.path(), "/inventory/products/1");
        assert!(!ctrl.is_open());
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn selecting_an_unknown_kind_is_a_no_op() {
        let gateway = Arc::new(ScriptedSearch::default());
        let (mut ctrl, _rx) = controller(gateway);

        ctrl.open();
        let exotic = result("z", ResultKind::Unknown, "Mystery");
        assert_eq!(ctrl.select(&exotic), None);
        assert!(!ctrl.is_open(), "panel still closes");
    }

    // ── Grouping properties ──────────────────────────────────────────

    fn arb_kind() -> impl Strategy<Value = ResultKind> {
        prop_oneof![
            Just(ResultKind::Product),
            Just(ResultKind::Customer),
            Just(ResultKind::Order),
            Just(ResultKind::Invoice),
            Just(ResultKind::Unknown),
        ]
    }

    proptest! {
        /// Groups respect the per-kind cap, omit empty kinds, never show
        /// Unknown, and keep the fixed display order.
        #[test]
        fn grouping_invariants(kinds in prop::collection::vec(arb_kind(), 0..40)) {
            let (tx, _rx) = mpsc::unbounded_channel();
            let mut ctrl = SearchController::new(Arc::new(ScriptedSearch::default()), tx);
            ctrl.results = kinds
                .iter()
                .enumerate()
                .map(|(i, kind)| result(&i.to_string(), *kind, "r"))
                .collect();

            let groups = ctrl.grouped_results();

            for group in &groups {
                prop_assert!(group.entries.len() <= GROUP_CAP);
                prop_assert!(!group.entries.is_empty());
                prop_assert!(group.kind != ResultKind::Unknown);
                for entry in &group.entries {
                    prop_assert_eq!(entry.kind, group.kind);
                }
            }

            let positions: Vec<usize> = groups
                .iter()
                .map(|g| {
                    ResultKind::DISPLAY_ORDER
                        .iter()
                        .position(|k| *k == g.kind)
                        .unwrap()
                })
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            prop_assert_eq!(positions, sorted, "display order is fixed");
        }
    }
}
