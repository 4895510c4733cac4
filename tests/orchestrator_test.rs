mod common;

use common::{batch, placeholder, ScriptedGateway};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tubesum::models::{ItemState, SummaryResult};
use tubesum::playlist::{BatchJob, JobScope, OrchestratorEvent, PlaylistOrchestrator, RunOutcome};
use tubesum::utils::{GatewayError, THROTTLE_INTERVAL};

fn drain(rx: &mut mpsc::UnboundedReceiver<OrchestratorEvent>) -> Vec<OrchestratorEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn test_items_fetched_in_order_with_throttle() {
    let gateway = Arc::new(ScriptedGateway::new().with_latency(Duration::from_millis(120)));
    let orchestrator = PlaylistOrchestrator::new(gateway.clone());

    let job = BatchJob::new(
        batch(vec![
            placeholder("a", "A"),
            SummaryResult::rejected("b", "B", "quota exceeded"),
            placeholder("c", "C"),
            SummaryResult::resolved("d", "D", "cached"),
            SummaryResult::placeholder("e", "E", None),
        ]),
        JobScope::All,
    );
    let run_id = job.run_id;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let outcome = orchestrator.run(job, tx).await;
    assert_eq!(outcome, RunOutcome::Completed);

    // Rejected and resolved entries are skipped; incomplete ones are still fetched
    assert_eq!(gateway.item_ids(), ["a", "c", "e"]);

    let calls = gateway.item_calls();
    for pair in calls.windows(2) {
        let gap = pair[1].started - pair[0].finished;
        assert!(gap >= THROTTLE_INTERVAL, "next fetch started after only {:?}", gap);
    }

    let events = drain(&mut rx);
    let order: Vec<(usize, bool)> = events
        .iter()
        .map(|event| {
            assert_eq!(event.run_id(), run_id);
            (event.index(), matches!(event, OrchestratorEvent::ItemLoading { .. }))
        })
        .collect();
    assert_eq!(
        order,
        [(0, true), (0, false), (2, true), (2, false), (4, true), (4, false)]
    );

    match &events[1] {
        OrchestratorEvent::ItemUpdated { item, .. } => {
            assert_eq!(item.state(), ItemState::Resolved("Summary of a"));
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_item_failure_does_not_stop_batch() {
    let gateway = Arc::new(
        ScriptedGateway::new().with_item("b", Err(GatewayError::with_status("Failed to fetch summary (status 500)", 500))),
    );
    let orchestrator = PlaylistOrchestrator::new(gateway.clone());
    let job = BatchJob::new(
        batch(vec![placeholder("a", "A"), placeholder("b", "B"), placeholder("c", "C")]),
        JobScope::All,
    );
    let (tx, mut rx) = mpsc::unbounded_channel();

    assert_eq!(orchestrator.run(job, tx).await, RunOutcome::Completed);
    assert_eq!(gateway.item_ids(), ["a", "b", "c"]);

    let updated: Vec<SummaryResult> = drain(&mut rx)
        .into_iter()
        .filter_map(|event| match event {
            OrchestratorEvent::ItemUpdated { item, .. } => Some(item),
            OrchestratorEvent::ItemLoading { .. } => None,
        })
        .collect();
    assert_eq!(updated.len(), 3);
    assert_eq!(updated[0].state(), ItemState::Resolved("Summary of a"));
    assert_eq!(
        updated[1].state(),
        ItemState::LoadFailed("Failed to fetch summary (status 500)")
    );
    assert!(updated[1].needs_fetch());
    assert_eq!(updated[2].state(), ItemState::Resolved("Summary of c"));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_after_current_item() {
    let gateway = Arc::new(ScriptedGateway::new().with_latency(Duration::from_millis(200)));
    let orchestrator = PlaylistOrchestrator::new(gateway.clone());
    let job = BatchJob::new(
        batch(vec![placeholder("a", "A"), placeholder("b", "B"), placeholder("c", "C")]),
        JobScope::All,
    );
    let cancel = job.cancel.clone();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let handle = tokio::spawn(async move { orchestrator.run(job, tx).await });

    // Wait for the first item to settle, then reset
    loop {
        match rx.recv().await {
            Some(OrchestratorEvent::ItemUpdated { index, .. }) => {
                assert_eq!(index, 0);
                break;
            }
            Some(_) => continue,
            None => panic!("run ended early"),
        }
    }
    cancel.cancel();

    assert_eq!(handle.await.unwrap(), RunOutcome::Cancelled);
    assert_eq!(gateway.item_ids(), ["a"]);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_before_start_fetches_nothing() {
    let gateway = Arc::new(ScriptedGateway::new());
    let orchestrator = PlaylistOrchestrator::new(gateway.clone());
    let job = BatchJob::new(batch(vec![placeholder("a", "A")]), JobScope::All);
    job.cancel.cancel();
    let (tx, _rx) = mpsc::unbounded_channel();

    assert_eq!(orchestrator.run(job, tx).await, RunOutcome::Cancelled);
    assert!(gateway.item_ids().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_closed_event_sink_fails_run() {
    let gateway = Arc::new(ScriptedGateway::new());
    let orchestrator = PlaylistOrchestrator::new(gateway.clone());
    let job = BatchJob::new(batch(vec![placeholder("a", "A")]), JobScope::All);
    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);

    assert!(matches!(
        orchestrator.run(job, tx).await,
        RunOutcome::Failed(_)
    ));
}

#[tokio::test(start_paused = true)]
async fn test_single_item_skips_throttle() {
    let latency = Duration::from_millis(50);
    let gateway = Arc::new(ScriptedGateway::new().with_latency(latency));
    let orchestrator = PlaylistOrchestrator::new(gateway.clone());
    let job = BatchJob::new(
        batch(vec![placeholder("a", "A"), placeholder("b", "B")]),
        JobScope::Item(1),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();

    let started = tokio::time::Instant::now();
    assert_eq!(orchestrator.run(job, tx).await, RunOutcome::Completed);
    assert!(started.elapsed() < THROTTLE_INTERVAL);
    assert_eq!(gateway.item_ids(), ["b"]);
    assert_eq!(drain(&mut rx).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_single_item_on_rejected_entry_is_noop() {
    let gateway = Arc::new(ScriptedGateway::new());
    let orchestrator = PlaylistOrchestrator::new(gateway.clone());
    let job = BatchJob::new(
        batch(vec![SummaryResult::rejected("a", "A", "private video")]),
        JobScope::Item(0),
    );
    let (tx, _rx) = mpsc::unbounded_channel();

    assert_eq!(orchestrator.run(job, tx).await, RunOutcome::Completed);
    assert!(gateway.item_ids().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_item_fetch_uses_batch_style() {
    let gateway = Arc::new(ScriptedGateway::new());
    let orchestrator = PlaylistOrchestrator::new(gateway.clone()).with_throttle(Duration::from_millis(10));
    let mut playlist = batch(vec![placeholder("a", "A")]);
    playlist.style = tubesum::models::SummaryStyle::Bullet;
    let (tx, _rx) = mpsc::unbounded_channel();

    orchestrator.run(BatchJob::new(playlist, JobScope::All), tx).await;
    assert_eq!(gateway.item_calls()[0].style, tubesum::models::SummaryStyle::Bullet);
}
