mod common;

use common::*;
use glosstip::models::ScrollOffset;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_single_word_renders_primary_then_secondary() {
    let iciba = FakeSource::new("iciba", 120, hello);
    let google = FakeSource::new("Google Translate", 80, translate);
    let mut h = harness(dual(&iciba, &google, true, true, 1500));

    let session = h.coordinator.on_pointer_up("hello", rect()).await;
    assert!(session.is_some());
    h.coordinator.settle().await;

    assert_eq!(iciba.queries(), vec!["hello"]);
    assert_eq!(google.queries(), vec!["hello"]);

    let primary = h.board.panel(0).unwrap();
    let secondary = h.board.panel(1).unwrap();
    assert_eq!(primary.text, "iciba:\ninterjection: hello");
    assert_eq!(secondary.text, "Google Translate:\n译 hello");

    assert_eq!(primary.position.left, 100.0);
    assert_eq!(primary.position.top, 130.0);
    assert_eq!(secondary.position.top, 130.0 + primary.height + 10.0);
}

#[tokio::test(start_paused = true)]
async fn test_secondary_fires_after_primary_settles() {
    let iciba = FakeSource::new("iciba", 300, define);
    let google = FakeSource::new("Google Translate", 50, translate);
    let mut h = harness(dual(&iciba, &google, true, true, 1500));

    let sentence = "hello world this is a very long test sentence";
    h.coordinator.on_pointer_up(sentence, rect()).await;
    h.coordinator.settle().await;

    // Passes the alphabetic gate
    assert_eq!(iciba.queries(), vec![sentence]);
    let gap = google.started_at(0) - iciba.started_at(0);
    assert!(gap >= Duration::from_millis(310), "secondary started after {:?}", gap);
}

#[tokio::test(start_paused = true)]
async fn test_gated_query_skips_primary() {
    let iciba = FakeSource::new("iciba", 10, define);
    let google = FakeSource::new("Google Translate", 10, translate);
    let mut h = harness(dual(&iciba, &google, true, true, 1500));

    h.coordinator.on_pointer_up("안녕하세요", rect()).await;
    h.coordinator.settle().await;

    assert!(iciba.queries().is_empty());
    assert!(h.board.panel(0).is_none());

    // The substitute takes the top of the stack
    let secondary = h.board.panel(1).unwrap();
    assert_eq!(secondary.text, "Google Translate:\n译 안녕하세요");
    assert_eq!(secondary.position.top, 130.0);
}

#[tokio::test(start_paused = true)]
async fn test_gated_single_source_renders_no_result() {
    let iciba = FakeSource::new("iciba", 10, define);
    let mut h = harness(single_gated(&iciba));

    h.coordinator.on_pointer_up("123", rect()).await;
    h.coordinator.settle().await;

    assert!(iciba.queries().is_empty());
    assert_eq!(h.board.panel(0).unwrap().text, "iciba: no result");
}

#[tokio::test(start_paused = true)]
async fn test_overlong_selection_does_nothing() {
    let iciba = FakeSource::new("iciba", 10, define);
    let google = FakeSource::new("Google Translate", 10, translate);
    let mut h = harness(dual(&iciba, &google, true, true, 1500));

    let session = h.coordinator.on_pointer_up(&"a".repeat(250), rect()).await;
    h.coordinator.settle().await;

    assert!(session.is_none());
    assert!(iciba.queries().is_empty());
    assert!(google.queries().is_empty());
    assert!(h.speech.spoken().is_empty());
    assert!(h.board.is_empty());
    assert!(!h.coordinator.is_armed());
}

#[tokio::test(start_paused = true)]
async fn test_blank_selection_does_nothing() {
    let youdao = FakeSource::new("Youdao", 10, define);
    let mut h = harness(single(&youdao));

    assert!(h.coordinator.on_pointer_up(" \n\t ", rect()).await.is_none());
    assert!(youdao.queries().is_empty());
    assert!(h.speech.spoken().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_primary_transport_failure_still_runs_secondary() {
    let iciba = FakeSource::new("iciba", 40, refused);
    let google = FakeSource::new("Google Translate", 40, translate);
    let mut h = harness(dual(&iciba, &google, true, true, 1500));

    h.coordinator.on_pointer_up("hello", rect()).await;
    h.coordinator.settle().await;

    assert_eq!(h.board.panel(0).unwrap().text, "iciba: request failed");
    assert_eq!(h.board.panel(1).unwrap().text, "Google Translate:\n译 hello");
}

#[tokio::test(start_paused = true)]
async fn test_primary_parse_failure_continues_chain() {
    let iciba = FakeSource::new("iciba", 40, garbled);
    let google = FakeSource::new("Google Translate", 40, refused);
    let mut h = harness(dual(&iciba, &google, true, true, 1500));

    h.coordinator.on_pointer_up("hello", rect()).await;
    h.coordinator.settle().await;

    assert_eq!(google.queries(), vec!["hello"]);
    assert_eq!(h.board.panel(0).unwrap().text, "iciba: parse failed");
    assert_eq!(
        h.board.panel(1).unwrap().text,
        "Google Translate: request failed"
    );
}

#[tokio::test(start_paused = true)]
async fn test_primary_empty_result_continues_chain() {
    let iciba = FakeSource::new("iciba", 40, nothing);
    let google = FakeSource::new("Google Translate", 40, refused);
    let mut h = harness(dual(&iciba, &google, true, true, 1500));

    h.coordinator.on_pointer_up("hello", rect()).await;
    h.coordinator.settle().await;

    assert_eq!(google.queries(), vec!["hello"]);
    assert_eq!(h.board.panel(0).unwrap().text, "iciba: no result");
    assert_eq!(
        h.board.panel(1).unwrap().text,
        "Google Translate: request failed"
    );
}

#[tokio::test(start_paused = true)]
async fn test_slow_secondary_shows_timeout_once() {
    let iciba = FakeSource::new("iciba", 10, hello);
    let google = FakeSource::new("Google Translate", 2000, translate);
    let mut h = harness(dual(&iciba, &google, true, true, 1500));

    h.coordinator.on_pointer_up("hello", rect()).await;
    h.coordinator.settle().await;
    assert_eq!(h.board.panel(1).unwrap().text, "Google Translate: timed out");

    // The late answer is never drawn
    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(h.board.panel(1).unwrap().text, "Google Translate: timed out");
    assert_eq!(h.board.panels().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_patient_timeout_lets_slow_secondary_win() {
    let iciba = FakeSource::new("iciba", 10, hello);
    let google = FakeSource::new("Google Translate", 2000, translate);
    let mut h = harness(dual(&iciba, &google, true, true, 5000));

    h.coordinator.on_pointer_up("hello", rect()).await;
    h.coordinator.settle().await;

    assert_eq!(h.board.panel(1).unwrap().text, "Google Translate:\n译 hello");
}

#[tokio::test(start_paused = true)]
async fn test_parallel_issues_primary_first_without_waiting() {
    let youdao = FakeSource::new("Youdao", 400, define);
    let google = FakeSource::new("Google Translate", 50, translate);
    let mut h = harness(dual(&youdao, &google, false, false, 1500));

    h.coordinator.on_pointer_up("hello", rect()).await;
    h.coordinator.settle().await;

    assert_eq!(youdao.started_at(0), google.started_at(0));
    assert_eq!(h.board.panels().len(), 2);

    // Secondary rendered first but is restacked under the primary
    let primary = h.board.panel(0).unwrap();
    let secondary = h.board.panel(1).unwrap();
    assert_eq!(primary.position.top, 130.0);
    assert_eq!(secondary.position.top, 130.0 + primary.height + 10.0);
}

#[tokio::test(start_paused = true)]
async fn test_new_selection_supersedes_previous_one() {
    let iciba = FakeSource::new("iciba", 500, define);
    let google = FakeSource::new("Google Translate", 50, translate);
    let mut h = harness(dual(&iciba, &google, true, true, 1500));

    h.coordinator.on_pointer_up("first", rect()).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    h.coordinator.on_pointer_up("second", rect()).await;
    h.coordinator.settle().await;

    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(h.board.panel(0).unwrap().text, "iciba:\ndef of second");
    assert_eq!(h.board.panel(1).unwrap().text, "Google Translate:\n译 second");
    assert_eq!(google.queries(), vec!["second"]);
    assert_eq!(h.speech.spoken(), vec!["first", "second"]);
}

#[tokio::test(start_paused = true)]
async fn test_speaks_once_per_selection_regardless_of_outcome() {
    let youdao = FakeSource::new("Youdao", 10, refused);
    let mut h = harness(single(&youdao));

    h.coordinator.on_pointer_up("  hello  ", rect()).await;
    h.coordinator.settle().await;

    assert_eq!(h.speech.spoken(), vec!["hello"]);
    assert_eq!(youdao.queries(), vec!["hello"]);
    assert_eq!(h.board.panel(0).unwrap().text, "Youdao: request failed");
}

#[tokio::test(start_paused = true)]
async fn test_panels_follow_scroll_offset() {
    let youdao = FakeSource::new("Youdao", 10, define);
    let mut h = harness(single(&youdao));

    h.coordinator.on_scroll(ScrollOffset::new(5.0, 400.0)).await;
    h.coordinator.on_pointer_up("hello", rect()).await;
    h.coordinator.settle().await;

    let panel = h.board.panel(0).unwrap();
    assert_eq!(panel.position.left, 105.0);
    assert_eq!(panel.position.top, 530.0);
}
