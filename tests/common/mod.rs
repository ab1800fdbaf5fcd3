#![allow(dead_code)]

use async_trait::async_trait;
use glosstip::coordinator::{LookupCoordinator, LookupPlan};
use glosstip::models::Rect;
use glosstip::sources::{DomainGate, LookupError, SourceAdapter};
use glosstip::speech::{Speaker, SpeechBackend, SpeechError, Utterance, Voice, VoiceInfo};
use glosstip::tooltip::TooltipBoard;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

pub type Reply = fn(&str) -> Result<String, LookupError>;

/// Scripted source recording every query and when it arrived
#[derive(Clone)]
pub struct FakeSource {
    label: &'static str,
    delay: Duration,
    reply: Reply,
    calls: Arc<Mutex<Vec<(String, Instant)>>>,
}

impl FakeSource {
    pub fn new(label: &'static str, delay_ms: u64, reply: Reply) -> Self {
        Self {
            label,
            delay: Duration::from_millis(delay_ms),
            reply,
            calls: Arc::default(),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(q, _)| q.clone()).collect()
    }

    pub fn started_at(&self, index: usize) -> Instant {
        self.calls.lock().unwrap()[index].1
    }
}

#[async_trait]
impl SourceAdapter for FakeSource {
    fn label(&self) -> &str {
        self.label
    }

    async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), Instant::now()));
        tokio::time::sleep(self.delay).await;
        (self.reply)(query)
    }
}

pub fn define(query: &str) -> Result<String, LookupError> {
    Ok(format!("def of {}", query))
}

pub fn hello(_query: &str) -> Result<String, LookupError> {
    Ok("interjection: hello".to_string())
}

pub fn translate(query: &str) -> Result<String, LookupError> {
    Ok(format!("译 {}", query))
}

pub fn refused(_query: &str) -> Result<String, LookupError> {
    Err(LookupError::Transport("connection refused".to_string()))
}

pub fn garbled(_query: &str) -> Result<String, LookupError> {
    Err(LookupError::Parse("unexpected body".to_string()))
}

pub fn nothing(_query: &str) -> Result<String, LookupError> {
    Err(LookupError::Empty)
}

/// Speech backend counting utterances
#[derive(Default)]
pub struct CountingSpeech {
    spoken: Mutex<Vec<String>>,
}

impl CountingSpeech {
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

impl SpeechBackend for CountingSpeech {
    fn voices(&self) -> Vec<VoiceInfo> {
        Voice::catalog()
    }

    fn cancel(&self) {}

    fn speak(&self, utterance: &Utterance<'_>) -> Result<(), SpeechError> {
        self.spoken.lock().unwrap().push(utterance.text.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub coordinator: LookupCoordinator,
    pub board: TooltipBoard,
    pub speech: Arc<CountingSpeech>,
}

pub fn harness(plan: LookupPlan) -> Harness {
    let board = TooltipBoard::new();
    let speech = Arc::new(CountingSpeech::default());
    let coordinator = LookupCoordinator::new(
        plan,
        Speaker::new(speech.clone(), "en-US"),
        Box::new(board.clone()),
        Box::new(board.clone()),
    );
    Harness {
        coordinator,
        board,
        speech,
    }
}

pub fn single(source: &FakeSource) -> LookupPlan {
    LookupPlan::new(
        vec![Arc::new(source.clone()) as Arc<dyn SourceAdapter>],
        false,
        None,
        Duration::from_millis(1500),
    )
    .unwrap()
}

/// One source behind the alphabetic-words gate
pub fn single_gated(source: &FakeSource) -> LookupPlan {
    LookupPlan::new(
        vec![Arc::new(source.clone()) as Arc<dyn SourceAdapter>],
        false,
        Some(DomainGate::AlphabeticWords.compile().unwrap()),
        Duration::from_millis(1500),
    )
    .unwrap()
}

pub fn dual(
    primary: &FakeSource,
    secondary: &FakeSource,
    chained: bool,
    gated: bool,
    timeout_ms: u64,
) -> LookupPlan {
    let gate = gated.then(|| DomainGate::AlphabeticWords.compile().unwrap());
    LookupPlan::new(
        vec![
            Arc::new(primary.clone()) as Arc<dyn SourceAdapter>,
            Arc::new(secondary.clone()) as Arc<dyn SourceAdapter>,
        ],
        chained,
        gate,
        Duration::from_millis(timeout_ms),
    )
    .unwrap()
}

/// The selection rectangle used throughout: panels start at top 130
pub fn rect() -> Rect {
    Rect::new(100.0, 100.0, 150.0, 120.0)
}
