pub mod process;
pub mod voices;

use std::sync::Arc;
use thiserror::Error;

pub use process::ProcessSpeech;
pub use voices::{select_voice, Voice, VoiceInfo};

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("failed to start synthesizer '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// One thing to say, with the voice chosen for it
#[derive(Debug, Clone, Copy)]
pub struct Utterance<'a> {
    pub text: &'a str,
    pub voice: &'a VoiceInfo,
}

/// A speech synthesizer.
///
/// `speak` must not block until the utterance finishes; at most one
/// utterance plays at a time and `cancel` stops it.
pub trait SpeechBackend: Send + Sync {
    fn voices(&self) -> Vec<VoiceInfo>;

    fn cancel(&self);

    fn speak(&self, utterance: &Utterance<'_>) -> Result<(), SpeechError>;
}

/// Backend that never makes a sound
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSpeech;

impl SpeechBackend for SilentSpeech {
    fn voices(&self) -> Vec<VoiceInfo> {
        Vec::new()
    }

    fn cancel(&self) {}

    fn speak(&self, _utterance: &Utterance<'_>) -> Result<(), SpeechError> {
        Ok(())
    }
}

/// Reads selections aloud in the preferred language, newest utterance wins
#[derive(Clone)]
pub struct Speaker {
    backend: Arc<dyn SpeechBackend>,
    preferred_lang: String,
}

impl Speaker {
    pub fn new(backend: Arc<dyn SpeechBackend>, preferred_lang: impl Into<String>) -> Self {
        Self {
            backend,
            preferred_lang: preferred_lang.into(),
        }
    }

    pub fn silent() -> Self {
        Self::new(Arc::new(SilentSpeech), "en-US")
    }

    /// Fire-and-forget: cancel whatever is playing and start `text`.
    ///
    /// Returns whether an utterance was started. Failures are logged.
    pub fn say(&self, text: &str) -> bool {
        let voices = self.backend.voices();
        let Some(voice) = select_voice(&voices, &self.preferred_lang) else {
            tracing::debug!("No speech voices available, skipping read-out");
            return false;
        };

        self.backend.cancel();

        match self.backend.speak(&Utterance { text, voice }) {
            Ok(()) => {
                tracing::debug!(voice = %voice.id, chars = text.chars().count(), "Speaking selection");
                true
            }
            Err(e) => {
                tracing::warn!("Speech output failed: {}", e);
                false
            }
        }
    }
}
