use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

use super::voices::{Voice, VoiceInfo};
use super::{SpeechBackend, SpeechError, Utterance};

/// Speaks through an external synthesizer process (espeak-ng compatible
/// command line: `<command> -v <voice> -- <text>`).
///
/// Each utterance is its own child process; cancelling kills it.
pub struct ProcessSpeech {
    command: String,
    voices: Vec<VoiceInfo>,
    current: Mutex<Option<Child>>,
}

impl ProcessSpeech {
    pub fn new(command: impl Into<String>) -> Self {
        Self::with_voices(command, Voice::catalog())
    }

    pub fn with_voices(command: impl Into<String>, voices: Vec<VoiceInfo>) -> Self {
        Self {
            command: command.into(),
            voices,
            current: Mutex::new(None),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Child>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SpeechBackend for ProcessSpeech {
    fn voices(&self) -> Vec<VoiceInfo> {
        self.voices.clone()
    }

    fn cancel(&self) {
        let Some(mut child) = self.slot().take() else {
            return;
        };

        match child.try_wait() {
            Ok(Some(_)) => {}
            _ => {
                let _ = child.kill();
                // Reap off the caller's thread; it may be an async worker
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
        }
    }

    fn speak(&self, utterance: &Utterance<'_>) -> Result<(), SpeechError> {
        self.cancel();

        let child = Command::new(&self.command)
            .arg("-v")
            .arg(&utterance.voice.id)
            .arg("--")
            .arg(utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        *self.slot() = Some(child);
        Ok(())
    }
}

impl Drop for ProcessSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}
