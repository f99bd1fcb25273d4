use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::VoiceError;

/// One recognizer callback: the transcript so far and whether it is final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionEvent {
    pub transcript: String,
    pub is_final: bool,
}

impl RecognitionEvent {
    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }

    pub fn final_result(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }
}

/// A single listening session.
///
/// Consumed by `run`, so each session produces at most one final transcript.
/// Events after the final one are never read.
pub struct ListeningSession {
    events: mpsc::Receiver<RecognitionEvent>,
}

impl ListeningSession {
    pub fn new(events: mpsc::Receiver<RecognitionEvent>) -> Self {
        Self { events }
    }

    /// Open a session and the sender the recognizer callback pushes into.
    pub fn channel(capacity: usize) -> (mpsc::Sender<RecognitionEvent>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx))
    }

    /// Report interim transcripts to `on_interim` and return the final one.
    pub async fn run<F>(mut self, mut on_interim: F) -> Result<String, VoiceError>
    where
        F: FnMut(&str),
    {
        while let Some(event) = self.events.recv().await {
            if event.is_final {
                self.events.close();
                tracing::debug!("Final transcript received");
                return Ok(event.transcript.trim().to_string());
            }
            on_interim(&event.transcript);
        }
        Err(VoiceError::NoFinalResult)
    }

    /// Like `run`, giving up after `limit`.
    pub async fn run_with_timeout<F>(
        self,
        limit: Duration,
        on_interim: F,
    ) -> Result<String, VoiceError>
    where
        F: FnMut(&str),
    {
        tokio::time::timeout(limit, self.run(on_interim))
            .await
            .map_err(|_| VoiceError::Timeout)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn interim_results_then_one_final() {
        let (tx, session) = ListeningSession::channel(8);
        tokio::spawn(async move {
            for event in [
                RecognitionEvent::interim("chest"),
                RecognitionEvent::interim("chest pain"),
                RecognitionEvent::final_result(" chest pain since morning "),
                RecognitionEvent::final_result("ignored"),
            ] {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });

        let mut interim = Vec::new();
        let transcript = session.run(|t| interim.push(t.to_string())).await.unwrap();

        assert_eq!(interim, vec!["chest", "chest pain"]);
        assert_eq!(transcript, "chest pain since morning");
    }

    #[tokio::test]
    async fn closing_without_final_is_an_error() {
        let (tx, session) = ListeningSession::channel(4);
        tx.send(RecognitionEvent::interim("fev")).await.unwrap();
        drop(tx);
        assert_eq!(session.run(|_| {}).await, Err(VoiceError::NoFinalResult));
    }

    #[tokio::test]
    async fn silent_recognizer_times_out() {
        let (_tx, session) = ListeningSession::channel(1);
        let result = session
            .run_with_timeout(Duration::from_millis(20), |_| {})
            .await;
        assert_eq!(result, Err(VoiceError::Timeout));
    }
}
