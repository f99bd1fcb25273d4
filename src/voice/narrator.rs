use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::runtime::Handle;
use tokio::task::{AbortHandle, JoinHandle};

use super::{Utterance, VoiceError};

/// Platform speech synthesis backend.
pub trait SpeechEngine: Send + Sync + 'static {
    /// Speak one utterance. Resolves when playback ends.
    fn speak(&self, utterance: Utterance) -> impl Future<Output = Result<(), VoiceError>> + Send;
}

type Playback = JoinHandle<Result<(), VoiceError>>;

struct InFlight {
    abort: AbortHandle,
    /// Taken by whoever waits on the utterance.
    playback: Option<Playback>,
}

/// Keeps at most one utterance in flight.
///
/// `say` cancels whatever is still playing and starts the new utterance
/// right away; it never waits for the previous one.
pub struct Narrator<E: SpeechEngine> {
    engine: Arc<E>,
    current: Mutex<Option<InFlight>>,
}

impl<E: SpeechEngine> Narrator<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine: Arc::new(engine),
            current: Mutex::new(None),
        }
    }

    /// Replace the current utterance. Needs a tokio runtime.
    pub fn say(&self, utterance: Utterance) -> Result<(), VoiceError> {
        let runtime = Handle::try_current().map_err(|_| VoiceError::NoRuntime)?;
        let engine = Arc::clone(&self.engine);

        let mut current = self.lock();
        if let Some(previous) = current.take() {
            if !previous.abort.is_finished() {
                tracing::debug!("Cancelling unfinished utterance");
            }
            previous.abort.abort();
        }

        let playback = runtime.spawn(async move { engine.speak(utterance).await });
        *current = Some(InFlight {
            abort: playback.abort_handle(),
            playback: Some(playback),
        });
        Ok(())
    }

    /// Cancel the current utterance, if any.
    pub fn stop(&self) {
        if let Some(previous) = self.lock().take() {
            previous.abort.abort();
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.lock()
            .as_ref()
            .is_some_and(|f| !f.abort.is_finished())
    }

    /// Wait for the current utterance to end.
    ///
    /// `Cancelled` when it is replaced or stopped before finishing.
    pub async fn finish(&self) -> Result<(), VoiceError> {
        let playback = self.lock().as_mut().and_then(|f| f.playback.take());
        let Some(handle) = playback else {
            return Ok(());
        };
        match handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(VoiceError::Cancelled),
            Err(e) => Err(VoiceError::Engine(e.to_string())),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn lock(&self) -> MutexGuard<'_, Option<InFlight>> {
        // The slot only holds task handles, so a poisoned lock is still usable.
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<E: SpeechEngine> Drop for Narrator<E> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;
    use std::time::Duration;

    /// Utterances starting with "long" play for 10 seconds, others for 10 ms.
    #[derive(Default)]
    struct RecordingEngine {
        started: Mutex<Vec<String>>,
        completed: Mutex<Vec<String>>,
    }

    impl SpeechEngine for RecordingEngine {
        fn speak(
            &self,
            utterance: Utterance,
        ) -> impl Future<Output = Result<(), VoiceError>> + Send {
            self.started.lock().unwrap().push(utterance.text.clone());
            async move {
                let millis = if utterance.text.starts_with("long") { 10_000 } else { 10 };
                tokio::time::sleep(Duration::from_millis(millis)).await;
                self.completed.lock().unwrap().push(utterance.text);
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn new_utterance_replaces_unfinished_one() {
        let narrator = Narrator::new(RecordingEngine::default());
        narrator.say(Utterance::new("long advice", Language::English)).unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        narrator.say(Utterance::new("short", Language::English)).unwrap();

        narrator.finish().await.unwrap();

        let engine = narrator.engine();
        assert_eq!(*engine.started.lock().unwrap(), vec!["long advice", "short"]);
        assert_eq!(*engine.completed.lock().unwrap(), vec!["short"]);
        assert!(!narrator.is_speaking());
    }

    #[tokio::test]
    async fn waiter_sees_cancellation_when_replaced() {
        let narrator = Arc::new(Narrator::new(RecordingEngine::default()));
        narrator.say(Utterance::new("long reading", Language::English)).unwrap();

        let waiter = {
            let narrator = Arc::clone(&narrator);
            tokio::spawn(async move { narrator.finish().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        narrator.say(Utterance::new("short", Language::English)).unwrap();

        assert_eq!(waiter.await.unwrap(), Err(VoiceError::Cancelled));
        assert_eq!(narrator.finish().await, Ok(()));
    }

    #[tokio::test]
    async fn stop_cancels_playback() {
        let narrator = Narrator::new(RecordingEngine::default());
        narrator.say(Utterance::new("long story", Language::Hindi)).unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(narrator.is_speaking());
        narrator.stop();
        assert!(!narrator.is_speaking());
        assert_eq!(narrator.finish().await, Ok(()));
        assert!(narrator.engine().completed.lock().unwrap().is_empty());
    }

    #[test]
    fn say_without_runtime_is_an_error() {
        let narrator = Narrator::new(RecordingEngine::default());
        assert_eq!(
            narrator.say(Utterance::new("hi", Language::English)),
            Err(VoiceError::NoRuntime)
        );
    }
}
