//! Debounced background re-checking of edited text.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::{Condvar, Mutex};
use serde::{Deserialize, Serialize};

use crate::speller::Speller;

/// Configuration for the incremental checker.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// how long the text must stay unchanged before the exhaustive pass runs
    pub delay: Duration,
}

impl CheckerConfig {
    /// default config: one second of quiet before the exhaustive pass
    pub const fn default() -> CheckerConfig {
        CheckerConfig {
            delay: Duration::from_millis(1000),
        }
    }
}

/// Result of one validation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckEvent {
    /// whether every judged token validated
    pub valid: bool,
    /// true when the pass judged the final token too
    pub exhaustive: bool,
}

type ValidityCallback = Box<dyn Fn(CheckEvent) + Send + Sync>;

#[derive(Debug, Default)]
struct CheckerState {
    generation: u64,
    text: String,
    shutdown: bool,
}

struct CheckerShared {
    speller: Arc<Speller>,
    state: Mutex<CheckerState>,
    edited: Condvar,
    on_validity: ValidityCallback,
    delay: Duration,
}

/// Drives debounced spell checking over a stream of text edits.
///
/// Every edit triggers an immediate pass that skips the token still being
/// typed, and arms a delayed exhaustive pass. Edits arriving inside the
/// delay window supersede the pending pass, so only the newest text is
/// ever re-checked in full. One worker thread serves the checker for its
/// whole lifetime and is joined when the checker drops.
///
/// The immediate pass publishes on the calling thread; the exhaustive pass
/// publishes on the worker thread. Marshalling events onto a UI thread is
/// the consumer's concern.
pub struct IncrementalChecker {
    shared: Arc<CheckerShared>,
    worker: Option<JoinHandle<()>>,
}

impl IncrementalChecker {
    /// Creates a checker with the default one-second debounce delay.
    pub fn new<F>(speller: Arc<Speller>, on_validity: F) -> IncrementalChecker
    where
        F: Fn(CheckEvent) + Send + Sync + 'static,
    {
        IncrementalChecker::with_config(speller, CheckerConfig::default(), on_validity)
    }

    /// Creates a checker with an explicit config.
    pub fn with_config<F>(
        speller: Arc<Speller>,
        config: CheckerConfig,
        on_validity: F,
    ) -> IncrementalChecker
    where
        F: Fn(CheckEvent) + Send + Sync + 'static,
    {
        let shared = Arc::new(CheckerShared {
            speller,
            state: Mutex::new(CheckerState::default()),
            edited: Condvar::new(),
            on_validity: Box::new(on_validity),
            delay: config.delay,
        });

        let worker = thread::spawn({
            let shared = Arc::clone(&shared);
            move || debounce_loop(&shared)
        });

        IncrementalChecker {
            shared,
            worker: Some(worker),
        }
    }

    /// Feeds the latest text into the checker.
    ///
    /// Publishes an immediate pass over everything but the final token,
    /// then re-arms the delayed exhaustive pass for this text, superseding
    /// any pass still pending for older text.
    pub fn on_text_changed(&self, text: &str) {
        let valid = self.shared.speller.check_text(text, false);
        (self.shared.on_validity)(CheckEvent {
            valid,
            exhaustive: false,
        });

        let mut state = self.shared.state.lock();
        state.generation += 1;
        state.text.clear();
        state.text.push_str(text);
        drop(state);

        self.shared.edited.notify_all();
    }

    /// Runs an exhaustive pass right now, outside the debounce window.
    pub fn recheck(&self, text: &str) {
        let valid = self.shared.speller.check_text(text, true);
        (self.shared.on_validity)(CheckEvent {
            valid,
            exhaustive: true,
        });
    }

    /// The speller this checker validates with.
    pub fn speller(&self) -> &Arc<Speller> {
        &self.shared.speller
    }
}

impl Drop for IncrementalChecker {
    fn drop(&mut self) {
        self.shared.state.lock().shutdown = true;
        self.shared.edited.notify_all();

        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn debounce_loop(shared: &CheckerShared) {
    let mut seen = 0u64;

    loop {
        let mut state = shared.state.lock();

        while !state.shutdown && state.generation == seen {
            shared.edited.wait(&mut state);
        }
        if state.shutdown {
            return;
        }

        // Debounce window: every further edit re-arms the timer, so only
        // the newest text survives to the exhaustive pass.
        let mut armed = state.generation;
        loop {
            let timed_out = shared.edited.wait_for(&mut state, shared.delay).timed_out();
            if state.shutdown {
                return;
            }
            if state.generation != armed {
                armed = state.generation;
                continue;
            }
            if timed_out {
                break;
            }
        }

        let text = state.text.clone();
        seen = armed;
        drop(state);

        // An edit landing here bumps the generation, so the next loop
        // iteration schedules a fresh pass; publishing this (now stale)
        // result is harmless because its immediate pass already ran.
        let valid = shared.speller.check_text(&text, true);
        (shared.on_validity)(CheckEvent {
            valid,
            exhaustive: true,
        });
    }
}
