//! Scripted in-process inference backend for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use forumpilot_inference::{InferenceBackend, InferenceError};
use serde_json::Value;

#[derive(Clone)]
pub(crate) enum Script {
    Respond(Value),
    RespondAfter(Duration, Value),
    Status(u16),
    Timeout,
    Panic,
}

/// Answers each model according to its script; unscripted models fail with 404.
#[derive(Default)]
pub(crate) struct ScriptedBackend {
    scripts: HashMap<String, Script>,
    calls: AtomicUsize,
    inputs: Mutex<Vec<(String, String)>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn on(mut self, model: &str, script: Script) -> Self {
        self.scripts.insert(model.to_string(), script);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every (model, input) pair received, in arrival order.
    pub(crate) fn inputs(&self) -> Vec<(String, String)> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for ScriptedBackend {
    async fn invoke(&self, model: &str, input: &str) -> Result<Value, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs
            .lock()
            .unwrap()
            .push((model.to_string(), input.to_string()));

        match self.scripts.get(model).cloned() {
            Some(Script::Respond(value)) => Ok(value),
            Some(Script::RespondAfter(delay, value)) => {
                tokio::time::sleep(delay).await;
                Ok(value)
            }
            Some(Script::Status(status)) => Err(InferenceError::Upstream { status }),
            Some(Script::Timeout) => Err(InferenceError::Timeout {
                after: Duration::from_secs(3),
            }),
            Some(Script::Panic) => panic!("scripted backend panic for {model}"),
            None => Err(InferenceError::Upstream { status: 404 }),
        }
    }
}
