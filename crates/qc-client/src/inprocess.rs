//! In-process transport double for tests and demos: serves canned
//! responses keyed by method name and records every call it receives.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{QcRest, QcRestError};

#[derive(Default)]
pub struct InProcessRest {
    responses: HashMap<String, Value>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl InProcessRest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the canned response body for `method`.
    pub fn with_response(mut self, method: &str, body: Value) -> Self {
        self.responses.insert(method.to_string(), body);
        self
    }

    /// Every `(method, args)` pair received so far, in call order.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QcRest for InProcessRest {
    async fn call(&self, _domain: &str, method: &str, args: &Value) -> Result<Value, QcRestError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), args.clone()));
        match self.responses.get(method) {
            Some(body) => Ok(body.clone()),
            None => Err(QcRestError::Transport(format!(
                "no canned response for {method}"
            ))),
        }
    }
}
