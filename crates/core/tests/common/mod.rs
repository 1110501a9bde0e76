//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use inventory_core::validation::message::Message;
use inventory_core::validation::result::{
    ValidationParams, ValidationResult, ValidationResultFactory,
};
use inventory_core::validation::rules::Rule;

/// A rule that returns canned messages and records every call.
pub struct StubRule {
    returns: Vec<Message>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubRule {
    pub fn returning(returns: Vec<Message>) -> Self {
        Self {
            returns,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn passing() -> Self {
        Self::returning(Vec::new())
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Rule for StubRule {
    fn execute(&self, field: &str, value: &str) -> Vec<Message> {
        self.calls
            .lock()
            .unwrap()
            .push((field.to_string(), value.to_string()));
        self.returns.clone()
    }
}

/// A factory that records the params it was asked to build from.
#[derive(Default)]
pub struct RecordingFactory {
    received: Mutex<Vec<ValidationParams>>,
}

impl RecordingFactory {
    pub fn received(&self) -> Vec<ValidationParams> {
        self.received.lock().unwrap().clone()
    }
}

impl ValidationResultFactory for RecordingFactory {
    fn create(&self, params: ValidationParams) -> ValidationResult {
        self.received.lock().unwrap().push(params.clone());
        ValidationResult::new(params.errors)
    }
}

pub fn whitespace_message(field: &str) -> Message {
    Message::new("\"%field\" can not contain whitespaces.").with_param("field", field)
}
