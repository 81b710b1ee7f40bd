//! Interaction journal shared by the recording adapters.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// A single call captured by a recording adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Port name, e.g. "fs" or "console".
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Input arguments passed to the method.
    pub input: serde_json::Value,
    /// Outcome: `{"ok": ..}` for successes, `{"err": ..}` for failures.
    pub output: serde_json::Value,
}

/// Append-only, clone-shared record of adapter interactions.
#[derive(Debug, Default, Clone)]
pub struct Journal {
    entries: Arc<Mutex<Vec<Interaction>>>,
}

impl Journal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &self,
        port: &str,
        method: &str,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        self.entries.lock().expect("journal lock poisoned").push(Interaction {
            port: port.to_string(),
            method: method.to_string(),
            input,
            output,
        });
    }

    /// Returns a snapshot of everything recorded so far.
    #[must_use]
    pub fn entries(&self) -> Vec<Interaction> {
        self.entries.lock().expect("journal lock poisoned").clone()
    }

    /// Returns the methods recorded for the given port, in call order.
    #[must_use]
    pub fn methods(&self, port: &str) -> Vec<String> {
        self.entries
            .lock()
            .expect("journal lock poisoned")
            .iter()
            .filter(|interaction| interaction.port == port)
            .map(|interaction| interaction.method.clone())
            .collect()
    }
}

/// Builds the `output` value for a `Result`-returning forward.
pub(crate) fn outcome<T>(result: &std::io::Result<T>) -> serde_json::Value {
    match result {
        Ok(_) => serde_json::json!({"ok": true}),
        Err(err) => serde_json::json!({"err": err.to_string()}),
    }
}
