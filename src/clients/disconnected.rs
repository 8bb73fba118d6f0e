use crate::actions::Action;
use crate::clients::Client;
use crate::error::ClientError;
use crate::listeners::ActionListener;
use crate::settings::Settings;

/// A client that builds requests but never sends them.
///
/// `execute` drops the request and the listener without calling it, so
/// anything waiting on the listener waits forever. `close` has nothing to
/// release.
#[derive(Debug, Clone)]
pub struct DisconnectedClient {
    settings: Settings,
}

impl Default for DisconnectedClient {
    fn default() -> Self {
        tracing::debug!("Created disconnected client");
        DisconnectedClient {
            settings: Settings::default(),
        }
    }
}

impl DisconnectedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the empty settings every client starts with. The settings
    /// are carried for callers to read back; dispatch ignores them.
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }
}

impl Client for DisconnectedClient {
    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn execute<A, L>(&self, _action: A, _request: A::Request, _listener: L)
    where
        A: Action,
        L: ActionListener<A::Response>,
    {
        tracing::trace!(action = A::NAME, "Disconnected, discarding request");
    }

    fn close(&self) -> Result<(), ClientError> {
        tracing::debug!("Closing disconnected client");
        Ok(())
    }
}
