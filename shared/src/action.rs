/// Where a single UI action stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Loading, result and error state for one independent UI action.
///
/// Requests are never cancelled. Each `begin` bumps the in-flight count and
/// each `resolve` lowers it, so overlapping submissions all settle and the
/// last one to resolve decides what is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionState<T> {
    in_flight: usize,
    outcome: Option<Result<T, String>>,
}

impl<T> Default for ActionState<T> {
    fn default() -> Self {
        Self { in_flight: 0, outcome: None }
    }
}

impl<T> ActionState<T> {
    pub fn begin(&mut self) {
        self.in_flight += 1;
        self.outcome = None;
    }

    pub fn resolve(&mut self, outcome: Result<T, String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.outcome = Some(outcome);
    }

    /// Records an error that never reached the network.
    pub fn fail_locally(&mut self, error: impl Into<String>) {
        self.outcome = Some(Err(error.into()));
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn result(&self) -> Option<&T> {
        self.outcome.as_ref().and_then(|o| o.as_ref().ok())
    }

    pub fn error(&self) -> Option<&str> {
        self.outcome
            .as_ref()
            .and_then(|o| o.as_ref().err())
            .map(String::as_str)
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading() {
            return Phase::Loading;
        }
        match &self.outcome {
            None => Phase::Idle,
            Some(Ok(_)) => Phase::Success,
            Some(Err(_)) => Phase::Error,
        }
    }
}
