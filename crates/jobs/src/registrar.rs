use radarr_kodi_application::use_cases::{
    CheckReadinessUseCase, FindExistingNotificationUseCase, Readiness, SubmitNotificationUseCase,
};
use radarr_kodi_domain::{FailureReason, NotificationEntry, RegistrationOutcome};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;
const WAITING_LOG_EVERY: u64 = 30;

/// Progress of a registration run, published through a `watch` channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrarState {
    Starting,
    WaitingForApi,
    CheckingExisting,
    Submitting,
    Done(RegistrationOutcome),
    Cancelled,
}

impl RegistrarState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RegistrarState::Done(_) | RegistrarState::Cancelled)
    }

    pub fn outcome(&self) -> Option<&RegistrationOutcome> {
        match self {
            RegistrarState::Done(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl fmt::Display for RegistrarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrarState::Starting => f.write_str("starting"),
            RegistrarState::WaitingForApi => f.write_str("waiting for api"),
            RegistrarState::CheckingExisting => f.write_str("checking existing"),
            RegistrarState::Submitting => f.write_str("submitting"),
            RegistrarState::Done(outcome) => write!(f, "done: {}", outcome),
            RegistrarState::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Waits for Radarr to answer as the expected instance, then registers the
/// notification unless one with a matching name already exists.
pub struct RegistrarJob {
    check_readiness: Arc<CheckReadinessUseCase>,
    find_existing: Arc<FindExistingNotificationUseCase>,
    submit: Arc<SubmitNotificationUseCase>,
    entry: NotificationEntry,
    instance_name: String,
    poll_interval: Duration,
    shutdown: CancellationToken,
    state: watch::Sender<RegistrarState>,
}

impl RegistrarJob {
    pub fn new(
        check_readiness: Arc<CheckReadinessUseCase>,
        find_existing: Arc<FindExistingNotificationUseCase>,
        submit: Arc<SubmitNotificationUseCase>,
        entry: NotificationEntry,
        instance_name: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(RegistrarState::Starting);
        Self {
            check_readiness,
            find_existing,
            submit,
            entry,
            instance_name: instance_name.into(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
            state,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<RegistrarState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> RegistrarState {
        self.state.borrow().clone()
    }

    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<RegistrarState> {
        tokio::spawn(async move { self.run().await })
    }

    /// Runs to a terminal state and returns it.
    pub async fn run(&self) -> RegistrarState {
        info!(
            name = %self.entry.name,
            instance = %self.instance_name,
            "Starting notification registrar"
        );

        self.publish(RegistrarState::WaitingForApi);
        if !self.wait_for_api().await {
            return self.finish(RegistrarState::Cancelled);
        }

        self.publish(RegistrarState::CheckingExisting);
        let outcome = match self.find_existing.execute(&self.entry.name).await {
            Ok(Some(existing)) => {
                info!(
                    existing = %existing.name,
                    id = ?existing.id,
                    "{} notification already configured",
                    self.entry.name
                );
                RegistrationOutcome::AlreadyConfigured
            }
            Ok(None) => {
                if self.shutdown.is_cancelled() {
                    return self.finish(RegistrarState::Cancelled);
                }
                self.publish(RegistrarState::Submitting);
                self.submit.execute(&self.entry).await
            }
            Err(e) => {
                error!(error = %e, "Failed to list configured notifications");
                RegistrationOutcome::failed(FailureReason::Unknown, e.to_string())
            }
        };

        self.finish(RegistrarState::Done(outcome))
    }

    /// Polls the status endpoint until the expected instance answers.
    /// Returns `false` when cancelled first.
    async fn wait_for_api(&self) -> bool {
        let mut attempts: u64 = 0;

        loop {
            attempts += 1;

            let check = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => return false,
                check = self.check_readiness.execute(&self.instance_name) => check,
            };

            match check {
                Ok(Readiness::Ready) => {
                    info!(attempts, "Radarr API is ready");
                    return true;
                }
                Ok(Readiness::WrongInstance { reported }) => {
                    debug!(
                        attempts,
                        reported = reported.as_deref().unwrap_or("none"),
                        expected = %self.instance_name,
                        "Radarr answered as another instance"
                    );
                }
                Err(e) => {
                    debug!(attempts, error = %e, "Radarr API not available yet");
                }
            }

            if attempts == 1 || attempts % WAITING_LOG_EVERY == 0 {
                info!(attempts, "Waiting for Radarr API");
            }

            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => return false,
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }
    }

    fn publish(&self, state: RegistrarState) {
        debug!(state = %state, "Registrar state changed");
        self.state.send_replace(state);
    }

    fn finish(&self, state: RegistrarState) -> RegistrarState {
        match &state {
            RegistrarState::Cancelled => warn!("Registrar cancelled before finishing"),
            RegistrarState::Done(outcome) => info!(outcome = %outcome, "Registrar finished"),
            _ => {}
        }
        self.publish(state.clone());
        state
    }
}
