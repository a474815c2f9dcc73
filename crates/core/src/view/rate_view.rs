//! The conversion view: owns one [`ViewState`] and the single rate fetch
//! that feeds it.
//!
//! ```text
//! new() ──▶ activate() ──spawn──▶ [fetch task] ──oneshot──▶ settle()
//!                                      ▲                        │
//!                    teardown(): abort ┘          apply to state, publish
//! ```
//!
//! The fetch runs as its own tokio task and hands its result back over a
//! oneshot channel. The view applies it only when the host awaits
//! [`RateConversionView::settle`], so all state changes happen on the
//! host's side. After [`RateConversionView::teardown`] (or drop) the task is
//! aborted and the status channel is closed.

use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use usdconv_market_data::{MarketDataError, RateProvider, RatesSnapshot};

use super::presentation::{render, Screen};
use super::view_state::{FetchState, SubmitOutcome, ViewState};
use crate::errors::{Error, Result};
use crate::settings::ViewSettings;

type FetchOutcome = std::result::Result<RatesSnapshot, MarketDataError>;

struct PendingFetch {
    task: JoinHandle<()>,
    receiver: oneshot::Receiver<FetchOutcome>,
}

pub struct RateConversionView {
    settings: ViewSettings,
    state: ViewState,
    pending: Option<PendingFetch>,
    /// `None` once torn down
    status: Option<watch::Sender<FetchState>>,
    activated: bool,
    torn_down: bool,
}

impl RateConversionView {
    pub fn new(settings: ViewSettings) -> Self {
        let state = ViewState::new(&settings);
        let (status, _) = watch::channel(state.fetch().clone());
        Self {
            settings,
            state,
            pending: None,
            status: Some(status),
            activated: false,
            torn_down: false,
        }
    }

    /// Starts the one fetch of this view's lifetime.
    ///
    /// Must be called from within a tokio runtime.
    pub fn activate(&mut self, provider: Arc<dyn RateProvider>) -> Result<()> {
        if self.torn_down {
            return Err(Error::TornDown);
        }
        if self.activated {
            return Err(Error::AlreadyActivated);
        }
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|e| Error::Runtime(e.to_string()))?;

        let (sender, receiver) = oneshot::channel();
        let provider_id = provider.id();
        let task = runtime.spawn(async move {
            let outcome = provider.fetch_latest_rates().await;
            if sender.send(outcome).is_err() {
                debug!("Discarding {} rates: view is gone", provider_id);
            }
        });

        info!("Fetching exchange rates from {}", provider_id);
        self.activated = true;
        self.pending = Some(PendingFetch { task, receiver });
        Ok(())
    }

    /// Waits for the outstanding fetch and applies its result.
    ///
    /// Returns `true` if the fetch state changed. Returns `false` right away
    /// when nothing is outstanding. Cancel-safe: dropping the future leaves
    /// the fetch outstanding.
    pub async fn settle(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        let outcome = (&mut pending.receiver).await;
        self.pending = None;
        self.apply(outcome.ok())
    }

    /// Applies the fetch result if it has already arrived, without waiting.
    pub fn try_settle(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        let outcome = match pending.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(oneshot::error::TryRecvError::Empty) => return false,
            Err(oneshot::error::TryRecvError::Closed) => None,
        };
        self.pending = None;
        self.apply(outcome)
    }

    /// `None` means the task ended without reporting back.
    fn apply(&mut self, outcome: Option<FetchOutcome>) -> bool {
        if self.torn_down {
            return false;
        }

        let changed = match outcome {
            Some(Ok(snapshot)) => {
                info!(
                    "Loaded {} exchange rates from {}",
                    snapshot.rates.len(),
                    snapshot.source
                );
                self.state.rates_loaded(snapshot, &self.settings)
            }
            Some(Err(e)) => {
                error!("Failed to fetch exchange rates: {}", e);
                self.state.rates_failed()
            }
            None => {
                error!("Rate fetch ended without a result");
                self.state.rates_failed()
            }
        };

        if let Some(status) = self.status.as_ref().filter(|_| changed) {
            status.send_replace(self.state.fetch().clone());
        }
        changed
    }

    /// Cancels the outstanding fetch and freezes the view.
    ///
    /// Idempotent. After this no method changes the state, and observers'
    /// `changed()` returns an error.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.status = None;
        if let Some(pending) = self.pending.take() {
            pending.task.abort();
            debug!("Cancelled in-flight rate fetch");
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Observes fetch state changes. After teardown the receiver is
    /// already closed.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        match &self.status {
            Some(status) => status.subscribe(),
            None => watch::channel(self.state.fetch().clone()).1,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_amount(&mut self, text: impl Into<String>) {
        if !self.torn_down {
            self.state.set_amount(text);
        }
    }

    pub fn select_currency(&mut self, code: &str) {
        if !self.torn_down {
            self.state.select_currency(code);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.torn_down {
            return SubmitOutcome::Ignored;
        }
        self.state.submit()
    }

    pub fn render(&self) -> Screen {
        render(&self.state)
    }
}

impl Drop for RateConversionView {
    fn drop(&mut self) {
        self.teardown();
    }
}
