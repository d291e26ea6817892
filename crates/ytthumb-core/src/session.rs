//! Request orchestration: the owned state behind one interactive session.
//!
//! Each user action is a method on [`Session`]; the only transitions are the
//! ones driven by `extract`/`build` and those actions. Timed effects (result
//! pacing, the "copied" reset, the batch throttle) are cooperative delays on
//! the tokio runtime.

use crate::batch::{self, BatchReport};
use crate::capability::{trigger_blocking, ClipboardWriter, Downloader};
use crate::catalog::{self, ThumbnailResult, ThumbnailVariant};
use crate::config::ThumbConfig;
use crate::error::{LookupError, SessionError};
use crate::video_id;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

/// What the presentation layer should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(Vec<ThumbnailResult>),
    Failure(String),
}

/// Delays applied by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Between a submission and its result.
    pub submit_delay: Duration,
    /// How long the "copied" indicator stays on.
    pub copied_reset: Duration,
    /// After each successful download of a batch.
    pub batch_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(500),
            copied_reset: Duration::from_secs(2),
            batch_delay: batch::DEFAULT_BATCH_DELAY,
        }
    }
}

impl Pacing {
    /// No artificial delays at all.
    pub fn immediate() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            copied_reset: Duration::ZERO,
            batch_delay: Duration::ZERO,
        }
    }

    pub fn from_config(cfg: &ThumbConfig) -> Self {
        Self {
            submit_delay: cfg.pacing_delay(),
            copied_reset: cfg.copied_reset(),
            batch_delay: cfg.batch_delay(),
        }
    }
}

/// Handed out by a successful copy; resets the indicator only if no newer copy happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct CopiedReset {
    generation: u64,
}

/// Handed out by [`Session::begin_submit`]; carries the input captured at submit time.
#[derive(Debug)]
#[must_use]
pub struct PendingSubmit {
    input: String,
}

#[derive(Debug, Default)]
pub struct Session {
    input: String,
    state: ViewState,
    copied: bool,
    copy_generation: u64,
    batch_running: bool,
    pacing: Pacing,
}

impl Session {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            ..Self::default()
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn results(&self) -> Option<&[ThumbnailResult]> {
        match &self.state {
            ViewState::Success(results) => Some(results),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == ViewState::Loading
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn is_batch_downloading(&self) -> bool {
        self.batch_running
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// First half of a submission. Returns `None` when the submission ends
    /// right away (empty input, or one already loading).
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if self.is_loading() {
            tracing::debug!("submit ignored: already loading");
            return None;
        }
        if self.input.trim().is_empty() {
            self.fail(LookupError::EmptyInput);
            return None;
        }
        self.state = ViewState::Loading;
        Some(PendingSubmit {
            input: self.input.clone(),
        })
    }

    /// Second half of a submission: runs the extractor and publishes the outcome.
    pub fn finish_submit(&mut self, pending: PendingSubmit) -> &ViewState {
        match video_id::lookup(&pending.input) {
            Ok(id) => {
                tracing::info!(video_id = %id, "link resolved");
                self.state = ViewState::Success(catalog::build(&id));
            }
            Err(e) => self.fail(e),
        }
        &self.state
    }

    /// Submits the current input, waiting the pacing delay before resolving it.
    ///
    /// Dropping the future mid-delay returns the session to `Idle`.
    pub async fn submit(&mut self) -> &ViewState {
        let Some(pending) = self.begin_submit() else {
            return &self.state;
        };
        {
            let mut guard = SubmitGuard(&mut *self);
            tokio::time::sleep(guard.0.pacing.submit_delay).await;
            guard.0.finish_submit(pending);
        }
        &self.state
    }

    fn fail(&mut self, err: LookupError) {
        tracing::debug!(input = %self.input, "lookup failed: {}", err);
        self.state = ViewState::Failure(err.to_string());
    }

    /// Copies the current input. Returns a reset ticket when the copy happened.
    ///
    /// Ignored while the input is empty, a submission is loading, or the
    /// indicator from a previous copy is still on. A clipboard failure is
    /// logged and leaves the state untouched.
    pub fn copy_input<C: ClipboardWriter + ?Sized>(
        &mut self,
        clipboard: &mut C,
    ) -> Option<CopiedReset> {
        if self.input.is_empty() || self.is_loading() || self.copied {
            return None;
        }
        if let Err(e) = clipboard.write(&self.input) {
            tracing::warn!("failed to copy link: {}", e);
            return None;
        }
        self.copied = true;
        self.copy_generation += 1;
        Some(CopiedReset {
            generation: self.copy_generation,
        })
    }

    /// Turns the "copied" indicator off unless a newer copy superseded `ticket`.
    pub fn reset_copied(&mut self, ticket: CopiedReset) {
        if ticket.generation == self.copy_generation {
            self.copied = false;
        }
    }

    /// Copies, keeps the indicator on for the configured time, then resets it.
    /// The reset also happens if the future is dropped early.
    pub async fn copy_and_reset<C>(&mut self, clipboard: &mut C) -> bool
    where
        C: ClipboardWriter + ?Sized,
    {
        let Some(ticket) = self.copy_input(clipboard) else {
            return false;
        };
        let guard = CopiedGuard {
            session: &mut *self,
            ticket,
        };
        tokio::time::sleep(guard.session.pacing.copied_reset).await;
        true
    }

    /// Downloads one variant (by code or label) of the current results.
    pub async fn download_one<D>(
        &self,
        downloader: &Arc<D>,
        variant: &str,
    ) -> Result<PathBuf, SessionError>
    where
        D: Downloader + Send + Sync + 'static,
    {
        let results = self.results().ok_or(SessionError::NoResults)?;
        let code = ThumbnailVariant::find(variant)
            .map(|v| v.code)
            .ok_or_else(|| SessionError::UnknownVariant(variant.to_string()))?;
        let item = results
            .iter()
            .find(|r| r.code == code)
            .ok_or_else(|| SessionError::UnknownVariant(variant.to_string()))?;
        Ok(trigger_blocking(downloader, &item.url, &item.filename).await?)
    }

    /// Downloads every current result in catalog order.
    /// The in-flight flag is cleared even if the future is dropped early.
    pub async fn download_all<D>(
        &mut self,
        downloader: &Arc<D>,
        abort: Option<&AtomicBool>,
    ) -> Result<BatchReport, SessionError>
    where
        D: Downloader + Send + Sync + 'static,
    {
        if self.batch_running {
            return Err(SessionError::BatchInProgress);
        }
        let results = self.results().ok_or(SessionError::NoResults)?.to_vec();
        let delay = self.pacing.batch_delay;

        let running = BatchFlag::raise(&mut self.batch_running);
        let report = batch::download_all(downloader, &results, delay, abort).await;
        drop(running);

        tracing::info!(
            succeeded = report.succeeded.len(),
            failed = report.failed.len(),
            skipped = report.skipped.len(),
            "batch download finished"
        );
        Ok(report)
    }
}

/// Leaves `Loading` for `Idle` when a submission is dropped before finishing.
struct SubmitGuard<'a>(&'a mut Session);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if self.0.is_loading() {
            tracing::debug!("submission dropped before it finished");
            self.0.state = ViewState::Idle;
        }
    }
}

/// Applies the reset ticket when the indicator delay ends or is abandoned.
struct CopiedGuard<'a> {
    session: &'a mut Session,
    ticket: CopiedReset,
}

impl Drop for CopiedGuard<'_> {
    fn drop(&mut self) {
        self.session.reset_copied(self.ticket);
    }
}

/// Holds the batch in-flight flag up for as long as it lives.
struct BatchFlag<'a>(&'a mut bool);

impl<'a> BatchFlag<'a> {
    fn raise(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for BatchFlag<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
