//! Fetch -> materialize -> present, with the network work on a background thread.
//!
//! The worker reports every stage change and the final result over one
//! channel. The calling thread drains that channel and is the only place the
//! presenter is touched.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::fetcher::MetadataFetcher;
use crate::materializer::ImageMaterializer;
use crate::prelude::*;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Loading,
    Fetching,
    Materializing,
    Done,
    Failed,
}

/// The receiving end of a run: shows progress and takes the finished images.
pub trait Presenter {
    fn start_busy(&mut self);
    fn stop_busy(&mut self);
    /// Called on the calling thread once a run succeeds.
    fn present(&mut self, images: Vec<RenderableImage>);
    /// Called once when a run fails. The error has already been logged.
    fn failed(&mut self, _error: &PipelineError) {}
}

/// Message from the worker to the calling thread.
#[derive(Debug)]
pub enum RunEvent {
    Stage(RunState),
    Finished(Result<Vec<RenderableImage>, PipelineError>),
}

/// What happened during one [`Pipeline::run`].
#[derive(Debug)]
pub struct RunReport {
    /// Every state entered, in order, starting with `Loading`.
    pub transitions: Vec<RunState>,
    /// Number of images handed to the presenter, or why the run failed.
    pub result: Result<usize, PipelineError>,
}

impl RunReport {
    /// The state the run ended in.
    pub fn state(&self) -> RunState {
        self.transitions.last().copied().unwrap_or(RunState::Idle)
    }

    pub fn is_done(&self) -> bool {
        self.state() == RunState::Done
    }
}

/// A run whose worker has been started but whose result has not been taken yet.
pub struct PendingRun {
    events: Receiver<RunEvent>,
    worker: Option<JoinHandle<()>>,
    stages: Vec<RunState>,
    delivered: bool,
}

impl PendingRun {
    /// Stages reported by the worker so far.
    pub fn stages(&self) -> &[RunState] {
        &self.stages
    }

    /// Block until the worker reports its result.
    pub fn wait(mut self) -> (Vec<RunState>, Result<Vec<RenderableImage>, PipelineError>) {
        let mut result = Err(PipelineError::WorkerLost);
        for event in self.events.iter() {
            match event {
                RunEvent::Stage(stage) => self.stages.push(stage),
                RunEvent::Finished(finished) => {
                    result = finished;
                    break;
                }
            }
        }
        self.join_worker();
        (std::mem::take(&mut self.stages), result)
    }

    /// Drain pending events without blocking. Returns the result once, when
    /// the worker has finished; `None` while it is still running and on every
    /// call after the result was handed out.
    pub fn try_result(&mut self) -> Option<Result<Vec<RenderableImage>, PipelineError>> {
        if self.delivered {
            return None;
        }
        let result = loop {
            match self.events.try_recv() {
                Ok(RunEvent::Stage(stage)) => self.stages.push(stage),
                Ok(RunEvent::Finished(result)) => break result,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => break Err(PipelineError::WorkerLost),
            }
        };
        self.delivered = true;
        self.join_worker();
        Some(result)
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("Pipeline worker panicked");
            }
        }
    }
}

/// Runs the photo pipeline with a fixed configuration.
pub struct Pipeline {
    config: PipelineConfig,
    client: PhotoClient,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        let client = PhotoClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Start the fetch and materialize stages on a background thread.
    ///
    /// The worker runs at the default OS thread priority.
    pub fn spawn(&self) -> Result<PendingRun, PipelineError> {
        let (tx, rx) = mpsc::channel();
        let client = self.client.clone();
        let endpoint = self.config.endpoint.clone();
        let limit = self.config.prefix_limit;

        let worker = thread::Builder::new()
            .name("photo-feed-worker".to_string())
            .spawn(move || {
                let result = fetch_and_materialize(&client, &endpoint, limit, &tx);
                send(&tx, RunEvent::Finished(result));
            })?;

        Ok(PendingRun {
            events: rx,
            worker: Some(worker),
            stages: Vec::new(),
            delivered: false,
        })
    }

    /// Execute one full run and hand the outcome to `presenter`.
    ///
    /// Each run collects into its own list, so repeated runs never see images
    /// from earlier ones. On failure the presenter's images are left alone and
    /// the busy indicator keeps running unless `clear_busy_on_failure` is set.
    pub fn run<P: Presenter + ?Sized>(&self, presenter: &mut P) -> RunReport {
        let mut transitions = vec![RunState::Loading];
        presenter.start_busy();

        let outcome = match self.spawn() {
            Ok(pending) => {
                let (stages, result) = pending.wait();
                transitions.extend(stages);
                result
            }
            Err(e) => Err(e),
        };

        let result = match outcome {
            Ok(images) => {
                let count = images.len();
                presenter.stop_busy();
                presenter.present(images);
                transitions.push(RunState::Done);
                log::info!("Presented {} photos", count);
                Ok(count)
            }
            Err(e) => {
                log::error!("Photo pipeline failed: {}", e);
                if self.config.clear_busy_on_failure {
                    presenter.stop_busy();
                }
                presenter.failed(&e);
                transitions.push(RunState::Failed);
                Err(e)
            }
        };

        RunReport {
            transitions,
            result,
        }
    }
}

fn fetch_and_materialize(
    client: &PhotoClient,
    endpoint: &str,
    limit: usize,
    tx: &Sender<RunEvent>,
) -> Result<Vec<RenderableImage>, PipelineError> {
    send(tx, RunEvent::Stage(RunState::Fetching));
    let records = MetadataFetcher::new(client).fetch(endpoint)?;

    send(tx, RunEvent::Stage(RunState::Materializing));
    let images = ImageMaterializer::new(client).materialize(&records, limit)?;
    Ok(images)
}

fn send(tx: &Sender<RunEvent>, event: RunEvent) {
    if tx.send(event).is_err() {
        log::debug!("Pipeline result dropped, receiver is gone");
    }
}
