//! Background fetch worker.
//!
//! Live statistics requests block for up to the HTTP timeout, so they run on
//! a worker thread and report back over a channel. The UI keeps drawing in
//! the meantime.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::application::DataService;
use crate::domain::{DataView, Disease, DiseaseDataset, Page};
use crate::ports::StatsSource;

/// What a worker was asked to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Page that asked for the data
    pub page: Page,
    pub view: DataView,
    pub disease: Disease,
}

/// State of a running fetch.
#[derive(Debug)]
pub enum FetchStatus {
    /// Still waiting on the source
    Pending,
    /// Finished with a dataset
    Done(DiseaseDataset),
    /// The worker thread went away without reporting
    Lost,
}

/// Handle to a running fetch worker.
pub struct FetchWorkerHandle {
    request: FetchRequest,
    result_rx: Receiver<DiseaseDataset>,
    _handle: JoinHandle<()>,
}

impl FetchWorkerHandle {
    #[must_use]
    pub fn request(&self) -> FetchRequest {
        self.request
    }

    /// Check for a result without blocking.
    #[must_use]
    pub fn poll(&self) -> FetchStatus {
        match self.result_rx.try_recv() {
            Ok(dataset) => FetchStatus::Done(dataset),
            Err(TryRecvError::Empty) => FetchStatus::Pending,
            Err(TryRecvError::Disconnected) => FetchStatus::Lost,
        }
    }
}

/// Spawns dataset fetches off the UI thread.
pub struct FetchWorker;

impl FetchWorker {
    /// Start loading `request` in the background.
    ///
    /// The thread owns its request until the source answers or times out;
    /// callers must not start another fetch before this one reports back.
    pub fn spawn<S>(service: Arc<DataService<S>>, request: FetchRequest) -> FetchWorkerHandle
    where
        S: StatsSource + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            let dataset = service.dataset(request.view, request.disease);
            let _ = tx.send(dataset);
        });

        FetchWorkerHandle {
            request,
            result_rx: rx,
            _handle: handle,
        }
    }
}
