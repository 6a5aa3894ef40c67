//! Load-once nuclide dataset with readiness notification
//!
//! This module owns the parsed NUBASE records for one source file. Consumers
//! can subscribe before or after the data arrives: callbacks registered early
//! are queued and run in registration order when loading completes, callbacks
//! registered late run immediately. Once loaded, the records never change.

use crate::app::models::IsotopeRecord;
use crate::{Error, Result};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tokio::sync::oneshot;

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::DatasetMetadata;
pub use query::{ChartExtent, HalfLifeDomain, HistogramBin};

/// Shared, immutable view of the loaded records in file order
pub type Records = Arc<[IsotopeRecord]>;

/// Callback run once with the loaded records
pub type ReadyCallback = Box<dyn FnOnce(Records) + Send + 'static>;

/// Readiness state guarded by the dataset mutex
enum ReadyState {
    /// Not loaded; callbacks wait here in registration order
    Pending(Vec<ReadyCallback>),
    /// Loaded, queue being drained; new callbacks join the back of the queue
    Delivering(Vec<ReadyCallback>),
    /// Loaded and drained; new callbacks run immediately
    Ready(Records),
}

struct DatasetInner {
    source_label: String,
    load_started: AtomicBool,
    state: Mutex<ReadyState>,
    records: OnceLock<Records>,
    metadata: OnceLock<DatasetMetadata>,
    half_life_domain: OnceLock<Option<HalfLifeDomain>>,
    chart_extent: OnceLock<Option<ChartExtent>>,
}

/// Handle to a load-once NUBASE dataset
///
/// Cloning the handle is cheap and every clone sees the same data. There is
/// no global instance: whoever loads the source passes a handle to the
/// consumers that need it.
#[derive(Clone)]
pub struct NuclideDataset {
    inner: Arc<DatasetInner>,
}

impl std::fmt::Debug for NuclideDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NuclideDataset")
            .field("source_label", &self.inner.source_label)
            .field("loaded", &self.is_loaded())
            .field("records", &self.inner.records.get().map(|r| r.len()))
            .finish()
    }
}

impl NuclideDataset {
    /// Create a new empty dataset for the named source
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(DatasetInner {
                source_label: source_label.into(),
                load_started: AtomicBool::new(false),
                state: Mutex::new(ReadyState::Pending(Vec::new())),
                records: OnceLock::new(),
                metadata: OnceLock::new(),
                half_life_domain: OnceLock::new(),
                chart_extent: OnceLock::new(),
            }),
        }
    }

    /// Label of the source this dataset was created for (usually a path)
    pub fn source_label(&self) -> &str {
        &self.inner.source_label
    }

    /// Check whether the records have been loaded
    pub fn is_loaded(&self) -> bool {
        self.inner.records.get().is_some()
    }

    /// Get the loaded records in file order
    ///
    /// # Errors
    /// * Returns `Error::NotLoaded` before loading completes
    pub fn records(&self) -> Result<Records> {
        self.inner
            .records
            .get()
            .cloned()
            .ok_or_else(|| Error::not_loaded(&self.inner.source_label))
    }

    /// Number of loaded records, or `Error::NotLoaded`
    pub fn record_count(&self) -> Result<usize> {
        self.records().map(|records| records.len())
    }

    /// Get metadata about the completed load
    pub fn metadata(&self) -> Result<DatasetMetadata> {
        self.inner
            .metadata
            .get()
            .cloned()
            .ok_or_else(|| Error::not_loaded(&self.inner.source_label))
    }

    /// Run `callback` with the records once they are available
    ///
    /// If the dataset is loaded and its queue has drained, the callback runs
    /// synchronously before this method returns. Otherwise it is queued and
    /// runs exactly once, after every callback registered before it, on the
    /// thread delivering the load. If loading never happens it never runs.
    pub fn on_ready<F>(&self, callback: F)
    where
        F: FnOnce(Records) + Send + 'static,
    {
        let records = {
            let mut state = self.lock_state();
            match &mut *state {
                ReadyState::Pending(callbacks) | ReadyState::Delivering(callbacks) => {
                    callbacks.push(Box::new(callback));
                    return;
                }
                ReadyState::Ready(records) => Arc::clone(records),
            }
        };
        callback(records);
    }

    /// Wait for the records to be loaded
    ///
    /// The returned future does not borrow the dataset. It stays pending for
    /// as long as the dataset is alive and unloaded.
    ///
    /// # Errors
    /// * Returns `Error::DatasetDropped` if every handle is dropped before loading
    pub fn ready(&self) -> impl Future<Output = Result<Records>> + Send + 'static {
        let (sender, receiver) = oneshot::channel();
        self.on_ready(move |records| {
            // The receiver may have been dropped by a caller that stopped waiting.
            let _ = sender.send(records);
        });
        async move { receiver.await.map_err(|_| Error::DatasetDropped) }
    }

    fn lock_state(&self) -> MutexGuard<'_, ReadyState> {
        // Callbacks never run under the lock, so a poisoned state is still consistent.
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether some caller has already claimed the load slot
    fn load_claimed(&self) -> bool {
        self.inner.load_started.load(Ordering::Acquire)
    }

    /// Claim the single load slot
    fn begin_load(&self) -> Result<()> {
        self.inner
            .load_started
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| Error::already_loaded(&self.inner.source_label))
    }

    /// Publish parsed records and deliver them to queued callbacks
    ///
    /// Callbacks registered while the queue drains, including from inside a
    /// callback, are appended and run in turn before the state becomes
    /// `Ready`.
    fn publish(&self, records: Records, metadata: DatasetMetadata) {
        let _ = self.inner.metadata.set(metadata);
        let _ = self.inner.records.set(Arc::clone(&records));

        let mut batch = {
            let mut state = self.lock_state();
            match std::mem::replace(&mut *state, ReadyState::Delivering(Vec::new())) {
                ReadyState::Pending(callbacks) => callbacks,
                finished => {
                    *state = finished;
                    return;
                }
            }
        };

        let _guard = DeliveryGuard {
            dataset: self,
            records: Arc::clone(&records),
        };

        loop {
            for callback in batch {
                callback(Arc::clone(&records));
            }

            let mut state = self.lock_state();
            match &mut *state {
                ReadyState::Delivering(queued) if !queued.is_empty() => {
                    batch = std::mem::take(queued);
                }
                _ => {
                    *state = ReadyState::Ready(Arc::clone(&records));
                    return;
                }
            }
        }
    }
}

/// Leaves the dataset `Ready` if a callback unwinds mid-delivery
///
/// Callbacks still queued at that point are dropped without running.
struct DeliveryGuard<'a> {
    dataset: &'a NuclideDataset,
    records: Records,
}

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            return;
        }
        let stranded = {
            let mut state = self.dataset.lock_state();
            std::mem::replace(&mut *state, ReadyState::Ready(Arc::clone(&self.records)))
        };
        drop(stranded);
    }
}
