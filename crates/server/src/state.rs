// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared catalog and its refresh cycle.
//!
//! Handlers read the catalog through an [`ArcSwap`], so a search holds one
//! complete snapshot for its whole duration. A refresh builds the new
//! catalog off to the side and publishes it in a single store.

use arc_swap::ArcSwap;
use award_finder::{Catalog, ReferenceSource};
use award_finder_api::{ApiError, load_catalog};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info};

/// The reference data store, shared by startup and refresh.
pub type SharedSource = Arc<Mutex<dyn ReferenceSource + Send>>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The catalog every request reads.
    catalog: Arc<ArcSwap<Catalog>>,
    /// The store the catalog is rebuilt from.
    source: SharedSource,
}

impl AppState {
    /// Creates state serving `catalog`, refreshed from `source`.
    #[must_use]
    pub fn new(catalog: Catalog, source: SharedSource) -> Self {
        Self {
            catalog: Arc::new(ArcSwap::from_pointee(catalog)),
            source,
        }
    }

    /// Loads the initial catalog from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference data cannot be read.
    pub async fn load(source: SharedSource) -> Result<Self, ApiError> {
        let catalog: Catalog = {
            let mut guard = source.lock().await;
            load_catalog(&mut *guard)?
        };
        Ok(Self::new(catalog, source))
    }

    /// The catalog currently being served.
    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.load_full()
    }

    /// Rebuilds the catalog from the store and publishes it.
    ///
    /// On failure the current catalog stays in service.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference data cannot be read.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let catalog: Catalog = {
            let mut guard = self.source.lock().await;
            load_catalog(&mut *guard)?
        };
        self.catalog.store(Arc::new(catalog));
        Ok(())
    }
}

/// Refreshes the catalog every `period` until the task is dropped.
pub async fn refresh_loop(state: AppState, period: Duration) {
    let mut interval: tokio::time::Interval = tokio::time::interval(period);
    // The first tick completes immediately and startup already loaded.
    interval.tick().await;

    loop {
        interval.tick().await;
        match state.refresh().await {
            Ok(()) => info!("Reference catalog refreshed"),
            Err(err) => error!(error = %err, "Catalog refresh failed, keeping previous catalog"),
        }
    }
}
