//! Session state management.
//!
//! Session data is modelled as an explicit keyed store: session id -> the
//! currently loaded table. A table is created per load, replaced (never
//! mutated) when a new file is loaded, and evicted when the session ends.
//! No ambient process-wide globals.
//!
//! Tables are held as `Arc` snapshots behind a `parking_lot::RwLock`, so
//! each session owns an immutable table and independent read-only analysis
//! calls over the same snapshot can safely run in parallel.

use crate::error::{EdaError, Result};
use crate::insights::InsightEngine;
use crate::reporting::{AnalysisReport, ReportGenerator};
use parking_lot::RwLock;
use polars::prelude::DataFrame;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Keyed store of per-session tables.
pub struct SessionStore {
    tables: RwLock<HashMap<String, Arc<DataFrame>>>,
    engine: InsightEngine,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store with default insight thresholds.
    pub fn new() -> Self {
        Self::with_engine(InsightEngine::default())
    }

    /// Create a store with a custom insight engine.
    pub fn with_engine(engine: InsightEngine) -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            engine,
        }
    }

    /// Load a table into a session, replacing any previous table.
    ///
    /// Returns the snapshot handle now owned by the session.
    pub fn put(&self, session_id: impl Into<String>, df: DataFrame) -> Arc<DataFrame> {
        let session_id = session_id.into();
        let table = Arc::new(df);
        let replaced = self
            .tables
            .write()
            .insert(session_id.clone(), Arc::clone(&table));

        if replaced.is_some() {
            info!("Replaced table for session '{}'", session_id);
        } else {
            debug!("Created table for session '{}'", session_id);
        }
        table
    }

    /// Get the current table snapshot for a session, if any.
    pub fn table(&self, session_id: &str) -> Option<Arc<DataFrame>> {
        self.tables.read().get(session_id).map(Arc::clone)
    }

    /// Evict a session's table. Returns true if a table was present.
    pub fn evict(&self, session_id: &str) -> bool {
        let evicted = self.tables.write().remove(session_id).is_some();
        if evicted {
            debug!("Evicted table for session '{}'", session_id);
        }
        evicted
    }

    /// Number of sessions with a loaded table.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    /// Run the full analysis (profile, quality, insights) over a session's
    /// current table.
    ///
    /// Fails with [`EdaError::NoDataLoaded`] when the session has no table;
    /// that condition is recoverable and the session state is unchanged.
    pub fn analyze(&self, session_id: &str) -> Result<AnalysisReport> {
        let table = self
            .table(session_id)
            .ok_or_else(|| EdaError::NoDataLoaded(session_id.to_string()))?;

        ReportGenerator::build_report(&table, None, &self.engine)
    }
}
