//! Startup-seeded health metrics store.
//!
//! Holds a single [`MetricsSnapshot`] captured at process start. The
//! snapshot begins as hard-coded defaults and may be overridden once from
//! the last row of a wearable summary CSV (columns `resting_heart_rate`,
//! `steps`, `sleep_duration`, `active_minutes`). Seeding never fails
//! outward: a missing or malformed file keeps the defaults and logs a
//! warning.

use std::fs;
use std::path::Path;

use phia_core::MetricsSnapshot;
use tracing::{info, warn};

/// Read-only store for the process-wide health snapshot.
#[derive(Debug, Clone)]
pub struct MetricsStore {
    snapshot: MetricsSnapshot,
}

impl MetricsStore {
    /// Builds the store from defaults, seeded from the summary CSV when
    /// one exists at `csv_path`.
    pub fn initialize(csv_path: Option<&Path>) -> Self {
        let mut snapshot = MetricsSnapshot::default();

        if let Some(path) = csv_path {
            match fs::read_to_string(path) {
                Ok(contents) => {
                    if let Some(row) = last_summary_row(&contents) {
                        row.apply(&mut snapshot);
                        info!("Seeded metrics from {}", path.display());
                    } else {
                        warn!("No usable rows in {}, using defaults", path.display());
                    }
                }
                Err(e) => {
                    warn!("Could not read {} ({}), using defaults", path.display(), e);
                }
            }
        }

        Self { snapshot }
    }

    /// The snapshot captured at initialize time. Constant for the
    /// lifetime of the process.
    pub fn current(&self) -> &MetricsSnapshot {
        &self.snapshot
    }
}

impl Default for MetricsStore {
    fn default() -> Self {
        Self::initialize(None)
    }
}

/// Parsed override values from one summary CSV row. Fields absent from
/// the file (or unparseable) stay `None` and leave the defaults alone.
#[derive(Debug, Default)]
struct SummaryRow {
    resting_heart_rate: Option<u32>,
    steps: Option<u32>,
    sleep_duration: Option<f64>,
    active_minutes: Option<u32>,
}

impl SummaryRow {
    fn apply(&self, snapshot: &mut MetricsSnapshot) {
        if let Some(hr) = self.resting_heart_rate {
            snapshot.heart_rate_bpm = hr;
        }
        if let Some(steps) = self.steps {
            snapshot.steps_today = steps;
        }
        if let Some(hours) = self.sleep_duration {
            snapshot.sleep_duration = format!("{hours:.1}h");
        }
        if let Some(minutes) = self.active_minutes {
            snapshot.active_minutes = minutes;
        }
    }
}

/// Extracts the last data row of a headered CSV. The summary files carry
/// more columns than we use; unknown columns are ignored.
fn last_summary_row(contents: &str) -> Option<SummaryRow> {
    let mut lines = contents.lines().filter(|l| !l.trim().is_empty());

    let header: Vec<&str> = lines.next()?.split(',').map(str::trim).collect();
    let last = lines.last()?;
    let cells: Vec<&str> = last.split(',').map(str::trim).collect();

    let cell = |name: &str| -> Option<&str> {
        let idx = header.iter().position(|h| *h == name)?;
        cells.get(idx).copied()
    };

    let row = SummaryRow {
        resting_heart_rate: cell("resting_heart_rate").and_then(parse_count),
        steps: cell("steps").and_then(parse_count),
        sleep_duration: cell("sleep_duration").and_then(|v| v.parse::<f64>().ok()),
        active_minutes: cell("active_minutes").and_then(parse_count),
    };

    Some(row)
}

/// Coerces a numeric cell (possibly fractional, e.g. "65.0") to a count.
fn parse_count(value: &str) -> Option<u32> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u32)
}
