// Process wide waitlist settings and the waiting time heuristic built on them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TABLE_TURNAROUND_MINUTES: u32 = 30;
pub const DEFAULT_TOTAL_TABLES: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Minutes one seating occupies a table.
    pub avg_table_turnaround_time: u32,
    pub total_tables: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            avg_table_turnaround_time: DEFAULT_TABLE_TURNAROUND_MINUTES,
            total_tables: DEFAULT_TOTAL_TABLES,
        }
    }
}

impl AppSettings {
    /// Form level range check. The store itself accepts any settings.
    pub fn validate(self) -> Result<Self, SettingsError> {
        if self.avg_table_turnaround_time == 0 {
            return Err(SettingsError::NonPositive {
                field: "avgTableTurnaroundTime",
            });
        }
        if self.total_tables == 0 {
            return Err(SettingsError::NonPositive {
                field: "totalTables",
            });
        }
        Ok(self)
    }
}

/// `ceil(waiting / tables * turnaround)` in whole minutes.
///
/// Parties are assumed to be served FIFO against all tables at once; party size
/// and table size matching are ignored. Zero tables yields zero.
pub fn estimate_waiting_time(waiting_count: usize, settings: &AppSettings) -> u32 {
    if settings.total_tables == 0 {
        return 0;
    }
    let tables = u64::from(settings.total_tables);
    let demand = waiting_count as u64 * u64::from(settings.avg_table_turnaround_time);
    u32::try_from(demand.div_ceil(tables)).unwrap_or(u32::MAX)
}
