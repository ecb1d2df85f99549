//! # Logbook Repository
//!
//! Shift-handover notes. Entries are never edited after creation; only
//! their open/resolved status changes.

use chrono::Utc;
use innkeep_core::{LogEntry, LogFilter, LogStatus, NewLogEntry};
use tracing::debug;

use crate::error::StoreResult;
use crate::store::{generate_id, PropertyStore};

impl PropertyStore {
    /// Matching entries, newest first.
    pub fn list_logs(&self, filter: &LogFilter) -> Vec<LogEntry> {
        let mut logs = self.logs.list(|entry| filter.matches(entry));
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs
    }

    pub fn get_log(&self, id: &str) -> StoreResult<LogEntry> {
        self.logs.get(id)
    }

    /// Adds an open entry stamped with the current time.
    pub fn create_log(&mut self, new: NewLogEntry) -> StoreResult<LogEntry> {
        let entry = LogEntry {
            id: generate_id(),
            message: new.message,
            author: new.author,
            timestamp: Utc::now(),
            status: LogStatus::Open,
            priority: new.priority,
        };
        entry.validate()?;

        debug!(id = %entry.id, author = %entry.author, "Creating log entry");
        self.logs.insert(entry.clone())?;
        Ok(entry)
    }

    pub fn set_log_status(&mut self, id: &str, status: LogStatus) -> StoreResult<LogEntry> {
        let entry = self.logs.find_mut(id)?;
        entry.status = status;

        debug!(id = %id, ?status, "Log status set");
        Ok(entry.clone())
    }

    /// Flips open ↔ resolved.
    pub fn toggle_log_status(&mut self, id: &str) -> StoreResult<LogEntry> {
        let next = self.logs.get(id)?.status.toggled();
        self.set_log_status(id, next)
    }
}

#[cfg(test)]
mod tests {
    use innkeep_core::LogPriority;

    use super::*;
    use crate::test_support::demo_store;

    #[test]
    fn test_list_logs_newest_first() {
        let store = demo_store();
        let ids: Vec<_> = store
            .list_logs(&LogFilter::default())
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);

        let open = store.list_logs(&LogFilter::open());
        assert_eq!(open.len(), 2);
    }

    #[test]
    fn test_create_log_goes_to_top() {
        let mut store = demo_store();
        let entry = store
            .create_log(NewLogEntry {
                message: "Lift on floor 3 making noise".to_string(),
                author: "Deepa Nair".to_string(),
                priority: Some(LogPriority::High),
            })
            .unwrap();

        assert_eq!(entry.status, LogStatus::Open);
        // Demo entries are stamped in 2025, so a fresh entry is newest
        assert_eq!(store.list_logs(&LogFilter::default())[0].id, entry.id);
    }

    #[test]
    fn test_create_log_requires_message() {
        let mut store = demo_store();
        assert!(store
            .create_log(NewLogEntry {
                message: "  ".to_string(),
                author: "Deepa Nair".to_string(),
                priority: None,
            })
            .is_err());
    }

    #[test]
    fn test_toggle_log_status() {
        let mut store = demo_store();
        assert_eq!(store.toggle_log_status("1").unwrap().status, LogStatus::Resolved);
        assert_eq!(store.toggle_log_status("1").unwrap().status, LogStatus::Open);
        assert_eq!(
            store.set_log_status("4", LogStatus::Open).unwrap().status,
            LogStatus::Open
        );
        assert!(store.toggle_log_status("99").unwrap_err().is_not_found());
    }
}
