//! # Channel Repository
//!
//! Distribution channels and their sync bookkeeping. No OTA is contacted;
//! the host reports sync outcomes and the store records them.
//!
//! ```text
//!   synced ──begin──► syncing ──complete──► synced (last_sync = now)
//!                        │
//!   error ◄────fail──────┘          error ──begin──► syncing
//! ```

use chrono::Utc;
use innkeep_core::{Channel, ChannelStatus, ChannelUpdate, NewChannel};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::store::{generate_id, PropertyStore};

impl PropertyStore {
    pub fn list_channels(&self) -> Vec<Channel> {
        self.channels.list(|_| true)
    }

    pub fn get_channel(&self, id: &str) -> StoreResult<Channel> {
        self.channels.get(id)
    }

    /// Registers a channel as freshly synced.
    pub fn create_channel(&mut self, new: NewChannel) -> StoreResult<Channel> {
        let channel = Channel {
            id: generate_id(),
            name: new.name,
            status: ChannelStatus::Synced,
            last_sync: Utc::now(),
            last_error: None,
        };
        channel.validate()?;

        debug!(id = %channel.id, name = %channel.name, "Creating channel");
        self.channels.insert(channel.clone())?;
        Ok(channel)
    }

    pub fn update_channel(&mut self, id: &str, patch: ChannelUpdate) -> StoreResult<Channel> {
        let mut channel = self.channels.get(id)?;
        if let Some(name) = patch.name {
            channel.name = name;
        }
        channel.validate()?;

        debug!(id = %id, "Updating channel");
        self.channels.replace(channel.clone())?;
        Ok(channel)
    }

    pub fn begin_sync(&mut self, id: &str) -> StoreResult<Channel> {
        self.sync_step(id, |channel| channel.begin_sync())
    }

    pub fn complete_sync(&mut self, id: &str) -> StoreResult<Channel> {
        let now = Utc::now();
        self.sync_step(id, |channel| channel.complete_sync(now))
    }

    pub fn fail_sync(&mut self, id: &str, message: &str) -> StoreResult<Channel> {
        self.sync_step(id, |channel| channel.fail_sync(message))
    }

    fn sync_step(
        &mut self,
        id: &str,
        step: impl FnOnce(&mut Channel) -> innkeep_core::CoreResult<()>,
    ) -> StoreResult<Channel> {
        let mut channel = self.channels.get(id)?;
        let from = channel.status;

        step(&mut channel).map_err(|err| {
            warn!(id = %id, %from, error = %err, "Channel sync step rejected");
            err
        })?;

        debug!(id = %id, %from, to = %channel.status, "Channel sync status changed");
        self.channels.replace(channel.clone())?;
        Ok(channel)
    }
}

#[cfg(test)]
mod tests {
    use innkeep_core::CoreError;

    use super::*;
    use crate::error::StoreError;
    use crate::test_support::demo_store;

    #[test]
    fn test_sync_cycle() {
        let mut store = demo_store();
        let before = store.get_channel("1").unwrap();

        store.begin_sync("1").unwrap();
        let done = store.complete_sync("1").unwrap();

        assert_eq!(done.status, ChannelStatus::Synced);
        assert!(done.last_sync > before.last_sync);
    }

    #[test]
    fn test_failed_sync_records_message() {
        let mut store = demo_store();
        // Agoda is mid-sync in the demo seed
        let failed = store.fail_sync("3", "HTTP 503 from partner API").unwrap();
        assert_eq!(failed.status, ChannelStatus::Error);
        assert_eq!(failed.last_error.as_deref(), Some("HTTP 503 from partner API"));

        store.begin_sync("3").unwrap();
        let recovered = store.complete_sync("3").unwrap();
        assert!(recovered.last_error.is_none());
    }

    #[test]
    fn test_complete_without_begin_rejected() {
        let mut store = demo_store();
        let before = store.get_channel("5").unwrap();

        let err = store.complete_sync("5").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::InvalidChannelTransition { .. })
        ));
        assert_eq!(store.get_channel("5").unwrap(), before);
    }

    #[test]
    fn test_create_and_rename_channel() {
        let mut store = demo_store();
        let channel = store
            .create_channel(NewChannel {
                name: "Cleartrip".to_string(),
            })
            .unwrap();
        assert_eq!(channel.status, ChannelStatus::Synced);

        let renamed = store
            .update_channel(
                &channel.id,
                ChannelUpdate {
                    name: Some("Cleartrip India".to_string()),
                },
            )
            .unwrap();
        assert_eq!(renamed.name, "Cleartrip India");
        assert_eq!(store.list_channels().len(), 7);
        assert!(store.update_channel("99", ChannelUpdate::default()).unwrap_err().is_not_found());
    }
}
