//! # Collections
//!
//! An insertion-ordered list of entities keyed by id. Every read hands out
//! clones; mutable access stays inside the crate so writes always go
//! through the store's validate-then-commit path.

use innkeep_core::{
    ChargeRecord, Channel, GroupBlock, GuestProfile, LogEntry, PaymentRecord, Promotion,
    Reservation, Review, Room,
};

use crate::error::{StoreError, StoreResult};

/// An entity stored by id.
pub trait Entity: Clone {
    /// Name used in NotFound / Duplicate errors.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

macro_rules! impl_entity {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl Entity for $ty {
                const KIND: &'static str = $kind;

                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_entity! {
    Room => "Room",
    Reservation => "Reservation",
    GroupBlock => "Group",
    LogEntry => "LogEntry",
    Channel => "Channel",
    Promotion => "Promotion",
    PaymentRecord => "Payment",
    ChargeRecord => "Charge",
    GuestProfile => "Guest",
    Review => "Review",
}

#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Collection { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Clones of every item accepted by `pred`, in insertion order.
    pub fn list(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.items.iter().filter(|item| pred(item)).cloned().collect()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get(&self, id: &str) -> StoreResult<T> {
        self.find(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(T::KIND, id))
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> StoreResult<&mut T> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| StoreError::not_found(T::KIND, id))
    }

    /// Adds an entity, rejecting an id already present.
    pub(crate) fn insert(&mut self, item: T) -> StoreResult<()> {
        if self.contains(item.id()) {
            return Err(StoreError::duplicate(T::KIND, item.id()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Swaps in a validated copy for the entity with the same id.
    pub(crate) fn replace(&mut self, item: T) -> StoreResult<()> {
        let slot = self.find_mut(item.id())?;
        *slot = item;
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: &str) -> StoreResult<T> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| StoreError::not_found(T::KIND, id))?;
        Ok(self.items.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, number: &str) -> Room {
        Room::vacant(id, number, "Deluxe", 1)
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut rooms = Collection::default();
        rooms.insert(room("1", "101")).unwrap();

        let err = rooms.insert(room("1", "102")).unwrap_err();
        assert_eq!(err, StoreError::duplicate("Room", "1"));
        assert_eq!(rooms.len(), 1);
    }

    #[test]
    fn test_get_returns_clone_or_not_found() {
        let mut rooms = Collection::default();
        rooms.insert(room("1", "101")).unwrap();

        let mut copy = rooms.get("1").unwrap();
        copy.room_number = "999".to_string();
        assert_eq!(rooms.get("1").unwrap().room_number, "101");

        assert_eq!(rooms.get("7").unwrap_err(), StoreError::not_found("Room", "7"));
    }

    #[test]
    fn test_remove_only_named_entity() {
        let mut rooms = Collection::default();
        rooms.insert(room("1", "101")).unwrap();
        rooms.insert(room("2", "102")).unwrap();

        rooms.remove("1").unwrap();
        assert!(!rooms.contains("1"));
        assert!(rooms.contains("2"));
        assert!(rooms.remove("1").unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut rooms = Collection::default();
        rooms.insert(room("b", "201")).unwrap();
        rooms.insert(room("a", "101")).unwrap();

        let numbers: Vec<_> = rooms.list(|_| true).into_iter().map(|r| r.room_number).collect();
        assert_eq!(numbers, vec!["201", "101"]);
    }
}
