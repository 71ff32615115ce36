//! Shared status registry

use super::types::{SlotStatus, StatusChange};
use crate::config::{MAX_EVENT_CAPACITY, default_event_capacity};
use dashmap::DashMap;
use std::collections::HashMap;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    status: SlotStatus,
    generation: u64,
}

/// Key → field → status store shared by every running batch
///
/// Slots are created on first write and overwritten in place afterwards;
/// the registry never removes them. Every write is published on a broadcast
/// feed so a presentation layer can react without polling.
#[derive(Debug)]
pub struct StatusRegistry {
    slots: DashMap<String, HashMap<String, Slot>>,
    events: broadcast::Sender<StatusChange>,
}

impl Default for StatusRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusRegistry {
    /// Create a registry with the default change feed capacity
    pub fn new() -> Self {
        Self::with_event_capacity(default_event_capacity())
    }

    /// Create a registry whose change feed buffers `capacity` events per subscriber
    pub fn with_event_capacity(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.clamp(1, MAX_EVENT_CAPACITY));
        Self {
            slots: DashMap::new(),
            events,
        }
    }

    /// Current status of a slot, if it was ever written
    pub fn get(&self, key: &str, field: &str) -> Option<SlotStatus> {
        self.slots
            .get(key)
            .and_then(|fields| fields.get(field).map(|slot| slot.status))
    }

    /// Display tag of a slot, if it was ever written
    pub fn tag(&self, key: &str, field: &str) -> Option<String> {
        self.get(key, field)
            .map(|status| status.tag(field).to_string())
    }

    /// Generation of a slot; zero for slots never marked pending
    pub fn generation(&self, key: &str, field: &str) -> u64 {
        self.slots
            .get(key)
            .and_then(|fields| fields.get(field).map(|slot| slot.generation))
            .unwrap_or(0)
    }

    /// Every field status recorded for `key`
    pub fn snapshot(&self, key: &str) -> Option<HashMap<String, SlotStatus>> {
        self.slots.get(key).map(|fields| {
            fields
                .iter()
                .map(|(field, slot)| (field.clone(), slot.status))
                .collect()
        })
    }

    /// Keys currently present
    pub fn keys(&self) -> Vec<String> {
        self.slots.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Unconditionally write a slot
    pub fn set(&self, key: &str, field: &str, status: SlotStatus) {
        let generation = {
            let mut fields = self.slots.entry(key.to_string()).or_default();
            let slot = fields.entry(field.to_string()).or_default();
            slot.status = status;
            slot.generation
        };
        self.publish(key, field, status, generation);
    }

    /// Mark a slot pending and start a new generation for it
    ///
    /// Returns the generation that later writes from the same batch should
    /// present to [`StatusRegistry::set_if_current`].
    pub fn begin(&self, key: &str, field: &str) -> u64 {
        let generation = {
            let mut fields = self.slots.entry(key.to_string()).or_default();
            let slot = fields.entry(field.to_string()).or_default();
            slot.generation += 1;
            slot.status = SlotStatus::Pending;
            slot.generation
        };
        self.publish(key, field, SlotStatus::Pending, generation);
        generation
    }

    /// Write a slot only while it is still at `generation`
    ///
    /// Returns whether the write was applied.
    pub fn set_if_current(
        &self,
        key: &str,
        field: &str,
        generation: u64,
        status: SlotStatus,
    ) -> bool {
        let applied = match self.slots.get_mut(key) {
            Some(mut fields) => match fields.get_mut(field) {
                Some(slot) if slot.generation == generation => {
                    slot.status = status;
                    true
                }
                _ => false,
            },
            None => false,
        };

        if applied {
            self.publish(key, field, status, generation);
        } else {
            debug!(
                "Skipping superseded write of {:?} to {}/{} (generation {})",
                status, key, field, generation
            );
        }
        applied
    }

    /// Subscribe to slot writes made after this call
    pub fn subscribe(&self) -> broadcast::Receiver<StatusChange> {
        self.events.subscribe()
    }

    /// Slot writes as a stream; lagging consumers see `Err` items
    pub fn watch(&self) -> BroadcastStream<StatusChange> {
        BroadcastStream::new(self.events.subscribe())
    }

    fn publish(&self, key: &str, field: &str, status: SlotStatus, generation: u64) {
        debug!("Slot {}/{} -> {:?}", key, field, status);
        // No subscribers is the common case outside a UI.
        let _ = self.events.send(StatusChange {
            key: key.to_string(),
            field: field.to_string(),
            status,
            generation,
        });
    }
}
