//=========================================================================
// System Registry
//=========================================================================
//
// Ordered mapping of system ids to descriptors, with a cached dispatch
// order.
//
// The dispatch order is the descriptors sorted by (priority, insertion
// sequence). Any mutation invalidates the cache; it is rebuilt lazily
// before the next pass and never mid-pass.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::context::RegistryCommand;

use super::{SystemDescriptor, SystemId};

//=== RegistryEntry =======================================================

struct RegistryEntry {
    descriptor: SystemDescriptor,
    sequence: u64,
}

//=== SystemRegistry ======================================================

/// Holds named system descriptors and derives the dispatch order.
///
/// Ids are unique at any instant; re-registering an existing id replaces
/// its descriptor wholesale and counts as a fresh insertion for the
/// ordering tie-break. Lookup misses are a normal condition reported as
/// `None`, never a fault.
pub struct SystemRegistry {
    entries: HashMap<SystemId, RegistryEntry>,
    order: Vec<SystemId>,
    order_dirty: bool,
    next_sequence: u64,
}

impl SystemRegistry {
    //--- Construction -----------------------------------------------------

    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            order_dirty: false,
            next_sequence: 0,
        }
    }

    //--- Mutations --------------------------------------------------------

    /// Inserts or wholesale-replaces the system under `id`.
    pub fn register(&mut self, id: impl Into<SystemId>, descriptor: SystemDescriptor) {
        let id = id.into();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let entry = RegistryEntry {
            descriptor,
            sequence,
        };

        if self.entries.insert(id.clone(), entry).is_some() {
            warn!("System \"{}\" was already registered and has been replaced", id);
        } else {
            debug!("Registered system \"{}\"", id);
        }

        self.order_dirty = true;
    }

    /// Removes the system under `id`; a no-op when absent.
    pub fn unregister(&mut self, id: &str) {
        if self.entries.remove(id).is_some() {
            debug!("Unregistered system \"{}\"", id);
            self.order_dirty = true;
        } else {
            debug!("System \"{}\" not registered, skipping unregister", id);
        }
    }

    /// Toggles dispatch eligibility without removing state; a no-op when
    /// absent. Takes effect starting from the next pass.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.descriptor.enabled = enabled;
                debug!(
                    "System \"{}\" {}",
                    id,
                    if enabled { "enabled" } else { "disabled" }
                );
            }
            None => debug!("System \"{}\" not registered, skipping set_enabled", id),
        }
    }

    /// Applies a deferred mutation queued during a pass.
    pub(crate) fn apply(&mut self, command: RegistryCommand) {
        match command {
            RegistryCommand::Register { id, descriptor } => self.register(id, descriptor),
            RegistryCommand::Unregister(id) => self.unregister(&id),
            RegistryCommand::SetEnabled(id, enabled) => self.set_enabled(&id, enabled),
        }
    }

    //--- Lookups ----------------------------------------------------------

    /// The descriptor under `id`, or `None` when absent.
    pub fn get(&self, id: &str) -> Option<&SystemDescriptor> {
        self.entries.get(id).map(|entry| &entry.descriptor)
    }

    /// Exclusive access to the descriptor under `id`.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut SystemDescriptor> {
        self.entries.get_mut(id).map(|entry| &mut entry.descriptor)
    }

    /// Whether a system is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Whether the system under `id` is dispatch-eligible, or `None`
    /// when absent.
    pub fn is_enabled(&self, id: &str) -> Option<bool> {
        self.get(id).map(|descriptor| descriptor.enabled)
    }

    /// The number of registered systems.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered ids, in dispatch order.
    pub fn ids(&mut self) -> Vec<SystemId> {
        self.dispatch_order().to_vec()
    }

    //--- Dispatch Order ---------------------------------------------------

    /// The cached dispatch order, rebuilt here when a mutation has
    /// invalidated it.
    pub(crate) fn dispatch_order(&mut self) -> &[SystemId] {
        if self.order_dirty {
            self.order = self.entries.keys().cloned().collect();
            self.order.sort_by_key(|id| {
                let entry = &self.entries[id];
                (entry.descriptor.priority, entry.sequence)
            });
            self.order_dirty = false;
        }
        &self.order
    }
}

impl Default for SystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
