// Name Registry - stable identity + mutable display name
//
// Identity: EntityId (UUID) - generated once, never reused
// Value: display name - can be read or overwritten any number of times
//
// The registry is an explicit value handed to every operation, and entries
// leave it through explicit dispose() only. An entity handle carries no
// back-reference to the registry and no Drop impl, so nothing here depends
// on drop timing.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ENTITY ID
// ============================================================================

/// Opaque process-unique identity
///
/// Equality comparison is the only meaningful operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(uuid::Uuid);

impl EntityId {
    fn fresh() -> Self {
        EntityId(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// NAMED ENTITY
// ============================================================================

/// Handle to a registered entity
///
/// The display name lives in the registry, not in the handle.
#[derive(Debug)]
pub struct NamedEntity {
    id: EntityId,
}

impl NamedEntity {
    pub fn id(&self) -> EntityId {
        self.id
    }
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The identity has no registry entry (typically a read after dispose)
    UnknownIdentity(EntityId),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownIdentity(id) => {
                write!(f, "no entry registered for identity {}", id)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

// ============================================================================
// REGISTRY
// ============================================================================

/// One registry entry: current display name plus when the identity was
/// first registered
#[derive(Debug, Clone)]
struct RosterEntry {
    name: String,
    registered_at: DateTime<Utc>,
}

/// Snapshot row for display and export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRecord {
    pub id: EntityId,
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

/// Thread-safe identity -> display-name registry
///
/// Backed by a lock-striped concurrent map: create / display_name / rename /
/// dispose are safe from any number of threads without external locking.
/// Operations on the same identity are linearizable; no ordering is promised
/// between operations on different identities.
pub struct NameRegistry {
    entries: DashMap<EntityId, RosterEntry>,
}

impl NameRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        NameRegistry {
            entries: DashMap::new(),
        }
    }

    /// Register a new entity under a fresh identity
    pub fn create(&self, name: impl Into<String>) -> NamedEntity {
        let id = EntityId::fresh();
        self.entries.insert(
            id,
            RosterEntry {
                name: name.into(),
                registered_at: Utc::now(),
            },
        );
        NamedEntity { id }
    }

    /// Current display name for an entity
    ///
    /// Reading a disposed entity is a programmer error and surfaces
    /// immediately as `UnknownIdentity`.
    pub fn display_name(&self, entity: &NamedEntity) -> Result<String, RegistryError> {
        self.entries
            .get(&entity.id)
            .map(|entry| entry.name.clone())
            .ok_or(RegistryError::UnknownIdentity(entity.id))
    }

    /// Overwrite the display name for an entity
    ///
    /// Upsert: a missing entry is re-created rather than rejected, keeping
    /// the add-or-update contract of the underlying map. Never fails.
    pub fn rename(&self, entity: &NamedEntity, name: impl Into<String>) {
        let name = name.into();
        self.entries
            .entry(entity.id)
            .and_modify(|entry| entry.name = name.clone())
            .or_insert_with(|| RosterEntry {
                name,
                registered_at: Utc::now(),
            });
    }

    /// Remove the entity's entry; idempotent, no error if already gone
    pub fn dispose(&self, entity: &NamedEntity) {
        self.entries.remove(&entity.id);
    }

    /// Whether the entity currently has an entry
    pub fn contains(&self, entity: &NamedEntity) -> bool {
        self.entries.contains_key(&entity.id)
    }

    /// Count registered entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current entries, ordered by name for stable output
    pub fn snapshot(&self) -> Vec<RosterRecord> {
        let mut records: Vec<RosterRecord> = self
            .entries
            .iter()
            .map(|entry| RosterRecord {
                id: *entry.key(),
                name: entry.value().name.clone(),
                registered_at: entry.value().registered_at,
            })
            .collect();

        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }
}

impl Default for NameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_create_then_display_name() {
        let registry = NameRegistry::new();

        let dave = registry.create("Dave");

        assert_eq!(registry.display_name(&dave).unwrap(), "Dave");
        assert!(registry.contains(&dave));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_rename_overwrites() {
        let registry = NameRegistry::new();
        let entity = registry.create("Dave");

        registry.rename(&entity, "David");

        assert_eq!(registry.display_name(&entity).unwrap(), "David");
        assert_eq!(registry.len(), 1); // Same identity, same entry
    }

    #[test]
    fn test_display_name_after_dispose_fails() {
        let registry = NameRegistry::new();
        let entity = registry.create("Dave");

        registry.dispose(&entity);

        let err = registry.display_name(&entity).unwrap_err();
        assert_eq!(err, RegistryError::UnknownIdentity(entity.id()));
        assert!(err.to_string().contains(&entity.id().to_string()));
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let registry = NameRegistry::new();
        let entity = registry.create("Dave");

        registry.dispose(&entity);
        registry.dispose(&entity); // Second removal is a no-op

        assert!(registry.is_empty());
        assert!(!registry.contains(&entity));
    }

    #[test]
    fn test_rename_upserts_after_dispose() {
        let registry = NameRegistry::new();
        let entity = registry.create("Dave");

        registry.dispose(&entity);
        registry.rename(&entity, "Lazarus");

        // The entry came back under the same identity
        assert_eq!(registry.display_name(&entity).unwrap(), "Lazarus");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_identities_are_unique() {
        let registry = NameRegistry::new();

        let a = registry.create("Same Name");
        let b = registry.create("Same Name");

        assert_ne!(a.id(), b.id());
        assert_eq!(registry.len(), 2);

        // Disposing one leaves the other readable
        registry.dispose(&a);
        assert_eq!(registry.display_name(&b).unwrap(), "Same Name");
    }

    #[test]
    fn test_snapshot_sorted_by_name() {
        let registry = NameRegistry::new();
        let carol = registry.create("Carol");
        registry.create("Alice");
        registry.create("Bob");

        let records = registry.snapshot();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert!(records.iter().any(|r| r.id == carol.id()));
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let registry = NameRegistry::new();
        registry.create("Dave");

        let json = serde_json::to_string(&registry.snapshot()).unwrap();

        assert!(json.contains("\"Dave\""));
        assert!(json.contains("registered_at"));
    }

    #[test]
    fn test_concurrent_creates() {
        let registry = Arc::new(NameRegistry::new());
        let mut handles = Vec::new();

        for t in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                (0..16)
                    .map(|i| registry.create(format!("worker-{}-{}", t, i)))
                    .collect::<Vec<_>>()
            }));
        }

        let mut entities = Vec::new();
        for handle in handles {
            entities.extend(handle.join().unwrap());
        }

        assert_eq!(registry.len(), 8 * 16);
        for entity in &entities {
            assert!(registry.contains(entity));
        }
    }

    #[test]
    fn test_rename_visible_after_join() {
        let registry = Arc::new(NameRegistry::new());
        let entity = registry.create("before");

        let worker = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry.rename(&entity, "after");
                entity
            })
        };

        let entity = worker.join().unwrap();
        assert_eq!(registry.display_name(&entity).unwrap(), "after");
    }

    #[test]
    fn test_concurrent_create_and_dispose() {
        let registry = Arc::new(NameRegistry::new());

        let keepers: Vec<NamedEntity> =
            (0..32).map(|i| registry.create(format!("keep-{}", i))).collect();
        let doomed: Vec<NamedEntity> =
            (0..32).map(|i| registry.create(format!("drop-{}", i))).collect();

        let disposer = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for entity in &doomed {
                    registry.dispose(entity);
                }
            })
        };

        disposer.join().unwrap();

        assert_eq!(registry.len(), 32);
        for entity in &keepers {
            assert!(registry.display_name(entity).is_ok());
        }
    }
}
