//! Eviction and expiration policy

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Kind of record stored in a session cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Aggregates the state shared by a group of members
    Group,
    /// References a group and holds one conversational unit
    Member,
}

/// What happens when a bounded cache is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionStrategy {
    /// Never evict; removal is left to the application
    Disabled,
    /// Evict entries once the bound is reached
    RemoveOnFull,
}

impl EvictionStrategy {
    /// Whether entries may be evicted
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::RemoveOnFull)
    }
}

/// Selects which entries the cache engine may evict
///
/// Members are never selected directly: the engine cascades eviction of a
/// group to its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictablePredicate {
    /// Only group entries are evictable
    GroupsOnly,
}

impl EvictablePredicate {
    /// Whether an entry of `kind` may be evicted
    pub fn matches(self, kind: EntryKind) -> bool {
        match self {
            Self::GroupsOnly => kind == EntryKind::Group,
        }
    }
}

/// Eviction settings of a derived cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvictionPolicy {
    strategy: EvictionStrategy,
    max_entries: Option<u64>,
    evictable: Option<EvictablePredicate>,
}

impl EvictionPolicy {
    /// No eviction
    pub fn disabled() -> Self {
        Self {
            strategy: EvictionStrategy::Disabled,
            max_entries: None,
            evictable: None,
        }
    }

    /// Evict group entries once `max_entries` is reached
    pub fn remove_on_full(max_entries: u64) -> Self {
        Self {
            strategy: EvictionStrategy::RemoveOnFull,
            max_entries: Some(max_entries),
            evictable: Some(EvictablePredicate::GroupsOnly),
        }
    }

    /// Eviction strategy
    pub fn strategy(&self) -> EvictionStrategy {
        self.strategy
    }

    /// Entry bound, present iff eviction is enabled
    pub fn max_entries(&self) -> Option<u64> {
        self.max_entries
    }

    /// Bound as handed to the cache engine (0 when disabled)
    pub fn max_count(&self) -> u64 {
        self.max_entries.unwrap_or(0)
    }

    /// Installed evictable-entry predicate, if eviction is enabled
    pub fn evictable(&self) -> Option<EvictablePredicate> {
        self.evictable
    }

    /// Whether an entry of `kind` may be evicted under this policy
    pub fn is_evictable(&self, kind: EntryKind) -> bool {
        self.evictable.is_some_and(|predicate| predicate.matches(kind))
    }
}

impl Default for EvictionPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Expiration settings; `None` means disabled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationPolicy {
    /// Maximum lifetime of an entry
    pub lifespan: Option<Duration>,
    /// Maximum time an entry may stay untouched
    pub max_idle: Option<Duration>,
}

impl ExpirationPolicy {
    /// Both lifespan and max-idle disabled
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Build from signed milliseconds, negative meaning disabled
    pub fn from_millis(lifespan: i64, max_idle: i64) -> Self {
        Self {
            lifespan: millis_to_duration(lifespan),
            max_idle: millis_to_duration(max_idle),
        }
    }

    /// Whether either setting is enabled
    pub fn is_enabled(&self) -> bool {
        self.lifespan.is_some() || self.max_idle.is_some()
    }

    /// Lifespan in milliseconds, `-1` when disabled
    pub fn lifespan_millis(&self) -> i64 {
        duration_to_millis(self.lifespan)
    }

    /// Max-idle in milliseconds, `-1` when disabled
    pub fn max_idle_millis(&self) -> i64 {
        duration_to_millis(self.max_idle)
    }
}

fn millis_to_duration(millis: i64) -> Option<Duration> {
    u64::try_from(millis).ok().map(Duration::from_millis)
}

fn duration_to_millis(duration: Option<Duration>) -> i64 {
    duration
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(-1)
}

/// Where entries are held in memory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// Object storage on the heap
    #[default]
    Heap,
}
