use shardgate_core::schema::SchemaReader;
use shardgate_core::types::Keyspace;
use shardgate_core::ShardgateError;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};
use tracing::info;

/// Full definition of one keyspace as tracked from backend DDL.
#[derive(Debug, Clone)]
pub struct KeyspaceDef {
    pub name: String,
    pub sharded: bool,
    pub tables: BTreeSet<String>,
}

/// Immutable view of the whole topology at one registry version.
///
/// A resolution holds exactly one snapshot for its full duration, so the
/// keyspace-existence check and the table-existence check always observe
/// the same version.
#[derive(Debug, Default)]
pub struct SchemaSnapshot {
    version: u64,
    keyspaces: HashMap<String, KeyspaceDef>,
}

impl SchemaSnapshot {
    pub fn new(version: u64) -> Self {
        Self {
            version,
            keyspaces: HashMap::new(),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn add_keyspace(&mut self, def: KeyspaceDef) -> Result<(), ShardgateError> {
        if def.name.is_empty() {
            return Err(ShardgateError::Schema("keyspace name is empty".into()));
        }
        if self.keyspaces.contains_key(&def.name) {
            return Err(ShardgateError::Schema(format!(
                "keyspace already defined: {}",
                def.name
            )));
        }
        self.keyspaces.insert(def.name.clone(), def);
        Ok(())
    }

    pub fn keyspace_def(&self, name: &str) -> Option<&KeyspaceDef> {
        self.keyspaces.get(name)
    }
}

impl SchemaReader for SchemaSnapshot {
    fn keyspace(&self, name: &str) -> Option<Keyspace> {
        self.keyspaces.get(name).map(|def| Keyspace {
            name: def.name.clone(),
            sharded: def.sharded,
        })
    }

    fn table_exists(&self, keyspace: &str, table: &str) -> bool {
        self.keyspaces
            .get(keyspace)
            .map(|def| def.tables.contains(table))
            .unwrap_or(false)
    }
}

/// Process-wide holder of the current snapshot. The external schema tracker
/// installs new versions; planners take `snapshot()` handles and never
/// write back.
#[derive(Debug)]
pub struct SchemaRegistry {
    current: RwLock<Arc<SchemaSnapshot>>,
}

impl SchemaRegistry {
    pub fn new(initial: SchemaSnapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The current snapshot. The handle stays valid and unchanged across
    /// later installs.
    pub fn snapshot(&self) -> Arc<SchemaSnapshot> {
        self.current.read().unwrap().clone()
    }

    /// Swap in a refreshed topology. Called by the schema tracker only.
    pub fn install(&self, snapshot: SchemaSnapshot) {
        let version = snapshot.version();
        *self.current.write().unwrap() = Arc::new(snapshot);
        info!(version, "installed schema snapshot");
    }
}
