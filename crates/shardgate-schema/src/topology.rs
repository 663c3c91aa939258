use crate::registry::{KeyspaceDef, SchemaSnapshot};
use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Debug, Deserialize, Clone)]
pub struct TopologyConfig {
    pub keyspaces: Vec<KeyspaceConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KeyspaceConfig {
    pub name: String,
    pub sharded: bool,
    #[serde(default)]
    pub tables: Vec<String>,
}

impl TopologyConfig {
    /// Bootstrap topology for cold start, before the schema tracker has
    /// produced its first refresh.
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: TopologyConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let mut seen = BTreeSet::new();
        for ks in &self.keyspaces {
            if ks.name.is_empty() {
                return Err(anyhow::anyhow!("keyspace with empty name"));
            }
            if !seen.insert(ks.name.as_str()) {
                return Err(anyhow::anyhow!(format!(
                    "duplicate keyspace: {}",
                    ks.name
                )));
            }
        }
        Ok(())
    }

    pub fn build_snapshot(&self, version: u64) -> anyhow::Result<SchemaSnapshot> {
        let mut snapshot = SchemaSnapshot::new(version);
        for ks in &self.keyspaces {
            snapshot.add_keyspace(KeyspaceDef {
                name: ks.name.clone(),
                sharded: ks.sharded,
                tables: ks.tables.iter().cloned().collect(),
            })?;
        }
        Ok(snapshot)
    }
}
