use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// One logical database unit in the proxy topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyspace {
    pub name: String,
    pub sharded: bool,
}

impl Serialize for Keyspace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Keyspace", 2)?;
        s.serialize_field("Name", &self.name)?;
        s.serialize_field("Sharded", &self.sharded)?;
        s.end()
    }
}

/// Routing marker for plans whose answer is shard-invariant: any single
/// shard of the resolved keyspace suffices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDestination {
    AnyShard,
}

impl fmt::Display for TargetDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetDestination::AnyShard => write!(f, "AnyShard()"),
        }
    }
}

impl Serialize for TargetDestination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Physical execution plan for one administrative statement.
///
/// `Rows` is answered entirely by the proxy; `Send` carries the rewritten
/// statement to exactly one shard of the named keyspace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "OperatorType")]
pub enum Plan {
    Rows,
    Send {
        #[serde(rename = "Keyspace")]
        keyspace: Keyspace,
        #[serde(rename = "TargetDestination")]
        target_destination: TargetDestination,
        #[serde(rename = "IsDML")]
        is_dml: bool,
        #[serde(rename = "Query")]
        query: String,
        #[serde(rename = "SingleShardOnly")]
        single_shard_only: bool,
    },
}

impl Plan {
    /// Single-shard dispatch of a rewritten statement. Administrative
    /// answers are identical on every shard, so fan-out is never needed.
    pub fn send(keyspace: Keyspace, query: String) -> Self {
        Plan::Send {
            keyspace,
            target_destination: TargetDestination::AnyShard,
            is_dml: false,
            query,
            single_shard_only: true,
        }
    }
}

/// Response envelope handed to the execution engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowResponse {
    #[serde(rename = "QueryType")]
    pub query_type: String,
    #[serde(rename = "Original")]
    pub original: String,
    #[serde(rename = "Instructions")]
    pub instructions: Plan,
}

impl ShowResponse {
    pub fn new(original: String, instructions: Plan) -> Self {
        Self {
            query_type: "SHOW".to_string(),
            original,
            instructions,
        }
    }
}
