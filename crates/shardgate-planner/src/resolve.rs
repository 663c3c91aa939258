use shardgate_core::schema::SchemaReader;
use shardgate_core::types::Keyspace;
use shardgate_core::ShardgateError;

/// Picks the target keyspace from the three identity sources, in strict
/// priority order: an explicit routing clause beats a table qualifier,
/// which beats the configured default. An explicit clause is the most
/// specific user intent and wins even when it contradicts the qualifier.
pub fn resolve_keyspace<R: SchemaReader>(
    reader: &R,
    explicit_db: Option<&str>,
    qualifier: Option<&str>,
    default_keyspace: &str,
) -> Result<Keyspace, ShardgateError> {
    let target = explicit_db.or(qualifier).unwrap_or(default_keyspace);
    reader
        .keyspace(target)
        .ok_or_else(|| ShardgateError::KeyspaceNotFound(target.to_string()))
}

/// Checks the bare table name against the finally resolved keyspace, never
/// against a qualifier that lost the priority race.
pub fn validate_table<R: SchemaReader>(
    reader: &R,
    keyspace: &Keyspace,
    table: &str,
) -> Result<(), ShardgateError> {
    if reader.table_exists(&keyspace.name, table) {
        Ok(())
    } else {
        Err(ShardgateError::TableNotFound(table.to_string()))
    }
}
