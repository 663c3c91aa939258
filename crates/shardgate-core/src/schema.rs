use crate::types::Keyspace;

/// Read-only view over the schema registry, scoped to one consistent
/// snapshot. The planner reads keyspace existence and table membership
/// through this seam and never mutates either.
pub trait SchemaReader {
    /// Look up a keyspace by name.
    fn keyspace(&self, name: &str) -> Option<Keyspace>;

    /// Whether `table` exists inside `keyspace`. Unknown keyspaces report
    /// no tables.
    fn table_exists(&self, keyspace: &str, table: &str) -> bool;
}
