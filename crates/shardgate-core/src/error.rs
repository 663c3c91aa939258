use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShardgateError {
    #[error("keyspace {0} not found in schema")]
    KeyspaceNotFound(String),
    #[error("table {0} not found")]
    TableNotFound(String),
    #[error("unsupported show statement: {0}")]
    UnsupportedStatement(String),
    #[error("syntax error: {0}")]
    Syntax(String),
    #[error("schema error: {0}")]
    Schema(String),
}
