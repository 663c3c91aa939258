use shardgate_core::ShardgateError;

/// Handling class of a show subject: answered locally, dispatched to a
/// keyspace, or dispatched to a keyspace with the named table validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowKind {
    LocalRows,
    KeyspaceScoped,
    KeyspaceScopedTable,
}

impl ShowKind {
    pub fn needs_keyspace(self) -> bool {
        !matches!(self, ShowKind::LocalRows)
    }

    pub fn needs_table_validation(self) -> bool {
        matches!(self, ShowKind::KeyspaceScopedTable)
    }
}

const SUBJECTS: &[(&str, ShowKind)] = &[
    ("charset", ShowKind::LocalRows),
    ("databases", ShowKind::LocalRows),
    ("table status", ShowKind::KeyspaceScoped),
    ("columns", ShowKind::KeyspaceScopedTable),
    ("full columns", ShowKind::KeyspaceScopedTable),
    ("function status", ShowKind::KeyspaceScoped),
    ("procedure status", ShowKind::KeyspaceScoped),
    ("privileges", ShowKind::KeyspaceScoped),
    ("variables", ShowKind::KeyspaceScoped),
];

/// Maps subject text to its kind, case-insensitively. Unknown subjects are
/// rejected; this router does not guess.
pub fn classify(subject: &str) -> Result<ShowKind, ShardgateError> {
    let canonical = subject
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    SUBJECTS
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, kind)| *kind)
        .ok_or_else(|| ShardgateError::UnsupportedStatement(canonical))
}
