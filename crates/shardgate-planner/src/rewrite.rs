use crate::classify::ShowKind;
use crate::descriptor::ShowStatement;

/// Produces the canonical backend-bound statement text.
///
/// Grammar keywords come out lowercase; routing-only syntax (the
/// statement-level from/in database clause and the keyspace qualifier on
/// the table) is dropped; the table-introducing clause survives for
/// table-scoped kinds; condition text is appended verbatim after its
/// lowercased keyword. Rewriting canonical text yields the same text.
pub fn rewrite(stmt: &ShowStatement, kind: ShowKind) -> String {
    let mut out = String::from("show ");
    out.push_str(&stmt.subject);
    if kind.needs_table_validation() {
        if let Some(table) = &stmt.table {
            out.push_str(" from ");
            out.push_str(&table.name);
        }
    }
    if let Some(condition) = &stmt.condition {
        out.push(' ');
        out.push_str(condition.kind.as_keyword());
        out.push(' ');
        out.push_str(&condition.text);
    }
    out
}
