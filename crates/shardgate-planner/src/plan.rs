use crate::classify::classify;
use crate::descriptor::{parse_show, ShowStatement};
use crate::resolve::{resolve_keyspace, validate_table};
use crate::rewrite::rewrite;
use metrics::counter;
use shardgate_core::schema::SchemaReader;
use shardgate_core::types::{Plan, ShowResponse};
use shardgate_core::ShardgateError;
use tracing::debug;

/// Builds the execution plan for one show statement descriptor.
///
/// Locally-answerable kinds return `Plan::Rows` without touching the
/// registry at all. Keyspace-scoped kinds resolve their target, validate
/// the table when the kind is bound to one, and dispatch the rewritten
/// text to a single shard.
pub fn build_show_plan<R: SchemaReader>(
    stmt: &ShowStatement,
    reader: &R,
    default_keyspace: &str,
) -> Result<Plan, ShardgateError> {
    let kind = classify(&stmt.subject)?;
    if !kind.needs_keyspace() {
        return Ok(Plan::Rows);
    }

    let qualifier = stmt.table.as_ref().and_then(|t| t.qualifier.as_deref());
    let keyspace = resolve_keyspace(
        reader,
        stmt.db_clause.as_deref(),
        qualifier,
        default_keyspace,
    )?;

    if kind.needs_table_validation() {
        let table = stmt.table.as_ref().ok_or_else(|| {
            ShardgateError::Syntax(format!("show {} requires a table", stmt.subject))
        })?;
        validate_table(reader, &keyspace, &table.name)?;
    }

    let query = rewrite(stmt, kind);
    Ok(Plan::send(keyspace, query))
}

/// Plans one raw show statement and wraps the result in the response
/// envelope consumed by the execution engine.
pub fn plan_show<R: SchemaReader>(
    sql: &str,
    reader: &R,
    default_keyspace: &str,
) -> Result<ShowResponse, ShardgateError> {
    counter!("show_statements_planned_total").increment(1);
    let stmt = parse_show(sql)?;
    debug!(sql, subject = %stmt.subject, "planning show statement");
    let plan = build_show_plan(&stmt, reader, default_keyspace)?;
    Ok(ShowResponse::new(stmt.original, plan))
}
