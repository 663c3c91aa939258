use shardgate_core::ShardgateError;

/// Table reference as written, qualifier and all. The qualifier only acts
/// as a routing hint; it never survives into the rewritten statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub qualifier: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    Where,
    Like,
}

impl ConditionKind {
    pub fn as_keyword(self) -> &'static str {
        match self {
            ConditionKind::Where => "where",
            ConditionKind::Like => "like",
        }
    }
}

/// Trailing filter clause. `text` is the verbatim input substring after the
/// introducing keyword; literals and operators inside it are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub kind: ConditionKind,
    pub text: String,
}

/// Normalized descriptor of one show statement.
///
/// `subject` holds the canonical lowercase subject words ("table status",
/// "full columns", ...); classification decides what they mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowStatement {
    pub original: String,
    pub subject: String,
    pub table: Option<TableRef>,
    pub db_clause: Option<String>,
    pub condition: Option<Condition>,
}

struct Token<'a> {
    text: &'a str,
    /// Byte offset just past the token, used to slice condition text out of
    /// the original statement.
    end: usize,
}

/// Splits the statement into whitespace-separated tokens. A quoted run
/// (single, double, or backtick) is part of one token and is never matched
/// as a keyword; an unclosed quote runs to the end of input.
fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let len = input.len();
    let mut i = 0;
    while i < len {
        let c = match input[i..].chars().next() {
            Some(c) => c,
            None => break,
        };
        if c.is_whitespace() {
            i += c.len_utf8();
            continue;
        }
        let start = i;
        while i < len {
            let c = match input[i..].chars().next() {
                Some(c) => c,
                None => break,
            };
            if c.is_whitespace() {
                break;
            }
            i += c.len_utf8();
            if c == '\'' || c == '"' || c == '`' {
                while i < len {
                    let q = match input[i..].chars().next() {
                        Some(q) => q,
                        None => break,
                    };
                    i += q.len_utf8();
                    if q == c {
                        break;
                    }
                }
            }
        }
        tokens.push(Token {
            text: &input[start..i],
            end: i,
        });
    }
    tokens
}

fn is_routing_keyword(word: &str) -> bool {
    word.eq_ignore_ascii_case("from") || word.eq_ignore_ascii_case("in")
}

fn is_clause_keyword(word: &str) -> bool {
    is_routing_keyword(word)
        || word.eq_ignore_ascii_case("where")
        || word.eq_ignore_ascii_case("like")
}

fn unquote_ident(raw: &str) -> String {
    let inner = raw
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'));
    match inner {
        Some(inner) => inner.replace("``", "`"),
        None => raw.to_string(),
    }
}

/// Splits `ks.table` on the first dot outside backticks.
fn parse_table_ref(raw: &str) -> TableRef {
    let mut in_quote = false;
    for (i, c) in raw.char_indices() {
        match c {
            '`' => in_quote = !in_quote,
            '.' if !in_quote => {
                return TableRef {
                    qualifier: Some(unquote_ident(&raw[..i])),
                    name: unquote_ident(&raw[i + 1..]),
                };
            }
            _ => {}
        }
    }
    TableRef {
        qualifier: None,
        name: unquote_ident(raw),
    }
}

/// Parses one show statement into its descriptor.
///
/// Grammar: `SHOW subject-words [FROM|IN table] [FROM|IN db] [WHERE|LIKE rest]`,
/// where the table clause exists only for column listings. Anything outside
/// this shape is a syntax failure; general SQL is parsed upstream.
pub fn parse_show(sql: &str) -> Result<ShowStatement, ShardgateError> {
    let body = sql.trim();
    let body = match body.strip_suffix(';') {
        Some(stripped) => stripped.trim_end(),
        None => body,
    };
    let tokens = tokenize(body);
    let mut pos = 0;

    let head = tokens
        .get(pos)
        .ok_or_else(|| ShardgateError::Syntax("empty statement".into()))?;
    if !head.text.eq_ignore_ascii_case("show") {
        return Err(ShardgateError::Syntax(format!(
            "expected show, found {}",
            head.text
        )));
    }
    pos += 1;

    let mut subject_words = Vec::new();
    while let Some(tok) = tokens.get(pos) {
        if is_clause_keyword(tok.text) {
            break;
        }
        subject_words.push(tok.text.to_ascii_lowercase());
        pos += 1;
    }
    if subject_words.is_empty() {
        return Err(ShardgateError::Syntax("missing show subject".into()));
    }
    let subject = subject_words.join(" ");

    // For column listings the first from/in clause names the table; for
    // every other subject a from/in clause can only name a database.
    let mut table = None;
    if subject.ends_with("columns") {
        match tokens.get(pos) {
            Some(tok) if is_routing_keyword(tok.text) => {
                pos += 1;
                let tok = tokens.get(pos).ok_or_else(|| {
                    ShardgateError::Syntax("missing table in from clause".into())
                })?;
                if is_clause_keyword(tok.text) {
                    return Err(ShardgateError::Syntax(
                        "missing table in from clause".into(),
                    ));
                }
                table = Some(parse_table_ref(tok.text));
                pos += 1;
            }
            _ => {
                return Err(ShardgateError::Syntax(format!(
                    "show {} requires a from clause",
                    subject
                )));
            }
        }
    }

    let mut db_clause = None;
    if let Some(tok) = tokens.get(pos) {
        if is_routing_keyword(tok.text) {
            pos += 1;
            let tok = tokens.get(pos).ok_or_else(|| {
                ShardgateError::Syntax("missing database in from clause".into())
            })?;
            if is_clause_keyword(tok.text) {
                return Err(ShardgateError::Syntax(
                    "missing database in from clause".into(),
                ));
            }
            db_clause = Some(unquote_ident(tok.text));
            pos += 1;
        }
    }

    let mut condition = None;
    if let Some(tok) = tokens.get(pos) {
        let kind = if tok.text.eq_ignore_ascii_case("where") {
            Some(ConditionKind::Where)
        } else if tok.text.eq_ignore_ascii_case("like") {
            Some(ConditionKind::Like)
        } else {
            None
        };
        if let Some(kind) = kind {
            let rest = body[tok.end..].trim();
            if rest.is_empty() {
                return Err(ShardgateError::Syntax(format!(
                    "missing condition after {}",
                    kind.as_keyword()
                )));
            }
            condition = Some(Condition {
                kind,
                text: rest.to_string(),
            });
            pos = tokens.len();
        }
    }

    if pos < tokens.len() {
        return Err(ShardgateError::Syntax(format!(
            "unexpected token: {}",
            tokens[pos].text
        )));
    }

    Ok(ShowStatement {
        original: sql.to_string(),
        subject,
        table,
        db_clause,
        condition,
    })
}
