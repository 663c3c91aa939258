#[cfg(test)]
mod tests {
    use crate::registry::{KeyspaceDef, SchemaRegistry, SchemaSnapshot};
    use crate::topology::TopologyConfig;
    use shardgate_core::schema::SchemaReader;
    use std::collections::BTreeSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn keyspace(name: &str, sharded: bool, tables: &[&str]) -> KeyspaceDef {
        KeyspaceDef {
            name: name.to_string(),
            sharded,
            tables: tables.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn snapshot_lookups() {
        let mut snapshot = SchemaSnapshot::new(1);
        snapshot
            .add_keyspace(keyspace("user", true, &["user", "user_extra"]))
            .expect("add");
        snapshot
            .add_keyspace(keyspace("main", false, &["unsharded"]))
            .expect("add");

        let user = snapshot.keyspace("user").expect("user keyspace");
        assert_eq!(user.name, "user");
        assert!(user.sharded);
        assert!(snapshot.keyspace("missing").is_none());

        assert!(snapshot.table_exists("user", "user_extra"));
        assert!(!snapshot.table_exists("user", "unsharded"));
        assert!(!snapshot.table_exists("missing", "unsharded"));
    }

    #[test]
    fn snapshot_rejects_duplicate_keyspace() {
        let mut snapshot = SchemaSnapshot::new(1);
        snapshot
            .add_keyspace(keyspace("user", true, &[]))
            .expect("add");
        let err = snapshot
            .add_keyspace(keyspace("user", false, &[]))
            .expect_err("duplicate");
        assert!(err.to_string().contains("already defined"));
    }

    #[test]
    fn registry_snapshot_survives_install() {
        let mut v1 = SchemaSnapshot::new(1);
        v1.add_keyspace(keyspace("user", true, &["user"])).expect("add");
        let registry = SchemaRegistry::new(v1);

        let held = registry.snapshot();
        assert_eq!(held.version(), 1);

        let mut v2 = SchemaSnapshot::new(2);
        v2.add_keyspace(keyspace("user", true, &["user", "user_extra"]))
            .expect("add");
        registry.install(v2);

        // The handle taken before the install still answers from v1.
        assert_eq!(held.version(), 1);
        assert!(!held.table_exists("user", "user_extra"));
        let fresh = registry.snapshot();
        assert_eq!(fresh.version(), 2);
        assert!(fresh.table_exists("user", "user_extra"));
    }

    #[test]
    fn topology_from_path_builds_snapshot() {
        let mut file = NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"
[[keyspaces]]
name = "main"
sharded = false
tables = ["unsharded"]

[[keyspaces]]
name = "user"
sharded = true
tables = ["user", "user_extra"]
"#
        )
        .expect("write");

        let config =
            TopologyConfig::from_path(file.path().to_str().expect("path")).expect("load");
        let snapshot = config.build_snapshot(1).expect("snapshot");
        assert!(snapshot.keyspace("main").is_some());
        assert!(snapshot.table_exists("user", "user_extra"));
        let main = snapshot.keyspace_def("main").expect("main def");
        assert_eq!(main.tables, BTreeSet::from(["unsharded".to_string()]));
    }

    #[test]
    fn topology_rejects_duplicate_keyspace() {
        let mut file = NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"
[[keyspaces]]
name = "main"
sharded = false

[[keyspaces]]
name = "main"
sharded = true
"#
        )
        .expect("write");

        let err = TopologyConfig::from_path(file.path().to_str().expect("path"))
            .expect_err("duplicate keyspace");
        assert!(err.to_string().contains("duplicate keyspace"));
    }
}
