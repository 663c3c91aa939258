use criterion::{criterion_group, criterion_main, Criterion};
use shardgate_planner::{parse_show, plan_show};
use shardgate_schema::registry::{KeyspaceDef, SchemaSnapshot};

fn bench_snapshot() -> SchemaSnapshot {
    let mut snapshot = SchemaSnapshot::new(1);
    snapshot
        .add_keyspace(KeyspaceDef {
            name: "main".to_string(),
            sharded: false,
            tables: ["unsharded".to_string()].into(),
        })
        .expect("main");
    snapshot
        .add_keyspace(KeyspaceDef {
            name: "user".to_string(),
            sharded: true,
            tables: ["user".to_string(), "user_extra".to_string()].into(),
        })
        .expect("user");
    snapshot
}

fn show_parse_bench(c: &mut Criterion) {
    c.bench_function("show_parse", |b| {
        b.iter(|| {
            let _ = parse_show("show full columns from user.user_extra where Field = 'id'");
        })
    });
}

fn show_plan_bench(c: &mut Criterion) {
    let snapshot = bench_snapshot();
    c.bench_function("show_plan", |b| {
        b.iter(|| {
            let _ = plan_show(
                "show full columns from user.user_extra where Field = 'id'",
                &snapshot,
                "main",
            )
            .expect("plan");
        })
    });
}

criterion_group!(plan_benches, show_parse_bench, show_plan_bench);
criterion_main!(plan_benches);
