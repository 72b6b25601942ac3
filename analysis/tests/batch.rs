use std::collections::HashMap;

use analysis::batch::{self, Batch, BatchError, FetchError, LogSource};
use analysis::{Pipeline, Rejection};
use futures::future::BoxFuture;
use futures::FutureExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use tracing_test::traced_test;

fn load_log() -> serde_json::Value {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../testfiles/log_valid.json");
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

struct MemorySource {
    logs: HashMap<String, serde_json::Value>,
}

impl LogSource for MemorySource {
    fn fetch<'f, 'own>(
        &'own self,
        log_id: String,
    ) -> BoxFuture<'f, Result<serde_json::Value, FetchError>>
    where
        'own: 'f,
    {
        async move {
            self.logs
                .get(&log_id)
                .cloned()
                .ok_or_else(|| FetchError::new(format!("no log {}", log_id)))
        }
        .boxed()
    }
}

/// Log ids 1..=6, where 2 and 5 are broken and 4 is missing from the source.
fn source() -> MemorySource {
    let mut logs = HashMap::new();

    for id in [1, 3, 6] {
        let mut log = load_log();
        log["info"]["date"] = json!(1700000000 + id * 86400);
        logs.insert(id.to_string(), log);
    }

    let mut old = load_log();
    old["version"] = json!(2);
    logs.insert("2".to_owned(), old);

    let mut pyro = load_log();
    pyro["players"]["[U:1:1001]"]["class_stats"][0]["type"] = json!("pyro");
    logs.insert("5".to_owned(), pyro);

    MemorySource { logs }
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|i| i.to_string()).collect()
}

#[test]
#[traced_test]
fn mixed_batch() {
    let source = source();
    let pipeline = Pipeline::default();

    let result = futures::executor::block_on(batch::run(
        &pipeline,
        &source,
        &ids(&["1", "2", "3", "4", "5", "6"]),
    ))
    .unwrap();

    assert_eq!(3, result.accepted());
    assert_eq!(6, result.summary.attempted);
    assert_eq!(3, result.summary.rejected);
    assert_eq!(
        [
            ("fetch_failed".to_owned(), 1),
            ("unrecognized_role".to_owned(), 1),
            ("unsupported_version".to_owned(), 1),
        ]
        .into_iter()
        .collect::<std::collections::BTreeMap<_, _>>(),
        result.summary.reasons
    );

    let tables = &result.tables;
    assert_eq!(ids(&["1", "3", "6"]), tables.log_ids);
    assert_eq!(3, tables.len());
    assert_eq!(3, tables.players.len());
    assert_eq!(vec!["cp"; 3], tables.gamemodes);
    assert_eq!(vec!["cp_process_final"; 3], tables.maps);
    assert_eq!(
        vec![[2023, 11, 15], [2023, 11, 17], [2023, 11, 20]],
        tables.dates
    );
    assert_eq!(vec!["Wednesday", "Friday", "Monday"], tables.weekdays);
    assert_eq!(vec![[3u8, 2u8]; 3], tables.scores);
    assert!(tables.stats.iter().all(|row| row.len() == 67));

    assert!(logs_contain("Rejected log"));
    assert!(logs_contain("Finished batch"));
}

#[test]
fn order_is_preserved() {
    let source = source();
    let pipeline = Pipeline::default();

    let result =
        futures::executor::block_on(batch::run(&pipeline, &source, &ids(&["6", "2", "1", "3"])))
            .unwrap();

    assert_eq!(ids(&["6", "1", "3"]), result.tables.log_ids);
}

#[test]
fn duplicates_are_kept() {
    let source = source();
    let pipeline = Pipeline::default();

    let result =
        futures::executor::block_on(batch::run(&pipeline, &source, &ids(&["3", "3"]))).unwrap();

    assert_eq!(ids(&["3", "3"]), result.tables.log_ids);
}

#[test]
fn empty_input() {
    let source = source();
    let pipeline = Pipeline::default();

    let result = futures::executor::block_on(batch::run(&pipeline, &source, &[]));

    assert!(matches!(result, Err(BatchError::EmptyInput)));
    assert!(matches!(Batch::default().finish(), Err(BatchError::EmptyInput)));
}

#[test]
fn source_unavailable() {
    let source = MemorySource {
        logs: HashMap::new(),
    };
    let pipeline = Pipeline::default();

    let result = futures::executor::block_on(batch::run(&pipeline, &source, &ids(&["1", "2"])));

    assert!(matches!(
        result,
        Err(BatchError::SourceUnavailable { attempted: 2 })
    ));
}

#[test]
fn all_rejected_is_not_fatal() {
    let source = source();
    let pipeline = Pipeline::default();

    let result =
        futures::executor::block_on(batch::run(&pipeline, &source, &ids(&["2", "4", "5"])))
            .unwrap();

    assert_eq!(0, result.accepted());
    assert!(result.tables.is_empty());
    assert_eq!(3, result.summary.rejected);
}

#[test]
fn fold_by_hand() {
    let pipeline = Pipeline::default();
    let mut batch = Batch::default();

    batch.record("a", pipeline.extract(&load_log()));
    batch.record(
        "b",
        Err(Rejection::UnparsableMap {
            map: "badlands".to_owned(),
        }),
    );
    assert_eq!(2, batch.summary().attempted);

    let result = batch.finish().unwrap();
    assert_eq!(ids(&["a"]), result.tables.log_ids);
    assert_eq!(Some(&1), result.summary.reasons.get("unparsable_map"));
}

#[test]
fn parallel_matches_sequential() {
    let source = source();
    let pipeline = Pipeline::default();
    let order = ids(&["5", "6", "1", "2", "3"]);

    let sequential =
        futures::executor::block_on(batch::run(&pipeline, &source, &order)).unwrap();

    let documents = order
        .iter()
        .map(|id| (id.clone(), source.logs.get(id).cloned().unwrap()))
        .collect();
    let parallel = batch::run_documents(&pipeline, documents).unwrap();

    assert_eq!(sequential, parallel);
    assert!(matches!(
        batch::run_documents(&pipeline, Vec::new()),
        Err(BatchError::EmptyInput)
    ));
}

#[test]
#[traced_test]
fn parallel_logs_every_record() {
    let source = source();
    let pipeline = Pipeline::default();

    let documents = ids(&["1", "5", "3"])
        .into_iter()
        .map(|id| {
            let document = source.logs.get(&id).cloned().unwrap();
            (id, document)
        })
        .collect();
    let result = batch::run_documents(&pipeline, documents).unwrap();

    assert_eq!(2, result.accepted());
    assert!(logs_contain("Log{id=5}"));
    assert!(logs_contain("[3/3]"));
    assert!(logs_contain("Rejected log"));
}

#[test]
fn summary_display() {
    let source = source();
    let pipeline = Pipeline::default();

    let result =
        futures::executor::block_on(batch::run(&pipeline, &source, &ids(&["1", "2"]))).unwrap();

    assert_eq!(
        "Used 1 of 2 logs (1 rejected)\n  unsupported_version: 1",
        result.summary.to_string()
    );
}
