#![cfg(feature = "rusqlite")]

use std::fs;
use std::sync::Arc;

use sqlsteps::prelude::*;
use sqlsteps::{ExecutionResult, run_step};

const QUERIES: &str = r#"
# users
createUsers = CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, active INTEGER, score REAL, visits INTEGER)
addUser = INSERT INTO users (name, active, score, visits) VALUES (?, ?, ?, ?)
findUser = SELECT id, name FROM users WHERE name = ? AND active = ?
findUser.mysql = SELECT `id`, `name` FROM `users` WHERE `name` = ? AND `active` = ?
countUsers = SELECT COUNT(*) AS n FROM users
purgeUsers = DELETE FROM users
findNullScores = SELECT name \
    FROM users \
    WHERE score IS NULL
"#;

fn setup() -> (rusqlite::Connection, Arc<QueryCatalog>) {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let catalog = QueryCatalog::from_properties_str(QUERIES).unwrap();
    (conn, Arc::new(catalog))
}

#[test]
fn staged_insert_then_query() {
    let (conn, catalog) = setup();
    let mut engine = ExecutionEngine::new(&conn, catalog, "sqlite");

    engine.execute_named_update("createUsers").unwrap();

    engine.fetch_named_query("addUser").unwrap();
    engine.add_string(Some("alice")).unwrap();
    engine.add_boolean(Some(true)).unwrap();
    engine.add_double(Some(9.5)).unwrap();
    engine.add_long(Some(3)).unwrap();
    assert_eq!(engine.execute_update().unwrap(), 1);

    engine.fetch_named_query("findUser").unwrap();
    engine.add_string(Some("alice")).unwrap();
    engine.add_boolean(Some(true)).unwrap();
    assert_eq!(engine.execute_query().unwrap(), 1);

    let rows = engine.results().query_result().unwrap();
    assert_eq!(rows.columns(), ["id", "name"]);
    assert_eq!(rows.value(0, "name"), Some(&Value::from("alice")));
}

#[test]
fn parameters_bind_in_call_order() {
    let (conn, catalog) = setup();
    let mut engine = ExecutionEngine::new(&conn, catalog, "sqlite");
    engine.execute_named_update("createUsers").unwrap();

    engine.prepare("INSERT INTO users (visits, name) VALUES (?, ?)").unwrap();
    engine.add_integer(Some(5)).unwrap();
    engine.add_string(Some("bob")).unwrap();
    engine.execute_update().unwrap();

    let (visits, name): (i64, String) = conn
        .query_row("SELECT visits, name FROM users", [], |r| Ok((r.get(0)?, r.get(1)?)))
        .unwrap();
    assert_eq!((visits, name.as_str()), (5, "bob"));
}

#[test]
fn typed_nulls_reach_the_database() {
    let (conn, catalog) = setup();
    let mut engine = ExecutionEngine::new(&conn, catalog, "sqlite");
    engine.execute_named_update("createUsers").unwrap();

    engine.fetch_named_query("addUser").unwrap();
    engine.add_string(Some("carol")).unwrap();
    engine.add_boolean(None).unwrap();
    engine.add_double(None).unwrap();
    engine.add_parameter(Param::null(ParamKind::Long)).unwrap();
    engine.execute_update().unwrap();

    assert_eq!(engine.execute_named_query("findNullScores").unwrap(), 1);
    let rows = engine.results().query_result().unwrap();
    assert_eq!(rows.value(0, "NAME"), Some(&Value::from("carol")));
}

#[test]
fn dialect_specific_sql_is_preferred() {
    let (_, catalog) = setup();
    assert!(catalog.resolve("findUser", "mysql").unwrap().contains('`'));
    assert!(!catalog.resolve("findUser", "postgres").unwrap().contains('`'));

    let err = catalog.resolve("missingQuery", "mysql").unwrap_err();
    assert!(matches!(err, StepError::QueryNotFound(_)));
    assert!(err.to_string().contains("missingQuery"));
}

#[test]
fn driver_failure_closes_and_surfaces() {
    let (conn, catalog) = setup();
    let mut engine = ExecutionEngine::new(&conn, catalog, "sqlite");

    // no table yet
    let err = engine.fetch_named_query("countUsers").unwrap_err();
    assert!(matches!(err, StepError::ExecutionFailed { .. }));
    assert!(!engine.binder().is_prepared());

    engine.execute_named_update("createUsers").unwrap();
    engine.prepare("INSERT INTO users (id) VALUES (?)").unwrap();
    engine.add_integer(Some(1)).unwrap();
    engine.execute_update().unwrap();

    engine.prepare("INSERT INTO users (id) VALUES (?)").unwrap();
    engine.add_integer(Some(1)).unwrap();
    let err = engine.execute_update().unwrap_err();
    assert!(matches!(err, StepError::ExecutionFailed { .. }));
    assert!(matches!(
        engine.binder_mut().get_statement(),
        Err(StepError::NoStatementPrepared)
    ));

    // the engine is usable again
    engine.execute_named_query("countUsers").unwrap();
    assert_eq!(
        engine.results().query_result().unwrap().value(0, "n"),
        Some(&Value::Integer(1))
    );
}

#[test]
fn binding_past_the_last_placeholder_fails() {
    let (conn, catalog) = setup();
    let mut engine = ExecutionEngine::new(&conn, catalog, "sqlite");
    engine.execute_named_update("createUsers").unwrap();

    engine.fetch_named_query("findUser").unwrap();
    engine.add_string(Some("a")).unwrap();
    engine.add_boolean(Some(false)).unwrap();
    let err = engine.add_integer(Some(1)).unwrap_err();

    assert!(matches!(err, StepError::ExecutionFailed { .. }));
    assert!(!engine.binder().is_prepared());
}

#[test]
fn unbound_placeholders_fail_execution() {
    let (conn, catalog) = setup();
    let mut engine = ExecutionEngine::new(&conn, catalog, "sqlite");
    engine.execute_named_update("createUsers").unwrap();

    engine.prepare("INSERT INTO users (name, visits) VALUES (?, ?)").unwrap();
    engine.add_string(Some("x")).unwrap();
    let err = engine.execute_update().unwrap_err();

    assert!(matches!(err, StepError::ExecutionFailed { .. }));
    assert!(!engine.binder().is_prepared());
    assert!(engine.results().latest().is_none());

    engine.execute_named_query("countUsers").unwrap();
    let rows = engine.results().query_result().unwrap();
    assert_eq!(rows.value(0, "n"), Some(&Value::Integer(0)));
}

#[test]
fn failed_prepare_clears_the_last_result() {
    let (conn, catalog) = setup();
    let mut engine = ExecutionEngine::new(&conn, catalog, "sqlite");
    engine.execute_named_update("createUsers").unwrap();
    engine.execute_named_query("countUsers").unwrap();
    assert!(engine.results().latest().is_some());

    let err = engine.execute_query_sql("SELEC nothing").unwrap_err();
    assert!(matches!(err, StepError::ExecutionFailed { .. }));
    assert!(engine.results().latest().is_none());
}

#[test]
fn update_counts_are_recorded() {
    let (conn, catalog) = setup();
    let mut engine = ExecutionEngine::new(&conn, catalog, "sqlite");
    engine.execute_named_update("createUsers").unwrap();
    conn.execute_batch("INSERT INTO users (name) VALUES ('a'), ('b'), ('c')")
        .unwrap();

    assert_eq!(engine.execute_named_update("purgeUsers").unwrap(), 3);
    assert_eq!(
        engine.results().latest(),
        Some(&ExecutionResult::UpdateCount(3))
    );
}

#[test]
fn directives_drive_a_scenario() {
    let (conn, catalog) = setup();
    let mut engine = ExecutionEngine::new(&conn, catalog, Dialect::MySQL);
    let registry = named_sql_steps().unwrap();

    let scenario = [
        r#"ExecuteNamedUpdate "createUsers""#,
        r#"FetchNamedQuery "addUser""#,
        r#"AddStringParameter value="dave""#,
        "AddBooleanParameter value=true",
        "AddDoubleParameter value=1,250.75",
        "AddLongParameter value=2,000",
        "ExecuteUpdate",
        r#"ExecuteNamedQuery "countUsers""#,
    ];
    for line in scenario {
        run_step(&registry, &mut engine, line).unwrap();
    }

    let (score, visits): (f64, i64) = conn
        .query_row("SELECT score, visits FROM users WHERE name = 'dave'", [], |r| {
            Ok((r.get(0)?, r.get(1)?))
        })
        .unwrap();
    assert_eq!(score, 1250.75);
    assert_eq!(visits, 2000);
    assert_eq!(
        engine.results().query_result().unwrap().value(0, "n"),
        Some(&Value::Integer(1))
    );
}

#[test]
fn catalog_files_load_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let props = dir.path().join("queries.properties");
    fs::write(&props, QUERIES).unwrap();
    let catalog = QueryCatalog::load(Some(props.as_path())).unwrap();
    assert!(catalog.resolve("findNullScores", "h2").unwrap().contains("WHERE score IS NULL"));

    let toml = dir.path().join("queries.toml");
    fs::write(
        &toml,
        "countUsers = \"SELECT 1\"\n[findUser]\nmysql = \"SELECT 2\"\n",
    )
    .unwrap();
    let catalog = QueryCatalog::load(Some(toml.as_path())).unwrap();
    assert_eq!(catalog.resolve("findUser", "mysql").unwrap(), "SELECT 2");
    assert_eq!(catalog.get("countUsers"), Some("SELECT 1"));

    let missing = dir.path().join("nope.properties");
    assert!(QueryCatalog::load(Some(missing.as_path())).unwrap().is_empty());

    fs::write(&toml, "broken = [").unwrap();
    assert!(matches!(
        QueryCatalog::load(Some(toml.as_path())),
        Err(StepError::ResourceLoadFailed { .. })
    ));
}
