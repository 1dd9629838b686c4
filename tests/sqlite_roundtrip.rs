use tempfile::TempDir;

use fleetlog::{
    actor::default_roster,
    persist::{sqlite::SqliteStateSink, StateSink},
    session::Session,
    vehicle::VehicleFields,
};

fn fields(registration: &str) -> VehicleFields {
    VehicleFields {
        brand: "Fiat".to_string(),
        model: "Uno".to_string(),
        year: 2020,
        color: "red".to_string(),
        registration: registration.to_string(),
    }
}

#[test]
fn sqlite_round_trips_records_with_history_and_comments() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("fleet.db");

    let before = {
        let sink = SqliteStateSink::open(&db_path).expect("open sqlite");
        let mut session = Session::new(sink, default_roster()).expect("session");

        let a = session.create_record(fields("AAA-0001")).expect("create a");
        session.create_record(fields("BBB-0002")).expect("create b");
        session.add_comment(a.id, "needs inspection").expect("comment");
        session
            .edit_record(a.id, VehicleFields {
                color: "blue".to_string(),
                ..fields("AAA-0001")
            })
            .expect("edit");
        session.store().records()
    };

    let sink = SqliteStateSink::open(&db_path).expect("reopen sqlite");
    let session = Session::new(sink, default_roster()).expect("restore");
    let after = session.store().records();

    // Element-wise equality, including full history and comments.
    assert_eq!(after, before);
    assert_eq!(after[0].comments.len(), 1);
    assert_eq!(after[0].history.len(), 3);
}

#[test]
fn absent_state_means_empty_store() {
    let tmp = TempDir::new().expect("tmp");
    let sink = SqliteStateSink::open(tmp.path().join("fresh.db")).expect("open sqlite");
    let session = Session::new(sink, default_roster()).expect("session");
    assert!(session.store().is_empty());
}

#[test]
fn new_ids_stay_monotonic_after_reload() {
    let sink = {
        let mut sink = SqliteStateSink::open_in_memory().expect("open sqlite");
        let records = {
            let mut session =
                Session::new(SqliteStateSink::open_in_memory().expect("open"), default_roster())
                    .expect("session");
            session.create_record(fields("AAA-0001")).expect("create");
            session.create_record(fields("BBB-0002")).expect("create");
            session.store().records()
        };
        sink.save_state(&serde_json::to_string(&records).expect("encode"))
            .expect("save");
        sink
    };

    let mut session = Session::new(sink, default_roster()).expect("restore");
    let rec = session.create_record(fields("CCC-0003")).expect("create");
    assert_eq!(rec.id, 3);
}
