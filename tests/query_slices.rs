use fleetlog::{
    actor::Actor,
    core::store::FleetStore,
    query::{visible_slice, RecordFilter, PAGE_SIZE},
    types::Role,
    vehicle::VehicleFields,
};

fn fields(registration: &str, brand: &str) -> VehicleFields {
    VehicleFields {
        brand: brand.to_string(),
        model: "Uno".to_string(),
        year: 2020,
        color: "red".to_string(),
        registration: registration.to_string(),
    }
}

fn filter(search: &str, owner: &str) -> RecordFilter {
    RecordFilter {
        search: search.to_string(),
        owner: owner.to_string(),
    }
}

/// 10 records, 3 owned by the operator Tiago, the rest by the admin.
fn mixed_store() -> FleetStore {
    let admin = Actor::new("Felipe", Role::Admin);
    let operator = Actor::new("Tiago", Role::Operator);
    let mut store = FleetStore::new();
    for i in 0..10u32 {
        let owner = if i % 3 == 0 { &operator } else { &admin };
        store
            .create(owner, fields(&format!("REG-{i:04}"), "Fiat"))
            .unwrap();
    }
    store
}

#[test]
fn operator_sees_only_owned_records_and_ignores_filters() {
    let store = mixed_store();
    let operator = Actor::new("Tiago", Role::Operator);

    for search in ["", "Fiat", "no-such-term"] {
        let slice = visible_slice(&operator, &store.records(), &filter(search, "Felipe"), 1);
        assert_eq!(slice.items.len(), 4);
        assert!(slice.items.iter().all(|r| r.owner == "Tiago"));
    }
}

#[test]
fn operator_with_three_of_ten_sees_three() {
    let admin = Actor::new("Felipe", Role::Admin);
    let operator = Actor::new("Tiago", Role::Operator);
    let mut store = FleetStore::new();
    for i in 0..3u32 {
        store.create(&operator, fields(&format!("T-{i}"), "Fiat")).unwrap();
    }
    for i in 0..7u32 {
        store.create(&admin, fields(&format!("F-{i}"), "Ford")).unwrap();
    }

    let slice = visible_slice(&operator, &store.records(), &filter("Ford", ""), 1);
    assert_eq!(slice.items.len(), 3);
}

#[test]
fn consultant_always_sees_nothing() {
    let store = mixed_store();
    let consultant = Actor::new("Pedro", Role::Consultant);

    for (search, owner) in [("", ""), ("Fiat", ""), ("", "Tiago")] {
        let slice = visible_slice(&consultant, &store.records(), &filter(search, owner), 1);
        assert!(slice.items.is_empty());
        assert_eq!(slice.total_pages, 1);
    }
}

#[test]
fn admin_search_is_case_insensitive_across_fields() {
    let store = mixed_store();
    let admin = Actor::new("Felipe", Role::Admin);

    let by_brand = visible_slice(&admin, &store.records(), &filter("fIaT", ""), 1);
    assert_eq!(by_brand.total_pages, 2);

    let by_registration = visible_slice(&admin, &store.records(), &filter("reg-0004", ""), 1);
    assert_eq!(by_registration.items.len(), 1);

    let none = visible_slice(&admin, &store.records(), &filter("zzz", ""), 1);
    assert!(none.items.is_empty());
    assert_eq!(none.total_pages, 1);
}

#[test]
fn admin_owner_filter_is_exact() {
    let store = mixed_store();
    let admin = Actor::new("Felipe", Role::Admin);

    let tiagos = visible_slice(&admin, &store.records(), &filter("", "Tiago"), 1);
    assert_eq!(tiagos.items.len(), 4);

    let everyone = visible_slice(&admin, &store.records(), &filter("", ""), 1);
    assert_eq!(everyone.total_pages, 2);
}

#[test]
fn pagination_splits_twelve_records_into_three_pages() {
    let admin = Actor::new("Felipe", Role::Admin);
    let mut store = FleetStore::new();
    for i in 0..12u32 {
        store.create(&admin, fields(&format!("REG-{i:04}"), "Fiat")).unwrap();
    }
    let records = store.records();
    let empty = filter("", "");

    let p1 = visible_slice(&admin, &records, &empty, 1);
    assert_eq!(p1.total_pages, 3);
    assert_eq!(p1.items.len(), PAGE_SIZE);
    assert_eq!(p1.items[0].registration, "REG-0000");
    assert_eq!(p1.items[4].registration, "REG-0004");

    let p3 = visible_slice(&admin, &records, &empty, 3);
    assert_eq!(p3.items.len(), 2);
    assert_eq!(p3.items[0].registration, "REG-0010");
    assert_eq!(p3.items[1].registration, "REG-0011");

    // Out-of-range requests are clamped to the nearest valid page.
    let past_end = visible_slice(&admin, &records, &empty, 4);
    assert_eq!(past_end.page, 3);
    assert_eq!(past_end.items, p3.items);
    let before_start = visible_slice(&admin, &records, &empty, 0);
    assert_eq!(before_start.page, 1);
}
