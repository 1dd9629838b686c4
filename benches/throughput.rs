use criterion::{criterion_group, criterion_main, Criterion};

use fleetlog::{
    actor::Actor,
    core::store::FleetStore,
    query::{visible_slice, RecordFilter},
    types::Role,
    vehicle::VehicleFields,
};

fn fields(i: u64) -> VehicleFields {
    VehicleFields {
        brand: "Fiat".to_string(),
        model: format!("M{i}"),
        year: 2020,
        color: "red".to_string(),
        registration: format!("REG-{i:06}"),
    }
}

fn bench_creates(c: &mut Criterion) {
    let admin = Actor::new("Felipe", Role::Admin);
    c.bench_function("store_create_10k", |b| {
        b.iter(|| {
            let mut store = FleetStore::new();
            for i in 0..10_000u64 {
                store.create(&admin, fields(i)).expect("create");
            }
        });
    });
}

fn bench_visible_slice(c: &mut Criterion) {
    let admin = Actor::new("Felipe", Role::Admin);
    let mut store = FleetStore::new();
    for i in 0..10_000u64 {
        store.create(&admin, fields(i)).expect("create");
    }
    let records = store.records();
    let filter = RecordFilter {
        search: "REG-0042".to_string(),
        owner: String::new(),
    };

    c.bench_function("visible_slice_search_10k", |b| {
        b.iter(|| visible_slice(&admin, &records, &filter, 1));
    });
}

criterion_group!(benches, bench_creates, bench_visible_slice);
criterion_main!(benches);
