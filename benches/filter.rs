use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roster_filter::filter::{filter_persons, AdminCriteria, Criteria, UserCriteria};
use roster_filter::person::{Person, Tag};
use test_helpers::{admin, user};

const NAMES: &[&str] = &["Alice", "Bob", "Charlie", "Dave", "Erin"];
const ROLES: &[&str] = &["Manager", "Supervisor", "Auditor"];

// Alternates users and admins with rotating field values so each criteria
// selects a stable fraction of the roster.
fn build_roster(n: usize) -> Vec<Person> {
    (0..n)
        .map(|i| {
            let id = i as u64;
            let name = NAMES[i % NAMES.len()];
            if i % 2 == 0 {
                user(id, name, 20 + (i % 10) as u32)
            } else {
                admin(id, name, ROLES[i % ROLES.len()])
            }
        })
        .collect()
}

fn bench_filter_persons(c: &mut Criterion) {
    let roster = build_roster(10_000);

    let tag_only = Criteria::empty(Tag::User);
    let by_age = Criteria::User(UserCriteria {
        age: Some(25),
        ..UserCriteria::default()
    });
    let by_name_and_role = Criteria::Admin(AdminCriteria {
        name: Some("Bob".to_string()),
        role: Some("Manager".to_string()),
        ..AdminCriteria::default()
    });

    c.bench_function("filter_10k_tag_only", |b| {
        b.iter(|| filter_persons(black_box(&roster), Tag::User, black_box(&tag_only)))
    });

    c.bench_function("filter_10k_by_age", |b| {
        b.iter(|| filter_persons(black_box(&roster), Tag::User, black_box(&by_age)))
    });

    c.bench_function("filter_10k_multi_field", |b| {
        b.iter(|| filter_persons(black_box(&roster), Tag::Admin, black_box(&by_name_and_role)))
    });

    // Cross-tag criteria: worst case for rejection, result is always empty.
    c.bench_function("filter_10k_cross_tag", |b| {
        b.iter(|| filter_persons(black_box(&roster), Tag::Admin, black_box(&by_age)))
    });
}

criterion_group!(benches, bench_filter_persons);
criterion_main!(benches);
