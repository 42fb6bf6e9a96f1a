use criterion::{black_box, criterion_group, criterion_main, Criterion};
use compliance_access::permission::modules;
use compliance_access::{create_access_control, Principal, Role};

fn query_benchmarks(c: &mut Criterion) {
    let manager = Principal::with_role("bench", Role::Manager);
    let target = Principal::with_role("other", Role::Worker);

    c.bench_function("has_permission", |b| {
        let access = create_access_control(Some(&manager));
        b.iter(|| access.has_permission(black_box("caps:create")))
    });

    c.bench_function("accessible_modules", |b| {
        let access = create_access_control(Some(&manager));
        b.iter(|| access.accessible_modules())
    });

    c.bench_function("visible_modules", |b| {
        let access = create_access_control(Some(&manager));
        b.iter(|| access.visible_modules(black_box(modules::ALL)))
    });

    c.bench_function("can_edit_user", |b| {
        let access = create_access_control(Some(&manager));
        b.iter(|| access.can_edit_user(Some(black_box(&target))))
    });
}

criterion_group!(benches, query_benchmarks);
criterion_main!(benches);
