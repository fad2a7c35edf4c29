// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use farmflow::i18n::{Language, LocaleCatalog, Localization};
use farmflow::storage::MemoryStore;
use std::hint::black_box;
use std::sync::Arc;

fn localization_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("localization");

    group.bench_function("parse_embedded_catalogs", |b| {
        b.iter(|| black_box(LocaleCatalog::embedded().unwrap()));
    });

    let catalog = Arc::new(LocaleCatalog::embedded().unwrap());
    let keys = catalog.locale(Language::English).unwrap().leaf_paths();
    let mut l10n = Localization::new(Arc::clone(&catalog), MemoryStore::new());
    l10n.set_language(Language::Kannada);

    group.bench_function("tr_every_key", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(l10n.tr(black_box(key.as_str())));
            }
        });
    });

    group.bench_function("tr_missing_key", |b| {
        b.iter(|| black_box(l10n.tr(black_box("dashboard.no_such_entry"))));
    });

    group.finish();
}

criterion_group!(benches, localization_benchmark);
criterion_main!(benches);
