use criterion::{criterion_group, criterion_main, Criterion};
use launchboard::dataset::{Dataset, Outcome, Record};
use launchboard::derive::{outcome_proportion, payload_correlation};
use launchboard::filter::{PayloadRange, SiteSelection};
use std::hint::black_box;

fn setup_dataset() -> Dataset {
    let sites = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
    let boosters = ["v1.0", "v1.1", "FT", "B4", "B5"];

    let records = (0..5_000)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            Record::new(
                sites[i % sites.len()],
                ((i * 37) % 10_000) as f64,
                outcome,
                boosters[i % boosters.len()],
            )
        })
        .collect();

    Dataset::from_records(records).expect("Failed to build dataset")
}

fn criterion_benchmark(c: &mut Criterion) {
    let ds = setup_dataset();
    let all = SiteSelection::All;
    let one = SiteSelection::site("KSC LC-39A");
    let range = PayloadRange::new(2_000.0, 8_000.0).unwrap();

    c.bench_function("outcome_proportion (ALL, 5k records)", |b| {
        b.iter(|| outcome_proportion(black_box(&ds), black_box(&all)))
    });
    c.bench_function("payload_correlation (site, 5k records)", |b| {
        b.iter(|| payload_correlation(black_box(&ds), black_box(&one), black_box(&range)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
