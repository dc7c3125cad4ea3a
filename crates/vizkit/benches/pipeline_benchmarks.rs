//! Full pipeline performance benchmarks.
//!
//! Measures end-to-end view rendering: parsing, standardization, transforms,
//! chart building, and insights.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vizkit::{Dashboard, DashboardConfig, ViewOptions, guess_roles};

/// Generate a realistic sales-like CSV.
fn generate_sales_data(rows: usize) -> String {
    let mut data = String::new();
    data.push_str("order_date,amount,region,store_name\n");

    let regions = ["North", "South", "East", "West", "Central"];
    for row in 0..rows {
        // order_date (mix of full dates and plain years)
        if row % 10 == 0 {
            data.push_str(&format!("{},", 2018 + (row % 6)));
        } else {
            data.push_str(&format!(
                "20{:02}-{:02}-{:02},",
                18 + (row % 6),
                (row % 12) + 1,
                (row % 28) + 1
            ));
        }
        // amount (with occasional junk and outliers)
        match row % 37 {
            0 => data.push_str("n/a,"),
            1 => data.push_str("999999,"),
            _ => data.push_str(&format!("{:.2},", 10.0 + (row % 500) as f64 * 0.75)),
        }
        // region
        data.push_str(regions[row % regions.len()]);
        data.push(',');
        // store_name
        data.push_str(&format!("Store {:03}\n", row % 40));
    }

    data
}

fn bench_full_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_render");

    for rows in [100, 1_000, 10_000] {
        let data = generate_sales_data(rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| {
                let mut dashboard = Dashboard::new();
                let table = dashboard.load_bytes(data.as_bytes()).unwrap();
                let roles = guess_roles(&table.headers);
                black_box(dashboard.render(&table, &roles).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_render_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_only");

    let data = generate_sales_data(10_000);
    let mut dashboard = Dashboard::with_config(DashboardConfig {
        options: ViewOptions {
            trim_outliers: true,
            ..ViewOptions::default()
        },
        ..DashboardConfig::default()
    });
    let table = dashboard.load_bytes(data.as_bytes()).unwrap();
    let roles = guess_roles(&table.headers);

    group.bench_function("trimmed_10k", |b| {
        b.iter(|| black_box(dashboard.render(&table, &roles).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_full_render, bench_render_only);
criterion_main!(benches);
