use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tptp_language_server::validate_document;

/// Generate test content with specific validation scenarios
fn generate_validation_content(units: usize, scenario: &str) -> Vec<String> {
    let mut content = Vec::new();

    match scenario {
        "all_valid" => {
            for i in 0..units {
                content.push(format!("fof(axiom_{i}, axiom, p{i}(X) => q{i}(X))."));
            }
        }
        "multi_line" => {
            for i in 0..units {
                content.push(format!(
                    "fof(axiom_{i}, axiom,\n    ! [X] :\n    (p{i}(X)\n     => q{i}(X)))."
                ));
            }
        }
        "missing_periods" => {
            for i in 0..units {
                if i % 3 == 0 {
                    content.push(format!("fof(axiom_{i}, axiom, p{i}(X))")); // No terminator
                } else {
                    content.push(format!("fof(axiom_{i}, axiom, p{i}(X))."));
                }
            }
        }
        "unknown_roles" => {
            for i in 0..units {
                if i % 4 == 0 {
                    content.push(format!("fof(axiom_{i}, axoim, p{i}(X)).")); // Misspelled role
                } else {
                    content.push(format!("fof(axiom_{i}, axiom, p{i}(X))."));
                }
            }
        }
        "mixed_errors" => {
            for i in 0..units {
                match i % 10 {
                    0..=5 => content.push(format!("fof(axiom_{i}, axiom, p{i}(X)).")), // Valid
                    6 => content.push(format!("fof(axiom_{i}, axiom, p{i}(X))")), // Missing period
                    7 => content.push(format!("fof(axiom_{i}, guess, p{i}(X)).")), // Unknown role
                    8 => content.push(format!("fof(axiom_{i}, axiom, p{i}(X) &&& q).")), // Bad ops
                    9 => content.push(format!("% checkpoint {i}")), // Comment (always valid)
                    _ => unreachable!(),
                }
            }
        }
        "comment_heavy" => {
            for i in 0..units {
                content.push(format!("% annotation for unit {i}"));
                content.push(format!("fof(axiom_{i}, axiom,"));
                content.push(format!("    p{i}(X))."));
            }
        }
        _ => {
            for i in 0..units {
                content.push(format!("fof(axiom_{i}, axiom, p{i}(X))."));
            }
        }
    }

    content
}

/// Benchmark validation with different error densities
fn bench_validation_error_density(c: &mut Criterion) {
    let scenarios = vec![
        ("all_valid", "All units are valid"),
        ("multi_line", "Units span several physical lines"),
        ("missing_periods", "33% missing terminating periods"),
        ("unknown_roles", "25% misspelled roles"),
        ("mixed_errors", "30% various errors"),
        ("comment_heavy", "Comment line per unit"),
    ];

    let mut group = c.benchmark_group("validation_error_density");

    for (scenario, _description) in scenarios {
        let content_lines = generate_validation_content(2000, scenario);
        let content = content_lines.join("\n");

        group.throughput(Throughput::Elements(content_lines.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("scenario", scenario),
            &content,
            |b, content| {
                b.iter(|| {
                    let result = validate_document(black_box(content));
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark validation scalability with different file sizes
fn bench_validation_scalability(c: &mut Criterion) {
    let file_sizes = vec![100, 500, 1_000, 5_000, 10_000, 50_000];

    let mut group = c.benchmark_group("validation_scalability");

    for &size in &file_sizes {
        let content_lines = generate_validation_content(size, "mixed_errors");
        let content = content_lines.join("\n");
        let byte_size = content.len();

        group.throughput(Throughput::Bytes(byte_size as u64));
        group.bench_with_input(BenchmarkId::new("size", size), &content, |b, content| {
            b.iter(|| {
                let result = validate_document(black_box(content));
                black_box(result)
            })
        });
    }

    group.finish();
}

/// Benchmark memory usage patterns (indirectly through performance)
fn bench_memory_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_patterns");

    // Large document with many errors (high diagnostic pressure)
    let large_errors = generate_validation_content(20_000, "mixed_errors").join("\n");
    group.bench_function("large_with_errors", |b| {
        b.iter(|| {
            let result = validate_document(black_box(&large_errors));
            black_box(result)
        })
    });

    // Large document with no errors (should allocate few diagnostics)
    let large_clean = generate_validation_content(20_000, "all_valid").join("\n");
    group.bench_function("large_clean", |b| {
        b.iter(|| {
            let result = validate_document(black_box(&large_clean));
            black_box(result)
        })
    });

    // Many small validations (simulating frequent LSP change events)
    let small_content = generate_validation_content(100, "mixed_errors").join("\n");
    group.bench_function("frequent_small", |b| {
        b.iter(|| {
            for _ in 0..100 {
                let result = validate_document(black_box(&small_content));
                black_box(result);
            }
        })
    });

    group.finish();
}

criterion_group!(
    validation_benches,
    bench_validation_error_density,
    bench_validation_scalability,
    bench_memory_patterns
);

criterion_main!(validation_benches);
