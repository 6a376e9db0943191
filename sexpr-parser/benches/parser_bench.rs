use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sexpr_core::Arena;
use sexpr_parser::{parse, parse_all};

const SIMPLE_EXPR: &str = "(+ 1 2)";
const NESTED_EXPR: &str = "(255 (foo) (bar baz 123 412) lambda alpha)";
const MIXED_ATOMS: &str = r#"[#t #f 0x1F -0b101 "a string" "" symbol-name 9223372036854775807]"#;
const PROGRAM: &str = r#"
(define (quicksort lst)
  (if (empty? lst)
      ()
      (let ((pivot (head lst))
            (rest (tail lst)))
        (append (quicksort (filter (lambda (x) (< x pivot)) rest))
                (cons pivot (quicksort (filter (lambda (x) (>= x pivot)) rest)))))))
(quicksort [3 1 4 1 5 9 2 6 5 3 5])
"#;

fn parser_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    for (name, source) in [
        ("simple_expr", SIMPLE_EXPR),
        ("nested_expr", NESTED_EXPR),
        ("mixed_atoms", MIXED_ATOMS),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            let mut arena = Arena::new();
            b.iter(|| {
                let _ = black_box(parse(black_box(source), &arena).is_ok());
                arena.reset();
            });
        });
    }

    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));
    group.bench_function("program", |b| {
        let mut arena = Arena::new();
        b.iter(|| {
            let _ = black_box(parse_all(black_box(PROGRAM), &arena).is_ok());
            arena.reset();
        });
    });

    group.finish();
}

fn scaling_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [10, 100, 1000, 10_000] {
        let source = format!("({})", "(item 42 \"text\") ".repeat(size));
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("flat_list", size), &source, |b, source| {
            let mut arena = Arena::with_capacity(source.len() * 8);
            b.iter(|| {
                let _ = black_box(parse(black_box(source), &arena).is_ok());
                arena.reset();
            });
        });
    }

    for depth in [10, 100, 500] {
        let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        group.bench_with_input(BenchmarkId::new("nesting", depth), &source, |b, source| {
            let mut arena = Arena::new();
            b.iter(|| {
                let _ = black_box(parse(black_box(source), &arena).is_ok());
                arena.reset();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, parser_benchmarks, scaling_benchmarks);
criterion_main!(benches);
