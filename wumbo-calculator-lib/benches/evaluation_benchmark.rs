use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wumbo_calculator::evaluator::evaluate;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let expressions = [
        "2+3*4".to_string(),
        "(2+3)*4/(1+1)".to_string(),
        "2^3^2 - 8*(4-2)".to_string(),
        "1.5*(2.25+3.75)^2/(0.5+0.25)".to_string(),
        "((1+2)*(3+4)-(5+6))/(7+8)^2".to_string(),
    ];
    for expression in expressions {
        group.throughput(Throughput::Elements(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
