use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally::{parse, tokenize, Scanner};

fn long_expression() -> String {
    let mut source = String::from("1");
    for i in 0..1_000 {
        source.push_str(if i % 2 == 0 { " + " } else { " - " });
        source.push_str(&(i * 7).to_string());
    }
    source
}

fn lexer_benchmark(c: &mut Criterion) {
    let source = long_expression();

    c.bench_function("tokenize 1000 terms", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(&source));
            scanner.scan_tokens().unwrap()
        })
    });
}

fn evaluation_benchmark(c: &mut Criterion) {
    let tokens = tokenize(&long_expression()).unwrap();

    c.bench_function("parse and evaluate 1000 terms", |b| {
        b.iter(|| parse(black_box(&tokens)).unwrap().value().unwrap())
    });
}

criterion_group!(benches, lexer_benchmark, evaluation_benchmark);
criterion_main!(benches);
