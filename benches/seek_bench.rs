use criterion::{Criterion, criterion_group, criterion_main};
use patternseek::{AnyOf, MoveMode, Seeker};

fn records(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&format!("id={};name=user{};score=-{}\n", i, i, i % 97));
    }
    s
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("seek");
    let text = records(10_000);

    group.bench_function("records_walk", |b| {
        b.iter(|| {
            let mut s = Seeker::new(std::hint::black_box(&text));
            let mut total = 0i64;
            while s.seek_to("id=", MoveMode::After) {
                total += s.take_unsigned().unwrap_or(0) as i64;
                s.seek_to("score=", MoveMode::After);
                total += s.take_signed().unwrap_or(0);
            }
            std::hint::black_box(total);
        })
    });

    group.bench_function("until_any_of", |b| {
        b.iter(|| {
            let mut s = Seeker::new(std::hint::black_box(&text));
            let mut n = 0usize;
            while let Some(field) = s.extract_until_any_of(AnyOf(";\n"), MoveMode::After) {
                n += field.len();
            }
            std::hint::black_box(n);
        })
    });

    let mut nested = String::from("{");
    for i in 0..2_000 {
        nested.push_str(&format!("\"k{}\": {{\"v\": [{}, {{}}]}}, ", i, i));
    }
    nested.push('}');
    group.bench_function("balanced_large_object", |b| {
        b.iter(|| {
            let mut s = Seeker::new(std::hint::black_box(&nested));
            let obj = s.extract_balanced('{', '}', MoveMode::Keep);
            std::hint::black_box(obj.map(|o| o.len()));
        })
    });
    group.finish();
}

criterion_group!(benches, bench_primitives);
criterion_main!(benches);
