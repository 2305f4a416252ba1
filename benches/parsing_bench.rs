use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rdialcode::PHONE_NUMBER_UTIL;

use phonenumber::{self as rlp, Mode};

/// Inputs in international form, so both libraries can parse them without a
/// default region.
fn setup_parsing_data() -> Vec<&'static str> {
    vec![
        "+1 (650) 253-0000",
        "+1 242 555 1234",
        "+44 20 8765 4321",
        "+33 6 12 34 56 78",
        "+49 30 1234 5678",
        "+81 3-1234-5678",
        "+61 4 1234 5678",
        "+971 50 123 4567",
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();

    // Both libraries agree on the canonical form of every input.
    for number_str in &numbers_to_parse {
        let ours = PHONE_NUMBER_UTIL.parse(number_str).unwrap().to_e164();
        let theirs = rlp::parse(None, number_str).unwrap();
        assert_eq!(ours, rlp::format(&theirs).mode(Mode::E164).to_string());
    }

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("rdialcode: parse()", |b| {
        b.iter(|| {
            for number_str in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.parse(black_box(number_str));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for number_str in &numbers_to_parse {
                let _ = rlp::parse(black_box(None), black_box(number_str));
            }
        })
    });

    group.bench_function("rdialcode: extract_bounded()", |b| {
        b.iter(|| {
            for number_str in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.extract_bounded(black_box("+1"), black_box(number_str));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
