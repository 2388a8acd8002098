use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cyclic_fec::ecc::llr::bits_to_llr;
use cyclic_fec::ecc::{create_bch_15_7_2, create_bch_63_45_3, BchCoder, BlockCode};
use cyclic_fec::{DecodeOptions, FieldContext, Received};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::sync::Arc;

fn random_bits(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0..2)).collect()
}

fn codes() -> Vec<(&'static str, BchCoder)> {
    vec![
        ("bch_15_7_2", create_bch_15_7_2().unwrap()),
        ("bch_63_45_3", create_bch_63_45_3().unwrap()),
        (
            "bch_255_215_5",
            BchCoder::new(255, 215, 5, Arc::new(FieldContext::new(8).unwrap())).unwrap(),
        ),
    ]
}

fn bench_field_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_tables");
    for m in [4u32, 8, 12, 16] {
        group.bench_with_input(BenchmarkId::new("build", m), &m, |b, &m| {
            b.iter(|| black_box(FieldContext::new(m).unwrap()));
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bch_encode");
    let mut rng = StdRng::seed_from_u64(7);

    for (name, code) in codes() {
        let message = random_bits(&mut rng, code.data_length());
        group.bench_function(name, |b| {
            b.iter(|| black_box(code.encode(black_box(&message)).unwrap()));
        });
    }
    group.finish();
}

fn bench_hard_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bch_hard_decode");
    let mut rng = StdRng::seed_from_u64(11);

    for (name, code) in codes() {
        let message = random_bits(&mut rng, code.data_length());
        let mut received = code.encode(&message).unwrap();
        for i in 0..code.error_correction_capability() {
            received[i * 3] ^= 1;
        }

        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(
                    code.decode(Received::Bits(black_box(&received)), &DecodeOptions::hard())
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

fn bench_chase_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bch_chase_decode");
    let code = create_bch_63_45_3().unwrap();
    let mut rng = StdRng::seed_from_u64(13);

    let message = random_bits(&mut rng, code.data_length());
    let codeword = code.encode(&message).unwrap();
    let mut llrs: Vec<f64> = bits_to_llr(&codeword, 1.0)
        .into_iter()
        .map(|l| l * rng.gen_range(0.5..3.0))
        .collect();
    for i in [2usize, 17, 30, 44] {
        llrs[i] = -llrs[i] * 0.1;
    }

    for p in [2usize, 4, 6, 8] {
        let options = DecodeOptions::soft(p);
        group.bench_with_input(BenchmarkId::new("test_positions", p), &options, |b, options| {
            b.iter(|| {
                black_box(
                    code.decode(Received::Llr(black_box(&llrs)), options)
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_field_tables,
    bench_encode,
    bench_hard_decode,
    bench_chase_decode
);
criterion_main!(benches);
