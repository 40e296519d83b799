// benches/roundtrip.rs
//! Round-trip (encrypt → decrypt) benchmarks across payload sizes.
//! Key stretching dominates small payloads; throughput only matters past ~1 MiB.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use passlock::{Crypter, CrypterConfig, DataEncoding};
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_roundtrip(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime builds");
    let crypter = Crypter::new(
        CrypterConfig::default().with_data_encoding(DataEncoding::Binary),
    )
    .expect("default config is valid");

    let mut group = c.benchmark_group("roundtrip");
    let sizes = [KB, 64 * KB, MB, 10 * MB];

    for &size in &sizes {
        let input = vec![0x41u8; size]; // repeating 'A'

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("size", format_size(size)),
            &size,
            |b, _| {
                b.iter(|| {
                    rt.block_on(async {
                        let container = crypter
                            .encrypt_data(black_box(&input), "benchmark-password")
                            .await
                            .unwrap()
                            .into_bytes();

                        let recovered = crypter
                            .decrypt_data(black_box(&container), "benchmark-password")
                            .await
                            .unwrap()
                            .into_plaintext()
                            .unwrap();

                        black_box(recovered);
                    });
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
