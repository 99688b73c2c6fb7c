// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rombound::{BootPolicy, measure};

fn benchmark_boot_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("boot_verify");

    for len in [4 * 1024, 64 * 1024, 1024 * 1024].iter() {
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(format!("{} bytes image", len), len, |b, &len| {
            let image: Vec<u8> = (0..len).map(|i| (i * 7 + 3) as u8).collect();
            let policy = BootPolicy::new(measure(&image), "boot-cdi").expect("policy failed");

            b.iter(|| policy.verify(black_box(&image)).expect("verify failed"));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_boot_verify);
criterion_main!(benches);
