use criterion::{criterion_group, criterion_main, Criterion};
use dotmatrix::test::{build_game_boy, rom_with};

fn benchmark_cpu_clock(c: &mut Criterion) {
    // mixed ALU and memory workload ending in a backwards jump,
    // keeps the core busy without ever leaving the cartridge
    let data = rom_with(&[(
        0x0100,
        &[
            0x3e, 0x01, // LD A, 0x01
            0x06, 0x02, // LD B, 0x02
            0x80, // ADD A, B
            0x21, 0x00, 0xc0, // LD HL, 0xC000
            0x77, // LD [HL], A
            0x7e, // LD A, [HL]
            0x18, 0xf4, // JR -12
        ],
    )]);
    let mut gb = build_game_boy(&data);

    c.bench_function("cpu_cycles", |b| {
        b.iter(|| {
            gb.clocks_cycles(1_000_000);
        })
    });
}

criterion_group!(benches, benchmark_cpu_clock);
criterion_main!(benches);
