//! Per-keystroke cost of the two hot paths: ranking suggestions over a
//! populated dictionary and tokenizing a realistic source blob.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use pawnpad::predict::{suggest, tokenizer, SymbolDictionary};

fn populated_dictionary(per_family: usize) -> SymbolDictionary {
    let mut dict = SymbolDictionary::new();
    for i in 0..per_family {
        dict.add(&format!("GetPlayerStat{i}"));
        dict.add(&format!("OnVehicleEvent{i}"));
    }
    dict
}

fn bench_suggestions(c: &mut Criterion) {
    let dict = populated_dictionary(1000);
    c.bench_function("suggest_2000_symbols", |b| {
        b.iter(|| suggest::suggestions(black_box(&dict), black_box("gps")))
    });
}

fn bench_tokenizer(c: &mut Criterion) {
    let source = "native SetPlayerPos(playerid, Float:x, Float:y, Float:z); // pos\n".repeat(500);
    c.bench_function("tokenize_500_lines", |b| {
        b.iter(|| tokenizer::collect_symbols(black_box(&source)))
    });
}

criterion_group!(benches, bench_suggestions, bench_tokenizer);
criterion_main!(benches);
