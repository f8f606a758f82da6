use ccg_balance::{
    audit, AuditConfig, BaseStats, CardCatalog, CardRecord, EffectKind, Rarity, TrainingBonus,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn synthetic_catalog(cards: usize, seed: u64) -> CardCatalog {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..cards)
        .map(|i| {
            let rarity = Rarity::ALL[rng.gen_range(0..Rarity::ALL.len())];
            let stats = BaseStats::new(
                rng.gen_range(0..80),
                rng.gen_range(0..80),
                rng.gen_range(0..80),
                rng.gen_range(0..40),
                rng.gen_range(0..40),
            );
            let mut record = CardRecord::new(rarity, stats)
                .with_training_bonus(TrainingBonus::new(
                    rng.gen_range(0.0..15.0),
                    rng.gen_range(0.0..5.0),
                    rng.gen_range(0.0..30.0),
                ))
                .with_appearance_rate(rng.gen_range(0.25..0.60))
                .with_type_match_preference(rng.gen_range(0.05..0.55))
                .with_initial_friendship(rng.gen_range(0..=60));
            if rng.gen_bool(0.5) {
                record = record.with_effect(EffectKind::StatGainMultiplier, rng.gen_range(1.15..1.25));
            }
            (format!("card-{i}"), record)
        })
        .collect()
}

fn bench_audit(c: &mut Criterion) {
    let config = AuditConfig::default();
    for size in [100, 1_000] {
        let catalog = synthetic_catalog(size, 42);
        c.bench_function(&format!("audit_{size}"), |b| {
            b.iter(|| audit(black_box(&catalog), black_box(&config)))
        });
    }
}

criterion_group!(benches, bench_audit);
criterion_main!(benches);
