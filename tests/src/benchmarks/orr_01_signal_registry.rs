//! # ORR-01 Signal Registry Benchmarks
//!
//! Workloads:
//! - Resolving built-in names (catalog scan)
//! - Resolving recorded custom names (hash lookup)
//! - Minting until the frequency space is exhausted
//! - Planning signals end to end

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use orr_01_signal_registry::{
    IdentifierKind, InMemoryAudioLibrary, SignalInfo, SignalRegistryApi, SignalRegistryService,
    SignalscopeBuffer,
};

type Service = SignalRegistryService<SignalscopeBuffer, InMemoryAudioLibrary>;

fn service() -> Service {
    let mut audio = InMemoryAudioLibrary::new(".");
    audio.register_clip("TH_RadioSignal");
    SignalRegistryService::new(SignalscopeBuffer::default(), audio)
}

pub fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("orr-01-resolve");

    group.bench_function("builtin_frequency", |b| {
        let mut svc = service();
        b.iter(|| black_box(svc.resolve(black_box("Radio"), IdentifierKind::FrequencyChannel)))
    });

    for recorded in [10usize, 100, 1_000] {
        let mut svc = service();
        let names: Vec<String> = (0..recorded).map(|i| format!("Signal {i}")).collect();
        for name in &names {
            svc.resolve(name, IdentifierKind::SignalIdentity);
        }

        group.throughput(Throughput::Elements(recorded as u64));
        group.bench_with_input(
            BenchmarkId::new("recorded_signal", recorded),
            &names,
            |b, names| {
                b.iter(|| {
                    for name in names {
                        black_box(svc.resolve(name, IdentifierKind::SignalIdentity));
                    }
                })
            },
        );
    }

    group.finish();
}

pub fn bench_exhaust_frequencies(c: &mut Criterion) {
    let names: Vec<String> = (0..32).map(|i| format!("Band {i}")).collect();

    c.bench_function("orr-01-exhaust-frequency-space", |b| {
        b.iter(|| {
            let mut svc = service();
            for name in &names {
                black_box(svc.resolve(name, IdentifierKind::FrequencyChannel));
            }
        })
    });
}

pub fn bench_plan_signal(c: &mut Criterion) {
    let infos: Vec<SignalInfo> = (0..50)
        .map(|i| SignalInfo {
            name: format!("Beacon {i}"),
            frequency: format!("Band {}", i % 5),
            audio_clip: Some("TH_RadioSignal".to_string()),
            ..Default::default()
        })
        .collect();

    c.bench_function("orr-01-plan-50-signals", |b| {
        b.iter(|| {
            let mut svc = service();
            for info in &infos {
                let _ = black_box(svc.plan_signal(info));
            }
        })
    });
}
