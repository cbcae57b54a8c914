// https://bheisler.github.io/criterion.rs/book/getting_started.html

extern crate synth_pricing;
use synth_pricing::analytic::{price_contracts, price_path};
use synth_pricing::common::{ContractSpec, OptionClass, RiskFreeRate};
use synth_pricing::simulation::{simulate_path, PathParameters};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

criterion_group!(benches, criterion_option_paths);
criterion_main!(benches);

fn contract_grid() -> Vec<ContractSpec> {
    let mut contracts = Vec::new();
    for strike in [8.0, 10.0, 12.0] {
        for maturity in [0.5, 0.75] {
            for vola in [0.2, 0.3, 0.5] {
                for class in [OptionClass::Call, OptionClass::Put] {
                    if let Ok(spec) = ContractSpec::new(strike, maturity, vola, class) {
                        contracts.push(spec);
                    }
                }
            }
        }
    }
    contracts
}

pub fn criterion_option_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stock path and option prices");
    let params = PathParameters::default();
    let rate = RiskFreeRate::default();

    group.bench_function("simulate a 1000 step stock path", |b| {
        b.iter(|| simulate_path(black_box(&params), black_box(Some(55))))
    });

    let (time_grid, stock) = simulate_path(&params, Some(55)).expect("valid default parameters");
    let call = ContractSpec::new(10.0, 0.5, 0.2, OptionClass::Call).expect("valid contract");
    group.bench_function("price one contract along the path", |b| {
        b.iter(|| price_path(&time_grid, black_box(&stock), &call, rate))
    });

    let contracts = contract_grid();
    group.bench_function("price the 36 contract grid in parallel", |b| {
        b.iter(|| price_contracts(&time_grid, black_box(&stock), &contracts, rate))
    });

    group.finish()
}
