use criterion::{Criterion, black_box, criterion_group, criterion_main};
use door_core::belief::{BeliefDistribution, BeliefUpdater};
use door_core::model::action::Action;
use door_core::model::observation::Observation;
use door_core::model::step::Step;

fn bench_single_update(c: &mut Criterion) {
    let updater = BeliefUpdater::lecture();
    let prior = BeliefDistribution::uniform();
    let step = Step::new(Action::Push, Observation::SenseClosed);
    c.bench_function("belief_update_single_step", |b| {
        b.iter(|| {
            let posterior = updater
                .apply(black_box(prior), black_box(step))
                .expect("lecture models never degenerate");
            black_box(posterior);
        })
    });
}

criterion_group!(benches, bench_single_update);
criterion_main!(benches);
