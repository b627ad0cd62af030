use door_core::belief::NORMALIZATION_TOLERANCE;
use door_sim::simulation::{Scenario, Simulation};

#[test]
fn lecture_scenario_reproduces_chained_beliefs() {
    let expected = [
        (1.0 / 3.0, 2.0 / 3.0),
        (0.7647058823529411, 0.23529411764705882),
        (0.6190476190476191, 0.38095238095238093),
        (0.9732441471571905, 0.026755852842809368),
        (0.9909194097616345, 0.009080590238365497),
    ];

    let records = Simulation::run(&Scenario::lecture()).expect("lecture run succeeds");
    assert_eq!(records.len(), expected.len());

    for (record, (p_open, p_closed)) in records.iter().zip(expected) {
        assert!((record.belief.p_open() - p_open).abs() < 1e-12);
        assert!((record.belief.p_closed() - p_closed).abs() < 1e-12);
        let sum = record.belief.p_open() + record.belief.p_closed();
        assert!((sum - 1.0).abs() <= NORMALIZATION_TOLERANCE);
    }
}
