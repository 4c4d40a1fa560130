use paperfig::dist::{SAMPLE_SEED, summary_groups, timing_scenarios};

#[test]
fn timing_scenarios_repeat_exactly() {
    let first = timing_scenarios(SAMPLE_SEED).unwrap();
    let second = timing_scenarios(SAMPLE_SEED).unwrap();
    assert_eq!(first, second, "same seed must reproduce the same samples");
}

#[test]
fn summary_groups_repeat_exactly() {
    let first = summary_groups(SAMPLE_SEED).unwrap();
    let second = summary_groups(SAMPLE_SEED).unwrap();
    assert_eq!(first, second);
}

#[test]
fn seed_changes_the_draws() {
    let a = summary_groups(SAMPLE_SEED).unwrap();
    let b = summary_groups(SAMPLE_SEED + 1).unwrap();
    assert_ne!(a, b);
}
