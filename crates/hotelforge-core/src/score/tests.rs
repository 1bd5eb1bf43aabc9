use super::*;

#[test]
fn test_creation() {
    let score = HardSoftScore::of(-2, -100);
    assert_eq!(score.hard(), -2);
    assert_eq!(score.soft(), -100);
    assert_eq!(HardSoftScore::of_level(ScoreLevel::Hard, -3), HardSoftScore::of_hard(-3));
    assert_eq!(HardSoftScore::of_level(ScoreLevel::Soft, 7), HardSoftScore::of_soft(7));
}

#[test]
fn test_feasibility() {
    assert!(HardSoftScore::of(0, -1000).is_feasible());
    assert!(HardSoftScore::of(0, 250).is_feasible());
    assert!(!HardSoftScore::of(-1, 0).is_feasible());
}

#[test]
fn test_comparison_is_lexicographic() {
    let infeasible = HardSoftScore::of(-1, 10_000);
    let feasible = HardSoftScore::of(0, -1000);
    assert!(feasible > infeasible);
    assert!(feasible.is_better_than(&infeasible));
    assert!(infeasible.is_worse_than(&feasible));

    let s1 = HardSoftScore::of(0, -100);
    let s2 = HardSoftScore::of(0, -50);
    assert!(s2 > s1);

    let s3 = HardSoftScore::of(-2, 0);
    let s4 = HardSoftScore::of(-1, -1000);
    assert!(s4 > s3);
}

#[test]
fn test_arithmetic() {
    let s1 = HardSoftScore::of(-1, -100);
    let s2 = HardSoftScore::of(-1, -50);

    assert_eq!(s1 + s2, HardSoftScore::of(-2, -150));
    assert_eq!(s1 - s2, HardSoftScore::of(0, -50));
    assert_eq!(-s1, HardSoftScore::of(1, 100));
    assert_eq!(s1.multiply(3), HardSoftScore::of(-3, -300));

    let mut acc = HardSoftScore::ZERO;
    acc += s1;
    acc -= s2;
    assert_eq!(acc, HardSoftScore::of(0, -50));

    let total: HardSoftScore = [s1, s2].iter().sum();
    assert_eq!(total, HardSoftScore::of(-2, -150));
}

#[test]
fn test_is_negative() {
    assert!(HardSoftScore::of(-1, 50).is_negative());
    assert!(HardSoftScore::of(0, -1).is_negative());
    assert!(!HardSoftScore::of(0, 30).is_negative());
    assert!(!HardSoftScore::ZERO.is_negative());
}

#[test]
fn test_parse() {
    assert_eq!(
        HardSoftScore::parse("0hard/-100soft").unwrap(),
        HardSoftScore::of(0, -100)
    );
    assert_eq!(
        HardSoftScore::parse(" -1hard/0soft ").unwrap(),
        HardSoftScore::of(-1, 0)
    );
    assert!(HardSoftScore::parse("0hard").is_err());
    assert!(HardSoftScore::parse("0/0soft").is_err());
    assert!(HardSoftScore::parse("xhard/0soft").is_err());
}

#[test]
fn test_display() {
    let score = HardSoftScore::of(-1, -100);
    assert_eq!(format!("{}", score), "-1hard/-100soft");
    assert_eq!(format!("{:?}", score), "HardSoftScore(-1, -100)");
}

#[test]
fn test_serde_field_names() {
    let json = serde_json::to_string(&HardSoftScore::of(-1, 40)).unwrap();
    assert_eq!(json, r#"{"hardScore":-1,"softScore":40}"#);
}
