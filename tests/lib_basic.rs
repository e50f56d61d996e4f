#![forbid(unsafe_code)]
use chrono::NaiveDate;
use roulement::{
    engine::{PatternStep, PlanConfig, PlanError, Planner},
    model::{Holiday, Horizon, Slot, Worker, WorkerId},
};

fn two_slots() -> Vec<Slot> {
    vec![
        Slot::new("D", "08:00", "16:00").unwrap(),
        Slot::new("E", "16:00", "00:00").unwrap(),
    ]
}

#[test]
fn create_and_generate_basic() {
    let workers = vec![
        Worker::unconstrained(WorkerId::new(1), "Alice"),
        Worker::unconstrained(WorkerId::new(2), "Bob"),
    ];
    let horizon = Horizon::new(7, 2025, 10).unwrap();
    let planner =
        Planner::new(workers, two_slots(), vec![], horizon, PlanConfig::default()).unwrap();

    let schedule = planner.generate_with_seed(1);
    assert_eq!(schedule.num_days(), 7);
    // deux travailleurs, deux créneaux de jour : couverture complète
    for day in 0..7 {
        for slot in 0..2 {
            assert_eq!(schedule.assigned(day, slot).len(), 1);
        }
    }
}

#[test]
fn planner_rejects_duplicate_worker_id() {
    let workers = vec![
        Worker::unconstrained(WorkerId::new(1), "Alice"),
        Worker::unconstrained(WorkerId::new(1), "Bob"),
    ];
    let horizon = Horizon::new(7, 2025, 10).unwrap();
    let err =
        Planner::new(workers, two_slots(), vec![], horizon, PlanConfig::default()).unwrap_err();
    assert!(matches!(err, PlanError::DuplicateWorker(1)));
}

#[test]
fn planner_rejects_inverted_hour_bounds() {
    // champs publics : l'invariant du constructeur est revérifié
    let workers = vec![Worker {
        id: WorkerId::new(1),
        name: "Alice".into(),
        min_hours: Some(170),
        max_hours: Some(140),
    }];
    let horizon = Horizon::new(7, 2025, 10).unwrap();
    let err =
        Planner::new(workers, two_slots(), vec![], horizon, PlanConfig::default()).unwrap_err();
    assert!(matches!(err, PlanError::InvalidHourBounds(_)));
}

#[test]
fn planner_rejects_inverted_holiday_range() {
    let workers = vec![Worker::unconstrained(WorkerId::new(1), "Alice")];
    let holidays = vec![Holiday {
        name: "Inversé".into(),
        worker_ids: vec![WorkerId::new(1)],
        start_date: NaiveDate::from_ymd_opt(2025, 10, 10).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
    }];
    let horizon = Horizon::new(7, 2025, 10).unwrap();
    let err =
        Planner::new(workers, two_slots(), holidays, horizon, PlanConfig::default()).unwrap_err();
    assert!(matches!(err, PlanError::InvalidHolidayRange(_)));
}

#[test]
fn planner_rejects_inconsistent_capacity() {
    let workers = vec![Worker::unconstrained(WorkerId::new(1), "Alice")];
    let horizon = Horizon::new(7, 2025, 10).unwrap();

    let zero_cap = PlanConfig {
        max_workers_per_slot: 0,
        ..PlanConfig::default()
    };
    let err = Planner::new(workers.clone(), two_slots(), vec![], horizon, zero_cap).unwrap_err();
    assert!(matches!(err, PlanError::InvalidConfig(_)));

    // capacité > 1 déclarée en même temps que l'assertion un-par-créneau :
    // rejet, pas d'écrêtage silencieux
    let conflicting = PlanConfig {
        max_workers_per_slot: 3,
        single_worker_per_slot: true,
        ..PlanConfig::default()
    };
    let err = Planner::new(workers, two_slots(), vec![], horizon, conflicting).unwrap_err();
    assert!(matches!(err, PlanError::InvalidConfig(_)));
}

#[test]
fn planner_rejects_unknown_pattern_slot() {
    let workers = vec![Worker::unconstrained(WorkerId::new(1), "Alice")];
    let horizon = Horizon::new(7, 2025, 10).unwrap();
    let config = PlanConfig {
        use_rotation: true,
        rotation_pattern: PatternStep::parse_list("D,X,-"),
        ..PlanConfig::default()
    };
    let err = Planner::new(workers, two_slots(), vec![], horizon, config).unwrap_err();
    assert!(matches!(err, PlanError::UnknownPatternSlot(name) if name == "X"));
}

#[test]
fn pattern_list_parsing() {
    let pattern = PatternStep::parse_list("D, E ,N,-,rest,");
    assert_eq!(
        pattern,
        vec![
            PatternStep::Work("D".into()),
            PatternStep::Work("E".into()),
            PatternStep::Work("N".into()),
            PatternStep::Rest,
            PatternStep::Rest,
            PatternStep::Rest,
        ]
    );
}

#[test]
fn rotation_with_empty_pattern_is_inactive() {
    let config = PlanConfig {
        use_rotation: true,
        rotation_pattern: Vec::new(),
        ..PlanConfig::default()
    };
    assert!(!config.rotation_active());
    // la garde anti-nuits reste donc active
    assert!(config.night_guard_active());

    let with_pattern = PlanConfig {
        use_rotation: true,
        rotation_pattern: PatternStep::parse_list("D,-"),
        ..PlanConfig::default()
    };
    assert!(with_pattern.rotation_active());
    assert!(!with_pattern.night_guard_active());
}
