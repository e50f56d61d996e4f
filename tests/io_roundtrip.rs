#![forbid(unsafe_code)]
use roulement::{
    engine::{PlanConfig, Planner},
    io,
    model::{Horizon, Worker, WorkerId},
    storage::{JsonStorage, Plan, Storage},
};
use std::fs;
use tempfile::tempdir;

#[test]
fn import_workers_with_optional_bounds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workers.csv");
    fs::write(
        &path,
        "id,name,min_hours,max_hours\n1,Alice,140,168\n2,Bob,-1,-1\n3,Jack,,120\n",
    )
    .unwrap();

    let workers = io::import_workers_csv(&path).unwrap();
    assert_eq!(workers.len(), 3);
    assert_eq!(workers[0].min_hours, Some(140));
    assert_eq!(workers[0].max_hours, Some(168));
    assert_eq!(workers[1].min_hours, None);
    assert_eq!(workers[1].max_hours, None);
    assert_eq!(workers[2].min_hours, None);
    assert_eq!(workers[2].max_hours, Some(120));
}

#[test]
fn import_workers_rejects_inverted_bounds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workers.csv");
    fs::write(&path, "id,name,min_hours,max_hours\n1,Alice,168,140\n").unwrap();
    assert!(io::import_workers_csv(&path).is_err());
}

#[test]
fn import_slots_keeps_declared_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("slots.csv");
    fs::write(&path, "name,start,end\nD,07:00,15:00\nE,15:00,23:00\nN,23:00,07:00\n").unwrap();

    let slots = io::import_slots_csv(&path).unwrap();
    let names: Vec<&str> = slots.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["D", "E", "N"]);
    assert_eq!(slots[2].duration_minutes(), 480);
    assert!(slots[2].is_night());
}

#[test]
fn import_holidays_with_id_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("holidays.csv");
    fs::write(
        &path,
        "name,worker_ids,start_date,end_date\nNoël,1;3,2025-12-24,2025-12-26\n",
    )
    .unwrap();

    let holidays = io::import_holidays_csv(&path).unwrap();
    assert_eq!(holidays.len(), 1);
    assert_eq!(
        holidays[0].worker_ids,
        vec![WorkerId::new(1), WorkerId::new(3)]
    );
}

#[test]
fn plan_save_and_load_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("plan.json")).unwrap();

    let workers = vec![
        Worker::unconstrained(WorkerId::new(1), "Alice"),
        Worker::unconstrained(WorkerId::new(2), "Bob"),
    ];
    let slots = io::import_slots_csv({
        let path = dir.path().join("slots.csv");
        fs::write(&path, "name,start,end\nD,08:00,16:00\nE,16:00,00:00\n").unwrap();
        path
    })
    .unwrap();

    let horizon = Horizon::new(7, 2025, 10).unwrap();
    let planner = Planner::new(
        workers.clone(),
        slots.clone(),
        vec![],
        horizon,
        PlanConfig::default(),
    )
    .unwrap();
    let schedule = planner.generate_with_seed(42);

    let plan = Plan {
        workers,
        slots,
        holidays: vec![],
        schedule: Some(schedule.clone()),
    };
    storage.save(&plan).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.workers, plan.workers);
    assert_eq!(loaded.slots, plan.slots);
    assert_eq!(loaded.schedule, Some(schedule));
}

#[test]
fn schedule_csv_export_shape() {
    let dir = tempdir().unwrap();
    let workers = vec![Worker::unconstrained(WorkerId::new(1), "Alice")];
    let slots = vec![roulement::Slot::new("D", "08:00", "16:00").unwrap()];
    let horizon = Horizon::new(2, 2025, 10).unwrap();
    let planner = Planner::new(workers, slots, vec![], horizon, PlanConfig::default()).unwrap();
    let schedule = planner.generate_with_seed(7);

    let path = dir.path().join("planning.csv");
    io::export_schedule_csv(&path, &schedule).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("day,date,slot,worker_ids"));
    assert_eq!(lines.next(), Some("1,2025-10-01,D,1"));
    assert_eq!(lines.next(), Some("2,2025-10-02,D,1"));
}
