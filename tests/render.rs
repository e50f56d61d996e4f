#![forbid(unsafe_code)]
use roulement::Schedule;

// grille fabriquée à la main (via serde) : le rendu ne dépend d'aucun aléa
#[test]
fn text_rendering_of_a_small_grid() {
    let json = r#"{
        "workers": [
            {"id": 1, "name": "Alice", "min_hours": null, "max_hours": null},
            {"id": 2, "name": "Bob", "min_hours": null, "max_hours": null}
        ],
        "slots": [
            {"name": "D", "start": "07:00:00", "end": "15:00:00"},
            {"name": "E", "start": "15:00:00", "end": "23:00:00"}
        ],
        "horizon": {"num_days": 2, "anchor": "2025-10-01"},
        "cells": [[[1], [2]], [[2], []]]
    }"#;
    let schedule: Schedule = serde_json::from_str(json).unwrap();

    insta::assert_snapshot!(schedule.render_text(), @r"
    Jour 1 (2025-10-01)  D [Alice]  E [Bob]
    Jour 2 (2025-10-02)  D [Bob]  E [-]

    Bilan par travailleur :
    Alice : 1 créneaux, 8 h
    Bob : 2 créneaux, 16 h
    ");
}

#[test]
fn aggregates_on_a_manual_grid() {
    let json = r#"{
        "workers": [
            {"id": 1, "name": "Alice", "min_hours": null, "max_hours": null},
            {"id": 2, "name": "Bob", "min_hours": null, "max_hours": null},
            {"id": 3, "name": "Jack", "min_hours": null, "max_hours": null}
        ],
        "slots": [
            {"name": "D", "start": "07:00:00", "end": "15:00:00"},
            {"name": "N", "start": "23:00:00", "end": "07:00:00"}
        ],
        "horizon": {"num_days": 2, "anchor": "2025-10-01"},
        "cells": [[[1, 2], [3]], [[3], []]]
    }"#;
    let schedule: Schedule = serde_json::from_str(json).unwrap();

    let counts = schedule.shift_counts();
    assert_eq!(counts[&roulement::WorkerId::new(1)], 1);
    assert_eq!(counts[&roulement::WorkerId::new(3)], 2);

    let minutes = schedule.work_minutes();
    assert_eq!(minutes[&roulement::WorkerId::new(3)], 960);

    let hours = schedule.work_hours();
    assert_eq!(hours[&roulement::WorkerId::new(2)], 8);
}
