use crate::model::{Holiday, Slot, Worker, WorkerId};
use crate::schedule::Schedule;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de travailleurs depuis CSV : header `id,name,min_hours,max_hours`
/// (`-1` ou vide = borne non contrainte).
pub fn import_workers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Worker>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id: u32 = rec
            .get(0)
            .context("missing id")?
            .trim()
            .parse()
            .context("invalid worker id")?;
        let name = rec.get(1).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid worker row (empty name)");
        }
        let min = parse_bound(rec.get(2))?;
        let max = parse_bound(rec.get(3))?;
        let worker = Worker::new(WorkerId::new(id), name.to_string(), min, max)
            .map_err(anyhow::Error::msg)?;
        out.push(worker);
    }
    Ok(out)
}

fn parse_bound(field: Option<&str>) -> anyhow::Result<i32> {
    match field.map(str::trim) {
        None | Some("") => Ok(-1),
        Some(raw) => raw.parse().context("invalid hour bound"),
    }
}

/// Import de créneaux : header `name,start,end` (heures `HH:MM`).
/// L'ordre des lignes définit l'ordre canonique des colonnes du planning.
pub fn import_slots_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Slot>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim().to_string();
        let start = rec.get(1).context("missing start")?.trim();
        let end = rec.get(2).context("missing end")?.trim();
        let slot = Slot::new(name, start, end).map_err(anyhow::Error::msg)?;
        out.push(slot);
    }
    Ok(out)
}

/// Import de congés : header `name,worker_ids,start_date,end_date`
/// (`worker_ids` = liste `;`-séparée, dates `YYYY-MM-DD` inclusives).
pub fn import_holidays_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Holiday>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim().to_string();
        let ids = parse_worker_ids(rec.get(1).context("missing worker_ids")?)?;
        let start = rec.get(2).context("missing start_date")?.trim();
        let end = rec.get(3).context("missing end_date")?.trim();
        let holiday = Holiday::new(name, ids, start, end).map_err(anyhow::Error::msg)?;
        out.push(holiday);
    }
    Ok(out)
}

fn parse_worker_ids(raw: &str) -> anyhow::Result<Vec<WorkerId>> {
    raw.split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            chunk
                .parse::<u32>()
                .map(WorkerId::new)
                .with_context(|| format!("invalid worker id: {chunk}"))
        })
        .collect()
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning : header `day,date,slot,worker_ids`
/// (`worker_ids` `;`-séparés, vide = cellule non couverte).
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "date", "slot", "worker_ids"])?;
    for day in 0..schedule.num_days() {
        let date = schedule.horizon().date(day).to_string();
        for (slot_idx, slot) in schedule.slots().iter().enumerate() {
            let ids = schedule
                .assigned(day, slot_idx)
                .iter()
                .map(|id| id.as_u32().to_string())
                .collect::<Vec<_>>()
                .join(";");
            w.write_record([&(day + 1).to_string(), &date, &slot.name, &ids])?;
        }
    }
    w.flush()?;
    Ok(())
}
