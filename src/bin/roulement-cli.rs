#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use roulement::{
    engine::{PatternStep, PlanConfig, Planner},
    io,
    model::Horizon,
    storage::{JsonStorage, Plan, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de plannings d'équipe (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de plan
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer des travailleurs depuis un CSV (id,name,min_hours,max_hours)
    ImportWorkers {
        #[arg(long)]
        csv: String,
    },

    /// Importer des créneaux depuis un CSV (name,start,end)
    ImportSlots {
        #[arg(long)]
        csv: String,
    },

    /// Importer des congés depuis un CSV (name,worker_ids,start_date,end_date)
    ImportHolidays {
        #[arg(long)]
        csv: String,
    },

    /// Générer un planning et le stocker dans le plan
    Generate {
        /// Nombre de jours de l'horizon
        #[arg(long)]
        days: usize,
        /// Année de l'ancre calendaire
        #[arg(long)]
        year: i32,
        /// Mois de l'ancre calendaire (1-12)
        #[arg(long)]
        month: u32,
        /// Capacité par créneau
        #[arg(long, default_value_t = 1)]
        max_per_slot: u32,
        /// Autoriser plusieurs créneaux par jour et par travailleur
        #[arg(long)]
        multi_slots: bool,
        /// Motif de rotation, p. ex. "D,E,N,-,-" (- = repos)
        #[arg(long)]
        rotation: Option<String>,
        /// Désactiver la garde anti-nuits consécutives
        #[arg(long)]
        no_night_guard: bool,
        /// Plafond de jours travaillés par semaine
        #[arg(long, default_value_t = 7)]
        max_per_week: u32,
        /// Passe de rééquilibrage aléatoire (équité seule)
        #[arg(long)]
        rebalance: bool,
        /// Graine du générateur aléatoire
        #[arg(long)]
        seed: Option<u64>,
        /// Export JSON du planning (optionnel)
        #[arg(long)]
        out_json: Option<String>,
        /// Export CSV du planning (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Afficher le dernier planning généré
    Show,

    /// Afficher le bilan par travailleur (créneaux, heures)
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;
    let mut plan = storage.load().unwrap_or_default();

    match cli.cmd {
        Commands::ImportWorkers { csv } => {
            let workers = io::import_workers_csv(csv)?;
            plan.workers.extend(workers);
            storage.save(&plan)?;
        }
        Commands::ImportSlots { csv } => {
            let slots = io::import_slots_csv(csv)?;
            plan.slots.extend(slots);
            storage.save(&plan)?;
        }
        Commands::ImportHolidays { csv } => {
            let holidays = io::import_holidays_csv(csv)?;
            plan.holidays.extend(holidays);
            storage.save(&plan)?;
        }
        Commands::Generate {
            days,
            year,
            month,
            max_per_slot,
            multi_slots,
            rotation,
            no_night_guard,
            max_per_week,
            rebalance,
            seed,
            out_json,
            out_csv,
        } => {
            if plan.workers.is_empty() {
                bail!("aucun travailleur importé");
            }
            let horizon = Horizon::new(days, year, month).map_err(anyhow::Error::msg)?;
            let config = PlanConfig {
                max_workers_per_slot: max_per_slot,
                allow_multiple_slots_per_day: multi_slots,
                use_rotation: rotation.is_some(),
                rotation_pattern: rotation
                    .as_deref()
                    .map(PatternStep::parse_list)
                    .unwrap_or_default(),
                avoid_back_to_back_nights: !no_night_guard,
                max_slots_per_week: max_per_week,
                rebalance,
                seed,
                ..PlanConfig::default()
            };
            let planner = Planner::new(
                plan.workers.clone(),
                plan.slots.clone(),
                plan.holidays.clone(),
                horizon,
                config,
            )?;
            let schedule = planner.generate();
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            print!("{}", schedule.render_text());
            plan.schedule = Some(schedule);
            storage.save(&plan)?;
        }
        Commands::Show => {
            let Some(schedule) = plan.schedule.as_ref() else {
                bail!("aucun planning généré (lancer `generate` d'abord)");
            };
            print!("{}", schedule.render_text());
        }
        Commands::Stats => {
            let Some(schedule) = plan.schedule.as_ref() else {
                bail!("aucun planning généré (lancer `generate` d'abord)");
            };
            let counts = schedule.shift_counts();
            let hours = schedule.work_hours();
            for w in schedule.workers() {
                println!(
                    "{} | {} | {} créneaux | {} h",
                    w.id,
                    w.name,
                    counts.get(&w.id).copied().unwrap_or(0),
                    hours.get(&w.id).copied().unwrap_or(0)
                );
            }
        }
    }

    Ok(())
}
