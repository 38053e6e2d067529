use std::env;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use hirelocal::config::AppConfig;
use hirelocal::db;
use hirelocal::models::{BookingRequest, CustomerDetails, SortKey};
use hirelocal::services::catalog::{self, CatalogQuery};
use hirelocal::services::ledger;
use hirelocal::state::AppState;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let conn = db::init_db(&config.database_url)?;
    let mut state = AppState::new(conn, config);

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("list");

    match command {
        "list" => cmd_list(&state, &args[1..]),
        "skills" => cmd_skills(&state),
        "book" => cmd_book(&mut state, &args[1..]),
        "bookings" => cmd_bookings(&state),
        "delete" => cmd_delete(&state, &args[1..]),
        "reset" => cmd_reset(&mut state),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage: hirelocal <command>");
    println!("  list [--search TEXT] [--skill SKILL] [--sort none|rate_low|rate_high|rating_high]");
    println!("  skills");
    println!("  book <worker-id> --hours N --date YYYY-MM-DD --name NAME --phone PHONE --address ADDR");
    println!("  bookings");
    println!("  delete <booking-id>");
    println!("  reset");
}

fn flag(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn money(n: f64) -> String {
    format!("${n:.0}")
}

fn cmd_list(state: &AppState, args: &[String]) -> anyhow::Result<()> {
    let workers = catalog::load_or_seed(&state.conn)?;
    let query = CatalogQuery {
        search: flag(args, "--search").unwrap_or_default(),
        skill: flag(args, "--skill").unwrap_or_else(|| "all".to_string()),
        sort: SortKey::from_str(&flag(args, "--sort").unwrap_or_default()),
    };

    let filtered = catalog::filter_and_sort(&workers, &query);
    if filtered.is_empty() {
        println!("No workers found.");
        return Ok(());
    }

    for w in filtered {
        println!(
            "{}  {} ({})  {}/hr  rating {:.1}  {}  [{}]",
            w.id,
            w.name,
            w.skill,
            money(w.rate),
            w.rating,
            w.location,
            w.available
        );
    }
    Ok(())
}

fn cmd_skills(state: &AppState) -> anyhow::Result<()> {
    let workers = catalog::load_or_seed(&state.conn)?;
    for skill in catalog::distinct_skills(&workers) {
        println!("{skill}");
    }
    Ok(())
}

fn cmd_book(state: &mut AppState, args: &[String]) -> anyhow::Result<()> {
    let worker_id = match args.first() {
        Some(id) if !id.starts_with("--") => id.clone(),
        _ => anyhow::bail!("book requires a worker id; run `hirelocal list` to see them"),
    };

    let workers = catalog::load_or_seed(&state.conn)?;
    let worker = workers
        .iter()
        .find(|w| w.id == worker_id)
        .ok_or_else(|| anyhow::anyhow!("no worker with id {worker_id}"))?;
    state.selection.select(worker.clone());

    let hours = match flag(args, "--hours") {
        Some(raw) => ledger::parse_hours(&raw)?,
        None => state.config.default_hours,
    };
    let date = flag(args, "--date")
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

    println!(
        "Selected {} ({}) — estimated cost: {}",
        worker.name,
        worker.skill,
        money(state.selection.estimate_cost(hours))
    );

    let request = BookingRequest {
        hours,
        date,
        customer: CustomerDetails {
            name: flag(args, "--name").unwrap_or_default(),
            phone: flag(args, "--phone").unwrap_or_default(),
            address: flag(args, "--address").unwrap_or_default(),
        },
    };

    let booking = ledger::confirm(&state.conn, &state.selection, &request)?;
    println!(
        "Booking confirmed: {} ({}) on {} for {} h — total {}",
        booking.worker_name,
        booking.skill,
        booking.date,
        booking.hours,
        money(booking.total)
    );
    println!("id: {}", booking.id);
    Ok(())
}

fn cmd_bookings(state: &AppState) -> anyhow::Result<()> {
    let bookings = ledger::list(&state.conn)?;
    if bookings.is_empty() {
        println!("No bookings yet.");
        return Ok(());
    }

    for b in bookings {
        println!(
            "{}  {} ({})  {} x {} h = {}  on {}  customer: {} {} {}",
            b.id,
            b.worker_name,
            b.skill,
            money(b.rate),
            b.hours,
            money(b.total),
            b.date,
            b.customer_name,
            b.phone,
            b.address
        );
    }
    Ok(())
}

fn cmd_delete(state: &AppState, args: &[String]) -> anyhow::Result<()> {
    let id = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("delete requires a booking id"))?;

    if ledger::delete(&state.conn, id)? {
        println!("Deleted {id}.");
    } else {
        println!("No booking with id {id}.");
    }
    Ok(())
}

fn cmd_reset(state: &mut AppState) -> anyhow::Result<()> {
    let workers = catalog::reset_to_defaults(&state.conn, &mut state.selection)?;
    println!("Demo data reset: {} workers, 0 bookings.", workers.len());
    Ok(())
}
