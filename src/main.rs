use std::path::{Path, PathBuf};

use canvas::element::PropertyUpdate;
use canvas::geometry::snap_to_grid;
use canvas::layout::{LayoutDocument, LayoutError};
use canvas::store::{EditorStore, LayoutIdentity, StoreError};
use clap::{Parser, Subcommand};
use floorplan::backend::FloorPlanBackend;
use floorplan::backend::postgres::PgBackend;
use floorplan::config::{Config, ConfigError};
use floorplan::db;
use floorplan::services::floor_plan::{self, Identity, PersistError};
use serde_json::{Value, json};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database init failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("invalid layout file: {0}")]
    Layout(#[from] LayoutError),
    #[error("layout edit failed: {0}")]
    Store(#[from] StoreError),
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "floorplan", about = "Restaurant floor-plan storage tool")]
struct Cli {
    #[arg(long, env = "FLOORPLAN_RESTAURANT_ID")]
    restaurant_id: Uuid,

    #[arg(long, env = "FLOORPLAN_USER_ID")]
    user_id: Uuid,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the restaurant's floor plans, default first.
    List,
    /// Print a floor plan's layout as JSON.
    Show {
        floor_plan_id: Uuid,
        /// Include the plan's seating areas.
        #[arg(long)]
        seating: bool,
    },
    /// Validate a layout JSON file and save it, reconciling seating areas.
    Import {
        file: PathBuf,
        /// Plan name; defaults to the file stem.
        #[arg(long)]
        name: Option<String>,
        /// Overwrite an existing plan instead of creating one.
        #[arg(long)]
        floor_plan_id: Option<Uuid>,
        /// Snap element positions and sizes to the configured grid first.
        #[arg(long)]
        snap: bool,
    },
    /// Delete a floor plan and its seating areas.
    Delete {
        floor_plan_id: Uuid,
    },
    /// Make a floor plan the restaurant's default.
    SetDefault {
        floor_plan_id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "failed to load .env"),
    }

    let cli = Cli::parse();
    let config = Config::from_env();
    let pool = db::init_pool(config.database_url()?, config.db_max_connections).await?;
    let backend = PgBackend::new(pool);
    let identity = Identity { user_id: cli.user_id, restaurant_id: cli.restaurant_id };

    match cli.command {
        Command::List => run_list(&backend, &identity).await,
        Command::Show { floor_plan_id, seating } => run_show(&backend, &identity, floor_plan_id, seating).await,
        Command::Import { file, name, floor_plan_id, snap } => {
            run_import(&backend, &identity, &config, &file, name, floor_plan_id, snap).await
        }
        Command::Delete { floor_plan_id } => {
            floor_plan::delete_floor_plan(&backend, &identity, floor_plan_id).await?;
            println!("deleted {floor_plan_id}");
            Ok(())
        }
        Command::SetDefault { floor_plan_id } => {
            floor_plan::set_default_floor_plan(&backend, &identity, floor_plan_id).await?;
            println!("default {floor_plan_id}");
            Ok(())
        }
    }
}

async fn run_list(backend: &dyn FloorPlanBackend, identity: &Identity) -> Result<(), CliError> {
    let plans = floor_plan::list_floor_plans(backend, identity).await?;
    print_json(&serde_json::to_value(plans)?)
}

async fn run_show(
    backend: &dyn FloorPlanBackend,
    identity: &Identity,
    floor_plan_id: Uuid,
    seating: bool,
) -> Result<(), CliError> {
    let record = floor_plan::get_floor_plan(backend, identity, floor_plan_id).await?;
    let mut out = json!({
        "id": record.id,
        "name": record.name,
        "isDefault": record.is_default,
        "layout": record.layout,
    });
    if seating {
        let areas = backend.list_seating_areas(floor_plan_id).await.map_err(PersistError::from)?;
        out["seatingAreas"] = serde_json::to_value(areas)?;
    }
    print_json(&out)
}

async fn run_import(
    backend: &dyn FloorPlanBackend,
    identity: &Identity,
    config: &Config,
    file: &Path,
    name: Option<String>,
    floor_plan_id: Option<Uuid>,
    snap: bool,
) -> Result<(), CliError> {
    let text = std::fs::read_to_string(file).map_err(|source| CliError::Read { path: file.to_owned(), source })?;
    let layout = LayoutDocument::from_json(&text)?;

    let layout_identity = match floor_plan_id {
        Some(id) => {
            let existing = floor_plan::get_floor_plan(backend, identity, id).await?;
            LayoutIdentity { id: Some(id), name: name.unwrap_or(existing.name), is_default: existing.is_default }
        }
        None => LayoutIdentity::unsaved(name.unwrap_or_else(|| file_stem(file))),
    };

    let mut store = EditorStore::with_policy(config.history);
    store.load_floor_plan(layout_identity, layout);
    if snap {
        snap_elements(&mut store, config.snap.grid_size)?;
    }

    let outcome = floor_plan::save_floor_plan(backend, identity, &mut store).await?;
    if let Some(warning) = &outcome.seating_warning {
        warn!(%warning, "seating areas not reconciled; re-run import to retry");
    }
    info!(floor_plan_id = %outcome.floor_plan_id, created = outcome.created, "import complete");
    print_json(&json!({
        "id": outcome.floor_plan_id,
        "created": outcome.created,
        "seatingWarning": outcome.seating_warning,
    }))
}

fn snap_elements(store: &mut EditorStore, grid_size: f64) -> Result<(), StoreError> {
    let targets: Vec<(String, [PropertyUpdate; 4])> = store
        .elements()
        .iter()
        .map(|el| {
            (el.id.clone(), [
                PropertyUpdate::X(snap_to_grid(el.x, grid_size)),
                PropertyUpdate::Y(snap_to_grid(el.y, grid_size)),
                PropertyUpdate::Width(snap_to_grid(el.width, grid_size)),
                PropertyUpdate::Height(snap_to_grid(el.height, grid_size)),
            ])
        })
        .collect();
    for (id, updates) in targets {
        for update in updates {
            store.update_element_property(&id, update)?;
        }
    }
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "Imported floor plan".to_owned(), |stem| stem.to_string_lossy().into_owned())
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
