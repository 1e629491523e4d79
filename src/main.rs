//! Accounts service bootstrap
//!
//! Connects to the configured database, applies migrations and seeds the
//! default administrator. Reads configuration from a TOML file
//! (~/.config/accounts-service/config.toml).

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, warn};

use accounts::application::UserService;
use accounts::domain::UserRepositoryInterface;
use accounts::infrastructure::crypto::password::PasswordHasher;
use accounts::support::telemetry::init_tracing;
use accounts::{
    default_config_path, init_database, run_migrations, AppConfig, DatabaseConfig,
    SeaOrmUserRepository,
};

#[derive(Debug, Parser)]
#[command(name = "accounts-service", about = "User accounts database bootstrap")]
struct Args {
    /// Path to config.toml
    #[arg(short, long, env = "ACCOUNTS_CONFIG")]
    config: Option<PathBuf>,

    /// Skip seeding the default administrator
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = args.config.unwrap_or_else(default_config_path);
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg.logging.level, cfg.logging.json);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            init_tracing("info", false);
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig::from(&app_cfg);
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = run_migrations(&db).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }

    let repo = Arc::new(SeaOrmUserRepository::new(db));
    let service = UserService::new(
        repo.clone(),
        PasswordHasher::new(app_cfg.security.bcrypt_cost),
    );

    // ── Default admin ──────────────────────────────────────────
    if args.no_seed {
        info!("Skipping default admin seeding");
    } else {
        match service.ensure_default_admin(&app_cfg.admin).await {
            Ok(Some(created)) => warn!(
                email = %created.user.email,
                "Default admin created with the configured password; change it after first login"
            ),
            Ok(None) => info!("Default admin already present"),
            Err(e) => {
                error!("Failed to create default admin: {}", e);
                return Err(e.into());
            }
        }
    }

    let users = repo.get_all_users().await?;
    info!(count = users.len(), "Accounts database ready");

    Ok(())
}
