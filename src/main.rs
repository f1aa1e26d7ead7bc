use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use sqlx::migrate::MigrateDatabase;
use sqlx_migrator::{Migrate, Plan};
use userhub_shared::Role;

/// userhub - user accounts and authentication service
#[derive(Parser)]
#[command(name = "userhub")]
#[command(about = "User accounts and token authentication over HTTP", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RoleArg {
    User,
    Admin,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Change an account's role
    SetRole {
        /// Email of the target account
        #[arg(long)]
        email: String,

        /// Role to assign
        #[arg(long, value_enum)]
        role: RoleArg,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = userhub::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    userhub::observability::init_observability(
        "userhub",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::SetRole { email, role } => set_role_command(config, email, role).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: userhub::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting userhub server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    userhub::server::serve(config, host, port).await
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: userhub::config::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let pool = userhub::db::create_pool(&config.database.url, 1).await?;

    run_migrations(&pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: userhub::config::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
        tracing::info!("Database dropped successfully");
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn set_role_command(
    config: userhub::config::Config,
    email: String,
    role: RoleArg,
) -> Result<()> {
    let pool = userhub::db::create_pool(&config.database.url, 1).await?;
    let command = userhub_user::Command::new(pool);

    let Some(user) = command.find_by_email(email.as_str()).await? else {
        tracing::error!("user {email} not found");
        return Ok(());
    };

    let role = match role {
        RoleArg::User => Role::User,
        RoleArg::Admin => Role::Admin,
    };

    command.set_role(user.id, role).await?;

    tracing::info!("{email} role set to {role}");

    Ok(())
}

async fn run_migrations(pool: &sqlx::SqlitePool) -> Result<()> {
    let migrator = userhub_db::migrator()?;

    let mut conn = pool.acquire().await?;
    migrator.run(&mut *conn, &Plan::apply_all()).await?;
    drop(conn);

    Ok(())
}
