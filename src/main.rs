//! Domain Registry — admin CLI
//!
//! Manage host name bindings stored in the registry database.
//!
//! ```sh
//! # List host names (wildcards hidden)
//! domain-registry list
//!
//! # Bind a host name to content node 1050
//! domain-registry add example.com --content-id 1050
//!
//! # Custom config path, skip migrations
//! domain-registry --config /etc/domain-registry/config.toml --no-migrate list --wildcards
//!
//! # Machine-readable output
//! domain-registry --json show example.com
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use domain_registry::config::AppConfig;
use domain_registry::domain::{Attempt, OperationStatus};
use domain_registry::infrastructure::database::migrator::Migrator;
use domain_registry::logging::init_tracing;
use domain_registry::{
    default_config_path, init_database, Domain, DomainError, DomainService,
    SeaOrmUnitOfWorkProvider,
};

/// Host name registry for multi-site content routing.
#[derive(Parser, Debug)]
#[command(name = "domain-registry", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "DOMAIN_REGISTRY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Print domains and operation results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all domains
    List {
        /// Include wildcard domains
        #[arg(long)]
        wildcards: bool,
    },
    /// Show one domain by name
    Show { name: String },
    /// List domains bound to a content node
    Assigned {
        content_id: i32,
        #[arg(long)]
        wildcards: bool,
    },
    /// Exit with status 0 when the domain exists, 1 otherwise
    Exists { name: String },
    /// Add a domain
    Add {
        name: String,
        #[arg(long)]
        content_id: Option<i32>,
        #[arg(long)]
        language_id: Option<i32>,
    },
    /// Change an existing domain
    Update {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        content_id: Option<i32>,
        #[arg(long)]
        language_id: Option<i32>,
    },
    /// Remove a domain by name
    Remove { name: String },
    /// Validate the configuration file and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut config = AppConfig::load(&config_path)?;
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    if let Command::Check = cli.command {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Database ───────────────────────────────────────────────
    let db = init_database(&config.database.to_database_config()).await?;
    if !cli.no_migrate {
        info!("Running database migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations completed");
    }

    let service = DomainService::new(Arc::new(SeaOrmUnitOfWorkProvider::new(db)));

    let output = Output { json: cli.json };
    if let Err(e) = run(&service, &output, cli.command).await {
        error!("{}", e);
        return Err(e.into());
    }
    Ok(())
}

async fn run(
    service: &DomainService,
    output: &Output,
    command: Command,
) -> Result<(), DomainError> {
    match command {
        Command::List { wildcards } => {
            output.domains(&service.get_all(wildcards).await?);
        }
        Command::Show { name } => match service.get_by_name(&name).await? {
            Some(domain) => output.domains(&[domain]),
            None => return Err(not_found(name)),
        },
        Command::Assigned {
            content_id,
            wildcards,
        } => {
            output.domains(&service.get_assigned_domains(content_id, wildcards).await?);
        }
        Command::Exists { name } => {
            let exists = service.exists(&name).await?;
            println!("{}", exists);
            if !exists {
                std::process::exit(1);
            }
        }
        Command::Add {
            name,
            content_id,
            language_id,
        } => {
            let mut domain = Domain {
                root_content_id: content_id,
                language_id,
                ..Domain::new(name)
            };
            let attempt = service.save(&mut domain).await?;
            output.attempt(&attempt, &domain);
        }
        Command::Update {
            id,
            name,
            content_id,
            language_id,
        } => {
            let mut domain = service.get_by_id(id).await?.ok_or(DomainError::NotFound {
                entity: "Domain",
                field: "id",
                value: id.to_string(),
            })?;
            if let Some(name) = name {
                domain.name = name;
            }
            if content_id.is_some() {
                domain.root_content_id = content_id;
            }
            if language_id.is_some() {
                domain.language_id = language_id;
            }
            let attempt = service.save(&mut domain).await?;
            output.attempt(&attempt, &domain);
        }
        Command::Remove { name } => {
            let domain = service
                .get_by_name(&name)
                .await?
                .ok_or_else(|| not_found(name))?;
            let attempt = service.delete(&domain).await?;
            output.attempt(&attempt, &domain);
        }
        Command::Check => {}
    }
    Ok(())
}

fn not_found(name: String) -> DomainError {
    DomainError::NotFound {
        entity: "Domain",
        field: "name",
        value: name,
    }
}

struct Output {
    json: bool,
}

impl Output {
    fn attempt(&self, attempt: &Attempt<OperationStatus>, domain: &Domain) {
        if self.json {
            let value = serde_json::json!({
                "status": attempt.result(),
                "domain": domain,
            });
            println!("{}", value);
            return;
        }

        println!("{}: {}", attempt.result().status_type, domain);
        for message in &attempt.result().messages {
            println!("   [{:?}] {}: {}", message.message_type, message.category, message.message);
        }
    }

    fn domains(&self, domains: &[Domain]) {
        if self.json {
            match serde_json::to_string_pretty(domains) {
                Ok(body) => println!("{}", body),
                Err(e) => error!("Failed to serialize domains: {}", e),
            }
            return;
        }

        println!("{:>6}  {:<40} {:>10} {:>8}", "ID", "NAME", "CONTENT", "LANG");
        for d in domains {
            println!(
                "{:>6}  {:<40} {:>10} {:>8}",
                d.id,
                d.name,
                d.root_content_id.map(|v| v.to_string()).unwrap_or_else(|| "-".into()),
                d.language_id.map(|v| v.to_string()).unwrap_or_else(|| "-".into()),
            );
        }
    }
}
