use anyhow::{Result, anyhow};
use islamic_companion_bot::config::DEFAULT_DATABASE_URL;
use islamic_companion_bot::database::connection::{sqlite_file_path, DatabaseManager};
use islamic_companion_bot::database::models::Registration;
use std::env;
use std::io;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize basic logging for the migration
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await,
        "check" => check_database().await,
        "reset" => reset_database().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

/// The migration tool only needs the database, not the bot token.
fn database_url() -> Result<String> {
    dotenvy::dotenv().ok();
    let url = env::var("DATABASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    if sqlite_file_path(&url).is_none() {
        return Err(anyhow!("DATABASE_URL must point to a SQLite file, got '{}'", url));
    }
    Ok(url)
}

async fn run_migrations() -> Result<()> {
    println!("🕌 Islamic Companion Bot - Database Migration Tool");
    println!("==================================================");

    let database_url = database_url()?;
    println!("📊 Database URL: {}", mask_url(&database_url));
    println!("🚀 Running database migrations...");

    let db_manager = DatabaseManager::new(&database_url).await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match db_manager.run_migrations().await {
        Ok(_) => println!("✅ Migrations completed successfully!"),
        Err(e) => {
            eprintln!("❌ Migration failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    let database_url = database_url()?;
    println!("📊 Database URL: {}", mask_url(&database_url));

    let db_manager = DatabaseManager::new(&database_url).await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match Registration::count_by_city(&db_manager.pool).await {
        Ok(counts) => {
            let total: i64 = counts.iter().map(|(_, n)| n).sum();
            println!("✅ Database connection successful!");
            println!("📋 {total} registered chat(s)");
            for (city, count) in counts {
                println!("  • {city}: {count}");
            }
        }
        Err(e) => {
            println!("⚠️  Database check failed: {e}");
            println!("💡 Try running 'migrate up' to create the schema");
        }
    }

    Ok(())
}

async fn reset_database() -> Result<()> {
    println!("⚠️  WARNING: This will delete ALL notification registrations!");
    println!("🤔 Are you sure you want to continue? (yes/no)");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    if input.trim().to_lowercase() != "yes" {
        println!("❌ Reset cancelled.");
        return Ok(());
    }

    let database_url = database_url()?;
    if let Some(db_path) = sqlite_file_path(&database_url) {
        if db_path.exists() {
            std::fs::remove_file(db_path)?;
            println!("🗑️  Deleted database file: {}", db_path.display());
        }
    }

    println!("🔄 Recreating database schema...");
    run_migrations().await?;

    println!("✅ Database reset completed!");

    Ok(())
}

fn mask_url(url: &str) -> String {
    match sqlite_file_path(url).and_then(Path::file_name) {
        Some(filename) => format!("sqlite:.../{}", filename.to_string_lossy()),
        None => url.to_string(),
    }
}

fn print_help() {
    println!("🕌 Islamic Companion Bot - Database Migration Tool");
    println!();
    println!("USAGE:");
    println!("    migrate [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run database migrations (default)");
    println!("    check          Check connection and count registrations per city");
    println!("    reset          Delete and recreate the database - DESTRUCTIVE!");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   SQLite connection string (default: {DEFAULT_DATABASE_URL})");
    println!();
}
