//! asactl CLI
//!
//! Command-line interface for administering an ARK: Survival Ascended
//! dedicated server: RCON commands and mod management.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use asactl::config::MOD_DATABASE_PATH;
use asactl::{exit_codes, AsactlError, ModDatabase, RconExecutor, Resolver};

/// asactl CLI
#[derive(Parser, Debug)]
#[command(name = "asactl")]
#[command(about = "Administration CLI for ARK: Survival Ascended dedicated servers")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute an RCON command on the running server
    Rcon {
        /// RCON command to execute (e.g. "saveworld")
        #[arg(long, value_name = "COMMAND")]
        exec: String,
    },

    /// Manage server mods
    Mods {
        /// Enable a mod by its CurseForge project id
        #[arg(long, value_name = "MOD_ID")]
        enable: Option<u64>,

        /// List all configured mods
        #[arg(long)]
        list: bool,

        /// Print the -mods= start parameter for enabled mods (used by the
        /// server startup scripts)
        #[arg(long)]
        start_param: bool,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,asactl=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    let code = match args.command {
        Commands::Rcon { exec } => run_rcon(&exec),
        Commands::Mods {
            enable,
            list,
            start_param,
        } => run_mods(enable, list, start_param),
    };

    std::process::exit(code);
}

/// Print an error to stderr and return its exit code
fn fail(message: &str, code: i32) -> i32 {
    eprintln!("Error: {message}");
    code
}

fn run_rcon(command: &str) -> i32 {
    let executor = RconExecutor::new(Resolver::from_env());

    match executor.run(command) {
        Ok(result) => {
            println!("{}", result.output);
            exit_codes::OK
        }
        Err(e) => fail(&exit_codes::operator_message(&e), exit_codes::for_error(&e)),
    }
}

fn run_mods(enable: Option<u64>, list: bool, start_param: bool) -> i32 {
    if let Some(mod_id) = enable {
        return enable_mod(mod_id);
    }

    if list {
        return list_mods();
    }

    if start_param {
        // No trailing newline: the output is spliced into the server's
        // command line, and a broken database must never block a start
        print!("{}", asactl::mods::start_parameter(MOD_DATABASE_PATH));
        return exit_codes::OK;
    }

    fail(
        "Please specify --enable <MOD_ID>, --list or --start-param",
        exit_codes::UNEXPECTED,
    )
}

fn enable_mod(mod_id: u64) -> i32 {
    let mut db = match ModDatabase::open(MOD_DATABASE_PATH) {
        Ok(db) => db,
        Err(e) => return fail(&e.to_string(), exit_codes::for_error(&e)),
    };

    match db.enable_mod(mod_id) {
        Ok(()) => {
            println!(
                "Enabled mod id '{mod_id}' successfully. The server will download \
                 the mod upon startup."
            );
            exit_codes::OK
        }
        Err(AsactlError::ModAlreadyEnabled(_)) => fail(
            "This mod is already enabled! Use 'asactl mods --list' to see what \
             mods are currently enabled.",
            exit_codes::MOD_ALREADY_ENABLED,
        ),
        Err(e) => fail(&e.to_string(), exit_codes::for_error(&e)),
    }
}

fn list_mods() -> i32 {
    let db = match ModDatabase::open(MOD_DATABASE_PATH) {
        Ok(db) => db,
        Err(e) => return fail(&e.to_string(), exit_codes::for_error(&e)),
    };

    if db.mods().is_empty() {
        println!("No mods configured.");
        return exit_codes::OK;
    }

    println!("Configured mods:");
    for record in db.mods() {
        let status = if record.enabled { "enabled" } else { "disabled" };
        println!("  - {} ({}) [{}]", record.mod_id, record.name, status);
    }

    exit_codes::OK
}
