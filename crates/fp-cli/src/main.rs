//! fp - administration portal CLI
//!
//! Front-end for the accounts backend: session management, user
//! administration, and published-form results with CSV/PDF export.
//!
//! # Examples
//!
//! ```bash
//! # Log in and persist the session
//! fp login --email admin@example.com --password secret
//!
//! # List accounts (superuser only)
//! fp user list
//!
//! # Fetch form 1 and export both artifacts
//! fp results fetch --form 1 --csv --pdf
//! ```

mod cli;
mod commands;
mod error;
mod logger;
mod results_commands;
mod user_commands;


use crate::{
    cli::Cli,
    commands::Commands,
    error::{CliError, CliResult},
    results_commands::ResultsCommands,
    user_commands::UserCommands,
};

use fp_client::{ApiClient, ClientError, SessionStore, UsersApi};
use fp_config::Config;
use fp_core::{AccessLevel, Identity, TabularGrid};
use fp_screens::{ResultsScreen, RouteDecision, UsersScreen, guard};

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger::initialize(&config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    let slot_path = match config.identity_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut session = SessionStore::open(slot_path);

    let base_url = cli
        .server
        .unwrap_or_else(|| config.api.base_url.clone());
    let api = match ApiClient::new(&base_url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &config, &mut session, &api).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Commands,
    config: &Config,
    session: &mut SessionStore,
    api: &ApiClient,
) -> CliResult<()> {
    match command {
        Commands::Login { email, password } => {
            let identity = session.login(api, &email, &password).await?;
            println!("Bienvenido, {}", identity.display_name());
            Ok(())
        }

        Commands::Logout => {
            session.logout();
            println!("Sesión cerrada.");
            Ok(())
        }

        Commands::Whoami => {
            whoami(session);
            Ok(())
        }

        Commands::User { action } => {
            let identity = ensure_access(AccessLevel::Admin, session)?;
            run_user(action, api, &identity).await
        }

        Commands::Results { action } => {
            let identity = ensure_access(AccessLevel::Authenticated, session)?;
            run_results(action, api, config, &identity).await
        }

        Commands::Dashboard => {
            let identity = ensure_access(AccessLevel::Authenticated, session)?;
            dashboard(&identity);
            Ok(())
        }

        Commands::Blog => {
            blog();
            Ok(())
        }
    }
}

/// Gate a protected command behind the route guard.
///
/// `RedirectToLogin` covers both "not logged in" and "logged in without the
/// required privilege"; the caller only learns it must send the user to
/// login, same as the portal's guarded routes.
fn ensure_access(required: AccessLevel, session: &SessionStore) -> CliResult<Identity> {
    match (guard::decide(required, session.view()), session.identity()) {
        (RouteDecision::Authorized, Some(identity)) => Ok(identity.clone()),
        _ => Err(CliError::access_denied(
            "No active session with the required privileges. Run `fp login` first.",
        )),
    }
}

fn whoami(session: &SessionStore) {
    let Some(identity) = session.identity() else {
        println!("No hay sesión activa.");
        return;
    };

    println!("{} <{}>", identity.display_name(), identity.email);
    println!("  id: {}", identity.id);
    println!("  superuser: {}", identity.is_superuser);
    println!("  sesión iniciada: {}", identity.logged_in_at);
    for (slot, link) in identity.assigned_form_links() {
        println!("  formulario {slot}: {link}");
    }
    if let Some(link) = identity.powerbi_link.as_deref().filter(|l| !l.is_empty()) {
        println!("  dashboard: {link}");
    }
}

async fn run_user(action: UserCommands, api: &ApiClient, identity: &Identity) -> CliResult<()> {
    let mut screen = UsersScreen::open(Some(identity))?;

    match action {
        UserCommands::List => {
            screen.load(api).await;
            if let Some(message) = screen.error() {
                return Err(CliError::backend(message));
            }
            for user in screen.users() {
                println!("{:>5}  {}  <{}>", user.id, user.username, user.email);
                let profile = user.profile_or_default();
                let links = [
                    ("formulario 1", profile.form_link1),
                    ("formulario 2", profile.form_link2),
                    ("formulario 3", profile.form_link3),
                    ("dashboard", profile.powerbi_link),
                ];
                for (label, link) in links {
                    if let Some(link) = link.filter(|l| !l.is_empty()) {
                        println!("       {label}: {link}");
                    }
                }
            }
            Ok(())
        }

        UserCommands::Update {
            id,
            username,
            email,
            form_link1,
            form_link2,
            form_link3,
            powerbi_link,
        } => {
            screen.load(api).await;
            if let Some(message) = screen.error() {
                return Err(CliError::backend(message));
            }
            screen.begin_edit(id)?;
            if let Some(buffer) = screen.editing_mut() {
                if let Some(value) = username {
                    buffer.username = value;
                }
                if let Some(value) = email {
                    buffer.email = value;
                }
                if let Some(value) = form_link1 {
                    buffer.form_link1 = value;
                }
                if let Some(value) = form_link2 {
                    buffer.form_link2 = value;
                }
                if let Some(value) = form_link3 {
                    buffer.form_link3 = value;
                }
                if let Some(value) = powerbi_link {
                    buffer.powerbi_link = value;
                }
            }
            screen.save(api).await?;
            println!("Usuario {id} actualizado.");
            Ok(())
        }

        UserCommands::Delete { id, yes } => {
            if !yes && !confirm("¿Estás seguro de que deseas eliminar este usuario? [y/N] ")? {
                println!("Cancelado.");
                return Ok(());
            }
            screen.delete(api, id).await?;
            println!("Usuario {id} eliminado.");
            Ok(())
        }

        UserCommands::Register {
            email,
            username,
            password,
        } => {
            api.register(&email, &username, &password).await?;
            println!("Usuario registrado: {email}");
            Ok(())
        }
    }
}

async fn run_results(
    action: ResultsCommands,
    api: &ApiClient,
    config: &Config,
    identity: &Identity,
) -> CliResult<()> {
    match action {
        ResultsCommands::Links { refresh } => {
            if refresh {
                let links = api.user_links(&identity.email).await?;
                print_links(links.iter().enumerate().filter_map(|(i, link)| {
                    link.as_deref()
                        .filter(|l| !l.is_empty())
                        .map(|l| (i + 1, l))
                }));
            } else {
                print_links(identity.assigned_form_links());
            }
            Ok(())
        }

        ResultsCommands::Fetch {
            form,
            csv,
            pdf,
            out,
        } => {
            let mut screen = ResultsScreen::for_identity(identity);

            let http = reqwest::Client::builder()
                .build()
                .map_err(ClientError::from)?;
            screen.select_form(&http, form).await;
            if let Some(message) = screen.error() {
                return Err(CliError::backend(message));
            }

            print_grid(screen.grid());

            let dir = out.unwrap_or_else(|| config.storage.export_dir());
            if csv {
                if let Some(path) = screen.export_csv(&dir)? {
                    println!("CSV: {}", path.display());
                }
            }
            if pdf {
                if let Some(path) = screen.export_pdf(&dir)? {
                    println!("PDF: {}", path.display());
                }
            }
            Ok(())
        }
    }
}

fn print_links<'a>(links: impl Iterator<Item = (usize, &'a str)>) {
    let mut any = false;
    for (slot, link) in links {
        println!("formulario {slot}: {link}");
        any = true;
    }
    if !any {
        println!("No hay formularios asignados.");
    }
}

/// Print the grid with columns sized to their widest cell. Ragged rows print
/// exactly the cells they have.
fn print_grid(grid: &TabularGrid) {
    let mut widths = vec![0usize; grid.column_count()];
    let rendered: Vec<Vec<String>> = grid
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    for row in &rendered {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for (n, row) in rendered.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
        if n == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            println!("{}", rule.join("  ").trim_end());
        }
    }
}

fn dashboard(identity: &Identity) {
    match identity.powerbi_link.as_deref().filter(|l| !l.is_empty()) {
        Some(link) => {
            println!("Panel de Power BI:");
            println!("{link}");
        }
        None => {
            println!("No se encontró un link de Power BI para este usuario.");
            println!("Usuario logeado: {}", identity.display_name());
            println!("ID del usuario: {}", identity.id);
        }
    }
}

fn blog() {
    println!("Rotación de Personal en Colombia - 2025");
    println!(
        "Comprendiendo causas, consecuencias y estrategias para reducirla en el contexto colombiano actual"
    );
    println!();
    println!("Índice de rotación por sector (%):");
    for (sector, index) in [
        ("BPO", 28),
        ("Tecnología", 22),
        ("Retail", 18),
        ("Salud", 12),
        ("Educación", 9),
    ] {
        println!("  {sector:<12} {index:>3}");
    }
}

fn confirm(prompt: &str) -> CliResult<bool> {
    print!("{prompt}");
    std::io::stdout()
        .flush()
        .map_err(|e| CliError::io("could not flush stdout", e))?;

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(|e| CliError::io("could not read stdin", e))?;

    let answer = answer.trim().to_lowercase();
    Ok(matches!(answer.as_str(), "y" | "yes" | "s" | "si" | "sí"))
}
