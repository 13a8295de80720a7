#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use ronda::{
    io,
    model::MonthRef,
    render::render_month,
    session::Session,
    storage::JsonStorage,
};
use std::io::{BufRead, Write};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de ronde de quartier (état local JSON)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON d'état
    #[arg(long, global = true, default_value = "ronda.json")]
    state: String,

    /// Mois affiché (YYYY-MM), mois courant par défaut
    #[arg(long, global = true)]
    month: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un membre en fin de rotation
    Add { name: String },

    /// Retirer un membre (position à partir de 1)
    Remove {
        position: usize,
        /// Ne pas demander de confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Remonter un membre d'un cran
    Up { position: usize },

    /// Descendre un membre d'un cran
    Down { position: usize },

    /// Faire démarrer la rotation du mois affiché sur ce membre
    Start { position: usize },

    /// Lister les membres
    List,

    /// Afficher le calendrier du mois
    Show {
        /// Export CSV du planning (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Membre de garde aujourd'hui (ou à `--date YYYY-MM-DD`)
    Today {
        #[arg(long)]
        date: Option<String>,
    },

    /// Importer des membres depuis un CSV (header `name`)
    Import {
        #[arg(long)]
        csv: String,
    },

    /// Exporter l'état en JSON
    Export {
        #[arg(long)]
        out_json: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let today = Local::now().date_naive();
    let mut session = Session::open(JsonStorage::open(&cli.state), today);
    // Code 2 = avertissement (état illisible ou non sauvegardé)
    let mut code = 0;
    if let Some(warning) = session.load_warning() {
        eprintln!("warning: {warning}");
        code = 2;
    }
    if let Some(raw) = cli.month.as_deref() {
        session.show(parse_month(raw)?);
    }

    match cli.cmd {
        Commands::Add { name } => match session.add(&name) {
            Some(idx) => println!("{}. {}", idx + 1, session.state().members[idx]),
            None => println!("nothing to add (empty name)"),
        },
        Commands::Remove { position, yes } => {
            let request = session.request_removal(to_index(position)?)?;
            if !yes && !confirm(&request.to_string())? {
                println!("cancelled");
            } else {
                let removed = session.confirm_removal(&request)?;
                println!("removed {removed}");
            }
        }
        Commands::Up { position } => {
            session.move_up(to_index(position)?)?;
            print_members(&session);
        }
        Commands::Down { position } => {
            session.move_down(to_index(position)?)?;
            print_members(&session);
        }
        Commands::Start { position } => {
            let idx = to_index(position)?;
            session.set_start(idx)?;
            println!(
                "{} set as start (reference {})",
                session.state().members[idx],
                session.displayed()
            );
        }
        Commands::List => print_members(&session),
        Commands::Show { out_csv } => {
            let month = session.displayed();
            let schedule = session.schedule();
            println!("{}", render_month(month, &session.grid(), &schedule));
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, month, &schedule)?;
            }
        }
        Commands::Today { date } => {
            let date = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("invalid date: {raw}"))?,
                None => today,
            };
            match session.member_on(date) {
                Some(member) => println!("{date}: {member}"),
                None => println!("{date}: -"),
            }
        }
        Commands::Import { csv } => {
            let members = io::import_members_csv(csv)?;
            let added = session.add_all(members.iter().map(|m| m.name()));
            println!("imported {added} member(s)");
        }
        Commands::Export { out_json } => {
            io::export_state_json(out_json, session.state())?;
        }
    }

    if let Err(err) = session.flush() {
        eprintln!("warning: {err}");
        code = 2;
    }
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn parse_month(raw: &str) -> Result<MonthRef> {
    let date = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .with_context(|| format!("invalid month (expected YYYY-MM): {raw}"))?;
    Ok(MonthRef::containing(date))
}

fn to_index(position: usize) -> Result<usize> {
    if position == 0 {
        bail!("positions start at 1");
    }
    Ok(position - 1)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_members(session: &Session<JsonStorage>) {
    let state = session.state();
    for (idx, member) in state.members.iter().enumerate() {
        let marker = if idx == state.anchor_index { " *" } else { "" };
        println!("{}. {member}{marker}", idx + 1);
    }
    if !state.is_empty() {
        println!("* start of {}", state.anchor_period);
    }
}
