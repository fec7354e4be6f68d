use clap::{Args, Parser, Subcommand};
use intake_core::{
    config::output_dir_from_env_value,
    constants::SAMPLE_FILENAME,
    persistence::{load_record, save_record},
    run_session,
    sample::sample_record,
    summary::render_report,
    IntakeConfig, IoTerminal, SessionOutcome,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Medical office intake form")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    collect: CollectArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct CollectArgs {
    /// Save to this file instead of a generated medical_data_<first>_<last>_<stamp>.json
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Directory for generated filenames (default: $INTAKE_OUTPUT_DIR or the current directory)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the intake form interactively (the default)
    Collect(CollectArgs),
    /// Print the demonstration record and save it
    Sample {
        /// Where to save the sample record
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print a saved intake record
    Show {
        /// Path to a saved intake JSON file
        file: PathBuf,
    },
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intake_core=warn".parse()?)
                .add_directive("intake=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn collect(args: CollectArgs) -> anyhow::Result<()> {
    let output_dir = args.output_dir.unwrap_or_else(|| {
        output_dir_from_env_value(std::env::var("INTAKE_OUTPUT_DIR").ok())
    });
    let cfg = IntakeConfig::new(output_dir, args.output)?;

    // A record in progress is only held in memory, and a save is renamed into place whole, so
    // leaving here never leaves a partial intake file behind.
    ctrlc::set_handler(|| {
        println!("\n\nSession cancelled by user.");
        std::process::exit(0);
    })?;

    let mut term = IoTerminal::stdio();
    match run_session(&mut term, &cfg, now) {
        Ok(SessionOutcome::Saved(path)) => {
            tracing::info!(path = %path.display(), "session finished with saved record");
            Ok(())
        }
        Ok(SessionOutcome::Discarded) => Ok(()),
        Err(e) if e.is_cancellation() => {
            println!("\n\nSession cancelled by user.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("failed to initialise logging: {e}");
    }

    let cli = Cli::parse();
    let result = match cli.command {
        None => collect(cli.collect),
        Some(Commands::Collect(args)) => collect(args),
        Some(Commands::Sample { output }) => {
            let output = output.unwrap_or_else(|| PathBuf::from(SAMPLE_FILENAME));
            sample_record(now())
                .and_then(|record| {
                    println!("{}", render_report(&record));
                    save_record(&record, &output)
                })
                .map(|()| println!("\nSample data saved to: {}", output.display()))
                .map_err(anyhow::Error::from)
        }
        Some(Commands::Show { file }) => load_record(&file)
            .map(|record| println!("{}", render_report(&record)))
            .map_err(anyhow::Error::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "intake failed");
            eprintln!("\nAn error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}
