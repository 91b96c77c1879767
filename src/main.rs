use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use tokio_util::sync::CancellationToken;

use assistiq::config::{self, Config};
use assistiq::progress::{self, ProgressSimulator, StepStatus};
use assistiq::suggestion::{FormContext, SuggestionService};
use assistiq::triage;

#[derive(Parser)]
#[command(
    name = "assistiq",
    version,
    about = "Wrong-vs-right AI assistance patterns on the command line"
)]
struct Cli {
    /// Use an alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Suggest an improved value for a support-form field
    Suggest {
        /// Field to improve ("subject" or "description")
        #[arg(long)]
        field: String,

        /// Current field value
        #[arg(long)]
        value: String,

        /// Sibling subject value, if any
        #[arg(long)]
        subject: Option<String>,

        /// Sibling description value, if any
        #[arg(long)]
        description: Option<String>,

        /// Skip the simulated generation delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Route a support message to the assistant or a human specialist
    Triage {
        /// The user's message
        message: String,
    },

    /// Run the opaque and transparent loading patterns side by side
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };

    match cli.command {
        Command::Suggest {
            field,
            value,
            subject,
            description,
            no_delay,
        } => {
            let delay = if no_delay {
                Duration::ZERO
            } else {
                Duration::from_millis(cfg.suggestion.delay_ms)
            };
            let context = FormContext {
                subject,
                description,
            };
            let service = SuggestionService::new(delay);
            let suggestion = service.generate(&field, &value, &context).await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&suggestion)?);
            } else {
                println!("field:       {}", suggestion.field);
                println!("confidence:  {}", suggestion.confidence.label());
                println!("suggestion:  {}", suggestion.suggested_text);
                println!("explanation: {}", suggestion.explanation);
            }
        }

        Command::Triage { message } => {
            let outcome = triage::classify(&message);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.reply);
                if let Some(reason) = &outcome.handoff_reason {
                    println!("\n(handing off to a specialist: {reason})");
                }
                if let Some(followup) = &outcome.specialist_followup {
                    println!("\n{followup}");
                }
            }
        }

        Command::Demo => run_demo(&cfg).await?,
    }

    Ok(())
}

/// Drive the opaque and staged loading patterns concurrently
///
/// Both simulate the same amount of work; the difference is purely what the
/// user gets to see while waiting.
async fn run_demo(cfg: &Config) -> Result<()> {
    let steps = cfg.simulation.steps.clone();
    let total: Duration = steps.iter().map(|s| s.planned()).sum();
    let mut sim = ProgressSimulator::with_steps(steps)?;
    let cancel = CancellationToken::new();

    println!(
        "Running both loading patterns for the same {}ms of simulated work...\n",
        total.as_millis()
    );
    println!("[opaque]      working...");

    let opaque = progress::run_opaque(total, &cancel);
    let transparent = progress::runner::drive_with_progress(&mut sim, &cancel, |sim| {
        let snapshot = sim.steps_snapshot();
        match snapshot.iter().find(|s| s.status == StepStatus::Processing) {
            Some(step) => {
                println!(
                    "[transparent] {:>3}% | ~{}ms left | {}",
                    sim.progress_percentage(),
                    sim.time_remaining().as_millis(),
                    step.title
                );
                if let Some(reasoning) = &step.reasoning {
                    println!("[transparent]        {reasoning}");
                }
            }
            None => println!("[transparent] {:>3}% | all steps completed", sim.progress_percentage()),
        }
    });

    let (opaque_report, transparent_report) = tokio::join!(opaque, transparent);
    let opaque_report = opaque_report?;
    let transparent_report = transparent_report?;

    println!(
        "[opaque]      done after {}ms (and the user saw none of it)",
        opaque_report.total.as_millis()
    );
    println!(
        "\nSame {}ms wait; the transparent run showed every step as it happened.",
        transparent_report.total.as_millis()
    );
    Ok(())
}
