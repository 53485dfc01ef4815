use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use jobscout_cli::OutputFormat;
use jobscout_cli::commands::{self, search::SearchArgs};

#[derive(Parser)]
#[command(name = "jobscout")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Search job listings from the command line with a headless browser",
    long_about = "jobscout opens a job site in headless Chrome, pulls out the top results \
                  (title, company, salary and apply link), prints them, and can export them as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for jobs by title or skill
    Search(SearchArgs),

    /// Generate shell completion scripts
    #[command(long_about = "Generate shell completion scripts for jobscout.

SUPPORTED SHELLS:
    bash, zsh, fish, powershell, elvish

INSTALLATION:
    bash:  jobscout completion --shell bash >> ~/.bashrc
    zsh:   jobscout completion --shell zsh > ~/.zfunc/_jobscout
           (add `fpath=(~/.zfunc $fpath)` to ~/.zshrc before compinit)
    fish:  jobscout completion --shell fish > ~/.config/fish/completions/jobscout.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(short, long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, cli.format),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose {
        "warn,jobscout_cli=debug,jobscout_core=debug,jobscout_browser=debug"
    } else {
        "warn,chromiumoxide=off,jobscout_cli=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
