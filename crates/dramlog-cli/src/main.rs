use clap::{ArgAction, Parser, Subcommand};
use commands::{add, card, clear, config, delete, draft, list, share, show, transfer, update};
use std::path::PathBuf;

mod card_render;
mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "dramlog")]
#[command(about = "dramlog - a local-first whisky tasting journal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new review
    #[command(long_about = "Add a new tasting review from a JSON payload. Reads the review (without id/createdAt) from the given file, or from stdin when no file is passed. Clears any pending draft on success.")]
    Add {
        /// JSON payload file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// List all reviews, newest first
    List,
    /// Show one review as a tasting card
    Show {
        /// Review id (a unique prefix is enough)
        id: String,

        /// Display language for tags, colors and countries
        #[arg(long)]
        lang: Option<dramlog_models::Lang>,
    },
    /// Replace a review's content, keeping id and creation date
    Update {
        id: String,

        /// JSON payload file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Delete a review
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Manage the single draft slot
    Draft {
        #[command(subcommand)]
        cmd: DraftCommands,
    },
    /// Share reviews as URL-safe tokens
    Share {
        #[command(subcommand)]
        cmd: ShareCommands,
    },
    /// Export the whole collection as JSON
    Export {
        /// Destination file (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import a collection, replacing the current one
    #[command(long_about = "Import a JSON collection file. This replaces the entire current collection - there is no merge. Legacy flavor lists (plain id strings) are normalized on the way in.")]
    Import {
        file: PathBuf,

        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Write a review's tasting card to a text file
    Card {
        id: String,

        /// Destination file (defaults to a name derived from the whisky)
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long)]
        lang: Option<dramlog_models::Lang>,
    },
    /// View or change settings
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
    /// Clear stored data
    Clear {
        /// Clear reviews and the draft
        #[arg(long, action = ArgAction::SetTrue)]
        all: bool,

        /// Clear the review collection
        #[arg(long, action = ArgAction::SetTrue)]
        reviews: bool,

        /// Clear the pending draft
        #[arg(long, action = ArgAction::SetTrue)]
        draft: bool,
    },
}

#[derive(Subcommand)]
enum DraftCommands {
    /// Save a partial review as the draft (replaces any existing draft)
    Save {
        /// JSON payload file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Print the pending draft
    Show,
    /// Discard the pending draft
    Clear,
}

#[derive(Subcommand)]
enum ShareCommands {
    /// Encode a review into a share token
    Encode {
        /// Review id; use --file to encode a payload that isn't stored
        id: Option<String>,

        /// Encode a JSON payload file instead of a stored review
        #[arg(long, conflicts_with = "id")]
        file: Option<PathBuf>,
    },
    /// Decode a share token
    Decode {
        token: String,

        /// Save the decoded review into the collection
        #[arg(long, action = ArgAction::SetTrue)]
        save: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current settings
    Show,
    /// Get or set the display language (ko / en)
    Lang { value: Option<dramlog_models::Lang> },
    /// Get or set the default reviewer name
    Reviewer { name: Option<String> },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Add { file } => add::run_add(file, &output),
        Commands::List => list::run_list(&output),
        Commands::Show { id, lang } => show::run_show(&id, lang, &output),
        Commands::Update { id, file } => update::run_update(&id, file, &output),
        Commands::Delete { id, yes } => delete::run_delete(&id, yes, &output),
        Commands::Draft { cmd } => match cmd {
            DraftCommands::Save { file } => draft::run_save(file, &output),
            DraftCommands::Show => draft::run_show(&output),
            DraftCommands::Clear => draft::run_clear(&output),
        },
        Commands::Share { cmd } => match cmd {
            ShareCommands::Encode { id, file } => share::run_encode(id, file, &output),
            ShareCommands::Decode { token, save } => share::run_decode(&token, save, &output),
        },
        Commands::Export { out } => transfer::run_export(out, &output),
        Commands::Import { file, yes } => transfer::run_import(&file, yes, &output),
        Commands::Card { id, out, lang } => card::run_card(&id, out, lang, &output),
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            match cmd {
                ConfigCommands::Show => config::run_show(&output),
                ConfigCommands::Lang { value } => config::run_lang(value, &output),
                ConfigCommands::Reviewer { name } => config::run_reviewer(name, &output),
            }
        }
        Commands::Clear { all, reviews, draft } => clear::run_clear(all, reviews, draft, &output),
    }
}
