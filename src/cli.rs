//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// skillrepos - manage the repositories skills are discovered from
#[derive(Parser, Debug)]
#[command(
    name = "skillrepos",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage the repositories skill packages are discovered from",
    long_about = "skillrepos keeps the list of skill repositories: GitHub repositories \
                  (owner/name at a branch) and direct links to downloadable skill packages.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  skillrepos add github anthropics/skills\n    \
                  skillrepos add zip --name team-pack --url https://example.com/skills.zip\n    \
                  skillrepos list --skills discovered.json\n    \
                  skillrepos remove anthropics skills"
)]
pub struct Cli {
    /// Data directory (defaults to $SKILLREPOS_HOME or the platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a repository
    #[command(subcommand)]
    Add(AddCommand),

    /// Remove a registered repository
    Remove(RemoveArgs),

    /// List registered repositories with their skill counts
    List(ListArgs),

    /// Open a repository in the browser
    Open(OpenArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Kinds of repository that can be registered
#[derive(Subcommand, Debug)]
pub enum AddCommand {
    /// Register a GitHub repository
    #[command(after_help = "EXAMPLES:\n  \
                      Shorthand:\n    skillrepos add github anthropics/skills\n\n\
                      Full URL on a branch:\n    \
                      skillrepos add github https://github.com/anthropics/skills.git --branch dev")]
    Github(AddGithubArgs),

    /// Register a downloadable skill package
    #[command(after_help = "EXAMPLES:\n  \
                      skillrepos add zip --name team-pack --url https://example.com/skills.zip")]
    Zip(AddZipArgs),
}

/// Arguments for `add github`
#[derive(Args, Debug)]
pub struct AddGithubArgs {
    /// Repository URL or owner/name
    pub url: String,

    /// Branch to track (defaults to main)
    #[arg(long, short = 'b', default_value = "")]
    pub branch: String,
}

/// Arguments for `add zip`
#[derive(Args, Debug)]
pub struct AddZipArgs {
    /// Name shown for the package
    #[arg(long, default_value = "")]
    pub name: String,

    /// Absolute URL of the package archive
    #[arg(long, default_value = "")]
    pub url: String,
}

/// Arguments for the remove command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a GitHub repository:\n    skillrepos remove anthropics skills\n\n\
                  Remove a package link without confirmation:\n    skillrepos remove zip team-pack -y")]
pub struct RemoveArgs {
    /// Repository owner (`zip` for package links)
    pub owner: String,

    /// Repository name
    pub name: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the list command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List repositories:\n    skillrepos list\n\n\
                  Count skills from a discovery result:\n    skillrepos list --skills discovered.json\n\n\
                  Machine-readable output:\n    skillrepos list --json")]
pub struct ListArgs {
    /// JSON file with the discovered skills to count
    #[arg(long, value_name = "FILE")]
    pub skills: Option<PathBuf>,

    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,

    /// Print rows as JSON
    #[arg(long, conflicts_with = "detailed")]
    pub json: bool,
}

/// Arguments for the open command
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Repository owner (`zip` for package links)
    pub owner: String,

    /// Repository name
    pub name: String,
}

/// Arguments for completions command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skillrepos completions --shell bash > ~/.bash_completion.d/skillrepos\n\n\
                  Generate zsh completions:\n    skillrepos completions --shell zsh > ~/.zfunc/_skillrepos")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}
