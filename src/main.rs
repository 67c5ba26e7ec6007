use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use okbo::{cli, config, ebay::browse, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP proxy server
    Serve,

    /// Print sold/completed listing links for a card description
    SoldLinks(SoldLinksOptions),

    /// Search the eBay Browse API
    Search(SearchOptions),

    /// Fetch an application token
    Token(TokenOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SoldLinksOptions {
    /// Card description, e.g. 2015 Topps Eli Manning autograph /99
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Open the first core link in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search keywords
    #[clap(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Number of results to request
    #[clap(long, default_value_t = browse::DEFAULT_LIMIT)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct TokenOptions {
    /// Save the token to the local .env file
    #[clap(long)]
    pub save: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve().await,
        Command::SoldLinks(opt) => cli::sold_links(opt.query, opt.open).await,
        Command::Search(opt) => cli::search(opt.query, opt.limit).await,
        Command::Token(opt) => cli::token(opt.save).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
