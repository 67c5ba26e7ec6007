//! OkBo eBay Tools Library
//!
//! This library backs a small HTTP proxy and CLI in front of the eBay Browse
//! API. It keeps a cached application token alive for outbound search calls
//! and turns free-text card descriptions into sold/completed listing links,
//! a search surface the public API does not expose.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the proxy server
//! - `cli` - Command-line interface implementations
//! - `config` - Environment loading and configuration accessors
//! - `ebay` - eBay token, browse and sold-link integration
//! - `management` - Application token lifecycle
//! - `server` - Router assembly and listener
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use okbo::ebay::{links::SoldLinks, variations::build_variations};
//!
//! for variant in build_variations("2015 Topps Eli Manning autograph /99") {
//!     println!("{}", SoldLinks::for_query(&variant).core);
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod ebay;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for CLI-level operations that may fail.
///
/// Domain code returns [`ebay::EbayError`]; the CLI glue collapses everything
/// into a boxed error that stays `Send + Sync` across await points.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching application token...");
/// info!("Built {} variations", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for fatal CLI failures. The server never calls this; request
/// failures travel back to the client as JSON instead.
///
/// # Example
///
/// ```
/// error!("Missing EBAY_PROD_CLIENT_ID in environment variables");
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
