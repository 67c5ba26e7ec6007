//! # CLI Module
//!
//! User-facing commands of the `okbo` binary. Each command loads what it
//! needs from the environment, reports progress through the colored console
//! macros and exits with code 1 on fatal errors.
//!
//! ## Commands
//!
//! - [`serve`] - run the HTTP proxy (`/health`, `/ebay/browse`,
//!   `/ebay/sold-links`, `/openapi.json`)
//! - [`sold_links`] - print sold/completed links for every query variation,
//!   optionally opening the first one in the browser
//! - [`search`] - one Browse API search rendered as a table
//! - [`token`] - fetch an application token and optionally save it to the
//!   local `.env` file
//!
//! ## Usage Patterns
//!
//! ```bash
//! okbo sold-links 2015 Topps Field Access Eli Manning autograph /99
//! okbo search eli manning rookie --limit 5
//! okbo token --save
//! okbo serve
//! ```

mod search;
mod serve;
mod sold_links;
mod token;

pub use search::search;
pub use serve::serve;
pub use sold_links::sold_links;
pub use token::TOKEN_ENV_KEY;
pub use token::token;
