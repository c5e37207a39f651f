// Modules are documented here at their declaration rather than with `//!` comments inside
// each module file, so reading this file top to bottom gives a guided tour of the crate.

/// The validated, process-lifetime configuration of the site and the loader that produces it.
///
/// See `.env.sample` in the repository for the variables it expects.
pub mod config;

/// Turns the datastore credentials from [`config::Config`] into [`sqlx`] connection options.
///
/// [`sqlx`]: https://github.com/launchbadge/sqlx
pub mod db;

/// Renders the "published" line shown next to each blog post, e.g. `March 1, 2021 (2y ago)`.
pub mod date;

/// The error returned when the environment doesn't satisfy [`config::Config`].
pub mod error;
