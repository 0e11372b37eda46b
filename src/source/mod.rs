//! Repository reference input handling
//!
//! This module turns raw form input into repository references:
//! - GitHub URLs and shorthand: `owner/name`, `https://github.com/owner/name(.git)`
//! - Package links: a label plus an absolute download URL
//!
//! ## Module Organization
//!
//! - `url_parser.rs`: source-control URL normalization into owner/name
//! - `validation.rs`: required-field and well-formed-URL rules for package links

pub mod url_parser;
pub mod validation;

pub use url_parser::{RepoSlug, parse_source_control_url};
pub use validation::{PackageLink, validate_package_link};
