//! Package link validation
//!
//! Local, synchronous checks only. The URL is never fetched here, so a
//! well-formed link to an unreachable host still validates.

use url::Url;

use crate::error::{Result, SkillReposError};

/// Trimmed name and URL of a package link that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLink {
    pub name: String,
    pub url: String,
}

/// Parse `input` as an absolute URL with a scheme and an authority.
pub fn parse_absolute_url(input: &str) -> Option<Url> {
    Url::parse(input.trim()).ok().filter(Url::has_host)
}

/// Validate the package-link form fields.
///
/// Rules are checked in order and the first failure wins: name present,
/// URL present, URL well-formed.
pub fn validate_package_link(name: &str, url: &str) -> Result<PackageLink> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SkillReposError::NameRequired);
    }

    let url = url.trim();
    if url.is_empty() {
        return Err(SkillReposError::UrlRequired);
    }

    if parse_absolute_url(url).is_none() {
        return Err(SkillReposError::InvalidUrl {
            url: url.to_string(),
        });
    }

    Ok(PackageLink {
        name: name.to_string(),
        url: url.to_string(),
    })
}
