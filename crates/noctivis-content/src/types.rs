//! Record shapes for the content catalog.
//!
//! Every field is a `'static` borrow so catalog entries can live in `const`
//! tables. All types serialize for the JSON read endpoints.

use serde::Serialize;

/// A peer-reviewed publication entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Publication {
    pub id: &'static str,
    pub title: &'static str,
    /// Author names in citation order.
    pub authors: &'static [&'static str],
    pub venue: &'static str,
    pub year: u16,
    pub links: PublicationLinks,
    /// Selected publications get a badge and accent styling.
    pub highlight: bool,
}

/// Optional external links attached to a publication.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PublicationLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<&'static str>,
}

/// A featured research project.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub problem: &'static str,
    pub method: &'static str,
    /// Key contributions, in display order.
    pub contributions: &'static [&'static str],
    pub image_url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<&'static str>,
}

/// An education entry for the CV section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'static str>,
}

/// A professional experience entry for the CV section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// The researcher profile. Drives the hero section and the assistant's
/// persona instruction, so it lives in the catalog rather than in templates.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    /// Full display name, e.g. "Nguyen A. T."
    pub name: &'static str,
    /// Salutation form used in prose and the assistant persona.
    pub short_name: &'static str,
    pub title: &'static str,
    /// Exactly the two research specializations named in the persona line.
    pub specializations: &'static [&'static str],
    pub tagline: &'static str,
    pub email: &'static str,
    pub scholar_url: &'static str,
    pub github_url: &'static str,
}
