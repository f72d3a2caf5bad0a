//! noctivis-content — Static content catalog for the portfolio site.
//! Publications, projects, CV entries, and the researcher profile are
//! compile-time constants; nothing here is loaded or mutated at runtime.

pub mod catalog;
pub mod types;

pub use catalog::{EDUCATION, EXPERIENCE, PROFILE, PROJECTS, PUBLICATIONS};
pub use types::{Education, Experience, Profile, Project, Publication, PublicationLinks};
