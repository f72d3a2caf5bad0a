//! Navigation model — page sections, active-section state, and the
//! fixed-header scroll rule shared with the client script.

use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Height of the fixed page header, in CSS pixels. Scroll targets sit this
/// far above a section's top so the header never covers its heading. The
/// rendered page embeds this value for the client-side scroll code.
pub const HEADER_HEIGHT: f64 = 80.0;

/// The page sections, in nav-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Home,
    Research,
    Publications,
    Projects,
    Cv,
    AiAssistant,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Research,
        Section::Publications,
        Section::Projects,
        Section::Cv,
        Section::AiAssistant,
    ];

    /// Stable DOM id of the section's anchor element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Research => "research",
            Section::Publications => "publications",
            Section::Projects => "projects",
            Section::Cv => "cv",
            Section::AiAssistant => "ai-assistant",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Research => "Research",
            Section::Publications => "Publications",
            Section::Projects => "Projects",
            Section::Cv => "CV",
            Section::AiAssistant => "AI Insights",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum NavError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
}

/// Where the viewport should scroll for a section: its top offset minus the
/// fixed header height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollTarget {
    pub section: Section,
    pub offset: f64,
}

/// Active-section tracking plus the section → render-position lookup.
/// Targets are registered once at render setup; navigating to an id no
/// section claims is an explicit error, not a silent no-op.
#[derive(Debug)]
pub struct NavState {
    active: Section,
    targets: HashMap<Section, f64>,
}

impl Default for NavState {
    fn default() -> Self {
        Self { active: Section::Home, targets: HashMap::new() }
    }
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a section's rendered top offset.
    pub fn register_target(&mut self, section: Section, top: f64) {
        self.targets.insert(section, top);
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Set the active section and compute where the viewport should scroll.
    /// A known section without a registered target updates the active state
    /// but skips the scroll.
    pub fn navigate_to(&mut self, id: &str) -> Result<Option<ScrollTarget>, NavError> {
        let section =
            Section::from_id(id).ok_or_else(|| NavError::UnknownSection(id.to_string()))?;
        self.active = section;
        Ok(self
            .targets
            .get(&section)
            .map(|top| ScrollTarget { section, offset: top - HEADER_HEIGHT }))
    }
}
