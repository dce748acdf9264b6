//! Display categories for news items
//!
//! The upstream API tags news with a `type` field that is wider than what the
//! site shows. Every upstream type collapses into one of four display
//! categories, and unknown future types fall back to `Announcement` so a new
//! upstream tag never breaks rendering.

use serde::{Deserialize, Serialize};

/// Display-facing classification of a news item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Update,
    Event,
    Maintenance,
    Announcement,
}

impl NewsCategory {
    /// Map an upstream `type` value to a display category
    ///
    /// Total over any input: `reset` is shown as maintenance (a server reset
    /// is downtime from the player's point of view) and everything
    /// unrecognized becomes an announcement.
    pub fn from_upstream_type(news_type: &str) -> Self {
        match news_type {
            "update" => NewsCategory::Update,
            "event" => NewsCategory::Event,
            "maintenance" => NewsCategory::Maintenance,
            "reset" => NewsCategory::Maintenance,
            "info" => NewsCategory::Announcement,
            _ => NewsCategory::Announcement,
        }
    }

    /// Identifier used in serialized payloads and filter query values
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Update => "update",
            NewsCategory::Event => "event",
            NewsCategory::Maintenance => "maintenance",
            NewsCategory::Announcement => "announcement",
        }
    }

    /// Presentation configuration for this category
    pub fn style(&self) -> CategoryStyle {
        match self {
            NewsCategory::Update => CategoryStyle {
                label: "Mise à jour",
                color: "bg-green-600",
                text_color: "text-green-400",
                bg_color: "bg-green-600/10",
                border_color: "border-green-600/30",
            },
            NewsCategory::Event => CategoryStyle {
                label: "Événement",
                color: "bg-purple-600",
                text_color: "text-purple-400",
                bg_color: "bg-purple-600/10",
                border_color: "border-purple-600/30",
            },
            NewsCategory::Maintenance => CategoryStyle {
                label: "Maintenance",
                color: "bg-orange-600",
                text_color: "text-orange-400",
                bg_color: "bg-orange-600/10",
                border_color: "border-orange-600/30",
            },
            NewsCategory::Announcement => CategoryStyle {
                label: "Annonce",
                color: "bg-blue-600",
                text_color: "text-blue-400",
                bg_color: "bg-blue-600/10",
                border_color: "border-blue-600/30",
            },
        }
    }

    /// French label shown on category badges
    pub fn label(&self) -> &'static str {
        self.style().label
    }
}

impl std::fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation tokens for a display category
///
/// Labels are French, colors are the Tailwind classes the site theme uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub text_color: &'static str,
    pub bg_color: &'static str,
    pub border_color: &'static str,
}
