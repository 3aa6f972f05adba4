//! Template variants and the branches they map to
//!
//! The template repository keeps one branch per storage integration. Adding a
//! variant means adding an enum member and its arms below; nothing else in the
//! scaffolding flow changes.

use clap::ValueEnum;

/// Repository every project is scaffolded from
pub const TEMPLATE_REPOSITORY_URL: &str = "https://github.com/FIL-Builders/fil-frame.git";

/// Branch used when no variant was chosen
pub const DEFAULT_BRANCH: &str = "main";

/// A template flavor, one per branch of the template repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TemplateVariant {
    /// Storacha as the storage provider
    Storacha,
    /// Lighthouse as the storage provider
    Lighthouse,
    /// Akave as the storage provider
    Akave,
    /// Plain deal client
    #[default]
    #[value(name = "main", alias = "deal-client")]
    DealClient,
}

impl TemplateVariant {
    /// Every variant, in the order they are offered interactively
    pub const ALL: [TemplateVariant; 4] = [
        TemplateVariant::Storacha,
        TemplateVariant::Lighthouse,
        TemplateVariant::Akave,
        TemplateVariant::DealClient,
    ];

    /// Branch of the template repository holding this variant
    pub fn branch(self) -> &'static str {
        match self {
            TemplateVariant::Storacha => "storacha-nfts",
            TemplateVariant::Lighthouse => "lighthouse-nfts",
            TemplateVariant::Akave => "akave-integration",
            TemplateVariant::DealClient => DEFAULT_BRANCH,
        }
    }

    /// Human-readable name shown in the selection prompt
    pub fn label(self) -> &'static str {
        match self {
            TemplateVariant::Storacha => "Storacha",
            TemplateVariant::Lighthouse => "Lighthouse",
            TemplateVariant::Akave => "Akave",
            TemplateVariant::DealClient => "Deal Client (not recommended for beginners)",
        }
    }
}
