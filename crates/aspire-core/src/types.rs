//! Core domain types for the landing page

use serde::{Deserialize, Serialize};

/// Global visual mode of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Value written to the preference store
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme mode: {other:?}")),
        }
    }
}

/// In-page navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Services,
    About,
    WhyUs,
    Contact,
    /// Empty `#` link. Following it must not move the page.
    Placeholder,
}

impl Anchor {
    /// Sections reachable by a real jump, in page order
    pub const SECTIONS: [Anchor; 4] = [
        Anchor::Services,
        Anchor::About,
        Anchor::WhyUs,
        Anchor::Contact,
    ];

    pub fn href(self) -> &'static str {
        match self {
            Anchor::Services => "#services",
            Anchor::About => "#about",
            Anchor::WhyUs => "#why-us",
            Anchor::Contact => "#contact",
            Anchor::Placeholder => "#",
        }
    }

    pub fn from_href(href: &str) -> Option<Self> {
        match href {
            "#services" => Some(Anchor::Services),
            "#about" => Some(Anchor::About),
            "#why-us" => Some(Anchor::WhyUs),
            "#contact" => Some(Anchor::Contact),
            "#" => Some(Anchor::Placeholder),
            _ => None,
        }
    }

    pub fn is_placeholder(self) -> bool {
        self == Anchor::Placeholder
    }
}

/// Symbolic icon identifier
///
/// Content refers to icons by name only; the renderer decides which glyph to
/// draw for the active icon mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRef {
    Target,
    Calculator,
    FileText,
    Users,
    TrendingUp,
    BarChart,
    PieChart,
    ShieldCheck,
    Clock,
    CheckCircle,
    Phone,
    Mail,
    MapPin,
    Sun,
    Moon,
    Menu,
    Close,
    ChevronLeft,
    ChevronRight,
    ArrowRight,
}
