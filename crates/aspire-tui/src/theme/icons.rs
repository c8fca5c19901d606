//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves [`IconRef`]s at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use aspire_app::config::IconMode;
use aspire_core::IconRef;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn get(&self, icon: IconRef) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => nerd_font(icon),
            IconMode::Unicode => unicode(icon),
        }
    }

    /// Icon for the theme toggle: shows the mode a press switches to
    pub fn theme_toggle(&self, dark: bool) -> &'static str {
        if dark {
            self.get(IconRef::Sun)
        } else {
            self.get(IconRef::Moon)
        }
    }
}

fn nerd_font(icon: IconRef) -> &'static str {
    match icon {
        IconRef::Target => "\u{f140}",       // nf-fa-bullseye
        IconRef::Calculator => "\u{f1ec}",   // nf-fa-calculator
        IconRef::FileText => "\u{f15c}",     // nf-fa-file_text
        IconRef::Users => "\u{f0c0}",        // nf-fa-users
        IconRef::TrendingUp => "\u{f201}",   // nf-fa-line_chart
        IconRef::BarChart => "\u{f080}",     // nf-fa-bar_chart
        IconRef::PieChart => "\u{f200}",     // nf-fa-pie_chart
        IconRef::ShieldCheck => "\u{f132}",  // nf-fa-shield
        IconRef::Clock => "\u{f017}",        // nf-fa-clock_o
        IconRef::CheckCircle => "\u{f058}",  // nf-fa-check_circle
        IconRef::Phone => "\u{f095}",        // nf-fa-phone
        IconRef::Mail => "\u{f0e0}",         // nf-fa-envelope
        IconRef::MapPin => "\u{f041}",       // nf-fa-map_marker
        IconRef::Sun => "\u{f185}",          // nf-fa-sun_o
        IconRef::Moon => "\u{f186}",         // nf-fa-moon_o
        IconRef::Menu => "\u{f0c9}",         // nf-fa-bars
        IconRef::Close => "\u{f00d}",        // nf-fa-times
        IconRef::ChevronLeft => "\u{f053}",  // nf-fa-chevron_left
        IconRef::ChevronRight => "\u{f054}", // nf-fa-chevron_right
        IconRef::ArrowRight => "\u{f061}",   // nf-fa-arrow_right
    }
}

fn unicode(icon: IconRef) -> &'static str {
    match icon {
        IconRef::Target => "\u{25ce}",       // ◎
        IconRef::Calculator => "\u{25a6}",   // ▦
        IconRef::FileText => "\u{25a4}",     // ▤
        IconRef::Users => "\u{263a}",        // ☺
        IconRef::TrendingUp => "\u{2197}",   // ↗
        IconRef::BarChart => "\u{25a5}",     // ▥
        IconRef::PieChart => "\u{25d4}",     // ◔
        IconRef::ShieldCheck => "\u{25c8}",  // ◈
        IconRef::Clock => "\u{25f7}",        // ◷
        IconRef::CheckCircle => "\u{2714}",  // ✔
        IconRef::Phone => "\u{260e}",        // ☎
        IconRef::Mail => "\u{2709}",         // ✉
        IconRef::MapPin => "\u{2316}",       // ⌖
        IconRef::Sun => "\u{2600}",          // ☀
        IconRef::Moon => "\u{263e}",         // ☾
        IconRef::Menu => "\u{2261}",         // ≡
        IconRef::Close => "\u{2715}",        // ✕
        IconRef::ChevronLeft => "\u{2039}",  // ‹
        IconRef::ChevronRight => "\u{203a}", // ›
        IconRef::ArrowRight => "\u{2192}",   // →
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_resolve_differently() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_eq!(unicode.get(IconRef::Phone), "☎");
        assert_ne!(unicode.get(IconRef::Phone), nerd.get(IconRef::Phone));
    }

    #[test]
    fn test_theme_toggle_icon() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.theme_toggle(false), "☾");
        assert_eq!(icons.theme_toggle(true), "☀");
    }

    #[test]
    fn test_unicode_icons_are_single_column() {
        use unicode_width::UnicodeWidthStr;

        let icons = IconSet::new(IconMode::Unicode);
        for icon in [
            IconRef::Calculator,
            IconRef::FileText,
            IconRef::TrendingUp,
            IconRef::ChevronLeft,
            IconRef::ArrowRight,
            IconRef::Menu,
        ] {
            assert_eq!(icons.get(icon).width(), 1, "{icon:?} should be one column");
        }
    }
}
