//! Fixed page content
//!
//! Everything the page shows is defined here as `'static` data. Sections
//! render these lists in order, one entry per card.

use crate::types::{Anchor, IconRef};

/// Firm name as shown in the header and footer
pub const FIRM_NAME: &str = "Aspire UK Advisers";

/// A service card in the services grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconRef,
    pub tags: &'static [&'static str],
}

/// A client quote shown in the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

impl Testimonial {
    /// "Role, Company" attribution line
    pub fn attribution(&self) -> String {
        format!("{}, {}", self.role, self.company)
    }
}

/// A "why choose us" card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reason {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconRef,
}

/// A navigation link with its in-page target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: Anchor,
}

/// A highlighted point in the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline figure in the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One way to reach the firm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: IconRef,
}

/// A titled column of footer links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

/// Choices offered by the contact form's "Service Needed" field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceOption {
    #[default]
    StrategicAdvisory,
    AccountingBookkeeping,
    TaxPlanning,
    PayrollManagement,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 4] = [
        ServiceOption::StrategicAdvisory,
        ServiceOption::AccountingBookkeeping,
        ServiceOption::TaxPlanning,
        ServiceOption::PayrollManagement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceOption::StrategicAdvisory => "Strategic Advisory",
            ServiceOption::AccountingBookkeeping => "Accounting & Bookkeeping",
            ServiceOption::TaxPlanning => "Tax Planning",
            ServiceOption::PayrollManagement => "Payroll Management",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|o| *o == self).unwrap_or(0)
    }

    /// Next option, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous option, wrapping around
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Services",
        anchor: Anchor::Services,
    },
    NavLink {
        label: "About Us",
        anchor: Anchor::About,
    },
    NavLink {
        label: "Why Us",
        anchor: Anchor::WhyUs,
    },
    NavLink {
        label: "Contact",
        anchor: Anchor::Contact,
    },
];

/// Call-to-action appended to the mobile menu
pub const MENU_CTA: NavLink = NavLink {
    label: "Contact Us Now",
    anchor: Anchor::Contact,
};

/// Call-to-action in the desktop header
pub const HEADER_CTA: NavLink = NavLink {
    label: "Book Consultation",
    anchor: Anchor::Contact,
};

pub const HERO_BADGE: &str = "Professional UK Advisory Services";
pub const HERO_HEADLINE: [&str; 2] = ["Financial Expertise", "That Inspires Growth."];
pub const HERO_LEAD: &str = "Based in the UK, we provide elite accounting and strategic advisory \
to help individuals and businesses thrive in a complex economy.";
pub const HERO_ACTIONS: [NavLink; 2] = [
    NavLink {
        label: "Our Solutions",
        anchor: Anchor::Services,
    },
    NavLink {
        label: "Consult an Expert",
        anchor: Anchor::Contact,
    },
];

pub const SERVICES_KICKER: &str = "Professional Expertise";
pub const SERVICES_HEADING: &str = "Financial Mastery Simplified.";
pub const SERVICES_LEAD: &str = "Tailored solutions that provide clarity and fuel sustainable \
growth for your unique business needs.";

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Accounting & Bookkeeping",
        description: "Beyond standard recording; we provide detailed insights into your cash \
flow and financial stability.",
        icon: IconRef::Calculator,
        tags: &["Corporate", "Real-time"],
    },
    Service {
        title: "Tax & Compliance",
        description: "Strategic tax positioning to ensure compliance while identifying \
opportunities for significant savings.",
        icon: IconRef::FileText,
        tags: &["HMRC", "Strategic"],
    },
    Service {
        title: "Payroll & CIS",
        description: "Comprehensive payroll management for your workforce, including \
end-to-end CIS reporting.",
        icon: IconRef::Users,
        tags: &["Secure", "Accurate"],
    },
    Service {
        title: "Strategic Advisory",
        description: "Expert guidance on scaling operations, securing funding, and navigating \
market complexities.",
        icon: IconRef::TrendingUp,
        tags: &["Expansion", "Advisory"],
    },
    Service {
        title: "VAT Services",
        description: "We handle all aspects of VAT registration and returns, keeping your \
business fully compliant.",
        icon: IconRef::BarChart,
        tags: &["VAT Returns", "Audit"],
    },
    Service {
        title: "Company Secretarial",
        description: "Managing statutory filings and administrative governance with precision \
and reliability.",
        icon: IconRef::PieChart,
        tags: &["Filing", "Governance"],
    },
];

pub const ABOUT_KICKER: &str = "Our Firm";
pub const ABOUT_HEADING: &str = "Built on Integrity. Focused on Excellence.";
pub const ABOUT_LEAD: &str = "At Aspire UK Advisers, we provide a proactive and personal \
approach to accounting. We treat your business with the same care as our own.";
pub const ABOUT_BADGES: [(&str, &str); 2] = [
    ("100%", "Compliance"),
    ("Elite Partner", "HMRC Certified"),
];

pub const ABOUT_PILLARS: [Pillar; 2] = [
    Pillar {
        title: "Tailored Strategic Insight",
        description: "Bespoke roadmaps built to solve the specific financial challenges of \
your industry.",
    },
    Pillar {
        title: "Transparent Partnership",
        description: "No hidden fees, no complex jargon. Just clear, honest advice that drives \
value.",
    },
];

pub const ABOUT_STATS: [Stat; 3] = [
    Stat {
        value: "15+",
        label: "Years Experience",
    },
    Stat {
        value: "500+",
        label: "Satisfied Clients",
    },
    Stat {
        value: "£12M+",
        label: "Tax Saved",
    },
];

pub const WHY_US_KICKER: &str = "Testimonials";
pub const WHY_US_HEADING: &str = "Trust Built Through Results.";

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Aspire UK Advisers completely transformed how we view our company finances. \
Their proactive advice saved us thousands in our first year.",
        author: "David Miller",
        role: "CEO",
        company: "Miller Tech Solutions",
    },
    Testimonial {
        quote: "The level of detail and personal attention we receive is unmatched. They feel \
like an internal part of our team rather than an external firm.",
        author: "Sarah Jenkins",
        role: "Founder",
        company: "Green Horizon Ltd",
    },
    Testimonial {
        quote: "Navigating HMRC compliance used to be a nightmare until we partnered with \
Aspire. Reliable, fast, and incredibly professional.",
        author: "James Thompson",
        role: "Director",
        company: "BuildRight Construction",
    },
];

pub const REASONS: [Reason; 4] = [
    Reason {
        title: "Proactive Advisory",
        description: "We help you anticipate shifts in tax law and market trends, keeping your \
business resilient.",
        icon: IconRef::TrendingUp,
    },
    Reason {
        title: "Strict Accuracy",
        description: "We maintain the highest standards of precision across all accounts and \
filings.",
        icon: IconRef::ShieldCheck,
    },
    Reason {
        title: "Expert Support",
        description: "Access to high-level advisory and dedicated support whenever you need it.",
        icon: IconRef::Users,
    },
    Reason {
        title: "On-Time Filings",
        description: "Never miss a deadline. Our systems ensure your compliance requirements are \
met promptly.",
        icon: IconRef::Clock,
    },
];

pub const CONTACT_HEADING: &str = "Contact Our Experts.";
pub const CONTACT_LEAD: &str = "Ready to optimize your financial operations? Our team is \
standing by to assist you.";

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        label: "Call Us",
        value: "+44 (0) 20 7000 0000",
        icon: IconRef::Phone,
    },
    ContactDetail {
        label: "Email",
        value: "info@aspireukadvisers.co.uk",
        icon: IconRef::Mail,
    },
    ContactDetail {
        label: "London Office",
        value: "City of London, EC1, UK",
        icon: IconRef::MapPin,
    },
];

pub const FOOTER_BLURB: &str = "A premier accounting and advisory firm based in London, \
serving clients nationwide with precision and strategic insight.";
pub const NEWSLETTER_LEAD: &str = "Subscribe for the latest UK tax and finance insights.";

pub const FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        title: "Services",
        links: &[
            NavLink {
                label: "Tax Advisory",
                anchor: Anchor::Services,
            },
            NavLink {
                label: "Strategic Growth",
                anchor: Anchor::Services,
            },
            NavLink {
                label: "Cloud Accounting",
                anchor: Anchor::Services,
            },
            NavLink {
                label: "Payroll Solutions",
                anchor: Anchor::Services,
            },
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            NavLink {
                label: "About Aspire",
                anchor: Anchor::About,
            },
            NavLink {
                label: "Why Choose Us",
                anchor: Anchor::WhyUs,
            },
            NavLink {
                label: "Contact Us",
                anchor: Anchor::Contact,
            },
            NavLink {
                label: "Privacy Policy",
                anchor: Anchor::Placeholder,
            },
        ],
    },
];

pub const LEGAL_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Privacy",
        anchor: Anchor::Placeholder,
    },
    NavLink {
        label: "Terms",
        anchor: Anchor::Placeholder,
    },
    NavLink {
        label: "Cookies",
        anchor: Anchor::Placeholder,
    },
];

/// Footer copyright line for the given year
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {FIRM_NAME}. Registered in England & Wales.")
}
