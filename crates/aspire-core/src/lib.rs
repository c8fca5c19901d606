//! # aspire-core - Core Domain Types
//!
//! Foundation crate for the Aspire landing page. Provides domain types, the
//! fixed page content, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ThemeMode`] - Light/dark visual mode
//! - [`Anchor`] - In-page navigation targets (`#services`, `#about`, ...)
//! - [`IconRef`] - Symbolic icon identifiers resolved by the renderer
//!
//! ### Page Content (`content`)
//! - [`Service`], [`Testimonial`], [`Reason`], [`NavLink`] - Fixed content records
//! - [`SERVICES`], [`TESTIMONIALS`], [`REASONS`], [`NAV_LINKS`] - The content itself
//! - [`ServiceOption`] - Enumerated choices of the contact form's service field
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use aspire_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Aspire crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{
    ContactDetail, FooterColumn, NavLink, Pillar, Reason, Service, ServiceOption, Stat,
    Testimonial, ABOUT_PILLARS, ABOUT_STATS, CONTACT_DETAILS, FOOTER_COLUMNS, LEGAL_LINKS,
    NAV_LINKS, REASONS, SERVICES, TESTIMONIALS,
};
pub use error::{Error, Result, ResultExt};
pub use types::{Anchor, IconRef, ThemeMode};
