//! Contact form and newsletter input state
//!
//! Fields accept text but submitting does nothing beyond a debug log; there
//! is no backend to send enquiries to.

use aspire_core::prelude::*;
use aspire_core::ServiceOption;

/// Focusable controls in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Service,
    Message,
    Submit,
    Newsletter,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Service,
        FormField::Message,
        FormField::Submit,
        FormField::Newsletter,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// Whether typed characters go into this field
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::Email | FormField::Message | FormField::Newsletter
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Service => "Service Needed",
            FormField::Message => "Message",
            FormField::Submit => "Submit Enquiry",
            FormField::Newsletter => "Newsletter",
        }
    }
}

/// Enquiry form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: ServiceOption,
    pub message: String,
}

impl ContactForm {
    /// Accept the enquiry. Nothing is sent anywhere.
    pub fn submit(&self) {
        debug!(
            service = self.service.label(),
            "Contact form submitted (no backend)"
        );
    }
}

/// Footer newsletter signup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
}

impl NewsletterForm {
    pub fn join(&self) {
        debug!("Newsletter join pressed (no backend)");
    }
}

/// Focus plus the contents of both forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub focus: Option<FormField>,
    pub contact: ContactForm,
    pub newsletter: NewsletterForm,
}

impl FormState {
    /// Move focus forward; entering the form lands on the first field
    pub fn focus_next(&mut self) {
        self.focus = Some(match self.focus {
            Some(field) => field.next(),
            None => FormField::Name,
        });
    }

    /// Move focus backward; entering the form lands on the last control
    pub fn focus_previous(&mut self) {
        self.focus = Some(match self.focus {
            Some(field) => field.previous(),
            None => FormField::Newsletter,
        });
    }

    pub fn leave(&mut self) {
        self.focus = None;
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus? {
            FormField::Name => Some(&mut self.contact.name),
            FormField::Email => Some(&mut self.contact.email),
            FormField::Message => Some(&mut self.contact.message),
            FormField::Newsletter => Some(&mut self.newsletter.email),
            FormField::Service | FormField::Submit => None,
        }
    }

    pub fn input(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn cycle_option(&mut self, forward: bool) {
        if self.focus != Some(FormField::Service) {
            return;
        }
        let service = &mut self.contact.service;
        *service = if forward {
            service.next()
        } else {
            service.previous()
        };
    }

    /// Enter on the focused control
    pub fn activate(&mut self) {
        match self.focus {
            Some(FormField::Submit) => self.contact.submit(),
            Some(FormField::Newsletter) => self.newsletter.join(),
            Some(FormField::Service) => self.cycle_option(true),
            Some(field) => self.focus = Some(field.next()),
            None => {}
        }
    }
}
