//! Contact section: office details and the enquiry form

use aspire_app::{FormField, FormState};
use aspire_core::content::{CONTACT_HEADING, CONTACT_LEAD};
use aspire_core::{Anchor, IconRef, CONTACT_DETAILS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::text;
use crate::theme::styles;

use super::{render_section, section_heading, RenderContext, Section};

const FORM_MAX_WIDTH: usize = 72;
const MESSAGE_ROWS: usize = 3;
const CURSOR: &str = "\u{2588}";
const FOCUS_MARKER: &str = "\u{25b6} ";

/// Fields drawn inside the enquiry box, in focus order
const CONTACT_FIELDS: [FormField; 5] = [
    FormField::Name,
    FormField::Email,
    FormField::Service,
    FormField::Message,
    FormField::Submit,
];

pub(super) fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Name => "John Doe",
        FormField::Email => "john@company.com",
        FormField::Message => "Tell us about your needs...",
        FormField::Newsletter => "Email",
        FormField::Service | FormField::Submit => "",
    }
}

/// One-line text input: the tail of `value` plus a cursor when focused,
/// or a muted placeholder when empty and unfocused.
pub(super) fn input_line(
    ctx: &RenderContext,
    value: &str,
    placeholder: &str,
    focused: bool,
    width: usize,
) -> Line<'static> {
    let p = &ctx.palette;
    if value.is_empty() && !focused {
        return Line::from(Span::styled(
            text::truncate(placeholder, width),
            styles::text_muted(p).add_modifier(Modifier::ITALIC),
        ));
    }

    let room = if focused {
        width.saturating_sub(1)
    } else {
        width
    };
    let mut spans = vec![Span::styled(text::tail(value, room), styles::text(p))];
    if focused {
        spans.push(Span::styled(CURSOR, styles::accent(p)));
    }
    Line::from(spans)
}

pub struct Contact<'a> {
    ctx: RenderContext,
    form: &'a FormState,
}

impl<'a> Contact<'a> {
    pub fn new(ctx: RenderContext, form: &'a FormState) -> Self {
        Self { ctx, form }
    }

    fn is_focused(&self, field: FormField) -> bool {
        self.form.focus == Some(field)
    }

    fn details(&self, width: usize) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let mut lines = Vec::new();
        for detail in CONTACT_DETAILS {
            lines.push(Line::from(vec![
                Span::styled(self.ctx.icons.get(detail.icon), styles::accent(p)),
                Span::raw(" "),
                Span::styled(
                    detail.label.to_uppercase(),
                    styles::text_muted(p).add_modifier(Modifier::BOLD),
                ),
            ]));
            for line in text::wrap(detail.value, width.saturating_sub(2)) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(line, styles::text(p).add_modifier(Modifier::BOLD)),
                ]));
            }
            lines.push(Line::default());
        }
        lines
    }

    fn label(&self, field: FormField) -> Line<'static> {
        let p = &self.ctx.palette;
        if self.is_focused(field) {
            Line::from(vec![
                Span::styled(FOCUS_MARKER, styles::accent_bold(p)),
                Span::styled(field.label().to_uppercase(), styles::accent_bold(p)),
            ])
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    field.label().to_uppercase(),
                    styles::text_muted(p).add_modifier(Modifier::BOLD),
                ),
            ])
        }
    }

    fn indented(line: Line<'static>) -> Line<'static> {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(line.spans);
        Line::from(spans)
    }

    fn message_area(&self, width: usize) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let focused = self.is_focused(FormField::Message);
        let value = &self.form.contact.message;

        if value.is_empty() {
            let mut lines = vec![input_line(
                &self.ctx,
                value,
                placeholder(FormField::Message),
                focused,
                width,
            )];
            lines.resize(MESSAGE_ROWS, Line::default());
            return lines;
        }

        // Reserve a column for the cursor so it never wraps onto its own row
        let mut rows: Vec<Line<'static>> = text::wrap(value, width.saturating_sub(1))
            .into_iter()
            .map(|row| Line::from(Span::styled(row, styles::text(p))))
            .collect();
        if rows.len() > MESSAGE_ROWS {
            rows.drain(..rows.len() - MESSAGE_ROWS);
        }
        if focused {
            if let Some(last) = rows.last_mut() {
                last.spans.push(Span::styled(CURSOR, styles::accent(p)));
            }
        }
        rows.resize(MESSAGE_ROWS, Line::default());
        rows
    }

    fn field(&self, field: FormField, inner: usize) -> Vec<Line<'static>> {
        let p = &self.ctx.palette;
        let input_width = inner.saturating_sub(2);
        let focused = self.is_focused(field);
        let contact = &self.form.contact;

        let mut lines = Vec::new();
        match field {
            FormField::Name | FormField::Email => {
                let value = if field == FormField::Name {
                    &contact.name
                } else {
                    &contact.email
                };
                lines.push(self.label(field));
                lines.push(Self::indented(input_line(
                    &self.ctx,
                    value,
                    placeholder(field),
                    focused,
                    input_width,
                )));
            }
            FormField::Service => {
                let style = if focused {
                    styles::accent_bold(p)
                } else {
                    styles::text(p)
                };
                lines.push(self.label(field));
                lines.push(Self::indented(Line::from(vec![
                    Span::styled(self.ctx.icons.get(IconRef::ChevronLeft), styles::accent(p)),
                    Span::styled(
                        format!(
                            " {} ",
                            text::truncate(contact.service.label(), input_width.saturating_sub(4))
                        ),
                        style,
                    ),
                    Span::styled(self.ctx.icons.get(IconRef::ChevronRight), styles::accent(p)),
                ])));
            }
            FormField::Message => {
                lines.push(self.label(field));
                lines.extend(
                    self.message_area(input_width)
                        .into_iter()
                        .map(Self::indented),
                );
            }
            FormField::Submit => {
                let marker = if focused {
                    Span::styled(FOCUS_MARKER, styles::accent_bold(p))
                } else {
                    Span::raw("  ")
                };
                lines.push(Line::from(vec![
                    marker,
                    Span::styled(
                        format!(
                            " {} {} ",
                            field.label(),
                            self.ctx.icons.get(IconRef::ArrowRight)
                        ),
                        styles::button(p),
                    ),
                ]));
            }
            FormField::Newsletter => {}
        }
        lines
    }

    fn form(&self, width: usize) -> Vec<Line<'static>> {
        let width = width.min(FORM_MAX_WIDTH);
        let inner = width.saturating_sub(4).max(1);

        let mut body = Vec::new();
        for (i, field) in CONTACT_FIELDS.into_iter().enumerate() {
            if i > 0 {
                body.push(Line::default());
            }
            body.extend(self.field(field, inner));
        }

        let in_form = self.form.focus.is_some_and(|f| CONTACT_FIELDS.contains(&f));
        let border = if in_form {
            styles::border_focused(&self.ctx.palette)
        } else {
            styles::border(&self.ctx.palette)
        };
        text::boxed(body, width, border)
    }
}

impl Section for Contact<'_> {
    fn anchor(&self) -> Option<Anchor> {
        Some(Anchor::Contact)
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let mut lines = section_heading(
            &self.ctx,
            None,
            CONTACT_HEADING,
            Some(CONTACT_LEAD),
            width,
        );
        lines.extend(self.details(width));
        lines.extend(self.form(width));
        lines.push(Line::default());
        lines
    }
}

impl Widget for Contact<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_section(&self, area, buf);
    }
}
