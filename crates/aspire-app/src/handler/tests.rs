//! Tests for handler module

use super::*;
use crate::contact::FormField;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use aspire_core::content::MENU_CTA;
use aspire_core::{Anchor, ServiceOption, ThemeMode, LEGAL_LINKS, NAV_LINKS};

/// State with a laid-out page: 300 rows of content, 24 visible, sections at
/// fixed rows.
fn laid_out_state() -> AppState {
    let mut state = AppState::default();
    state.sync_viewport(
        300,
        24,
        vec![
            (Anchor::Services, 40),
            (Anchor::About, 110),
            (Anchor::WhyUs, 170),
            (Anchor::Contact, 230),
        ],
    );
    state
}

/// Feed a key through update, following every chained message
fn press(state: &mut AppState, key: InputKey) -> UpdateResult {
    let mut result = update(state, Message::Key(key));
    while let Some(msg) = result.message.take() {
        result = update(state, msg);
    }
    result
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = AppState::default();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_quit_unmounts_mounted_carousel() {
    let mut state = AppState::default();
    update(&mut state, Message::CarouselMounted);

    let result = update(&mut state, Message::Quit);
    assert_eq!(result.message, Some(Message::CarouselUnmounted));
}

#[test]
fn test_quit_keys_in_browse_mode() {
    let state = AppState::default();
    for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        assert_eq!(handle_key(&state, key), Some(Message::Quit));
    }
}

// ─────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_theme_updates_state_and_requests_persist() {
    let mut state = AppState::default();

    let result = update(&mut state, Message::ToggleTheme);

    assert_eq!(state.theme, ThemeMode::Dark);
    assert_eq!(
        result.action,
        Some(UpdateAction::PersistTheme(ThemeMode::Dark))
    );
}

#[test]
fn test_toggle_theme_twice_restores() {
    let mut state = AppState::new(Default::default(), ThemeMode::Dark);
    update(&mut state, Message::ToggleTheme);
    let result = update(&mut state, Message::ToggleTheme);

    assert_eq!(state.theme, ThemeMode::Dark);
    assert_eq!(
        result.action,
        Some(UpdateAction::PersistTheme(ThemeMode::Dark))
    );
}

#[test]
fn test_t_key_toggles_theme() {
    let mut state = AppState::default();
    press(&mut state, InputKey::Char('t'));
    assert_eq!(state.theme, ThemeMode::Dark);
}

// ─────────────────────────────────────────────────────────
// Scroll
// ─────────────────────────────────────────────────────────

#[test]
fn test_scroll_indicator_follows_offset() {
    let mut state = laid_out_state();
    assert!(!state.scroll.is_past_threshold());

    update(&mut state, Message::ScrollDown(25));
    assert_eq!(state.scroll_offset(), 25);
    assert!(state.scroll.is_past_threshold());

    update(&mut state, Message::ScrollUp(25));
    assert_eq!(state.scroll_offset(), 0);
    assert!(!state.scroll.is_past_threshold());
}

#[test]
fn test_scroll_to_threshold_is_not_past() {
    let mut state = laid_out_state();
    update(&mut state, Message::ScrollDown(20));
    assert!(!state.scroll.is_past_threshold());
    update(&mut state, Message::ScrollDown(1));
    assert!(state.scroll.is_past_threshold());
}

#[test]
fn test_page_and_edge_scrolling() {
    let mut state = laid_out_state();

    update(&mut state, Message::PageDown);
    assert_eq!(state.scroll_offset(), 23);

    update(&mut state, Message::ScrollToBottom);
    assert_eq!(state.scroll_offset(), 276);
    assert!(state.scroll.is_past_threshold());

    update(&mut state, Message::PageUp);
    assert_eq!(state.scroll_offset(), 253);

    update(&mut state, Message::ScrollToTop);
    assert_eq!(state.scroll_offset(), 0);
    assert!(!state.scroll.is_past_threshold());
}

#[test]
fn test_scroll_keys() {
    let state = AppState::default();
    assert_eq!(handle_key(&state, InputKey::Down), Some(Message::ScrollDown(1)));
    assert_eq!(handle_key(&state, InputKey::Char('k')), Some(Message::ScrollUp(1)));
    assert_eq!(handle_key(&state, InputKey::Home), Some(Message::ScrollToTop));
    assert_eq!(handle_key(&state, InputKey::End), Some(Message::ScrollToBottom));
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_follow_link_scrolls_to_section() {
    let mut state = laid_out_state();

    update(&mut state, Message::FollowLink(NAV_LINKS[1]));

    assert_eq!(state.scroll_offset(), 110);
    assert!(state.scroll.is_past_threshold());
}

#[test]
fn test_follow_link_clamps_to_scroll_range() {
    let mut state = AppState::default();
    state.sync_viewport(100, 24, vec![(Anchor::Contact, 90)]);

    update(&mut state, Message::FollowLink(NAV_LINKS[3]));

    assert_eq!(state.scroll_offset(), 76);
}

#[test]
fn test_placeholder_link_does_not_move_page() {
    let mut state = laid_out_state();
    update(&mut state, Message::ScrollDown(7));

    update(&mut state, Message::FollowLink(LEGAL_LINKS[0]));

    assert_eq!(state.scroll_offset(), 7);
}

#[test]
fn test_link_while_menu_open_closes_menu() {
    for link in NAV_LINKS.iter().chain(LEGAL_LINKS.iter()).chain([&MENU_CTA]) {
        let mut state = laid_out_state();
        update(&mut state, Message::ToggleMobileMenu);
        assert!(state.menu.is_open());

        update(&mut state, Message::FollowLink(*link));

        assert!(!state.menu.is_open(), "menu stayed open after {}", link.label);
    }
}

#[test]
fn test_menu_activate_follows_selected_link() {
    let mut state = laid_out_state();
    press(&mut state, InputKey::Char('m'));
    assert_eq!(state.ui_mode(), UiMode::Menu);

    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    // Enter -> MenuActivate -> FollowLink
    let result = press(&mut state, InputKey::Enter);
    assert_eq!(result.message, None);

    assert!(!state.menu.is_open());
    assert_eq!(state.scroll_offset(), 170);
}

#[test]
fn test_menu_cta_goes_to_contact() {
    let mut state = laid_out_state();
    update(&mut state, Message::ToggleMobileMenu);
    update(&mut state, Message::MenuSelectPrevious);

    let result = update(&mut state, Message::MenuActivate);
    assert_eq!(result.message, Some(Message::FollowLink(MENU_CTA)));
}

#[test]
fn test_menu_activate_when_closed_is_noop() {
    let mut state = laid_out_state();
    let result = update(&mut state, Message::MenuActivate);
    assert!(result.message.is_none());
}

#[test]
fn test_menu_keys() {
    let mut state = AppState::default();
    state.menu.toggle();

    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::CloseMobileMenu));
    assert_eq!(handle_key(&state, InputKey::Char('m')), Some(Message::CloseMobileMenu));
    assert_eq!(handle_key(&state, InputKey::Char('q')), None);
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

#[test]
fn test_section_jump_keys() {
    let state = AppState::default();
    let expected = [
        ('s', Anchor::Services),
        ('a', Anchor::About),
        ('w', Anchor::WhyUs),
        ('c', Anchor::Contact),
    ];
    for (key, anchor) in expected {
        match handle_key(&state, InputKey::Char(key)) {
            Some(Message::FollowLink(link)) => assert_eq!(link.anchor, anchor),
            other => panic!("unexpected message for {key}: {other:?}"),
        }
    }

    match handle_key(&state, InputKey::Char('p')) {
        Some(Message::FollowLink(link)) => assert!(link.anchor.is_placeholder()),
        other => panic!("unexpected message for p: {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────
// Carousel
// ─────────────────────────────────────────────────────────

#[test]
fn test_carousel_mount_starts_timer() {
    let mut state = AppState::default();

    let result = update(&mut state, Message::CarouselMounted);

    assert!(state.carousel.is_mounted());
    assert_eq!(
        result.action,
        Some(UpdateAction::StartCarouselTimer {
            period: std::time::Duration::from_millis(8000)
        })
    );

    // Mounting twice does not start a second timer
    let again = update(&mut state, Message::CarouselMounted);
    assert!(again.action.is_none());
}

#[test]
fn test_carousel_mount_respects_disabled_auto_advance() {
    let mut state = AppState::default();
    state.settings.carousel.auto_advance = false;

    let result = update(&mut state, Message::CarouselMounted);

    assert!(state.carousel.is_mounted());
    assert!(result.action.is_none());
}

#[test]
fn test_carousel_unmount_stops_timer() {
    let mut state = AppState::default();
    update(&mut state, Message::CarouselMounted);

    let result = update(&mut state, Message::CarouselUnmounted);

    assert!(!state.carousel.is_mounted());
    assert_eq!(result.action, Some(UpdateAction::StopCarouselTimer));
}

#[test]
fn test_tick_after_unmount_changes_nothing() {
    let mut state = AppState::default();
    update(&mut state, Message::CarouselMounted);
    update(&mut state, Message::CarouselTick);
    assert_eq!(state.carousel.index(), 1);

    update(&mut state, Message::CarouselUnmounted);
    update(&mut state, Message::CarouselTick);
    update(&mut state, Message::CarouselTick);

    assert_eq!(state.carousel.index(), 1);
}

#[test]
fn test_manual_next_then_tick_double_advances() {
    let mut state = AppState::default();
    update(&mut state, Message::CarouselMounted);

    update(&mut state, Message::CarouselNext);
    update(&mut state, Message::CarouselTick);

    assert_eq!(state.carousel.index(), 2);
}

#[test]
fn test_carousel_keys() {
    let mut state = AppState::default();

    press(&mut state, InputKey::Char(']'));
    assert_eq!(state.carousel.index(), 1);
    press(&mut state, InputKey::Left);
    press(&mut state, InputKey::Char('['));
    assert_eq!(state.carousel.index(), 2);

    press(&mut state, InputKey::Char('1'));
    assert_eq!(state.carousel.index(), 0);
    press(&mut state, InputKey::Char('3'));
    assert_eq!(state.carousel.index(), 2);

    // Out of range digit is ignored
    press(&mut state, InputKey::Char('7'));
    assert_eq!(state.carousel.index(), 2);
}

// ─────────────────────────────────────────────────────────
// Contact Form
// ─────────────────────────────────────────────────────────

#[test]
fn test_tab_enters_form_mode() {
    let mut state = AppState::default();
    press(&mut state, InputKey::Tab);
    assert_eq!(state.ui_mode(), UiMode::Form);
    assert_eq!(state.form.focus, Some(FormField::Name));

    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode(), UiMode::Browse);
    assert!(!state.should_quit());
}

#[test]
fn test_typing_in_form_does_not_trigger_shortcuts() {
    let mut state = AppState::default();
    press(&mut state, InputKey::Tab);

    for c in "quit".chars() {
        press(&mut state, InputKey::Char(c));
    }

    assert_eq!(state.form.contact.name, "quit");
    assert!(!state.should_quit());
    assert_eq!(state.theme, ThemeMode::Light);
}

#[test]
fn test_service_field_cycles_with_arrows() {
    let mut state = AppState::default();
    state.form.focus = Some(FormField::Service);

    press(&mut state, InputKey::Right);
    assert_eq!(state.form.contact.service, ServiceOption::AccountingBookkeeping);
    press(&mut state, InputKey::Left);
    press(&mut state, InputKey::Left);
    assert_eq!(state.form.contact.service, ServiceOption::PayrollManagement);

    // Typing into the selector does nothing
    press(&mut state, InputKey::Char('x'));
    assert_eq!(state.form.contact.service, ServiceOption::PayrollManagement);
}

#[test]
fn test_submit_is_noop() {
    let mut state = AppState::default();
    state.form.focus = Some(FormField::Name);
    press(&mut state, InputKey::Char('A'));
    state.form.focus = Some(FormField::Submit);
    let before = state.form.clone();

    let result = press(&mut state, InputKey::Enter);

    assert_eq!(state.form, before);
    assert!(result.action.is_none());
}

#[test]
fn test_newsletter_join_is_noop() {
    let mut state = AppState::default();
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.form.focus, Some(FormField::Newsletter));

    for c in "a@b.co".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Enter);

    assert_eq!(state.form.newsletter.email, "a@b.co");
    assert_eq!(state.form.focus, Some(FormField::Newsletter));
}
