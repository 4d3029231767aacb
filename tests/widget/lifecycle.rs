//! Activation, typing, and the dialog round trip.

use super::common::SITE_PAYLOAD;
use search_widget::widget::{DialogEvent, Effect, EmptyState, WidgetMode};
use search_widget::{FilterOptions, SearchWidget, WidgetLayout, WidgetPayload, WidgetSource};

/// Focus handles are plain ids in tests.
type Handle = &'static str;

fn site_widget(layout: WidgetLayout) -> SearchWidget<Handle> {
    let payload = WidgetPayload::from_json_str(SITE_PAYLOAD).unwrap();
    let source = WidgetSource::select(Some(&payload), Vec::new());
    SearchWidget::activate(source, layout, payload.options).0
}

#[test]
fn test_activation_renders_everything() {
    let payload = WidgetPayload::from_json_str(SITE_PAYLOAD).unwrap();
    let source = WidgetSource::select(Some(&payload), Vec::new());
    let (_, activation) =
        SearchWidget::<Handle>::activate(source, WidgetLayout::complete(), payload.options);

    let view = activation.view.expect("layout has a list");
    assert_eq!(view.entries.len(), 7);
    assert_eq!(view.empty_state, Some(EmptyState { visible: false }));
    assert_eq!(
        activation.effects,
        vec![
            Effect::SetEmptyStateVisible(false),
            Effect::ClearInput,
            Effect::MarkEnhanced,
            Effect::SetDialogVisible(false),
        ]
    );
}

#[test]
fn test_typing_filters_and_toggles_empty_state() {
    let widget = site_widget(WidgetLayout::complete());

    let view = widget.on_input("status").unwrap();
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].href, "https://status.example.com");
    assert_eq!(view.entries[0].target.as_deref(), Some("_blank"));
    assert_eq!(view.entries[0].rel.as_deref(), Some("noopener noreferrer"));

    let empty = widget.on_input("no such page").unwrap();
    assert!(empty.entries.is_empty());
    assert_eq!(empty.empty_state.map(EmptyState::aria_hidden), Some("false"));
}

#[test]
fn test_empty_state_hidden_on_activation_without_list() {
    let payload = WidgetPayload::from_json_str(SITE_PAYLOAD).unwrap();
    let source = WidgetSource::select(Some(&payload), Vec::new());
    let layout = WidgetLayout {
        empty_state: true,
        input: true,
        ..WidgetLayout::default()
    };
    let (_, activation) = SearchWidget::<Handle>::activate(source, layout, payload.options);

    assert!(activation.view.is_none());
    assert_eq!(
        activation.effects,
        vec![Effect::SetEmptyStateVisible(false), Effect::ClearInput]
    );
}

#[test]
fn test_no_list_means_no_view() {
    let layout = WidgetLayout {
        input: true,
        ..WidgetLayout::default()
    };
    let widget = site_widget(layout);
    assert_eq!(widget.mode(), WidgetMode::Inline);
    assert!(widget.on_input("pricing").is_none());
}

#[test]
fn test_dialog_round_trip_restores_focus() {
    let mut widget = site_widget(WidgetLayout::complete());
    assert_eq!(widget.mode(), WidgetMode::Dialog);

    let opened = widget.dispatch(DialogEvent::TriggerClick {
        active: Some("nav-link"),
    });
    assert!(widget.is_open());
    assert!(opened.contains(&Effect::FocusInput));
    assert!(opened.contains(&Effect::SetBodyLocked(true)));

    // Clicks on the dialog content do nothing.
    assert!(widget
        .dispatch(DialogEvent::DialogClick { on_backdrop: false })
        .is_empty());
    assert!(widget.is_open());

    let closed = widget.dispatch(DialogEvent::KeyDown {
        key: "Escape".to_string(),
    });
    assert!(!widget.is_open());
    assert_eq!(closed.first(), Some(&Effect::PreventDefault));
    assert_eq!(closed.last(), Some(&Effect::RestoreFocus("nav-link")));
}

#[test]
fn test_other_keys_keep_dialog_open() {
    let mut widget = site_widget(WidgetLayout::complete());
    widget.dispatch(DialogEvent::TriggerClick { active: None });
    assert!(widget
        .dispatch(DialogEvent::KeyDown {
            key: "Enter".to_string()
        })
        .is_empty());
    assert!(widget.is_open());
}

#[test]
fn test_backdrop_and_close_button_close() {
    let mut widget = site_widget(WidgetLayout::complete());

    widget.dispatch(DialogEvent::TriggerClick { active: None });
    widget.dispatch(DialogEvent::DialogClick { on_backdrop: true });
    assert!(!widget.is_open());

    widget.dispatch(DialogEvent::TriggerClick { active: None });
    let effects = widget.dispatch(DialogEvent::CloseClick);
    assert!(!widget.is_open());
    // Nothing was focused before opening, so there is nothing to restore.
    assert!(!effects.iter().any(|e| matches!(e, Effect::RestoreFocus(_))));
}

#[test]
fn test_destroy_closes_open_dialog() {
    let mut widget = site_widget(WidgetLayout::complete());
    widget.dispatch(DialogEvent::TriggerClick {
        active: Some("search-button"),
    });

    let effects = widget.destroy();
    assert!(effects.contains(&Effect::SetBodyLocked(false)));
    assert!(!widget.is_open());
    assert!(widget.destroy().is_empty());
}

#[test]
fn test_focus_input_mode() {
    let layout = WidgetLayout {
        list: true,
        input: true,
        trigger: true,
        ..WidgetLayout::default()
    };
    let mut widget = site_widget(layout);
    assert_eq!(widget.mode(), WidgetMode::FocusInput);

    let effects = widget.dispatch(DialogEvent::TriggerClick { active: None });
    assert_eq!(effects, vec![Effect::PreventDefault, Effect::FocusInput]);
    assert!(!widget.is_open());
}

#[test]
fn test_widget_keeps_payload_options() {
    let widget = site_widget(WidgetLayout::complete());
    assert_eq!(widget.options(), &FilterOptions::default());
}

#[test]
fn test_list_html() {
    let widget = site_widget(WidgetLayout::complete());
    let html = widget.on_input("press").unwrap().to_html();
    assert_eq!(
        html,
        "<li class=\"search-widget__item\"><a class=\"search-widget__link\" href=\"/press\" \
         target=\"_self\" rel=\"external\"><span class=\"search-widget__item-title\">Press kit</span>\
         <span class=\"search-widget__item-description\">Logos and screenshots</span></a></li>\n"
    );
}
