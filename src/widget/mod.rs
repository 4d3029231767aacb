// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One widget activation, from host data to list views and dialog effects.
//!
//! ```text
//! WidgetSource ──▶ SearchItem[] ──┬─▶ on_input(q) ──▶ filter_items ──▶ ListView
//!  (payload or markup)            │
//!                                 └─▶ dispatch(event) ──▶ Dialog ──▶ Effect[]
//! ```
//!
//! Items are built once in [`SearchWidget::activate`] and never change. The
//! dialog state (and the element to restore focus to) is the only mutable
//! state, and it lives here rather than in the host's event handlers.

pub mod dialog;
pub mod render;
mod source;

pub use dialog::{Dialog, DialogEvent, DialogState, Effect, ESCAPE_KEYS};
pub use render::{render_list, EmptyState, ListEntry, ListView};
pub use source::{
    items_from_markup, items_from_payload, AnchorAttrs, MarkupItem, WidgetPayload, WidgetSource,
};

use serde::Deserialize;
use tracing::debug;

use crate::search::filter_items;
use crate::types::{FilterOptions, SearchItem};

/// Which of the widget's optional elements exist in the host markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetLayout {
    /// `.js-search-widget-list`
    pub list: bool,
    /// `.js-search-widget-empty`
    pub empty_state: bool,
    /// `.js-search-widget-input`
    pub input: bool,
    /// `.js-search-widget-trigger`
    pub trigger: bool,
    /// `.js-search-widget-dialog`
    pub dialog: bool,
    /// `.js-search-widget-close`
    pub close_button: bool,
}

impl WidgetLayout {
    /// Every element present.
    pub fn complete() -> Self {
        Self {
            list: true,
            empty_state: true,
            input: true,
            trigger: true,
            dialog: true,
            close_button: true,
        }
    }

    pub fn mode(&self) -> WidgetMode {
        match (self.trigger, self.input, self.dialog) {
            (true, true, true) => WidgetMode::Dialog,
            (true, true, false) => WidgetMode::FocusInput,
            _ => WidgetMode::Inline,
        }
    }
}

/// How the trigger behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetMode {
    /// The input lives in a modal dialog opened by the trigger.
    Dialog,
    /// No dialog; the trigger just focuses the input.
    FocusInput,
    /// No trigger behavior at all.
    Inline,
}

/// What the host must do right after activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation<F> {
    /// Initial list, all items in source order.
    pub view: Option<ListView>,
    pub effects: Vec<Effect<F>>,
}

/// A live widget instance.
#[derive(Debug, Clone)]
pub struct SearchWidget<F> {
    items: Vec<SearchItem>,
    options: FilterOptions,
    layout: WidgetLayout,
    dialog: Option<Dialog<F>>,
}

impl<F> SearchWidget<F> {
    /// Build items from the source and compute the initial render.
    pub fn activate(
        source: WidgetSource,
        layout: WidgetLayout,
        options: FilterOptions,
    ) -> (Self, Activation<F>) {
        let items = source.into_items();
        let mode = layout.mode();
        debug!(items = items.len(), ?mode, "search widget activated");

        // The empty state starts hidden even when there is no list to render.
        let mut effects = Vec::new();
        if layout.empty_state {
            effects.push(Effect::SetEmptyStateVisible(false));
        }
        if layout.input {
            effects.push(Effect::ClearInput);
        }
        let dialog = if mode == WidgetMode::Dialog {
            effects.push(Effect::MarkEnhanced);
            effects.push(Effect::SetDialogVisible(false));
            Some(Dialog::new())
        } else {
            None
        };

        let widget = Self {
            items,
            options,
            layout,
            dialog,
        };
        let view = widget.on_input("");

        (widget, Activation { view, effects })
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn mode(&self) -> WidgetMode {
        self.layout.mode()
    }

    pub fn is_open(&self) -> bool {
        self.dialog.as_ref().is_some_and(Dialog::is_open)
    }

    /// The input changed: filter from scratch and re-render.
    pub fn on_input(&self, value: &str) -> Option<ListView> {
        let filtered = filter_items(&self.items, value, &self.options);
        render_list(&filtered, &self.layout)
    }

    /// Feed a trigger/dialog event through the widget.
    pub fn dispatch(&mut self, event: DialogEvent<F>) -> Vec<Effect<F>> {
        match (self.layout.mode(), self.dialog.as_mut()) {
            (WidgetMode::Dialog, Some(dialog)) => {
                if matches!(event, DialogEvent::CloseClick) && !self.layout.close_button {
                    return Vec::new();
                }
                dialog.handle(event)
            }
            (WidgetMode::FocusInput, _) => match event {
                DialogEvent::TriggerClick { .. } => vec![Effect::PreventDefault, Effect::FocusInput],
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Host teardown. Closes the dialog if it is open.
    pub fn destroy(&mut self) -> Vec<Effect<F>> {
        self.dispatch(DialogEvent::Destroy)
    }
}
