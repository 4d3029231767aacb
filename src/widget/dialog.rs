// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Modal dialog state machine.
//!
//! ```text
//!            open(active)
//!   Closed ───────────────▶ Open { last_focused }
//!     ▲                         │
//!     └─────────────────────────┘
//!      close | escape | outside click | destroy
//! ```
//!
//! Transitions never touch the DOM. They return [`Effect`]s, and the host applies
//! them in order. Re-opening an open dialog and closing a closed one produce no
//! visibility effects, so duplicate events are harmless.
//!
//! `F` is whatever the host uses to refer to a focusable element (a DOM node
//! handle in the browser, an id in tests). The dialog only stores it and hands
//! it back when focus should be restored.

/// Keys that dismiss the dialog. `Esc` is the legacy spelling.
pub const ESCAPE_KEYS: [&str; 2] = ["Escape", "Esc"];

/// Dialog lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState<F> {
    Closed,
    Open {
        /// Element that had focus before opening, restored on close.
        last_focused: Option<F>,
    },
}

/// Something that happened to the dialog's elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent<F> {
    /// Trigger button clicked while `active` had focus.
    TriggerClick { active: Option<F> },
    /// Dedicated close button clicked.
    CloseClick,
    /// Click inside the dialog element. `on_backdrop` is true when the click
    /// target is the dialog element itself rather than its content.
    DialogClick { on_backdrop: bool },
    /// Key pressed while focus is inside the dialog.
    KeyDown { key: String },
    /// Host is tearing the widget down.
    Destroy,
}

/// Instruction for the host, applied in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<F> {
    /// Cancel the browser default for the current event.
    PreventDefault,
    /// Toggle `is-visible` on the dialog and set `aria-hidden` to the opposite.
    SetDialogVisible(bool),
    /// Set `aria-expanded` on the trigger.
    SetTriggerExpanded(bool),
    /// Toggle the scroll-lock class on the document body.
    SetBodyLocked(bool),
    /// Move focus to the search input (next animation frame in dialog mode).
    FocusInput,
    /// Move focus back to the element recorded when the dialog opened.
    RestoreFocus(F),
    /// Mark the widget root as enhanced (dialog mode only).
    MarkEnhanced,
    /// Reset the search input's value.
    ClearInput,
    /// Toggle `is-visible` on the empty-state element and set `aria-hidden` to
    /// the opposite.
    SetEmptyStateVisible(bool),
}

/// The dialog around the search input.
#[derive(Debug, Clone)]
pub struct Dialog<F> {
    state: DialogState<F>,
}

impl<F> Default for Dialog<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Dialog<F> {
    pub fn new() -> Self {
        Self {
            state: DialogState::Closed,
        }
    }

    pub fn state(&self) -> &DialogState<F> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open { .. })
    }

    /// Show the dialog, remembering which element had focus.
    pub fn open(&mut self, active: Option<F>) -> Vec<Effect<F>> {
        if self.is_open() {
            return Vec::new();
        }

        self.state = DialogState::Open {
            last_focused: active,
        };

        vec![
            Effect::SetDialogVisible(true),
            Effect::SetTriggerExpanded(true),
            Effect::SetBodyLocked(true),
            Effect::FocusInput,
        ]
    }

    /// Hide the dialog and hand focus back.
    pub fn close(&mut self) -> Vec<Effect<F>> {
        let DialogState::Open { last_focused } =
            std::mem::replace(&mut self.state, DialogState::Closed)
        else {
            return Vec::new();
        };

        let mut effects = vec![
            Effect::SetDialogVisible(false),
            Effect::SetTriggerExpanded(false),
            Effect::SetBodyLocked(false),
        ];
        if let Some(element) = last_focused {
            effects.push(Effect::RestoreFocus(element));
        }
        effects
    }

    /// Route one event through the state machine.
    pub fn handle(&mut self, event: DialogEvent<F>) -> Vec<Effect<F>> {
        match event {
            DialogEvent::TriggerClick { active } => {
                let mut effects = vec![Effect::PreventDefault];
                effects.extend(self.open(active));
                effects
            }
            DialogEvent::CloseClick | DialogEvent::Destroy => self.close(),
            DialogEvent::DialogClick { on_backdrop: true } => self.close(),
            DialogEvent::DialogClick { on_backdrop: false } => Vec::new(),
            DialogEvent::KeyDown { key } if ESCAPE_KEYS.contains(&key.as_str()) => {
                let mut effects = vec![Effect::PreventDefault];
                effects.extend(self.close());
                effects
            }
            DialogEvent::KeyDown { .. } => Vec::new(),
        }
    }
}
