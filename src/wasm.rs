//! WebAssembly bindings for the search widget.
//!
//! Exposes the pure functions (`resolveLinkDetails`, `parseEncodedLink`,
//! `normalizeItem`, `filterItems`) and a `SearchWidget` class that owns one
//! widget activation. The class never touches the DOM: it returns list views and
//! effect objects, and the page script applies them.

use crate::link::{normalize_item, parse_encoded_link, resolve_link_details};
use crate::search::filter_items;
use crate::types::{FilterOptions, RawItem, RawLinkValue, SearchItem};
use crate::widget::{
    Activation, DialogEvent, Effect, ListView, MarkupItem, SearchWidget, WidgetLayout,
    WidgetPayload, WidgetSource,
};
use js_sys::{Array, Object, Reflect};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

/// Serialize as plain JS objects (not `Map`s), so results read like JSON.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string().into())
}

/// Read an optional JS argument, treating `null`/`undefined` as the default.
fn from_js_or_default<T: for<'de> Deserialize<'de> + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(T::default());
    }
    from_value(value).map_err(|e| e.to_string().into())
}

fn raw_link(value: JsValue) -> RawLinkValue {
    from_value::<serde_json::Value>(value)
        .map(RawLinkValue::from)
        .unwrap_or_default()
}

/// Resolve any link value into `{href, target, rel, searchValue}`.
#[wasm_bindgen(js_name = resolveLinkDetails)]
pub fn resolve_link_details_js(raw: JsValue) -> Result<JsValue, JsValue> {
    to_js(&resolve_link_details(&raw_link(raw)))
}

/// Decode `{key=value, ...}` text. Returns `null` when nothing decodes.
#[wasm_bindgen(js_name = parseEncodedLink)]
pub fn parse_encoded_link_js(text: &str) -> Result<JsValue, JsValue> {
    match parse_encoded_link(text) {
        Some(fields) => to_js(&fields),
        None => Ok(JsValue::NULL),
    }
}

/// Normalize one `pageList` entry.
#[wasm_bindgen(js_name = normalizeItem)]
pub fn normalize_item_js(item: JsValue) -> Result<JsValue, JsValue> {
    // Anything that is not an item object normalizes like an empty one.
    let raw: RawItem = from_value(item).unwrap_or_default();
    to_js(&normalize_item(&raw))
}

/// Filter already-normalized items.
///
/// `options` is optional: `{ includeDescription: boolean }`.
#[wasm_bindgen(js_name = filterItems)]
pub fn filter_items_js(items: JsValue, query: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let items: Vec<SearchItem> = from_value(items).map_err(|e| e.to_string())?;
    let options: FilterOptions = from_js_or_default(options)?;
    to_js(&filter_items(&items, query, &options))
}

/// Event object passed to `SearchWidget.dispatch`.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum EventInput {
    Trigger,
    Close,
    #[serde(rename_all = "camelCase")]
    DialogClick {
        on_backdrop: bool,
    },
    Keydown {
        key: String,
    },
    Destroy,
}

/// One widget activation.
#[wasm_bindgen(js_name = SearchWidget)]
pub struct SearchWidgetHandle {
    widget: SearchWidget<JsValue>,
    activation: Option<Activation<JsValue>>,
}

#[wasm_bindgen(js_class = SearchWidget)]
impl SearchWidgetHandle {
    /// Activate a widget.
    ///
    /// - `payload`: host data (`{ pageList, options }`), may be `null`
    /// - `layout`: which elements exist (`{ list, emptyState, input, trigger, dialog, closeButton }`)
    /// - `markup`: records read from pre-rendered entries, used without a `pageList`
    #[wasm_bindgen(constructor)]
    pub fn new(
        payload: JsValue,
        layout: JsValue,
        markup: JsValue,
    ) -> Result<SearchWidgetHandle, JsValue> {
        let payload: Option<WidgetPayload> = if payload.is_null() || payload.is_undefined() {
            None
        } else {
            Some(from_value(payload).map_err(|e| e.to_string())?)
        };
        let layout: WidgetLayout = from_js_or_default(layout)?;
        let markup: Vec<MarkupItem> = from_js_or_default(markup)?;

        let options = payload
            .as_ref()
            .map(|payload| payload.options)
            .unwrap_or_default();
        let source = WidgetSource::select(payload.as_ref(), markup);
        let (widget, activation) = SearchWidget::activate(source, layout, options);

        Ok(SearchWidgetHandle {
            widget,
            activation: Some(activation),
        })
    }

    /// Initial `{ view, effects }`. Returns `null` after the first call.
    #[wasm_bindgen(js_name = takeActivation)]
    pub fn take_activation(&mut self) -> Result<JsValue, JsValue> {
        let Some(activation) = self.activation.take() else {
            return Ok(JsValue::NULL);
        };

        let result = Object::new();
        Reflect::set(&result, &"view".into(), &view_to_js(activation.view.as_ref())?)?;
        Reflect::set(&result, &"effects".into(), &effects_to_js(activation.effects)?)?;
        Ok(result.into())
    }

    /// Re-filter for the input's current value. `null` when there is no list.
    #[wasm_bindgen(js_name = onInput)]
    pub fn on_input(&self, value: &str) -> Result<JsValue, JsValue> {
        view_to_js(self.widget.on_input(value).as_ref())
    }

    /// Route a trigger/dialog event. `active` is `document.activeElement`.
    #[wasm_bindgen]
    pub fn dispatch(&mut self, event: JsValue, active: JsValue) -> Result<Array, JsValue> {
        let event = match from_value(event).map_err(|e| e.to_string())? {
            EventInput::Trigger => DialogEvent::TriggerClick {
                active: (!active.is_null() && !active.is_undefined()).then_some(active),
            },
            EventInput::Close => DialogEvent::CloseClick,
            EventInput::DialogClick { on_backdrop } => DialogEvent::DialogClick { on_backdrop },
            EventInput::Keydown { key } => DialogEvent::KeyDown { key },
            EventInput::Destroy => DialogEvent::Destroy,
        };
        effects_to_js(self.widget.dispatch(event))
    }

    /// Host teardown.
    #[wasm_bindgen]
    pub fn destroy(&mut self) -> Result<Array, JsValue> {
        effects_to_js(self.widget.destroy())
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.widget.is_open()
    }

    /// The normalized items, in source order.
    #[wasm_bindgen]
    pub fn items(&self) -> Result<JsValue, JsValue> {
        to_js(self.widget.items())
    }
}

fn view_to_js(view: Option<&ListView>) -> Result<JsValue, JsValue> {
    match view {
        Some(view) => to_js(view),
        None => Ok(JsValue::NULL),
    }
}

/// Effects as `{ type, value?, element? }` objects, in application order.
fn effects_to_js(effects: Vec<Effect<JsValue>>) -> Result<Array, JsValue> {
    let array = Array::new();
    for effect in effects {
        let object = Object::new();
        let (kind, value): (&str, Option<JsValue>) = match effect {
            Effect::PreventDefault => ("preventDefault", None),
            Effect::SetDialogVisible(visible) => ("setDialogVisible", Some(visible.into())),
            Effect::SetTriggerExpanded(expanded) => ("setTriggerExpanded", Some(expanded.into())),
            Effect::SetBodyLocked(locked) => ("setBodyLocked", Some(locked.into())),
            Effect::FocusInput => ("focusInput", None),
            Effect::RestoreFocus(element) => {
                Reflect::set(&object, &"element".into(), &element)?;
                ("restoreFocus", None)
            }
            Effect::MarkEnhanced => ("markEnhanced", None),
            Effect::ClearInput => ("clearInput", None),
            Effect::SetEmptyStateVisible(visible) => ("setEmptyStateVisible", Some(visible.into())),
        };
        Reflect::set(&object, &"type".into(), &kind.into())?;
        if let Some(value) = value {
            Reflect::set(&object, &"value".into(), &value)?;
        }
        array.push(&object);
    }
    Ok(array)
}
