use std::borrow::Cow;

use wasm_bindgen::JsCast;

make_str_enum! {
    /// Well known dom event names.
    Event {
        Error = "error",
        Load = "load",
        Focus = "focus",
        Blur = "blur",
        Submit = "submit",
        Input = "input",
        Change = "change",
        KeyDown = "keydown",
        KeyUp = "keyup",
        Click = "click",
        DblClick = "dblclick",
        MouseDown = "mousedown",
        MouseUp = "mouseup",
        MouseEnter = "mouseenter",
        MouseLeave = "mouseleave",
        TransitionEnd = "transitionend",
        AnimationEnd = "animationend",
    }
}

/// The name of an event.
///
/// Custom names cover events emitted by third party scripts, which are often
/// namespaced (`hidden.bs.modal`).
#[derive(Clone, Debug)]
pub enum EventName {
    Known(Event),
    Custom(Cow<'static, str>),
}

impl EventName {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        match Event::from_str_value(&name) {
            Some(ev) => Self::Known(ev),
            None => Self::Custom(name),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(ev) => ev.as_str(),
            Self::Custom(name) => name.as_ref(),
        }
    }
}

impl PartialEq for EventName {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for EventName {}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Event> for EventName {
    fn from(ev: Event) -> Self {
        Self::Known(ev)
    }
}

impl From<&'static str> for EventName {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A typed wrapper around a raw dom event.
pub trait DomEvent: Sized {
    fn event_type() -> Event;
    fn from_dom(ev: web_sys::Event) -> Option<Self>;
}

// InputEvent

pub struct InputEvent(pub web_sys::Event);

impl InputEvent {
    pub fn value(&self) -> Option<String> {
        let target = self.0.current_target()?;

        if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
            Some(input.value())
        } else if let Some(textarea) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            Some(textarea.value())
        } else {
            target
                .dyn_ref::<web_sys::HtmlSelectElement>()
                .map(|select| select.value())
        }
    }
}

impl std::ops::Deref for InputEvent {
    type Target = web_sys::Event;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DomEvent for InputEvent {
    fn event_type() -> Event {
        Event::Input
    }

    fn from_dom(ev: web_sys::Event) -> Option<Self> {
        Some(Self(ev))
    }
}

// ClickEvent.

pub struct ClickEvent(pub web_sys::MouseEvent);

impl std::ops::Deref for ClickEvent {
    type Target = web_sys::MouseEvent;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DomEvent for ClickEvent {
    fn event_type() -> Event {
        Event::Click
    }

    fn from_dom(ev: web_sys::Event) -> Option<Self> {
        ev.dyn_into().ok().map(Self)
    }
}

// KeyDownEvent.

pub struct KeyDownEvent(pub web_sys::KeyboardEvent);

impl std::ops::Deref for KeyDownEvent {
    type Target = web_sys::KeyboardEvent;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DomEvent for KeyDownEvent {
    fn event_type() -> Event {
        Event::KeyDown
    }

    fn from_dom(ev: web_sys::Event) -> Option<Self> {
        ev.dyn_into().ok().map(Self)
    }
}
