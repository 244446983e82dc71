use std::{fmt, rc::Rc};

use crate::{component::VComponent, Callback};

use super::{Attrs, EventName, Tag};

/// The handler side of an event listener.
#[derive(Clone)]
pub enum EventCallback {
    /// Receives the raw dom event.
    Closure(Rc<dyn Fn(web_sys::Event)>),
    /// Ignores the event payload.
    Callback(Callback<()>),
}

impl EventCallback {
    pub fn invoke(&self, event: web_sys::Event) {
        match self {
            Self::Closure(f) => f(event),
            Self::Callback(cb) => cb.send(()),
        }
    }
}

impl fmt::Debug for EventCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closure(_) => write!(f, "EventCallback::Closure"),
            Self::Callback(_) => write!(f, "EventCallback::Callback"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct EventHandler {
    pub(crate) event: EventName,
    pub(crate) callback: EventCallback,
}

impl EventHandler {
    pub fn new(event: impl Into<EventName>, callback: EventCallback) -> Self {
        Self {
            event: event.into(),
            callback,
        }
    }

    pub fn event(&self) -> &EventName {
        &self.event
    }

    pub fn callback(&self) -> &EventCallback {
        &self.callback
    }
}

/// A virtual element.
///
/// Produced by [`super::TagBuilder`]. Rendering is a pure function from
/// component state to a tree of these; the tree is later serialized to html
/// or mounted into the document.
#[derive(Debug)]
pub struct VTag {
    pub(crate) tag: Tag,
    pub(crate) attrs: Attrs,
    pub(crate) children: Vec<VNode>,
    pub(crate) handlers: Vec<EventHandler>,
}

impl VTag {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Attrs::new(),
            children: Vec::new(),
            handlers: Vec::new(),
        }
    }

    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    #[inline]
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    #[inline]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    #[inline]
    pub fn has_class(&self, class: &str) -> bool {
        self.attrs.has_class(class)
    }

    #[inline]
    pub fn children(&self) -> &[VNode] {
        &self.children
    }

    #[inline]
    pub fn handlers(&self) -> &[EventHandler] {
        &self.handlers
    }

    /// Direct child elements. Fragments are flattened.
    pub fn child_tags(&self) -> Vec<&VTag> {
        let mut out = Vec::new();
        collect_tags(&self.children, &mut out);
        out
    }

    /// Depth-first search, starting with `self`.
    pub fn find<F>(&self, pred: F) -> Option<&VTag>
    where
        F: Fn(&VTag) -> bool,
    {
        self.find_ref(&pred)
    }

    fn find_ref(&self, pred: &dyn Fn(&VTag) -> bool) -> Option<&VTag> {
        if pred(self) {
            return Some(self);
        }
        self.child_tags()
            .into_iter()
            .find_map(|child| child.find_ref(pred))
    }

    pub fn find_by_class(&self, class: &str) -> Option<&VTag> {
        self.find(|t| t.has_class(class))
    }

    /// All elements in the subtree matching the predicate, in document order.
    pub fn find_all<F>(&self, pred: F) -> Vec<&VTag>
    where
        F: Fn(&VTag) -> bool,
    {
        let mut out = Vec::new();
        self.find_all_ref(&pred, &mut out);
        out
    }

    fn find_all_ref<'a>(&'a self, pred: &dyn Fn(&VTag) -> bool, out: &mut Vec<&'a VTag>) {
        if pred(self) {
            out.push(self);
        }
        for child in self.child_tags() {
            child.find_all_ref(pred, out);
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Invoke the payload-less handlers registered for `event`, as if the
    /// event had been dispatched on the element.
    ///
    /// Handlers that need the raw dom event are skipped.
    /// Returns the number of invoked handlers.
    pub fn simulate(&self, event: impl Into<EventName>) -> usize {
        let event = event.into();
        let mut count = 0;
        for handler in &self.handlers {
            if handler.event != event {
                continue;
            }
            if let EventCallback::Callback(cb) = &handler.callback {
                cb.send(());
                count += 1;
            }
        }
        count
    }
}

fn collect_tags<'a>(nodes: &'a [VNode], out: &mut Vec<&'a VTag>) {
    for node in nodes {
        match node {
            VNode::Tag(t) => out.push(t),
            VNode::Fragment(items) => collect_tags(items, out),
            _ => {}
        }
    }
}

pub enum VNode {
    Empty,
    Text(String),
    Tag(VTag),
    Fragment(Vec<VNode>),
    Component(VComponent),
}

impl Default for VNode {
    fn default() -> Self {
        Self::Empty
    }
}

impl VNode {
    pub fn as_tag(&self) -> Option<&VTag> {
        if let Self::Tag(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn into_tag(self) -> Option<VTag> {
        if let Self::Tag(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Returns `true` if the node is [`Empty`].
    ///
    /// [`Empty`]: VNode::Empty
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Empty | Self::Component(_) => {}
            Self::Text(t) => out.push_str(t),
            Self::Tag(t) => {
                for child in &t.children {
                    child.collect_text(out);
                }
            }
            Self::Fragment(items) => {
                for item in items {
                    item.collect_text(out);
                }
            }
        }
    }
}

impl fmt::Debug for VNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Text(t) => f.debug_tuple("Text").field(t).finish(),
            Self::Tag(t) => f.debug_tuple("Tag").field(t).finish(),
            Self::Fragment(items) => f.debug_tuple("Fragment").field(items).finish(),
            Self::Component(c) => f.debug_tuple("Component").field(c).finish(),
        }
    }
}

impl From<VTag> for VNode {
    fn from(t: VTag) -> Self {
        Self::Tag(t)
    }
}

impl From<()> for VNode {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<String> for VNode {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a str> for VNode {
    fn from(s: &'a str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<VComponent> for VNode {
    fn from(c: VComponent) -> Self {
        Self::Component(c)
    }
}

// Html serialization.

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str, attribute: bool) -> fmt::Result {
    let mut last = 0;
    for (index, c) in value.char_indices() {
        let replacement = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' if attribute => "&quot;",
            _ => continue,
        };
        f.write_str(&value[last..index])?;
        f.write_str(replacement)?;
        last = index + c.len_utf8();
    }
    f.write_str(&value[last..])
}

impl fmt::Display for VTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in self.attrs.iter() {
            write!(f, " {}=\"", name)?;
            write_escaped(f, value, true)?;
            f.write_str("\"")?;
        }
        f.write_str(">")?;

        if self.tag.is_void() {
            return Ok(());
        }

        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Serializes to html.
///
/// Matches what the browser reports as `outerHTML` for the mounted node.
impl fmt::Display for VNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("<!---->"),
            Self::Text(t) => write_escaped(f, t, false),
            Self::Tag(t) => fmt::Display::fmt(t, f),
            Self::Fragment(items) => {
                for item in items {
                    fmt::Display::fmt(item, f)?;
                }
                Ok(())
            }
            Self::Component(c) => c.write_html(f),
        }
    }
}
