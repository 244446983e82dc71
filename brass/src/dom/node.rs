use std::rc::Rc;

use crate::{
    component::{component, Component, VComponent},
    Callback,
};

use super::{
    event::DomEvent, AttrName, Attrs, EventCallback, EventHandler, EventName, Tag, VNode, VTag,
};

/// Fluent builder for a [`VTag`].
pub struct TagBuilder {
    tag: VTag,
}

impl TagBuilder {
    pub fn new(tag: Tag) -> Self {
        Self { tag: VTag::new(tag) }
    }

    #[inline]
    pub fn tag(&self) -> &VTag {
        &self.tag
    }

    // Attributes.

    pub fn add_attr(&mut self, attr: impl Into<AttrName>, value: impl Into<String>) {
        self.tag.attrs.set(attr, value);
    }

    #[inline]
    pub fn attr(mut self, attr: impl Into<AttrName>, value: impl Into<String>) -> Self {
        self.add_attr(attr, value);
        self
    }

    pub fn attr_if(self, flag: bool, attr: impl Into<AttrName>, value: impl Into<String>) -> Self {
        if flag {
            self.attr(attr, value)
        } else {
            self
        }
    }

    pub fn attr_opt<V: Into<String>>(self, attr: impl Into<AttrName>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.attr(attr, v),
            None => self,
        }
    }

    pub fn attr_toggle(self, attr: impl Into<AttrName>) -> Self {
        self.attr(attr, String::new())
    }

    pub fn attr_toggle_if(self, flag: bool, attr: impl Into<AttrName>) -> Self {
        if flag {
            self.attr_toggle(attr)
        } else {
            self
        }
    }

    /// Merge a set of attributes into the element.
    ///
    /// See [`Attrs::merge`].
    pub fn add_attrs(&mut self, attrs: Attrs) {
        self.tag.attrs.merge(attrs);
    }

    #[inline]
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.add_attrs(attrs);
        self
    }

    // Class.

    pub fn add_class(&mut self, class: &str) {
        self.tag.attrs.add_class(class);
    }

    #[inline]
    pub fn class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn class_if(mut self, flag: bool, class: &str) -> Self {
        if flag {
            self.add_class(class);
        }
        self
    }

    pub fn class_opt(mut self, class: Option<&str>) -> Self {
        if let Some(class) = class {
            self.add_class(class);
        }
        self
    }

    pub fn classes<'a, I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        for class in iter {
            self.add_class(class);
        }
        self
    }

    // Children.

    pub fn add_child(&mut self, child: impl Into<VNode>) {
        match child.into() {
            VNode::Empty => {}
            other => self.tag.children.push(other),
        }
    }

    pub fn add_text(&mut self, value: impl Into<String>) {
        self.tag.children.push(VNode::Text(value.into()));
    }

    #[inline]
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.add_text(value);
        self
    }

    #[inline]
    pub fn and(mut self, item: impl DomExtend) -> Self {
        item.extend(&mut self);
        self
    }

    #[inline]
    pub fn and_opt(mut self, item: Option<impl DomExtend>) -> Self {
        if let Some(item) = item {
            item.extend(&mut self);
        }
        self
    }

    pub fn and_if<F, T>(mut self, flag: bool, f: F) -> Self
    where
        T: DomExtend,
        F: FnOnce() -> T,
    {
        if flag {
            f().extend(&mut self);
        }
        self
    }

    pub fn and_iter<T, I>(mut self, iter: I) -> Self
    where
        T: DomExtend,
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            item.extend(&mut self);
        }
        self
    }

    // Component.

    pub fn add_component<C: Component>(&mut self, props: C::Properties) {
        self.add_child(component::<C>(props));
    }

    #[inline]
    pub fn component<C: Component>(mut self, props: C::Properties) -> Self {
        self.add_component::<C>(props);
        self
    }

    // Events.

    pub fn add_event_handler(&mut self, event: impl Into<EventName>, callback: EventCallback) {
        self.tag.handlers.push(EventHandler::new(event, callback));
    }

    pub fn on_event<F>(mut self, event: impl Into<EventName>, handler: F) -> Self
    where
        F: Fn(web_sys::Event) + 'static,
    {
        self.add_event_handler(event, EventCallback::Closure(Rc::new(handler)));
        self
    }

    /// Listen to a typed dom event.
    pub fn on<E, F>(self, handler: F) -> Self
    where
        E: DomEvent,
        F: Fn(E) + 'static,
    {
        self.on_event(E::event_type(), move |raw: web_sys::Event| {
            if let Some(event) = E::from_dom(raw) {
                handler(event);
            }
        })
    }

    pub fn on_click(mut self, callback: impl Into<Callback<()>>) -> Self {
        self.add_event_handler(super::Event::Click, EventCallback::Callback(callback.into()));
        self
    }

    pub fn on_click_opt(self, callback: Option<Callback<()>>) -> Self {
        match callback {
            Some(cb) => self.on_click(cb),
            None => self,
        }
    }

    #[inline]
    pub fn build_tag(self) -> VTag {
        self.tag
    }

    #[inline]
    pub fn build(self) -> VNode {
        VNode::Tag(self.tag)
    }
}

impl From<TagBuilder> for VNode {
    fn from(b: TagBuilder) -> Self {
        b.build()
    }
}

pub trait Render {
    fn render(self) -> VNode;
}

impl Render for TagBuilder {
    fn render(self) -> VNode {
        self.build()
    }
}

impl Render for VTag {
    fn render(self) -> VNode {
        VNode::Tag(self)
    }
}

impl Render for VNode {
    fn render(self) -> VNode {
        self
    }
}

impl Render for VComponent {
    fn render(self) -> VNode {
        VNode::Component(self)
    }
}

impl Render for String {
    fn render(self) -> VNode {
        VNode::Text(self)
    }
}

impl<'a> Render for &'a String {
    fn render(self) -> VNode {
        VNode::Text(self.clone())
    }
}

impl<'a> Render for &'a str {
    fn render(self) -> VNode {
        VNode::Text(self.to_string())
    }
}

/// Anything that can be added to a [`TagBuilder`].
pub trait DomExtend: Sized {
    fn extend(self, parent: &mut TagBuilder);
}

impl<R: Render> DomExtend for R {
    fn extend(self, parent: &mut TagBuilder) {
        parent.add_child(self.render())
    }
}

/// Attributes extend the element itself instead of adding a child.
impl DomExtend for Attrs {
    fn extend(self, parent: &mut TagBuilder) {
        parent.add_attrs(self);
    }
}

impl<T: DomExtend> DomExtend for Option<T> {
    fn extend(self, parent: &mut TagBuilder) {
        if let Some(inner) = self {
            inner.extend(parent);
        }
    }
}

impl<T: DomExtend> DomExtend for Vec<T> {
    fn extend(self, parent: &mut TagBuilder) {
        for item in self {
            item.extend(parent);
        }
    }
}

impl<A, B> DomExtend for (A, B)
where
    A: DomExtend,
    B: DomExtend,
{
    fn extend(self, parent: &mut TagBuilder) {
        self.0.extend(parent);
        self.1.extend(parent);
    }
}

impl<A, B, C> DomExtend for (A, B, C)
where
    A: DomExtend,
    B: DomExtend,
    C: DomExtend,
{
    fn extend(self, parent: &mut TagBuilder) {
        self.0.extend(parent);
        self.1.extend(parent);
        self.2.extend(parent);
    }
}

impl<A, B, C, D> DomExtend for (A, B, C, D)
where
    A: DomExtend,
    B: DomExtend,
    C: DomExtend,
    D: DomExtend,
{
    fn extend(self, parent: &mut TagBuilder) {
        self.0.extend(parent);
        self.1.extend(parent);
        self.2.extend(parent);
        self.3.extend(parent);
    }
}

impl<A, B, C, D, E> DomExtend for (A, B, C, D, E)
where
    A: DomExtend,
    B: DomExtend,
    C: DomExtend,
    D: DomExtend,
    E: DomExtend,
{
    fn extend(self, parent: &mut TagBuilder) {
        self.0.extend(parent);
        self.1.extend(parent);
        self.2.extend(parent);
        self.3.extend(parent);
        self.4.extend(parent);
    }
}

/// Construct a fragment from multiple items.
pub fn fragment<I, T>(items: I) -> VNode
where
    I: IntoIterator<Item = T>,
    T: Render,
{
    VNode::Fragment(items.into_iter().map(Render::render).collect())
}

pub mod builder {
    use super::{Tag, TagBuilder};

    #[inline]
    pub fn div() -> TagBuilder {
        TagBuilder::new(Tag::Div)
    }

    #[inline]
    pub fn span() -> TagBuilder {
        TagBuilder::new(Tag::Span)
    }

    #[inline]
    pub fn button() -> TagBuilder {
        TagBuilder::new(Tag::Button)
    }

    #[inline]
    pub fn p() -> TagBuilder {
        TagBuilder::new(Tag::P)
    }

    #[inline]
    pub fn h1() -> TagBuilder {
        TagBuilder::new(Tag::H1)
    }

    #[inline]
    pub fn h2() -> TagBuilder {
        TagBuilder::new(Tag::H2)
    }

    #[inline]
    pub fn ul() -> TagBuilder {
        TagBuilder::new(Tag::Ul)
    }

    #[inline]
    pub fn li() -> TagBuilder {
        TagBuilder::new(Tag::Li)
    }

    #[inline]
    pub fn main() -> TagBuilder {
        TagBuilder::new(Tag::Main)
    }

    #[inline]
    pub fn input() -> TagBuilder {
        TagBuilder::new(Tag::Input)
    }

    #[inline]
    pub fn link() -> TagBuilder {
        TagBuilder::new(Tag::Link)
    }

    #[inline]
    pub fn script() -> TagBuilder {
        TagBuilder::new(Tag::Script)
    }
}
