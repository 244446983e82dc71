mod attr;
mod event;
mod mount;
mod node;
mod tag;
mod view;

pub use self::{
    attr::{Attr, AttrName, Attrs},
    event::{ClickEvent, DomEvent, Event, EventName, InputEvent, KeyDownEvent},
    mount::Node,
    node::{builder, fragment, DomExtend, Render, TagBuilder},
    tag::Tag,
    view::{EventCallback, EventHandler, VNode, VTag},
};

pub(crate) use self::mount::RootSource;
