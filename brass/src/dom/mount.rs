use std::{any::Any, rc::Rc};

use wasm_bindgen::JsCast;

use crate::{
    effect::EventSubscription,
    web::{document, remove_node},
};

use super::{Attrs, Tag, VNode, VTag};

/// Something that currently owns dom nodes, like a mounted component.
///
/// Its nodes can change on every re-render, so they are looked up on demand.
pub(crate) trait RootSource {
    fn collect_roots(&self, out: &mut Vec<web_sys::Node>);
}

enum Root {
    Dom(web_sys::Node),
    Source(Rc<dyn RootSource>),
}

/// A mounted dom subtree.
///
/// Owns everything that must live as long as the dom nodes do: event
/// listeners and nested components. Dropping a `Node` removes its listeners
/// and destroys nested components but leaves the dom nodes in place; use
/// [`Node::detach`] to remove them from the document.
#[must_use]
pub struct Node {
    roots: Vec<Root>,
    // Tag and attributes of a single root element, as rendered.
    rendered: Option<(Tag, Attrs)>,
    listeners: Vec<EventSubscription>,
    retained: Vec<Box<dyn Any>>,
    // Run once the roots are attached, in document order.
    mount_hooks: Vec<Box<dyn FnOnce()>>,
}

impl Node {
    fn empty() -> Self {
        Self {
            roots: Vec::new(),
            rendered: None,
            listeners: Vec::new(),
            retained: Vec::new(),
            mount_hooks: Vec::new(),
        }
    }

    /// Create the dom nodes for a virtual tree.
    ///
    /// The nodes are not attached to the document yet.
    pub fn build(vnode: VNode) -> Self {
        let mut node = Self::empty();
        match vnode {
            VNode::Tag(tag) => {
                let rendered = (tag.tag, tag.attrs.clone());
                let elem = node.build_tag(tag);
                node.push_dom(elem.into(), None);
                node.rendered = Some(rendered);
            }
            other => node.build_child(other, None),
        }
        node
    }

    /// The current top level dom nodes, including those of nested
    /// components.
    pub fn roots(&self) -> Vec<web_sys::Node> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect(&self, out: &mut Vec<web_sys::Node>) {
        for root in &self.roots {
            match root {
                Root::Dom(node) => out.push(node.clone()),
                Root::Source(source) => source.collect_roots(out),
            }
        }
    }

    /// The first root that is an element.
    pub fn element(&self) -> Option<web_sys::Element> {
        self.roots()
            .into_iter()
            .find_map(|n| n.dyn_into::<web_sys::Element>().ok())
    }

    /// Number of event listeners owned by this subtree, excluding nested
    /// components.
    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Append the roots to `parent` and run pending mount hooks.
    pub fn attach(&mut self, parent: &web_sys::Node) {
        for root in self.roots() {
            if let Err(err) = parent.append_child(&root) {
                tracing::error!(?err, "Could not attach node");
            }
        }
        self.run_mount_hooks();
    }

    /// Put this subtree where `old` currently is and remove `old` from the
    /// document.
    ///
    /// Returns `false` if `old` was not attached, in which case nothing is
    /// inserted.
    pub fn replace(&mut self, old: &Node) -> bool {
        let anchor = match old.roots().into_iter().next() {
            Some(anchor) => anchor,
            None => return false,
        };
        let parent = match anchor.parent_node() {
            Some(parent) => parent,
            None => return false,
        };
        for root in self.roots() {
            if let Err(err) = parent.insert_before(&root, Some(&anchor)) {
                tracing::error!(?err, "Could not insert node");
            }
        }
        old.detach();
        self.run_mount_hooks();
        true
    }

    /// Bring the subtree in line with `vnode`.
    ///
    /// If both the old and the new tree are a single element with the same
    /// tag and the same id, the element is kept: its attributes are updated in
    /// place and only its children are rebuilt. Attributes and class tokens
    /// the element gained outside of rendering are left alone.
    /// Anything else is rebuilt and replaces the old subtree.
    pub fn update(self, vnode: VNode) -> Node {
        match vnode {
            VNode::Tag(tag) => match self.kept_root(&tag) {
                Some(elem) => self.patch_root(elem, tag),
                None => self.rebuild(VNode::Tag(tag)),
            },
            other => self.rebuild(other),
        }
    }

    fn rebuild(self, vnode: VNode) -> Node {
        let mut node = Node::build(vnode);
        if !node.replace(&self) {
            tracing::warn!("Updated a node that is not attached");
        }
        node
    }

    fn kept_root(&self, new: &VTag) -> Option<web_sys::Element> {
        let (tag, attrs) = self.rendered.as_ref()?;
        let id = attrs.get("id")?;
        if *tag != new.tag || new.id() != Some(id) {
            return None;
        }
        match self.roots.as_slice() {
            [Root::Dom(node)] => node.clone().dyn_into::<web_sys::Element>().ok(),
            _ => None,
        }
    }

    fn patch_root(self, elem: web_sys::Element, vtag: VTag) -> Node {
        let Node {
            rendered,
            listeners,
            retained,
            ..
        } = self;
        let old_attrs = rendered.map(|(_, attrs)| attrs).unwrap_or_default();

        let VTag {
            tag,
            attrs,
            children,
            handlers,
        } = vtag;

        for (name, _) in old_attrs.iter() {
            if !name.is_class() && !attrs.contains(name.as_str()) {
                if let Err(err) = elem.remove_attribute(name.as_str()) {
                    tracing::error!(?err, attribute=%name, "Could not remove attribute");
                }
            }
        }
        for (name, value) in attrs.iter() {
            if name.is_class() {
                continue;
            }
            if elem.get_attribute(name.as_str()).as_deref() != Some(value) {
                if let Err(err) = elem.set_attribute(name.as_str(), value) {
                    tracing::error!(?err, attribute=%name, "Could not set attribute");
                }
            }
        }
        let current = elem.get_attribute("class").unwrap_or_default();
        let classes = patch_classes(&current, &old_attrs, &attrs);
        if classes != current {
            if let Err(err) = elem.set_attribute("class", &classes) {
                tracing::error!(?err, "Could not set class attribute");
            }
        }

        while let Some(child) = elem.first_child() {
            remove_node(&child);
        }
        // Old listeners go away and nested components are destroyed before
        // the new children are built.
        drop(listeners);
        drop(retained);

        let mut node = Node::empty();
        {
            let parent: &web_sys::Node = elem.as_ref();
            for child in children {
                node.build_child(child, Some(parent));
            }
        }
        node.add_handlers(&elem, handlers);
        node.roots.push(Root::Dom(elem.into()));
        node.rendered = Some((tag, attrs));
        node.run_mount_hooks();
        node
    }

    /// Remove the roots from the document.
    pub fn detach(&self) {
        for root in self.roots() {
            remove_node(&root);
        }
    }

    pub(crate) fn run_mount_hooks(&mut self) {
        for hook in std::mem::take(&mut self.mount_hooks) {
            hook();
        }
    }

    pub(crate) fn add_mount_hook<F: FnOnce() + 'static>(&mut self, hook: F) {
        self.mount_hooks.push(Box::new(hook));
    }

    pub(crate) fn retain<V: 'static>(&mut self, value: V) {
        self.retained.push(Box::new(value));
    }

    /// Add the nodes of `source` either to `parent`, or as a root that is
    /// resolved whenever the roots are needed.
    pub(crate) fn push_source(
        &mut self,
        source: Rc<dyn RootSource>,
        parent: Option<&web_sys::Node>,
    ) {
        match parent {
            Some(parent) => {
                let mut nodes = Vec::new();
                source.collect_roots(&mut nodes);
                for node in nodes {
                    self.push_dom(node, Some(parent));
                }
            }
            None => self.roots.push(Root::Source(source)),
        }
    }

    fn push_dom(&mut self, node: web_sys::Node, parent: Option<&web_sys::Node>) {
        match parent {
            Some(parent) => {
                if let Err(err) = parent.append_child(&node) {
                    tracing::error!(?err, "Could not append child node");
                }
            }
            None => self.roots.push(Root::Dom(node)),
        }
    }

    fn build_child(&mut self, vnode: VNode, parent: Option<&web_sys::Node>) {
        match vnode {
            VNode::Empty => {
                let placeholder = document().create_comment("");
                self.push_dom(placeholder.into(), parent);
            }
            VNode::Text(value) => {
                let text = document().create_text_node(&value);
                self.push_dom(text.into(), parent);
            }
            VNode::Tag(tag) => {
                let elem = self.build_tag(tag);
                self.push_dom(elem.into(), parent);
            }
            VNode::Fragment(items) => {
                for item in items {
                    self.build_child(item, parent);
                }
            }
            VNode::Component(comp) => {
                comp.mount(parent, self);
            }
        }
    }

    fn build_tag(&mut self, vtag: VTag) -> web_sys::Element {
        let VTag {
            tag,
            attrs,
            children,
            handlers,
        } = vtag;

        let elem = document()
            .create_element(tag.as_str())
            .expect("Could not create element");

        for (name, value) in attrs.iter() {
            if let Err(err) = elem.set_attribute(name.as_str(), value) {
                tracing::error!(?err, attribute=%name, "Could not set attribute");
            }
        }

        {
            let parent: &web_sys::Node = elem.as_ref();
            for child in children {
                self.build_child(child, Some(parent));
            }
        }

        self.add_handlers(&elem, handlers);
        elem
    }

    fn add_handlers(&mut self, elem: &web_sys::Element, handlers: Vec<super::EventHandler>) {
        for handler in handlers {
            let callback = handler.callback;
            let sub = EventSubscription::subscribe_raw(
                elem.clone().into(),
                handler.event,
                move |ev: web_sys::Event| callback.invoke(ev),
            );
            self.listeners.push(sub);
        }
    }
}

/// The class attribute after re-rendering with `new` instead of `old`.
///
/// Tokens that are in `current` but were never rendered stay where they
/// are.
fn patch_classes(current: &str, old: &Attrs, new: &Attrs) -> String {
    let mut tokens: Vec<&str> = current
        .split_whitespace()
        .filter(|token| new.has_class(token) || !old.has_class(token))
        .collect();
    for token in new.classes() {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}
