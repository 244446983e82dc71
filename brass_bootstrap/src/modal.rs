use std::{convert::Infallible, fmt, rc::Rc};

use brass::{
    dom::{
        builder::{div, h2},
        Attr, Attrs, Render, TagBuilder, VNode,
    },
    Callback, Component, Context,
};

use crate::{
    bridge::{DomHost, ModalBridge},
    BsAttr, Button, ButtonVariant, CloseButton, MODAL,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModalSize {
    #[default]
    None,
    Small,
    Large,
    ExtraLarge,
}

impl ModalSize {
    /// The class added to `.modal-dialog`.
    pub fn as_class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Small => Some("modal-sm"),
            Self::Large => Some("modal-lg"),
            Self::ExtraLarge => Some("modal-xl"),
        }
    }
}

/// A Bootstrap modal dialog.
///
/// The modal is hidden until opened, either by an element carrying
/// [`show_modal_on_click`] or through [`crate::ModalControl`].
///
/// The id must be unique in the document and should stay the same for the
/// lifetime of the modal, the Bootstrap script addresses the modal by it.
#[derive(Clone)]
pub struct Modal {
    pub id: String,
    /// Renders a header with the title and a close button.
    /// Without a title no header is rendered.
    pub title: Option<String>,
    pub body: Rc<dyn Fn() -> VNode>,
    /// Label of the secondary footer button.
    /// An empty label hides the button.
    pub negative_button_text: Option<String>,
    /// Label of the primary footer button.
    /// An empty label hides the button.
    pub positive_button_text: Option<String>,
    /// Whether a click on the backdrop closes the modal.
    pub closable_outside: bool,
    pub centered: bool,
    pub size: ModalSize,
    /// Called every time the modal was hidden, no matter how.
    pub on_close: Option<Callback<()>>,
    pub on_negative_button_click: Option<Callback<()>>,
    pub on_positive_button_click: Option<Callback<()>>,
    /// Extra attributes for the outer `.modal` element.
    pub attrs: Attrs,
}

impl Modal {
    pub fn new<F>(id: impl Into<String>, body: F) -> Self
    where
        F: Fn() -> VNode + 'static,
    {
        Self {
            id: id.into(),
            title: None,
            body: Rc::new(body),
            negative_button_text: None,
            positive_button_text: None,
            closable_outside: false,
            centered: true,
            size: ModalSize::None,
            on_close: None,
            on_negative_button_click: None,
            on_positive_button_click: None,
            attrs: Attrs::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn negative_button_text(mut self, text: impl Into<String>) -> Self {
        self.negative_button_text = Some(text.into());
        self
    }

    pub fn positive_button_text(mut self, text: impl Into<String>) -> Self {
        self.positive_button_text = Some(text.into());
        self
    }

    pub fn closable_outside(mut self, closable: bool) -> Self {
        self.closable_outside = closable;
        self
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn on_close(mut self, callback: impl Into<Callback<()>>) -> Self {
        self.on_close = Some(callback.into());
        self
    }

    pub fn on_negative_button_click(mut self, callback: impl Into<Callback<()>>) -> Self {
        self.on_negative_button_click = Some(callback.into());
        self
    }

    pub fn on_positive_button_click(mut self, callback: impl Into<Callback<()>>) -> Self {
        self.on_positive_button_click = Some(callback.into());
        self
    }

    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs.merge(attrs);
        self
    }

    /// Render the markup.
    ///
    /// This does not listen to [`crate::HIDDEN_EVENT`], so `on_close` is not
    /// called. Use [`ModalComponent`] for that.
    pub fn view(&self) -> TagBuilder {
        let dialog = div()
            .class("modal-dialog")
            .class_opt(self.size.as_class())
            .class_if(self.centered, "modal-dialog-centered")
            .and(
                div()
                    .class("modal-content")
                    .and(self.title.as_deref().map(header))
                    .and(div().class("modal-body").and((self.body)()))
                    .and(self.footer()),
            );

        div()
            .attrs(self.attrs.clone())
            .attr(Attr::Id, self.id.as_str())
            .class("modal fade")
            .attr_if(!self.closable_outside, BsAttr::Backdrop, "static")
            .attr(Attr::TabIndex, "-1")
            .and(dialog)
    }

    fn footer(&self) -> Option<TagBuilder> {
        if self.negative_button_text.is_none() && self.positive_button_text.is_none() {
            return None;
        }
        let negative = action_button(
            self.negative_button_text.as_deref(),
            ButtonVariant::Secondary,
            &self.on_negative_button_click,
        );
        let positive = action_button(
            self.positive_button_text.as_deref(),
            ButtonVariant::Primary,
            &self.on_positive_button_click,
        );
        Some(div().class("modal-footer").and(negative).and(positive))
    }
}

fn header(title: &str) -> TagBuilder {
    div()
        .class("modal-header")
        .and(h2().class("modal-title").text(title))
        .and(CloseButton::new().attrs(hide_modal_on_click()))
}

fn action_button(
    text: Option<&str>,
    variant: ButtonVariant,
    on_click: &Option<Callback<()>>,
) -> Option<Button> {
    let text = text.filter(|t| !t.is_empty())?;
    let button = Button::new(text)
        .variant(variant)
        .attrs(hide_modal_on_click())
        .on_click_opt(on_click.clone());
    Some(button)
}

impl fmt::Debug for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modal")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("negative_button_text", &self.negative_button_text)
            .field("positive_button_text", &self.positive_button_text)
            .field("closable_outside", &self.closable_outside)
            .field("centered", &self.centered)
            .field("size", &self.size)
            .finish()
    }
}

impl Render for Modal {
    fn render(self) -> VNode {
        self.view().build()
    }
}

/// Attributes that make an element open the modal with the given id.
pub fn show_modal_on_click(id: &str) -> Attrs {
    Attrs::new()
        .with(BsAttr::Toggle, MODAL)
        .with(BsAttr::Target, format!("#{}", id))
}

/// Attributes that make an element close the modal it is placed in.
pub fn hide_modal_on_click() -> Attrs {
    Attrs::new().with(BsAttr::Dismiss, MODAL)
}

/// Adds the modal trigger attributes to an element.
pub trait ModalTrigger {
    fn show_modal_on_click(self, id: &str) -> Self;
    fn hide_modal_on_click(self) -> Self;
}

impl ModalTrigger for TagBuilder {
    fn show_modal_on_click(self, id: &str) -> Self {
        self.attrs(show_modal_on_click(id))
    }

    fn hide_modal_on_click(self) -> Self {
        self.attrs(hide_modal_on_click())
    }
}

/// A [`Modal`] that reports [`crate::HIDDEN_EVENT`] to `on_close`.
///
/// The listener is added once the modal element is in the document, and
/// removed when the component is destroyed or the element is replaced.
pub struct ModalComponent {
    props: Modal,
    bridge: ModalBridge<DomHost>,
}

impl ModalComponent {
    pub fn props(&self) -> &Modal {
        &self.props
    }

    pub fn is_subscribed(&self) -> bool {
        self.bridge.is_subscribed()
    }

    /// The element the hidden listener is registered on.
    pub fn subscription_target(&self) -> Option<web_sys::EventTarget> {
        self.bridge.subscription().map(|sub| sub.target().clone())
    }
}

impl Component for ModalComponent {
    type Properties = Modal;
    type Msg = Infallible;

    fn init(props: Modal, _ctx: &Context<Self>) -> Self {
        let bridge = ModalBridge::new(DomHost, props.on_close.clone());
        Self { props, bridge }
    }

    fn update(&mut self, msg: Infallible, _ctx: &Context<Self>) -> bool {
        match msg {}
    }

    fn change(&mut self, props: Modal, _ctx: &Context<Self>) -> bool {
        self.bridge.set_on_close(props.on_close.clone());
        self.props = props;
        true
    }

    fn render(&self, _ctx: &Context<Self>) -> VNode {
        self.props.view().build()
    }

    fn on_render(&mut self, _first_render: bool) {
        self.bridge.sync(&self.props.id);
    }

    fn destroy(&mut self) {
        self.bridge.unmount();
    }
}
