use brass::{
    dom::{builder::button, Attr, Attrs, Render, TagBuilder, VNode},
    Callback,
};

brass::make_str_enum! {
    /// Contextual color of a [`Button`].
    ButtonVariant {
        Primary = "primary",
        Secondary = "secondary",
        Success = "success",
        Danger = "danger",
        Warning = "warning",
        Info = "info",
        Light = "light",
        Dark = "dark",
        Link = "link",
    }
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub fn as_class(self, outline: bool) -> String {
        // There is no outline variant of link buttons.
        if outline && self != Self::Link {
            format!("btn-outline-{}", self.as_str())
        } else {
            format!("btn-{}", self.as_str())
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Normal,
    Small,
    Large,
}

impl ButtonSize {
    pub fn as_class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Small => Some("btn-sm"),
            Self::Large => Some("btn-lg"),
        }
    }
}

/// A `.btn` button.
#[derive(Clone, Debug, Default)]
pub struct Button {
    pub text: String,
    pub variant: ButtonVariant,
    pub outline: bool,
    pub size: ButtonSize,
    pub disabled: bool,
    pub on_click: Option<Callback<()>>,
    /// Merged into the button element.
    pub attrs: Attrs,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, callback: impl Into<Callback<()>>) -> Self {
        self.on_click = Some(callback.into());
        self
    }

    pub fn on_click_opt(mut self, callback: Option<Callback<()>>) -> Self {
        self.on_click = callback;
        self
    }

    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs.merge(attrs);
        self
    }

    pub fn view(&self) -> TagBuilder {
        button()
            .attrs(self.attrs.clone())
            .attr(Attr::Type, "button")
            .class("btn")
            .class(&self.variant.as_class(self.outline))
            .class_opt(self.size.as_class())
            .attr_toggle_if(self.disabled, Attr::Disabled)
            .on_click_opt(self.on_click.clone())
            .text(self.text.as_str())
    }
}

impl Render for Button {
    fn render(self) -> VNode {
        self.view().build()
    }
}

/// The `.btn-close` icon button.
#[derive(Clone, Debug, Default)]
pub struct CloseButton {
    pub disabled: bool,
    pub on_click: Option<Callback<()>>,
    pub attrs: Attrs,
}

impl CloseButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, callback: impl Into<Callback<()>>) -> Self {
        self.on_click = Some(callback.into());
        self
    }

    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs.merge(attrs);
        self
    }

    pub fn view(&self) -> TagBuilder {
        button()
            .attrs(self.attrs.clone())
            .attr(Attr::Type, "button")
            .class("btn-close")
            .attr(Attr::AriaLabel, "Close")
            .attr_toggle_if(self.disabled, Attr::Disabled)
            .on_click_opt(self.on_click.clone())
    }
}

impl Render for CloseButton {
    fn render(self) -> VNode {
        self.view().build()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use brass::dom::Event;

    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(ButtonVariant::Primary.as_class(false), "btn-primary");
        assert_eq!(
            ButtonVariant::Secondary.as_class(true),
            "btn-outline-secondary"
        );
        assert_eq!(ButtonVariant::Link.as_class(true), "btn-link");
    }

    #[test]
    fn test_button_markup() {
        let html = Button::new("Save")
            .variant(ButtonVariant::Success)
            .size(ButtonSize::Small)
            .disabled(true)
            .view()
            .build()
            .to_string();
        assert_eq!(
            html,
            r#"<button type="button" class="btn btn-success btn-sm" disabled="">Save</button>"#
        );
    }

    #[test]
    fn test_button_extra_attrs_are_kept() {
        let tag = Button::new("Go")
            .attrs(Attrs::new().with(Attr::Id, "go").with(Attr::Class, "ms-2"))
            .view()
            .build_tag();
        assert_eq!(tag.id(), Some("go"));
        assert!(tag.has_class("ms-2"));
        assert!(tag.has_class("btn"));
        assert_eq!(tag.attr("type"), Some("button"));
    }

    #[test]
    fn test_button_click_invokes_callback() {
        let clicks = Rc::new(Cell::new(0));
        let clicks2 = clicks.clone();
        let tag = Button::new("Go")
            .on_click(move |_: ()| clicks2.set(clicks2.get() + 1))
            .view()
            .build_tag();
        assert_eq!(tag.simulate(Event::Click), 1);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_button_without_callback_has_no_handler() {
        let tag = Button::new("Go").view().build_tag();
        assert!(tag.handlers().is_empty());
    }

    #[test]
    fn test_close_button_markup() {
        assert_eq!(
            CloseButton::new().view().build().to_string(),
            r#"<button type="button" class="btn-close" aria-label="Close"></button>"#
        );
    }
}
