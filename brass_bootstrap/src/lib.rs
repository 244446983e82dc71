//! [Bootstrap](https://getbootstrap.com) components for brass.
//!
//! The components only emit the markup, classes and `data-bs-*` attributes
//! the Bootstrap bundle script understands. All interactive behaviour
//! (transitions, focus trapping, backdrop handling) stays with that script,
//! which has to be loaded into the page. See [`Assets`].

mod assets;
mod bridge;
mod button;
mod control;
mod modal;

use brass::dom::AttrName;

pub use self::{
    assets::Assets,
    bridge::{DomHost, ModalBridge, WidgetHost},
    button::{Button, ButtonSize, ButtonVariant, CloseButton},
    control::ModalControl,
    modal::{
        hide_modal_on_click, show_modal_on_click, Modal, ModalComponent, ModalSize,
        ModalTrigger,
    },
};

brass::make_str_enum! {
    /// The `data-bs-*` attributes read by the Bootstrap script.
    BsAttr {
        Toggle = "data-bs-toggle",
        Target = "data-bs-target",
        Dismiss = "data-bs-dismiss",
        Backdrop = "data-bs-backdrop",
    }
}

impl From<BsAttr> for AttrName {
    fn from(attr: BsAttr) -> Self {
        AttrName::new(attr.as_str())
    }
}

/// Value of the toggle and dismiss attributes for modals.
pub const MODAL: &str = "modal";

/// Emitted by Bootstrap on the modal element once it is fully hidden.
pub const HIDDEN_EVENT: &str = "hidden.bs.modal";
