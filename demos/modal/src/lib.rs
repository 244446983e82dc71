use brass::{
    dom::{
        builder::{div, h1, main, p, span},
        Attr, VNode,
    },
    Component, Context, Handle,
};
use brass_bootstrap::{
    Assets, Button, ButtonVariant, Modal, ModalComponent, ModalControl, ModalSize, ModalTrigger,
};
use wasm_bindgen::prelude::*;

enum Msg {
    Confirmed,
    Cancelled,
    Closed,
}

/// Shows what the modal reported last.
struct Status {
    last: &'static str,
    closed: u32,
}

impl Component for Status {
    type Properties = ();
    type Msg = Msg;

    fn init(_props: (), _ctx: &Context<Self>) -> Self {
        Self {
            last: "nothing yet",
            closed: 0,
        }
    }

    fn update(&mut self, msg: Msg, _ctx: &Context<Self>) -> bool {
        match msg {
            Msg::Confirmed => self.last = "confirmed",
            Msg::Cancelled => self.last = "cancelled",
            Msg::Closed => self.closed += 1,
        }
        true
    }

    fn change(&mut self, _props: (), _ctx: &Context<Self>) -> bool {
        false
    }

    fn render(&self, _ctx: &Context<Self>) -> VNode {
        p().class("text-muted")
            .text(format!("Last action: {}. ", self.last))
            .and(span().text(format!("Closed {} times.", self.closed)))
            .into()
    }
}

fn delete_modal(status: &Handle<Status>) -> Modal {
    Modal::new("delete-modal", || {
        p().text("This item will be removed permanently.").into()
    })
    .title("Delete item?")
    .negative_button_text("Cancel")
    .positive_button_text("Delete")
    .size(ModalSize::Small)
    .on_negative_button_click(status.callback(|_: ()| Msg::Cancelled))
    .on_positive_button_click(status.callback(|_: ()| Msg::Confirmed))
    .on_close(status.callback(|_: ()| Msg::Closed))
}

fn info_modal() -> Modal {
    Modal::new("info-modal", || {
        p().text("Click outside of this dialog to close it.").into()
    })
    .title("About")
    .closable_outside(true)
    .size(ModalSize::Large)
}

#[wasm_bindgen(start)]
pub fn start() {
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_console_config(tracing_wasm::ConsoleConfig::ReportWithoutConsoleColor)
            .set_report_logs_in_timings(false)
            .build(),
    );
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    if let Err(err) = Assets::default().install() {
        tracing::error!(?err, "Could not install bootstrap assets");
    }

    let doc = brass::web::document();
    let root = doc.create_element("div").unwrap();
    doc.body().unwrap().append_child(&root).unwrap();

    brass::launch(root.clone(), || {
        main()
            .class("container py-4")
            .and(h1().text("brass + bootstrap"))
            .and(
                div()
                    .class("d-flex gap-2")
                    .and(
                        Button::new("Delete item")
                            .variant(ButtonVariant::Danger)
                            .view()
                            .show_modal_on_click("delete-modal"),
                    )
                    .and(
                        Button::new("About")
                            .variant(ButtonVariant::Secondary)
                            .outline(true)
                            .on_click(|_: ()| {
                                let res = ModalControl::by_id("info-modal").and_then(|m| m.show());
                                if let Err(err) = res {
                                    tracing::error!(?err, "Could not open modal");
                                }
                            }),
                    ),
            )
            .attr(Attr::Role, "main")
            .into()
    });

    let status = brass::mount_component::<Status>(&root, ());
    let handle = status.handle();
    std::mem::forget(status);

    brass::launch(root.clone(), move || {
        div()
            .component::<ModalComponent>(delete_modal(&handle))
            .into()
    });
    brass::launch_component::<ModalComponent>(root, info_modal());
}
