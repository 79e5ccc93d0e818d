//! Walkthroughs of the overlay channels, rendered by the terminal host.

use super::host::{self, ConfirmPolicy};
use super::print_json;
use anyhow::Result;
use clap::Subcommand;
use garage_application::ConsoleContext;
use garage_core::ui::{ConfirmOptions, ModalDismiss};
use serde_json::json;
use std::time::Duration;

#[derive(Subcommand)]
pub enum DemoAction {
    /// Push one toast of each kind and wait for them to expire
    Toasts,
    /// Open two modals in a row, then dismiss via the overlay
    Modal,
    /// Ask a yes/no question
    Confirm {
        #[arg(long, default_value = "Confirm")]
        title: String,
        #[arg(long, default_value = "Proceed?")]
        message: String,
        #[arg(long)]
        danger: bool,
        /// Answer yes without prompting
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(ctx: &ConsoleContext, action: DemoAction) -> Result<()> {
    match action {
        DemoAction::Toasts => toasts(ctx).await,
        DemoAction::Modal => modal(ctx).await,
        DemoAction::Confirm {
            title,
            message,
            danger,
            yes,
        } => {
            let mut options = ConfirmOptions::new(title, message);
            if danger {
                options = options.danger();
            }
            confirm(ctx, options, ConfirmPolicy::from_flag(yes)).await
        }
    }
}

async fn toasts(ctx: &ConsoleContext) -> Result<()> {
    let store = ctx.ui();
    let renderer = host::spawn(store.clone(), ConfirmPolicy::Ask);

    let toast = store.toast();
    toast.success("Job card JC-1042 created");
    toast.info("Technician assigned");
    toast.warning("Brake pads below reorder level");
    toast.error("Invoice sync failed");

    tokio::time::sleep(store.config().toast_ttl + Duration::from_millis(100)).await;
    renderer.abort();
    print_json(&json!({ "remaining": store.toasts().len() }))
}

async fn modal(ctx: &ConsoleContext) -> Result<()> {
    let store = ctx.ui();
    let renderer = host::spawn(store.clone(), ConfirmPolicy::Ask);

    store.open_modal("Vehicle GT-4411-20", json!({ "make": "Toyota", "model": "Corolla" }));
    store.open_modal("Customer", "Ama Owusu, 024 555 0100");
    tokio::task::yield_now().await;
    print_json(&store.snapshot().modal)?;

    store.dismiss_modal(ModalDismiss::Overlay);
    tokio::task::yield_now().await;
    renderer.abort();
    print_json(&store.snapshot().modal)
}

async fn confirm(ctx: &ConsoleContext, options: ConfirmOptions, policy: ConfirmPolicy) -> Result<()> {
    let renderer = host::spawn(ctx.ui().clone(), policy);
    let answer = ctx.ui().confirm(options).await;
    renderer.abort();
    print_json(&json!({ "confirmed": answer }))
}
