//! Background user name lookup

use super::App;
use crate::users::{load_user_name, UserDirectory};
use eframe::egui;
use tokio::sync::oneshot;
use tracing::{debug, info};

impl App {
    /// Kick off the lookup once. The UI keeps running while it is pending.
    pub fn start_user_load(&mut self, ctx: &egui::Context, directory: Box<dyn UserDirectory>) {
        if self.user_load_started {
            return;
        }
        self.user_load_started = true;

        let (tx, rx) = oneshot::channel();
        self.user_rx = Some(rx);
        let ctx = ctx.clone();

        debug!("Starting user lookup");
        self.runtime.spawn(async move {
            let name = load_user_name(directory.as_ref()).await;
            if tx.send(name).is_err() {
                debug!("UI dropped before user lookup finished");
            }
            ctx.request_repaint();
        });
    }

    /// Pick up the lookup result if it has arrived
    pub fn poll_user_load(&mut self) {
        let Some(rx) = self.user_rx.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(name) => {
                if let Some(name) = &name {
                    info!(name = %name, "User loaded");
                }
                self.vibe.set_user_name(name);
                self.user_rx = None;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                debug!("User lookup task ended without a result");
                self.user_rx = None;
            }
        }
    }
}
