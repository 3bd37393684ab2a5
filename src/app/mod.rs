//! App module - contains the main application state and logic

pub mod session;
mod sidebar;
mod views;

use crate::api::{ApiClient, ApiReply, ApiRequest};
use crate::settings::{validate_api_url, Settings};
use crate::theme;
use eframe::egui;
use session::Session;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use tracing::{debug, error, info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) session: Session,
    pub(crate) client: ApiClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    reply_tx: Sender<ApiReply>,
    reply_rx: Receiver<ApiReply>,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Sidebar settings
    pub(crate) show_settings: bool,
    pub(crate) api_url_input: String,
    pub(crate) api_url_error: Option<String>,
    // Window geometry, saved on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    settings: Settings,
    data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        api_url: String,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Phosphor icons for navigation and banners
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let (reply_tx, reply_rx) = mpsc::channel();
        Self {
            session: Session::default(),
            client: ApiClient::new(&api_url),
            runtime,
            reply_tx,
            reply_rx,
            logo_texture: None,
            show_settings: false,
            api_url_input: api_url,
            api_url_error: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            settings,
            data_dir,
        }
    }

    /// Run one request in the background; the reply is picked up by
    /// [`App::poll_replies`] on a later frame.
    pub(crate) fn dispatch(&self, request: Option<ApiRequest>, ctx: &egui::Context) {
        let Some(request) = request else {
            return;
        };
        debug!(request = ?request, "Dispatching request");
        let client = self.client.clone();
        let tx = self.reply_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let reply = client.execute(request).await;
            if tx.send(reply).is_err() {
                warn!("Reply dropped, window already closed");
            }
            ctx.request_repaint();
        });
    }

    pub(crate) fn poll_replies(&mut self) {
        loop {
            match self.reply_rx.try_recv() {
                Ok(reply) => self.session.apply(reply),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    error!("Reply channel disconnected");
                    break;
                }
            }
        }
    }

    /// Validate the sidebar's URL input and point the client at it.
    pub(crate) fn apply_api_url(&mut self) {
        match validate_api_url(&self.api_url_input) {
            Ok(url) => {
                info!(url = %url, "API URL changed");
                self.client = ApiClient::new(&url);
                self.api_url_input = url.clone();
                self.api_url_error = None;
                self.settings.api_url = Some(url);
                self.save_settings();
            }
            Err(reason) => {
                warn!(value = %self.api_url_input, reason = %reason, "Rejected API URL");
                self.api_url_error = Some(format!("Invalid URL: {}", reason));
            }
        }
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.save(&self.data_dir);
    }
}
