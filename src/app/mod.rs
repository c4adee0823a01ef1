//! App module - contains the main application state and logic

mod requests;
mod settings_modal;
mod views;

use requests::Session;

use crate::client::RequestHandler;
use crate::settings::Settings;
use crate::theme;
use crate::types::Completion;
use crate::utils::normalize_base_url;
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Input, display and request sequencing
    pub(crate) session: Session,
    pub(crate) focus_input: bool,
    // Requests
    pub(crate) handler: RequestHandler,
    pub(crate) completion_tx: UnboundedSender<Completion>,
    pub(crate) completion_rx: UnboundedReceiver<Completion>,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Settings dialog
    pub(crate) show_settings: bool,
    pub(crate) base_url_draft: String,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let (completion_tx, completion_rx) = tokio::sync::mpsc::unbounded_channel();
        let handler = RequestHandler::new(&settings.base_url);
        info!(base_url = handler.base_url(), "Request handler ready");

        Self {
            session: Session::default(),
            focus_input: true,
            base_url_draft: handler.base_url().to_string(),
            handler,
            completion_tx,
            completion_rx,
            runtime,
            show_settings: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            base_url: self.handler.base_url().to_string(),
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }

    /// Point future requests at a new service address. In-flight requests
    /// keep the handler they were started with.
    pub fn set_base_url(&mut self, url: &str) {
        let url = normalize_base_url(url);
        self.base_url_draft = url.clone();
        if url == self.handler.base_url() {
            return;
        }
        info!(old = self.handler.base_url(), new = %url, "Service address changed");
        self.handler = RequestHandler::new(&url);
        self.save_settings();
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_busy()
    }
}
