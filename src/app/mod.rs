use crate::data::QuestionBank;
use crate::routes::Route;
use crate::session::SessionState;
use egui::Visuals;

pub mod loader;

pub use loader::LoadPhase;

/// Storage key for the one persisted preference.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// The application: the question bank, the load machinery, and the single
/// session state container everything else borrows.
pub struct QuizApp {
    pub bank: QuestionBank,
    pub load: LoadPhase,
    pub session: SessionState,
    /// Blocking notification for rejected selections; cleared on success.
    pub message: String,
    /// `None` means "no explicit choice yet": egui keeps following the OS
    /// light/dark preference until the user toggles.
    pub dark_mode: Option<bool>,
    /// Year/week seeded by the route, applied once the bank has loaded.
    pending_route: Option<Route>,
    load_rx: Option<std::sync::mpsc::Receiver<loader::LoadMessage>>,
    load_generation: u64,
}

impl QuizApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let dark_mode: Option<bool> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, DARK_MODE_KEY))
            .flatten();
        if let Some(dark) = dark_mode {
            cc.egui_ctx
                .set_visuals(if dark { Visuals::dark() } else { Visuals::light() });
        }

        #[cfg(target_arch = "wasm32")]
        let route = {
            let path = web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            crate::routes::parse_route(&path)
        };
        #[cfg(not(target_arch = "wasm32"))]
        let route = Route::Home;

        let mut app = Self {
            bank: QuestionBank::default(),
            load: LoadPhase::Pending,
            session: SessionState::new(),
            message: String::new(),
            dark_mode,
            pending_route: Some(route),
            load_rx: None,
            load_generation: 0,
        };
        app.start_load(&cc.egui_ctx);
        app
    }

    pub fn set_dark_mode(&mut self, ctx: &egui::Context, dark: bool) {
        self.dark_mode = Some(dark);
        ctx.set_visuals(if dark { Visuals::dark() } else { Visuals::light() });
    }

    /// The Home action: drop the whole session, keep only the theme flag.
    pub fn go_home(&mut self) {
        self.session.reset();
        self.message.clear();
    }
}
