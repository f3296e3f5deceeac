pub mod app;
pub mod data;
pub mod math;
pub mod model;
pub mod routes;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod validation;

pub use app::QuizApp;
