pub mod error;
pub mod loading;
pub mod quiz;
pub mod results;
pub mod review;
pub mod week_menu;
pub mod year_menu;
