pub mod app;
pub mod game_over_overlay;
pub mod game_view;
pub mod hud;
pub mod impact_overlay;
pub mod start_menu;
