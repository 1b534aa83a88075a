mod components;
mod config;
mod error;
mod model;
mod platform;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
