use super::game_view::GameView;
use crate::config::GameConfig;
use crate::model::HudState;
use crate::platform::browser_store;
use std::rc::Rc;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Settings override is read once per page load.
    let config = use_memo((), |_| GameConfig::load(&*browser_store()));
    let session_secs = config.session_secs;
    let hud = use_reducer(move || HudState::new(session_secs));

    html! { <GameView hud={hud} config={Rc::clone(&config)} /> }
}
