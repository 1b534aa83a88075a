use std::rc::Rc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::config::GameConfig;
use crate::model::{GameEvent, HudState, Playfield, Screen};
use crate::platform::{AMBIENT_SRC, BrowserScheduler, CanvasRenderer, HIT_SRC, audio_channel, browser_store};
use crate::state::game::{GameParts, NotifyFn, RenderFn};
use crate::state::{Game, Session};
use crate::state::leaderboard::Leaderboard;
use crate::util::{clog, now_iso};

use super::{
    game_over_overlay::GameOverOverlay, hud::Hud, impact_overlay::ImpactOverlay,
    start_menu::StartMenu,
};

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub hud: UseReducerHandle<HudState>,
    pub config: Rc<GameConfig>,
}

/// Full window width, fixed height. Returns the resulting playfield.
fn fit_canvas(window: &web_sys::Window, canvas: &HtmlCanvasElement, height: f64) -> Playfield {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
    Playfield {
        width: canvas.width() as f64,
        height: canvas.height() as f64,
    }
}

fn build_session(
    window: web_sys::Window,
    canvas: HtmlCanvasElement,
    config: GameConfig,
    field: Playfield,
    hud: UseReducerHandle<HudState>,
) -> Result<Session, JsValue> {
    let renderer = Rc::new(CanvasRenderer::new(canvas, config.glow_size)?);
    let leaderboard = Leaderboard::new(browser_store(), config.leaderboard_key.clone(), now_iso);
    let parts = GameParts {
        leaderboard,
        ambient: audio_channel(AMBIENT_SRC),
        hit_sound: audio_channel(HIT_SRC),
        rng: Box::new(StdRng::from_entropy()),
        palette_len: renderer.palette_len(),
    };
    let game = Game::new(config, field, parts);
    let render: RenderFn = Rc::new(move |g: &Game| renderer.draw(g));
    let notify: NotifyFn = Rc::new(move |events: Vec<GameEvent>| {
        for e in events {
            hud.dispatch(e);
        }
    });
    Ok(Session::new(game, Rc::new(BrowserScheduler::new(window)), render, notify))
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let session = use_mut_ref(|| None::<Session>);

    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let hud = props.hud.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");
            let height = config.playfield_height;
            let field = fit_canvas(&window, &canvas, height);
            match build_session(window.clone(), canvas.clone(), (*config).clone(), field, hud) {
                Ok(s) => *session.borrow_mut() = Some(s),
                Err(e) => clog(&format!("could not set up game: {:?}", e)),
            }

            let resize_cb = {
                let session = session.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let field = fit_canvas(&window, &canvas, height);
                    if let Some(s) = &*session.borrow() {
                        s.game().borrow_mut().set_playfield(field);
                    }
                }) as Box<dyn FnMut()>)
            };
            let _ = window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());

            move || {
                let _ = window
                    .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                // Dropping the session cancels any live timers.
                session.borrow_mut().take();
            }
        });
    }

    let on_start: Callback<()> = {
        let session = session.clone();
        Callback::from(move |()| {
            if let Some(s) = &*session.borrow() {
                s.start();
            }
        })
    };
    let on_click: Callback<MouseEvent> = {
        let session = session.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let rect = canvas.get_bounding_client_rect();
            let x = e.client_x() as f64 - rect.left();
            let y = e.client_y() as f64 - rect.top();
            if let Some(s) = &*session.borrow() {
                s.pointer(x, y);
            }
        })
    };
    let on_save: Callback<String> = {
        let session = session.clone();
        Callback::from(move |name: String| {
            if let Some(s) = &*session.borrow() {
                // Rejections are logged by the session; the overlay stays open.
                let _ = s.record_score(&name);
            }
        })
    };
    let restart: Callback<()> = {
        let session = session.clone();
        Callback::from(move |()| {
            if let Some(s) = &*session.borrow() {
                if let Err(e) = s.reset() {
                    clog(&format!("reset ignored: {}", e));
                }
            }
        })
    };

    let hud = (*props.hud).clone();
    html! {<div style="position:relative; width:100vw;">
        <canvas ref={canvas_ref} id="gameCanvas" onclick={on_click} style="display:block;"></canvas>
        <Hud score={hud.score} time_left={hud.time_left} />
        <StartMenu show={hud.screen == Screen::StartMenu} session_secs={props.config.session_secs} on_start={on_start} />
        <GameOverOverlay show={hud.screen == Screen::GameOver} final_score={hud.final_score} leaderboard={hud.leaderboard.clone()} on_save={on_save} restart={restart.clone()} />
        <ImpactOverlay show={hud.screen == Screen::Impact} final_score={hud.final_score} impact={hud.impact} restart={restart} />
    </div>}
}
