use crate::model::LeaderboardEntry;
use crate::util::leaderboard_line;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub final_score: u32,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub on_save: Callback<String>,
    pub restart: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    let name_ref = use_node_ref();
    if !props.show {
        return html! {};
    }
    let save_btn = {
        let cb = props.on_save.clone();
        let name_ref = name_ref.clone();
        Callback::from(move |_| {
            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|el| el.value())
                .unwrap_or_default();
            cb.emit(name);
        })
    };
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f0883e; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px; color:white;">
            <h2 style="margin:0 0 12px 0; color:#f0883e;">{"Time's up!"}</h2>
            <p style="margin:4px 0;">{"Final score: "}<span id="final-score">{ props.final_score }</span></p>
            <div style="margin-top:12px; display:flex; gap:8px; justify-content:center;">
                <input ref={name_ref} id="player-name" type="text" placeholder="Your name" maxlength="20" />
                <button onclick={save_btn}>{"Save score"}</button>
            </div>
            <h3 style="margin:16px 0 6px 0;">{"Leaderboard"}</h3>
            <ol id="leaderboard-list" style="list-style:none; margin:0; padding:0;">
                { for props.leaderboard.iter().enumerate().map(|(i, e)| html! {
                    <li>{ leaderboard_line(i + 1, e) }</li>
                }) }
            </ol>
            <div style="margin-top:16px;">
                <button onclick={restart_btn}>{"Play again"}</button>
            </div>
        </div>
    }
}
