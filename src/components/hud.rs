use crate::util::format_secs;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub score: u32,
    pub time_left: u32,
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:60px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:180px; display:flex; flex-direction:column; gap:8px; font-size:14px; color:white;">
            <div style={row_style}>
                <span style={label_style}>{"Score"}</span>
                <span id="score-value" style={value_style}>{ props.score }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Time"}</span>
                <span id="timer-value" style={value_style}>{ format_secs(props.time_left) }</span>
            </div>
        </div>
    }
}
