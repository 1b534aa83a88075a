use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StartMenuProps {
    pub show: bool,
    pub session_secs: u32,
    pub on_start: Callback<()>,
}

#[function_component(StartMenu)]
pub fn start_menu(props: &StartMenuProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_cb = props.on_start.clone();
    let start_btn = Callback::from(move |_| start_cb.emit(()));
    html! {
        <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; font-size:14px; line-height:1.4; color:white;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{"Beach Cleanup"}</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"Plastic bags keep washing up on the sand."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Click a bag to pick it up."}</li>
                <li>{ format!("You have {} seconds.", props.session_secs) }</li>
                <li>{"Save your score to see how much plastic you kept out of the ocean."}</li>
            </ul>
            <div style="display:flex; justify-content:center; margin-top:8px;">
                <button onclick={start_btn}>{"Start"}</button>
            </div>
        </div>
    }
}
