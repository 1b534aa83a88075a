use std::cell::RefCell;
use std::rc::Rc;

use crate::model::ImpactSummary;
use crate::platform::BrowserScheduler;
use crate::state::scheduler::{Scheduler, TimerHandle};
use crate::util::{format_kg, scroll_step};
use web_sys::Element;
use yew::prelude::*;

const SCROLL_TICK_MS: u32 = 50;

#[derive(Properties, PartialEq, Clone)]
pub struct ImpactOverlayProps {
    pub show: bool,
    pub final_score: u32,
    pub impact: Option<ImpactSummary>,
    pub restart: Callback<()>,
}

#[function_component]
pub fn ImpactOverlay(props: &ImpactOverlayProps) -> Html {
    let panel_ref = use_node_ref();

    // Slow scroll through the summary while it is open; stops at the bottom.
    {
        let panel_ref = panel_ref.clone();
        let visible = props.show && props.impact.is_some();
        use_effect_with(visible, move |visible| {
            let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::new(RefCell::new(None));
            if *visible {
                if let Some(window) = web_sys::window() {
                    let own = slot.clone();
                    let handle = BrowserScheduler::new(window).schedule_repeating(
                        SCROLL_TICK_MS,
                        Box::new(move || {
                            let Some(el) = panel_ref.cast::<Element>() else {
                                return;
                            };
                            let max = el.scroll_height() - el.client_height();
                            match scroll_step(el.scroll_top(), max) {
                                Some(y) => el.set_scroll_top(y),
                                None => {
                                    own.borrow_mut().take();
                                }
                            }
                        }),
                    );
                    *slot.borrow_mut() = Some(handle);
                }
            }
            move || {
                slot.borrow_mut().take();
            }
        });
    }

    let Some(impact) = props.impact.filter(|_| props.show) else {
        return html! {};
    };
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    html! {
        <div id="impact-screen" ref={panel_ref} style="position:fixed; top:0; left:0; width:100vw; height:100vh; background:rgba(0,0,0,0.8); display:flex; flex-direction:column; justify-content:center; align-items:center; z-index:1000; color:white; overflow-y:auto;">
            <h2 style="margin:0 0 16px 0; color:#3fb950;">{"Your impact"}</h2>
            <p style="margin:4px 0;">{ format!("Score: {}", props.final_score) }</p>
            <p style="margin:4px 0;">{"Plastic collected: "}<span id="plastic-weight">{ format_kg(impact.plastic_weight_kg) }</span>{" kg"}</p>
            <p style="margin:4px 0;">{"Fish saved: "}<span id="saved-fish">{ impact.saved_fish }</span></p>
            <p style="margin:4px 0;">{"Whales saved: "}<span id="saved-whales">{ impact.saved_whales }</span></p>
            <div style="margin-top:20px;">
                <button id="restart-impact" onclick={restart_btn}>{"Play again"}</button>
            </div>
        </div>
    }
}
