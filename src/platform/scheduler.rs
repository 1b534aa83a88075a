use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::state::scheduler::{Callback, Scheduler, TimerHandle};
use crate::util::clog;

/// `setInterval` / `requestAnimationFrame` backed triggers.
pub struct BrowserScheduler {
    window: web_sys::Window,
}

impl BrowserScheduler {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule_repeating(&self, interval_ms: u32, mut callback: Callback) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        let tick = Closure::wrap(Box::new(move || {
            if !flag.get() {
                callback();
            }
        }) as Box<dyn FnMut()>);
        let id = match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                interval_ms as i32,
            ) {
            Ok(id) => id,
            Err(e) => {
                clog(&format!("setInterval failed: {:?}", e));
                return TimerHandle::new(cancelled, None);
            }
        };
        let window = self.window.clone();
        TimerHandle::new(
            cancelled,
            Some(Box::new(move || {
                window.clear_interval_with_handle(id);
                drop(tick);
            })),
        )
    }

    fn schedule_frame(&self, mut callback: Callback) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        let raf_id = Rc::new(Cell::new(None::<i32>));
        let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        {
            let flag = cancelled.clone();
            let raf_id = raf_id.clone();
            let closure_cell_clone = closure_cell.clone();
            let window_loop = self.window.clone();
            *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                if flag.get() {
                    return;
                }
                callback();
                if flag.get() {
                    return;
                }
                if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                    if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        raf_id.set(Some(id));
                    }
                }
            }) as Box<dyn FnMut()>));
        }
        if let Some(cb) = closure_cell.borrow().as_ref() {
            if let Ok(id) = self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(Some(id));
            }
        }
        let window = self.window.clone();
        TimerHandle::new(
            cancelled,
            Some(Box::new(move || {
                if let Some(id) = raf_id.take() {
                    let _ = window.cancel_animation_frame(id);
                }
                // Breaks the closure <-> cell cycle.
                closure_cell.borrow_mut().take();
            })),
        )
    }
}
