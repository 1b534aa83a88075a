// Small helpers shared by the engine and the views.

use crate::model::LeaderboardEntry;

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    eprintln!("{}", msg);
}

/// Current instant as an ISO-8601 string, taken from the JS clock.
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

pub fn format_kg(kg: f64) -> String {
    format!("{:.2}", kg)
}

/// Remaining time as a bare seconds count, the way the HUD has always shown it.
pub fn format_secs(secs: u32) -> String {
    secs.to_string()
}

pub const SCROLL_STEP_PX: i32 = 2;

/// Next scroll offset for the impact screen's slow auto-scroll, or `None`
/// once the bottom (`max`) has been reached.
pub fn scroll_step(pos: i32, max: i32) -> Option<i32> {
    if pos >= max {
        return None;
    }
    Some((pos + SCROLL_STEP_PX).min(max))
}

pub fn leaderboard_line(rank: usize, entry: &LeaderboardEntry) -> String {
    format!("{}. {}: {} points", rank, entry.name, entry.score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaderboard_line_format() {
        let e = LeaderboardEntry {
            name: "Lee".into(),
            score: 80,
            date: String::new(),
        };
        assert_eq!(leaderboard_line(1, &e), "1. Lee: 80 points");
    }

    #[test]
    fn kg_has_two_decimals() {
        assert_eq!(format_kg(2.0), "2.00");
        assert_eq!(format_kg(0.05), "0.05");
        assert_eq!(format_kg(150.0), "150.00");
    }

    #[test]
    fn secs_formatting() {
        assert_eq!(format_secs(60), "60");
        assert_eq!(format_secs(59), "59");
        assert_eq!(format_secs(0), "0");
        assert_eq!(format_secs(75), "75");
    }

    #[test]
    fn scroll_walks_to_bottom_then_stops() {
        let mut pos = 0;
        let mut steps = 0;
        while let Some(next) = scroll_step(pos, 7) {
            assert!(next > pos);
            pos = next;
            steps += 1;
        }
        assert_eq!((pos, steps), (7, 4));
        assert_eq!(scroll_step(0, 0), None);
        assert_eq!(scroll_step(5, -3), None);
    }
}
