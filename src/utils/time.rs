#[cfg(not(target_arch = "wasm32"))]
use chrono::Datelike;
#[cfg(target_arch = "wasm32")]
use web_sys::js_sys::Date;

/// Returns the current calendar year in UTC. Both sides of the
/// hydration boundary use the same zone so server-rendered markup and
/// client re-renders agree even across a year boundary.
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        Date::new_0().get_utc_full_year() as i32
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Utc::now().year()
    }
}
