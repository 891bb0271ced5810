//! Wall-clock helpers for the WASM frontend

/// Today as YYYY-MM-DD (local time), used to stamp new items
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Current date formatted for the report header (he-IL locale)
pub fn today_display() -> String {
    let now = js_sys::Date::new_0();
    now.to_locale_date_string("he-IL", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Milliseconds since the epoch, for collision-resistant upload keys
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}
