//! Login Page Component
//!
//! Shared numeric passcode gate. The expected code is injected at
//! build time (STOCKLIST_PASSCODE); it is never committed to source.
//! Without a configured code the gate is disabled entirely.

use leptos::prelude::*;

const CONFIGURED_PASSCODE: Option<&str> = option_env!("STOCKLIST_PASSCODE");

/// Whether the app should show the gate at all
pub fn passcode_required() -> bool {
    CONFIGURED_PASSCODE.is_some()
}

/// Strip everything but ASCII digits from user input
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Exact match against a configured code, after stripping non-digits
pub fn passcode_matches(configured: &str, input: &str) -> bool {
    digits_only(input) == configured
}

fn passcode_accepted(input: &str) -> bool {
    match CONFIGURED_PASSCODE {
        Some(code) => passcode_matches(code, input),
        None => true,
    }
}

/// Numeric passcode form shown before the inventory screen
#[component]
pub fn LoginPage(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let (passcode, set_passcode) = signal(String::new());
    let (error, set_error) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if passcode_accepted(&passcode.get()) {
            set_error.set(false);
            on_login.run(());
        } else {
            set_error.set(true);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"כניסה למערכת מלאי"</h1>
                <form on:submit=submit>
                    <label for="passcode">"סיסמה"</label>
                    <input
                        id="passcode"
                        type="text"
                        inputmode="numeric"
                        dir="ltr"
                        placeholder="הכנס סיסמה"
                        class=move || if error.get() { "invalid" } else { "" }
                        prop:value=move || passcode.get()
                        on:input=move |ev| {
                            // digits only, stripped as typed
                            set_passcode.set(digits_only(&event_target_value(&ev)));
                            set_error.set(false);
                        }
                    />
                    <Show when=move || error.get()>
                        <p class="login-error">"סיסמה שגויה"</p>
                    </Show>
                    <button type="submit" class="login-submit">"כניסה"</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_everything_else() {
        assert_eq!(digits_only("71-98 258a"), "7198258");
        assert_eq!(digits_only(""), "");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn passcode_match_is_exact_after_stripping() {
        assert!(passcode_matches("7198258", "7198258"));
        assert!(passcode_matches("7198258", " 719-8258 "));
        assert!(!passcode_matches("7198258", "719825"));
        assert!(!passcode_matches("7198258", "71982580"));
    }
}
