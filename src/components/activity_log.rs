//! Recent activity panel backed by the console logger's ring buffer

use leptos::prelude::*;

/// Lines shown in the panel
const ACTIVITY_LIMIT: usize = 50;

/// Newest `limit` lines, newest first
pub fn newest_first(lines: Vec<String>, limit: usize) -> Vec<String> {
    lines.into_iter().rev().take(limit).collect()
}

/// Collapsible footer listing recent log lines. The buffer is read on
/// open and on "Reload", not on every record.
#[component]
pub fn ActivityLog() -> impl IntoView {
    let lines = RwSignal::new(Vec::<String>::new());
    let reload = move || lines.set(newest_first(console_logger::recent(), ACTIVITY_LIMIT));

    view! {
        <details class="activity-log" on:toggle=move |_| reload()>
            <summary>"Recent activity"</summary>
            <button class="btn" on:click=move |_| reload()>"Reload"</button>
            <Show
                when=move || !lines.with(Vec::is_empty)
                fallback=|| view! { <p class="activity-empty">"No activity yet"</p> }
            >
                <ul class="activity-lines">
                    {move || lines.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
            </Show>
        </details>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_caps_and_reverses() {
        let lines = (0..5).map(|n| format!("line {}", n)).collect();
        assert_eq!(newest_first(lines, 2), ["line 4", "line 3"]);
        assert!(newest_first(Vec::new(), 2).is_empty());
    }

    #[test]
    fn test_activity_log_component_creation() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = ActivityLog();
        });
    }
}
