//! Inline Edit Component
//!
//! Text that turns into an input on click. Enter or blur commits, Escape
//! cancels.

use leptos::prelude::*;

/// Value to commit for an edit: the trimmed draft, unless it is empty or
/// unchanged
pub fn edited_text(current: &str, draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    if trimmed.is_empty() || trimmed == current {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn InlineEdit(
    #[prop(into)] value: String,
    #[prop(into)] on_commit: Callback<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let current = StoredValue::new(value);

    // Blur fires after Enter has already closed the input; the guard keeps
    // that from committing twice.
    let commit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let text = current.with_value(|current| edited_text(current, &draft.get_untracked()));
        if let Some(text) = text {
            on_commit.run(text);
        }
    };

    view! {
        <Show
            when=move || editing.get()
            fallback=move || {
                view! {
                    <span
                        class=format!("inline-edit {}", class)
                        title="Click to edit"
                        on:click=move |_| {
                            set_draft.set(current.get_value());
                            set_editing.set(true);
                        }
                    >
                        {current.get_value()}
                    </span>
                }
            }
        >
            <input
                class="inline-edit-input"
                type="text"
                autofocus=true
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => {
                        ev.prevent_default();
                        commit();
                    }
                    "Escape" => set_editing.set(false),
                    _ => {}
                }
                on:blur=move |_| commit()
            />
        </Show>
    }
}
