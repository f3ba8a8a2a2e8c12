//! Home Page
//!
//! Landing page: claim a handle and jump into the creation form.

use leptos::*;
use leptos_router::use_navigate;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    let (handle, set_handle) = create_signal(String::new());
    let navigate = use_navigate();

    // The creation form picks the handle up from the query string
    let claim = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let handle = handle.get();
        let target = if handle.trim().is_empty() {
            "/generate".to_string()
        } else {
            format!("/generate?handle={}", urlencoding::encode(handle.trim()))
        };
        navigate(&target, Default::default());
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center gap-6">
            <h1 class="font-bold text-5xl">"All your links, one page"</h1>
            <p class="text-gray-700 max-w-md">
                "Claim a handle, gather the links you care about, and share a
                 single Bittree page that is always up to date."
            </p>

            <form on:submit=claim class="flex items-center">
                <span class="font-semibold text-xl mr-1">"bittree/"</span>
                <input
                    type="text"
                    placeholder="yourname"
                    prop:value=move || handle.get()
                    on:input=move |ev| set_handle.set(event_target_value(&ev))
                    class="px-4 py-2 focus:outline-pink-500 rounded-full"
                />
                <button
                    type="submit"
                    class="p-5 py-2 mx-2 bg-slate-900 text-white font-bold rounded-3xl"
                >
                    "Claim your Bittree"
                </button>
            </form>
        </div>
    }
}
