//! Generate Page
//!
//! The Bittree creation form: claim a handle, add labeled links, attach a
//! picture and description, then submit the draft for publication.
//!
//! The whole draft lives in one [`LinkForm`] signal; derived view state
//! (submit gating, row count) is recomputed through memos on every
//! mutation. Submission performs a single POST and reports its outcome
//! through the global toast state. The draft is cleared only when the
//! server confirms creation, so a rejected or failed attempt leaves the
//! user's input in place for correction.

use leptos::*;
use leptos_router::use_query_map;
use tracing::{debug, error, info};

use crate::api;
use crate::state::form::LinkForm;
use crate::state::global::GlobalState;

/// Bittree creation form page
#[component]
pub fn Generate() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The landing page forwards a pre-claimed handle as `?handle=`
    let initial_handle = use_query_map()
        .with_untracked(|query| query.get("handle").cloned())
        .unwrap_or_default();

    let form = create_rw_signal(LinkForm::with_handle(initial_handle));
    let (submitting, set_submitting) = create_signal(false);

    // Derived view state, recomputed on every form mutation. Keying the
    // row list off its length keeps the inputs mounted (and focused)
    // while the user types; only adding a row rebuilds the list.
    let can_submit = create_memo(move |_| form.with(|f| f.is_valid()));
    let row_count = create_memo(move |_| form.with(|f| f.links.len()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if !form.with(|f| f.is_valid()) {
            state.show_error("Please fill required fields");
            return;
        }

        set_submitting.set(true);
        let payload = form.get();
        debug!("Submitting Bittree draft for handle {:?}", payload.handle);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_bittree(&payload).await {
                Ok(rsp) if rsp.success => {
                    info!("Bittree created for handle {:?}", payload.handle);
                    state_clone.show_success(rsp.notice());
                    form.update(|f| f.reset());
                }
                Ok(rsp) => {
                    state_clone.show_error(rsp.notice());
                }
                Err(e) => {
                    error!("Submitting the draft failed: {}", e);
                    state_clone.show_error(api::NETWORK_ERROR_MSG);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="flex flex-col gap-5 my-8 max-w-2xl">
            <h1 class="font-bold text-4xl">"Create your Bittree"</h1>

            <section>
                <h2 class="font-semibold text-2xl">"Step 1: Claim your Handle"</h2>
                <div class="mx-4">
                    <input
                        type="text"
                        placeholder="Choose a Handle"
                        prop:value=move || form.with(|f| f.handle.clone())
                        on:input=move |ev| form.update(|f| f.handle = event_target_value(&ev))
                        class="px-4 py-2 my-2 focus:outline-pink-500 rounded-full"
                    />
                </div>
            </section>

            <section>
                <h2 class="font-semibold text-2xl">"Step 2: Add Links"</h2>
                {move || {
                    (0..row_count.get())
                        .map(|index| view! { <LinkRow index form /> })
                        .collect_view()
                }}
                <button
                    type="button"
                    on:click=move |_| form.update(|f| f.add_link())
                    class="p-5 py-2 mx-2 bg-slate-900 text-white font-bold rounded-3xl"
                >
                    "+ Add Link"
                </button>
            </section>

            <section>
                <h2 class="font-semibold text-2xl">"Step 3: Add Picture and Description"</h2>
                <div class="mx-4 flex flex-col">
                    <input
                        type="text"
                        placeholder="Enter link to your Picture"
                        prop:value=move || form.with(|f| f.pic.clone())
                        on:input=move |ev| form.update(|f| f.pic = event_target_value(&ev))
                        class="px-4 py-2 mx-2 my-2 focus:outline-pink-500 rounded-full"
                    />
                    <input
                        type="text"
                        placeholder="Enter description"
                        prop:value=move || form.with(|f| f.desc.clone())
                        on:input=move |ev| form.update(|f| f.desc = event_target_value(&ev))
                        class="px-4 py-2 mx-2 my-2 focus:outline-pink-500 rounded-full"
                    />

                    <button
                        type="submit"
                        disabled=move || submitting.get() || !can_submit.get()
                        class="disabled:bg-slate-500 p-5 py-2 mx-2 w-fit my-5 bg-slate-900
                               text-white font-bold rounded-3xl transition-colors"
                    >
                        {move || if submitting.get() { "Creating..." } else { "Create your Bittree" }}
                    </button>
                </div>
            </section>
        </form>
    }
}

/// One editable link row: display text plus target URL.
///
/// Each input replaces its row wholesale through [`LinkForm::update_link`],
/// passing the sibling field's current value through so it isn't clobbered.
#[component]
fn LinkRow(index: usize, form: RwSignal<LinkForm>) -> impl IntoView {
    view! {
        <div class="mx-4">
            <input
                type="text"
                placeholder="Enter link text"
                // A stale row can re-render once while the list shrinks
                prop:value=move || {
                    form.with(|f| f.links.get(index).map(|e| e.linktext.clone()).unwrap_or_default())
                }
                on:input=move |ev| {
                    let link = form.with(|f| f.links[index].link.clone());
                    form.update(|f| f.update_link(index, link, event_target_value(&ev)));
                }
                class="px-4 py-2 mx-2 my-2 focus:outline-pink-500 rounded-full"
            />
            <input
                type="text"
                placeholder="Enter link"
                prop:value=move || {
                    form.with(|f| f.links.get(index).map(|e| e.link.clone()).unwrap_or_default())
                }
                on:input=move |ev| {
                    let linktext = form.with(|f| f.links[index].linktext.clone());
                    form.update(|f| f.update_link(index, event_target_value(&ev), linktext));
                }
                class="px-4 py-2 mx-2 my-2 focus:outline-pink-500 rounded-full"
            />
        </div>
    }
}
