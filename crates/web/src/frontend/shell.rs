//! Page chrome and shared status panels.

use leptos::*;
use leptos_router::*;

use shopporium_core::QueryState;

/// Site header with the brand link and a global search box.
///
/// Submitting navigates to the listing with the term as its `search` param.
#[component]
pub fn Header() -> impl IntoView {
    let navigate = use_navigate();
    let term = create_rw_signal(String::new());

    view! {
        <header class="site-header">
            <A href="/">
                <span class="site-header__brand">"Shopporium"</span>
            </A>
            <form
                class="site-header__search"
                on:submit=move |ev| {
                    ev.prevent_default();
                    let href = QueryState::searching(term.get_untracked()).href();
                    navigate(&href, Default::default());
                }
            >
                <input
                    type="text"
                    placeholder="Search products..."
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            <nav>
                <A href="/">"Home"</A>
            </nav>
        </header>
    }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading__spinner"></div>
            <p class="loading__message">"Loading products..."</p>
        </div>
    }
}

/// Failure panel with a retry button.
#[component]
pub fn ErrorPanel(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel">
            <h2>"Something went wrong.."</h2>
            <p class="error-panel__message">{message}</p>
            <button class="button" on:click=move |_| on_retry.call(())>
                "Please try again later"
            </button>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page could not be found."</p>
            <A href="/">"Back to products"</A>
        </div>
    }
}

/// Shown instead of the app when the catalog client cannot be built.
#[component]
pub fn StartupError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="error-panel">
            <h2>"Something went wrong.."</h2>
            <p class="error-panel__message">{message}</p>
        </div>
    }
}
