//! Root component and routes.

use leptos::*;
use leptos_router::*;

use shopporium_catalog::CatalogClient;

use crate::frontend::detail::ProductPage;
use crate::frontend::listing::ListingPage;
use crate::frontend::shell::{Header, NotFound};

/// Application root. The catalog client is shared with every page via context.
#[component]
pub fn App(catalog: CatalogClient) -> impl IntoView {
    provide_context(catalog);

    view! {
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=ListingPage/>
                    <Route path="/product/:id" view=ProductPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}
