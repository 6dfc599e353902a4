//! Product listing page: filters, product grid and pagination.
//!
//! The page owns a [`QuerySync`] in a signal. User edits go through
//! `dispatch`, which rewrites the URL in place and starts a fetch; URL
//! changes made elsewhere (header search, back/forward) are picked up by an
//! effect on the location.

use leptos::*;
use leptos_router::*;

use shopporium_catalog::CatalogClient;
use shopporium_core::{Carousel, FetchTicket, Pager, QueryChange, QueryState, QuerySync, SortOption};
use shopporium_products::Product;

use crate::display;
use crate::frontend::shell::{ErrorPanel, Loading};

#[component]
pub fn ListingPage() -> impl IntoView {
    let catalog = expect_context::<CatalogClient>();
    let search = use_location().search;
    let navigate = use_navigate();
    let page_size = catalog.page_size();

    let (initial, first_fetch) = QuerySync::<Product>::from_query_string(&search.get_untracked());
    let sync = create_rw_signal(initial);
    let categories = create_rw_signal(Vec::<String>::new());

    let run_fetch = {
        let catalog = catalog.clone();
        Callback::new(move |ticket: FetchTicket| {
            let catalog = catalog.clone();
            spawn_local(async move {
                let result = catalog.list_products(ticket.query()).await;
                // The page may be gone by the time the response lands.
                let _ = sync.try_update(|s| s.complete(&ticket, result));
            });
        })
    };

    let dispatch = Callback::new(move |change: QueryChange| {
        if let Some(transition) = sync.try_update(|s| s.apply(change)).flatten() {
            navigate(
                &transition.url,
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            );
            run_fetch.call(transition.ticket);
        }
    });

    let retry = Callback::new(move |_: ()| {
        if let Some(ticket) = sync.try_update(|s| s.retry()) {
            run_fetch.call(ticket);
        }
    });

    create_effect(move |_| {
        let current = search.get();
        let changed = sync.with_untracked(|s| QueryState::decode(&current) != *s.query());
        if !changed {
            return;
        }
        if let Some(ticket) = sync.try_update(|s| s.follow_url(&current)).flatten() {
            run_fetch.call(ticket);
        }
    });

    run_fetch.call(first_fetch);

    spawn_local(async move {
        match catalog.list_categories().await {
            Ok(names) => {
                let _ = categories.try_set(names);
            }
            Err(err) => tracing::warn!(error = %err, "category list unavailable"),
        }
    });

    let query = Signal::derive(move || sync.with(|s| s.query().clone()));

    view! {
        <div class="container">
            <h1 class="page-title">"Explore the best store"</h1>
            <FilterBar query=query categories=categories on_change=dispatch/>
            {move || {
                sync.with(|s| {
                    if let Some(message) = s.error() {
                        view! { <ErrorPanel message=message.to_string() on_retry=retry/> }.into_view()
                    } else if s.is_loading() {
                        view! { <Loading/> }.into_view()
                    } else {
                        let pager = Pager::new(s.query(), s.items().len(), page_size);
                        view! {
                            <ProductGrid products=s.items().to_vec()/>
                            <PaginationControls pager=pager on_change=dispatch/>
                        }
                        .into_view()
                    }
                })
            }}
        </div>
    }
}

/// Search box, category and sort dropdowns, and the reset button.
#[component]
fn FilterBar(
    #[prop(into)] query: Signal<QueryState>,
    #[prop(into)] categories: Signal<Vec<String>>,
    on_change: Callback<QueryChange>,
) -> impl IntoView {
    view! {
        <div class="filters">
            <input
                type="text"
                class="filters__search"
                placeholder="Search products..."
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| on_change.call(QueryChange::Search(event_target_value(&ev)))
            />
            <select
                class="filters__category"
                on:change=move |ev| on_change.call(QueryChange::Category(event_target_value(&ev)))
            >
                <option value="" prop:selected=move || query.with(|q| q.category.is_empty())>
                    "All Categories"
                </option>
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|name| {
                            let value = name.clone();
                            view! {
                                <option
                                    value=name.clone()
                                    prop:selected=move || query.with(|q| q.category == value)
                                >
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <select
                class="filters__sort"
                on:change=move |ev| {
                    let sort = event_target_value(&ev).parse::<SortOption>().ok();
                    on_change.call(QueryChange::Sort(sort));
                }
            >
                <option value="" prop:selected=move || query.with(|q| q.sort.is_none())>
                    "Sort by"
                </option>
                {SortOption::ALL
                    .iter()
                    .map(|&option| {
                        view! {
                            <option
                                value=option.to_string()
                                prop:selected=move || query.with(|q| q.sort == Some(option))
                            >
                                {option.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button class="button filters__reset" on:click=move |_| on_change.call(QueryChange::Reset)>
                "Reset All Filters"
            </button>
        </div>
    }
}

#[component]
fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    if products.is_empty() {
        return view! { <p class="empty">"No products found."</p> }.into_view();
    }

    view! {
        <div class="product-grid">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product/> })
                .collect_view()}
        </div>
    }
    .into_view()
}

/// Card linking to the detail page, with an image carousel when the product
/// has more than one image.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let carousel = create_rw_signal(Carousel::new(product.images.len()));
    let has_controls = carousel.with_untracked(Carousel::has_controls);
    let images = product.images.clone();
    let fallback = product.cover_image().unwrap_or_default().to_string();
    let image = move || {
        carousel
            .with(|c| c.current(&images).cloned())
            .unwrap_or_else(|| fallback.clone())
    };

    view! {
        <div class="product-card">
            <A href=product.href()>
                <div class="product-card__media">
                    <img src=image alt=product.title.clone() width="250" height="250"/>
                    {has_controls
                        .then(|| {
                            view! {
                                <button
                                    class="carousel-arrow carousel-arrow--prev"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        carousel.update(Carousel::prev);
                                    }
                                >
                                    "‹"
                                </button>
                                <button
                                    class="carousel-arrow carousel-arrow--next"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        carousel.update(Carousel::next);
                                    }
                                >
                                    "›"
                                </button>
                            }
                        })}
                </div>
                <div class="product-card__body">
                    <h2 class="product-card__title">{product.title.clone()}</h2>
                    <p class="badge">{product.category.clone()}</p>
                    <span class="product-card__rating">{display::rating(product.rating)}</span>
                    <div class="product-card__footer">
                        <span class="price">{display::price(product.price)}</span>
                        <span class="button">"View Details"</span>
                    </div>
                </div>
            </A>
        </div>
    }
}

#[component]
fn PaginationControls(pager: Pager, on_change: Callback<QueryChange>) -> impl IntoView {
    view! {
        <div class="pagination">
            {pager
                .previous
                .map(|target| {
                    view! {
                        <button
                            class="button pagination__previous"
                            on:click=move |_| on_change.call(QueryChange::Page(target.page))
                        >
                            "Previous"
                        </button>
                    }
                })}
            <span class="pagination__current">{format!("Page {}", pager.page)}</span>
            {pager
                .next
                .map(|target| {
                    view! {
                        <button
                            class="button pagination__next"
                            on:click=move |_| on_change.call(QueryChange::Page(target.page))
                        >
                            "Next"
                        </button>
                    }
                })}
        </div>
    }
}
