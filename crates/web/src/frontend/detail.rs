//! Product detail page: gallery, product facts and reviews.

use leptos::*;
use leptos_router::*;

use shopporium_catalog::CatalogClient;
use shopporium_core::Carousel;
use shopporium_products::{Product, ProductId, REVIEW_SORT_PARAM, Review, ReviewSort, sort_reviews};

use crate::display;
use crate::frontend::shell::{ErrorPanel, Loading};

#[component]
pub fn ProductPage() -> impl IntoView {
    let catalog = expect_context::<CatalogClient>();
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let record = create_local_resource(product_id, move |id: String| {
        let catalog = catalog.clone();
        async move {
            let id = id.parse::<ProductId>().map_err(|e| e.to_string())?;
            catalog.get_product(&id).await.map_err(|e| e.to_string())
        }
    });

    let retry = Callback::new(move |_: ()| record.refetch());

    view! {
        <div class="product-page">
            <A href="/">
                <span class="button">"Back to products"</span>
            </A>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    record
                        .with(|result| match result {
                            Ok(product) => view! { <ProductDetail product=product.clone()/> }.into_view(),
                            Err(message) => {
                                view! { <ErrorPanel message=message.clone() on_retry=retry/> }.into_view()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let media = if product.images.is_empty() {
        view! { <div class="no-images">"No images available"</div> }.into_view()
    } else {
        view! { <Gallery images=product.images.clone() title=product.title.clone()/> }.into_view()
    };
    let stock_class = if product.in_stock() { "stock stock--in" } else { "stock stock--out" };

    view! {
        <div class="product-detail">
            <div class="product-detail__main">
                <div class="product-detail__media">{media}</div>
                <div class="product-detail__info">
                    <h2>{product.title.clone()}</h2>
                    <p class="product-detail__description">{product.description.clone()}</p>
                    <p class="price">{display::price(product.price)}</p>
                    <p class="product-detail__category">{format!("Category: {}", product.category)}</p>
                    <div class="tags">
                        {product
                            .tags
                            .iter()
                            .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                            .collect_view()}
                    </div>
                    <p class="product-detail__rating">{display::detail_rating(product.rating)}</p>
                    <p class="product-detail__stock">
                        {format!("Stock: {} ", product.stock)}
                        <span class=stock_class>{display::stock_label(product.stock)}</span>
                    </p>
                </div>
            </div>
            <ReviewList reviews=product.reviews.clone()/>
        </div>
    }
}

/// Main image, plus arrows and a thumbnail strip when there is a choice.
#[component]
fn Gallery(images: Vec<String>, title: String) -> impl IntoView {
    let carousel = create_rw_signal(Carousel::new(images.len()));
    let has_controls = carousel.with_untracked(Carousel::has_controls);
    let shown = images.clone();
    let current = move || carousel.with(|c| c.current(&shown).cloned()).unwrap_or_default();

    view! {
        <div class="gallery">
            <div class="gallery__main">
                <img src=current alt=title.clone() width="500" height="500"/>
                {has_controls
                    .then(|| {
                        view! {
                            <button
                                class="carousel-arrow carousel-arrow--prev"
                                on:click=move |_| carousel.update(Carousel::prev)
                            >
                                "‹"
                            </button>
                            <button
                                class="carousel-arrow carousel-arrow--next"
                                on:click=move |_| carousel.update(Carousel::next)
                            >
                                "›"
                            </button>
                        }
                    })}
            </div>
            {has_controls.then(|| view! { <Thumbnails images=images carousel=carousel title=title/> })}
        </div>
    }
}

#[component]
fn Thumbnails(images: Vec<String>, carousel: RwSignal<Carousel>, title: String) -> impl IntoView {
    view! {
        <div class="gallery__thumbnails">
            {images
                .into_iter()
                .enumerate()
                .map(|(index, src)| {
                    let class = move || {
                        if carousel.with(|c| c.index() == index) {
                            "gallery__thumbnail gallery__thumbnail--active"
                        } else {
                            "gallery__thumbnail"
                        }
                    };
                    view! {
                        <img
                            class=class
                            src=src
                            alt=format!("{title} {}", index + 1)
                            width="80"
                            height="80"
                            on:click=move |_| carousel.update(|c| c.select(index))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Reviews in the order named by the `reviewSort` query parameter.
#[component]
fn ReviewList(reviews: Vec<Review>) -> impl IntoView {
    let query = use_query_map();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let current = move || {
        query.with(|q| {
            q.get(REVIEW_SORT_PARAM)
                .and_then(|value| value.parse::<ReviewSort>().ok())
        })
    };
    let count = reviews.len();
    let sorted = move || sort_reviews(&reviews, current());

    view! {
        <div class="reviews">
            <div class="reviews__header">
                <h3>{format!("Customer reviews ({count})")}</h3>
                <select
                    class="reviews__sort"
                    on:change=move |ev| {
                        let sort = event_target_value(&ev).parse::<ReviewSort>().ok();
                        let href = display::review_sort_href(&pathname.get_untracked(), sort);
                        navigate(
                            &href,
                            NavigateOptions {
                                replace: true,
                                scroll: false,
                                ..Default::default()
                            },
                        );
                    }
                >
                    <option value="" prop:selected=move || current().is_none()>
                        "Sort by"
                    </option>
                    {ReviewSort::ALL
                        .iter()
                        .map(|&sort| {
                            view! {
                                <option
                                    value=sort.as_str()
                                    prop:selected=move || current() == Some(sort)
                                >
                                    {sort.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="reviews__list">
                {move || {
                    sorted()
                        .into_iter()
                        .map(|review| view! { <ReviewCard review=review/> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    view! {
        <div class="review">
            <div class="review__header">
                <span class="review__author">{review.reviewer_name.clone()}</span>
                <span class="review__date">{display::review_date(&review.date)}</span>
            </div>
            <div class="review__rating">
                <span class="review__stars">{display::stars(review.rating)}</span>
                <span>{format!("{} / 5", review.rating)}</span>
            </div>
            <p class="review__comment">{review.comment.clone()}</p>
        </div>
    }
}
