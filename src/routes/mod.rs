mod auth;
mod cart;
mod health;
mod messages;
mod products;
mod reviews;
mod uploads;
mod wishlist;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::{AppState, middleware::auth_middleware};

pub fn create_router() -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/auth/register", post(auth::register_user))
        .route("/auth/login", post(auth::login_user))
        .route("/products", get(products::search_products))
        .route("/products/{id}", get(products::get_product))
        .route(
            "/products/{id}/reviews",
            get(reviews::get_product_reviews).post(reviews::create_review),
        );

    // every mutating store operation requires a session
    let protected = Router::new()
        .route("/products", post(products::create_product))
        .route(
            "/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/products/images", post(uploads::upload_product_images))
        .route("/cart", get(cart::get_cart).post(cart::mutate_cart))
        .route("/wishlist", get(wishlist::get_wishlist))
        .route(
            "/wishlist/{product_id}",
            put(wishlist::add_to_wishlist).delete(wishlist::remove_from_wishlist),
        )
        .route(
            "/messages",
            get(messages::get_messages).post(messages::send_message),
        )
        .route("/messages/{id}/read", post(messages::mark_message_read))
        .route_layer(middleware::from_fn(auth_middleware));

    public.merge(protected)
}
