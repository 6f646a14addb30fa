pub mod cart_queries;
pub mod message_queries;
pub mod product_queries;
pub mod review_queries;
pub mod user_queries;
pub mod wishlist_queries;
