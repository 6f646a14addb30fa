mod cart;
mod message;
mod product;
mod review;
mod user;

pub use cart::*;
pub use message::*;
pub use product::*;
pub use review::*;
pub use user::*;
