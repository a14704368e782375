pub mod account;
pub mod category;
pub mod error;
pub mod post;
pub mod response;
