pub mod category;
pub mod post;
pub mod user;

/*
 Users are created through registration only; the API hands back a generated
 password once and stores only the argon2 hash. Categories and posts hang off
 users: a post always has exactly one author and one category.
*/
