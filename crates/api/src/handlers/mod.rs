pub mod fallback;
pub mod movies;
