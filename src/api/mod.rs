pub mod rest;

pub use rest::router;
