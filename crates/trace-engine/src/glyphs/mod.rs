pub mod catalog;
pub mod latin;
pub mod registry;
pub mod shapes;
pub mod tamil;
