pub mod engine;
pub mod extract;
pub mod handlers;
pub mod normalize;
pub mod report;
pub mod roles;
pub mod strategy;
