pub mod renderer;
pub mod web;
