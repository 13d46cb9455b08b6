mod catalog;
mod component;
mod draggable;
mod drop_zone;
mod error;
mod geometry;
mod ids;
mod render;
mod state;
mod types;

pub use component::OrgStructureBuilder;
