#[macro_use]
extern crate approx;

mod collider_update;
mod containment;
mod edge_normals;
mod symmetrical_polygon;
