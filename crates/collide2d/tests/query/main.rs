#[macro_use]
extern crate approx;

mod circle_polygon;
mod cuboid_cuboid;
mod polygon_polygon;
