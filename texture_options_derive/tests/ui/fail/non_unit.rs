#![allow(dead_code)]

use texture_options::EnumSchema;

#[derive(EnumSchema)]
enum HasData {
    Unit,
    Tuple(i32),
}

fn main() {}
