#![allow(dead_code)]

use texture_options::EnumSchema;

#[derive(EnumSchema)]
enum Renamed {
    #[schema(rename = "Other")]
    Unit,
}

fn main() {}
