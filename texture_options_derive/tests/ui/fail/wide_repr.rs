#![allow(dead_code)]

use texture_options::EnumSchema;

#[derive(EnumSchema)]
#[repr(u64)]
enum Wide {
    Small,
}

fn main() {}
