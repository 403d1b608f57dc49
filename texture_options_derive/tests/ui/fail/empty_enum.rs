#![allow(dead_code)]

use texture_options::EnumSchema;

#[derive(EnumSchema)]
enum Empty {}

fn main() {}
