#![allow(dead_code)]

use texture_options::EnumSchema;

#[derive(EnumSchema)]
struct NotAnEnum;

fn main() {}
