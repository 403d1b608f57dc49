use texture_options::{EnumSchema, SchemaEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, EnumSchema)]
#[repr(u8)]
enum Narrow {
    #[default]
    Low = 1,
    High = 255,
}

fn main() {
    assert_eq!(Narrow::VARIANTS, &[("Low", 1), ("High", 255)]);
    assert_eq!(Narrow::try_from(255i32).unwrap(), Narrow::High);
}
