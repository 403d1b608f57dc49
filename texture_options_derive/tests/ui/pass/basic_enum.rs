use texture_options::{EnumSchema, SchemaEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, EnumSchema)]
enum Options {
    #[default]
    Nearest,
    Linear,
}

fn main() {
    assert_eq!(Options::NAME, "Options");
    assert_eq!(Options::VARIANTS, &[("Nearest", 0), ("Linear", 1)]);
    assert_eq!(Options::Linear.to_string(), "Linear");
    assert_eq!("Nearest".parse::<Options>().unwrap(), Options::Nearest);
}
