use texture_options::{EnumSchema, SchemaEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, EnumSchema)]
enum Enumeration {
    #[default]
    A = -1,
    B = 0,
    C,
}

fn main() {
    assert_eq!(Enumeration::VARIANTS, &[("A", -1), ("B", 0), ("C", 1)]);
    assert_eq!(Enumeration::try_from(-1).unwrap(), Enumeration::A);
    assert!(Enumeration::try_from(2).is_err());
}
