use texture_options::{EnumSchema, SchemaEnum};

#[derive(Debug, Clone, Copy, PartialEq, EnumSchema)]
enum CustomDefault {
    A = 1,
    #[schema(alias = "Preferred")]
    B = 2,
    C = 3,
}

impl Default for CustomDefault {
    fn default() -> Self {
        Self::B
    }
}

fn main() {
    assert_eq!(CustomDefault::from_name("Preferred"), Some(CustomDefault::B));
    assert_eq!(CustomDefault::B.name(), "B");
    assert_eq!(CustomDefault::ALL.len(), 3);
}
