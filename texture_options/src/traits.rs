/// Reflection over a closed set of option tags.
///
/// You probably won't have to implement this by hand. Instead use the
/// [`EnumSchema`](crate::EnumSchema) derive, which also provides `Display`,
/// `FromStr` and `TryFrom<i32>` in terms of this trait.
pub trait SchemaEnum: Copy + Default + 'static {
    /// Type name, used in error messages.
    const NAME: &'static str;

    /// Every variant name paired with its integer discriminant, in
    /// declaration order.
    const VARIANTS: &'static [(&'static str, i32)];

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    fn to_i32(self) -> i32;

    fn name(self) -> &'static str;

    /// Look up a variant by name. Accepts declared aliases.
    fn from_name(name: &str) -> Option<Self>;

    fn from_i32(value: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.to_i32() == value)
    }
}
