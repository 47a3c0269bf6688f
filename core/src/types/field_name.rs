use nutype::nutype;

/// Name of a record field, e.g. `Name` or `PhoneNumber`.
#[nutype(
    new_unchecked,
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct FieldName(String);
