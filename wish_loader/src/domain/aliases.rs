// Canonical wish fields and the source keys each one is read from.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Timestamp,
    Name,
    Message,
    PhotoUrl,
}

// Aliases are stored lowercased; lookups lowercase and trim the source key first.
// Earlier aliases win when a record carries several.
pub const WISH_FIELD_ALIASES: &[(CanonicalField, &[&str])] = &[
    (CanonicalField::Timestamp, &["timestamp"]),
    (CanonicalField::Name, &["nama", "name"]),
    (CanonicalField::Message, &["ucapan", "wish", "message"]),
    (CanonicalField::PhotoUrl, &["fotourl", "photourl", "photo_url"]),
];

impl CanonicalField {
    pub fn aliases(self) -> &'static [&'static str] {
        WISH_FIELD_ALIASES
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[])
    }
}
