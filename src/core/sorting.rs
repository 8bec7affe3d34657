use std::fmt;

/// Sort direction for a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sorting {
    #[default]
    Ascending,
    Descending,
}

impl Sorting {
    /// Encode `field` for the `sort` parameter: descending fields carry a `-` prefix.
    pub fn for_field(&self, field: &str) -> String {
        match self {
            Sorting::Ascending => field.to_string(),
            Sorting::Descending => format!("-{}", field),
        }
    }

    /// Split a token like `-modified_at` back into its field and direction.
    pub fn parse_token(token: &str) -> (&str, Sorting) {
        match token.strip_prefix('-') {
            Some(field) => (field, Sorting::Descending),
            None => (token, Sorting::Ascending),
        }
    }
}

impl fmt::Display for Sorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sorting::Ascending => f.write_str("ascending"),
            Sorting::Descending => f.write_str("descending"),
        }
    }
}
