/// Predicate applied by a store when filtering products.
///
/// The comparison semantics are part of the variant: name search is a
/// case-sensitive substring match, category equality ignores case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    NameContains(String),
    CategoryEqualsIgnoreCase(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Category,
    Price,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Category => write!(f, "category"),
            SortKey::Price => write!(f, "price"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "category" => Ok(SortKey::Category),
            "price" => Ok(SortKey::Price),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only a case-insensitive "desc" selects descending; any other
    /// token means ascending. An unrecognized token is not an error.
    pub fn parse_lenient(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}
