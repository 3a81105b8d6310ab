//! Locale enumeration for language variants of content rows.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Language variant of a content row.
///
/// Corresponds to the `LOCALE` PostgreSQL enum. Every content table except
/// `blog_categories` and `awards` stores one row per locale.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, AsRefStr, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::Locale"]
pub enum Locale {
    /// Arabic, written right to left
    #[db_rename = "ar"]
    #[serde(rename = "ar")]
    #[strum(serialize = "ar")]
    Ar,

    /// English
    #[db_rename = "en"]
    #[serde(rename = "en")]
    #[strum(serialize = "en")]
    #[default]
    En,
}

impl Locale {
    /// Returns the language code.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Returns whether the language is written right to left.
    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Returns the HTML `dir` attribute value for this language.
    #[inline]
    pub fn direction(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_language_codes() {
        assert_eq!(Locale::from_str("ar").ok(), Some(Locale::Ar));
        assert_eq!(Locale::from_str("en").ok(), Some(Locale::En));
        assert!(Locale::from_str("fr").is_err());
        assert!(Locale::from_str("AR").is_err());
    }

    #[test]
    fn codes_round_trip_through_display() {
        for locale in Locale::iter() {
            assert_eq!(locale.to_string(), locale.as_str());
            assert_eq!(locale.as_ref(), locale.as_str());
        }
    }

    #[test]
    fn direction() {
        assert_eq!(Locale::Ar.direction(), "rtl");
        assert_eq!(Locale::En.direction(), "ltr");
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn binds_as_the_locale_column_type() {
        use diesel::pg::Pg;
        use diesel::prelude::*;

        use crate::schema::services;

        let query = services::table
            .filter(services::lang.eq(Locale::Ar))
            .select(services::id);
        let sql = diesel::debug_query::<Pg, _>(&query).to_string();

        assert!(sql.contains(r#""services"."lang" = $1"#));
        assert!(sql.contains("binds: [Ar]"));
    }
}
