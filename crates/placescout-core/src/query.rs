//! Structured search input and its textual form for the provider's
//! text-search endpoint.

use crate::error::CoreError;

/// A merchant's search request.
///
/// Constructed only through [`SearchQuery::new`], which rejects an empty
/// primary keyword, so every value of this type is searchable. A query is
/// immutable for the lifetime of a search round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    country: String,
    city: String,
    primary_keyword: String,
    refinement_keyword: Option<String>,
}

impl SearchQuery {
    /// Builds a query from the raw search-bar inputs.
    ///
    /// The primary keyword is trimmed. A refinement keyword that is empty
    /// after trimming is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyKeyword`] if `primary_keyword` is empty or
    /// whitespace only.
    pub fn new(
        country: impl Into<String>,
        city: impl Into<String>,
        primary_keyword: &str,
        refinement_keyword: Option<&str>,
    ) -> Result<Self, CoreError> {
        let primary_keyword = primary_keyword.trim();
        if primary_keyword.is_empty() {
            return Err(CoreError::EmptyKeyword);
        }

        let refinement_keyword = refinement_keyword
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_owned);

        Ok(Self {
            country: country.into(),
            city: city.into(),
            primary_keyword: primary_keyword.to_owned(),
            refinement_keyword,
        })
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn primary_keyword(&self) -> &str {
        &self.primary_keyword
    }

    #[must_use]
    pub fn refinement_keyword(&self) -> Option<&str> {
        self.refinement_keyword.as_deref()
    }

    /// The `"<city>, <country>"` location fragment.
    ///
    /// City and country are trimmed individually and always joined with a
    /// comma, even when one side is empty; the joined string is trimmed once
    /// more so an empty country leaves no trailing space.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city.trim(), self.country.trim())
            .trim()
            .to_owned()
    }

    /// The free-text query sent to the text-search endpoint:
    /// `"<primary> <refinement> in <location>"`, with the refinement omitted
    /// entirely when absent.
    #[must_use]
    pub fn text_query(&self) -> String {
        let keywords = match &self.refinement_keyword {
            Some(refinement) => format!("{} {refinement}", self.primary_keyword),
            None => self.primary_keyword.clone(),
        };
        format!("{keywords} in {}", self.location())
    }
}
