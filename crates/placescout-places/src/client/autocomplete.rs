//! Country suggestions for the search bar.

use crate::error::PlacesError;
use crate::types::{AutocompleteResponse, PlacePrediction};

use super::{PlacesClient, AUTOCOMPLETE_ENDPOINT};

impl PlacesClient {
    /// Suggests countries matching `input`.
    ///
    /// Queries region autocomplete and keeps only predictions typed
    /// `country`, in provider order.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Status`] if the provider status is neither `OK` nor `ZERO_RESULTS`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn autocomplete_countries(
        &self,
        input: &str,
    ) -> Result<Vec<PlacePrediction>, PlacesError> {
        let url = self.build_url(
            AUTOCOMPLETE_ENDPOINT,
            &[("input", input), ("types", "(regions)")],
        )?;
        let response: AutocompleteResponse = self.request_json(&url, "autocomplete").await?;

        match response.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            _ => {
                return Err(PlacesError::Status {
                    endpoint: "autocomplete",
                    status: response.status,
                    message: response
                        .error_message
                        .unwrap_or_else(|| "no error message".to_owned()),
                })
            }
        }

        Ok(response
            .predictions
            .into_iter()
            .filter(|p| p.types.iter().any(|t| t == "country"))
            .collect())
    }
}
