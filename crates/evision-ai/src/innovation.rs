//! The EVision Innovation Score: the fixed 40/30/30 rubric and the one-shot
//! analysis that asks the model to apply it to a single vehicle.
//!
//! Nothing is computed locally; the rubric is presentation data and the
//! score itself comes back from the model as text.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::{send_with_timeout, AiClient, RemoteError, Turn};

/// One weighted component of the composite score.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreComponent {
    pub name: &'static str,
    /// Share of the composite score, in percent.
    pub weight: u8,
    /// Short bullet list shown on the home page.
    pub highlights: &'static [&'static str],
    /// Full criteria shown on the methodology page.
    pub criteria: &'static [&'static str],
}

pub const RUBRIC: [ScoreComponent; 3] = [
    ScoreComponent {
        name: "Technology",
        weight: 40,
        highlights: &[
            "Battery technology & range",
            "Autonomous features",
            "Software integration",
        ],
        criteria: &[
            "Battery capacity & chemistry",
            "Range (EPA/WLTP)",
            "Autonomous driving features",
            "OTA updates & software",
            "Charging capability (kW)",
        ],
    },
    ScoreComponent {
        name: "Efficiency",
        weight: 30,
        highlights: &[
            "kWh/100km efficiency",
            "Charging speed",
            "Regenerative braking",
        ],
        criteria: &[
            "kWh per 100km",
            "Real-world efficiency",
            "Regenerative braking",
            "Thermal management",
            "Charging speed (10-80%)",
        ],
    },
    ScoreComponent {
        name: "User Value",
        weight: 30,
        highlights: &[
            "Price-to-performance ratio",
            "Total cost of ownership",
            "Practicality & reliability",
        ],
        criteria: &[
            "Price-to-range ratio",
            "Total cost of ownership",
            "Reliability ratings",
            "Practicality (space, cargo)",
            "Warranty & support",
        ],
    },
];

/// Brands offered in the score form. Any other brand is accepted too.
pub const SUGGESTED_BRANDS: [&str; 6] = ["Tesla", "BYD", "MG", "Tata", "Mahindra", "Hyundai"];

#[derive(Debug, thiserror::Error)]
pub enum ScoreRequestError {
    #[error("Please select a brand")]
    MissingBrand,
    #[error("Please enter a model name")]
    MissingModel,
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// The prompt asking the model to score `brand model` against the rubric.
pub fn one_shot_prompt(brand: &str, model: &str) -> String {
    let [tech, efficiency, value] = &RUBRIC;
    format!(
        "Analyze the {brand} {model} using the EVision Innovation Score methodology. \
         Provide scores for {} ({}%), {} ({}%), and {} ({}%), \
         along with a final composite score out of 100.",
        tech.name, tech.weight, efficiency.name, efficiency.weight, value.name, value.weight,
    )
}

/// Runs one-shot score analyses. No session is involved.
#[derive(Clone)]
pub struct ScoreAnalyst {
    client: Arc<dyn AiClient>,
    timeout: Duration,
}

impl ScoreAnalyst {
    pub fn new(client: Arc<dyn AiClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Ask the model for the innovation breakdown of one vehicle.
    pub async fn analyze(&self, brand: &str, model: &str) -> Result<String, ScoreRequestError> {
        analyze_one_shot(self.client.as_ref(), brand, model, self.timeout).await
    }
}

/// Send the scoring prompt for `brand model` as a single user turn.
///
/// Blank fields are rejected before any remote call.
pub async fn analyze_one_shot(
    client: &dyn AiClient,
    brand: &str,
    model: &str,
    timeout: Duration,
) -> Result<String, ScoreRequestError> {
    let (brand, model) = (brand.trim(), model.trim());
    if brand.is_empty() {
        return Err(ScoreRequestError::MissingBrand);
    }
    if model.is_empty() {
        return Err(ScoreRequestError::MissingModel);
    }

    let prompt = one_shot_prompt(brand, model);
    match send_with_timeout(client, &[Turn::user(prompt)], timeout).await {
        Ok(response) => {
            info!(
                brand,
                model,
                output_tokens = response.usage.output_tokens,
                "Innovation analysis received"
            );
            Ok(response.text)
        }
        Err(e) => {
            warn!(brand, model, error = %e, "Innovation analysis failed");
            Err(e.into())
        }
    }
}
