//! Advisory selection for disaster assessments
//!
//! Two variants exist. The recommendation table is a fixed lookup keyed by
//! disaster type and risk level, ordered by escalating severity. The alert
//! generator asks the inference service for a one-line phrasing and falls
//! back to a deterministic template on any failure.

use shared::{DisasterType, OutlookLevel, RiskLevel};

use crate::external::InferenceClient;

/// Generated alerts are cut to this many characters
const ALERT_MAX_CHARS: usize = 150;

/// Fixed recommendations for a disaster type at a risk level, in escalating
/// order of severity
pub fn recommendations(disaster: DisasterType, level: RiskLevel) -> &'static [&'static str] {
    match (disaster, level) {
        (DisasterType::Flood, RiskLevel::Low) => &[
            "✓ Monitor weather updates regularly",
            "✓ Keep emergency supplies accessible",
            "✓ Know your evacuation routes",
            "✓ Stay informed via local alerts",
        ],
        (DisasterType::Flood, RiskLevel::Moderate) => &[
            "⚠️ Prepare evacuation plan with family",
            "⚠️ Stock food, water, medicines for 3 days",
            "⚠️ Keep documents in waterproof bags",
            "⚠️ Monitor rainfall intensity hourly",
            "⚠️ Avoid travelling to flood-prone areas",
        ],
        (DisasterType::Flood, RiskLevel::High) => &[
            "🚨 EVACUATE to higher ground immediately",
            "🚨 Take essential documents & valuables",
            "🚨 Move livestock to safe locations",
            "🚨 Cut off electricity at main switch",
            "🚨 Call emergency: 112",
            "🚨 Do NOT attempt to cross flooded areas",
        ],
        (DisasterType::Flood, RiskLevel::Critical) => &[
            "🚨🚨 IMMEDIATE EVACUATION REQUIRED",
            "🚨🚨 Follow official evacuation orders",
            "🚨🚨 Go to nearest shelter/higher ground",
            "🚨🚨 Emergency: 112 | Disaster Mgmt: 1078",
            "🚨🚨 Stay in contact with authorities",
        ],
        (DisasterType::Heatwave, RiskLevel::Low) => &[
            "✓ Stay hydrated (2-3 liters water daily)",
            "✓ Avoid peak sun hours (11 AM - 3 PM)",
            "✓ Wear light, loose clothing",
            "✓ Check on elderly and children regularly",
        ],
        (DisasterType::Heatwave, RiskLevel::Moderate) => &[
            "⚠️ Reduce outdoor activities",
            "⚠️ Use air conditioning or stay in cool places",
            "⚠️ Drink electrolyte solutions",
            "⚠️ Don't leave children/pets in vehicles",
            "⚠️ Apply sunscreen (SPF 30+)",
        ],
        (DisasterType::Heatwave, RiskLevel::High) => &[
            "🚨 Stay indoors in cool environment",
            "🚨 Avoid all outdoor activities",
            "🚨 Drink water every 15-20 minutes",
            "🚨 Seek medical help if: dizziness, nausea, weakness",
            "🚨 Help vulnerable people: elderly, homeless, animals",
        ],
        (DisasterType::Heatwave, RiskLevel::Critical) => &[
            "🚨🚨 EXTREME HEAT ALERT - LIFE THREATENING",
            "🚨🚨 Stay in air-conditioned rooms",
            "🚨🚨 Cold water baths/showers every 2-3 hours",
            "🚨🚨 Call 108 (ambulance) for heat stroke symptoms",
            "🚨🚨 Industrial/construction work HALTED",
        ],
        (DisasterType::Earthquake, RiskLevel::Low) => &[
            "✓ Know safe spots in your building",
            "✓ Keep emergency kit ready",
            "✓ Practice 'Drop, Cover, Hold' drill",
            "✓ Know how to turn off gas/electricity",
        ],
        (DisasterType::Earthquake, RiskLevel::Moderate) => &[
            "⚠️ Keep emergency kit accessible",
            "⚠️ Reinforce weak structures if possible",
            "⚠️ Have first aid supplies ready",
            "⚠️ Plan meeting point with family",
            "⚠️ Stay alert for aftershocks",
        ],
        (DisasterType::Earthquake, RiskLevel::High) => &[
            "🚨 DROP to hands and knees immediately",
            "🚨 COVER head with hands under sturdy table",
            "🚨 HOLD on until shaking stops",
            "🚨 Stay away from windows, mirrors, heavy objects",
            "🚨 Don't run outside (falling debris)",
        ],
        (DisasterType::Earthquake, RiskLevel::Critical) => &[
            "🚨🚨 MAJOR EARTHQUAKE - LIFE THREATENING",
            "🚨🚨 If inside: DROP-COVER-HOLD",
            "🚨🚨 If outside: Move away from buildings",
            "🚨🚨 If in vehicle: Stay inside with seatbelt",
            "🚨🚨 Emergency: 112 | Prepare for aftershocks",
        ],
    }
}

/// Deterministic alert used when the inference service fails
pub fn fallback_alert(level: OutlookLevel, disaster: DisasterType, region: &str) -> String {
    format!("{} {} risk in {}", level, disaster.label(), region)
}

/// Cut generated text to the alert length limit, on a char boundary
pub fn truncate_alert(text: &str) -> String {
    text.trim().chars().take(ALERT_MAX_CHARS).collect()
}

/// Ask the inference service for a one-line alert; never fails past this
/// function
pub async fn generate_alert(
    inference: &InferenceClient,
    disaster: DisasterType,
    level: OutlookLevel,
    region: &str,
    rainfall_72h_mm: f64,
) -> String {
    let prompt = format!(
        "Write one short public safety alert sentence for a {} {} risk in {}, India. \
         Expected rainfall over the next 72 hours: {:.0} mm.",
        level,
        disaster.as_str(),
        region,
        rainfall_72h_mm
    );

    match inference.generate(&prompt).await {
        Ok(text) if !text.trim().is_empty() => truncate_alert(&text),
        Ok(_) => fallback_alert(level, disaster, region),
        Err(e) => {
            tracing::warn!(region = %region, error = %e, "alert generation failed, using fallback");
            fallback_alert(level, disaster, region)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_alert_text() {
        assert_eq!(
            fallback_alert(OutlookLevel::High, DisasterType::Flood, "Kerala"),
            "HIGH FLOOD risk in Kerala"
        );
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "⚠️".repeat(200);
        let cut = truncate_alert(&long);
        assert_eq!(cut.chars().count(), 150);
    }

    #[tokio::test]
    async fn test_generate_alert_falls_back_when_service_unreachable() {
        let config = crate::config::InferenceConfig {
            endpoint: "http://127.0.0.1:9/generate".to_string(),
            api_token: "hf_placeholder_token".to_string(),
            timeout_secs: 1,
        };
        let inference =
            InferenceClient::with_endpoint(&config, "http://127.0.0.1:9/generate".to_string());

        let alert = generate_alert(
            &inference,
            DisasterType::Flood,
            OutlookLevel::High,
            "Kerala",
            82.0,
        )
        .await;

        assert_eq!(alert, "HIGH FLOOD risk in Kerala");
    }

    #[test]
    fn test_every_combination_has_recommendations() {
        for disaster in DisasterType::ALL {
            for level in [
                RiskLevel::Low,
                RiskLevel::Moderate,
                RiskLevel::High,
                RiskLevel::Critical,
            ] {
                assert!(!recommendations(disaster, level).is_empty());
            }
        }
    }
}
