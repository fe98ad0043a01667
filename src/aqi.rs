use serde::Serialize;

/// Severity classification of an AQI reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// One severity band with its display metadata, matching the US EPA scale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AqiBand {
    pub min: f64,
    pub max: f64,
    pub level: AqiLevel,
    pub label: &'static str,
    pub color: &'static str,
    pub text_color: &'static str,
    pub advice: &'static str,
}

/// The six bands, contiguous and non-overlapping over [0, 500].
pub static AQI_BANDS: [AqiBand; 6] = [
    AqiBand {
        min: 0.0,
        max: 50.0,
        level: AqiLevel::Good,
        label: "Good",
        color: "#00e400",
        text_color: "#000",
        advice: "Air quality is satisfactory.",
    },
    AqiBand {
        min: 51.0,
        max: 100.0,
        level: AqiLevel::Moderate,
        label: "Moderate",
        color: "#ffff00",
        text_color: "#000",
        advice: "Acceptable; moderate health concern for sensitive people.",
    },
    AqiBand {
        min: 101.0,
        max: 150.0,
        level: AqiLevel::UnhealthySensitive,
        label: "Unhealthy for Sensitive",
        color: "#ff7e00",
        text_color: "#000",
        advice: "Sensitive groups may experience health effects.",
    },
    AqiBand {
        min: 151.0,
        max: 200.0,
        level: AqiLevel::Unhealthy,
        label: "Unhealthy",
        color: "#ff0000",
        text_color: "#fff",
        advice: "Everyone may begin to experience health effects.",
    },
    AqiBand {
        min: 201.0,
        max: 300.0,
        level: AqiLevel::VeryUnhealthy,
        label: "Very Unhealthy",
        color: "#8f3f97",
        text_color: "#fff",
        advice: "Health alert: everyone may experience serious effects.",
    },
    AqiBand {
        min: 301.0,
        max: 500.0,
        level: AqiLevel::Hazardous,
        label: "Hazardous",
        color: "#7e0023",
        text_color: "#fff",
        advice: "Health warning of emergency conditions.",
    },
];

/// Classify an AQI reading into its severity band.
///
/// Total over all inputs: readings above 500 (the scale has no defined upper
/// bound) saturate to the hazardous band instead of failing, and inputs
/// outside the domain on the low side take the same fallback.
pub fn classify(aqi: f64) -> &'static AqiBand {
    AQI_BANDS
        .iter()
        .find(|band| aqi >= band.min && aqi <= band.max)
        .unwrap_or(&AQI_BANDS[AQI_BANDS.len() - 1])
}

/// Display color for an AQI reading.
pub fn color_for(aqi: f64) -> &'static str {
    classify(aqi).color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_partition_domain() {
        // Contiguous, non-overlapping, ascending.
        for pair in AQI_BANDS.windows(2) {
            assert_eq!(pair[1].min, pair[0].max + 1.0);
        }
        // Every integer reading in [0, 500] lands in exactly one band.
        for aqi in 0..=500 {
            let aqi = aqi as f64;
            let matching = AQI_BANDS
                .iter()
                .filter(|b| aqi >= b.min && aqi <= b.max)
                .count();
            assert_eq!(matching, 1, "aqi {} matched {} bands", aqi, matching);
        }
    }

    #[test]
    fn test_boundary_exactness() {
        assert_eq!(classify(0.0).level, AqiLevel::Good);
        assert_eq!(classify(50.0).level, AqiLevel::Good);
        assert_eq!(classify(51.0).level, AqiLevel::Moderate);
        assert_eq!(classify(100.0).level, AqiLevel::Moderate);
        assert_eq!(classify(101.0).level, AqiLevel::UnhealthySensitive);
        assert_eq!(classify(150.0).level, AqiLevel::UnhealthySensitive);
        assert_eq!(classify(151.0).level, AqiLevel::Unhealthy);
        assert_eq!(classify(200.0).level, AqiLevel::Unhealthy);
        assert_eq!(classify(201.0).level, AqiLevel::VeryUnhealthy);
        assert_eq!(classify(300.0).level, AqiLevel::VeryUnhealthy);
        assert_eq!(classify(301.0).level, AqiLevel::Hazardous);
        assert_eq!(classify(500.0).level, AqiLevel::Hazardous);
    }

    #[test]
    fn test_saturates_above_scale() {
        assert_eq!(classify(501.0).level, AqiLevel::Hazardous);
        assert_eq!(classify(10_000.0).level, AqiLevel::Hazardous);
        assert_eq!(classify(501.0).label, classify(500.0).label);
    }

    #[test]
    fn test_negative_input_takes_fallback() {
        // Not physically meaningful, but the scan must stay total.
        assert_eq!(classify(-1.0).level, AqiLevel::Hazardous);
    }

    #[test]
    fn test_color_lookup() {
        assert_eq!(color_for(42.0), "#00e400");
        assert_eq!(color_for(175.0), "#ff0000");
    }
}
