use serde::{Deserialize, Serialize};

/// Provider response wrapper: `status` is `"ok"` or `"error"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamEnvelope<T> {
    pub status: String,
    pub data: T,
}

/// Full city feed payload from `GET /feed/{city}/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityAqi {
    pub idx: i64,
    pub aqi: f64,
    pub city: CityInfo,
    pub dominentpol: Option<String>,
    #[serde(default)]
    pub iaqi: Iaqi,
    pub time: ObservationTime,
    pub forecast: Option<Forecast>,
    #[serde(default)]
    pub attributions: Vec<Attribution>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityInfo {
    pub name: String,
    #[serde(default)]
    pub geo: Vec<f64>,
    pub url: Option<String>,
}

/// Individual pollutant and meteorological readings. Stations report an
/// arbitrary subset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Iaqi {
    pub pm25: Option<IaqiValue>,
    pub pm10: Option<IaqiValue>,
    pub o3: Option<IaqiValue>,
    pub no2: Option<IaqiValue>,
    pub so2: Option<IaqiValue>,
    pub co: Option<IaqiValue>,
    pub t: Option<IaqiValue>,
    pub h: Option<IaqiValue>,
    pub w: Option<IaqiValue>,
    pub p: Option<IaqiValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IaqiValue {
    pub v: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationTime {
    pub s: String,
    pub tz: String,
    pub v: i64,
    pub iso: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub daily: ForecastDaily,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastDaily {
    pub pm25: Option<Vec<ForecastDay>>,
    pub pm10: Option<Vec<ForecastDay>>,
    pub o3: Option<Vec<ForecastDay>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub avg: f64,
    pub day: String,
    pub max: f64,
    pub min: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribution {
    pub name: String,
    pub url: Option<String>,
}

/// Station AQI as reported by map and search endpoints: a number, or a
/// placeholder string ("-") when the station has no current reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AqiReading {
    Value(f64),
    Unavailable(String),
}

impl AqiReading {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AqiReading::Value(v) => Some(*v),
            AqiReading::Unavailable(raw) => raw.parse().ok(),
        }
    }
}

/// One station from `GET /map/bounds/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiStation {
    pub uid: i64,
    pub aqi: AqiReading,
    pub lat: f64,
    pub lon: f64,
    pub station: StationMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationMeta {
    pub name: String,
    pub time: Option<String>,
}

/// One match from `GET /search/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub uid: i64,
    pub aqi: AqiReading,
    pub time: SearchTime,
    pub station: SearchStation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTime {
    pub tz: Option<String>,
    pub stime: Option<String>,
    pub vtime: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStation {
    pub name: String,
    #[serde(default)]
    pub geo: Vec<f64>,
    pub url: Option<String>,
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_city_feed_deserializes() {
        let raw = json!({
            "status": "ok",
            "data": {
                "idx": 2554,
                "aqi": 42,
                "city": {"name": "Paris", "geo": [48.8566, 2.3522], "url": "https://aqicn.org/city/paris"},
                "dominentpol": "pm25",
                "iaqi": {"pm25": {"v": 42.0}, "t": {"v": 18.5}},
                "time": {"s": "2024-01-15 14:00:00", "tz": "+01:00", "v": 1705327200, "iso": "2024-01-15T14:00:00+01:00"},
                "attributions": [{"name": "Airparif", "url": "https://www.airparif.asso.fr/"}]
            }
        });

        let envelope: UpstreamEnvelope<CityAqi> = serde_json::from_value(raw).unwrap();
        assert_eq!(envelope.status, "ok");
        assert_eq!(envelope.data.idx, 2554);
        assert_eq!(envelope.data.aqi, 42.0);
        assert_eq!(envelope.data.city.name, "Paris");
        assert_eq!(envelope.data.iaqi.pm25.unwrap().v, 42.0);
    }

    #[test]
    fn test_station_aqi_accepts_number_or_placeholder() {
        let numeric: AqiStation = serde_json::from_value(json!({
            "uid": 1437,
            "aqi": 65,
            "lat": 39.954,
            "lon": 116.468,
            "station": {"name": "Beijing US Embassy", "time": "2024-01-15T14:00:00+08:00"}
        }))
        .unwrap();
        assert_eq!(numeric.aqi.as_number(), Some(65.0));

        let offline: AqiStation = serde_json::from_value(json!({
            "uid": 9001,
            "aqi": "-",
            "lat": 0.0,
            "lon": 0.0,
            "station": {"name": "Offline station"}
        }))
        .unwrap();
        assert_eq!(offline.aqi.as_number(), None);
    }

    #[test]
    fn test_search_result_deserializes() {
        // Search reports aqi as a decimal string.
        let result: SearchResult = serde_json::from_value(json!({
            "uid": 5724,
            "aqi": "31",
            "time": {"tz": "+09:00", "stime": "2024-01-15 14:00:00", "vtime": 1705294800},
            "station": {"name": "Seoul", "geo": [37.56, 126.97], "url": "seoul", "country": "KR"}
        }))
        .unwrap();
        assert_eq!(result.aqi.as_number(), Some(31.0));
        assert_eq!(result.station.country.as_deref(), Some("KR"));
    }
}
