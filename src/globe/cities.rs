//! The 50 most populous metropolitan areas (2025 estimates).

use serde::{Deserialize, Serialize};

use super::GlobePoint;
use crate::chem::Color;

/// One metropolitan area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Metro area name.
    pub name: String,
    /// Country name.
    pub country: String,
    /// Population in millions.
    pub population: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// `(name, country, population in millions, latitude, longitude)`, sorted
/// by population descending. Source: Demographia World Urban Areas, 20th
/// edition; coordinates from GeoNames.
#[rustfmt::skip]
const CITY_TABLE: [(&str, &str, f64, f64, f64); 50] = [
    ("Guangzhou", "China", 72.7, 23.1291, 113.2644),
    ("Shanghai", "China", 41.6, 31.2304, 121.4737),
    ("Tokyo", "Japan", 41.2, 35.6762, 139.6503),
    ("Delhi", "India", 35.7, 28.6139, 77.209),
    ("Jakarta", "Indonesia", 29.5, -6.2088, 106.8456),
    ("Manila", "Philippines", 27.8, 14.5995, 120.9842),
    ("Mumbai", "India", 27.6, 19.076, 72.8777),
    ("Mexico City", "Mexico", 25.4, 19.4326, -99.1332),
    ("Seoul", "South Korea", 25.2, 37.5665, 126.978),
    ("Dhaka", "Bangladesh", 23.1, 23.8103, 90.4125),
    ("Cairo", "Egypt", 22.8, 30.0444, 31.2357),
    ("São Paulo", "Brazil", 22.6, -23.5505, -46.6333),
    ("Bangkok", "Thailand", 21.8, 13.7563, 100.5018),
    ("New York", "United States", 21.8, 40.7128, -74.006),
    ("Beijing", "China", 21.5, 39.9042, 116.4074),
    ("Lagos", "Nigeria", 21.3, 6.5244, 3.3792),
    ("Karachi", "Pakistan", 21.0, 24.8607, 67.0011),
    ("Moscow", "Russia", 18.8, 55.7558, 37.6173),
    ("Chengdu", "China", 18.1, 30.5728, 104.0668),
    ("Kolkata", "India", 17.9, 22.5726, 88.3639),
    ("Osaka", "Japan", 17.7, 34.6937, 135.5023),
    ("Los Angeles", "United States", 17.1, 34.0522, -118.2437),
    ("Buenos Aires", "Argentina", 16.7, -34.6037, -58.3816),
    ("Tehran", "Iran", 16.2, 35.6892, 51.389),
    ("Kinshasa", "DR Congo", 16.0, -4.4419, 15.2663),
    ("Istanbul", "Turkey", 15.8, 41.0082, 28.9784),
    ("London", "United Kingdom", 15.4, 51.5074, -0.1278),
    ("Johannesburg", "South Africa", 15.2, -26.2041, 28.0473),
    ("Bangalore", "India", 14.9, 12.9716, 77.5946),
    ("Hangzhou", "China", 14.3, 30.2741, 120.1551),
    ("Lahore", "Pakistan", 14.2, 31.5497, 74.3436),
    ("Ho Chi Minh City", "Vietnam", 13.9, 10.8231, 106.6297),
    ("Rio de Janeiro", "Brazil", 13.8, -22.9068, -43.1729),
    ("Xi'an", "China", 13.7, 34.3416, 108.9398),
    ("Chennai", "India", 13.4, 13.0827, 80.2707),
    ("Chongqing", "China", 13.3, 29.4316, 106.9123),
    ("Wuhan", "China", 13.0, 30.5928, 114.3055),
    ("Lima", "Peru", 12.9, -12.0464, -77.0428),
    ("Hyderabad", "India", 12.8, 17.385, 78.4867),
    ("Tianjin", "China", 12.6, 39.3434, 117.3616),
    ("Changsha", "China", 12.5, 28.2282, 112.9388),
    ("Paris", "France", 12.4, 48.8566, 2.3522),
    ("Rhine-Ruhr", "Germany", 11.9, 51.4556, 7.0116),
    ("Bogotá", "Colombia", 11.7, 4.711, -74.0721),
    ("Nagoya", "Japan", 11.4, 35.1815, 136.9066),
    ("Zhengzhou", "China", 11.3, 34.7466, 113.6253),
    ("Taipei", "Taiwan", 11.2, 25.033, 121.5654),
    ("Ahmedabad", "India", 11.1, 23.0225, 72.5714),
    ("Luanda", "Angola", 11.0, -8.8383, 13.2344),
    ("Chicago", "United States", 10.9, 41.8781, -87.6298),
];

/// Population bands, largest first: `(minimum millions, color)`.
const POPULATION_BANDS: [(f64, Color); 6] = [
    (50.0, Color::from_hex(0xD3_2F_2F)),
    (35.0, Color::from_hex(0xFF_6F_00)),
    (25.0, Color::from_hex(0xFF_A7_26)),
    (20.0, Color::from_hex(0xFF_EB_3B)),
    (15.0, Color::from_hex(0xAE_D5_81)),
    (12.0, Color::from_hex(0x66_BB_6A)),
];

const SMALLEST_BAND_COLOR: Color = Color::from_hex(0x42_A5_F5);

/// Marker size per decade of population.
const SIZE_PER_DECADE: f64 = 0.03;

/// The city dataset in rank order.
#[must_use]
pub fn top_cities() -> Vec<City> {
    CITY_TABLE
        .iter()
        .map(|&(name, country, population, latitude, longitude)| City {
            name: name.to_owned(),
            country: country.to_owned(),
            population,
            latitude,
            longitude,
        })
        .collect()
}

/// Heat-map color for a population in millions: blue for the smallest
/// cities through green and yellow to red for 50M+.
#[must_use]
pub fn population_color(population: f64) -> Color {
    POPULATION_BANDS
        .iter()
        .find(|(min, _)| population >= *min)
        .map_or(SMALLEST_BAND_COLOR, |&(_, color)| color)
}

/// Marker size for a population in millions, log-scaled.
#[must_use]
pub fn population_size(population: f64) -> f32 {
    (population.log10() * SIZE_PER_DECADE) as f32
}

fn city_label(city: &City, rank: usize, total: usize) -> String {
    format!(
        "<div class=\"tooltip-title\">{name}, {country}</div>\
         <div class=\"tooltip-content\">\
         <strong>Population:</strong> {pop:.1}M<br/>\
         <strong>Country:</strong> {country}<br/>\
         <strong>Rank:</strong> {rank} of {total}\
         </div>",
        name = city.name,
        country = city.country,
        pop = city.population,
    )
}

/// Globe markers for every city, in rank order.
#[must_use]
pub fn convert_cities_to_points() -> Vec<GlobePoint> {
    let cities = top_cities();
    let total = cities.len();
    cities
        .into_iter()
        .enumerate()
        .map(|(i, city)| GlobePoint {
            lat: city.latitude,
            lng: city.longitude,
            size: population_size(city.population),
            color: population_color(city.population),
            label: city_label(&city, i + 1, total),
            city: Some(city),
        })
        .collect()
}

/// Summary figures for the city dataset, populations in millions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStats {
    /// Number of cities.
    pub total: usize,
    /// Largest population.
    pub max_population: f64,
    /// Smallest population.
    pub min_population: f64,
    /// Mean population.
    pub avg_population: f64,
    /// Sum of all populations.
    pub total_population: f64,
}

/// Statistics over the city dataset.
#[must_use]
pub fn city_stats() -> CityStats {
    let populations = CITY_TABLE.iter().map(|c| c.2);
    let total_population: f64 = populations.clone().sum();
    CityStats {
        total: CITY_TABLE.len(),
        max_population: populations.clone().fold(f64::MIN, f64::max),
        min_population: populations.fold(f64::MAX, f64::min),
        avg_population: total_population / CITY_TABLE.len() as f64,
        total_population,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_bands_are_inclusive_at_threshold() {
        assert_eq!(population_color(72.7), Color::from_hex(0xD3_2F_2F));
        assert_eq!(population_color(35.0), Color::from_hex(0xFF_6F_00));
        assert_eq!(population_color(34.9), Color::from_hex(0xFF_A7_26));
        assert_eq!(population_color(20.0), Color::from_hex(0xFF_EB_3B));
        assert_eq!(population_color(15.0), Color::from_hex(0xAE_D5_81));
        assert_eq!(population_color(12.0), Color::from_hex(0x66_BB_6A));
        assert_eq!(population_color(11.9), SMALLEST_BAND_COLOR);
    }

    #[test]
    fn size_is_log_scaled() {
        assert!((population_size(10.0) - 0.03).abs() < 1e-6);
        assert!((population_size(100.0) - 0.06).abs() < 1e-6);
        assert!(population_size(72.7) > population_size(10.9));
    }

    #[test]
    fn dataset_is_ranked() {
        let cities = top_cities();
        assert_eq!(cities.len(), 50);
        assert_eq!(cities[0].name, "Guangzhou");
        assert_eq!(cities[49].name, "Chicago");
        assert!(cities.windows(2).all(|w| w[0].population >= w[1].population));
    }

    #[test]
    fn points_carry_rank_labels() {
        let points = convert_cities_to_points();
        assert_eq!(points.len(), 50);
        assert!(points[2].label.contains("Tokyo, Japan"));
        assert!(points[2].label.contains("Rank:</strong> 3 of 50"));
        assert!(points[2].label.contains("41.2M"));
        assert_eq!(points[0].color, Color::from_hex(0xD3_2F_2F));
        assert_eq!(points[0].city.as_ref().map(|c| c.population), Some(72.7));
    }

    #[test]
    fn stats_cover_dataset() {
        let stats = city_stats();
        assert_eq!(stats.total, 50);
        assert_eq!(stats.max_population, 72.7);
        assert_eq!(stats.min_population, 10.9);
        assert!((stats.avg_population * 50.0 - stats.total_population).abs() < 1e-9);
    }
}
