//! Static registry of Indian states and union territories
//!
//! Loaded once at startup and never mutated. Twenty regions carry a curated
//! historical disaster record; the remainder score with zero history until
//! their records are compiled. Iteration order is registration order, which
//! keeps aggregate endpoints deterministic before the final risk sort.

use shared::Region;

/// Read-only region registry
pub struct RegionRegistry {
    regions: Vec<Region>,
}

impl RegionRegistry {
    /// Build the registry with all 36 states and union territories
    pub fn new() -> Self {
        let regions = vec![
            // States with curated disaster history
            Region::new("Manipur", 24.6637, 93.9063).with_history(8, 3, 2),
            Region::new("Assam", 26.2006, 92.9376).with_history(12, 2, 1),
            Region::new("Kerala", 10.8505, 76.2711).with_history(10, 1, 0),
            Region::new("Uttarakhand", 30.0668, 79.0193).with_history(6, 4, 7),
            Region::new("Bihar", 25.5941, 85.1376).with_history(15, 5, 1),
            Region::new("Rajasthan", 27.0238, 74.2179).with_history(2, 10, 3),
            Region::new("Maharashtra", 19.7515, 75.7139).with_history(5, 6, 2),
            Region::new("Karnataka", 15.3173, 75.7139).with_history(4, 5, 1),
            Region::new("Tamil Nadu", 11.1271, 79.2787).with_history(6, 7, 2),
            Region::new("West Bengal", 24.1552, 88.2195).with_history(10, 3, 1),
            Region::new("Odisha", 20.9517, 85.0985).with_history(8, 4, 1),
            Region::new("Gujarat", 22.2587, 71.1924).with_history(3, 9, 5),
            Region::new("Telangana", 15.3173, 78.4740).with_history(3, 8, 0),
            Region::new("Andhra Pradesh", 15.9129, 79.7400).with_history(4, 8, 1),
            Region::new("Punjab", 31.1471, 75.3412).with_history(2, 6, 1),
            Region::new("Haryana", 29.0588, 77.0745).with_history(1, 8, 0),
            Region::new("Delhi", 28.7041, 77.1025).with_history(1, 10, 0),
            Region::new("Uttar Pradesh", 26.8467, 80.9462).with_history(4, 9, 1),
            Region::new("Jharkhand", 23.6102, 85.2799).with_history(5, 4, 2),
            Region::new("Chhattisgarh", 21.2787, 81.8661).with_history(6, 5, 1),
            // States without a compiled record yet
            Region::new("Arunachal Pradesh", 28.2180, 94.7278),
            Region::new("Goa", 15.2993, 74.1240),
            Region::new("Himachal Pradesh", 31.1048, 77.1734),
            Region::new("Madhya Pradesh", 22.9734, 78.6569),
            Region::new("Meghalaya", 25.4670, 91.3662),
            Region::new("Mizoram", 23.1645, 92.9376),
            Region::new("Nagaland", 26.1584, 94.5624),
            Region::new("Sikkim", 27.5330, 88.5122),
            Region::new("Tripura", 23.9408, 91.9882),
            // Union territories
            Region::new("Jammu & Kashmir", 33.7782, 76.5762),
            Region::new("Ladakh", 34.1526, 77.5771),
            Region::new("Puducherry", 11.9416, 79.8083),
            Region::new("Chandigarh", 30.7333, 76.7794),
            Region::new("Andaman & Nicobar Islands", 11.7401, 92.6586),
            Region::new("Lakshadweep", 10.5667, 72.6417),
            Region::new("Dadra & Nagar Haveli and Daman & Diu", 20.1809, 73.0169),
        ];

        Self { regions }
    }

    /// Look up a region by its exact name
    pub fn lookup(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Region names in registration order
    pub fn names(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.name.clone()).collect()
    }

    /// All regions in registration order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DisasterType;

    #[test]
    fn test_registry_covers_all_states_and_territories() {
        let registry = RegionRegistry::new();
        assert_eq!(registry.len(), 36);
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let registry = RegionRegistry::new();

        let bihar = registry.lookup("Bihar").expect("Bihar is registered");
        assert_eq!(bihar.event_count(DisasterType::Flood), 15);

        assert!(registry.lookup("Atlantis").is_none());
        // Lookup is exact, not case-insensitive
        assert!(registry.lookup("bihar").is_none());
    }

    #[test]
    fn test_names_keep_registration_order() {
        let registry = RegionRegistry::new();
        let names = registry.names();

        assert_eq!(names.first().map(String::as_str), Some("Manipur"));
        assert_eq!(names.get(4).map(String::as_str), Some("Bihar"));
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_punctuated_names_resolve() {
        let registry = RegionRegistry::new();
        assert!(registry.lookup("Jammu & Kashmir").is_some());
        assert!(registry
            .lookup("Dadra & Nagar Haveli and Daman & Diu")
            .is_some());
    }

    #[test]
    fn test_coordinates_inside_india_bounding_box() {
        let registry = RegionRegistry::new();
        for region in registry.regions() {
            let c = region.coordinates;
            assert!(
                (6.0..=37.0).contains(&c.latitude) && (68.0..=98.0).contains(&c.longitude),
                "{} has out-of-range coordinates",
                region.name
            );
        }
    }
}
