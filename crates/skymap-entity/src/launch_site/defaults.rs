//! Built-in launch site list used to seed an empty store.

use chrono::{DateTime, Utc};

use super::model::LaunchSite;

/// Names of the sites seeded into an empty collection.
pub const DEFAULT_LAUNCH_SITES: [&str; 19] = [
    "Primorsko-Akhtarsk",
    "Yeysk",
    "Kursk",
    "Navlya",
    "Shatalovo",
    "Oryol",
    "Bryansk",
    "Belgorod",
    "Millerovo",
    "Taganrog",
    "Donetsk",
    "Luhansk",
    "Mariupol",
    "Hvardiiske",
    "Saky",
    "Chauda",
    "Dzhankoi",
    "Kacha",
    "Totskoye",
];

/// Build the default sites, unplaced and active, stamped with `now`.
pub fn default_launch_sites(now: DateTime<Utc>) -> Vec<LaunchSite> {
    DEFAULT_LAUNCH_SITES
        .iter()
        .map(|name| LaunchSite {
            name: (*name).to_string(),
            lat: None,
            lng: None,
            active: true,
            updated_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_are_unique() {
        let sites = default_launch_sites(Utc::now());
        let names: std::collections::HashSet<_> = sites.iter().map(|s| &s.name).collect();
        assert_eq!(sites.len(), 19);
        assert_eq!(names.len(), 19);
        assert!(sites.iter().all(|s| s.active && !s.is_placed()));
    }
}
