//! Fixed directory of nearby care facilities.

use serde_json::Number;

use triage_contracts::{assessment::NearbyResource, urgency::Urgency};

/// How many facilities a listing returns at most.
pub const MAX_RESULTS: usize = 3;

struct Facility {
    name: &'static str,
    kind: &'static str,
    distance: &'static str,
    wait_time: &'static str,
    phone: &'static str,
    address: &'static str,
    lat: f64,
    lng: f64,
}

const URGENT_CARE: &str = "Urgent Care";
const HOSPITAL: &str = "Hospital";
const EMERGENCY_ROOM: &str = "Emergency Room";

static DIRECTORY: [Facility; 4] = [
    Facility {
        name: "Bay Area Urgent Care",
        kind: URGENT_CARE,
        distance: "0.8 miles",
        wait_time: "15-30 min",
        phone: "(555) 123-4567",
        address: "123 Market St, San Francisco, CA",
        lat: 37.7749,
        lng: -122.4194,
    },
    Facility {
        name: "UCSF Medical Center",
        kind: HOSPITAL,
        distance: "2.1 miles",
        wait_time: "45-60 min",
        phone: "(555) 987-6543",
        address: "505 Parnassus Ave, San Francisco, CA",
        lat: 37.7632,
        lng: -122.4583,
    },
    Facility {
        name: "SF General Hospital",
        kind: EMERGENCY_ROOM,
        distance: "3.2 miles",
        wait_time: "60-90 min",
        phone: "(555) 456-7890",
        address: "1001 Potrero Ave, San Francisco, CA",
        lat: 37.7562,
        lng: -122.4041,
    },
    Facility {
        name: "Mission Bay Clinic",
        kind: "Clinic",
        distance: "1.5 miles",
        wait_time: "20-40 min",
        phone: "(555) 234-5678",
        address: "1825 4th St, San Francisco, CA",
        lat: 37.7670,
        lng: -122.3892,
    },
];

impl Facility {
    fn miles(&self) -> f64 {
        self.distance
            .split_whitespace()
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(f64::MAX)
    }

    fn suits(&self, urgency: Option<Urgency>) -> bool {
        match urgency {
            Some(Urgency::High) => matches!(self.kind, EMERGENCY_ROOM | HOSPITAL),
            Some(Urgency::Moderate) => matches!(self.kind, URGENT_CARE | HOSPITAL | EMERGENCY_ROOM),
            Some(Urgency::Low) | None => true,
        }
    }

    fn to_resource(&self) -> NearbyResource {
        NearbyResource {
            name: self.name.to_string(),
            kind: self.kind.to_string(),
            distance: self.distance.to_string(),
            wait_time: self.wait_time.to_string(),
            phone: self.phone.to_string(),
            address: Some(self.address.to_string()),
            lat: Number::from_f64(self.lat),
            lng: Number::from_f64(self.lng),
            extra: Default::default(),
        }
    }
}

/// The closest facilities suited to `urgency`, nearest first.
///
/// `location` is accepted for interface stability and does not affect
/// ranking; the directory is a single fixed region. `None` urgency (an
/// unrecognised label) lists every facility kind.
pub fn nearby_resources(_location: &str, urgency: Option<Urgency>) -> Vec<NearbyResource> {
    let mut matches: Vec<&Facility> = DIRECTORY.iter().filter(|f| f.suits(urgency)).collect();
    matches.sort_by(|a, b| a.miles().total_cmp(&b.miles()));
    matches
        .into_iter()
        .take(MAX_RESULTS)
        .map(Facility::to_resource)
        .collect()
}
