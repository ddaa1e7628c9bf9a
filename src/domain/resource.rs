use crate::domain::Coordinates;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Hospital,
    Ambulance,
}

impl ResourceKind {
    /// Path of the backend endpoint serving nearby resources of this kind.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Hospital => "/api/hospitals",
            ResourceKind::Ambulance => "/api/ambulances",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Hospital => write!(f, "hospital"),
            ResourceKind::Ambulance => write!(f, "ambulance"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceResult {
    pub name: String,
    pub vicinity: String,
    pub location: Coordinates,
}

impl ResourceResult {
    pub fn map_link(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.location.latitude, self.location.longitude
        )
    }
}
