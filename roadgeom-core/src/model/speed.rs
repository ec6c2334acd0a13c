//! Speed values resolved for road segments.

use serde::{Deserialize, Serialize};

/// Travel speed pair for one direction of a road, in km/h: the value used
/// for edge weighting and the value used for ETA estimation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Speed {
    pub weight_km_h: f64,
    pub eta_km_h: f64,
}

impl Speed {
    pub const fn new(weight_km_h: f64, eta_km_h: f64) -> Self {
        Self {
            weight_km_h,
            eta_km_h,
        }
    }

    /// Same speed for weighting and ETA; ferry correction produces these.
    pub const fn uniform(km_h: f64) -> Self {
        Self::new(km_h, km_h)
    }

    /// Both components are positive and finite.
    pub fn is_valid(&self) -> bool {
        self.weight_km_h > 0.0
            && self.weight_km_h.is_finite()
            && self.eta_km_h > 0.0
            && self.eta_km_h.is_finite()
    }
}

/// Posted legal speed limit of a road, independent of the computed travel
/// speed used for routing. The default value is the "unset" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maxspeed {
    #[serde(default)]
    pub forward_km_h: Option<u16>,
    #[serde(default)]
    pub backward_km_h: Option<u16>,
}

impl Maxspeed {
    pub const UNSET: Maxspeed = Maxspeed {
        forward_km_h: None,
        backward_km_h: None,
    };

    pub fn is_set(&self) -> bool {
        self.forward_km_h.is_some() || self.backward_km_h.is_some()
    }

    /// Posted limit for a travel direction. A road without an explicit
    /// backward limit is symmetric, so the forward limit applies both ways.
    pub fn for_direction(&self, forward: bool) -> Option<u16> {
        if forward {
            self.forward_km_h
        } else {
            self.backward_km_h.or(self.forward_km_h)
        }
    }
}
