//! Typed identifier newtypes backed by the backend's numeric ids.
//!
//! Every entity id is assigned by the backend (auto-increment column), so
//! these wrap `i64` rather than generating anything client-side.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw backend id.
            #[must_use]
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Access the raw numeric value.
            #[must_use]
            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Customer`](crate::customer::Customer).
    CustomerId
);

define_id!(
    /// Unique identifier for a [`Driver`](crate::driver::Driver).
    DriverId
);

define_id!(
    /// Unique identifier for a [`Vehicle`](crate::vehicle::Vehicle).
    VehicleId
);

define_id!(
    /// Unique identifier for a [`Shipment`](crate::shipment::Shipment).
    ShipmentId
);
