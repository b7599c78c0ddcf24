//! Order status lifecycle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order fulfillment status.
///
/// The intended flow is forward-only — pending → confirmed → preparing →
/// shipped → delivered — with cancellation possible from any non-terminal
/// state. This is a back-office convention: the data layer accepts any
/// status write, and [`OrderStatus::can_transition_to`] is what a client
/// uses to offer only the sensible next steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Delivered and cancelled orders do not move again
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// The next step in the forward flow, if any
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Confirmed),
            Self::Confirmed => Some(Self::Preparing),
            Self::Preparing => Some(Self::Shipped),
            Self::Shipped => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    /// Whether the conventional flow permits moving to `target`
    pub fn can_transition_to(self, target: Self) -> bool {
        if target == Self::Cancelled {
            return !self.is_terminal();
        }
        self.next() == Some(target)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}
