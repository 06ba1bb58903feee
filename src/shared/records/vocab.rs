//! Fixed vocabularies for enumerated record fields.
//!
//! Records keep these fields as plain strings so that values the console
//! does not know about still round-trip. Forms only offer the values below,
//! and badges fall back to [`BadgeColor::Neutral`] for anything else.
//! Lookups are exact and case-sensitive.

use std::fmt;

/// Color token for status badges, mapped to real colors by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    Blue,
    Yellow,
    Green,
    Emerald,
    Red,
    Gray,
    Purple,
    Orange,
    /// Unknown value
    Neutral,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $wire:literal, $label:literal, $color:ident;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every value, in the order forms offer them
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire representation
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Human-readable label
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn color(self) -> BadgeColor {
                match self {
                    $($name::$variant => BadgeColor::$color,)+
                }
            }

            /// Exact, case-sensitive lookup of a wire value
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Badge color for a raw record value
            pub fn badge(value: &str) -> BadgeColor {
                Self::parse(value).map(Self::color).unwrap_or(BadgeColor::Neutral)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Project property type
    PropertyType {
        Apartment => "apartment", "Apartment", Blue;
        Villa => "villa", "Villa", Emerald;
        Plot => "plot", "Plot", Orange;
        Commercial => "commercial", "Commercial", Purple;
    }
}

vocabulary! {
    /// Project construction status
    ProjectStatus {
        Active => "active", "Active", Green;
        UnderConstruction => "under_construction", "Under Construction", Yellow;
        Completed => "completed", "Completed", Blue;
        Planned => "planned", "Planned", Purple;
        Suspended => "suspended", "Suspended", Red;
    }
}

vocabulary! {
    /// Sales pipeline stage of a lead
    LeadStatus {
        New => "new", "New", Blue;
        Contacted => "contacted", "Contacted", Yellow;
        Qualified => "qualified", "Qualified", Green;
        Converted => "converted", "Converted", Emerald;
        Lost => "lost", "Lost", Red;
    }
}

vocabulary! {
    /// Invoice payment status
    PaymentStatus {
        Pending => "pending", "Pending", Yellow;
        Paid => "paid", "Paid", Green;
        Overdue => "overdue", "Overdue", Red;
        Cancelled => "cancelled", "Cancelled", Gray;
    }
}

vocabulary! {
    /// Admin console role
    AdminRole {
        SuperAdmin => "super_admin", "Super Admin", Red;
        Admin => "admin", "Admin", Blue;
        Manager => "manager", "Manager", Green;
        Editor => "editor", "Editor", Yellow;
    }
}

vocabulary! {
    /// Amenity grouping
    AmenityCategory {
        Security => "security", "Security", Red;
        Recreation => "recreation", "Recreation", Green;
        Wellness => "wellness", "Wellness", Blue;
        Convenience => "convenience", "Convenience", Purple;
        Sports => "sports", "Sports", Orange;
        Other => "other", "Other", Gray;
    }
}
