//! Status-to-badge-color mapping shared by checklist and order displays.

/// Badge class for a status string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeColor {
    /// Satisfied / done states.
    Green,
    /// Pending-action / partial states.
    Yellow,
    /// Neutral not-started states.
    Blue,
    /// Rejected / failed states.
    Red,
    /// Fallback for unrecognized strings.
    Gray,
}

impl BadgeColor {
    /// CSS class fragment used by the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

/// Maps a recognized status literal to its badge class.
///
/// The vocabularies are closed and fixed; anything unrecognized falls back to
/// gray rather than guessing.
pub fn badge_color(status: &str) -> BadgeColor {
    match status {
        "Success" | "Ready" | "Delivered" | "Approved" | "Earned" | "Fully Billed"
        | "Competent" | "Staff is Competent" | "DGCA Notified" | "No Change" => BadgeColor::Green,
        "In Progress" | "Partial" | "Partially Billed" | "Report to DGCA" | "Needs Training" => {
            BadgeColor::Yellow
        }
        "Pending" | "Not Ready" | "In Design" => BadgeColor::Blue,
        "Rejected" | "N/A" | "Poor" => BadgeColor::Red,
        _ => BadgeColor::Gray,
    }
}

/// Closed value vocabulary per sales-order status field, supplied as
/// configuration rather than extensible at runtime.
pub static ORDER_STATUS_FIELDS: &[(&str, &[&str])] = &[
    (
        "client_segment",
        &["Government", "Enterprise", "Agriculture", "Defence"],
    ),
    (
        "payment_status",
        &["Pending", "Partially Billed", "Fully Billed"],
    ),
    (
        "type_certification_status",
        &["In Design", "In Progress", "Approved", "Rejected"],
    ),
    (
        "uin_allocation_status",
        &["Pending", "In Progress", "Earned", "Rejected"],
    ),
    (
        "rpto_training_status",
        &["Pending", "In Progress", "Approved", "N/A"],
    ),
    ("insurance_status", &["Pending", "Approved", "Rejected"]),
    ("delivery_status", &["Not Ready", "Ready", "Delivered"]),
];

/// Allowed values for one order status field, if the field is one of the
/// badge-colored columns.
pub fn order_field_values(field: &str) -> Option<&'static [&'static str]> {
    ORDER_STATUS_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, values)| *values)
}

#[cfg(test)]
mod tests {
    use super::{badge_color, order_field_values, BadgeColor};

    /// Expect each checklist status literal to map to its fixed class
    #[test]
    fn test_checklist_status_literals() {
        assert_eq!(badge_color("No Change"), BadgeColor::Green);
        assert_eq!(badge_color("DGCA Notified"), BadgeColor::Green);
        assert_eq!(badge_color("Report to DGCA"), BadgeColor::Yellow);
        assert_eq!(badge_color("Staff is Competent"), BadgeColor::Green);
        assert_eq!(badge_color("Needs Training"), BadgeColor::Yellow);
    }

    /// Expect order status literals to map across all four classes
    #[test]
    fn test_order_status_literals() {
        assert_eq!(badge_color("Fully Billed"), BadgeColor::Green);
        assert_eq!(badge_color("Partially Billed"), BadgeColor::Yellow);
        assert_eq!(badge_color("Pending"), BadgeColor::Blue);
        assert_eq!(badge_color("In Design"), BadgeColor::Blue);
        assert_eq!(badge_color("Rejected"), BadgeColor::Red);
        assert_eq!(badge_color("N/A"), BadgeColor::Red);
    }

    /// Expect unrecognized strings to fall back to gray
    #[test]
    fn test_unmapped_status_falls_back_to_gray() {
        assert_eq!(badge_color("Retrofitted"), BadgeColor::Gray);
        assert_eq!(badge_color(""), BadgeColor::Gray);
    }

    /// Expect every configured vocabulary value except segments to have a
    /// non-gray badge
    #[test]
    fn test_vocabulary_values_are_mapped() {
        for (field, values) in super::ORDER_STATUS_FIELDS {
            if *field == "client_segment" {
                continue;
            }
            for value in *values {
                assert_ne!(
                    badge_color(value),
                    BadgeColor::Gray,
                    "unmapped vocabulary value {value:?} for {field}"
                );
            }
        }
    }

    /// Expect lookup to know the configured fields and nothing else
    #[test]
    fn test_order_field_lookup() {
        assert!(order_field_values("payment_status").is_some());
        assert!(order_field_values("deployment_location").is_none());
    }
}
