use std::fmt;

/// Known actions, plus a fallback carrying the unrecognized name.
///
/// Names match exactly and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    InventorySearch,
    ProductDesign,
    ShipperLookup,
    Unknown(String),
}

impl Action {
    pub fn parse(name: &str) -> Self {
        match name {
            "inventory_search" => Action::InventorySearch,
            "product_design" => Action::ProductDesign,
            "shipper_lookup" => Action::ShipperLookup,
            other => Action::Unknown(other.to_string()),
        }
    }

    /// Wire name for known actions; `"unknown"` for the fallback.
    ///
    /// Used as a metrics label, so caller-chosen names never reach it.
    pub fn label(&self) -> &'static str {
        match self {
            Action::InventorySearch => "inventory_search",
            Action::ProductDesign => "product_design",
            Action::ShipperLookup => "shipper_lookup",
            Action::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Unknown(name) => f.write_str(name),
            known => f.write_str(known.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!(Action::parse("inventory_search"), Action::InventorySearch);
        assert_eq!(Action::parse("product_design"), Action::ProductDesign);
        assert_eq!(Action::parse("shipper_lookup"), Action::ShipperLookup);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            Action::parse("Inventory_Search"),
            Action::Unknown("Inventory_Search".into())
        );
        assert_eq!(Action::parse(" shipper_lookup"), Action::Unknown(" shipper_lookup".into()));
    }

    #[test]
    fn unknown_keeps_name_for_display_only() {
        let a = Action::parse("launch_rocket");
        assert_eq!(a.to_string(), "launch_rocket");
        assert_eq!(a.label(), "unknown");
    }
}
