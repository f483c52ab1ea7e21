use lumo_core::protocol::{ActionResult, Payload};

/// Identifier handed out for every new product draft.
pub const DRAFT_DESIGN_ID: &str = "draft_001";

/// `product_design`: registers nothing, returns the fixed draft id.
pub fn create_draft(_payload: &Payload) -> ActionResult {
    ActionResult::Design {
        design_id: DRAFT_DESIGN_ID.to_string(),
    }
}
