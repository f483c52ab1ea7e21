use lumo_core::protocol::{ActionResult, Payload};

/// `inventory_search`: no inventory backend, always an empty item list.
pub fn search(_payload: &Payload) -> ActionResult {
    ActionResult::Items(Vec::new())
}
