use lumo_core::protocol::{ActionResult, Payload};

/// `shipper_lookup`: no carrier directory, always an empty shipper list.
pub fn lookup(_payload: &Payload) -> ActionResult {
    ActionResult::Shippers(Vec::new())
}
