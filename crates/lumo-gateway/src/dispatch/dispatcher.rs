use lumo_core::protocol::{ActionResult, Payload};

use super::action::Action;
use crate::services::{design, inventory, shipping};

/// Maps an action to its handler. Only reached by gate-approved requests.
///
/// The set of actions is closed; anything else resolves to
/// `ActionResult::UnknownAction`, which is a normal response, not an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dispatcher;

impl Dispatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn dispatch(&self, action: &Action, payload: &Payload) -> ActionResult {
        match action {
            Action::InventorySearch => inventory::search(payload),
            Action::ProductDesign => design::create_draft(payload),
            Action::ShipperLookup => shipping::lookup(payload),
            Action::Unknown(name) => {
                tracing::debug!(action = %name, "no handler for action");
                ActionResult::UnknownAction
            }
        }
    }
}
