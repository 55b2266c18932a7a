//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{SignalInfo, SignalPlan};
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{Identifier, IdentifierKind, Resolution};

/// Primary Signal Registry API
pub trait SignalRegistryApi {
    /// Resolve a content-authored name to an identifier of `kind`.
    ///
    /// Built-in names win, then recorded custom names; anything else is
    /// minted. Repeated calls with the same name return the same identifier.
    fn resolve(&mut self, name: &str, kind: IdentifierKind) -> Resolution;

    /// Reverse lookup of a custom name or display label.
    fn name_of(&self, id: Identifier) -> Option<&str>;

    /// Resolve a signal record's names and locate its audio asset.
    ///
    /// Resolution side effects are kept even when the asset is missing.
    fn plan_signal(&mut self, info: &SignalInfo) -> Result<SignalPlan, RegistryError>;
}
