use std::collections::HashMap;
use std::sync::RwLock;

use fra_core::model::claim::Claim;
use shared_types::ClaimId;

pub mod repository;


#[derive(Default)]
pub(crate) struct ClaimProvider {
    pub claims: RwLock<HashMap<ClaimId, Claim>>,
}
