use std::sync::Arc;

use crate::services::WilderService;

/// Per-schema data handed to every resolver
#[derive(Clone)]
pub struct GraphQLContext {
    pub wilder_service: Arc<WilderService>,
}

impl GraphQLContext {
    pub fn new(wilder_service: Arc<WilderService>) -> Self {
        Self { wilder_service }
    }
}
