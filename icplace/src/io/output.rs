use serde::{Deserialize, Serialize};

use crate::config::PlacementConfig;
use crate::request::{PlacementRequest, PlacementResponse};

/// Everything written to the solution file: the request, its response and the config used
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlacementOutput {
    pub request: PlacementRequest,
    pub response: PlacementResponse,
    pub config: PlacementConfig,
}
