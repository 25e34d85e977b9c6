use serde::{Deserialize, Serialize};

/// Plain acknowledgement such as `{"message": "Team deleted successfully"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
