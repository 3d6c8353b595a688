use serde::{Deserialize, Serialize};

/// A sales department. `id` stays `None` until the row is persisted and the
/// database assigns the generated key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: Option<i32>,
    pub name: String,
}
