use serde::Deserialize;

/// One record from the remote directory. The endpoint may carry extra
/// fields; only these three matter here. `id` is the stable row identity.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub email: String,
}
