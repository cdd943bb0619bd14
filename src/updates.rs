use super::*;

/// Item IDs and usernames changed since the service last published the
/// feed. Both lists are sets semantically; the server imposes no order.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Updates {
  pub items: Vec<u64>,
  pub profiles: Vec<String>,
}
