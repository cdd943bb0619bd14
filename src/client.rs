use super::*;

const MAX_CONCURRENT_REQUESTS: usize = 16;

/// Stateless handle to the Hacker News API.
///
/// Every operation performs exactly one GET against the configured base
/// origin and decodes the JSON body. `Default` targets the live service;
/// `new` accepts any origin and any preconfigured `reqwest::Client`, which
/// is how the test suite points the client at a local mock server.
#[derive(Clone, Debug)]
pub struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(Self::BASE_URL, reqwest::Client::new())
  }
}

impl Client {
  pub const BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let url = format!("{}/{path}", self.base_url);

    debug!("GET {url}");

    let response = self.client.get(&url).send().await.map_err(|source| {
      Error::Transport {
        source,
        url: url.clone(),
      }
    })?;

    let status = response.status();

    if !status.is_success() {
      return Err(Error::Status { status, url });
    }

    let body = response.bytes().await.map_err(|source| Error::Transport {
      source,
      url: url.clone(),
    })?;

    serde_json::from_slice(&body).map_err(|source| Error::Decode {
      source,
      url,
    })
  }

  /// Fetch one item by ID. Returns `Ok(None)` if the server has no item
  /// with that ID, which it signals with a `null` body.
  pub async fn item(&self, id: u64) -> Result<Option<Item>> {
    self.get_json(&format!("item/{id}.json")).await
  }

  /// Fetch the largest item ID currently assigned.
  pub async fn max_item(&self) -> Result<u64> {
    self.get_json("maxitem.json").await
  }

  #[must_use]
  pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      client,
    }
  }

  /// Fetch a window of a category's ranked items.
  ///
  /// Resolves the category's ID list, slices it by `offset` and `amount`,
  /// then fetches the remaining items concurrently, preserving rank order
  /// in the result. A zero `amount` means no limit. When a limit is given
  /// the window's upper bound is capped one short of the list length, so
  /// the final ranked ID is never included; an `offset` at or past the end
  /// yields an empty result rather than an error.
  ///
  /// Fails as a whole if any single item fetch fails; no partial result is
  /// returned. IDs the server resolves to `null` are omitted.
  pub async fn stories(
    &self,
    category: Category,
    offset: usize,
    amount: usize,
  ) -> Result<Vec<Item>> {
    let ids = self.story_ids(category).await?;

    let page = paginate(&ids, offset, amount);

    debug!(
      "fetching {} of {} ranked ids for `{category}`",
      page.len(),
      ids.len()
    );

    let responses = stream::iter(page.iter().map(|id| self.item(*id)))
      .buffered(MAX_CONCURRENT_REQUESTS)
      .collect::<Vec<_>>()
      .await;

    let mut items = Vec::with_capacity(responses.len());

    for response in responses {
      if let Some(item) = response? {
        items.push(item);
      }
    }

    Ok(items)
  }

  /// Fetch the full ranked ID list for a category. The server bounds the
  /// length: up to 500 for top/new/best, up to 200 for ask/show/job.
  pub async fn story_ids(&self, category: Category) -> Result<Vec<u64>> {
    self.get_json(&category.endpoint()).await
  }

  /// Fetch the IDs of items and usernames of profiles changed recently.
  pub async fn updates(&self) -> Result<Updates> {
    self.get_json("updates.json").await
  }

  /// Fetch one user by username. Returns `Ok(None)` for an unknown user.
  /// Usernames are case-sensitive.
  pub async fn user(&self, username: &str) -> Result<Option<User>> {
    self.get_json(&format!("user/{username}.json")).await
  }
}

/// Slice the ranked ID list by `offset` and `amount`.
///
/// A zero `amount` keeps the whole list. Otherwise the window is
/// `[min(offset, len - 1), min(offset + amount, len - 1))`: the upper
/// bound is capped one short of the length, so the last ID is unreachable
/// for every offset/amount combination, and an offset at or past the end
/// yields an empty slice.
fn paginate(ids: &[u64], offset: usize, amount: usize) -> &[u64] {
  if amount == 0 {
    return ids;
  }

  let last = ids.len().saturating_sub(1);

  let start = offset.min(last);

  let end = offset.saturating_add(amount).min(last);

  &ids[start..end]
}

#[cfg(test)]
mod tests {
  use super::*;

  const IDS: [u64; 5] = [10, 20, 30, 40, 50];

  #[test]
  fn zero_amount_keeps_the_whole_list() {
    assert_eq!(paginate(&IDS, 0, 0), IDS);
    assert_eq!(paginate(&IDS, 3, 0), IDS);
  }

  #[test]
  fn window_is_offset_to_offset_plus_amount() {
    assert_eq!(paginate(&IDS, 1, 2), [20, 30]);
    assert_eq!(paginate(&IDS, 0, 3), [10, 20, 30]);
  }

  #[test]
  fn offset_at_or_past_the_end_yields_empty() {
    assert_eq!(paginate(&IDS, 5, 2), [0u64; 0]);
    assert_eq!(paginate(&IDS, 100, 1), [0u64; 0]);
  }

  #[test]
  fn last_id_is_unreachable_with_a_limit() {
    for offset in 0..=IDS.len() + 1 {
      for amount in 1..=IDS.len() + 1 {
        assert!(
          !paginate(&IDS, offset, amount).contains(&50),
          "offset {offset} amount {amount} reached the last id"
        );
      }
    }

    assert_eq!(paginate(&IDS, 0, 100), [10, 20, 30, 40]);
  }

  #[test]
  fn empty_and_single_element_lists_never_panic() {
    assert_eq!(paginate(&[], 0, 3), [0u64; 0]);
    assert_eq!(paginate(&[], 2, 0), [0u64; 0]);
    assert_eq!(paginate(&[7], 0, 1), [0u64; 0]);
    assert_eq!(paginate(&[7], 0, 0), [7]);
  }

  #[test]
  fn base_url_trailing_slash_is_stripped() {
    let client = Client::new("http://localhost:8080/", reqwest::Client::new());

    assert_eq!(client.base_url, "http://localhost:8080");
  }
}
