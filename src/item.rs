use super::*;

/// A single content unit: story, comment, job, poll, or poll option.
///
/// The wire format is one flat JSON object whose populated fields depend on
/// [`ItemType`]: a comment carries `parent` but never `score`, `title`, or
/// `url`; a story carries those but never `parent` or `poll`. Absent fields
/// decode to `None`, distinct from zero or empty.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Item {
  /// Author username. Absent for deleted items.
  pub by: Option<String>,
  pub dead: Option<bool>,
  pub deleted: Option<bool>,
  /// Total recursive comment count. Stories and polls only.
  pub descendants: Option<u64>,
  pub id: u64,
  /// Child comment IDs in display rank order, not numeric order.
  pub kids: Option<Vec<u64>>,
  /// Parent item. Comments and poll options only.
  pub parent: Option<u64>,
  /// Related poll-option IDs. Polls only.
  pub parts: Option<Vec<u64>>,
  /// Owning poll. Poll options only.
  pub poll: Option<u64>,
  /// Story score, or vote count for a poll option.
  pub score: Option<i64>,
  /// HTML body text.
  pub text: Option<String>,
  /// Creation time, Unix seconds.
  pub time: Option<u64>,
  /// HTML title. Stories, polls, and jobs only.
  pub title: Option<String>,
  pub r#type: Option<ItemType>,
  /// Story link. Stories only.
  pub url: Option<String>,
}

/// Discriminator for [`Item`]. Decodes from the lowercase wire tokens;
/// poll options are spelled `pollopt` on the wire.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
  Comment,
  Job,
  Poll,
  PollOpt,
  Story,
}
