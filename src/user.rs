use super::*;

/// A Hacker News account, keyed by its case-sensitive username.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct User {
  /// HTML self-description.
  pub about: Option<String>,
  /// Account creation time, Unix seconds.
  pub created: u64,
  /// Minutes before the user's posts become visible to others.
  pub delay: Option<u64>,
  /// Username. Case-sensitive primary key.
  pub id: String,
  /// May be negative.
  pub karma: i64,
  /// IDs of the user's stories, polls, and comments.
  pub submitted: Option<Vec<u64>>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn user_decodes_every_present_field() {
    let user = serde_json::from_str::<User>(
      r#"{
        "about": "This is a test",
        "created": 1173923446,
        "delay": 0,
        "id": "jl",
        "karma": 2937,
        "submitted": [8265435, 8168423, 8090946]
      }"#,
    )
    .unwrap();

    assert_eq!(user.about.as_deref(), Some("This is a test"));
    assert_eq!(user.created, 1_173_923_446);
    assert_eq!(user.delay, Some(0));
    assert_eq!(user.id, "jl");
    assert_eq!(user.karma, 2937);
    assert_eq!(user.submitted, Some(vec![8_265_435, 8_168_423, 8_090_946]));
  }

  #[test]
  fn absent_optional_fields_decode_to_none() {
    let user = serde_json::from_str::<User>(
      r#"{"created": 1173923446, "id": "jl", "karma": 2937}"#,
    )
    .unwrap();

    assert_eq!(user.about, None);
    assert_eq!(user.delay, None);
    assert_eq!(user.submitted, None);
  }

  #[test]
  fn karma_may_be_negative() {
    let user = serde_json::from_str::<User>(
      r#"{"created": 1, "id": "troll", "karma": -44}"#,
    )
    .unwrap();

    assert_eq!(user.karma, -44);
  }

  #[test]
  fn null_body_decodes_to_none() {
    assert_eq!(serde_json::from_str::<Option<User>>("null").unwrap(), None);
  }
}
