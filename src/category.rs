use super::*;

/// One of the six ranked story lists the API serves.
///
/// Each category maps to the endpoint `{token}stories.json`, where the
/// token is the lowercase name rendered by `Display`. The set is closed:
/// the server offers no discovery, and `FromStr` rejects anything else.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
  Ask,
  Best,
  Job,
  New,
  Show,
  Top,
}

impl Category {
  /// All six categories, in display rank order.
  #[must_use]
  pub fn all() -> &'static [Category] {
    &[
      Category::Top,
      Category::New,
      Category::Best,
      Category::Ask,
      Category::Show,
      Category::Job,
    ]
  }

  pub(crate) fn endpoint(self) -> String {
    format!("{self}stories.json")
  }
}

impl Display for Category {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(match self {
      Category::Ask => "ask",
      Category::Best => "best",
      Category::Job => "job",
      Category::New => "new",
      Category::Show => "show",
      Category::Top => "top",
    })
  }
}

impl FromStr for Category {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "ask" => Ok(Category::Ask),
      "best" => Ok(Category::Best),
      "job" => Ok(Category::Job),
      "new" => Ok(Category::New),
      "show" => Ok(Category::Show),
      "top" => Ok(Category::Top),
      _ => Err(Error::UnknownCategory {
        token: s.to_string(),
      }),
    }
  }
}
