//! Typed async bindings for the public Hacker News API.
//!
//! [`Client`] exposes one operation per endpoint of the Firebase-backed API:
//! items, users, the maximum item ID, the ranked story-ID lists for each
//! [`Category`], and the changed-items/changed-profiles feed. On top of the
//! raw endpoints, [`Client::stories`] slices a category's ID list by offset
//! and amount and fetches the resulting items concurrently.
//!
//! The client is stateless: no caching, no retries, no persistent
//! connections beyond what `reqwest` pools internally. Entities absent on
//! the server decode to `None`; transport, status, and decode failures each
//! surface as their own [`Error`] variant.

use {
  futures::stream::{self, StreamExt},
  serde::{Deserialize, de::DeserializeOwned},
  std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
  },
  tracing::debug,
};

pub use crate::{
  category::Category,
  client::Client,
  error::{Error, Result},
  item::{Item, ItemType},
  updates::Updates,
  user::User,
};

mod category;
mod client;
mod error;
mod item;
mod updates;
mod user;
