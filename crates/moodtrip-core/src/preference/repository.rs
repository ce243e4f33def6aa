//! Preference repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::place::{Place, PlaceCatalog, PlaceId};
use crate::preference::model::PreferenceKind;

/// Durable membership sets of place ids, keyed by [`PreferenceKind`].
///
/// Implementations must be internally synchronized: concurrent `add` and
/// `remove` calls must not lose updates. Storage failures are reported as
/// errors rather than being treated as an empty set.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Returns every marked id in insertion order.
    async fn list_ids(&self, kind: PreferenceKind) -> Result<Vec<PlaceId>>;

    async fn contains(&self, kind: PreferenceKind, id: PlaceId) -> Result<bool>;

    /// Marks an id. Adding an id that is already present is a no-op.
    async fn add(&self, kind: PreferenceKind, id: PlaceId) -> Result<()>;

    /// Unmarks an id. Removing an absent id is a no-op.
    async fn remove(&self, kind: PreferenceKind, id: PlaceId) -> Result<()>;

    /// Joins the marked ids against a catalog.
    ///
    /// Ids that no longer resolve to a catalog entry are dropped.
    async fn list_marked_places(
        &self,
        kind: PreferenceKind,
        catalog: &PlaceCatalog,
    ) -> Result<Vec<Place>> {
        let ids = self.list_ids(kind).await?;
        Ok(catalog.resolve(ids).into_iter().cloned().collect())
    }
}
