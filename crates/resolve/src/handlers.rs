use garden_store::{Populate, ResourceKind, StoreRegistry, COMPANIONSHIPS_RELATION};

use crate::checker::check_exists;
use crate::context::RequestContext;
use crate::error::Result;
use crate::resolver::resolve;
use crate::validate::validate_ids;

/// Build a fresh resolver handler for one route: validates the request's id
/// batch, resolves it against `kind`, and stores the ordered records under
/// `result_name`. Pure constructor; the handler is stateless and safe to
/// share across concurrent requests.
#[must_use]
pub fn make_resolver(
    kind: ResourceKind,
    result_name: &'static str,
    populate: Populate,
) -> ResolveHandler {
    ResolveHandler {
        kind,
        result_name,
        populate,
    }
}

/// Build a fresh existence-check handler for one route: validates the id
/// batch and confirms every id exists, storing nothing.
#[must_use]
pub fn make_checker(kind: ResourceKind) -> CheckHandler {
    CheckHandler { kind }
}

/// Resolver for crop batches, records under `"crops"`.
#[must_use]
pub fn crop_resolver() -> ResolveHandler {
    make_resolver(ResourceKind::Crop, "crops", Populate::none())
}

/// Like [`crop_resolver`], with each crop's companionship edges populated
/// as full records rather than ids.
#[must_use]
pub fn crop_resolver_with_companionships() -> ResolveHandler {
    make_resolver(
        ResourceKind::Crop,
        "crops",
        Populate::with([COMPANIONSHIPS_RELATION]),
    )
}

#[must_use]
pub fn crop_checker() -> CheckHandler {
    make_checker(ResourceKind::Crop)
}

/// Resolver for bed batches, records under `"beds"`.
#[must_use]
pub fn bed_resolver() -> ResolveHandler {
    make_resolver(ResourceKind::Bed, "beds", Populate::none())
}

#[derive(Clone, Debug)]
pub struct ResolveHandler {
    kind: ResourceKind,
    result_name: &'static str,
    populate: Populate,
}

impl ResolveHandler {
    /// Run against one request. An absent id batch is a no-op success; a
    /// present batch must validate and fully resolve before control passes
    /// onward.
    pub async fn run(&self, registry: &StoreRegistry, ctx: &mut RequestContext) -> Result<()> {
        let Some(ids) = validate_ids(ctx.ids())? else {
            return Ok(());
        };
        let records = resolve(registry, self.kind, &ids, &self.populate).await?;
        ctx.insert_records(self.result_name, records);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CheckHandler {
    kind: ResourceKind,
}

impl CheckHandler {
    /// Run against one request. Absent batch is a no-op; otherwise every id
    /// must validate and exist.
    pub async fn run(&self, registry: &StoreRegistry, ctx: &RequestContext) -> Result<()> {
        let Some(ids) = validate_ids(ctx.ids())? else {
            return Ok(());
        };
        check_exists(registry, self.kind, &ids).await
    }
}
