//! End-to-end tests for the batch resolution pipeline against the in-memory
//! store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use garden_resolve::{
    bed_resolver, check_exists, crop_checker, crop_resolver, crop_resolver_with_companionships,
    make_checker, make_resolver, resolve, Fault, RequestContext, ResolveError,
};
use garden_store::{
    Bed, Companionship, Crop, DocId, Document, Filter, KindStore, Link, MemoryStore, Populate,
    ResourceKind, StoreRegistry,
};

const TOMATO: &str = "00000000000000000000000a";
const BASIL: &str = "00000000000000000000000b";
const CARROT: &str = "00000000000000000000000c";
const MISSING_ONE: &str = "00000000000000000000fff1";
const MISSING_TWO: &str = "00000000000000000000fff2";
const EDGE_TOMATO_BASIL: &str = "000000000000000000000e01";

fn id(hex: &str) -> DocId {
    DocId::parse(hex).expect("valid id")
}

fn crop(hex: &str, binomial: &str, edges: &[&str]) -> Document {
    Document::Crop(Crop {
        id: id(hex),
        common_name: None,
        binomial_name: binomial.to_string(),
        companionships: edges.iter().map(|e| Link::Id(id(e))).collect(),
    })
}

async fn seeded_registry() -> StoreRegistry {
    let registry = MemoryStore::new().registry();
    registry
        .save(Document::Companionship(Companionship {
            id: id(EDGE_TOMATO_BASIL),
            crop_a: id(TOMATO),
            crop_b: id(BASIL),
            compatibility: 3.0,
        }))
        .await
        .expect("save edge");
    registry
        .save(crop(TOMATO, "Solanum lycopersicum", &[EDGE_TOMATO_BASIL]))
        .await
        .expect("save tomato");
    registry
        .save(crop(BASIL, "Ocimum basilicum", &[EDGE_TOMATO_BASIL]))
        .await
        .expect("save basil");
    registry
        .save(crop(CARROT, "Daucus carota", &[]))
        .await
        .expect("save carrot");
    registry
}

#[tokio::test]
async fn test_resolve_returns_records_in_requested_order() -> anyhow::Result<()> {
    let registry = seeded_registry().await;
    let ids = vec![id(CARROT), id(TOMATO), id(BASIL)];

    let records = resolve(&registry, ResourceKind::Crop, &ids, &Populate::none()).await?;

    assert_eq!(records.len(), 3);
    let returned: Vec<&DocId> = records.iter().map(Document::id).collect();
    assert_eq!(returned, vec![&id(CARROT), &id(TOMATO), &id(BASIL)]);
    Ok(())
}

#[tokio::test]
async fn test_resolve_collects_every_missing_id_in_requested_order() {
    let registry = seeded_registry().await;
    let ids = vec![id(MISSING_ONE), id(TOMATO), id(MISSING_TWO)];

    let err = resolve(&registry, ResourceKind::Crop, &ids, &Populate::none())
        .await
        .expect_err("two ids missing");

    match err {
        ResolveError::NotFound { kind, missing } => {
            assert_eq!(kind, ResourceKind::Crop);
            assert_eq!(missing, vec![id(MISSING_ONE), id(MISSING_TWO)]);
        }
        other => panic!("expected NotFound, got {other}"),
    }
}

#[tokio::test]
async fn test_resolve_empty_batch_succeeds_immediately() -> anyhow::Result<()> {
    // No stores registered at all: an empty batch must not touch the store.
    let registry = StoreRegistry::new();
    let records = resolve(&registry, ResourceKind::Crop, &[], &Populate::none()).await?;
    assert!(records.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_check_exists_passes_and_fails() {
    let registry = seeded_registry().await;

    check_exists(&registry, ResourceKind::Crop, &[id(TOMATO), id(BASIL)])
        .await
        .expect("both exist");

    check_exists(&registry, ResourceKind::Crop, &[])
        .await
        .expect("empty batch");

    let err = check_exists(&registry, ResourceKind::Crop, &[id(MISSING_ONE)])
        .await
        .expect_err("missing");
    match err {
        ResolveError::NotFound { kind, missing } => {
            assert_eq!(kind, ResourceKind::Crop);
            assert_eq!(missing, vec![id(MISSING_ONE)]);
        }
        other => panic!("expected NotFound, got {other}"),
    }
}

#[tokio::test]
async fn test_resolver_handler_stores_records_under_result_name() -> anyhow::Result<()> {
    let registry = seeded_registry().await;
    let handler = crop_resolver();

    let mut ctx = RequestContext::with_ids([TOMATO, BASIL]);
    handler.run(&registry, &mut ctx).await?;

    let crops = ctx.records("crops").expect("slot filled");
    assert_eq!(crops.len(), 2);
    assert_eq!(crops[0].id(), &id(TOMATO));
    Ok(())
}

#[tokio::test]
async fn test_resolver_handler_populates_companionships() -> anyhow::Result<()> {
    let registry = seeded_registry().await;
    let handler = crop_resolver_with_companionships();

    let mut ctx = RequestContext::with_ids([TOMATO]);
    handler.run(&registry, &mut ctx).await?;

    let crops = ctx.take_records("crops").expect("slot filled");
    let crop = crops[0].as_crop().expect("crop");
    let edge = crop.companionships[0].as_full().expect("populated edge");
    assert_eq!(edge.compatibility, 3.0);
    Ok(())
}

#[tokio::test]
async fn test_bed_resolver_fills_the_beds_slot() -> anyhow::Result<()> {
    let registry = seeded_registry().await;
    let bed_id = "000000000000000000000bed";
    registry
        .save(Document::Bed(Bed {
            id: id(bed_id),
            name: "South bed".to_string(),
            crops: vec![id(TOMATO), id(BASIL)],
        }))
        .await?;

    let mut ctx = RequestContext::with_ids([bed_id]);
    bed_resolver().run(&registry, &mut ctx).await?;

    let beds = ctx.records("beds").expect("slot filled");
    let bed = beds[0].as_bed().expect("bed");
    assert_eq!(bed.crops, vec![id(TOMATO), id(BASIL)]);
    Ok(())
}

#[tokio::test]
async fn test_constructed_handlers_work_for_any_kind() -> anyhow::Result<()> {
    let registry = seeded_registry().await;

    let resolver = make_resolver(ResourceKind::Companionship, "companionships", Populate::none());
    let mut ctx = RequestContext::with_ids([EDGE_TOMATO_BASIL]);
    resolver.run(&registry, &mut ctx).await?;
    let edges = ctx.records("companionships").expect("slot filled");
    assert_eq!(edges[0].id(), &id(EDGE_TOMATO_BASIL));

    let checker = make_checker(ResourceKind::Companionship);
    checker.run(&registry, &ctx).await?;
    Ok(())
}

#[tokio::test]
async fn test_absent_batch_is_a_no_op() -> anyhow::Result<()> {
    // No ids attached and no stores registered: handlers must not resolve.
    let registry = StoreRegistry::new();
    let mut ctx = RequestContext::new();

    crop_resolver().run(&registry, &mut ctx).await?;
    crop_checker().run(&registry, &ctx).await?;

    assert!(ctx.records("crops").is_none());
    Ok(())
}

/// Store double that counts lookups, to prove validation failures stop the
/// pipeline before any store access.
struct CountingStore {
    calls: AtomicUsize,
}

#[async_trait]
impl KindStore for CountingStore {
    async fn find_by_id(
        &self,
        _id: &DocId,
        _populate: &Populate,
    ) -> garden_store::Result<Option<Document>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }

    async fn count(&self, _filter: &Filter) -> garden_store::Result<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }

    async fn save(&self, doc: Document) -> garden_store::Result<Document> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(doc)
    }
}

#[tokio::test]
async fn test_malformed_batch_never_reaches_the_store() {
    let counting = Arc::new(CountingStore {
        calls: AtomicUsize::new(0),
    });
    let mut registry = StoreRegistry::new();
    registry.register(ResourceKind::Crop, counting.clone());

    let mut ctx = RequestContext::with_ids([TOMATO, "not-a-doc-id"]);
    let err = crop_resolver()
        .run(&registry, &mut ctx)
        .await
        .expect_err("malformed batch");

    assert!(matches!(err, ResolveError::MalformedId));
    assert_eq!(counting.calls.load(Ordering::SeqCst), 0);

    let err = crop_checker()
        .run(&registry, &ctx)
        .await
        .expect_err("malformed batch");
    assert!(matches!(err, ResolveError::MalformedId));
    assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_pipeline_errors_convert_to_transport_faults() {
    let registry = seeded_registry().await;

    let err = resolve(
        &registry,
        ResourceKind::Crop,
        &[id(MISSING_ONE)],
        &Populate::none(),
    )
    .await
    .expect_err("missing");
    let fault = Fault::from(err);
    assert_eq!(fault.status, 404);
    assert!(fault.message.contains(MISSING_ONE));

    // A kind nobody registered surfaces as an internal failure, not a 404.
    let err = resolve(
        &StoreRegistry::new(),
        ResourceKind::Bed,
        &[id(MISSING_ONE)],
        &Populate::none(),
    )
    .await
    .expect_err("unknown kind");
    assert_eq!(Fault::from(err).status, 500);
}
