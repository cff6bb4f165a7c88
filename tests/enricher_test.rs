use async_trait::async_trait;
use customer_orders_count::config::GridConfig;
use customer_orders_count::enricher::{OrderCountEnricher, ORDERS_COUNT_FLAG};
use customer_orders_count::model::{CustomerCollection, CustomerId, CustomerRecord, OrderStatus};
use customer_orders_count::store::{CountSelect, OrderCountResult, OrderStore, StoreQueryError};
use std::sync::{Arc, Mutex};

/// Order store double: answers every query with a canned reply and keeps the
/// queries it saw.
struct RecordingStore {
    prefix: &'static str,
    reply: Result<OrderCountResult, StoreQueryError>,
    queries: Mutex<Vec<CountSelect>>,
}

impl RecordingStore {
    fn answering(pairs: &[(u32, u64)]) -> Arc<Self> {
        let counts = pairs.iter().map(|&(id, n)| (CustomerId(id), n)).collect();
        Arc::new(Self {
            prefix: "",
            reply: Ok(counts),
            queries: Mutex::new(Vec::new()),
        })
    }

    fn failing(error: StoreQueryError) -> Arc<Self> {
        Arc::new(Self {
            prefix: "",
            reply: Err(error),
            queries: Mutex::new(Vec::new()),
        })
    }

    fn queries(&self) -> Vec<CountSelect> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderStore for RecordingStore {
    fn table_name(&self, logical: &str) -> String {
        format!("{}{logical}", self.prefix)
    }

    async fn fetch_pairs(&self, select: &CountSelect) -> Result<OrderCountResult, StoreQueryError> {
        self.queries.lock().unwrap().push(select.clone());
        self.reply.clone()
    }
}

fn collection(ids: &[u32]) -> CustomerCollection {
    ids.iter()
        .map(|&id| CustomerRecord::new(CustomerId(id), format!("customer {id}"), format!("c{id}@example.com")))
        .collect()
}

fn counts(collection: &CustomerCollection) -> Vec<u64> {
    collection.iter().map(|record| record.orders_count).collect()
}

#[tokio::test]
async fn test_counts_are_merged_with_zero_for_missing_ids() {
    let store = RecordingStore::answering(&[(1, 5), (3, 2)]);
    let enricher = OrderCountEnricher::new(store.clone(), &GridConfig::default());
    let mut page = collection(&[1, 2, 3]);

    enricher.enrich(&mut page).await.unwrap();

    assert_eq!(counts(&page), vec![5, 0, 2]);
    assert!(page.flag(ORDERS_COUNT_FLAG));

    let queries = store.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].table(), "sales_order");
    assert_eq!(queries[0].key_column(), "customer_id");
    assert_eq!(queries[0].ids(), &[CustomerId(1), CustomerId(2), CustomerId(3)]);
    assert!(queries[0].statuses().is_empty());
}

#[tokio::test]
async fn test_second_enrich_on_same_collection_does_not_query() {
    let store = RecordingStore::answering(&[(4, 1)]);
    let enricher = OrderCountEnricher::new(store.clone(), &GridConfig::default());
    let mut page = collection(&[4, 5]);

    enricher.enrich(&mut page).await.unwrap();
    enricher.enrich(&mut page).await.unwrap();

    assert_eq!(store.queries().len(), 1);
    assert_eq!(counts(&page), vec![1, 0]);
}

#[tokio::test]
async fn test_empty_collection_issues_no_query() {
    let store = RecordingStore::answering(&[(1, 1)]);
    let enricher = OrderCountEnricher::new(store.clone(), &GridConfig::default());
    let mut page = CustomerCollection::default();

    let returned = enricher.enrich(&mut page).await.unwrap();

    assert!(returned.is_empty());
    assert!(store.queries().is_empty());
}

#[tokio::test]
async fn test_customers_without_orders_all_get_zero() {
    let store = RecordingStore::answering(&[]);
    let enricher = OrderCountEnricher::new(store.clone(), &GridConfig::default());
    let mut page = collection(&[10, 11, 12, 13]);
    for record in page.iter_mut() {
        record.orders_count = 99;
    }

    enricher.enrich(&mut page).await.unwrap();

    assert_eq!(counts(&page), vec![0, 0, 0, 0]);
    assert_eq!(store.queries().len(), 1);
}

#[tokio::test]
async fn test_flagged_collection_is_left_alone() {
    let store = RecordingStore::answering(&[(1, 8)]);
    let enricher = OrderCountEnricher::new(store.clone(), &GridConfig::default());
    let mut page = collection(&[1]);
    page.iter_mut().for_each(|record| record.orders_count = 3);
    page.set_flag(ORDERS_COUNT_FLAG, true);

    enricher.enrich(&mut page).await.unwrap();

    assert_eq!(counts(&page), vec![3]);
    assert!(store.queries().is_empty());
}

#[tokio::test]
async fn test_failed_query_keeps_flag_and_blocks_retry() {
    let store = RecordingStore::failing(StoreQueryError::Unavailable("connection refused".into()));
    let enricher = OrderCountEnricher::new(store.clone(), &GridConfig::default());
    let mut page = collection(&[1, 2]);

    let err = enricher.enrich(&mut page).await.unwrap_err();
    assert_eq!(err, StoreQueryError::Unavailable("connection refused".into()));
    assert!(page.flag(ORDERS_COUNT_FLAG));

    // The retry on the same instance is skipped entirely.
    enricher.enrich(&mut page).await.unwrap();
    assert_eq!(store.queries().len(), 1);
    assert_eq!(counts(&page), vec![0, 0]);
}

#[tokio::test]
async fn test_duplicate_ids_are_queried_once_and_all_rows_filled() {
    let store = RecordingStore::answering(&[(7, 4)]);
    let enricher = OrderCountEnricher::new(store.clone(), &GridConfig::default());
    let mut page = collection(&[7, 2, 7]);

    enricher.enrich(&mut page).await.unwrap();

    assert_eq!(counts(&page), vec![4, 0, 4]);
    assert_eq!(store.queries()[0].ids(), &[CustomerId(2), CustomerId(7)]);
}

#[tokio::test]
async fn test_configured_table_and_statuses_reach_the_query() {
    let store = Arc::new(RecordingStore {
        prefix: "shop_",
        reply: Ok(OrderCountResult::new()),
        queries: Mutex::new(Vec::new()),
    });
    let config = GridConfig {
        orders_table: "legacy_order".into(),
        counted_statuses: vec![OrderStatus::Complete],
        ..GridConfig::default()
    };
    let enricher = OrderCountEnricher::new(store.clone(), &config);

    enricher.enrich(&mut collection(&[1])).await.unwrap();

    let query = &store.queries()[0];
    assert_eq!(query.table(), "shop_legacy_order");
    assert_eq!(query.statuses(), &[OrderStatus::Complete]);
    assert_eq!(
        query.to_sql(),
        "SELECT customer_id, COUNT(*) AS orders_count FROM shop_legacy_order \
         WHERE customer_id IN (?) AND status IN (?) GROUP BY customer_id"
    );
}

#[tokio::test]
async fn test_every_row_matches_store_counts() {
    for size in 1..=12u32 {
        let ids: Vec<u32> = (1..=size).collect();
        let pairs: Vec<(u32, u64)> = ids
            .iter()
            .filter(|id| *id % 3 != 0)
            .map(|&id| (id, u64::from(id * 2)))
            .collect();
        let store = RecordingStore::answering(&pairs);
        let enricher = OrderCountEnricher::new(store.clone(), &GridConfig::default());
        let mut page = collection(&ids);

        enricher.enrich(&mut page).await.unwrap();

        for record in &page {
            let id = record.entity_id.0;
            let expected = if id % 3 == 0 { 0 } else { u64::from(id * 2) };
            assert_eq!(record.orders_count, expected, "size {size}, customer {id}");
        }
        assert_eq!(store.queries().len(), 1);
    }
}
