use mockall::mock;
use order_engine::{
    db_types::{NormalizedAddress, Order, Product},
    traits::{AddressLookupError, AddressNormalizer, OrderStore, ProductStore, StoreError},
};

mock! {
    pub Orders {}
    impl OrderStore for Orders {
        async fn fetch_orders(&self) -> Result<Vec<Order>, StoreError>;
        async fn upsert_order(&self, order: Order) -> Result<(), StoreError>;
    }
}

mock! {
    pub Products {}
    impl ProductStore for Products {
        async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, StoreError>;
        async fn upsert_product(&self, product: Product) -> Result<(), StoreError>;
    }
}

mock! {
    pub Normalizer {}
    impl AddressNormalizer for Normalizer {
        async fn normalize(&self, address_line: &str, city: &str, postal_code: &str) -> Result<NormalizedAddress, AddressLookupError>;
    }
}
