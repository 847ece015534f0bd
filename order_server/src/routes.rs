//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! The RPC routes follow the `/rpc/<package>.<Service>/<Method>` convention. Every RPC call is a `POST` with a JSON
//! body, and every error comes back as a JSON object with a single `error` field.
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. Database and address lookups are therefore always `async`.
use actix_web::{error::JsonPayloadError, get, web, HttpRequest, HttpResponse, Responder};
use bytes::Bytes;
use log::*;
use order_engine::{
    db_types::Order,
    traits::{AddressNormalizer, OrderStore, ProductStore},
    OrderIntakeApi,
    OrderQueryApi,
};

use crate::{
    data_objects::{CreateOrderResponse, ListOrdersRequest, ListOrdersResponse},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

/// Turns JSON extractor failures into the server's JSON error format.
pub fn json_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("💻️ Rejecting malformed payload. {err}");
    ServerError::InvalidRequestBody(err.to_string()).into()
}

//----------------------------------------------   Orders  ----------------------------------------------------
route!(list_orders => Post "/rpc/order.Service/ListOrders" impl OrderStore);
/// Route handler for `ListOrders`
///
/// Returns every order in the order store as `{"orders": [...]}`. The request body is ignored, but if one is supplied
/// it must be a JSON object.
pub async fn list_orders<B: OrderStore>(
    body: Bytes,
    api: web::Data<OrderQueryApi<B>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received ListOrders request");
    if !body.iter().all(u8::is_ascii_whitespace) {
        let _request: ListOrdersRequest = serde_json::from_slice(&body).map_err(|e| {
            debug!("💻️ Could not read ListOrders request. {e}");
            ServerError::CouldNotDeserializePayload
        })?;
    }
    let orders = api.list_orders().await?;
    debug!("💻️ Returning {} orders", orders.len());
    Ok(HttpResponse::Ok().json(ListOrdersResponse::from(orders)))
}

route!(create_order => Post "/rpc/order.Service/CreateOrder" impl OrderStore, ProductStore, AddressNormalizer);
/// Route handler for `CreateOrder`
///
/// The order is checked in this order, and the first failure is returned:
/// 1. The customer's first and last names must both be present (400).
/// 2. Every product must exist in the catalog (404, naming the first missing product).
/// 3. The shipping address must be in France (400) and must be found by the address service (422). If the address
///    service cannot be reached, the call fails with 502.
///
/// On success the normalized order replaces any existing order with the same id, and the response is `{}`.
pub async fn create_order<O, P, N>(
    body: web::Json<Order>,
    api: web::Data<OrderIntakeApi<O, P, N>>,
) -> Result<HttpResponse, ServerError>
where
    O: OrderStore,
    P: ProductStore,
    N: AddressNormalizer,
{
    let order = body.into_inner();
    debug!("💻️ Received CreateOrder request for {}", order.label());
    api.create_order(order).await.map_err(|e| {
        info!("💻️ Order rejected. {e}");
        ServerError::from(e)
    })?;
    Ok(HttpResponse::Ok().json(CreateOrderResponse {}))
}
