//! Integration tests for interceptor pipelines
//!
//! Tests verify that:
//! - Interceptors run in insertion order, each exactly once
//! - Replacing the chain does not disturb sends already in flight
//! - Interceptors can short-circuit, and their errors pass through unchanged

mod common;

use common::{
    numeric_receiver, owned, CacheInterceptor, GateInterceptor, PlusInterceptor,
    RateLimitInterceptor, TagInterceptor,
};
use endpoint_link::endpoint::{Endpoint, JsonOptions, Receiver};
use endpoint_link::interceptor::{
    Interceptor, InterceptorRegistry, InterceptorSpec, LoggingInterceptor,
};
use endpoint_link::EndpointError;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Notify;

fn pair(interceptors: Vec<Arc<dyn Interceptor>>, receiver: Receiver) -> (Endpoint, Endpoint) {
    let re = Endpoint::new_receive("re", owned("o").with_receive(receiver)).unwrap();
    let se = Endpoint::new_send(
        "se",
        owned("o").with_interceptors(interceptors).connected_to(&re),
    )
    .unwrap();
    (se, re)
}

#[tokio::test]
async fn test_offsets_apply_in_order() {
    let (se, _re) = pair(
        vec![PlusInterceptor::shared(10), PlusInterceptor::shared(1)],
        numeric_receiver(|x| x),
    );
    assert_eq!(se.send(json!(3)).await.unwrap(), json!(14));
}

#[tokio::test]
async fn test_interceptor_and_receiver_combine() {
    let (se, _re) = pair(vec![PlusInterceptor::shared(10)], numeric_receiver(|x| x + 1));
    assert_eq!(se.send(json!(3)).await.unwrap(), json!(3 + 10 + 1));
}

#[tokio::test]
async fn test_order_is_insertion_order() {
    let interceptors: Vec<Arc<dyn Interceptor>> = vec![
        Arc::new(TagInterceptor("a")),
        Arc::new(TagInterceptor("b")),
        Arc::new(TagInterceptor("c")),
    ];
    let (se, _re) = pair(interceptors, Receiver::from_fn(Ok));
    assert_eq!(se.send(json!(">")).await.unwrap(), json!(">abc"));

    assert_eq!(se.first_interceptor().unwrap().type_name(), "tag");
    assert_eq!(se.interceptors().len(), 3);
}

#[tokio::test]
async fn test_chain_replacement_is_atomic() {
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let gate: Arc<dyn Interceptor> = Arc::new(GateInterceptor {
        entered: entered.clone(),
        release: release.clone(),
    });
    let (se, _re) = pair(vec![gate], numeric_receiver(|x| x));

    let in_flight = tokio::spawn({
        let se = se.clone();
        async move { se.send(json!(1)).await }
    });
    entered.notified().await;

    se.set_interceptors(Vec::new());
    assert!(!se.has_interceptors());
    assert_eq!(se.send(json!(1)).await.unwrap(), json!(1));

    release.notify_one();
    assert_eq!(in_flight.await.unwrap().unwrap(), json!(101));
}

#[tokio::test]
async fn test_short_circuit_skips_receiver() {
    let (se, re) = pair(
        vec![Arc::new(CacheInterceptor { answer: json!("cached") })],
        Receiver::from_fn(|_| Err(EndpointError::Rejected("should not be reached".into()))),
    );
    assert_eq!(se.send(json!(1)).await.unwrap(), json!("cached"));

    // the receiver itself still rejects
    assert!(re.receive(json!(1)).await.is_err());
}

#[tokio::test]
async fn test_interceptor_errors_pass_through() {
    let (se, _re) = pair(
        vec![
            PlusInterceptor::shared(1),
            Arc::new(RateLimitInterceptor),
            PlusInterceptor::shared(1),
        ],
        numeric_receiver(|x| x),
    );

    let err = se.send(json!(1)).await.unwrap_err();
    assert!(matches!(err, EndpointError::Other(_)));
    assert_eq!(err.to_string(), "rate limit exceeded");
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_receiver_errors_pass_through() {
    let (se, _re) = pair(
        vec![Arc::new(LoggingInterceptor::new(Some("outgoing".into())))],
        Receiver::from_fn(|_| Err(EndpointError::Rejected("busy".into()))),
    );

    let err = se.send(json!(1)).await.unwrap_err();
    assert!(matches!(err, EndpointError::Rejected(ref who) if who == "busy"));
}

#[tokio::test]
async fn test_async_receiver() {
    let re = Endpoint::new_receive(
        "re",
        owned("o").with_receive(Receiver::new(|payload| async move {
            tokio::task::yield_now().await;
            Ok(json!({ "echo": payload }))
        })),
    )
    .unwrap();
    let se = Endpoint::new_send("se", owned("o").connected_to(&re)).unwrap();

    assert_eq!(se.send(json!("hi")).await.unwrap(), json!({ "echo": "hi" }));
}

#[test]
fn test_definitions_resolve_through_registry() {
    let registry = InterceptorRegistry::with_builtins();
    registry.register("plus", |definition| {
        let offset = definition["offset"].as_i64().unwrap_or_default();
        Ok(PlusInterceptor::shared(offset))
    });

    let se = Endpoint::new_send(
        "se",
        owned("o")
            .with_registry(registry.clone())
            .with_interceptors(InterceptorSpec::list_from_value(&json!([
                { "type": "logging", "label": "outgoing" },
                { "type": "plus", "offset": 2 },
                "not-registered"
            ]))),
    )
    .unwrap();

    assert_eq!(se.interceptors().len(), 2);
    assert_eq!(se.last_interceptor().unwrap().type_name(), "plus");
    assert_eq!(
        se.to_json_with_options(&JsonOptions {
            include_config: true,
            ..Default::default()
        }),
        json!({
            "out": true,
            "interceptors": [
                { "type": "logging", "label": "outgoing" },
                { "type": "plus" }
            ]
        })
    );

    se.set_interceptor_specs(&[InterceptorSpec::from("logging")], &registry).unwrap();
    assert_eq!(se.interceptors().len(), 1);
}

#[test]
fn test_bad_definition_fails_construction() {
    let result = Endpoint::new_send(
        "se",
        owned("o").with_interceptors([json!({ "type": "logging", "label": 7 })]),
    );
    assert!(matches!(
        result,
        Err(EndpointError::InterceptorConfig { .. })
    ));
}
