//! End-to-end scenarios: config in, page events in, wire-format JSON out.

mod common;

use std::sync::Arc;

use shopwatch_agent::{
    AgentController, DomNode, PageBus, PageEvent, RejectionReason, Transport,
};

use common::{active_config, settle, test_page, transport, wait_until, RecordingTransport};

fn start_agent(
    transport: &Arc<RecordingTransport>,
    config: shopwatch_agent::AgentConfig,
    bus: &PageBus,
) -> AgentController {
    let agent = AgentController::with_transport(
        config,
        test_page(),
        Arc::clone(transport) as Arc<dyn Transport>,
    );
    agent.start(bus);
    agent
}

#[tokio::test]
async fn test_own_origin_crash_reaches_collector() {
    let transport = transport();
    let bus = PageBus::default();
    let _agent = start_agent(
        &transport,
        active_config("https://collector.example/api"),
        &bus,
    );

    bus.publish(PageEvent::ScriptError {
        message: "Uncaught TypeError: checkout is not a function".to_string(),
        source: "https://shop.test/assets/checkout.js".to_string(),
        line: 88,
        col: 15,
    });

    wait_until(|| transport.sent_count() == 1).await;

    let (url, body) = transport.sent().remove(0);
    assert_eq!(url, "https://collector.example/api");
    assert_eq!(body["type"], "JsCrash");
    assert_eq!(body["site"], "shop.test");
    assert_eq!(body["url"], "https://shop.test/checkout/");
    assert_eq!(body["user_agent"], "test-agent/1.0");
    let message = body["error_message"].as_str().unwrap();
    assert!(message.contains("Uncaught TypeError: checkout is not a function"));
    assert!(message.contains("https://shop.test/assets/checkout.js:88:15"));
}

#[tokio::test]
async fn test_third_party_crash_is_filtered_out() {
    let transport = transport();
    let bus = PageBus::default();
    let _agent = start_agent(
        &transport,
        active_config("https://collector.example/api"),
        &bus,
    );

    bus.publish(PageEvent::ScriptError {
        message: "tag error".to_string(),
        source: "https://cdn.thirdparty.net/pixel.js".to_string(),
        line: 1,
        col: 1,
    });

    settle().await;
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_unhandled_rejection_reaches_collector() {
    let transport = transport();
    let bus = PageBus::default();
    let _agent = start_agent(
        &transport,
        active_config("https://collector.example/api"),
        &bus,
    );

    bus.publish(PageEvent::UnhandledRejection {
        reason: RejectionReason::with_message("payment gateway unreachable", "Error: ..."),
    });

    wait_until(|| transport.sent_count() == 1).await;
    let (_, body) = transport.sent().remove(0);
    assert_eq!(body["type"], "UnhandledRejection");
    assert_eq!(body["error_message"], "payment gateway unreachable");
}

#[tokio::test]
async fn test_error_banner_reaches_collector_once() {
    let transport = transport();
    let bus = PageBus::default();
    let _agent = start_agent(
        &transport,
        active_config("https://collector.example/api"),
        &bus,
    );

    bus.publish(PageEvent::DomReady);
    let banner = Arc::new(
        DomNode::element("ul")
            .with_class("woocommerce-error")
            .with_text("Invalid card"),
    );
    bus.publish(PageEvent::DomInserted {
        nodes: vec![Arc::clone(&banner)],
    });
    // The same node keeps showing up in later mutation batches.
    bus.publish(PageEvent::DomInserted {
        nodes: vec![Arc::clone(&banner)],
    });
    bus.publish(PageEvent::DomInserted {
        nodes: vec![banner],
    });

    wait_until(|| transport.sent_count() >= 1).await;
    settle().await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1["type"], "UiNotice");
    assert_eq!(sent[0].1["error_message"], "Invalid card");
}

#[tokio::test]
async fn test_mutations_before_dom_ready_are_ignored() {
    let transport = transport();
    let bus = PageBus::default();
    let _agent = start_agent(
        &transport,
        active_config("https://collector.example/api"),
        &bus,
    );

    let banner = Arc::new(
        DomNode::element("ul")
            .with_class("woocommerce-error")
            .with_text("Too early"),
    );
    bus.publish(PageEvent::DomInserted {
        nodes: vec![banner],
    });

    settle().await;
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_checkout_ajax_failure_reaches_collector() {
    let transport = transport();
    let bus = PageBus::default();
    let _agent = start_agent(
        &transport,
        active_config("https://collector.example/api"),
        &bus,
    );

    bus.publish(PageEvent::DomReady);
    bus.publish(PageEvent::AjaxError {
        url: "https://shop.test/?wc-ajax=update_order_review".to_string(),
        status: 504,
        status_text: "Gateway Timeout".to_string(),
    });

    wait_until(|| transport.sent_count() == 1).await;
    let (_, body) = transport.sent().remove(0);
    assert_eq!(body["type"], "AjaxFailure");
    assert_eq!(
        body["error_message"],
        "Failed URL: https://shop.test/?wc-ajax=update_order_review | Error: Gateway Timeout | Status: 504"
    );
}

#[tokio::test]
async fn test_placeholder_collector_url_sends_nothing() {
    let transport = transport();
    let bus = PageBus::default();
    let _agent = start_agent(&transport, active_config("https://example.com/api"), &bus);

    bus.publish(PageEvent::DomReady);
    bus.publish(PageEvent::ScriptError {
        message: "boom".to_string(),
        source: "https://shop.test/app.js".to_string(),
        line: 1,
        col: 1,
    });
    bus.publish(PageEvent::DomInserted {
        nodes: vec![Arc::new(
            DomNode::element("ul")
                .with_class("woocommerce-error")
                .with_text("Invalid card"),
        )],
    });

    settle().await;
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_disabled_agent_installs_no_listeners() {
    let transport = transport();
    let bus = PageBus::default();
    let mut config = active_config("https://collector.example/api");
    config.enabled = false;
    let _agent = start_agent(&transport, config, &bus);

    assert_eq!(bus.subscriber_count(), 0);

    bus.publish(PageEvent::ScriptError {
        message: "boom".to_string(),
        source: "https://shop.test/app.js".to_string(),
        line: 1,
        col: 1,
    });
    settle().await;
    assert_eq!(transport.sent_count(), 0);
}

#[tokio::test]
async fn test_test_alert_uses_shared_wire_format() {
    let transport = transport();
    let bus = PageBus::default();
    let agent = start_agent(
        &transport,
        active_config("https://collector.example/api"),
        &bus,
    );

    agent.send_test_alert().await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    let body = &sent[0].1;
    assert_eq!(body["type"], "Test Alert");
    assert_eq!(body["site"], "shop.test");
    assert!(body["error_message"].as_str().unwrap().contains("Test alert"));
}
