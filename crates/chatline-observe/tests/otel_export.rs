use chatline_core::chat::ChatService;
use chatline_observe::tracing_setup::{init_tracing, otel_enabled, shutdown_tracing};

#[test]
fn otel_layer_exports_chat_spans() {
    init_tracing(true).unwrap();
    assert!(otel_enabled());

    let span = tracing::info_span!("chat_session", user_id = 1);
    let guard = span.enter();
    let mut service = ChatService::new();
    let chat_id = service.create_chat(1).unwrap();
    service.create_message(chat_id, 1, 2, "exported").unwrap();
    assert_eq!(service.get_unread_chats_count(2), 1);
    drop(guard);
    drop(span);

    shutdown_tracing();
}
