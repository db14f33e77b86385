use super::*;

#[test]
fn plain_message_is_sent_verbatim() {
    let out = Outbound::message("Send data");
    assert_eq!(out.to_text(), "Send data");

    let empty = Outbound::message("");
    assert_eq!(empty.to_text(), "");
}

#[test]
fn emit_is_tagged_json() {
    let out = Outbound::emit(CONNECT_EVENT, CONNECT_EVENT_DATA);
    let text = out.to_text();
    let value: serde_json::Value = serde_json::from_str(&text).expect("emit should be json");
    assert_eq!(value, serde_json::json!({"event": "EmitKeyWord", "data": "Emit Data"}));
}

#[test]
fn emit_escapes_payload() {
    let out = Outbound::emit("quote\"d", "line\nbreak");
    let value: serde_json::Value = serde_json::from_str(&out.to_text()).unwrap();
    assert_eq!(value["event"], "quote\"d");
    assert_eq!(value["data"], "line\nbreak");
}

#[test]
fn event_kind_names() {
    assert_eq!(Event::Connect.kind(), "connect");
    assert_eq!(Event::Message(String::new()).kind(), "message");
    assert_eq!(Event::Disconnect.kind(), "disconnect");
}

#[test]
fn ack_keeps_wire_spelling() {
    assert_eq!(MESSAGE_ACK, "Data recieved from web");
}
