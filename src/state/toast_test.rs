use serde_json::json;

use super::*;
use crate::testing::FakeToast;

fn notifier() -> ToastNotifier<FakeToast> {
    ToastNotifier::new(Some(FakeToast::default()), 2000)
}

fn surface(toast: &ToastNotifier<FakeToast>) -> &FakeToast {
    toast.surface().unwrap()
}

// =============================================================
// show / expire
// =============================================================

#[test]
fn show_without_surface_is_noop() {
    let toast: ToastNotifier<FakeToast> = ToastNotifier::new(None, 2000);
    assert_eq!(toast.show("Saved"), None);
}

#[test]
fn show_sets_text_and_visible() {
    let toast = notifier();
    assert!(toast.show("Saved").is_some());
    assert_eq!(*surface(&toast).text.borrow(), "Saved");
    assert!(surface(&toast).visible.get());
}

#[test]
fn ticket_carries_configured_hide_delay() {
    let ticket = notifier().show("Saved").unwrap();
    assert_eq!(ticket.hide_after_ms(), 2000);

    let slow = ToastNotifier::new(Some(FakeToast::default()), 3500);
    assert_eq!(slow.show("Saved").unwrap().hide_after_ms(), 3500);
}

#[test]
fn expire_hides_isolated_toast() {
    let toast = notifier();
    let ticket = toast.show("Saved").unwrap();
    assert!(toast.expire(ticket));
    assert!(!surface(&toast).visible.get());
}

#[test]
fn stale_ticket_does_not_hide_newer_toast() {
    let toast = notifier();
    let first = toast.show("Game deleted").unwrap();
    let second = toast.show("Event deleted").unwrap();
    assert_ne!(first, second);

    assert!(!toast.expire(first));
    assert!(surface(&toast).visible.get());
    assert_eq!(*surface(&toast).text.borrow(), "Event deleted");

    assert!(toast.expire(second));
    assert!(!surface(&toast).visible.get());
}

// =============================================================
// Event messages
// =============================================================

#[test]
fn game_removed_uses_fixed_message() {
    let config = UiConfig::default();
    let detail = ToastDetail::Object { value: Some(json!(true)) };
    let event = ToastEvent::from_dom("game-removed", detail, &config).unwrap();
    assert_eq!(event.message(&config), "Game deleted");
}

#[test]
fn toast_uses_string_detail() {
    let config = UiConfig::default();
    let detail = ToastDetail::Scalar(json!("Saved"));
    let event = ToastEvent::from_dom("toast", detail, &config).unwrap();
    assert_eq!(event.message(&config), "Saved");
}

#[test]
fn toast_without_detail_defaults_to_done() {
    let config = UiConfig::default();
    let details = [
        ToastDetail::Absent,
        ToastDetail::Scalar(json!("")),
        ToastDetail::Scalar(json!(false)),
        ToastDetail::Scalar(json!(0)),
        ToastDetail::Object { value: None },
        ToastDetail::Object { value: Some(json!("")) },
    ];
    for detail in details {
        let event = ToastEvent::Toast { detail };
        assert_eq!(event.message(&config), "Done");
    }
}

#[test]
fn htmx_trigger_detail_uses_value_field() {
    let config = UiConfig::default();
    let event = ToastEvent::Toast {
        detail: ToastDetail::Object { value: Some(json!("Event deleted")) },
    };
    assert_eq!(event.message(&config), "Event deleted");
}

#[test]
fn truthy_scalars_render_as_text() {
    assert_eq!(scalar_message(&json!(3)).as_deref(), Some("3"));
    assert_eq!(scalar_message(&json!(true)).as_deref(), Some("true"));
    assert_eq!(scalar_message(&json!("ok")).as_deref(), Some("ok"));
}

#[test]
fn non_scalars_have_no_message() {
    assert_eq!(scalar_message(&json!({ "value": "x" })), None);
    assert_eq!(scalar_message(&json!(["a"])), None);
    assert_eq!(scalar_message(&json!(null)), None);
}

#[test]
fn unknown_event_name_is_ignored() {
    let config = UiConfig::default();
    assert_eq!(ToastEvent::from_dom("click", ToastDetail::Absent, &config), None);
}
