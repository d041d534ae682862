//! Browser tests for the page binding. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use blob_engine::BlobAnimator;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    el.set_id(id);
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn animator_creates_and_removes_blobs() {
    let el = container("blob-test-a");
    let mut animator = BlobAnimator::new("blob-test-a", Some(r#"{"seed": 1}"#.to_string())).unwrap();
    assert!(animator.is_running());
    assert_eq!(el.child_element_count(), 5);
    assert_eq!(el.get_elements_by_class_name("pulse").length(), 5);

    animator.shutdown();
    assert!(!animator.is_running());
    assert_eq!(el.child_element_count(), 0);

    // second shutdown is a no-op
    animator.shutdown();
    el.remove();
}

#[wasm_bindgen_test]
fn animator_rejects_missing_container() {
    assert!(BlobAnimator::new("no-such-container", None).is_err());
}

#[wasm_bindgen_test]
fn animator_events_cycle_theme() {
    let el = container("blob-test-b");
    let mut animator =
        BlobAnimator::new("blob-test-b", Some(r#"{"bodyCount": 3, "seed": 2}"#.to_string())).unwrap();
    assert_eq!(animator.body_count(), 3);
    assert_eq!(animator.change_theme(), "ocean");
    animator.trigger_shake(true);
    drop(animator);
    assert_eq!(el.child_element_count(), 0);
    el.remove();
}
