use kis_client::model::pagination::{Continuation, Cursor, PageState, merge_page};

#[test]
fn test_continuation_markers() {
    assert_eq!(Continuation::from_header(Some("M")), Continuation::More);
    assert_eq!(Continuation::from_header(Some(" D ")), Continuation::Done);
    assert_eq!(Continuation::from_header(Some("F")), Continuation::Unknown);
    assert_eq!(Continuation::from_header(None), Continuation::Unknown);
}

#[test]
fn test_unknown_marker_is_neither_more_nor_last() {
    let unknown = Continuation::Unknown;
    assert!(!unknown.has_more());
    assert!(!unknown.is_last());
}

#[test]
fn test_page_state_follows_markers() {
    let cursor = Cursor::new("FK", "NK");
    let state = PageState::Initial.advance(Continuation::More, &cursor);
    assert_eq!(state, PageState::HasMore(cursor.clone()));

    let state = state.advance(Continuation::Done, &Cursor::default());
    assert!(state.is_last());

    // Last is terminal
    let state = state.advance(Continuation::More, &cursor);
    assert!(state.is_last());
}

#[test]
fn test_unknown_marker_ends_the_run() {
    let state = PageState::Initial.advance(Continuation::Unknown, &Cursor::new("a", "b"));
    assert_eq!(state, PageState::Last);
}

#[test]
fn test_merge_page_keeps_order_and_drops_overlap() {
    let mut acc = vec!["20240105", "20240104", "20240103"];
    merge_page(
        &mut acc,
        vec!["20240103", "20240102", "20240101", "20231229"],
        |d| d.to_string(),
        Some(&"20240101".to_string()),
    );
    assert_eq!(acc, vec!["20240105", "20240104", "20240103", "20240102", "20240101"]);
}

#[test]
fn test_merge_page_without_watermark() {
    let mut acc: Vec<u32> = Vec::new();
    merge_page(&mut acc, vec![3, 2, 1], |v| *v, None);
    assert_eq!(acc, vec![3, 2, 1]);
}

#[test]
fn test_cursor_is_empty() {
    assert!(Cursor::default().is_empty());
    assert!(!Cursor::new("", "NK").is_empty());
}
