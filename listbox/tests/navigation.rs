use listbox::ListBox;

fn numbered(count: usize, height: u16) -> ListBox {
    let mut list = ListBox::new(20, height);
    for i in 0..count {
        list.add_item(format!("item {i}"));
    }
    list
}

#[test]
fn test_home_on_empty_list() {
    let mut list = ListBox::new(10, 3);
    list.home();
    assert_eq!(list.selected_item(), None);
    assert_eq!(list.top_line(), 0);
}

#[test]
fn test_home_selects_first_and_scrolls_top() {
    let mut list = numbered(10, 4);
    list.end();
    list.home();
    assert_eq!(list.selected_item(), Some(0));
    assert_eq!(list.top_line(), 0);
}

#[test]
fn test_end_shows_last_page() {
    let mut list = numbered(10, 4);
    list.end();
    assert_eq!(list.selected_item(), Some(9));
    assert_eq!(list.top_line(), 6);
}

#[test]
fn test_end_when_everything_fits() {
    let mut list = numbered(3, 5);
    list.end();
    assert_eq!(list.selected_item(), Some(2));
    assert_eq!(list.top_line(), 0);
}

#[test]
fn test_end_on_empty_list() {
    let mut list = ListBox::new(10, 3);
    list.end();
    assert_eq!(list.selected_item(), None);
}

#[test]
fn test_move_down_to_bottom_leaves_last_page_flush() {
    let mut list = numbered(10, 4);
    for _ in 0..20 {
        list.move_down();
    }
    assert_eq!(list.selected_item(), Some(9));
    assert_eq!(list.top_line(), 6);
}

#[test]
fn test_move_down_scrolls_one_line_at_a_time() {
    let mut list = numbered(10, 4);
    list.select_item(3);
    assert_eq!(list.top_line(), 0);

    list.move_down();
    assert_eq!(list.top_line(), 1);
    list.move_down();
    assert_eq!(list.top_line(), 2);
}

#[test]
fn test_move_up_scrolls_one_line_at_a_time() {
    let mut list = numbered(10, 4);
    list.end();

    list.move_up();
    list.move_up();
    list.move_up();
    assert_eq!(list.selected_item(), Some(6));
    assert_eq!(list.top_line(), 6);

    list.move_up();
    assert_eq!(list.selected_item(), Some(5));
    assert_eq!(list.top_line(), 5);
}

#[test]
fn test_move_up_without_selection_selects_first() {
    let mut list = numbered(5, 3);
    list.move_up();
    assert_eq!(list.selected_item(), Some(0));
}

#[test]
fn test_move_down_without_selection_selects_first() {
    let mut list = numbered(5, 3);
    list.move_down();
    assert_eq!(list.selected_item(), Some(0));
}

#[test]
fn test_move_up_at_top_is_noop() {
    let mut list = numbered(5, 3);
    list.home();
    list.move_up();
    assert_eq!(list.selected_item(), Some(0));
    assert_eq!(list.top_line(), 0);
}

#[test]
fn test_move_down_at_bottom_is_noop() {
    let mut list = numbered(5, 3);
    list.end();
    let top = list.top_line();
    list.move_down();
    assert_eq!(list.selected_item(), Some(4));
    assert_eq!(list.top_line(), top);
}

#[test]
fn test_move_on_empty_list_is_noop() {
    let mut list = ListBox::new(10, 3);
    list.move_up();
    list.move_down();
    assert_eq!(list.selected_item(), None);
}

#[test]
fn test_ensure_visible_is_idempotent() {
    let mut list = numbered(30, 5);
    list.select_item(17);
    list.ensure_visible();
    let first = list.top_line();
    list.ensure_visible();
    assert_eq!(list.top_line(), first);
}

#[test]
fn test_resize_keeps_selection_visible() {
    let mut list = numbered(20, 10);
    list.select_item(9);
    assert_eq!(list.top_line(), 0);

    list.set_size(20, 4);
    assert_eq!(list.top_line(), 6);

    list.set_size(20, 30);
    assert_eq!(list.top_line(), 0);
}

#[test]
fn test_thumb_follows_selection() {
    let mut list = numbered(50, 10);
    list.home();
    assert_eq!(list.thumb_row(), Some(1));
    list.end();
    assert_eq!(list.thumb_row(), Some(8));
}
