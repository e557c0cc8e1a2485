use std::sync::mpsc as std_mpsc;
use std::time::{Duration, Instant};

use listbox::{DispatchMode, ListBox, SelectEvent, SelectKind};
use termgrid::{Event, Key};
use tokio::sync::mpsc;
use tokio::time::timeout;

fn focused(count: usize) -> ListBox {
    let mut list = ListBox::new(12, 5);
    list.set_active(true);
    for i in 0..count {
        list.add_item(format!("item {i}"));
    }
    list
}

#[tokio::test]
async fn test_click_notifies_changed() {
    let mut list = focused(4);
    let (tx, mut rx) = mpsc::unbounded_channel();
    list.on_select(move |event| {
        let _ = tx.send(event);
    });

    assert!(list.process_event(&Event::click(0, 2)));

    let event = timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("notification timed out")
        .expect("channel closed");
    assert_eq!(
        event,
        SelectEvent {
            index: 2,
            text: "item 2".to_string(),
            kind: SelectKind::Changed,
        }
    );
}

#[tokio::test]
async fn test_enter_notifies_confirmed() {
    let mut list = focused(4);
    list.select_item(3);
    let (tx, mut rx) = mpsc::unbounded_channel();
    list.on_select(move |event| {
        let _ = tx.send(event);
    });

    assert!(list.process_event(&Event::key(Key::Enter)));

    let event = timeout(Duration::from_secs(1), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(event.index, 3);
    assert_eq!(event.text, "item 3");
    assert_eq!(event.kind, SelectKind::Confirmed);
}

#[tokio::test]
async fn test_keyboard_navigation_does_not_notify() {
    let mut list = focused(4);
    let (tx, mut rx) = mpsc::unbounded_channel::<SelectEvent>();
    list.on_select(move |event| {
        let _ = tx.send(event);
    });

    list.process_event(&Event::key(Key::Down));
    list.process_event(&Event::key(Key::End));

    let waited = timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(waited.is_err(), "navigation keys must not notify");
}

#[tokio::test]
async fn test_ordered_dispatch_preserves_raise_order() {
    let mut list = focused(10);
    list.set_dispatch_mode(DispatchMode::Ordered);
    let (tx, mut rx) = mpsc::unbounded_channel();
    list.on_select(move |event: SelectEvent| {
        let _ = tx.send(event.index);
    });

    for row in [4, 1, 3, 0, 2] {
        list.process_event(&Event::click(0, row));
    }

    let mut seen = Vec::new();
    for _ in 0..5 {
        let index = timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        seen.push(index);
    }
    assert_eq!(seen, vec![4, 1, 3, 0, 2]);
}

#[tokio::test]
async fn test_detached_dispatch_delivers_everything() {
    let mut list = focused(10);
    let (tx, mut rx) = mpsc::unbounded_channel();
    list.on_select(move |event: SelectEvent| {
        let _ = tx.send(event.index);
    });

    for row in 0..5 {
        list.process_event(&Event::click(0, row));
    }

    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(
            timeout(Duration::from_secs(1), rx.recv())
                .await
                .unwrap()
                .unwrap(),
        );
    }
    // No ordering promise, only delivery.
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn test_cleared_callback_receives_nothing() {
    let mut list = focused(4);
    let (tx, mut rx) = mpsc::unbounded_channel::<SelectEvent>();
    list.on_select(move |event| {
        let _ = tx.send(event);
    });
    list.clear_on_select();

    assert!(list.process_event(&Event::click(0, 1)));
    assert_eq!(list.selected_item(), Some(1));

    // The callback (and its sender) is gone, so the channel closes.
    let waited = timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
    assert!(waited.is_none());
}

#[tokio::test]
async fn test_slow_callback_does_not_stall_input() {
    for mode in [DispatchMode::Detached, DispatchMode::Ordered] {
        let mut list = focused(4);
        list.set_dispatch_mode(mode);
        let (tx, mut rx) = mpsc::unbounded_channel();
        list.on_select(move |event: SelectEvent| {
            std::thread::sleep(Duration::from_millis(300));
            let _ = tx.send(event.index);
        });

        assert!(list.process_event(&Event::click(0, 1)));
        tokio::task::yield_now().await;

        let started = Instant::now();
        assert!(list.process_event(&Event::click(0, 2)));
        tokio::task::yield_now().await;
        let elapsed = started.elapsed();
        assert!(
            elapsed < Duration::from_millis(100),
            "{mode:?}: input stalled for {elapsed:?}"
        );
        assert_eq!(list.selected_item(), Some(2));

        for _ in 0..2 {
            timeout(Duration::from_secs(2), rx.recv())
                .await
                .unwrap()
                .unwrap();
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn test_slow_callback_leaves_workers_free() {
    let mut list = focused(4);
    list.on_select(|_| std::thread::sleep(Duration::from_millis(300)));
    list.process_event(&Event::click(0, 1));

    // The only worker must still be free to run other tasks.
    let started = Instant::now();
    tokio::spawn(async {}).await.unwrap();
    assert!(started.elapsed() < Duration::from_millis(100));
}

#[test]
fn test_dispatch_without_runtime_uses_thread() {
    let mut list = focused(4);
    let (tx, rx) = std_mpsc::channel();
    list.on_select(move |event| {
        let _ = tx.send(event);
    });

    list.process_event(&Event::click(0, 1));

    let event = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(event.index, 1);
}

#[test]
fn test_ordered_without_runtime_uses_thread() {
    let mut list = focused(6);
    list.set_dispatch_mode(DispatchMode::Ordered);
    let (tx, rx) = std_mpsc::channel();
    list.on_select(move |event: SelectEvent| {
        let _ = tx.send(event.index);
    });

    for row in [3, 0, 4] {
        list.process_event(&Event::click(0, row));
    }

    let seen: Vec<usize> = (0..3)
        .map(|_| rx.recv_timeout(Duration::from_secs(1)).unwrap())
        .collect();
    assert_eq!(seen, vec![3, 0, 4]);
}
