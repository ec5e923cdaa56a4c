//! Cross-thread command delivery.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing_subscriber::EnvFilter;
use unfold_core::{CommandQueue, Signal, UnfoldError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_per_sender_order_is_kept() {
    init_tracing();
    let mut queue = CommandQueue::<(usize, usize)>::new();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let sender = queue.sender();
            std::thread::spawn(move || {
                for seq in 0..50 {
                    sender.post((worker, seq)).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let mut next = [0_usize; 4];
    let handled = queue.drain(|(worker, seq)| {
        assert_eq!(seq, next[worker]);
        next[worker] += 1;
    });
    assert_eq!(handled, 200);
    assert_eq!(next, [50; 4]);
}

#[test]
fn test_batched_drain_spreads_over_frames() {
    init_tracing();
    let mut queue = CommandQueue::with_batch_size(3);
    let sender = queue.sender();
    for i in 0..7 {
        sender.post(i).unwrap();
    }

    let mut frames = Vec::new();
    while queue.has_pending() {
        frames.push(queue.drain(|_| {}));
    }
    assert_eq!(frames, vec![3, 3, 1]);
}

#[test]
fn test_drained_commands_can_notify_observers() {
    init_tracing();
    let mut queue = CommandQueue::<i64>::new();
    let changed = Signal::<Option<i64>>::new();
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    changed.connect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let sender = queue.sender();
    std::thread::spawn(move || sender.post(4))
        .join()
        .unwrap()
        .unwrap();

    queue.drain(|item| changed.emit(Some(item)));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn test_post_after_drop_fails() {
    let queue = CommandQueue::<u8>::new();
    let sender = queue.sender();
    drop(queue);
    assert!(matches!(sender.post(1), Err(UnfoldError::QueueClosed)));
}
