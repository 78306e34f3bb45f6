use std::sync::Arc;
use std::sync::Barrier;
use std::thread;

use crate::public::LpTab;
use crate::shared::SharedTab;

#[test]
fn test_basic_operations() {
  let table: SharedTab<u32> = SharedTab::with_base(31, 7);

  assert!(table.is_empty());
  assert_eq!(table.capacity(), 7);

  table.set("cat", 1).unwrap();
  table.set("dog", 2).unwrap();

  assert_eq!(table.insert("cat", 3), Ok(Some(1)));
  assert_eq!(table.len(), 2);
  assert_eq!(table.get("cat"), Ok(3));
  assert_eq!(table.with("dog", |value| value * 10), Ok(20));
  assert!(table.contains("dog"));

  table.delete("dog").unwrap();

  assert!(!table.contains("dog"));
  assert!(table.with("dog", |value| *value).is_err());
  assert_eq!(table.remove("cat"), Ok(3));
  assert!(table.remove("cat").unwrap_err().is_key_not_found());
  assert!(table.is_empty());
}

#[test]
fn test_from_and_into_inner() {
  let mut table: LpTab<u32> = LpTab::new();

  table.set("key", 1).unwrap();

  let shared: SharedTab<u32> = SharedTab::from(table);

  shared.set("other", 2).unwrap();

  let table: LpTab<u32> = shared.into_inner();

  assert_eq!(table.len(), 2);
  assert_eq!(table.get("key"), Ok(&1));
  assert_eq!(table.get("other"), Ok(&2));
}

#[test]
fn test_snapshot() {
  let table: SharedTab<usize> = SharedTab::default();

  for index in 0..10 {
    table.set(index.to_string(), index).unwrap();
  }

  let mut snapshot: Vec<(String, usize)> = table.snapshot();
  snapshot.sort_unstable_by_key(|(_, value)| *value);

  assert_eq!(snapshot.len(), 10);
  assert_eq!(snapshot[0], ("0".to_owned(), 0));
  assert_eq!(snapshot[9], ("9".to_owned(), 9));
}

#[test]
fn test_lock_with() {
  let table: SharedTab<u64> = SharedTab::new();

  for word in ["a", "b", "a", "c", "a"] {
    table.lock_with(|table| match table.get_mut(word) {
      Ok(count) => *count += 1,
      Err(_) => table.set(word, 1).unwrap(),
    });
  }

  assert_eq!(table.get("a"), Ok(3));
  assert_eq!(table.get("b"), Ok(1));
  assert_eq!(table.stats().rehashes, 0);
}

#[test]
fn test_poisoned_lock_recovers() {
  let table: Arc<SharedTab<u32>> = Arc::new(SharedTab::new());

  table.set("key", 1).unwrap();

  let result: thread::Result<()> = thread::spawn({
    let table: Arc<SharedTab<u32>> = Arc::clone(&table);
    move || table.lock_with::<_, ()>(|_| panic!("poison the lock"))
  })
  .join();

  assert!(result.is_err());
  assert_eq!(table.get("key"), Ok(1));
}

#[test]
fn test_debug() {
  let table: SharedTab<u32> = SharedTab::new();

  table.set("key", 1).unwrap();

  assert!(format!("{table:?}").starts_with("SharedTab(LpTab"));
}

#[test]
fn test_concurrent_writers() {
  const THREADS: usize = 8;
  const KEYS: usize = 500;

  let table: Arc<SharedTab<usize>> = Arc::new(SharedTab::with_base(31, 3));
  let barrier: Arc<Barrier> = Arc::new(Barrier::new(THREADS));

  let handles: Vec<_> = (0..THREADS)
    .map(|thread_id| {
      let table: Arc<SharedTab<usize>> = Arc::clone(&table);
      let barrier: Arc<Barrier> = Arc::clone(&barrier);

      thread::spawn(move || {
        barrier.wait();

        for index in 0..KEYS {
          table.set(format!("{thread_id}:{index}"), index).unwrap();
        }

        for index in (0..KEYS).step_by(2) {
          table.delete(&format!("{thread_id}:{index}")).unwrap();
        }
      })
    })
    .collect();

  for handle in handles {
    handle.join().unwrap();
  }

  assert_eq!(table.len(), THREADS * KEYS / 2);

  for thread_id in 0..THREADS {
    for index in 0..KEYS {
      let key: String = format!("{thread_id}:{index}");

      if index % 2 == 0 {
        assert!(!table.contains(&key));
      } else {
        assert_eq!(table.get(&key), Ok(index));
      }
    }
  }
}

#[test]
fn test_concurrent_readers_and_writer() {
  let table: Arc<SharedTab<usize>> = Arc::new(SharedTab::new());

  for index in 0..100 {
    table.set(format!("stable{index}"), index).unwrap();
  }

  let writer = thread::spawn({
    let table: Arc<SharedTab<usize>> = Arc::clone(&table);

    move || {
      for index in 0..2_000 {
        table.set(format!("churn{index}"), index).unwrap();

        if index % 3 == 0 {
          table.delete(&format!("churn{index}")).unwrap();
        }
      }
    }
  });

  let readers: Vec<_> = (0..4)
    .map(|_| {
      let table: Arc<SharedTab<usize>> = Arc::clone(&table);

      thread::spawn(move || {
        for _ in 0..20 {
          for index in 0..100 {
            assert_eq!(table.get(&format!("stable{index}")), Ok(index));
          }
        }
      })
    })
    .collect();

  writer.join().unwrap();

  for reader in readers {
    reader.join().unwrap();
  }

  assert_eq!(table.len(), 100 + 2_000 - 667);
}
