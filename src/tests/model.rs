use std::collections::HashMap;

use proptest::prelude::*;

use crate::config::SCHEDULE;
use crate::public::LpTab;

const CASES: u32 = if cfg!(miri) { 4 } else { 256 };

#[derive(Clone, Debug)]
enum Op {
  Set(String, u8),
  Delete(String),
  Get(String),
}

fn key() -> impl Strategy<Value = String> {
  "[a-h]{0,3}"
}

fn op() -> impl Strategy<Value = Op> {
  prop_oneof![
    3 => (key(), any::<u8>()).prop_map(|(key, value)| Op::Set(key, value)),
    2 => key().prop_map(Op::Delete),
    1 => key().prop_map(Op::Get),
  ]
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(CASES))]

  #[test]
  fn op_sequence_matches_model(
    hash_base in prop_oneof![Just(31_u64), Just(27183_u64), 1_u64..1_000],
    capacity in 0_usize..40,
    ops in proptest::collection::vec(op(), 0..256),
  ) {
    let mut table: LpTab<u8> = LpTab::with_base(hash_base, capacity);
    let mut model: HashMap<String, u8> = HashMap::new();
    let mut capacity: usize = table.capacity();

    for op in ops {
      match op {
        Op::Set(key, value) => {
          prop_assert_eq!(table.insert(key.as_str(), value), Ok(model.insert(key, value)));
        }
        Op::Delete(key) => match model.remove(&key) {
          Some(value) => {
            prop_assert_eq!(table.remove(&key), Ok(value));
          }
          None => {
            prop_assert!(table.remove(&key).unwrap_err().is_key_not_found());
          }
        },
        Op::Get(key) => {
          prop_assert_eq!(table.get(&key).ok(), model.get(&key));
        }
      }

      prop_assert_eq!(table.len(), model.len());
      prop_assert!(table.len() <= table.capacity());
      prop_assert!(table.capacity() >= capacity);
      prop_assert!(SCHEDULE.contains(&table.capacity()));

      capacity = table.capacity();
    }

    for (key, value) in &model {
      prop_assert_eq!(table.get(key), Ok(value));
    }

    for (key, value) in table.entries() {
      prop_assert_eq!(model.get(key), Some(value));
    }
  }

  #[test]
  fn deletion_keeps_keys_reachable(
    keys in proptest::collection::hash_set("[a-z]{1,4}", 1..64),
    order in proptest::collection::vec(any::<prop::sample::Index>(), 0..64),
  ) {
    let mut table: LpTab<()> = LpTab::with_base(31, 3);
    let mut live: Vec<String> = keys.into_iter().collect();

    for key in &live {
      table.set(key.as_str(), ()).unwrap();
    }

    for index in order {
      if live.is_empty() {
        break;
      }

      let key: String = live.swap_remove(index.index(live.len()));

      table.delete(&key).unwrap();

      prop_assert!(!table.contains(&key));

      for key in &live {
        prop_assert!(table.contains(key));
      }
    }

    prop_assert_eq!(table.len(), live.len());
  }
}
