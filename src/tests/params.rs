use crate::params::Capacity;
use crate::params::DefaultParams;
use crate::params::Params;
use crate::params::ParamsExt;
use crate::params::SCHEDULE;
use crate::utils::each_capacity;

fn is_prime(value: usize) -> bool {
  value >= 2 && (2..).take_while(|factor| factor * factor <= value).all(|factor| value % factor != 0)
}

#[test]
fn test_capacity_min() {
  assert_eq!(
    Capacity::new(1).as_usize(),
    Capacity::MIN.as_usize(),
    "invalid capacity: expected clamp to MIN",
  );

  assert_eq!(Capacity::new(0), Capacity::MIN);
  assert_eq!(Capacity::MIN.as_usize(), 3);
}

#[test]
fn test_capacity_max() {
  assert_eq!(
    Capacity::new(1 << 30).as_usize(),
    Capacity::MAX.as_usize(),
    "invalid capacity: expected clamp to MAX",
  );

  assert_eq!(Capacity::MAX.as_usize(), 7_199_369);
}

#[test]
fn test_capacity_round_up() {
  assert_eq!(
    Capacity::new(18).as_usize(),
    23,
    "invalid capacity: expected round up",
  );

  assert_eq!(Capacity::new(1_000_081).as_usize(), 1_162_687);
}

#[test]
fn test_capacity_exact() {
  for &value in SCHEDULE {
    assert_eq!(
      Capacity::new(value).as_usize(),
      value,
      "invalid capacity: expected no change",
    );
  }
}

#[test]
fn test_capacity_default() {
  assert_eq!(Capacity::default(), Capacity::DEF);
  assert_eq!(Capacity::DEF.as_usize(), 17);
  assert_eq!(usize::from(Capacity::DEF), 17);
}

#[test]
fn test_capacity_into_usize() {
  let mut capacity: Option<Capacity> = Some(Capacity::MIN);

  while let Some(current) = capacity {
    assert_ne!(usize::from(current), 0);
    assert_eq!(usize::from(current), SCHEDULE[current.rank()]);

    capacity = current.next();
  }
}

#[test]
fn test_capacity_next_walks_schedule() {
  let mut capacity: Capacity = Capacity::MIN;
  let mut visited: Vec<usize> = vec![capacity.as_usize()];

  while let Some(next) = capacity.next() {
    assert!(next > capacity);
    assert_eq!(next.rank(), capacity.rank() + 1);

    capacity = next;
    visited.push(capacity.as_usize());
  }

  assert_eq!(capacity, Capacity::MAX);
  assert_eq!(visited, SCHEDULE);
}

#[test]
fn test_schedule_strictly_increasing() {
  for pair in SCHEDULE.windows(2) {
    assert!(pair[0] < pair[1], "invalid schedule: {pair:?}");
  }
}

#[test]
fn test_schedule_primes() {
  for &value in SCHEDULE {
    assert!(is_prime(value), "invalid schedule: {value} is not prime");
  }
}

#[test]
fn test_default_params() {
  assert_eq!(DefaultParams::HASH_BASE, 31);
  assert_eq!(DefaultParams::CAPACITY, Capacity::DEF);
}

#[test]
fn test_const_params() {
  each_capacity!({
    assert!(
      SCHEDULE.contains(&P::CAPACITY.as_usize()),
      "invalid params: capacity off schedule - {:?}",
      P::debug(),
    );

    assert_eq!(P::HASH_BASE, 31);
  });
}

#[test]
fn test_debug_params() {
  let debug: String = format!("{:?}", DefaultParams);

  assert!(debug.contains("HASH_BASE: 31"), "{debug}");
  assert!(debug.contains("CAPACITY: 17"), "{debug}");
}
