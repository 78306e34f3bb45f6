macro_rules! each_capacity {
  ($expr:expr) => {
    #[cfg(any(coverage, coverage_nightly, miri))]
    {
      $crate::utils::each_capacity!(
        @impl $expr,
        3, 17, 1103,
      );
    }

    #[cfg(not(any(coverage, coverage_nightly, miri)))]
    {
      $crate::utils::each_capacity!(
        @impl $expr,
        3, 7, 11, 17, 23, 29, 37, 47, 59, 71, 89, 107, 131, 163, 197, 239, 293, 353, 431, 521,
        1103, 4049, 10103,
      );
    }
  };
  (@impl $expr:expr, $($size:expr),+ $(,)?) => {
    $(
      $crate::utils::each_capacity!(@run $expr, $size);
    )+
  };
  (@run $expr:expr, $size:expr) => {{
    type P = $crate::params::ConstParams::<{ $size }>;
    $expr
  }};
}

pub(crate) use each_capacity;
