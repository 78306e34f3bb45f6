mod model;
mod params;
#[cfg(not(any(loom, shuttle)))]
mod shared;
