/// Newtonian constant of gravitation, m^3 kg^-1 s^-2.
pub const G: f64 = 6.6743015e-11;

/// Seconds in one hour; run durations are given in hours.
pub const SECONDS_PER_HOUR: f64 = 3600.0;
