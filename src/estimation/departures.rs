use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::entities::{Departure, RouteEstimate};

const FIRST_DEPARTURE_MINUTE: u32 = 5 * 60;
const LAST_DEPARTURE_MINUTE: u32 = 23 * 60 + 45;
const SLOT_MINUTES: u32 = 15;

fn slot_count() -> u32 {
    (LAST_DEPARTURE_MINUTE - FIRST_DEPARTURE_MINUTE) / SLOT_MINUTES + 1
}

/// Draws up to `count` distinct departure slots on `date`, sorted by time.
pub fn synthesize_departures<R: Rng + ?Sized>(
    rng: &mut R,
    date: NaiveDate,
    route: &RouteEstimate,
    count: usize,
) -> Vec<Departure> {
    let count = count.min(slot_count() as usize);
    let slots = Uniform::new(0, slot_count());

    let mut picked = BTreeSet::new();
    while picked.len() < count {
        picked.insert(slots.sample(rng));
    }

    picked
        .into_iter()
        .map(|slot| {
            let minute_of_day = FIRST_DEPARTURE_MINUTE + slot * SLOT_MINUTES;
            let departs_at = date.and_time(NaiveTime::MIN)
                + Duration::minutes(minute_of_day as i64);

            Departure {
                departs_at,
                arrives_at: departs_at + Duration::minutes(route.total_minutes as i64),
            }
        })
        .collect()
}
