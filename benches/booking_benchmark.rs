use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_reservation::{Hotel, HotelConfig, ReservationId, RoomSpec};
use rand::{seq::SliceRandom, thread_rng};

const CATEGORIES: [&str; 4] = ["Single", "Double", "Suite", "Penthouse"];

fn inventory(size: u32) -> HotelConfig {
    HotelConfig {
        name: "Benchmark Hotel".to_string(),
        rooms: (0..size)
            .map(|i| RoomSpec {
                number: 100 + i,
                category: CATEGORIES[(i % 3) as usize].to_string(),
                price_per_night: 100.0 + f64::from(i % 3) * 50.0,
            })
            .collect(),
    }
}

// Books rooms in random categories until the inventory runs dry, then pays everything
pub fn booking_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hotel_booking");

    for size in [5u32, 50, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let Ok(mut hotel) = Hotel::with_config(inventory(size)) else {
                    return;
                };
                let mut rng = thread_rng();

                for _ in 0..size * 2 {
                    let Some(category) = CATEGORIES.choose(&mut rng) else {
                        continue;
                    };
                    let _ = hotel.make_reservation("Guest", category, 2);
                }

                let booked = hotel.reservations().len() as u32;
                for id in 1..=booked {
                    let _ = hotel.process_payment(ReservationId(id));
                }

                black_box(hotel.available_rooms().count());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, booking_benchmark);
criterion_main!(benches);
