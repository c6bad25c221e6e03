use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{seq::SliceRandom, thread_rng, Rng};
use tour_agency::{Agency, Client, Destination, Mood, Preference};

fn random_destination(rng: &mut impl Rng, index: usize) -> Destination {
    let name = format!("Destino{}", index);
    let destination = match rng.gen_range(0..3) {
        0 => Destination::city(
            name,
            rng.gen_range(0..10),
            rng.gen_range(1_000..2_000_000),
            rng.gen_range(5.0..90.0),
        ),
        1 => {
            let provinces = ["Entre Ríos", "Corrientes", "Misiones", "La Pampa", "Salta"];
            let founded = NaiveDate::from_ymd_opt(rng.gen_range(1600..1950), 1, 1).unwrap();
            Destination::town(name, *provinces.choose(rng).unwrap(), founded)
        }
        _ => Destination::seaside_resort(
            name,
            rng.gen_range(50..2_000),
            rng.gen_bool(0.5),
            rng.gen_bool(0.5),
        ),
    };
    destination.unwrap()
}

fn random_preference(rng: &mut impl Rng) -> Preference {
    match rng.gen_range(0..5) {
        0 => Preference::None,
        1 => Preference::Calm,
        2 => Preference::Fun,
        3 => Preference::Alternating(Mood::Calm),
        _ => Preference::CombinedOr(vec![Preference::Calm, Preference::Fun]),
    }
}

// Benchmark matching a batch of clients against catalogs of different sizes
pub fn matching_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_matching");

    for tours_count in [10usize, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(tours_count),
            tours_count,
            |b, &tours_count| {
                b.iter(|| {
                    let mut rng = thread_rng();
                    let mut agency = Agency::default();
                    let departure = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

                    for i in 0..tours_count {
                        let destinations = (0..rng.gen_range(1..4))
                            .map(|j| random_destination(&mut rng, i * 4 + j))
                            .collect();
                        agency
                            .open_tour(departure, 10, destinations, rng.gen_range(50..500))
                            .unwrap();
                    }

                    for i in 0..200 {
                        let client = Client::new(format!("client{}@example.com", i), rng.gen_range(0..600))
                            .with_preference(random_preference(&mut rng));
                        let id = agency.register_client(client);
                        black_box(agency.match_client(id).unwrap());
                    }

                    black_box(agency.pending_clients().count())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, matching_benchmark);
criterion_main!(benches);
